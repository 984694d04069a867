//! Streaming validation of JSON documents against a schema tree.
//!
//! The document is pulled token by token from `serde_json`'s decoder and never
//! materialized. Only a pass/fail verdict is part of the contract; [`check`]
//! additionally reports why a document was rejected.

mod seed;

use serde::de::DeserializeSeed;
use serde_json::error::Category;

use crate::error::ValidationError;
use crate::types::Type;

use self::seed::TypeSeed;

/// How undeclared object properties and `any` values are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Undeclared properties are accepted as if typed `any`.
    #[default]
    Lenient,
    /// Undeclared properties and `any` values are rejected.
    Strict,
}

/// Returns true if `document` satisfies `schema` in lenient mode.
pub fn valid(schema: &Type, document: impl AsRef<[u8]>) -> bool {
    validate(schema, document, Mode::Lenient)
}

/// Returns true if `document` satisfies `schema` in strict mode.
pub fn strictly_valid(schema: &Type, document: impl AsRef<[u8]>) -> bool {
    validate(schema, document, Mode::Strict)
}

/// Returns true if `document` satisfies `schema` under `mode`.
///
/// Rejections are reported through `tracing` at debug level.
pub fn validate(schema: &Type, document: impl AsRef<[u8]>, mode: Mode) -> bool {
    match check(schema, document, mode) {
        Ok(()) => true,
        Err(err) => {
            tracing::debug!(?mode, error = %err, "document rejected");
            false
        }
    }
}

/// Validates `document` against `schema`, returning the first reason for
/// rejection.
///
/// An empty (or whitespace-only) document stands for an absent value and is
/// accepted exactly when the root schema is optional. Otherwise the document
/// must hold a single JSON value with nothing but whitespace after it.
///
/// # Errors
///
/// Returns a [`ValidationError`] describing the first mismatch found.
pub fn check(
    schema: &Type,
    document: impl AsRef<[u8]>,
    mode: Mode,
) -> Result<(), ValidationError> {
    let document = document.as_ref();

    if is_blank(document) {
        return if schema.optional {
            Ok(())
        } else {
            Err(ValidationError::MissingValue)
        };
    }

    let mut de = serde_json::Deserializer::from_slice(document);
    let mut track = serde_path_to_error::Track::new();
    let result = TypeSeed::new(schema, mode)
        .deserialize(serde_path_to_error::Deserializer::new(&mut de, &mut track));

    if let Err(err) = result {
        return Err(classify(err, track.path()));
    }

    de.end().map_err(|err| ValidationError::TrailingData {
        line: err.line(),
        column: err.column(),
    })
}

fn is_blank(document: &[u8]) -> bool {
    document
        .iter()
        .all(|b| matches!(b, b' ' | b'\t' | b'\n' | b'\r'))
}

fn classify(err: serde_json::Error, path: serde_path_to_error::Path) -> ValidationError {
    match err.classify() {
        Category::Data => ValidationError::Mismatch {
            path: path.to_string(),
            message: err.to_string(),
        },
        Category::Syntax | Category::Eof | Category::Io => ValidationError::Malformed {
            message: err.to_string(),
        },
    }
}
