//! Embed schema trees in serde documents as canonical schema strings.
//!
//! ```
//! use jstn_core::types::Type;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Endpoint {
//!     path: String,
//!     #[serde(with = "jstn_dsl::embed")]
//!     response: Type,
//! }
//!
//! let json = r#"{"path":"/people","response":"[{name:string}]"}"#;
//! let endpoint: Endpoint = serde_json::from_str(json).unwrap();
//! assert!(endpoint.response.is_array());
//! assert_eq!(serde_json::to_string(&endpoint).unwrap(), json);
//! ```

use jstn_core::types::Type;
use serde::de::{self, Deserialize, Deserializer};
use serde::Serializer;

use crate::parser::parse;
use crate::printer::canonical;

/// Serializes `schema` as its canonical text.
///
/// # Errors
///
/// Returns whatever error the serializer reports for a string.
pub fn serialize<S>(schema: &Type, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&canonical(schema))
}

/// Deserializes a schema from a string holding schema text.
///
/// # Errors
///
/// Fails if the value is not a string or the string is not valid schema text.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Type, D::Error>
where
    D: Deserializer<'de>,
{
    let source = String::deserialize(deserializer)?;
    parse(&source).map_err(de::Error::custom)
}

/// The same encoding for `Option<Type>`, with `None` as `null`.
pub mod option {
    use super::*;

    /// # Errors
    ///
    /// Returns whatever error the serializer reports.
    pub fn serialize<S>(schema: &Option<Type>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match schema {
            Some(schema) => serializer.serialize_some(&canonical(schema)),
            None => serializer.serialize_none(),
        }
    }

    /// # Errors
    ///
    /// Fails if the value is neither `null` nor a string of valid schema text.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Type>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|source| parse(&source).map_err(de::Error::custom))
            .transpose()
    }
}
