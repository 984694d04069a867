//! # jstn-core
//!
//! The schema tree of JSON Type Notation (JSTN) and a streaming validator
//! that checks JSON documents against it.
//!
//! # Example
//!
//! ```
//! use jstn_core::types::Type;
//! use jstn_core::validate::{strictly_valid, valid};
//!
//! let schema = Type::object([
//!     ("name", Type::string()),
//!     ("age", Type::number().into_optional()),
//! ]);
//!
//! assert!(valid(&schema, r#"{"name": "Ada", "team": "core"}"#));
//! assert!(!strictly_valid(&schema, r#"{"name": "Ada", "team": "core"}"#));
//! assert!(!valid(&schema, r#"{"age": 36}"#));
//! ```

pub mod error;
pub mod types;
pub mod validate;

pub use error::ValidationError;
pub use types::{Kind, Type};
pub use validate::{check, strictly_valid, valid, validate, Mode};
