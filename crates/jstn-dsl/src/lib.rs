//! # jstn-dsl
//!
//! Parser and generator for JSON Type Notation (JSTN) schema text.
//!
//! This crate provides:
//! - A lexer that classifies schema text into tokens, keeping newlines
//! - A recursive descent parser that produces a [`jstn_core::types::Type`] tree
//! - A generator that renders a tree back to canonical or pretty text
//! - Round-trip fidelity: `parse(generate(tree))` produces an equal tree
//! - A serde adapter for embedding schemas as JSON strings
//!
//! # Example
//!
//! ```
//! use jstn_dsl::{canonical, parse, pretty};
//!
//! let source = "{
//!     firstName: string
//!     age: number?
//! }";
//!
//! let schema = parse(source).expect("parse failed");
//! assert_eq!(schema.properties.len(), 2);
//!
//! assert_eq!(canonical(&schema), "{age:number?;firstName:string}");
//! assert_eq!(pretty(&schema), "{\n  age: number?\n  firstName: string\n}");
//! assert_eq!(parse(&canonical(&schema)).unwrap(), schema);
//! ```

pub mod embed;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod printer;
pub mod token;

pub use error::{ParseError, Span};
pub use parser::{parse, parse_builtin, MAX_DEPTH};
pub use printer::{canonical, generate, pretty, Canonical, Format};
