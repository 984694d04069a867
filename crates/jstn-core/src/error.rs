/// Why a document was rejected by the validator.
///
/// This is a diagnostic aid only. The validation contract is the boolean
/// verdict, and message text may change between releases.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ValidationError {
    /// The document is empty but the root schema is not optional.
    #[error("document is empty but the schema requires a value")]
    MissingValue,

    /// A value did not have the shape the schema requires.
    #[error("mismatch at {path}: {message}")]
    Mismatch { path: String, message: String },

    /// The document is not well-formed JSON.
    #[error("malformed JSON: {message}")]
    Malformed { message: String },

    /// The root value is followed by more data.
    #[error("trailing data after the root value at line {line}, column {column}")]
    TrailingData { line: usize, column: usize },
}
