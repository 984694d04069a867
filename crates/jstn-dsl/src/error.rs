use std::fmt;

/// A byte-offset span in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    /// Creates a new span from start (inclusive) to end (exclusive).
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Errors that occur while parsing schema text.
///
/// Every error aborts the parse; no partial tree is produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ParseError {
    /// The lexer met a character that starts no token.
    #[error("illegal character '{text}' at {span}")]
    IllegalCharacter { text: String, span: Span },

    /// The parser met a token other than the one the grammar requires.
    #[error("unexpected token at {span}: expected {expected}, found {found}")]
    UnexpectedToken {
        expected: String,
        found: String,
        span: Span,
    },

    /// The input ended while a declaration was still open.
    #[error("unexpected end of input: expected {expected}")]
    UnexpectedEndOfInput { expected: String },

    /// A property was followed by something other than `;`, a newline, or `}`.
    #[error(
        "property '{property}' at {span} must end with ';', a newline, or '}}', found {found}"
    )]
    InvalidPropertyTerminator {
        property: String,
        found: String,
        span: Span,
    },

    /// The root declaration is followed by more tokens.
    #[error("unexpected {found} at {span} after the end of the schema")]
    TrailingInput { found: String, span: Span },

    /// Arrays and objects are nested deeper than the parser accepts.
    #[error("nesting deeper than {limit} levels at {span}")]
    NestingTooDeep { limit: usize, span: Span },
}

impl ParseError {
    /// Returns the source span the error points at, if any.
    pub fn span(&self) -> Option<Span> {
        match self {
            Self::IllegalCharacter { span, .. }
            | Self::UnexpectedToken { span, .. }
            | Self::InvalidPropertyTerminator { span, .. }
            | Self::TrailingInput { span, .. }
            | Self::NestingTooDeep { span, .. } => Some(*span),
            Self::UnexpectedEndOfInput { .. } => None,
        }
    }
}
