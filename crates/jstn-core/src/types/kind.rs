use serde::{Deserialize, Serialize};

/// The primitive category of a schema node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    String,
    Number,
    Boolean,
    Null,
    Object,
    Array,
    /// Matches any well-formed JSON value. Only honored in lenient validation.
    Any,
}

impl Kind {
    /// Returns the schema keyword for scalar kinds.
    ///
    /// Objects and arrays are written with punctuation rather than a keyword,
    /// so they return `None`.
    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            Self::String => Some("string"),
            Self::Number => Some("number"),
            Self::Boolean => Some("boolean"),
            Self::Null => Some("null"),
            Self::Any => Some("any"),
            Self::Object | Self::Array => None,
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Object => write!(f, "object"),
            Self::Array => write!(f, "array"),
            scalar => write!(f, "{}", scalar.keyword().unwrap_or_default()),
        }
    }
}
