use logos::Logos;

/// Tokens produced by the JSTN lexer.
///
/// Whitespace is not skipped: newlines terminate object properties, so both
/// whitespace runs and newline runs are emitted and the parser decides where
/// they matter.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// A run of spaces and tabs.
    #[regex(r"[ \t]+")]
    Whitespace,

    /// A run of carriage returns and line feeds.
    #[regex(r"[\r\n]+")]
    Newline,

    // -- Keywords (ASCII case-insensitive) --
    #[token("string", ignore(ascii_case))]
    String,

    #[token("number", ignore(ascii_case))]
    Number,

    #[token("boolean", ignore(ascii_case))]
    Boolean,

    #[token("null", ignore(ascii_case))]
    Null,

    #[token("any", ignore(ascii_case))]
    Any,

    // -- Punctuation --
    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    #[token(":")]
    Colon,

    #[token(";")]
    Semicolon,

    #[token("?")]
    Question,

    /// A property name: an ASCII letter followed by letters, digits, or underscores.
    /// Keywords take precedence when the whole word matches one.
    #[regex(r"[a-zA-Z][a-zA-Z0-9_]*")]
    Ident,
}

impl Token {
    /// Returns a human-readable description of this token kind.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Whitespace => "whitespace",
            Self::Newline => "newline",
            Self::String => "'string'",
            Self::Number => "'number'",
            Self::Boolean => "'boolean'",
            Self::Null => "'null'",
            Self::Any => "'any'",
            Self::LBrace => "'{'",
            Self::RBrace => "'}'",
            Self::LBracket => "'['",
            Self::RBracket => "']'",
            Self::Colon => "':'",
            Self::Semicolon => "';'",
            Self::Question => "'?'",
            Self::Ident => "identifier",
        }
    }

    /// Returns true for tokens that carry no meaning between declarations.
    pub fn is_trivia(&self, newlines_significant: bool) -> bool {
        match self {
            Self::Whitespace => true,
            Self::Newline => !newlines_significant,
            _ => false,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}
