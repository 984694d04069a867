use logos::Logos;

use crate::error::Span;
use crate::token::Token;

/// A token paired with its source span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpannedToken {
    pub token: Token,
    pub span: Span,
    pub text: String,
}

/// One unit of lexer output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lexeme {
    Token(SpannedToken),
    /// A character that starts no token. The parser reports it as an error.
    Illegal { text: String, span: Span },
    /// End of input. Repeated forever once reached.
    Eof { offset: usize },
}

impl Lexeme {
    /// Returns the token kind, or `None` for illegal characters and end of input.
    pub fn token(&self) -> Option<Token> {
        match self {
            Self::Token(st) => Some(st.token),
            Self::Illegal { .. } | Self::Eof { .. } => None,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Self::Token(st) => st.span,
            Self::Illegal { span, .. } => *span,
            Self::Eof { offset } => Span::new(*offset, *offset),
        }
    }

    /// Describes the lexeme for error messages, e.g. `identifier ('age')`.
    pub fn describe(&self) -> String {
        match self {
            Self::Token(st) => match st.token {
                Token::Ident | Token::Whitespace => {
                    format!("{} ('{}')", st.token.description(), st.text)
                }
                _ => st.token.description().to_string(),
            },
            Self::Illegal { text, .. } => format!("illegal character '{text}'"),
            Self::Eof { .. } => "end of input".to_string(),
        }
    }
}

/// Streaming lexer over schema source text.
///
/// Each call to [`Lexer::scan`] yields the next lexeme; after the input is
/// exhausted every call yields [`Lexeme::Eof`].
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, Token>,
    len: usize,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            inner: Token::lexer(source),
            len: source.len(),
        }
    }

    pub fn scan(&mut self) -> Lexeme {
        let Some(result) = self.inner.next() else {
            return Lexeme::Eof { offset: self.len };
        };

        let range = self.inner.span();
        let span = Span::new(range.start, range.end);
        let text = self.inner.slice().to_string();

        let lexeme = match result {
            Ok(token) => Lexeme::Token(SpannedToken { token, span, text }),
            Err(()) => Lexeme::Illegal { text, span },
        };
        tracing::trace!(?lexeme, "scanned");
        lexeme
    }
}

/// Tokenizes schema source text into every lexeme before end of input.
///
/// Illegal characters are kept in the output as [`Lexeme::Illegal`].
pub fn tokenize(source: &str) -> Vec<Lexeme> {
    let mut lexer = Lexer::new(source);
    let mut lexemes = Vec::new();
    loop {
        match lexer.scan() {
            Lexeme::Eof { .. } => return lexemes,
            lexeme => lexemes.push(lexeme),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Option<Token>> {
        tokenize(source).iter().map(Lexeme::token).collect()
    }

    #[test]
    fn tokenize_simple_object() {
        let lexemes = tokenize("{name:string}");
        assert_eq!(lexemes.len(), 5);
        match &lexemes[1] {
            Lexeme::Token(st) => {
                assert_eq!(st.token, Token::Ident);
                assert_eq!(st.text, "name");
            }
            other => panic!("expected identifier, got {other:?}"),
        }
        assert_eq!(lexemes[3].token(), Some(Token::String));
    }

    #[test]
    fn tokenize_preserves_spans() {
        let lexemes = tokenize("age: number");
        assert_eq!(lexemes[0].span(), Span::new(0, 3));
        assert_eq!(lexemes[1].span(), Span::new(3, 4));
        assert_eq!(lexemes[3].span(), Span::new(5, 11));
    }

    #[test]
    fn keyword_keeps_original_spelling() {
        let lexemes = tokenize("NUMBER");
        match &lexemes[0] {
            Lexeme::Token(st) => {
                assert_eq!(st.token, Token::Number);
                assert_eq!(st.text, "NUMBER");
            }
            other => panic!("expected keyword, got {other:?}"),
        }
    }

    #[test]
    fn illegal_character_is_a_lexeme() {
        let lexemes = tokenize("{a:#}");
        assert_eq!(
            lexemes[3],
            Lexeme::Illegal {
                text: "#".into(),
                span: Span::new(3, 4),
            }
        );
        assert_eq!(lexemes[4].token(), Some(Token::RBrace));
    }

    #[test]
    fn leading_digit_is_illegal() {
        assert_eq!(kinds("1a"), vec![None, Some(Token::Ident)]);
    }

    #[test]
    fn whitespace_and_newlines_are_tokens() {
        assert_eq!(
            kinds("a \n b"),
            vec![
                Some(Token::Ident),
                Some(Token::Whitespace),
                Some(Token::Newline),
                Some(Token::Whitespace),
                Some(Token::Ident),
            ]
        );
    }

    #[test]
    fn eof_repeats_forever() {
        let mut lexer = Lexer::new("?");
        assert_eq!(lexer.scan().token(), Some(Token::Question));
        for _ in 0..3 {
            assert_eq!(lexer.scan(), Lexeme::Eof { offset: 1 });
        }
    }

    #[test]
    fn tokenize_empty_input() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn describe_lexemes() {
        let lexemes = tokenize("age ;%");
        assert_eq!(lexemes[0].describe(), "identifier ('age')");
        assert_eq!(lexemes[2].describe(), "';'");
        assert_eq!(lexemes[3].describe(), "illegal character '%'");
        assert_eq!(Lexeme::Eof { offset: 0 }.describe(), "end of input");
    }
}
