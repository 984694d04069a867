use std::collections::BTreeMap;

use jstn_core::types::Type;

use crate::error::{ParseError, Span};
use crate::lexer::{Lexeme, Lexer, SpannedToken};
use crate::token::Token;

/// Deepest nesting of arrays and objects the parser accepts.
pub const MAX_DEPTH: usize = 128;

/// Whether a newline counts as a token at the current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Newlines {
    Skip,
    Keep,
}

/// Recursive descent parser for the JSTN grammar.
///
/// Pulls lexemes on demand and keeps a single slot of pushback, so at most
/// one token of lookahead is ever buffered.
struct Parser<'src> {
    lexer: Lexer<'src>,
    pushed_back: Option<Lexeme>,
    depth: usize,
}

impl<'src> Parser<'src> {
    fn new(source: &'src str) -> Self {
        Self {
            lexer: Lexer::new(source),
            pushed_back: None,
            depth: 0,
        }
    }

    // -- Cursor helpers --

    fn scan(&mut self) -> Lexeme {
        self.pushed_back
            .take()
            .unwrap_or_else(|| self.lexer.scan())
    }

    fn unscan(&mut self, lexeme: Lexeme) {
        debug_assert!(self.pushed_back.is_none(), "pushback slot already full");
        self.pushed_back = Some(lexeme);
    }

    /// Scans past whitespace (and newlines, when `newlines` is `Skip`).
    fn scan_significant(&mut self, newlines: Newlines) -> Lexeme {
        loop {
            let lexeme = self.scan();
            match lexeme.token() {
                Some(token) if token.is_trivia(newlines == Newlines::Keep) => continue,
                _ => return lexeme,
            }
        }
    }

    fn expect(&mut self, expected: Token) -> Result<SpannedToken, ParseError> {
        let lexeme = self.scan_significant(Newlines::Skip);
        match lexeme {
            Lexeme::Token(st) if st.token == expected => Ok(st),
            other => Err(unexpected(expected.description(), other)),
        }
    }

    // -- Grammar productions --

    /// schema = type (whitespace | newline)* EOF
    fn parse_schema(&mut self) -> Result<Type, ParseError> {
        let schema = self.parse_type()?;
        match self.scan_significant(Newlines::Skip) {
            Lexeme::Eof { .. } => Ok(schema),
            Lexeme::Illegal { text, span } => Err(ParseError::IllegalCharacter { text, span }),
            other => Err(ParseError::TrailingInput {
                found: other.describe(),
                span: other.span(),
            }),
        }
    }

    /// type = type_decl "?"?
    ///
    /// Spaces may sit between the declaration and its `?`; a newline may not,
    /// since it terminates an enclosing property.
    fn parse_type(&mut self) -> Result<Type, ParseError> {
        let mut ty = self.parse_type_decl()?;

        let next = self.scan_significant(Newlines::Keep);
        if next.token() == Some(Token::Question) {
            ty.optional = true;
        } else {
            self.unscan(next);
        }

        Ok(ty)
    }

    /// type_decl = "string" | "number" | "boolean" | "null" | "any" | array | object
    fn parse_type_decl(&mut self) -> Result<Type, ParseError> {
        let lexeme = self.scan_significant(Newlines::Skip);
        match lexeme.token() {
            Some(Token::String) => Ok(Type::string()),
            Some(Token::Number) => Ok(Type::number()),
            Some(Token::Boolean) => Ok(Type::boolean()),
            Some(Token::Null) => Ok(Type::null()),
            Some(Token::Any) => Ok(Type::any()),
            Some(Token::LBracket) => self.nested(lexeme.span(), Self::parse_array),
            Some(Token::LBrace) => self.nested(lexeme.span(), Self::parse_object),
            _ => Err(unexpected(
                "type ('string', 'number', 'boolean', 'null', 'any', '[' or '{')",
                lexeme,
            )),
        }
    }

    /// Runs a container production one level deeper, failing past [`MAX_DEPTH`].
    fn nested(
        &mut self,
        open: Span,
        production: fn(&mut Self) -> Result<Type, ParseError>,
    ) -> Result<Type, ParseError> {
        if self.depth == MAX_DEPTH {
            return Err(ParseError::NestingTooDeep {
                limit: MAX_DEPTH,
                span: open,
            });
        }
        self.depth += 1;
        let result = production(self);
        self.depth -= 1;
        result
    }

    /// array = "[" type? "]"   ("[" already consumed)
    fn parse_array(&mut self) -> Result<Type, ParseError> {
        let next = self.scan_significant(Newlines::Skip);
        if next.token() == Some(Token::RBracket) {
            return Ok(Type::empty_array());
        }
        self.unscan(next);

        let items = self.parse_type()?;
        self.expect(Token::RBracket)?;
        Ok(Type::array(items))
    }

    /// object = "{" property* "}"   ("{" already consumed)
    ///
    /// Duplicate property names are not rejected; the last declaration wins.
    fn parse_object(&mut self) -> Result<Type, ParseError> {
        let mut properties = BTreeMap::new();

        loop {
            let lexeme = self.scan_significant(Newlines::Skip);
            let name = match lexeme {
                Lexeme::Token(st) if st.token == Token::RBrace => break,
                Lexeme::Token(st) if st.token == Token::Ident => st.text,
                other => return Err(unexpected("property name or '}'", other)),
            };

            self.expect(Token::Colon)?;
            let ty = self.parse_type()?;
            self.parse_property_end(&name)?;

            if properties.insert(name.clone(), ty).is_some() {
                tracing::debug!(property = %name, "duplicate property replaces earlier declaration");
            }
        }

        Ok(Type::object(properties))
    }

    /// property_end = ";" | newline | lookahead "}"
    fn parse_property_end(&mut self, property: &str) -> Result<(), ParseError> {
        let lexeme = self.scan_significant(Newlines::Keep);
        match lexeme.token() {
            Some(Token::Semicolon | Token::Newline) => Ok(()),
            Some(Token::RBrace) => {
                self.unscan(lexeme);
                Ok(())
            }
            Some(_) => Err(ParseError::InvalidPropertyTerminator {
                property: property.to_string(),
                found: lexeme.describe(),
                span: lexeme.span(),
            }),
            None => Err(unexpected("';', newline, or '}'", lexeme)),
        }
    }
}

/// Builds the error for a lexeme that does not fit the grammar at this point.
fn unexpected(expected: &str, found: Lexeme) -> ParseError {
    match found {
        Lexeme::Eof { .. } => ParseError::UnexpectedEndOfInput {
            expected: expected.to_string(),
        },
        Lexeme::Illegal { text, span } => ParseError::IllegalCharacter { text, span },
        other => ParseError::UnexpectedToken {
            expected: expected.to_string(),
            found: other.describe(),
            span: other.span(),
        },
    }
}

/// Parse JSTN schema text into a schema tree.
///
/// Whitespace and newlines around tokens are ignored, except that inside an
/// object each property must end with `;`, a newline, or the closing `}`.
///
/// # Errors
///
/// Returns the first [`ParseError`] encountered. No partial tree is produced.
pub fn parse(source: &str) -> Result<Type, ParseError> {
    Parser::new(source).parse_schema().map_err(|err| {
        tracing::debug!(error = %err, "schema parse failed");
        err
    })
}

/// Parse a schema that is part of the program itself.
///
/// # Panics
///
/// Panics if `source` is not valid schema text. Use [`parse`] for input that
/// comes from outside the program.
pub fn parse_builtin(source: &str) -> Type {
    match parse(source) {
        Ok(ty) => ty,
        Err(err) => panic!("invalid built-in schema {source:?}: {err}"),
    }
}
