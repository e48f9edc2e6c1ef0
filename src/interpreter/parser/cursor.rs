use std::{iter::Peekable, slice};

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::ParseResult,
    },
};

/// A forward-only cursor over a token slice.
///
/// `consume` advances, `peek` and `check` look at the current token without
/// advancing. There is no way to move backwards.
pub struct TokenCursor<'a> {
    tokens: Peekable<slice::Iter<'a, Token>>,
    /// Line of the most recently seen token, for end-of-input errors.
    line:   usize,
}

impl<'a> TokenCursor<'a> {
    /// Creates a cursor positioned at the first token.
    #[must_use]
    pub fn new(tokens: &'a [Token]) -> Self {
        Self { tokens: tokens.iter().peekable(),
               line:   tokens.first().map_or(1, |t| t.line), }
    }

    /// Returns the current token without consuming it.
    pub fn peek(&mut self) -> Option<&'a Token> {
        self.tokens.peek().copied()
    }

    /// Returns `true` if the current token has the given kind.
    pub fn check(&mut self, kind: TokenKind) -> bool {
        self.peek().is_some_and(|t| t.kind == kind)
    }

    /// Returns the current token and advances past it.
    ///
    /// # Errors
    /// `UnexpectedEndOfInput` if the slice is exhausted.
    pub fn consume(&mut self) -> ParseResult<&'a Token> {
        let token = self.tokens
                        .next()
                        .ok_or(ParseError::UnexpectedEndOfInput { line: self.line })?;
        self.line = token.line;
        Ok(token)
    }

    /// Consumes the current token if it has the given kind.
    ///
    /// # Errors
    /// `UnexpectedToken` naming `expected` if the kind differs, or
    /// `UnexpectedEndOfInput` if the slice is exhausted.
    pub fn expect(&mut self, kind: TokenKind, expected: &str) -> ParseResult<&'a Token> {
        let token = self.peek()
                        .ok_or(ParseError::UnexpectedEndOfInput { line: self.line })?;
        if token.kind != kind {
            return Err(ParseError::UnexpectedToken { expected: expected.to_string(),
                                                     found:    token.to_string(),
                                                     line:     token.line, });
        }
        self.consume()
    }

    /// Line of the most recently consumed token.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::lexer::tokenize;

    #[test]
    fn peek_does_not_advance() {
        let tokens = tokenize("exit 1;");
        let mut cursor = TokenCursor::new(&tokens);

        assert!(cursor.check(TokenKind::Exit));
        assert!(cursor.check(TokenKind::Exit));
        assert_eq!(cursor.consume().unwrap().kind, TokenKind::Exit);
        assert!(cursor.check(TokenKind::Integer));
    }

    #[test]
    fn expect_reports_the_found_token() {
        let tokens = tokenize("let 7");
        let mut cursor = TokenCursor::new(&tokens);
        cursor.consume().unwrap();

        let err = cursor.expect(TokenKind::Identifier, "identifier").unwrap_err();
        assert_eq!(err,
                   ParseError::UnexpectedToken { expected: "identifier".to_string(),
                                                 found:    "integer literal '7'".to_string(),
                                                 line:     1, });
        // A failed expect leaves the cursor in place.
        assert!(cursor.check(TokenKind::Integer));
    }

    #[test]
    fn consuming_past_the_end_is_an_error() {
        let tokens = tokenize("\n\nexit");
        let mut cursor = TokenCursor::new(&tokens);
        cursor.consume().unwrap();
        cursor.consume().unwrap();

        assert_eq!(cursor.consume().unwrap_err(),
                   ParseError::UnexpectedEndOfInput { line: 3 });
        assert_eq!(cursor.line(), 3);
    }
}
