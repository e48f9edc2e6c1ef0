use tracing::debug;

use crate::{
    ast::{Node, Program},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{cursor::TokenCursor, statement::parse_statement},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete program.
///
/// Statements are parsed one after another until the end-of-input token is
/// reached. The first error aborts the whole parse; no partial program is
/// returned.
///
/// Grammar: `program := statement* EOF`
///
/// # Parameters
/// - `tokens`: The token sequence produced by the lexer.
///
/// # Returns
/// The top-level statements in source order.
///
/// # Errors
/// - `UnexpectedToken` if a statement is malformed or starts with anything
///   other than `let` or `exit`.
/// - `UnexpectedEndOfInput` if the sequence ends without an end-of-input
///   token.
/// - `LiteralTooLarge` if an integer literal does not fit an `i32`.
///
/// # Example
/// ```
/// use tally::interpreter::{lexer::tokenize, parser::core::parse_program};
///
/// let program = parse_program(&tokenize("let x = 1; exit x;")).unwrap();
/// assert_eq!(program.len(), 2);
/// ```
pub fn parse_program(tokens: &[Token]) -> ParseResult<Program> {
    let mut cursor = TokenCursor::new(tokens);
    let mut statements = Vec::new();

    while !cursor.check(TokenKind::EndOfInput) {
        statements.push(parse_statement(&mut cursor)?);
    }

    debug_assert!(statements.iter().all(Node::is_statement));
    debug!(statements = statements.len(), "parsed program");
    Ok(statements)
}
