use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::{core::ParseResult, cursor::TokenCursor, expression::parse_expression},
    },
};

/// Parses a single statement.
///
/// A statement is either a `let` or an `exit` statement. There is no
/// expression-statement form, so any other leading token is an error.
///
/// Grammar: `statement := let_statement | exit_statement`
///
/// # Parameters
/// - `cursor`: Cursor positioned at the first token of the statement.
///
/// # Returns
/// A [`Node::LetStatement`] or [`Node::ExitStatement`].
pub fn parse_statement(cursor: &mut TokenCursor<'_>) -> ParseResult<Node> {
    let token = cursor.peek()
                      .ok_or(ParseError::UnexpectedEndOfInput { line: cursor.line() })?;

    match token.kind {
        TokenKind::Let => parse_let(cursor),
        TokenKind::Exit => parse_exit(cursor),
        _ => Err(ParseError::UnexpectedToken { expected: "'let' or 'exit'".to_string(),
                                               found:    token.to_string(),
                                               line:     token.line, }),
    }
}

/// Parses `let <identifier> = <expression> ;`.
///
/// # Errors
/// `UnexpectedToken` if the identifier, `=` or `;` is missing, plus any error
/// from the value expression.
fn parse_let(cursor: &mut TokenCursor<'_>) -> ParseResult<Node> {
    let line = cursor.expect(TokenKind::Let, "'let'")?.line;
    let name = cursor.expect(TokenKind::Identifier, "identifier")?.text.clone();
    cursor.expect(TokenKind::Equals, "'='")?;
    let value = parse_expression(cursor)?;
    cursor.expect(TokenKind::Semicolon, "';'")?;

    Ok(Node::LetStatement { name,
                            value: Box::new(value),
                            line })
}

/// Parses `exit <expression> ;`.
fn parse_exit(cursor: &mut TokenCursor<'_>) -> ParseResult<Node> {
    let line = cursor.expect(TokenKind::Exit, "'exit'")?.line;
    let value = parse_expression(cursor)?;
    cursor.expect(TokenKind::Semicolon, "';'")?;

    Ok(Node::ExitStatement { value: Box::new(value),
                             line })
}
