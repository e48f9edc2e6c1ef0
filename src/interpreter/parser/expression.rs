use crate::{
    ast::{BinaryOperator, Node},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::{core::ParseResult, cursor::TokenCursor},
    },
};

/// Parses an operator chain.
///
/// Every operator has the same precedence and binds to the left, so
/// `2 + 3 * 4` parses as `(2 + 3) * 4`. Existing programs rely on this.
///
/// Grammar: `expression := primary (("+" | "-" | "*" | "/") primary)*`
///
/// # Parameters
/// - `cursor`: Cursor positioned at the first operand.
///
/// # Returns
/// A single primary node or a left-leaning tree of [`Node::BinaryExpr`].
pub fn parse_expression(cursor: &mut TokenCursor<'_>) -> ParseResult<Node> {
    let mut left = parse_primary(cursor)?;

    while let Some((op, line)) =
        cursor.peek()
              .and_then(|token| token_to_binary_operator(token.kind).map(|op| (op, token.line)))
    {
        cursor.consume()?;
        let right = parse_primary(cursor)?;
        left = Node::BinaryExpr { op,
                                  left: Box::new(left),
                                  right: Box::new(right),
                                  line };
    }

    Ok(left)
}

/// Parses an integer literal or an identifier.
///
/// Grammar: `primary := INTEGER | IDENTIFIER`
///
/// # Errors
/// - `UnexpectedToken` for any other token.
/// - `LiteralTooLarge` if the digits do not fit an `i32`.
pub fn parse_primary(cursor: &mut TokenCursor<'_>) -> ParseResult<Node> {
    let token = cursor.peek()
                      .ok_or(ParseError::UnexpectedEndOfInput { line: cursor.line() })?;

    match token.kind {
        TokenKind::Integer => {
            cursor.consume()?;
            let value =
                token.text
                     .parse::<i32>()
                     .map_err(|_| ParseError::LiteralTooLarge { literal: token.text.clone(),
                                                                line:    token.line, })?;
            Ok(Node::IntLiteral { value,
                                  line: token.line })
        },
        TokenKind::Identifier => {
            cursor.consume()?;
            Ok(Node::Identifier { name: token.text.clone(),
                                  line: token.line, })
        },
        _ => Err(ParseError::UnexpectedToken { expected: "integer literal or identifier".to_string(),
                                               found:    token.to_string(),
                                               line:     token.line, }),
    }
}

/// Maps an operator token to its [`BinaryOperator`].
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Star => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::interpreter::lexer::tokenize;

    fn expression(source: &str) -> ParseResult<Node> {
        let tokens = tokenize(source);
        parse_expression(&mut TokenCursor::new(&tokens))
    }

    #[test]
    fn single_primary() {
        assert_eq!(expression("42").unwrap(), Node::IntLiteral { value: 42, line: 1 });
        assert_eq!(expression("abc").unwrap(),
                   Node::Identifier { name: "abc".to_string(),
                                      line: 1, });
    }

    #[test]
    fn chain_stops_at_non_operator() {
        let tokens = tokenize("a - 1 ;");
        let mut cursor = TokenCursor::new(&tokens);

        assert_eq!(parse_expression(&mut cursor).unwrap().to_string(), "(a - 1)");
        assert!(cursor.check(TokenKind::Semicolon));
    }

    #[test]
    fn long_chain_is_left_leaning() {
        assert_eq!(expression("8 / 2 / 2 - 1 * 3").unwrap().to_string(),
                   "((((8 / 2) / 2) - 1) * 3)");
    }

    #[test]
    fn keyword_is_not_an_operand() {
        assert!(matches!(expression("let").unwrap_err(),
                         ParseError::UnexpectedToken { ref found, .. } if found == "'let'"));
    }

    #[test]
    fn operators_map_one_to_one() {
        assert_eq!(token_to_binary_operator(TokenKind::Plus), Some(BinaryOperator::Add));
        assert_eq!(token_to_binary_operator(TokenKind::Minus), Some(BinaryOperator::Sub));
        assert_eq!(token_to_binary_operator(TokenKind::Star), Some(BinaryOperator::Mul));
        assert_eq!(token_to_binary_operator(TokenKind::Slash), Some(BinaryOperator::Div));
        assert_eq!(token_to_binary_operator(TokenKind::Equals), None);
    }
}
