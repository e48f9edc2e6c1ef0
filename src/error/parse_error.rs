use thiserror::Error;

/// Represents all errors that can occur while parsing.
///
/// Every variant belongs to the syntax-error kind. Parsing stops at the
/// first one; no partial program is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Found a token other than the one the grammar requires here.
    #[error("Error on line {line}: Expected {expected}, found {found}.")]
    UnexpectedToken {
        /// What the grammar required at this position.
        expected: String,
        /// The token encountered.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Reached the end of the token sequence in the middle of a statement.
    #[error("Error on line {line}: Unexpected end of input.")]
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An integer literal does not fit a 32-bit signed integer.
    #[error("Error on line {line}: Literal {literal} is too large.")]
    LiteralTooLarge {
        /// The literal text as written.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl ParseError {
    /// The source line the error points at.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::UnexpectedEndOfInput { line }
            | Self::LiteralTooLarge { line, .. } => *line,
        }
    }
}
