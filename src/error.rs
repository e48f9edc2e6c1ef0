use thiserror::Error;

/// Parsing errors.
///
/// Defines the syntax errors raised while turning tokens into an AST: a
/// statement that does not start with `let` or `exit`, a missing `=`, `;` or
/// operand, a truncated token sequence, or an integer literal out of range.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised during evaluation: unbound names, division by
/// zero and unknown operators.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Result type for running a whole program through the pipeline.
pub type Result<T> = std::result::Result<T, Error>;

/// Any failure of the lex, parse and evaluate pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The source did not parse.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The program failed while being evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

/// The closed set of failure kinds callers can match on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Any [`ParseError`].
    Syntax,
    /// [`RuntimeError::UnboundName`].
    UnboundName,
    /// [`RuntimeError::DivisionByZero`].
    DivisionByZero,
    /// [`RuntimeError::UnknownOperator`].
    UnknownOperator,
}

impl Error {
    /// Classifies the error.
    ///
    /// ## Example
    /// ```
    /// use tally::error::{Error, ErrorKind, RuntimeError};
    ///
    /// let err = Error::from(RuntimeError::DivisionByZero { line: 1 });
    /// assert_eq!(err.kind(), ErrorKind::DivisionByZero);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(_) => ErrorKind::Syntax,
            Self::Runtime(RuntimeError::UnboundName { .. }) => ErrorKind::UnboundName,
            Self::Runtime(RuntimeError::DivisionByZero { .. }) => ErrorKind::DivisionByZero,
            Self::Runtime(RuntimeError::UnknownOperator { .. }) => ErrorKind::UnknownOperator,
        }
    }
}
