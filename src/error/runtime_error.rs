use thiserror::Error;

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// Tried to read a variable that no `let` has bound.
    #[error("Error on line {line}: Unbound name '{name}'.")]
    UnboundName {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted division by zero.
    #[error("Error on line {line}: Division by zero.")]
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An operator symbol outside `+ - * /`.
    #[error("Unknown operator '{symbol}'.")]
    UnknownOperator {
        /// The offending symbol.
        symbol: String,
    },
}
