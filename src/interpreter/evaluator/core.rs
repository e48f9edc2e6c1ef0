use std::io::Write;

use tracing::{debug, trace};

use crate::{
    ast::{Node, Program},
    error::RuntimeError,
    interpreter::evaluator::environment::Environment,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// How the evaluation of a node finished.
///
/// An exit-statement is not an error and not an ordinary value either: it
/// has to stop everything that encloses it. `Exit` carries that request up
/// to whoever runs the program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Evaluation produced a value.
    Value(i32),
    /// An exit-statement was reached with this exit code.
    Exit(i32),
}

/// Stores the runtime evaluation state.
///
/// An `Evaluator` owns the [`Environment`] that `let` writes to and
/// identifiers read from. The environment survives across calls, so
/// evaluating several programs with one `Evaluator` behaves like one
/// interactive session.
#[derive(Debug, Default)]
pub struct Evaluator {
    environment: Environment,
}

impl Evaluator {
    /// Creates an evaluator with an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the current bindings.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Evaluates a single node.
    ///
    /// Operands are always evaluated left before right. A `let` binds only
    /// after its value evaluated successfully, so a failure never leaves a
    /// partial binding behind.
    ///
    /// # Parameters
    /// - `node`: The node to evaluate.
    ///
    /// # Returns
    /// `Outcome::Value` with the node's value, or `Outcome::Exit` if an
    /// exit-statement was reached.
    ///
    /// # Errors
    /// - `UnboundName` for an identifier no `let` has bound.
    /// - `DivisionByZero` for `/` with a zero right operand.
    pub fn eval(&mut self, node: &Node) -> EvalResult<Outcome> {
        match node {
            Node::IntLiteral { value, .. } => Ok(Outcome::Value(*value)),
            Node::Identifier { name, line } => {
                self.environment
                    .get(name)
                    .map(Outcome::Value)
                    .ok_or_else(|| RuntimeError::UnboundName { name: name.clone(),
                                                               line: *line, })
            },
            Node::BinaryExpr { op,
                               left,
                               right,
                               line, } => {
                let left = match self.eval(left)? {
                    Outcome::Value(v) => v,
                    exit @ Outcome::Exit(_) => return Ok(exit),
                };
                let right = match self.eval(right)? {
                    Outcome::Value(v) => v,
                    exit @ Outcome::Exit(_) => return Ok(exit),
                };
                Self::eval_binary_op(*op, left, right, *line).map(Outcome::Value)
            },
            Node::LetStatement { name, value, .. } => {
                let value = match self.eval(value)? {
                    Outcome::Value(v) => v,
                    exit @ Outcome::Exit(_) => return Ok(exit),
                };
                self.environment.define(name, value);
                debug!(name = name.as_str(), value, "bound variable");
                Ok(Outcome::Value(value))
            },
            Node::ExitStatement { value, .. } => match self.eval(value)? {
                Outcome::Value(code) => Ok(Outcome::Exit(code)),
                exit @ Outcome::Exit(_) => Ok(exit),
            },
        }
    }

    /// Evaluates statements in order without ever ending the process.
    ///
    /// Every statement's value is discarded except the last one, which
    /// becomes the result. An empty program yields `0`. The fold stops at
    /// the first exit-statement and returns `Outcome::Exit`; later
    /// statements do not run.
    ///
    /// # Errors
    /// The first `RuntimeError`; statements after it do not run.
    pub fn execute(&mut self, program: &[Node]) -> EvalResult<Outcome> {
        let mut last = 0;

        for statement in program {
            trace!(line = statement.line_number(), %statement, "evaluating statement");
            match self.eval(statement)? {
                Outcome::Value(v) => last = v,
                exit @ Outcome::Exit(_) => return Ok(exit),
            }
        }

        Ok(Outcome::Value(last))
    }

    /// Runs a program and returns the value of its last statement.
    ///
    /// If an exit-statement is reached, stdout and stderr are flushed and the
    /// process terminates with the evaluated exit code. In that case this
    /// function never returns.
    ///
    /// # Errors
    /// The first `RuntimeError` raised by any statement.
    pub fn eval_program(&mut self, program: Program) -> EvalResult<i32> {
        match self.execute(&program)? {
            Outcome::Value(v) => Ok(v),
            Outcome::Exit(code) => terminate(code),
        }
    }
}

/// Ends the process with `code` after flushing the standard streams.
fn terminate(code: i32) -> ! {
    debug!(code, "exit statement reached");
    // Nothing useful can be done about a failed flush at this point.
    let _ = std::io::stdout().flush();
    let _ = std::io::stderr().flush();
    std::process::exit(code)
}
