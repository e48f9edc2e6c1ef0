//! # tally
//!
//! tally is a tiny interpreted language with a single integer type. Source
//! text is tokenized, parsed into an abstract syntax tree, and evaluated by
//! walking that tree against a mutable variable environment.
//!
//! ```text
//! let x = 2 + 3 * 4;
//! exit x;
//! ```
//!
//! All four operators share one precedence level and fold strictly left to
//! right, so the program above exits with `20`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{
    evaluator::core::{Evaluator, Outcome},
    lexer::tokenize,
    parser::core::parse_program,
};

/// Defines the structure of parsed code.
///
/// This module declares the `Node` enum, the `Program` type and the
/// `BinaryOperator` enum. The AST is built by the parser and walked by the
/// evaluator.
///
/// # Responsibilities
/// - Defines the five node kinds of the language as one closed enum.
/// - Attaches source lines to nodes for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// # Responsibilities
/// - Defines error enums for the parser and the evaluator.
/// - Wraps both in a pipeline-level `Error` with a matchable `ErrorKind`.
pub mod error;
/// Orchestrates lexing, parsing and evaluation.
///
/// # Responsibilities
/// - Provides the lexer, parser and evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

pub use error::{Error, ErrorKind, Result};

/// Lexes, parses and executes `source` against `evaluator`.
///
/// The process is never terminated here: an exit-statement comes back as
/// [`Outcome::Exit`] and the caller decides what to do with it. Bindings made
/// by statements that completed before a failure stay in the evaluator.
///
/// # Errors
/// Returns an error if parsing or evaluation fails. Nothing is evaluated if
/// parsing fails.
///
/// # Examples
/// ```
/// use tally::{
///     ErrorKind, run_source,
///     interpreter::evaluator::core::{Evaluator, Outcome},
/// };
///
/// let mut evaluator = Evaluator::new();
///
/// let outcome = run_source("let x = 2 + 3 * 4;", &mut evaluator).unwrap();
/// assert_eq!(outcome, Outcome::Value(20));
///
/// let outcome = run_source("exit x / 2;", &mut evaluator).unwrap();
/// assert_eq!(outcome, Outcome::Exit(10));
///
/// let err = run_source("let y = z;", &mut evaluator).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::UnboundName);
/// ```
pub fn run_source(source: &str, evaluator: &mut Evaluator) -> Result<Outcome> {
    let tokens = tokenize(source);
    let program = parse_program(&tokens)?;
    Ok(evaluator.execute(&program)?)
}
