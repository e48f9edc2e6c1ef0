/// Core evaluation logic.
///
/// Contains the `Evaluator`, the node dispatch, the statement fold and the
/// process-terminating program runner.
pub mod core;

/// Binary operator evaluation.
///
/// Implements the four integer operators, including the division-by-zero
/// check.
pub mod binary;

/// The variable environment.
///
/// Maps names to their most recently assigned integer value.
pub mod environment;
