/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST, performs integer arithmetic, manages the
/// variable environment and reports exit-statements as a distinct outcome.
///
/// # Responsibilities
/// - Evaluates AST nodes and folds programs statement by statement.
/// - Owns the environment that makes an interactive session stateful.
/// - Reports runtime errors such as unbound names or division by zero.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads raw source text and produces the complete token sequence,
/// always terminated by one end-of-input token. Characters that start no
/// token are skipped.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A predictive recursive-descent parser with a single cursor and no
/// backtracking. It fails on the first structural mismatch.
pub mod parser;
