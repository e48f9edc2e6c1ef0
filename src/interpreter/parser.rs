/// Parser entry points.
///
/// Holds the parse result type and the program-level rule that repeats
/// statements until the end-of-input token.
pub mod core;

/// The token cursor.
///
/// A single left-to-right cursor over the token sequence with one token of
/// lookahead. Running past the end of the sequence is reported as an error.
pub mod cursor;

/// Expression parsing.
///
/// Parses left-associative operator chains over integer literals and
/// identifiers. All four operators share one precedence level.
pub mod expression;

/// Statement parsing.
///
/// Parses `let` and `exit` statements, the only two statement forms.
pub mod statement;
