/// Core parser logic.
///
/// Holds the `Parser` state (lexer plus current token), the program entry
/// point and the token-matching helpers every other parser module uses.
pub mod core;

/// Binary operator parsing.
///
/// One function per precedence level, from logical OR down to the
/// multiplicative operators, each producing left-leaning trees.
pub mod binary;

/// Unary and primary expression parsing.
///
/// Handles prefix `!` and `-`, literals, variables, calls and parenthesized
/// expressions.
pub mod unary;

/// Block parsing.
///
/// Parses `{ statement* }` sequences.
pub mod block;

/// Statement parsing.
///
/// Dispatches on the leading token to declarations, assignments, control flow,
/// `print` and call statements.
pub mod statement;

/// Parsing utilities.
///
/// Shared helpers for comma-separated lists, identifiers and parameters.
pub mod utils;
