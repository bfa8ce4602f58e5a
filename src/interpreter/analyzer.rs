/// Core analyzer logic.
///
/// Declares `SemanticAnalyzer`, its entry point and the per-statement rules:
/// declarations, assignments, control-flow placement and function
/// declarations.
pub mod core;

/// Expression checking.
///
/// Resolves names and calls inside expressions and computes the best-effort
/// static type used for declared-type checks.
pub mod expression;

/// Lexical scope tracking.
///
/// A stack of name-to-type maps mirroring the block structure the evaluator
/// will later use.
pub mod scope;
