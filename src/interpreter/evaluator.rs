/// Binary operator evaluation logic.
///
/// Handles arithmetic with integer-to-float promotion, comparisons across
/// compatible types and the eager logical operators.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation and logical NOT.
pub mod unary;

/// Core evaluation logic.
///
/// Contains the `Interpreter`, the control-flow `Signal` returned by every
/// statement, and the statement and expression dispatch.
pub mod core;

/// Block, conditional and loop execution.
pub mod block;

/// Runtime lexical environment.
///
/// A stack of scopes holding variable values and function declarations, with
/// the call-frame swap used when entering a function body.
pub mod environment;

/// Function evaluation.
///
/// Handles user-defined function calls: argument checking, binding, the call
/// depth limit and return value extraction.
pub mod function;
