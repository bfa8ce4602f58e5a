/// Operator routing.
pub mod core;

/// `+ - * / %` on numbers and string concatenation.
pub mod arithmetic;

/// Equality and ordering.
pub mod comparison;

/// `&&` and `||`.
pub mod logic;
