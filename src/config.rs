use crate::ast::DataType;

/// Default limit on nested user-function calls.
pub const MAX_CALL_DEPTH: usize = 256;

/// Default limit on syntactic nesting: parentheses, prefix operators, call
/// arguments and blocks.
pub const MAX_NESTING_DEPTH: usize = 64;

/// Decides which value types may be stored into a slot of a declared type.
///
/// The policy is applied in the same way by the analyzer (declarations,
/// assignments and returns) and by the evaluator (the actual conversion of the
/// stored value).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoercionPolicy {
    /// The value type must equal the declared type exactly.
    #[default]
    Strict,
    /// Like `Strict`, but an `int` value may be stored into a `float` slot and
    /// is converted on the way in.
    WidenIntToFloat,
}

impl CoercionPolicy {
    /// Returns `true` if a value of type `found` may be stored into a slot
    /// declared as `expected`.
    ///
    /// # Example
    /// ```
    /// use cinder::{ast::DataType, config::CoercionPolicy};
    ///
    /// assert!(CoercionPolicy::Strict.accepts(DataType::Int, DataType::Int));
    /// assert!(!CoercionPolicy::Strict.accepts(DataType::Float, DataType::Int));
    /// assert!(CoercionPolicy::WidenIntToFloat.accepts(DataType::Float, DataType::Int));
    /// assert!(!CoercionPolicy::WidenIntToFloat.accepts(DataType::Int, DataType::Float));
    /// ```
    #[must_use]
    pub fn accepts(self, expected: DataType, found: DataType) -> bool {
        expected == found
        || (self == Self::WidenIntToFloat && expected == DataType::Float && found == DataType::Int)
    }
}

/// Options shared by the analyzer and the evaluator for one execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Declared-type compatibility rule.
    pub coercion:          CoercionPolicy,
    /// How deep user-function calls may nest before execution aborts.
    pub max_call_depth:    usize,
    /// How deep expressions and blocks may nest before parsing fails.
    pub max_nesting_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self { coercion:          CoercionPolicy::Strict,
               max_call_depth:    MAX_CALL_DEPTH,
               max_nesting_depth: MAX_NESTING_DEPTH, }
    }
}
