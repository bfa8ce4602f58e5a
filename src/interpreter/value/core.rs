use crate::{
    ast::{DataType, LiteralValue},
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    util::num::i64_to_f64,
};

/// Represents a runtime value in the interpreter.
///
/// Values are plain scalars. Arithmetic and comparison operators dispatch on
/// the pair of operand variants.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A double precision floating-point number.
    Float(f64),
    /// A boolean value (`true` or `false`).
    Bool(bool),
    /// A single character.
    Char(char),
    /// An immutable string.
    Str(String),
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Integer(n) => Self::Integer(*n),
            LiteralValue::Float(x) => Self::Float(*x),
            LiteralValue::Bool(b) => Self::Bool(*b),
            LiteralValue::Char(c) => Self::Char(*c),
            LiteralValue::Str(s) => Self::Str(s.clone()),
        }
    }
}

impl Value {
    /// Returns the type tag of the value.
    #[must_use]
    pub const fn data_type(&self) -> DataType {
        match self {
            Self::Integer(_) => DataType::Int,
            Self::Float(_) => DataType::Float,
            Self::Bool(_) => DataType::Bool,
            Self::Char(_) => DataType::Char,
            Self::Str(_) => DataType::String,
        }
    }

    /// Coerces the value to a boolean.
    ///
    /// Zero, `0.0`, `false` and the empty string are false; everything else,
    /// including every character, is true.
    ///
    /// # Example
    /// ```
    /// use cinder::interpreter::value::core::Value;
    ///
    /// assert!(Value::Integer(10).is_truthy());
    /// assert!(!Value::Integer(0).is_truthy());
    /// assert!(!Value::Str(String::new()).is_truthy());
    /// assert!(Value::Char('\0').is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Integer(n) => *n != 0,
            Self::Float(x) => *x != 0.0,
            Self::Bool(b) => *b,
            Self::Char(_) => true,
            Self::Str(s) => !s.is_empty(),
        }
    }

    /// Converts a numeric value to `f64`.
    ///
    /// Integers are rounded to the nearest float.
    ///
    /// # Errors
    /// Returns `TypeError` if the value is not numeric.
    ///
    /// # Example
    /// ```
    /// use cinder::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(10).as_float(1).unwrap(), 10.0);
    /// assert_eq!(Value::Integer(i64::MAX).as_float(1).unwrap(), 9.223372036854775807e18);
    /// assert!(Value::Bool(true).as_float(1).is_err());
    /// ```
    pub fn as_float(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Float(x) => Ok(*x),
            Self::Integer(n) => Ok(i64_to_f64(*n)),
            other => Err(RuntimeError::TypeError { details: format!("expected a number, found {}",
                                                                    other.data_type()),
                                                   line }),
        }
    }
}

/// Formats a value the way `print` writes it.
///
/// Floats use Rust's shortest round-trip form and always keep a fractional
/// part or an exponent: `3.0`, `0.1`, `1e20`, `1e-7`. Non-finite values print
/// as `inf`, `-inf` and `NaN`.
///
/// # Example
/// ```
/// use cinder::interpreter::value::core::Value;
///
/// assert_eq!(Value::Float(3.0).to_string(), "3.0");
/// assert_eq!(Value::Float(1e20).to_string(), "1e20");
/// assert_eq!(Value::Float(f64::NAN).to_string(), "NaN");
/// assert_eq!(Value::Char('x').to_string(), "x");
/// ```
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x:?}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Char(c) => write!(f, "{c}"),
            Self::Str(s) => write!(f, "{s}"),
        }
    }
}
