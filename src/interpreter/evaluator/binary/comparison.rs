use std::cmp::Ordering;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

/// Orders two values of compatible types.
///
/// Integers and floats compare by numeric value, so `1` equals `1.0`. Booleans,
/// characters and strings compare only with their own type. Returns `None`
/// when a float operand is NaN.
///
/// # Errors
/// `TypeError` when the operand types cannot be compared.
///
/// # Example
/// ```
/// use std::cmp::Ordering;
///
/// use cinder::interpreter::{evaluator::binary::comparison::compare_values, value::core::Value};
///
/// let ordering = compare_values(&Value::Integer(1), &Value::Float(1.0), 1).unwrap();
/// assert_eq!(ordering, Some(Ordering::Equal));
///
/// assert!(compare_values(&Value::Integer(1), &Value::Str("1".into()), 1).is_err());
/// ```
pub fn compare_values(left: &Value, right: &Value, line: usize) -> EvalResult<Option<Ordering>> {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => Ok(Some(a.cmp(b))),
        (Value::Integer(_) | Value::Float(_), Value::Integer(_) | Value::Float(_)) => {
            Ok(left.as_float(line)?.partial_cmp(&right.as_float(line)?))
        },
        (Value::Bool(a), Value::Bool(b)) => Ok(Some(a.cmp(b))),
        (Value::Char(a), Value::Char(b)) => Ok(Some(a.cmp(b))),
        (Value::Str(a), Value::Str(b)) => Ok(Some(a.cmp(b))),
        _ => Err(RuntimeError::TypeError { details: format!("cannot compare {} with {}",
                                                            left.data_type(),
                                                            right.data_type()),
                                           line }),
    }
}

impl Interpreter<'_> {
    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// # Example
    /// ```
    /// use cinder::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    /// };
    ///
    /// let result = Interpreter::eval_comparison(BinaryOperator::LessEqual,
    ///                                           &Value::Char('a'),
    ///                                           &Value::Char('b'),
    ///                                           1);
    ///
    /// assert_eq!(result.unwrap(), Value::Bool(true));
    /// ```
    pub fn eval_comparison(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<Value> {
        let ordering = compare_values(left, right, line)?;
        let result = match op {
            BinaryOperator::Equal => ordering == Some(Ordering::Equal),
            BinaryOperator::NotEqual => ordering != Some(Ordering::Equal),
            BinaryOperator::Less => ordering == Some(Ordering::Less),
            BinaryOperator::Greater => ordering == Some(Ordering::Greater),
            BinaryOperator::LessEqual => {
                matches!(ordering, Some(Ordering::Less | Ordering::Equal))
            },
            BinaryOperator::GreaterEqual => {
                matches!(ordering, Some(Ordering::Greater | Ordering::Equal))
            },
            _ => {
                return Err(RuntimeError::TypeError { details: format!("'{op}' is not a comparison"),
                                                     line });
            },
        };
        Ok(Value::Bool(result))
    }
}
