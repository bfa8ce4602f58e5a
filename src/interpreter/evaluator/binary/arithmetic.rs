use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
    util::num::{floor_mod_f64, floor_mod_i64, i64_to_f64},
};

impl Interpreter<'_> {
    /// Evaluates `+ - * / %`.
    ///
    /// Two integers stay integral, except for `/`, which always yields a
    /// float. A mix of integer and float promotes the integer. `+` also
    /// concatenates a string with a string or a character.
    ///
    /// # Errors
    /// - `DivisionByZero` for `/` or `%` with a zero divisor.
    /// - `Overflow` when an integer result does not fit in `i64`.
    /// - `TypeError` for any other operand combination.
    ///
    /// # Example
    /// ```
    /// use cinder::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    /// };
    ///
    /// let modulo = Interpreter::eval_arithmetic(BinaryOperator::Mod,
    ///                                           &Value::Integer(-7),
    ///                                           &Value::Integer(3),
    ///                                           1);
    /// assert_eq!(modulo.unwrap(), Value::Integer(2));
    ///
    /// let mixed = Interpreter::eval_arithmetic(BinaryOperator::Add,
    ///                                          &Value::Integer(1),
    ///                                          &Value::Float(0.5),
    ///                                          1);
    /// assert_eq!(mixed.unwrap(), Value::Float(1.5));
    /// ```
    pub fn eval_arithmetic(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<Value> {
        match (left, right) {
            (Value::Integer(a), Value::Integer(b)) => Self::eval_integer_op(op, *a, *b, line),
            (Value::Integer(_) | Value::Float(_), Value::Integer(_) | Value::Float(_)) => {
                Self::eval_float_op(op, left.as_float(line)?, right.as_float(line)?, line)
            },
            (Value::Str(a), Value::Str(b)) if op == BinaryOperator::Add => {
                Ok(Value::Str(format!("{a}{b}")))
            },
            (Value::Str(a), Value::Char(c)) if op == BinaryOperator::Add => {
                Ok(Value::Str(format!("{a}{c}")))
            },
            _ => Err(unsupported(op, left, right, line)),
        }
    }

    fn eval_integer_op(op: BinaryOperator, a: i64, b: i64, line: usize) -> EvalResult<Value> {
        let overflow = RuntimeError::Overflow { line };
        match op {
            BinaryOperator::Add => a.checked_add(b).map(Value::Integer).ok_or(overflow),
            BinaryOperator::Sub => a.checked_sub(b).map(Value::Integer).ok_or(overflow),
            BinaryOperator::Mul => a.checked_mul(b).map(Value::Integer).ok_or(overflow),
            BinaryOperator::Div => {
                if b == 0 {
                    return Err(RuntimeError::DivisionByZero { line });
                }
                Ok(Value::Float(i64_to_f64(a) / i64_to_f64(b)))
            },
            BinaryOperator::Mod => {
                if b == 0 {
                    return Err(RuntimeError::DivisionByZero { line });
                }
                floor_mod_i64(a, b).map(Value::Integer).ok_or(overflow)
            },
            _ => Err(unsupported(op, &Value::Integer(a), &Value::Integer(b), line)),
        }
    }

    fn eval_float_op(op: BinaryOperator, a: f64, b: f64, line: usize) -> EvalResult<Value> {
        match op {
            BinaryOperator::Add => Ok(Value::Float(a + b)),
            BinaryOperator::Sub => Ok(Value::Float(a - b)),
            BinaryOperator::Mul => Ok(Value::Float(a * b)),
            BinaryOperator::Div | BinaryOperator::Mod if b == 0.0 => {
                Err(RuntimeError::DivisionByZero { line })
            },
            BinaryOperator::Div => Ok(Value::Float(a / b)),
            BinaryOperator::Mod => Ok(Value::Float(floor_mod_f64(a, b))),
            _ => Err(unsupported(op, &Value::Float(a), &Value::Float(b), line)),
        }
    }
}

fn unsupported(op: BinaryOperator, left: &Value, right: &Value, line: usize) -> RuntimeError {
    RuntimeError::TypeError { details: format!("unsupported operand types for '{op}': {} and {}",
                                               left.data_type(),
                                               right.data_type()),
                              line }
}
