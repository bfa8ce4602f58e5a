use crate::{
    ast::{Expr, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl<'prog> Interpreter<'prog> {
    /// Evaluates the operand of a unary operator, then applies it.
    pub(in crate::interpreter::evaluator) fn eval_unary_op(&mut self,
                                                          op: UnaryOperator,
                                                          expr: &'prog Expr,
                                                          line: usize)
                                                          -> EvalResult<Value> {
        let value = self.eval(expr)?;
        Self::eval_unary(op, &value, line)
    }

    /// Applies a unary operator to a value.
    ///
    /// `-` negates integers and floats. `!` accepts any value and negates its
    /// truthiness.
    ///
    /// # Errors
    /// - `Overflow` when negating `i64::MIN`.
    /// - `TypeError` when negating a non-numeric value.
    ///
    /// # Example
    /// ```
    /// use cinder::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    /// };
    ///
    /// let negated = Interpreter::eval_unary(UnaryOperator::Negate, &Value::Integer(5), 1);
    /// assert_eq!(negated.unwrap(), Value::Integer(-5));
    ///
    /// let not = Interpreter::eval_unary(UnaryOperator::Not, &Value::Str(String::new()), 1);
    /// assert_eq!(not.unwrap(), Value::Bool(true));
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value, line: usize) -> EvalResult<Value> {
        match op {
            UnaryOperator::Not => Ok(Value::Bool(!value.is_truthy())),
            UnaryOperator::Negate => match value {
                Value::Integer(n) => n.checked_neg()
                                      .map(Value::Integer)
                                      .ok_or(RuntimeError::Overflow { line }),
                Value::Float(x) => Ok(Value::Float(-x)),
                other => Err(RuntimeError::TypeError { details: format!("cannot negate a value of type {}",
                                                                        other.data_type()),
                                                       line }),
            },
        }
    }
}
