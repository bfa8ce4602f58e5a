use crate::{
    ast::BinaryOperator,
    interpreter::{evaluator::core::Interpreter, value::core::Value},
};

impl Interpreter<'_> {
    /// Evaluates `&&` or `||` on two already evaluated operands.
    ///
    /// Operands of any type are converted with [`Value::is_truthy`]; the
    /// result is always a boolean.
    ///
    /// # Example
    /// ```
    /// use cinder::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    /// };
    ///
    /// let result = Interpreter::eval_logic(BinaryOperator::Or,
    ///                                      &Value::Integer(0),
    ///                                      &Value::Str("x".into()));
    /// assert_eq!(result, Value::Bool(true));
    /// ```
    #[must_use]
    pub fn eval_logic(op: BinaryOperator, left: &Value, right: &Value) -> Value {
        let result = if op == BinaryOperator::And {
            left.is_truthy() && right.is_truthy()
        } else {
            left.is_truthy() || right.is_truthy()
        };
        Value::Bool(result)
    }
}
