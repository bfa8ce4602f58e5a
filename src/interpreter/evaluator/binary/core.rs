use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl<'prog> Interpreter<'prog> {
    /// Evaluates both operands, left first, then applies the operator.
    ///
    /// Both sides are always evaluated, including for `&&` and `||`.
    pub(in crate::interpreter::evaluator) fn eval_binary_op(&mut self,
                                                           left: &'prog Expr,
                                                           op: BinaryOperator,
                                                           right: &'prog Expr,
                                                           line: usize)
                                                           -> EvalResult<Value> {
        let left = self.eval(left)?;
        let right = self.eval(right)?;
        Self::eval_binary(op, &left, &right, line)
    }

    /// Evaluates a binary operation between two values.
    ///
    /// Arithmetic operators go to `eval_arithmetic`, relational and equality
    /// operators to `eval_comparison`, and `&&` / `||` to `eval_logic`.
    ///
    /// # Example
    /// ```
    /// use cinder::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    /// };
    ///
    /// let left = Value::Integer(3);
    /// let right = Value::Integer(4);
    ///
    /// let result = Interpreter::eval_binary(BinaryOperator::Add, &left, &right, 1);
    /// assert_eq!(result.unwrap(), Value::Integer(7));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        if op.is_arithmetic() {
            Self::eval_arithmetic(op, left, right, line)
        } else if op.is_comparison() {
            Self::eval_comparison(op, left, right, line)
        } else {
            Ok(Self::eval_logic(op, left, right))
        }
    }
}
