use crate::{
    ast::{BinaryOperator, DataType, Expr, UnaryOperator},
    error::SemanticError,
    interpreter::analyzer::core::{SemanticAnalyzer, SemanticResult},
};

impl SemanticAnalyzer {
    /// Checks an expression and returns its static type, if one can be
    /// inferred.
    ///
    /// # Errors
    /// - `UndeclaredVariable` for a name with no visible declaration.
    /// - `UndefinedFunction` for a call to an unregistered function.
    /// - `ArityMismatch` for a call with the wrong number of arguments.
    pub(in crate::interpreter::analyzer) fn analyze_expr(&mut self,
                                                         expr: &Expr)
                                                         -> SemanticResult<Option<DataType>> {
        match expr {
            Expr::Literal { value, .. } => Ok(Some(value.data_type())),
            Expr::Variable { name, line } => match self.scopes.resolve(name) {
                Some(data_type) => Ok(Some(data_type)),
                None => Err(SemanticError::UndeclaredVariable { name: name.clone(),
                                                                line: *line }),
            },
            Expr::UnaryOp { op, expr, .. } => {
                let operand = self.analyze_expr(expr)?;
                Ok(match op {
                    UnaryOperator::Not => Some(DataType::Bool),
                    UnaryOperator::Negate => {
                        operand.filter(|t| matches!(t, DataType::Int | DataType::Float))
                    },
                })
            },
            Expr::BinaryOp { left, op, right, .. } => {
                let left = self.analyze_expr(left)?;
                let right = self.analyze_expr(right)?;
                Ok(binary_result_type(*op, left, right))
            },
            Expr::FunctionCall { name, arguments, line } => {
                let Some(signature) = self.functions.get(name) else {
                    return Err(SemanticError::UndefinedFunction { name: name.clone(),
                                                                  line: *line });
                };
                if signature.params.len() != arguments.len() {
                    return Err(SemanticError::ArityMismatch { name:     name.clone(),
                                                              expected: signature.params.len(),
                                                              found:    arguments.len(),
                                                              line:     *line, });
                }
                let return_type = signature.return_type;
                for argument in arguments {
                    self.analyze_expr(argument)?;
                }
                Ok(Some(return_type))
            },
        }
    }
}

/// Best-effort static type of a binary operation.
///
/// Returns `None` when the result type is unknown or the operand types would
/// fail at runtime; such expressions are left to the evaluator.
///
/// # Example
/// ```
/// use cinder::{
///     ast::{BinaryOperator, DataType},
///     interpreter::analyzer::expression::binary_result_type,
/// };
///
/// let int = Some(DataType::Int);
/// let float = Some(DataType::Float);
///
/// assert_eq!(binary_result_type(BinaryOperator::Add, int, int), int);
/// assert_eq!(binary_result_type(BinaryOperator::Mul, int, float), float);
/// assert_eq!(binary_result_type(BinaryOperator::Div, int, int), float);
/// assert_eq!(binary_result_type(BinaryOperator::Less, int, None),
///            Some(DataType::Bool));
/// assert_eq!(binary_result_type(BinaryOperator::Sub, int, None), None);
/// ```
#[must_use]
pub fn binary_result_type(op: BinaryOperator,
                          left: Option<DataType>,
                          right: Option<DataType>)
                          -> Option<DataType> {
    if op.is_comparison() || matches!(op, BinaryOperator::And | BinaryOperator::Or) {
        return Some(DataType::Bool);
    }
    match (op, left?, right?) {
        (BinaryOperator::Div,
         DataType::Int | DataType::Float,
         DataType::Int | DataType::Float) => Some(DataType::Float),
        (_, DataType::Int, DataType::Int) => Some(DataType::Int),
        (_, DataType::Int | DataType::Float, DataType::Int | DataType::Float) => {
            Some(DataType::Float)
        },
        (BinaryOperator::Add, DataType::String, DataType::String | DataType::Char) => {
            Some(DataType::String)
        },
        _ => None,
    }
}
