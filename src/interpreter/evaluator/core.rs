use crate::{
    ast::{DataType, Expr, Program, Statement},
    config::{CoercionPolicy, Config},
    error::RuntimeError,
    interpreter::{evaluator::environment::Environment, value::core::Value},
    util::num::i64_to_f64,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// How a statement finished.
///
/// Non-local exits are returned as values instead of unwinding: blocks stop at
/// the first non-`Normal` signal and hand it to their parent, loops consume
/// `Break` and `Continue`, and function calls consume `Return`.
#[derive(Debug, Clone, PartialEq)]
pub enum Signal {
    /// Execution continues with the next statement.
    Normal,
    /// A `break` is leaving the innermost loop.
    Break {
        /// Line of the `break` statement.
        line: usize,
    },
    /// A `continue` is skipping to the next loop iteration.
    Continue {
        /// Line of the `continue` statement.
        line: usize,
    },
    /// A `return` is leaving the current function.
    Return {
        /// The returned value, absent for a bare `return;`.
        value: Option<Value>,
        /// Line of the `return` statement.
        line:  usize,
    },
}

/// Tree-walking interpreter for one program execution.
///
/// ## Usage
///
/// Create one `Interpreter` per execution and call [`Interpreter::interpret`].
/// Everything printed by the program is collected in an output buffer owned by
/// the interpreter, so independent executions never share output.
///
/// # Example
/// ```
/// use cinder::{config::Config, interpreter::evaluator::core::Interpreter};
///
/// let program = cinder::parse("int x = 2; print(x * 21);").unwrap();
/// let mut interpreter = Interpreter::new(Config::default());
/// interpreter.interpret(&program).unwrap();
///
/// assert_eq!(interpreter.output(), "42\n");
/// ```
#[derive(Debug)]
pub struct Interpreter<'prog> {
    pub(in crate::interpreter::evaluator) environment: Environment<'prog>,
    pub(in crate::interpreter::evaluator) call_depth:  usize,
    pub(in crate::interpreter::evaluator) config:      Config,
    output:                                            String,
}

impl<'prog> Interpreter<'prog> {
    /// Creates an interpreter with an empty global environment.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { environment: Environment::new(),
               call_depth: 0,
               config,
               output: String::new() }
    }

    /// Executes every top-level statement in order.
    ///
    /// Output printed before a failure stays in the buffer.
    ///
    /// # Errors
    /// Returns the first `RuntimeError` raised. A `break`, `continue` or
    /// `return` that reaches the top level is reported as
    /// `UnexpectedControlFlow`.
    #[tracing::instrument(level = "debug", skip_all, fields(statements = program.statements.len()))]
    pub fn interpret(&mut self, program: &'prog Program) -> EvalResult<()> {
        for statement in &program.statements {
            match self.exec_statement(statement)? {
                Signal::Normal => {},
                Signal::Break { line } => {
                    return Err(RuntimeError::UnexpectedControlFlow { keyword: "break",
                                                                     line });
                },
                Signal::Continue { line } => {
                    return Err(RuntimeError::UnexpectedControlFlow { keyword: "continue",
                                                                     line });
                },
                Signal::Return { line, .. } => {
                    return Err(RuntimeError::UnexpectedControlFlow { keyword: "return",
                                                                     line });
                },
            }
        }
        tracing::debug!(bytes = self.output.len(), "execution finished");
        Ok(())
    }

    /// Everything printed so far.
    #[must_use]
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Consumes the interpreter and returns its output buffer.
    #[must_use]
    pub fn into_output(self) -> String {
        self.output
    }

    /// Executes a single statement and reports how it finished.
    pub fn exec_statement(&mut self, statement: &'prog Statement) -> EvalResult<Signal> {
        match statement {
            Statement::VariableDeclaration { data_type,
                                             name,
                                             value,
                                             .. } => {
                let value = self.eval(value)?;
                let value = self.coerce(*data_type, value);
                self.environment.define(name, value);
                Ok(Signal::Normal)
            },
            Statement::Assignment { name, value, line } => {
                let value = self.eval(value)?;
                let Some(target) = self.environment.get(name).map(Value::data_type) else {
                    return Err(RuntimeError::UnknownVariable { name: name.clone(),
                                                               line: *line, });
                };
                let value = self.coerce(target, value);
                self.environment.assign(name, value);
                Ok(Signal::Normal)
            },
            Statement::Print { expr, .. } => {
                let value = self.eval(expr)?;
                self.output.push_str(&value.to_string());
                self.output.push('\n');
                Ok(Signal::Normal)
            },
            Statement::If { condition,
                            then_block,
                            else_block,
                            .. } => self.exec_if(condition, then_block, else_block.as_ref()),
            Statement::While { condition, body, .. } => self.exec_while(condition, body),
            Statement::Break { line } => Ok(Signal::Break { line: *line }),
            Statement::Continue { line } => Ok(Signal::Continue { line: *line }),
            Statement::Return { value, line } => {
                let value = value.as_ref().map(|expr| self.eval(expr)).transpose()?;
                Ok(Signal::Return { value, line: *line })
            },
            Statement::Function(decl) => {
                self.environment.define_function(decl);
                Ok(Signal::Normal)
            },
            Statement::Block(block) => self.exec_block(block),
            Statement::Expression { expr, .. } => {
                match expr {
                    Expr::FunctionCall { name,
                                         arguments,
                                         line, } => {
                        self.eval_function_call(name, arguments, *line)?;
                    },
                    other => {
                        self.eval(other)?;
                    },
                }
                Ok(Signal::Normal)
            },
        }
    }

    /// Evaluates an expression to a value.
    ///
    /// # Errors
    /// - `UnknownVariable` / `UnknownFunction` for unresolved names.
    /// - `MissingValue` when a call used as a value returns nothing.
    /// - Any operator error raised by the operands.
    ///
    /// # Example
    /// ```
    /// use cinder::{
    ///     ast::{BinaryOperator, Expr, LiteralValue},
    ///     config::Config,
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    /// };
    ///
    /// let expr = Expr::BinaryOp { left:  Box::new(Expr::Literal { value: LiteralValue::Integer(7),
    ///                                                             line:  1, }),
    ///                             op:    BinaryOperator::Div,
    ///                             right: Box::new(Expr::Literal { value: LiteralValue::Integer(2),
    ///                                                             line:  1, }),
    ///                             line:  1, };
    ///
    /// let mut interpreter = Interpreter::new(Config::default());
    /// assert_eq!(interpreter.eval(&expr).unwrap(), Value::Float(3.5));
    /// ```
    pub fn eval(&mut self, expr: &'prog Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Value::from(value)),
            Expr::Variable { name, line } => {
                self.environment
                    .get(name)
                    .cloned()
                    .ok_or_else(|| RuntimeError::UnknownVariable { name: name.clone(),
                                                                   line: *line, })
            },
            Expr::UnaryOp { op, expr, line } => self.eval_unary_op(*op, expr, *line),
            Expr::BinaryOp { left, op, right, line } => {
                self.eval_binary_op(left, *op, right, *line)
            },
            Expr::FunctionCall { name,
                                 arguments,
                                 line, } => {
                self.eval_function_call(name, arguments, *line)?
                    .ok_or_else(|| RuntimeError::MissingValue { name: name.clone(),
                                                                line: *line, })
            },
        }
    }

    /// Converts a value on its way into a slot of type `target`.
    ///
    /// Only `int` to `float` widening is performed, and only under
    /// [`CoercionPolicy::WidenIntToFloat`]; every other value passes through
    /// unchanged.
    pub(in crate::interpreter::evaluator) fn coerce(&self, target: DataType, value: Value) -> Value {
        match value {
            Value::Integer(n)
                if target == DataType::Float
                   && self.config.coercion == CoercionPolicy::WidenIntToFloat =>
            {
                Value::Float(i64_to_f64(n))
            },
            other => other,
        }
    }
}
