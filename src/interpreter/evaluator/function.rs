use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter, Signal},
        value::core::Value,
    },
};

impl<'prog> Interpreter<'prog> {
    /// Calls a user-defined function.
    ///
    /// Arguments are evaluated left to right in the caller's environment. The
    /// body then runs in a new scope chained to the global scope only, so it
    /// cannot see the caller's locals. The caller's scopes are restored before
    /// any error from the body is propagated.
    ///
    /// # Returns
    /// The returned value, or `None` if the body finished without `return` or
    /// with a bare `return;`.
    ///
    /// Function lookup sees the same scopes as variable lookup. A call made
    /// from inside a body therefore resolves only global functions and those
    /// declared in the body itself, so a function declared inside a block or
    /// another function cannot call itself recursively, and it is gone once
    /// its block closes.
    ///
    /// # Errors
    /// - `UnknownFunction` if no visible scope declares `name`.
    /// - `ArgumentCountMismatch` if the argument count differs from the
    ///   parameter count.
    /// - `RecursionLimit` if the call would nest deeper than the configured
    ///   maximum.
    /// - `UnexpectedControlFlow` if `break` or `continue` escapes the body.
    pub fn eval_function_call(&mut self,
                              name: &str,
                              arguments: &'prog [Expr],
                              line: usize)
                              -> EvalResult<Option<Value>> {
        let Some(decl) = self.environment.function(name) else {
            return Err(RuntimeError::UnknownFunction { name: name.to_string(),
                                                       line });
        };

        if decl.params.len() != arguments.len() {
            return Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                             expected: decl.params.len(),
                                                             found: arguments.len(),
                                                             line });
        }

        if self.call_depth >= self.config.max_call_depth {
            return Err(RuntimeError::RecursionLimit { name: name.to_string(),
                                                      limit: self.config.max_call_depth,
                                                      line });
        }

        let mut values = Vec::with_capacity(arguments.len());
        for (param, argument) in decl.params.iter().zip(arguments) {
            let value = self.eval(argument)?;
            values.push(self.coerce(param.data_type, value));
        }

        tracing::trace!(name, depth = self.call_depth, "calling function");

        let frame = self.environment.enter_call();
        for (param, value) in decl.params.iter().zip(values) {
            self.environment.define(&param.name, value);
        }
        self.call_depth += 1;
        let signal = self.exec_block(&decl.body);
        self.call_depth -= 1;
        self.environment.leave_call(frame);

        match signal? {
            Signal::Normal | Signal::Return { value: None, .. } => Ok(None),
            Signal::Return { value: Some(value),
                             .. } => Ok(Some(self.coerce(decl.return_type, value))),
            Signal::Break { line } => {
                Err(RuntimeError::UnexpectedControlFlow { keyword: "break",
                                                          line })
            },
            Signal::Continue { line } => {
                Err(RuntimeError::UnexpectedControlFlow { keyword: "continue",
                                                          line })
            },
        }
    }
}
