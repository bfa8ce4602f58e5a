use crate::{
    ast::{Block, Expr, Statement},
    interpreter::evaluator::core::{EvalResult, Interpreter, Signal},
};

impl<'prog> Interpreter<'prog> {
    /// Runs a block in a fresh child scope.
    ///
    /// Stops at the first statement that does not finish normally and returns
    /// its signal. The scope is discarded on every exit path, including
    /// errors.
    pub fn exec_block(&mut self, block: &'prog Block) -> EvalResult<Signal> {
        self.environment.push_scope();
        let signal = self.exec_statements(&block.statements);
        self.environment.pop_scope();
        signal
    }

    fn exec_statements(&mut self, statements: &'prog [Statement]) -> EvalResult<Signal> {
        for statement in statements {
            let signal = self.exec_statement(statement)?;
            if signal != Signal::Normal {
                return Ok(signal);
            }
        }
        Ok(Signal::Normal)
    }

    pub(in crate::interpreter::evaluator) fn exec_if(&mut self,
                                                    condition: &'prog Expr,
                                                    then_block: &'prog Block,
                                                    else_block: Option<&'prog Block>)
                                                    -> EvalResult<Signal> {
        if self.eval(condition)?.is_truthy() {
            self.exec_block(then_block)
        } else if let Some(else_block) = else_block {
            self.exec_block(else_block)
        } else {
            Ok(Signal::Normal)
        }
    }

    /// Runs a `while` loop.
    ///
    /// `Continue` goes back to the condition check and `Break` ends the loop;
    /// neither leaves it. `Return` is passed on to the enclosing function.
    pub(in crate::interpreter::evaluator) fn exec_while(&mut self,
                                                       condition: &'prog Expr,
                                                       body: &'prog Block)
                                                       -> EvalResult<Signal> {
        while self.eval(condition)?.is_truthy() {
            match self.exec_block(body)? {
                Signal::Normal | Signal::Continue { .. } => {},
                Signal::Break { .. } => break,
                signal @ Signal::Return { .. } => return Ok(signal),
            }
        }
        Ok(Signal::Normal)
    }
}
