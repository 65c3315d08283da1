use crate::{
    ast::{Expr, Stmt},
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context<'_> {
    /// Executes a conditional statement.
    ///
    /// The condition is evaluated once under the truthiness rule (a non-zero
    /// number is true; text is an error). Exactly one branch runs; a missing
    /// `altfel` branch is an empty block and therefore a no-op.
    pub fn exec_if(&mut self,
                   condition: &Expr,
                   then_block: &[Stmt],
                   else_block: &[Stmt])
                   -> EvalResult<()> {
        let line = condition.line_number();
        if self.eval(condition)?.truthy(line)? {
            self.exec_block(then_block)
        } else {
            self.exec_block(else_block)
        }
    }

    /// Executes a pre-test loop: `cat timp <condition> executa ... sf`.
    ///
    /// The condition is re-evaluated before every iteration; a condition that
    /// is false at entry means the body never runs.
    pub fn exec_while(&mut self, condition: &Expr, body: &[Stmt]) -> EvalResult<()> {
        let line = condition.line_number();
        while self.eval(condition)?.truthy(line)? {
            self.exec_block(body)?;
        }
        Ok(())
    }

    /// Executes a post-test loop: `executa ... cat timp <condition>`.
    ///
    /// The body runs at least once; the loop continues while the condition is
    /// true.
    pub fn exec_do_while(&mut self, body: &[Stmt], condition: &Expr) -> EvalResult<()> {
        let line = condition.line_number();
        loop {
            self.exec_block(body)?;
            if !self.eval(condition)?.truthy(line)? {
                return Ok(());
            }
        }
    }

    /// Executes a post-test loop: `repeta ... pana cand <condition>`.
    ///
    /// The body runs at least once; the loop continues while the condition is
    /// *false* and terminates the first time it becomes true. This is the
    /// inverse of the do-while continuation test.
    pub fn exec_repeat_until(&mut self, body: &[Stmt], condition: &Expr) -> EvalResult<()> {
        let line = condition.line_number();
        loop {
            self.exec_block(body)?;
            if self.eval(condition)?.truthy(line)? {
                return Ok(());
            }
        }
    }
}
