use crate::{
    ast::{Expr, Stmt},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
};

impl Context<'_> {
    /// Executes a counted loop: `pentru var <- from, to[, step] executa ...
    /// sf`.
    ///
    /// The bound expressions are evaluated exactly once, before the first
    /// iteration; a missing step defaults to `1`. The loop variable is bound
    /// to the current counter at the top of every iteration, so assignments
    /// to it inside the body do not affect the iteration count. The end bound
    /// is inclusive, and the direction of the test follows the sign of the
    /// step:
    ///
    /// ```text
    ///     step > 0:  run while var <= to
    ///     step < 0:  run while var >= to
    /// ```
    ///
    /// # Parameters
    /// - `var`: The loop variable name.
    /// - `from`, `to`, `step`: The bound expressions; `step` may be absent.
    /// - `body`: The loop body.
    /// - `line`: Line number for error reporting.
    ///
    /// # Errors
    /// - `RuntimeError::ZeroStep` when the step evaluates to zero (the loop
    ///   could never terminate).
    /// - Propagates errors from bound evaluation or the body.
    pub fn exec_for(&mut self,
                    var: &str,
                    from: &Expr,
                    to: &Expr,
                    step: Option<&Expr>,
                    body: &[Stmt],
                    line: usize)
                    -> EvalResult<()> {
        let start = self.eval(from)?.as_number(line)?;
        let end = self.eval(to)?.as_number(line)?;
        let step = match step {
            Some(expr) => self.eval(expr)?.as_number(line)?,
            None => 1.0,
        };

        if step == 0.0 {
            return Err(RuntimeError::ZeroStep { line });
        }

        let mut current = start;
        while (step > 0.0 && current <= end) || (step < 0.0 && current >= end) {
            self.env.set(var, Value::Number(current));
            self.exec_block(body)?;
            current += step;
        }

        Ok(())
    }
}
