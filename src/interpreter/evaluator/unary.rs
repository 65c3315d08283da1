use crate::{
    ast::{Expr, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
};

impl Context<'_> {
    /// Evaluates a unary operation.
    ///
    /// Negation, square root and truncation require a numeric operand.
    /// Square root of a negative number is an error. Truncation rounds
    /// toward zero, so it is idempotent: `[[x]]` equals `[x]`. Logical not
    /// negates the operand's truthiness and yields `1` or `0`.
    ///
    /// # Parameters
    /// - `op`: The unary operator to apply.
    /// - `operand`: The operand expression.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The computed [`Value`].
    ///
    /// # Errors
    /// - `RuntimeError::TypeError` for a text operand where a number is
    ///   required.
    /// - `RuntimeError::NegativeSqrt` for `√` of a negative number.
    pub fn eval_unary(&mut self,
                      op: UnaryOperator,
                      operand: &Expr,
                      line: usize)
                      -> EvalResult<Value> {
        match op {
            UnaryOperator::Negate => {
                let n = self.eval(operand)?.as_number(line)?;
                Ok(Value::Number(-n))
            },
            UnaryOperator::Sqrt => {
                let n = self.eval(operand)?.as_number(line)?;
                if n < 0.0 {
                    Err(RuntimeError::NegativeSqrt { line })
                } else {
                    Ok(Value::Number(n.sqrt()))
                }
            },
            UnaryOperator::Trunc => {
                let n = self.eval(operand)?.as_number(line)?;
                Ok(Value::Number(n.trunc()))
            },
            UnaryOperator::Not => {
                let b = self.eval(operand)?.truthy(line)?;
                Ok(Value::from(!b))
            },
        }
    }
}
