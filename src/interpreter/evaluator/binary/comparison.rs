use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
};

impl Context<'_> {
    /// Evaluates a comparison operation.
    ///
    /// Two numbers compare by numeric order; two texts compare
    /// lexicographically. Mixing a number with a text is a type error. The
    /// result is the number `1` for true and `0` for false.
    ///
    /// # Parameters
    /// - `op`: The comparison operator.
    /// - `left`, `right`: The operands.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing `1` or `0`.
    ///
    /// # Errors
    /// `RuntimeError::TypeError` when the operands have different kinds.
    pub fn eval_comparison(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<Value> {
        use BinaryOperator::{Eq, Ge, Gt, Le, Lt, Ne};

        match (left, right) {
            (Value::Number(a), Value::Number(b)) => Ok(Value::from(match op {
                                                                       Eq => a == b,
                                                                       Ne => a != b,
                                                                       Lt => a < b,
                                                                       Le => a <= b,
                                                                       Gt => a > b,
                                                                       Ge => a >= b,
                                                                       _ => unreachable!(),
                                                                   })),
            (Value::Str(a), Value::Str(b)) => Ok(Value::from(match op {
                                                                 Eq => a == b,
                                                                 Ne => a != b,
                                                                 Lt => a < b,
                                                                 Le => a <= b,
                                                                 Gt => a > b,
                                                                 Ge => a >= b,
                                                                 _ => unreachable!(),
                                                             })),
            _ => {
                Err(RuntimeError::TypeError { details: format!("Cannot compare {left} and {right}: the operands have different types"),
                                              line })
            },
        }
    }
}
