use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
};

impl Context<'_> {
    /// Evaluates an arithmetic operation.
    ///
    /// Both operands must be numbers; a text operand is a type error.
    /// Division and modulo check the divisor explicitly. The operator must
    /// be one of `+`, `-`, `*`, `/`, `%`; other operators are not processed
    /// here.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`, `right`: The operands.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the computed number.
    ///
    /// # Errors
    /// - `RuntimeError::TypeError` for a text operand.
    /// - `RuntimeError::DivisionByZero` for `/` or `%` with a zero divisor.
    pub fn eval_arithmetic(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mod, Mul, Sub};

        let left = left.as_number(line)?;
        let right = right.as_number(line)?;

        Ok(Value::Number(match op {
                             Add => left + right,
                             Sub => left - right,
                             Mul => left * right,
                             Div => {
                                 if right == 0.0 {
                                     return Err(RuntimeError::DivisionByZero { line });
                                 }
                                 left / right
                             },
                             Mod => {
                                 if right == 0.0 {
                                     return Err(RuntimeError::DivisionByZero { line });
                                 }
                                 left % right
                             },
                             _ => unreachable!(),
                         }))
    }
}
