use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
};

impl Context<'_> {
    /// Evaluates a binary expression.
    ///
    /// The logical operators are handled here, before the right operand is
    /// evaluated, because they short-circuit: `sau` skips its right side
    /// once the left is true, `si` skips it once the left is false. The
    /// skipped side is never evaluated, so even an expression that would
    /// fail (a division by zero, an unknown variable) goes unnoticed.
    ///
    /// All other operators evaluate both operands and dispatch to
    /// [`Context::eval_binary`].
    ///
    /// # Parameters
    /// - `left`, `right`: The operand expressions.
    /// - `op`: The operator.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The computed [`Value`]; logical and comparison results are the
    /// numbers `1` and `0`.
    pub fn eval_binary_expr(&mut self,
                            left: &Expr,
                            op: BinaryOperator,
                            right: &Expr,
                            line: usize)
                            -> EvalResult<Value> {
        match op {
            BinaryOperator::Or => {
                if self.eval(left)?.truthy(line)? {
                    return Ok(Value::from(true));
                }
                let right = self.eval(right)?.truthy(line)?;
                Ok(Value::from(right))
            },
            BinaryOperator::And => {
                if !self.eval(left)?.truthy(line)? {
                    return Ok(Value::from(false));
                }
                let right = self.eval(right)?.truthy(line)?;
                Ok(Value::from(right))
            },
            _ => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(op, &left, &right, line)
            },
        }
    }

    /// Evaluates a binary operation between two already-computed values.
    ///
    /// Routes arithmetic operators to [`Context::eval_arithmetic`] and
    /// comparison operators to [`Context::eval_comparison`]. The logical
    /// operators never reach this function; they are resolved during
    /// expression dispatch so they can short-circuit.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`, `right`: The operands.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Eq, Ge, Gt, Le, Lt, Mod, Mul, Ne, Sub};

        match op {
            Mul | Div | Mod | Add | Sub => Self::eval_arithmetic(op, left, right, line),
            Eq | Ne | Lt | Le | Gt | Ge => Self::eval_comparison(op, left, right, line),
            BinaryOperator::Or | BinaryOperator::And => unreachable!(),
        }
    }
}
