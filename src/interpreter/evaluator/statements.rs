use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
};

impl Context<'_> {
    /// Executes an assignment: evaluate the value, then bind it.
    ///
    /// # Parameters
    /// - `name`: The variable receiving the value.
    /// - `value`: The value expression.
    ///
    /// # Errors
    /// Propagates any `RuntimeError` from evaluating `value`; nothing is
    /// bound in that case.
    pub fn exec_assign(&mut self, name: &str, value: &Expr) -> EvalResult<()> {
        let value = self.eval(value)?;
        self.env.set(name, value);
        Ok(())
    }

    /// Executes a swap: exchange the values bound to the two names.
    ///
    /// Nothing is evaluated. Both names must already be bound; swapping an
    /// unknown variable is an error and leaves the environment untouched.
    ///
    /// # Parameters
    /// - `left`, `right`: The variable names to exchange.
    /// - `line`: Line number for error reporting.
    ///
    /// # Errors
    /// `RuntimeError::UnknownVariable` if either name is unbound.
    pub fn exec_swap(&mut self, left: &str, right: &str, line: usize) -> EvalResult<()> {
        let left_value = self.env
                             .get(left)
                             .cloned()
                             .ok_or_else(|| RuntimeError::UnknownVariable { name: left.to_owned(),
                                                                            line })?;
        let right_value = self.env
                              .get(right)
                              .cloned()
                              .ok_or_else(|| RuntimeError::UnknownVariable { name:
                                                                                 right.to_owned(),
                                                                             line })?;

        self.env.set(left, right_value);
        self.env.set(right, left_value);
        Ok(())
    }

    /// Executes an input statement.
    ///
    /// One whitespace-delimited token is pulled from the I/O port for each
    /// name, in order. A token that parses as a number is stored as a number;
    /// anything else is stored as text.
    ///
    /// # Parameters
    /// - `names`: The variables to fill, in order.
    /// - `line`: Line number for error reporting.
    ///
    /// # Errors
    /// `RuntimeError::InputExhausted` if the port runs out of tokens;
    /// variables already filled by this statement keep their values.
    pub fn exec_read(&mut self, names: &[String], line: usize) -> EvalResult<()> {
        for name in names {
            let token = self.io
                            .read_token()
                            .ok_or(RuntimeError::InputExhausted { line })?;

            let value = match token.parse::<f64>() {
                Ok(number) => Value::Number(number),
                Err(_) => Value::Str(token),
            };

            self.env.set(name, value);
        }
        Ok(())
    }

    /// Executes an output statement.
    ///
    /// Every expression is evaluated and rendered; the rendered pieces are
    /// concatenated with no separator and terminated with a newline. The
    /// whole line is buffered first, so a failing expression produces no
    /// output at all for this statement.
    ///
    /// # Parameters
    /// - `values`: The expressions to render, in order.
    ///
    /// # Errors
    /// Propagates the first `RuntimeError` from expression evaluation.
    pub fn exec_write(&mut self, values: &[Expr]) -> EvalResult<()> {
        let mut output = String::new();

        for value in values {
            let value = self.eval(value)?;
            output.push_str(&value.to_string());
        }
        output.push('\n');

        self.io.write(&output);
        Ok(())
    }
}
