use crate::{
    ast::{Expr, Program, Stmt},
    error::RuntimeError,
    interpreter::{environment::Environment, io::Io, value::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state for one program run: the single
/// shared [`Environment`] and the I/O port serving `citeste` and `scrie`.
///
/// ## Usage
///
/// `Context` is created once per run. [`Context::run`] walks the program
/// depth-first, left to right, executing statements in order until the
/// program ends or the first runtime error aborts it.
pub struct Context<'io> {
    /// The variable store shared by the whole run.
    pub env: Environment,
    pub(crate) io:  &'io mut dyn Io,
}

impl<'io> Context<'io> {
    /// Creates a new evaluation context with an empty environment, wired to
    /// the given I/O port.
    pub fn new(io: &'io mut dyn Io) -> Self {
        Self { env: Environment::new(),
               io }
    }

    /// Executes a complete program.
    ///
    /// Statements run strictly in program order; the first runtime error
    /// aborts execution at its point of occurrence.
    ///
    /// # Parameters
    /// - `program`: The parsed program to execute.
    ///
    /// # Errors
    /// Returns the first `RuntimeError` raised by any statement.
    pub fn run(&mut self, program: &Program) -> EvalResult<()> {
        self.exec_block(&program.statements)
    }

    /// Executes the statements of a block, in order.
    pub fn exec_block(&mut self, statements: &[Stmt]) -> EvalResult<()> {
        for statement in statements {
            self.exec_statement(statement)?;
        }
        Ok(())
    }

    /// Executes a single statement.
    ///
    /// Dispatches on the statement variant; the compiler enforces that every
    /// variant is handled.
    ///
    /// # Parameters
    /// - `statement`: Statement to execute.
    ///
    /// # Errors
    /// Propagates any `RuntimeError` from the statement's execution.
    pub fn exec_statement(&mut self, statement: &Stmt) -> EvalResult<()> {
        match statement {
            Stmt::Assign { name, value, .. } => self.exec_assign(name, value),
            Stmt::Swap { left, right, line } => self.exec_swap(left, right, *line),
            Stmt::Multi { statements, .. } => self.exec_block(statements),
            Stmt::Read { names, line } => self.exec_read(names, *line),
            Stmt::Write { values, .. } => self.exec_write(values),
            Stmt::If { condition,
                       then_block,
                       else_block,
                       .. } => self.exec_if(condition, then_block, else_block),
            Stmt::For { var,
                        from,
                        to,
                        step,
                        body,
                        line, } => {
                self.exec_for(var, from, to, step.as_ref(), body, *line)
            },
            Stmt::While { condition, body, .. } => self.exec_while(condition, body),
            Stmt::DoWhile { body, condition, .. } => self.exec_do_while(body, condition),
            Stmt::RepeatUntil { body, condition, .. } => self.exec_repeat_until(body, condition),
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches based on expression variant: literals, variables, unary and
    /// binary operations, and groupings (which evaluate as their inner
    /// expression).
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The computed [`Value`].
    ///
    /// # Errors
    /// Propagates any `RuntimeError` from operand evaluation or operator
    /// application.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Number { value, .. } => Ok(Value::Number(*value)),
            Expr::Text { value, .. } => Ok(Value::Str(value.clone())),
            Expr::Variable { name, line } => self.eval_variable(name, *line),
            Expr::Unary { op, operand, line } => self.eval_unary(*op, operand, *line),
            Expr::Binary { left,
                           op,
                           right,
                           line, } => self.eval_binary_expr(left, *op, right, *line),
            Expr::Grouping { expr, .. } => self.eval(expr),
        }
    }

    /// Looks up a variable.
    ///
    /// Reading a name that was never written is an error; there is no
    /// implicit default value.
    fn eval_variable(&mut self, name: &str, line: usize) -> EvalResult<Value> {
        self.env
            .get(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_owned(),
                                                           line })
    }
}
