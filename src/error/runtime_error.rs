#[derive(Debug)]
/// Represents all errors that can occur during evaluation and runtime.
pub enum RuntimeError {
    /// Tried to read a variable that was never written.
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A value had an unexpected or incompatible type.
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Attempted division (or modulo) by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to take the square root of a negative number.
    NegativeSqrt {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A `pentru` loop was given a step of zero.
    ZeroStep {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A `citeste` statement found no more input tokens.
    InputExhausted {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, line } => {
                write!(f, "Error on line {line}: Unknown variable '{name}'.")
            },
            Self::TypeError { details, line } => {
                write!(f, "Error on line {line}: Type error: {details}.")
            },
            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),
            Self::NegativeSqrt { line } => write!(f,
                                                  "Error on line {line}: Cannot take the square root of a negative number."),
            Self::ZeroStep { line } => {
                write!(f, "Error on line {line}: The step of a 'pentru' loop cannot be zero.")
            },
            Self::InputExhausted { line } => {
                write!(f, "Error on line {line}: No more input to read.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
