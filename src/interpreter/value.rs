use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Represents a runtime value in the interpreter.
///
/// The language is dynamically typed with exactly two value kinds: numbers
/// (double precision floating-point, covering both the integers and the
/// decimals of the source language) and text. Booleans are not a distinct
/// kind; comparisons and logic produce the numbers `1` and `0`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A numeric value.
    Number(f64),
    /// A text value, produced by string literals or by `citeste`.
    Str(String),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Number(if v { 1.0 } else { 0.0 })
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl Value {
    /// Converts the value to an `f64`, or returns an error if not numeric.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(f64)`: If the value is a number.
    /// - `Err(RuntimeError::TypeError)`: If the value is text.
    pub fn as_number(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            Self::Str(s) => {
                Err(RuntimeError::TypeError { details: format!("Expected a number, found the text '{s}'"),
                                              line })
            },
        }
    }

    /// Converts the value to a boolean using the language's truthiness rule.
    ///
    /// A number is true exactly when it is non-zero. Text has no truth value;
    /// using it in a boolean position is an error.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(bool)`: The truth value of a number.
    /// - `Err(RuntimeError::TypeError)`: If the value is text.
    pub fn truthy(&self, line: usize) -> EvalResult<bool> {
        match self {
            Self::Number(n) => Ok(*n != 0.0),
            Self::Str(_) => {
                Err(RuntimeError::TypeError { details: "A text value cannot be used as a condition".to_string(),
                                              line })
            },
        }
    }

    /// Returns `true` if the value is [`Number`].
    ///
    /// [`Number`]: Value::Number
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Number(..))
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => {
                // Whole values print with no decimal point: 4/2 is "2", not "2.0".
                if n.fract() == 0.0 && n.is_finite() && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{n}")
                }
            },
            Self::Str(s) => write!(f, "{s}"),
        }
    }
}
