/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code. Parse errors include unrecognized characters, unexpected tokens,
/// unterminated groupings, and any other issues detected before evaluation.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation and
/// execution. Runtime errors include things like division by zero, type
/// mismatches, unknown variables, or exhausted input.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
