use std::collections::HashMap;

use crate::interpreter::value::Value;

/// The variable store shared by all statements of one program run.
///
/// Created empty when execution starts and dropped when it finishes. There is
/// no lexical scoping: loop and branch bodies read and write the same store
/// as the surrounding code. Reading a name that was never written is a
/// runtime error, reported by the evaluator.
#[derive(Debug, Default)]
pub struct Environment {
    variables: HashMap<String, Value>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self { variables: HashMap::new(), }
    }

    /// Looks up the current value bound to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Binds `name` to `value`, replacing any previous binding.
    pub fn set(&mut self, name: &str, value: Value) {
        self.variables.insert(name.to_owned(), value);
    }
}
