use std::collections::HashMap;

use super::RuntimeError;

/// Variable storage for a single interpretation run.
///
/// A declared variable maps to `None` until its first assignment. Reading
/// an unset variable is an error distinct from reading an undeclared one.
#[derive(Debug, Default)]
pub struct Environment {
    variables: HashMap<String, Option<i64>>,
}

impl Environment {
    pub fn new() -> Self {
        Self {
            variables: HashMap::new(),
        }
    }

    /// Register a variable, leaving it unset. Re-declaring resets the value.
    pub fn declare(&mut self, name: &str) {
        self.variables.insert(name.to_string(), None);
    }

    pub fn is_declared(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    pub fn assign(&mut self, name: &str, value: i64) -> Result<(), RuntimeError> {
        match self.variables.get_mut(name) {
            Some(slot) => {
                *slot = Some(value);
                Ok(())
            }
            None => Err(RuntimeError::UndeclaredVariable(name.to_string())),
        }
    }

    pub fn get(&self, name: &str) -> Result<i64, RuntimeError> {
        match self.variables.get(name) {
            Some(Some(value)) => Ok(*value),
            Some(None) => Err(RuntimeError::UnassignedVariable(name.to_string())),
            None => Err(RuntimeError::UndeclaredVariable(name.to_string())),
        }
    }
}
