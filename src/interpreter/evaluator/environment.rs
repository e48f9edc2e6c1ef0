use std::collections::HashMap;

/// Runtime mapping from variable name to its current value.
///
/// Keys are unique and unordered. An environment belongs to exactly one
/// [`Evaluator`](crate::interpreter::evaluator::core::Evaluator) and lives as
/// long as it does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    variables: HashMap<String, i32>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up the current value of `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<i32> {
        self.variables.get(name).copied()
    }

    /// Binds `name` to `value`, overwriting any prior binding.
    ///
    /// Returns the previous value, if there was one.
    pub fn define(&mut self, name: &str, value: i32) -> Option<i32> {
        self.variables.insert(name.to_string(), value)
    }

    /// Returns `true` if `name` is bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Number of bound names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns `true` if nothing is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Iterates over all bindings in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> {
        self.variables.iter().map(|(name, value)| (name.as_str(), *value))
    }
}
