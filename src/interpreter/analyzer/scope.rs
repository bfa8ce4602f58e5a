use std::collections::HashMap;

use crate::ast::DataType;

/// Scopes hidden while a function body is analyzed, restored afterwards.
#[derive(Debug)]
pub struct HiddenScopes(Vec<HashMap<String, DataType>>);

/// Stack of declared-variable scopes; the last entry is the innermost.
#[derive(Debug)]
pub struct ScopeStack {
    scopes: Vec<HashMap<String, DataType>>,
}

impl Default for ScopeStack {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeStack {
    /// Creates a stack holding only the global scope.
    #[must_use]
    pub fn new() -> Self {
        Self { scopes: vec![HashMap::new()] }
    }

    /// Opens a new innermost scope.
    pub fn push(&mut self) {
        self.scopes.push(HashMap::new());
    }

    /// Closes the innermost scope. The global scope is never removed.
    pub fn pop(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    /// Returns `true` if `name` is declared in the innermost scope.
    #[must_use]
    pub fn declared_locally(&self, name: &str) -> bool {
        self.scopes
            .last()
            .is_some_and(|scope| scope.contains_key(name))
    }

    /// Declares `name` in the innermost scope.
    pub fn declare(&mut self, name: &str, data_type: DataType) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name.to_string(), data_type);
        }
    }

    /// Looks `name` up from the innermost scope outward.
    ///
    /// # Example
    /// ```
    /// use cinder::{ast::DataType, interpreter::analyzer::scope::ScopeStack};
    ///
    /// let mut scopes = ScopeStack::new();
    /// scopes.declare("a", DataType::Int);
    /// scopes.push();
    /// scopes.declare("a", DataType::Float);
    ///
    /// assert_eq!(scopes.resolve("a"), Some(DataType::Float));
    /// scopes.pop();
    /// assert_eq!(scopes.resolve("a"), Some(DataType::Int));
    /// assert_eq!(scopes.resolve("b"), None);
    /// ```
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<DataType> {
        self.scopes
            .iter()
            .rev()
            .find_map(|scope| scope.get(name).copied())
    }

    /// Hides every scope except the global one and opens a fresh scope for a
    /// function's parameters, since a function body only sees globals.
    pub fn enter_function(&mut self) -> HiddenScopes {
        let hidden = self.scopes.split_off(1);
        self.scopes.push(HashMap::new());
        HiddenScopes(hidden)
    }

    /// Drops the function's scopes and restores the ones hidden by
    /// [`ScopeStack::enter_function`].
    pub fn leave_function(&mut self, hidden: HiddenScopes) {
        self.scopes.truncate(1);
        self.scopes.extend(hidden.0);
    }
}
