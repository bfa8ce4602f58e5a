use std::collections::HashMap;

use crate::{ast::FunctionDecl, interpreter::value::core::Value};

/// One lexical scope: the variables and functions declared directly in it.
#[derive(Debug, Default)]
struct Scope<'prog> {
    values:    HashMap<String, Value>,
    functions: HashMap<String, &'prog FunctionDecl>,
}

/// Scopes of the caller, set aside while a function body runs.
#[derive(Debug)]
pub struct CallFrame<'prog>(Vec<Scope<'prog>>);

/// The chain of scopes visible to the statement being executed.
///
/// The first scope is the global one and is never popped. Lookups walk from
/// the innermost scope outward; declarations always go to the innermost one.
/// Function declarations borrow from the program being executed, so they stay
/// valid for as long as the interpreter runs.
#[derive(Debug)]
pub struct Environment<'prog> {
    scopes: Vec<Scope<'prog>>,
}

impl Default for Environment<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'prog> Environment<'prog> {
    /// Creates an environment holding only the global scope.
    #[must_use]
    pub fn new() -> Self {
        Self { scopes: vec![Scope::default()] }
    }

    /// Opens a new innermost scope.
    pub fn push_scope(&mut self) {
        self.scopes.push(Scope::default());
    }

    /// Discards the innermost scope. The global scope is never removed.
    pub fn pop_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    /// Declares `name` in the innermost scope, replacing any previous value
    /// there.
    pub fn define(&mut self, name: &str, value: Value) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.values.insert(name.to_string(), value);
        }
    }

    /// Reads the nearest visible binding of `name`.
    ///
    /// # Example
    /// ```
    /// use cinder::interpreter::{evaluator::environment::Environment, value::core::Value};
    ///
    /// let mut env = Environment::new();
    /// env.define("x", Value::Integer(1));
    /// env.push_scope();
    /// env.define("x", Value::Integer(2));
    /// assert_eq!(env.get("x"), Some(&Value::Integer(2)));
    ///
    /// env.pop_scope();
    /// assert_eq!(env.get("x"), Some(&Value::Integer(1)));
    /// ```
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.scopes
            .iter()
            .rev()
            .find_map(|scope| scope.values.get(name))
    }

    /// Overwrites the nearest visible binding of `name`.
    ///
    /// Returns `false` if no scope holds the name; nothing is declared in that
    /// case.
    pub fn assign(&mut self, name: &str, value: Value) -> bool {
        match self.scopes
                  .iter_mut()
                  .rev()
                  .find_map(|scope| scope.values.get_mut(name))
        {
            Some(slot) => {
                *slot = value;
                true
            },
            None => false,
        }
    }

    /// Registers a function in the innermost scope.
    pub fn define_function(&mut self, decl: &'prog FunctionDecl) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.functions.insert(decl.name.clone(), decl);
        }
    }

    /// Looks a function up from the innermost scope outward.
    #[must_use]
    pub fn function(&self, name: &str) -> Option<&'prog FunctionDecl> {
        self.scopes
            .iter()
            .rev()
            .find_map(|scope| scope.functions.get(name).copied())
    }

    /// Sets the caller's local scopes aside and opens a fresh scope chained to
    /// the global one, for a function's parameters.
    ///
    /// # Example
    /// ```
    /// use cinder::interpreter::{evaluator::environment::Environment, value::core::Value};
    ///
    /// let mut env = Environment::new();
    /// env.define("global", Value::Integer(1));
    /// env.push_scope();
    /// env.define("local", Value::Integer(2));
    ///
    /// let frame = env.enter_call();
    /// assert!(env.get("global").is_some());
    /// assert!(env.get("local").is_none());
    ///
    /// env.leave_call(frame);
    /// assert!(env.get("local").is_some());
    /// ```
    pub fn enter_call(&mut self) -> CallFrame<'prog> {
        let caller = self.scopes.split_off(1);
        self.scopes.push(Scope::default());
        CallFrame(caller)
    }

    /// Discards the callee's scopes and restores the caller's.
    pub fn leave_call(&mut self, frame: CallFrame<'prog>) {
        self.scopes.truncate(1);
        self.scopes.extend(frame.0);
    }
}
