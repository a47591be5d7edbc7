//! Environment for variable scoping in the interpreter.
//!
//! A stack of scopes, innermost last. One environment lives for exactly one
//! invocation of one construct.

use rustc_hash::FxHashMap;

use cfo_ir::Name;

use crate::ScalarInt;

/// Error returned by `Environment::assign`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssignError {
    /// Variable not found in any scope.
    Undefined,
}

/// A single scope containing variable bindings.
#[derive(Clone, Debug, Default)]
pub struct Scope {
    bindings: FxHashMap<Name, ScalarInt>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Define (or redefine) a variable in this scope.
    #[inline]
    pub fn define(&mut self, name: Name, value: ScalarInt) {
        self.bindings.insert(name, value);
    }

    #[inline]
    pub fn lookup(&self, name: Name) -> Option<ScalarInt> {
        self.bindings.get(&name).copied()
    }

    /// Overwrite an existing binding; `false` if this scope does not declare it.
    #[inline]
    fn assign(&mut self, name: Name, value: ScalarInt) -> bool {
        match self.bindings.get_mut(&name) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }
}

/// Scope stack for one invocation.
#[derive(Clone, Debug)]
pub struct Environment {
    /// Stack of scopes; the root scope at index 0 is never popped.
    scopes: Vec<Scope>,
}

impl Environment {
    /// Create an environment with an empty root scope.
    pub fn new() -> Self {
        Environment {
            scopes: vec![Scope::new()],
        }
    }

    /// Push a new scope onto the stack.
    #[inline]
    pub fn push_scope(&mut self) {
        self.scopes.push(Scope::new());
    }

    /// Pop the current scope. The root scope stays.
    #[inline]
    pub fn pop_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    /// Declare a variable in the innermost scope, shadowing outer ones.
    #[inline]
    pub fn define(&mut self, name: Name, value: ScalarInt) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.define(name, value);
        }
    }

    /// Look up a variable, innermost scope first.
    #[inline]
    pub fn lookup(&self, name: Name) -> Option<ScalarInt> {
        self.scopes.iter().rev().find_map(|scope| scope.lookup(name))
    }

    /// Assign to the innermost declaration of `name`.
    #[inline]
    pub fn assign(&mut self, name: Name, value: ScalarInt) -> Result<(), AssignError> {
        if self
            .scopes
            .iter_mut()
            .rev()
            .any(|scope| scope.assign(name, value))
        {
            Ok(())
        } else {
            Err(AssignError::Undefined)
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
