//! Variable scoping for the interpreter.
//!
//! An owned stack of scope records: the globals at the bottom live for
//! the whole interpreter, and each block pushes one local scope that is
//! popped when the block exits. Lookup walks innermost-out, which is
//! exactly the lexical chain; a child scope can never outlive its
//! parent, so no reference counting is involved.

use rustc_hash::FxHashMap;

use jox_ir::Token;

use crate::error::{undefined_variable, EvalResult, RuntimeError};
use crate::value::Value;

/// A single scope's bindings.
#[derive(Debug, Default)]
struct Scope {
    bindings: FxHashMap<String, Value>,
}

/// The scope stack.
#[derive(Debug, Default)]
pub struct Environment {
    /// Outermost scope; lives as long as the interpreter.
    globals: Scope,
    /// Local scopes, innermost last. Empty at the top level.
    locals: Vec<Scope>,
}

impl Environment {
    pub fn new() -> Self {
        Environment::default()
    }

    /// Number of live scopes, counting the globals. `1` at the top level.
    pub fn depth(&self) -> usize {
        1 + self.locals.len()
    }

    /// Enter a block scope.
    pub(crate) fn push_scope(&mut self) {
        self.locals.push(Scope::default());
    }

    /// Leave the innermost block scope. The globals are never popped.
    pub(crate) fn pop_scope(&mut self) {
        self.locals.pop();
    }

    fn current_mut(&mut self) -> &mut Scope {
        match self.locals.last_mut() {
            Some(scope) => scope,
            None => &mut self.globals,
        }
    }

    /// Bind `name` in the current scope, replacing any previous binding
    /// in that scope. Redefinition is not an error: `var a = 1; var a = 2;`
    /// simply rebinds.
    pub fn define(&mut self, name: &str, value: Value) {
        self.current_mut().bindings.insert(name.to_owned(), value);
    }

    /// Look up a variable, innermost scope first.
    pub fn get(&self, name: &Token) -> EvalResult {
        for scope in self.locals.iter().rev() {
            if let Some(value) = scope.bindings.get(&name.lexeme) {
                return Ok(value.clone());
            }
        }
        if let Some(value) = self.globals.bindings.get(&name.lexeme) {
            return Ok(value.clone());
        }
        Err(undefined_variable(name))
    }

    /// Assign to an existing variable, mutating the scope where the name
    /// is found. Assignment never creates a binding.
    pub fn assign(&mut self, name: &Token, value: Value) -> Result<(), RuntimeError> {
        for scope in self.locals.iter_mut().rev() {
            if let Some(slot) = scope.bindings.get_mut(&name.lexeme) {
                *slot = value;
                return Ok(());
            }
        }
        if let Some(slot) = self.globals.bindings.get_mut(&name.lexeme) {
            *slot = value;
            return Ok(());
        }
        Err(undefined_variable(name))
    }
}
