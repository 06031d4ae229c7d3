//! RAII scope guard for block execution.
//!
//! [`Interpreter::scoped`] pushes a scope and hands back a guard that
//! pops it on drop. Because the pop lives in `Drop`, it runs on *every*
//! exit path out of a block: normal completion, an early `?` return
//! carrying a runtime fault, even a panic unwinding through the block.
//!
//! The guard holds `&mut Interpreter` and implements `Deref`/`DerefMut`,
//! so block execution reads the same as unscoped execution.

use std::ops::{Deref, DerefMut};

use crate::interpreter::Interpreter;

/// Guard that restores the previous environment scope when dropped.
pub struct ScopedInterpreter<'guard> {
    interpreter: &'guard mut Interpreter,
}

impl Drop for ScopedInterpreter<'_> {
    fn drop(&mut self) {
        self.interpreter.env.pop_scope();
    }
}

impl Deref for ScopedInterpreter<'_> {
    type Target = Interpreter;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for ScopedInterpreter<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl Interpreter {
    /// Enter a child scope; the returned guard pops it on drop.
    pub(crate) fn scoped(&mut self) -> ScopedInterpreter<'_> {
        self.env.push_scope();
        ScopedInterpreter { interpreter: self }
    }
}
