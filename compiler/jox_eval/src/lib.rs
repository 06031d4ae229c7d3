//! Tree-walking evaluator for jox.
//!
//! Walks the parser's statement trees directly, single-threaded and
//! synchronous: every evaluation is a plain recursive call, so evaluation
//! depth is bounded by the host stack and nothing here suspends or runs
//! concurrently. The only mutable state is the [`Environment`] scope
//! stack, pushed and popped in strict block discipline.
//!
//! Runtime faults are ordinary [`RuntimeError`] values carried through
//! `Result`: the first fault aborts the remaining statements, unwinding
//! through any open blocks (an RAII guard restores each scope on the way
//! out), and reaches the caller exactly once.

mod environment;
mod error;
mod interpreter;
mod operators;
mod print_sink;
mod scope_guard;
mod value;


pub use environment::Environment;
pub use error::{EvalResult, RuntimeError};
pub use interpreter::Interpreter;
pub use print_sink::PrintSink;
pub use scope_guard::ScopedInterpreter;
pub use value::Value;
