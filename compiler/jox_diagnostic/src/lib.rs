//! Diagnostic records and rendering for the jox interpreter.
//!
//! Every error the pipeline can surface (lexical, syntactic, or runtime)
//! is reported through one formatting contract:
//!
//! ```text
//! [line <N>] <Category>Error <location-clause>: <message>
//! ```
//!
//! where the location clause is `at end of file`, `at '<lexeme>'`, or
//! absent (lexical errors know only the line). The stages *accumulate*
//! diagnostics in their outputs rather than printing as they go; the
//! hosting shell decides when and where to emit them.

pub mod emitter;

mod diagnostic;

pub use diagnostic::{Category, Diagnostic, Location};
