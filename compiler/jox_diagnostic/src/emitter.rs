//! Terminal emission of accumulated diagnostics.
//!
//! Diagnostics go to stderr so program output on stdout stays clean for
//! piping.

use std::io::Write;

use crate::Diagnostic;

/// Write one diagnostic to stderr.
pub fn emit(diagnostic: &Diagnostic) {
    eprintln!("{diagnostic}");
}

/// Write a batch of diagnostics to stderr, in order.
pub fn emit_all(diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        emit(diagnostic);
    }
}

/// Write a batch of diagnostics to an arbitrary sink.
///
/// Used by tests to capture rendered output; I/O failures are reported to
/// the caller rather than swallowed.
pub fn emit_all_to<W: Write>(diagnostics: &[Diagnostic], out: &mut W) -> std::io::Result<()> {
    for diagnostic in diagnostics {
        writeln!(out, "{diagnostic}")?;
    }
    Ok(())
}
