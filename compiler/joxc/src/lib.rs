//! Driver for the jox interpreter.
//!
//! Wires the pipeline together for the two hosting modes: a file runner
//! that maps outcomes to process exit codes, and an interactive prompt
//! that keeps one interpreter (and so one global scope) alive across
//! lines.
//!
//! The pipeline stages accumulate diagnostics instead of printing; this
//! crate decides where they go. [`execute_source`] keeps them in the
//! returned outcome so tests and embedders can inspect them,
//! [`run_source`] additionally emits them to stderr.

mod repl;

pub use repl::run_prompt;

use jox_diagnostic::{emitter, Diagnostic};
use jox_eval::Interpreter;

/// Exit code for bad command-line arguments.
pub const EXIT_INVALID_ARGS: i32 = 1;
/// Exit code for an unreadable source file.
pub const EXIT_INVALID_SOURCE: i32 = 2;
/// Exit code when the source had lexical or syntax errors.
pub const EXIT_PARSE_FAILURE: i32 = 3;
/// Exit code when evaluation raised a runtime fault.
pub const EXIT_RUNTIME_FAILURE: i32 = 4;

/// What happened to one source unit.
#[derive(Debug)]
pub struct SourceOutcome {
    /// Everything reportable, in the order it should be shown.
    pub diagnostics: Vec<Diagnostic>,
    /// Lexical or syntax errors occurred; evaluation was suppressed.
    pub had_parse_error: bool,
    /// Evaluation started and raised a fault.
    pub had_runtime_error: bool,
}

/// Run one source unit (a file's contents, or one prompt line) against
/// the given interpreter. Diagnostics are collected, not printed.
///
/// Lexical and syntax errors are both gathered in one pass (the parser
/// still runs over the tokens of a source with lexical errors so every
/// problem surfaces at once), and any of them suppresses evaluation.
pub fn execute_source(
    source: &str,
    interpreter: &mut Interpreter,
    print_ast: bool,
) -> SourceOutcome {
    let lexed = jox_lexer::lex(source);
    let parsed = jox_parse::parse(&lexed.tokens);

    let mut diagnostics = lexed.diagnostics;
    diagnostics.extend(parsed.diagnostics);

    if !diagnostics.is_empty() {
        return SourceOutcome {
            diagnostics,
            had_parse_error: true,
            had_runtime_error: false,
        };
    }

    if print_ast {
        print!("{}", jox_ir::printer::print_program(&parsed.statements));
    }

    let mut had_runtime_error = false;
    if let Err(fault) = interpreter.interpret(&parsed.statements) {
        diagnostics.push(fault.into_diagnostic());
        had_runtime_error = true;
    }

    SourceOutcome {
        diagnostics,
        had_parse_error: false,
        had_runtime_error,
    }
}

/// [`execute_source`], then report the diagnostics to stderr.
pub fn run_source(source: &str, interpreter: &mut Interpreter, print_ast: bool) -> SourceOutcome {
    let outcome = execute_source(source, interpreter, print_ast);
    emitter::emit_all(&outcome.diagnostics);
    outcome
}

/// Run a source file to completion and map the outcome to an exit code.
pub fn run_file(path: &str, print_ast: bool) -> i32 {
    // Lossy decoding: a source file with invalid UTF-8 still gets lexed,
    // and the replacement characters surface as ordinary lexical errors.
    let source = match std::fs::read(path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(_) => {
            eprintln!("Invalid source-file.");
            return EXIT_INVALID_SOURCE;
        }
    };

    let mut interpreter = Interpreter::new();
    let outcome = run_source(&source, &mut interpreter, print_ast);

    if outcome.had_parse_error {
        return EXIT_PARSE_FAILURE;
    }
    if outcome.had_runtime_error {
        return EXIT_RUNTIME_FAILURE;
    }
    0
}
