//! Interactive read-eval loop.
//!
//! One source unit per line against a persistent interpreter: bindings
//! made on one line are visible on the next. Errors of either family are
//! reported and the prompt continues; only end of input ends the
//! session.

use std::io::{self, BufRead, Write};

use jox_eval::Interpreter;

use crate::run_source;

pub fn run_prompt(print_ast: bool) {
    println!("jox interactive prompt");
    println!("One declaration or statement per line; end input to exit.");

    let mut interpreter = Interpreter::new();
    let stdin = io::stdin();

    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            // EOF or a broken pipe ends the session.
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        // Each line is its own pass: parse errors poison only this line,
        // and a runtime fault leaves the session (and its bindings) alive.
        run_source(&line, &mut interpreter, print_ast);
    }
}
