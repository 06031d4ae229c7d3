//! jox CLI entry point.

use joxc::{run_file, run_prompt, EXIT_INVALID_ARGS};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.len() > 2 || args.iter().any(|a| a == "-h" || a == "-help") {
        print_usage();
        std::process::exit(EXIT_INVALID_ARGS);
    }

    let print_ast = args.iter().any(|a| a == "-debug");

    // A `.jox` argument selects file mode; anything else falls back to
    // the interactive prompt.
    match args.iter().find(|a| a.ends_with(".jox")) {
        Some(path) => {
            let code = run_file(path, print_ast);
            std::process::exit(code);
        }
        None => run_prompt(print_ast),
    }
}

fn print_usage() {
    eprintln!("Usage: jox [source-file.jox] [-debug] [-h|-help]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -debug    Print the parsed syntax tree before evaluating");
    eprintln!("  -h, -help Show this message");
    eprintln!();
    eprintln!("With no source file, starts the interactive prompt.");
}

/// Route `tracing` events to stderr, filtered by `RUST_LOG`.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}
