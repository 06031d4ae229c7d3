//! Configurable destination for `print` output.
//!
//! Enum dispatch rather than a trait object: there are exactly two
//! destinations and this sits on the hot path of every `print`.

/// Where rendered `print` lines go.
#[derive(Debug)]
pub enum PrintSink {
    /// Line-oriented standard output (the CLI default).
    Stdout,
    /// In-memory capture, for tests and embedding.
    Buffer(String),
}

impl PrintSink {
    pub fn stdout() -> Self {
        PrintSink::Stdout
    }

    pub fn buffer() -> Self {
        PrintSink::Buffer(String::new())
    }

    /// Write one line.
    pub fn println(&mut self, line: &str) {
        match self {
            PrintSink::Stdout => println!("{line}"),
            PrintSink::Buffer(buf) => {
                buf.push_str(line);
                buf.push('\n');
            }
        }
    }

    /// Drain captured output. Empty for the stdout sink, which does not
    /// capture.
    pub fn take_output(&mut self) -> String {
        match self {
            PrintSink::Stdout => String::new(),
            PrintSink::Buffer(buf) => std::mem::take(buf),
        }
    }
}

impl Default for PrintSink {
    fn default() -> Self {
        PrintSink::Stdout
    }
}
