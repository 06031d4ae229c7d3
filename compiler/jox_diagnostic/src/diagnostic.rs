use std::fmt;

use jox_ir::{Token, TokenKind};

/// Which stage produced the diagnostic.
///
/// Lexical and syntactic errors share the `Parse` category: both poison
/// the source unit the same way (evaluation is suppressed), and the
/// hosting shell treats them identically.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Category {
    Parse,
    Runtime,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Parse => write!(f, "Parse"),
            Category::Runtime => write!(f, "Runtime"),
        }
    }
}

/// Where in the source the diagnostic points.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Location {
    /// Line-only; used for lexical errors where no token exists yet.
    None,
    /// The synthetic end-of-input token.
    AtEnd,
    /// A concrete token, identified by its exact source text.
    AtLexeme(String),
}

/// One reportable error with enough context to render the shared format.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    pub line: u32,
    pub category: Category,
    pub location: Location,
    pub message: String,
}

impl Diagnostic {
    /// Lexical error: only a line number is known.
    pub fn parse(line: u32, message: impl Into<String>) -> Self {
        Diagnostic {
            line,
            category: Category::Parse,
            location: Location::None,
            message: message.into(),
        }
    }

    /// Syntax error anchored at a token.
    pub fn parse_at(token: &Token, message: impl Into<String>) -> Self {
        Diagnostic {
            line: token.line,
            category: Category::Parse,
            location: Location::from_token(token),
            message: message.into(),
        }
    }

    /// Runtime fault anchored at the offending operator or identifier.
    pub fn runtime_at(token: &Token, message: impl Into<String>) -> Self {
        Diagnostic {
            line: token.line,
            category: Category::Runtime,
            location: Location::from_token(token),
            message: message.into(),
        }
    }

}

impl Location {
    fn from_token(token: &Token) -> Self {
        if token.kind == TokenKind::Eof {
            Location::AtEnd
        } else {
            Location::AtLexeme(token.lexeme.clone())
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[line {}] {}Error", self.line, self.category)?;
        match &self.location {
            Location::None => {}
            Location::AtEnd => write!(f, " at end of file")?,
            Location::AtLexeme(lexeme) => write!(f, " at '{lexeme}'")?,
        }
        write!(f, ": {}", self.message)
    }
}
