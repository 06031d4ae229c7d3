//! Hand-written single-pass lexer for jox.
//!
//! One left-to-right scan over the source bytes, no backtracking. Each
//! [`Lexer`] value owns its cursor, line counter, and output buffers, so
//! lexing the same source twice yields structurally identical results and
//! independent lexers can run side by side.
//!
//! # Error policy
//!
//! Lexical errors do not abort the scan. Each one is recorded as a
//! [`Diagnostic`] and scanning resumes with the next character; the caller
//! inspects [`LexOutput::has_errors`] before handing the tokens to the
//! parser. The token stream is always terminated by a synthetic `Eof`
//! token whose line equals the final line count.

mod keywords;

#[cfg(test)]
mod tests;

use jox_diagnostic::Diagnostic;
use jox_ir::{Literal, Token, TokenKind};

/// Result of one lexing pass: the token stream plus any lexical errors.
#[derive(Clone, Debug)]
pub struct LexOutput {
    pub tokens: Vec<Token>,
    pub diagnostics: Vec<Diagnostic>,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Lex a source string in one pass.
pub fn lex(source: &str) -> LexOutput {
    Lexer::new(source).lex()
}

/// Single-use scanner state.
///
/// `start` marks the first byte of the lexeme being scanned and `current`
/// the next byte to consume; `start..current` always falls on UTF-8
/// character boundaries because multi-byte characters are consumed whole.
pub struct Lexer<'src> {
    src: &'src str,
    bytes: &'src [u8],
    start: usize,
    current: usize,
    line: u32,
    tokens: Vec<Token>,
    diagnostics: Vec<Diagnostic>,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Lexer {
            src: source,
            bytes: source.as_bytes(),
            start: 0,
            current: 0,
            line: 1,
            tokens: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Scan the whole source, consuming the lexer.
    pub fn lex(mut self) -> LexOutput {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token();
        }

        self.tokens.push(Token::eof(self.line));
        LexOutput {
            tokens: self.tokens,
            diagnostics: self.diagnostics,
        }
    }

    fn scan_token(&mut self) {
        let b = self.advance();
        match b {
            b'(' => self.add_token(TokenKind::LeftParen),
            b')' => self.add_token(TokenKind::RightParen),
            b'{' => self.add_token(TokenKind::LeftBrace),
            b'}' => self.add_token(TokenKind::RightBrace),
            b',' => self.add_token(TokenKind::Comma),
            b'.' => self.add_token(TokenKind::Dot),
            b';' => self.add_token(TokenKind::Semicolon),
            b'+' => self.add_token(TokenKind::Plus),
            b'-' => self.add_token(TokenKind::Minus),
            b'*' => self.add_token(TokenKind::Star),

            // Maximal munch: two-character operators win over their
            // one-character prefixes.
            b'!' => {
                let kind = if self.match_next(b'=') {
                    TokenKind::BangEqual
                } else {
                    TokenKind::Bang
                };
                self.add_token(kind);
            }
            b'=' => {
                let kind = if self.match_next(b'=') {
                    TokenKind::EqualEqual
                } else {
                    TokenKind::Equal
                };
                self.add_token(kind);
            }
            b'<' => {
                let kind = if self.match_next(b'=') {
                    TokenKind::LessEqual
                } else {
                    TokenKind::Less
                };
                self.add_token(kind);
            }
            b'>' => {
                let kind = if self.match_next(b'=') {
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                };
                self.add_token(kind);
            }

            b'/' => {
                if self.match_next(b'/') {
                    self.skip_line_comment();
                } else {
                    self.add_token(TokenKind::Slash);
                }
            }

            // Horizontal whitespace carries no token.
            b' ' | b'\r' | b'\t' => {}

            b'\n' => self.line += 1,

            b'"' => self.string(),

            b'0'..=b'9' => self.number(),

            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(),

            _ => self.unexpected_character(),
        }
    }

    // --- Token scanners ---------------------------------------------------

    /// Skip a `//` comment up to (not including) the next newline, so the
    /// newline arm still counts the line.
    fn skip_line_comment(&mut self) {
        match memchr::memchr(b'\n', &self.bytes[self.current..]) {
            Some(offset) => self.current += offset,
            None => self.current = self.bytes.len(),
        }
    }

    /// Scan a string literal. The opening `"` is already consumed.
    ///
    /// Strings may span lines (each embedded newline bumps the line
    /// counter) and carry no escape sequences: the literal value is the
    /// raw text between the quotes. An unterminated string is reported on
    /// the line where scanning stopped and emits no token.
    fn string(&mut self) {
        loop {
            match memchr::memchr2(b'"', b'\n', &self.bytes[self.current..]) {
                None => {
                    self.current = self.bytes.len();
                    self.error("Unterminated string.");
                    return;
                }
                Some(offset) => {
                    self.current += offset + 1;
                    if self.bytes[self.current - 1] == b'\n' {
                        self.line += 1;
                        continue;
                    }
                    // Closing quote consumed; the literal drops both quotes.
                    let value = &self.src[self.start + 1..self.current - 1];
                    self.add_literal_token(TokenKind::String, Literal::Str(value.to_owned()));
                    return;
                }
            }
        }
    }

    /// Scan a number literal: digits, optionally a `.` followed by at
    /// least one digit. A trailing `.` is left unconsumed, which takes two
    /// bytes of lookahead to decide.
    fn number(&mut self) {
        self.eat_digits();

        if self.peek() == b'.' && self.peek2().is_ascii_digit() {
            self.current += 1;
            self.eat_digits();
        }

        match self.lexeme().parse::<f64>() {
            Ok(value) => self.add_literal_token(TokenKind::Number, Literal::Number(value)),
            Err(_) => self.error("Invalid number literal."),
        }
    }

    /// Scan an identifier, then check the keyword table. The whole
    /// identifier is extracted first, so keyword recognition is implicitly
    /// longest-match.
    fn identifier(&mut self) {
        while is_identifier_byte(self.peek()) {
            self.current += 1;
        }

        let kind = keywords::lookup(self.lexeme()).unwrap_or(TokenKind::Identifier);
        self.add_token(kind);
    }

    /// Report a character with no token rule and skip past it. The whole
    /// UTF-8 character is consumed so the next scan starts on a boundary.
    fn unexpected_character(&mut self) {
        // start..  still holds the full character; advance() took one byte.
        if let Some(c) = self.src[self.start..].chars().next() {
            self.current = self.start + c.len_utf8();
            self.error(format!("Unexpected character '{c}'"));
        } else {
            self.current = self.bytes.len();
        }
    }

    // --- Cursor primitives ------------------------------------------------

    #[inline]
    fn is_at_end(&self) -> bool {
        self.current >= self.bytes.len()
    }

    /// Consume and return the current byte.
    #[inline]
    fn advance(&mut self) -> u8 {
        let b = self.bytes[self.current];
        self.current += 1;
        b
    }

    /// The current byte, or `0` at end of input.
    #[inline]
    fn peek(&self) -> u8 {
        self.bytes.get(self.current).copied().unwrap_or(0)
    }

    /// One byte past the current one, or `0` past end of input.
    #[inline]
    fn peek2(&self) -> u8 {
        self.bytes.get(self.current + 1).copied().unwrap_or(0)
    }

    /// Consume the current byte only if it equals `expected`.
    #[inline]
    fn match_next(&mut self, expected: u8) -> bool {
        if self.peek() == expected {
            self.current += 1;
            true
        } else {
            false
        }
    }

    #[inline]
    fn eat_digits(&mut self) {
        while self.peek().is_ascii_digit() {
            self.current += 1;
        }
    }

    /// The source text of the token being scanned.
    #[inline]
    fn lexeme(&self) -> &'src str {
        &self.src[self.start..self.current]
    }

    // --- Output -----------------------------------------------------------

    fn add_token(&mut self, kind: TokenKind) {
        self.tokens
            .push(Token::new(kind, self.lexeme(), None, self.line));
    }

    fn add_literal_token(&mut self, kind: TokenKind, literal: Literal) {
        self.tokens
            .push(Token::new(kind, self.lexeme(), Some(literal), self.line));
    }

    fn error(&mut self, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::parse(self.line, message));
    }
}

#[inline]
fn is_identifier_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}
