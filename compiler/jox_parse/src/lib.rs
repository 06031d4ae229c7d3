//! Recursive descent parser for jox.
//!
//! Consumes the lexer's token stream and produces a statement list,
//! best-effort: a syntax error inside one declaration does not stop the
//! pass. The parser records a diagnostic, discards tokens until a
//! statement boundary (panic-mode synchronization), and resumes with the
//! next declaration, so one run surfaces as many distinct errors as
//! possible.
//!
//! Each [`Parser`] value owns its own cursor and diagnostic buffer;
//! parsing the same token stream twice yields structurally identical
//! output.
//!
//! # Failed declarations
//!
//! A declaration that could not be parsed contributes *nothing* to the
//! statement list, not even a placeholder node. Downstream stages never see a
//! hole, and since any syntax error already suppresses evaluation of the
//! whole source unit, dropping the node loses nothing.

mod error;
mod expr;
mod recovery;


pub use recovery::{TokenSet, STMT_BOUNDARY};

use error::{ParseError, ParseResult};
use jox_diagnostic::Diagnostic;
use jox_ir::{Expr, LitKind, Stmt, Token, TokenKind};
use tracing::{debug, trace};

/// Result of one parsing pass: the statement list plus any syntax errors.
#[derive(Clone, Debug)]
pub struct ParseOutput {
    pub statements: Vec<Stmt>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Parse an `Eof`-terminated token stream in one pass.
pub fn parse(tokens: &[Token]) -> ParseOutput {
    Parser::new(tokens).parse()
}

/// Parser state: a cursor over the token stream plus accumulated
/// diagnostics.
pub struct Parser<'a> {
    tokens: &'a [Token],
    current: usize,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Parser<'a> {
    /// Create a parser over a token stream.
    ///
    /// The stream must be terminated by an `Eof` token, which the lexer
    /// guarantees.
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser {
            tokens,
            current: 0,
            diagnostics: Vec::new(),
        }
    }

    /// Parse the whole stream, consuming the parser.
    pub fn parse(mut self) -> ParseOutput {
        debug!(tokens = self.tokens.len(), "parsing token stream");

        let mut statements = Vec::new();
        if !self.tokens.is_empty() {
            while !self.is_at_end() {
                if let Some(stmt) = self.declaration() {
                    statements.push(stmt);
                }
            }
        }

        debug!(
            statements = statements.len(),
            errors = self.diagnostics.len(),
            "parse finished"
        );
        ParseOutput {
            statements,
            diagnostics: self.diagnostics,
        }
    }

    // --- Declarations and statements --------------------------------------

    /// `declaration := varDecl | statement`
    ///
    /// This is the recovery boundary: a failed declaration synchronizes
    /// and yields `None`.
    fn declaration(&mut self) -> Option<Stmt> {
        let result = if self.matches(&[TokenKind::Var]) {
            self.var_declaration()
        } else {
            self.statement()
        };

        match result {
            Ok(stmt) => Some(stmt),
            Err(ParseError) => {
                self.synchronize();
                None
            }
        }
    }

    fn var_declaration(&mut self) -> ParseResult<Stmt> {
        let name = self.expect(TokenKind::Identifier, "Expected variable name.")?;

        let initializer = if self.matches(&[TokenKind::Equal]) {
            Some(self.expression()?)
        } else {
            None
        };

        self.expect(
            TokenKind::Semicolon,
            "Expected ';' after variable declaration.",
        )?;
        Ok(Stmt::Var { name, initializer })
    }

    fn statement(&mut self) -> ParseResult<Stmt> {
        if self.matches(&[TokenKind::For]) {
            return self.for_statement();
        }
        if self.matches(&[TokenKind::If]) {
            return self.if_statement();
        }
        if self.matches(&[TokenKind::Print]) {
            return self.print_statement();
        }
        if self.matches(&[TokenKind::While]) {
            return self.while_statement();
        }
        if self.matches(&[TokenKind::LeftBrace]) {
            return Ok(Stmt::Block(self.block()?));
        }
        self.expression_statement()
    }

    fn block(&mut self) -> ParseResult<Vec<Stmt>> {
        let mut statements = Vec::new();

        while !self.check(TokenKind::RightBrace) && !self.is_at_end() {
            if let Some(stmt) = self.declaration() {
                statements.push(stmt);
            }
        }

        self.expect(TokenKind::RightBrace, "Expected '}' after block.")?;
        Ok(statements)
    }

    fn expression_statement(&mut self) -> ParseResult<Stmt> {
        let expr = self.expression()?;
        self.expect(TokenKind::Semicolon, "Expected ';' after expression.")?;
        Ok(Stmt::Expression(expr))
    }

    fn print_statement(&mut self) -> ParseResult<Stmt> {
        let value = self.expression()?;
        self.expect(TokenKind::Semicolon, "Expected ';' after value.")?;
        Ok(Stmt::Print(value))
    }

    fn if_statement(&mut self) -> ParseResult<Stmt> {
        self.expect(TokenKind::LeftParen, "Expected '(' after 'if'.")?;
        let condition = self.expression()?;
        self.expect(TokenKind::RightParen, "Expected ')' after if condition.")?;

        let then_branch = Box::new(self.statement()?);
        let else_branch = if self.matches(&[TokenKind::Else]) {
            Some(Box::new(self.statement()?))
        } else {
            None
        };

        Ok(Stmt::If {
            condition,
            then_branch,
            else_branch,
        })
    }

    fn while_statement(&mut self) -> ParseResult<Stmt> {
        self.expect(TokenKind::LeftParen, "Expected '(' after 'while'.")?;
        let condition = self.expression()?;
        self.expect(
            TokenKind::RightParen,
            "Expected ')' after while-loop condition.",
        )?;
        let body = Box::new(self.statement()?);

        Ok(Stmt::While { condition, body })
    }

    /// `for` has no node of its own: it is rewritten at parse time into
    /// the equivalent `while` shape.
    ///
    /// ```text
    /// for (init; cond; incr) body
    /// =>
    /// { init; while (cond) { body; incr; } }
    /// ```
    ///
    /// with each clause optional (a missing condition loops forever).
    fn for_statement(&mut self) -> ParseResult<Stmt> {
        self.expect(TokenKind::LeftParen, "Expected '(' after 'for'.")?;

        let initializer = if self.matches(&[TokenKind::Semicolon]) {
            None
        } else if self.matches(&[TokenKind::Var]) {
            Some(self.var_declaration()?)
        } else {
            Some(self.expression_statement()?)
        };

        let condition = if self.check(TokenKind::Semicolon) {
            None
        } else {
            Some(self.expression()?)
        };
        self.expect(TokenKind::Semicolon, "Expected ';' after for-loop condition.")?;

        let increment = if self.check(TokenKind::RightParen) {
            None
        } else {
            Some(self.expression()?)
        };
        self.expect(TokenKind::RightParen, "Expected ')' after for-loop clauses.")?;

        let mut body = self.statement()?;

        if let Some(increment) = increment {
            body = Stmt::Block(vec![body, Stmt::Expression(increment)]);
        }

        let condition = condition.unwrap_or(Expr::Literal(LitKind::Bool(true)));
        body = Stmt::While {
            condition,
            body: Box::new(body),
        };

        if let Some(initializer) = initializer {
            body = Stmt::Block(vec![initializer, body]);
        }

        Ok(body)
    }

    // --- Recovery ----------------------------------------------------------

    /// Discard tokens until a statement boundary: just past a semicolon,
    /// or looking at a statement-starting keyword.
    fn synchronize(&mut self) {
        trace!(pos = self.current, "synchronizing after syntax error");
        self.advance();

        while !self.is_at_end() {
            if self.previous().kind == TokenKind::Semicolon {
                return;
            }
            if STMT_BOUNDARY.contains(self.current_kind()) {
                return;
            }
            self.advance();
        }
    }

    // --- Token navigation ---------------------------------------------------

    #[inline]
    fn current(&self) -> &Token {
        &self.tokens[self.current]
    }

    #[inline]
    fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    fn previous(&self) -> &Token {
        &self.tokens[self.current - 1]
    }

    #[inline]
    fn is_at_end(&self) -> bool {
        self.current_kind() == TokenKind::Eof
    }

    /// True if the current token has the given kind. Never true for
    /// `Eof`, mirroring the end-of-stream checks in the grammar loops.
    #[inline]
    fn check(&self, kind: TokenKind) -> bool {
        !self.is_at_end() && self.current_kind() == kind
    }

    /// Consume the current token (the cursor never moves past `Eof`) and
    /// return the consumed token.
    fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.previous()
    }

    /// Consume the current token if its kind is one of `kinds`.
    fn matches(&mut self, kinds: &[TokenKind]) -> bool {
        for &kind in kinds {
            if self.check(kind) {
                self.advance();
                return true;
            }
        }
        false
    }

    /// Consume a token of the given kind or record a syntax error at the
    /// current token.
    fn expect(&mut self, kind: TokenKind, message: &str) -> ParseResult<Token> {
        if self.check(kind) {
            return Ok(self.advance().clone());
        }
        Err(self.error_at_current(message))
    }

    // --- Diagnostics --------------------------------------------------------

    /// Record a diagnostic without abandoning the current declaration.
    fn report(&mut self, token: &Token, message: &str) {
        self.diagnostics.push(Diagnostic::parse_at(token, message));
    }

    /// Record a diagnostic and produce the abandon-this-declaration
    /// signal.
    fn error(&mut self, token: &Token, message: &str) -> ParseError {
        self.report(token, message);
        ParseError
    }

    fn error_at_current(&mut self, message: &str) -> ParseError {
        let token = self.current().clone();
        self.error(&token, message)
    }
}
