//! Expression grammar: precedence climbing via recursive descent.
//!
//! One method per precedence level, lowest binding first. Each level
//! parses one operand at the next-higher level, then loops consuming its
//! own operators, folding results to the left. Assignment alone is
//! right-associative and handled by recursion instead of a loop.

use jox_ir::{Expr, LitKind, Literal, TokenKind};

use crate::error::ParseResult;
use crate::Parser;

/// Binary operator kinds that may appear dangling without a left operand.
/// `Minus` is absent: a leading `-` is a valid unary expression.
const DANGLING_BINARY: [TokenKind; 10] = [
    TokenKind::BangEqual,
    TokenKind::Equal,
    TokenKind::EqualEqual,
    TokenKind::Greater,
    TokenKind::GreaterEqual,
    TokenKind::Less,
    TokenKind::LessEqual,
    TokenKind::Plus,
    TokenKind::Slash,
    TokenKind::Star,
];

impl Parser<'_> {
    /// `expression := assignment`
    pub(crate) fn expression(&mut self) -> ParseResult<Expr> {
        self.assignment()
    }

    /// `assignment := IDENTIFIER "=" assignment | logic_or`
    ///
    /// The left side is parsed as an ordinary expression first; only once
    /// `=` shows up do we check that it was a bare variable. Anything else
    /// is reported, but the pass keeps the left side as a best-effort
    /// node and carries on.
    fn assignment(&mut self) -> ParseResult<Expr> {
        let expr = self.or()?;

        if self.matches(&[TokenKind::Equal]) {
            let equals = self.previous().clone();
            let value = self.assignment()?;

            return match expr {
                Expr::Variable(name) => Ok(Expr::Assign {
                    name,
                    value: Box::new(value),
                }),
                other => {
                    self.report(&equals, "Invalid assignment target.");
                    Ok(other)
                }
            };
        }

        Ok(expr)
    }

    fn or(&mut self) -> ParseResult<Expr> {
        let mut expr = self.and()?;

        while self.matches(&[TokenKind::Or]) {
            let operator = self.previous().clone();
            let right = self.and()?;
            expr = Expr::Logical {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    fn and(&mut self) -> ParseResult<Expr> {
        let mut expr = self.equality()?;

        while self.matches(&[TokenKind::And]) {
            let operator = self.previous().clone();
            let right = self.equality()?;
            expr = Expr::Logical {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    fn equality(&mut self) -> ParseResult<Expr> {
        let mut expr = self.comparison()?;

        while self.matches(&[TokenKind::BangEqual, TokenKind::EqualEqual]) {
            let operator = self.previous().clone();
            let right = self.comparison()?;
            expr = Expr::Binary {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    fn comparison(&mut self) -> ParseResult<Expr> {
        let mut expr = self.term()?;

        while self.matches(&[
            TokenKind::Greater,
            TokenKind::GreaterEqual,
            TokenKind::Less,
            TokenKind::LessEqual,
        ]) {
            let operator = self.previous().clone();
            let right = self.term()?;
            expr = Expr::Binary {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    fn term(&mut self) -> ParseResult<Expr> {
        let mut expr = self.factor()?;

        while self.matches(&[TokenKind::Minus, TokenKind::Plus]) {
            let operator = self.previous().clone();
            let right = self.factor()?;
            expr = Expr::Binary {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    fn factor(&mut self) -> ParseResult<Expr> {
        let mut expr = self.unary()?;

        while self.matches(&[TokenKind::Slash, TokenKind::Star]) {
            let operator = self.previous().clone();
            let right = self.unary()?;
            expr = Expr::Binary {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    fn unary(&mut self) -> ParseResult<Expr> {
        if self.matches(&[TokenKind::Bang, TokenKind::Minus]) {
            let operator = self.previous().clone();
            let operand = self.unary()?;
            return Ok(Expr::Unary {
                operator,
                operand: Box::new(operand),
            });
        }

        self.primary()
    }

    fn primary(&mut self) -> ParseResult<Expr> {
        if self.matches(&[TokenKind::True]) {
            return Ok(Expr::Literal(LitKind::Bool(true)));
        }
        if self.matches(&[TokenKind::False]) {
            return Ok(Expr::Literal(LitKind::Bool(false)));
        }
        if self.matches(&[TokenKind::Nil]) {
            return Ok(Expr::Literal(LitKind::Nil));
        }

        if self.matches(&[TokenKind::Number, TokenKind::String]) {
            let token = self.previous().clone();
            let lit = match token.literal {
                Some(Literal::Number(n)) => LitKind::Number(n),
                Some(Literal::Str(s)) => LitKind::Str(s),
                // A number/string token always carries its literal; a
                // missing one means the stream didn't come from the lexer.
                None => return Err(self.error(&token, "Expected an expression.")),
            };
            return Ok(Expr::Literal(lit));
        }

        if self.matches(&[TokenKind::Identifier]) {
            return Ok(Expr::Variable(self.previous().clone()));
        }

        if self.matches(&[TokenKind::LeftParen]) {
            let expr = self.expression()?;
            self.expect(TokenKind::RightParen, "Expected ')' after expression.")?;
            return Ok(Expr::Grouping(Box::new(expr)));
        }

        // Error production: a binary operator with no left operand.
        // Report it, then re-parse the rest as a fresh expression so the
        // statement survives.
        if self.matches(&DANGLING_BINARY) {
            let operator = self.previous().clone();
            self.report(&operator, "Binary operator is missing a left-hand operand.");
            return self.expression();
        }

        let token = self.current().clone();
        Err(self.error(&token, "Expected an expression."))
    }
}
