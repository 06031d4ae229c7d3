//! Statement execution and expression evaluation.
//!
//! One recursive function per concern: [`Interpreter::execute`] for
//! statements, [`Interpreter::evaluate`] for expressions, each matching
//! its node enum exhaustively.

use jox_ir::{Expr, Stmt, TokenKind};
use tracing::debug;

use crate::environment::Environment;
use crate::error::{EvalResult, RuntimeError};
use crate::operators;
use crate::print_sink::PrintSink;
use crate::value::Value;

/// The tree-walking interpreter.
///
/// Holds the process-lifetime outermost scope, so a REPL can feed it one
/// statement list per line and keep bindings across lines.
#[derive(Default)]
pub struct Interpreter {
    pub(crate) env: Environment,
    sink: PrintSink,
}

impl Interpreter {
    /// Interpreter printing to stdout.
    pub fn new() -> Self {
        Interpreter::default()
    }

    /// Interpreter printing into the given sink.
    pub fn with_sink(sink: PrintSink) -> Self {
        Interpreter {
            env: Environment::new(),
            sink,
        }
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Drain output captured by a buffer sink.
    pub fn take_output(&mut self) -> String {
        self.sink.take_output()
    }

    /// Execute a statement list in order.
    ///
    /// The first runtime fault aborts the remaining statements (there is
    /// no isolation between top-level statements) and is returned to the
    /// caller exactly once, with every block scope opened along the way
    /// already unwound.
    pub fn interpret(&mut self, statements: &[Stmt]) -> Result<(), RuntimeError> {
        debug!(statements = statements.len(), "interpreting");
        for statement in statements {
            self.execute(statement)?;
        }
        Ok(())
    }

    fn execute(&mut self, statement: &Stmt) -> Result<(), RuntimeError> {
        match statement {
            Stmt::Expression(expr) => {
                self.evaluate(expr)?;
                Ok(())
            }
            Stmt::Print(expr) => {
                let value = self.evaluate(expr)?;
                self.sink.println(&value.to_string());
                Ok(())
            }
            Stmt::Var { name, initializer } => {
                let value = match initializer {
                    Some(expr) => self.evaluate(expr)?,
                    None => Value::Nil,
                };
                self.env.define(&name.lexeme, value);
                Ok(())
            }
            Stmt::Block(statements) => self.execute_block(statements),
            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                if self.evaluate(condition)?.is_truthy() {
                    self.execute(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.execute(else_branch)
                } else {
                    Ok(())
                }
            }
            Stmt::While { condition, body } => {
                // No iteration cap: a non-terminating condition is the
                // program's bug, not a detected condition.
                while self.evaluate(condition)?.is_truthy() {
                    self.execute(body)?;
                }
                Ok(())
            }
        }
    }

    /// Run a block's statements in a fresh child scope. The scope guard
    /// pops the scope on every exit path, including a propagating fault.
    fn execute_block(&mut self, statements: &[Stmt]) -> Result<(), RuntimeError> {
        let mut scoped = self.scoped();
        for statement in statements {
            scoped.execute(statement)?;
        }
        Ok(())
    }

    fn evaluate(&mut self, expr: &Expr) -> EvalResult {
        match expr {
            Expr::Literal(lit) => Ok(Value::from(lit)),
            Expr::Grouping(inner) => self.evaluate(inner),
            Expr::Unary { operator, operand } => {
                let operand = self.evaluate(operand)?;
                operators::evaluate_unary(operator, operand)
            }
            Expr::Binary {
                left,
                operator,
                right,
            } => {
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                operators::evaluate_binary(operator, left, right)
            }
            Expr::Logical {
                left,
                operator,
                right,
            } => {
                // Short-circuit: yield one of the two operand values
                // as-is, never a synthesized boolean.
                let left = self.evaluate(left)?;
                let short_circuits = if operator.kind == TokenKind::Or {
                    left.is_truthy()
                } else {
                    !left.is_truthy()
                };
                if short_circuits {
                    Ok(left)
                } else {
                    self.evaluate(right)
                }
            }
            Expr::Variable(name) => self.env.get(name),
            Expr::Assign { name, value } => {
                let value = self.evaluate(value)?;
                self.env.assign(name, value.clone())?;
                Ok(value)
            }
        }
    }
}
