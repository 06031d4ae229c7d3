//! Runtime fault type and its factory functions.
//!
//! A [`RuntimeError`] carries the offending token so the diagnostic can
//! name the line and lexeme. Factory functions centralize the message
//! strings; call sites stay free of formatting.
//!
//! This type is deliberately separate from the parser's internal failure
//! signal: a runtime fault propagates out of the evaluator to the driver,
//! while a parse failure never escapes the parser.

use jox_diagnostic::Diagnostic;
use jox_ir::Token;

use crate::value::Value;

/// Result of evaluating one expression.
pub type EvalResult = Result<Value, RuntimeError>;

/// A fault raised during evaluation, fatal to the current statement list.
#[derive(Clone, Debug, PartialEq)]
pub struct RuntimeError {
    /// The operator or identifier the fault points at.
    pub token: Token,
    pub message: String,
}

impl RuntimeError {
    pub fn new(token: Token, message: impl Into<String>) -> Self {
        RuntimeError {
            token,
            message: message.into(),
        }
    }

    /// Convert into the shared diagnostic record for rendering.
    pub fn into_diagnostic(self) -> Diagnostic {
        Diagnostic::runtime_at(&self.token, self.message)
    }
}

// Factory functions, one per fault condition.

pub(crate) fn operand_must_be_number(operator: &Token) -> RuntimeError {
    RuntimeError::new(operator.clone(), "Operand must be a number.")
}

pub(crate) fn operands_must_be_numbers(operator: &Token) -> RuntimeError {
    RuntimeError::new(operator.clone(), "Operands must be numbers.")
}

pub(crate) fn addition_type_mismatch(operator: &Token) -> RuntimeError {
    RuntimeError::new(
        operator.clone(),
        "Operands must be two numbers or two strings.",
    )
}

pub(crate) fn division_by_zero(operator: &Token) -> RuntimeError {
    RuntimeError::new(operator.clone(), "Division by zero.")
}

pub(crate) fn undefined_variable(name: &Token) -> RuntimeError {
    RuntimeError::new(
        name.clone(),
        format!("Undefined variable '{}'.", name.lexeme),
    )
}

/// Guard for operator kinds the parser never produces in this position.
pub(crate) fn unsupported_operator(operator: &Token) -> RuntimeError {
    RuntimeError::new(
        operator.clone(),
        format!("Unsupported operator '{}'.", operator.lexeme),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use jox_ir::TokenKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn fault_renders_through_the_shared_contract() {
        let token = Token::new(TokenKind::Identifier, "count", None, 4);
        let fault = undefined_variable(&token);
        assert_eq!(
            fault.into_diagnostic().to_string(),
            "[line 4] RuntimeError at 'count': Undefined variable 'count'."
        );
    }
}
