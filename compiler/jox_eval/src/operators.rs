//! Binary and unary operator implementations.
//!
//! Direct enum dispatch: the value set is closed, so pattern matching
//! gives exhaustiveness checking at every operator/operand combination.
//! Faults name the operator token they were raised at.

use jox_ir::{Token, TokenKind};

use crate::error::{
    addition_type_mismatch, division_by_zero, operand_must_be_number, operands_must_be_numbers,
    unsupported_operator, EvalResult,
};
use crate::value::Value;

/// Evaluate a binary operator over two already-evaluated operands.
///
/// Equality is structural over the whole value union; the comparison and
/// arithmetic operators demand two numbers. `+` alone is overloaded for
/// string concatenation, with no coercion between the two.
pub(crate) fn evaluate_binary(operator: &Token, left: Value, right: Value) -> EvalResult {
    match operator.kind {
        TokenKind::EqualEqual => Ok(Value::Bool(left == right)),
        TokenKind::BangEqual => Ok(Value::Bool(left != right)),

        TokenKind::Plus => match (left, right) {
            (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
            (Value::Str(a), Value::Str(b)) => Ok(Value::Str(a + &b)),
            _ => Err(addition_type_mismatch(operator)),
        },

        TokenKind::Greater
        | TokenKind::GreaterEqual
        | TokenKind::Less
        | TokenKind::LessEqual
        | TokenKind::Minus
        | TokenKind::Slash
        | TokenKind::Star => match (left, right) {
            (Value::Number(a), Value::Number(b)) => numeric_binary(operator, a, b),
            _ => Err(operands_must_be_numbers(operator)),
        },

        _ => Err(unsupported_operator(operator)),
    }
}

/// Numeric arm of [`evaluate_binary`]; both operands already checked.
fn numeric_binary(operator: &Token, a: f64, b: f64) -> EvalResult {
    match operator.kind {
        TokenKind::Greater => Ok(Value::Bool(a > b)),
        TokenKind::GreaterEqual => Ok(Value::Bool(a >= b)),
        TokenKind::Less => Ok(Value::Bool(a < b)),
        TokenKind::LessEqual => Ok(Value::Bool(a <= b)),
        TokenKind::Minus => Ok(Value::Number(a - b)),
        TokenKind::Star => Ok(Value::Number(a * b)),
        TokenKind::Slash => {
            // Checked before dividing, so this path never produces an
            // IEEE infinity or NaN.
            if b == 0.0 {
                Err(division_by_zero(operator))
            } else {
                Ok(Value::Number(a / b))
            }
        }
        _ => Err(unsupported_operator(operator)),
    }
}

/// Evaluate a unary operator.
pub(crate) fn evaluate_unary(operator: &Token, operand: Value) -> EvalResult {
    match operator.kind {
        TokenKind::Minus => match operand {
            Value::Number(n) => Ok(Value::Number(-n)),
            _ => Err(operand_must_be_number(operator)),
        },
        TokenKind::Bang => Ok(Value::Bool(!operand.is_truthy())),
        _ => Err(unsupported_operator(operator)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn op(kind: TokenKind, lexeme: &str) -> Token {
        Token::new(kind, lexeme, None, 1)
    }

    #[test]
    fn arithmetic_on_numbers() {
        let minus = op(TokenKind::Minus, "-");
        assert_eq!(
            evaluate_binary(&minus, Value::Number(5.0), Value::Number(3.0)),
            Ok(Value::Number(2.0))
        );
    }

    #[test]
    fn division_by_zero_faults_before_dividing() {
        let slash = op(TokenKind::Slash, "/");
        let err = match evaluate_binary(&slash, Value::Number(5.0), Value::Number(0.0)) {
            Err(err) => err,
            Ok(v) => panic!("expected fault, got {v:?}"),
        };
        assert_eq!(err.message, "Division by zero.");
    }

    #[test]
    fn negative_zero_divisor_also_faults() {
        let slash = op(TokenKind::Slash, "/");
        assert!(evaluate_binary(&slash, Value::Number(1.0), Value::Number(-0.0)).is_err());
    }

    #[test]
    fn plus_concatenates_strings() {
        let plus = op(TokenKind::Plus, "+");
        assert_eq!(
            evaluate_binary(
                &plus,
                Value::Str(String::from("foo")),
                Value::Str(String::from("bar"))
            ),
            Ok(Value::Str(String::from("foobar")))
        );
    }

    #[test]
    fn plus_refuses_mixed_operands() {
        let plus = op(TokenKind::Plus, "+");
        let err = match evaluate_binary(&plus, Value::Str(String::from("foo")), Value::Number(1.0))
        {
            Err(err) => err,
            Ok(v) => panic!("expected fault, got {v:?}"),
        };
        assert_eq!(err.message, "Operands must be two numbers or two strings.");
    }

    #[test]
    fn comparison_requires_numbers() {
        let less = op(TokenKind::Less, "<");
        let err = match evaluate_binary(&less, Value::Number(1.0), Value::Str(String::from("a"))) {
            Err(err) => err,
            Ok(v) => panic!("expected fault, got {v:?}"),
        };
        assert_eq!(err.message, "Operands must be numbers.");
    }

    #[test]
    fn equality_crosses_tags_as_false() {
        let eq = op(TokenKind::EqualEqual, "==");
        assert_eq!(
            evaluate_binary(&eq, Value::Number(1.0), Value::Str(String::from("1"))),
            Ok(Value::Bool(false))
        );
        assert_eq!(
            evaluate_binary(&eq, Value::Nil, Value::Nil),
            Ok(Value::Bool(true))
        );
    }

    #[test]
    fn unary_minus_requires_a_number() {
        let minus = op(TokenKind::Minus, "-");
        assert_eq!(
            evaluate_unary(&minus, Value::Number(4.0)),
            Ok(Value::Number(-4.0))
        );
        let err = match evaluate_unary(&minus, Value::Str(String::from("a"))) {
            Err(err) => err,
            Ok(v) => panic!("expected fault, got {v:?}"),
        };
        assert_eq!(err.message, "Operand must be a number.");
    }

    #[test]
    fn bang_negates_truthiness_of_anything() {
        let bang = op(TokenKind::Bang, "!");
        assert_eq!(evaluate_unary(&bang, Value::Nil), Ok(Value::Bool(true)));
        assert_eq!(
            evaluate_unary(&bang, Value::Number(0.0)),
            Ok(Value::Bool(false))
        );
    }
}
