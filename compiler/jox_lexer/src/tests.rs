//! Lexer tests: token shapes, line accounting, and error accumulation.

use crate::{lex, Lexer};
use jox_ir::{Literal, TokenKind};
use pretty_assertions::assert_eq;

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).tokens.iter().map(|t| t.kind).collect()
}

// === Single tokens ===

#[test]
fn punctuation_and_operators() {
    assert_eq!(
        kinds("( ) { } , . ; + - * /"),
        vec![
            TokenKind::LeftParen,
            TokenKind::RightParen,
            TokenKind::LeftBrace,
            TokenKind::RightBrace,
            TokenKind::Comma,
            TokenKind::Dot,
            TokenKind::Semicolon,
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn empty_source_is_just_eof() {
    let out = lex("");
    assert_eq!(kinds(""), vec![TokenKind::Eof]);
    assert_eq!(out.tokens[0].line, 1);
    assert!(!out.has_errors());
}

// === Maximal munch ===

#[test]
fn two_character_operators_win() {
    assert_eq!(
        kinds("!= == <= >="),
        vec![
            TokenKind::BangEqual,
            TokenKind::EqualEqual,
            TokenKind::LessEqual,
            TokenKind::GreaterEqual,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn single_character_operators_when_unpaired() {
    assert_eq!(
        kinds("! = < >"),
        vec![
            TokenKind::Bang,
            TokenKind::Equal,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn three_equals_is_double_then_single() {
    assert_eq!(
        kinds("==="),
        vec![TokenKind::EqualEqual, TokenKind::Equal, TokenKind::Eof]
    );
}

// === Comments ===

#[test]
fn line_comment_consumes_to_newline() {
    assert_eq!(
        kinds("1 // the rest is ignored ;;;\n2"),
        vec![TokenKind::Number, TokenKind::Number, TokenKind::Eof]
    );
}

#[test]
fn comment_at_end_of_input() {
    assert_eq!(kinds("// nothing else"), vec![TokenKind::Eof]);
}

#[test]
fn slash_alone_is_division() {
    assert_eq!(
        kinds("8 / 2"),
        vec![TokenKind::Number, TokenKind::Slash, TokenKind::Number, TokenKind::Eof]
    );
}

// === Line accounting ===

#[test]
fn newlines_increment_lines() {
    let out = lex("1\n2\n\n3");
    let lines: Vec<u32> = out.tokens.iter().map(|t| t.line).collect();
    assert_eq!(lines, vec![1, 2, 4, 4]);
}

#[test]
fn eof_line_is_final_line_count() {
    let out = lex("var a;\nvar b;\n");
    let eof = &out.tokens[out.tokens.len() - 1];
    assert_eq!(eof.kind, TokenKind::Eof);
    assert_eq!(eof.line, 3);
}

// === Strings ===

#[test]
fn string_literal_drops_quotes() {
    let out = lex("\"hello\"");
    assert_eq!(out.tokens[0].kind, TokenKind::String);
    assert_eq!(out.tokens[0].lexeme, "\"hello\"");
    assert_eq!(out.tokens[0].literal, Some(Literal::Str(String::from("hello"))));
}

#[test]
fn empty_string_literal() {
    let out = lex("\"\"");
    assert_eq!(out.tokens[0].literal, Some(Literal::Str(String::new())));
}

#[test]
fn multi_line_string_counts_lines() {
    let out = lex("\"a\nb\" 1");
    assert_eq!(out.tokens[0].kind, TokenKind::String);
    assert_eq!(out.tokens[0].literal, Some(Literal::Str(String::from("a\nb"))));
    // Token is recorded on the line where the string closed.
    assert_eq!(out.tokens[0].line, 2);
    assert_eq!(out.tokens[1].line, 2);
    assert!(!out.has_errors());
}

#[test]
fn string_has_no_escape_sequences() {
    let out = lex(r#""a\nb""#);
    assert_eq!(
        out.tokens[0].literal,
        Some(Literal::Str(String::from("a\\nb")))
    );
}

#[test]
fn unterminated_string_reports_and_emits_no_token() {
    let out = lex("\"abc");
    assert!(out.has_errors());
    assert_eq!(kinds("\"abc"), vec![TokenKind::Eof]);
    assert_eq!(
        out.diagnostics[0].to_string(),
        "[line 1] ParseError: Unterminated string."
    );
}

#[test]
fn unterminated_string_reports_line_where_scan_stopped() {
    let out = lex("\"ab\ncd");
    assert_eq!(out.diagnostics[0].line, 2);
}

// === Numbers ===

#[test]
fn integer_and_decimal_literals() {
    let out = lex("42 3.25");
    assert_eq!(out.tokens[0].literal, Some(Literal::Number(42.0)));
    assert_eq!(out.tokens[1].literal, Some(Literal::Number(3.25)));
}

#[test]
fn trailing_dot_is_not_part_of_the_number() {
    assert_eq!(
        kinds("12."),
        vec![TokenKind::Number, TokenKind::Dot, TokenKind::Eof]
    );
}

#[test]
fn leading_dot_is_not_a_number() {
    assert_eq!(
        kinds(".5"),
        vec![TokenKind::Dot, TokenKind::Number, TokenKind::Eof]
    );
}

// === Identifiers and keywords ===

#[test]
fn keywords_resolve_and_identifiers_pass_through() {
    assert_eq!(
        kinds("var language = nil;"),
        vec![
            TokenKind::Var,
            TokenKind::Identifier,
            TokenKind::Equal,
            TokenKind::Nil,
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn keyword_prefix_is_an_identifier() {
    assert_eq!(kinds("orchid"), vec![TokenKind::Identifier, TokenKind::Eof]);
    assert_eq!(kinds("variable"), vec![TokenKind::Identifier, TokenKind::Eof]);
}

#[test]
fn underscores_allowed_in_identifiers() {
    let out = lex("_private name_2");
    assert_eq!(out.tokens[0].lexeme, "_private");
    assert_eq!(out.tokens[1].lexeme, "name_2");
}

#[test]
fn reserved_keywords_still_lex() {
    assert_eq!(
        kinds("class fun return super this"),
        vec![
            TokenKind::Class,
            TokenKind::Fun,
            TokenKind::Return,
            TokenKind::Super,
            TokenKind::This,
            TokenKind::Eof,
        ]
    );
}

// === Lexical errors ===

#[test]
fn unexpected_character_reports_and_continues() {
    let out = lex("1 @ 2");
    assert_eq!(
        out.tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
        vec![TokenKind::Number, TokenKind::Number, TokenKind::Eof]
    );
    assert_eq!(
        out.diagnostics[0].to_string(),
        "[line 1] ParseError: Unexpected character '@'"
    );
}

#[test]
fn errors_accumulate_across_the_scan() {
    let out = lex("#\n$\n%");
    assert_eq!(out.diagnostics.len(), 3);
    let lines: Vec<u32> = out.diagnostics.iter().map(|d| d.line).collect();
    assert_eq!(lines, vec![1, 2, 3]);
}

#[test]
fn non_ascii_character_is_skipped_whole() {
    let out = lex("é 1");
    assert_eq!(out.diagnostics.len(), 1);
    assert_eq!(
        out.tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
        vec![TokenKind::Number, TokenKind::Eof]
    );
}

// === Idempotence ===

#[test]
fn relexing_yields_identical_output() {
    let source = "var a = 1; // note\nwhile (a < 10) { a = a + 1; }\nprint \"done\";";
    let first = lex(source);
    let second = Lexer::new(source).lex();
    assert_eq!(first.tokens, second.tokens);
    assert_eq!(first.diagnostics, second.diagnostics);
}

// === Property tests ===

mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn lexing_never_panics(source in "\\PC*") {
            let _ = lex(&source);
        }

        #[test]
        fn lexing_is_idempotent(source in "\\PC*") {
            let first = lex(&source);
            let second = lex(&source);
            prop_assert_eq!(first.tokens, second.tokens);
        }

        #[test]
        fn token_stream_always_ends_with_eof(source in "\\PC*") {
            let out = lex(&source);
            let last = &out.tokens[out.tokens.len() - 1];
            prop_assert_eq!(last.kind, TokenKind::Eof);
        }
    }
}
