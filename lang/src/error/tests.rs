use expect_test::expect;

use super::*;
use crate::interpreter::RuntimeError;
use crate::lexer::token::Position;
use crate::lexer::LexError;
use crate::parser::ParseError;

fn span(start: (usize, u32, u32), end: (usize, u32, u32)) -> Span {
    Span::new(
        Position::new(start.0, start.1, start.2),
        Position::new(end.0, end.1, end.2),
    )
}

#[test]
fn scan_error_display() {
    let err = RunletError::scan("Unexpected character '@'", span((4, 0, 4), (4, 0, 4)));
    expect![[r#"0:4-0:4 > Illegal Character(s): Unexpected character '@'"#]]
        .assert_eq(&err.to_string());
}

#[test]
fn syntax_error_display() {
    let err = RunletError::syntax(
        "Expected Newline, found Keyword 'run'",
        span((20, 1, 0), (23, 1, 3)),
    );
    expect![[r#"1:0-1:3 > Invalid Syntax: Expected Newline, found Keyword 'run'"#]]
        .assert_eq(&err.to_string());
}

#[test]
fn runtime_error_display() {
    let err = RunletError::runtime("Division by zero");
    expect![[r#"Runtime Error: Division by zero"#]].assert_eq(&err.to_string());
}

#[test]
fn error_kind_labels() {
    let scan = RunletError::scan("x", span((0, 0, 0), (0, 0, 0)));
    let syntax = RunletError::syntax("x", span((0, 0, 0), (0, 0, 0)));
    let runtime = RunletError::runtime("x");

    assert_eq!(scan.kind(), "Illegal Character(s)");
    assert_eq!(syntax.kind(), "Invalid Syntax");
    assert_eq!(runtime.kind(), "Runtime Error");
}

#[test]
fn from_lex_error() {
    let err = RunletError::from(LexError::UnterminatedString {
        span: span((0, 0, 0), (4, 0, 4)),
    });
    assert_eq!(err.kind(), "Illegal Character(s)");
    assert_eq!(err.message(), "Unterminated string literal");
    assert_eq!(err.span(), Some(span((0, 0, 0), (4, 0, 4))));

    let err = RunletError::from(LexError::UnexpectedCharacter {
        ch: '#',
        span: span((2, 0, 2), (2, 0, 2)),
    });
    assert_eq!(err.message(), "Unexpected character '#'");
}

#[test]
fn from_parse_error() {
    let err = RunletError::from(ParseError {
        message: "Expected identifier, found Integer '5'".to_string(),
        span: span((8, 0, 8), (9, 0, 9)),
    });
    assert_eq!(err.kind(), "Invalid Syntax");
    assert_eq!(err.span(), Some(span((8, 0, 8), (9, 0, 9))));
}

#[test]
fn from_runtime_error() {
    let err = RunletError::from(RuntimeError::UnassignedVariable("x".to_string()));
    assert_eq!(err.kind(), "Runtime Error");
    assert_eq!(err.message(), "Variable used before assignment: x");
    assert_eq!(err.span(), None);
}
