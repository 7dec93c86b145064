//! Integration tests for end-to-end tokenization.
//!
//! These tests verify the public `run` entry point and the `upita` binary
//! in its eval and file modes.

use assert_cmd::Command;
use predicates::prelude::*;
use upita::{
    display_error,
    errors::errors::ErrorImpl,
    lexer::tokens::{format_tokens, TokenKind, TokenValue},
    run,
};

#[test]
fn test_run_simple_expression() {
    let tokens = run("test.calc", "2+3").unwrap();

    assert_eq!(format_tokens(&tokens), "[INT:2, PLUS, INT:3, EOF]");
}

#[test]
fn test_run_nested_expression() {
    let tokens = run("test.calc", "((1.5 + 2) * 3) / 4 - 0.25").unwrap();

    assert_eq!(tokens.len(), 14);
    assert_eq!(tokens[2].value, Some(TokenValue::Float(1.5)));
    assert_eq!(tokens[12].value, Some(TokenValue::Float(0.25)));
    assert_eq!(tokens.last().unwrap().kind, TokenKind::EOF);
    assert!(tokens
        .iter()
        .filter(|t| matches!(t.kind, TokenKind::Int | TokenKind::Float))
        .all(|t| t.value.is_some()));
}

#[test]
fn test_run_is_idempotent() {
    let first = run("test.calc", "3.14*2 - (1/7)").unwrap();
    let second = run("test.calc", "3.14*2 - (1/7)").unwrap();

    assert_eq!(first, second);

    let first = run("test.calc", "2 ^ 2").unwrap_err();
    let second = run("test.calc", "2 ^ 2").unwrap_err();

    assert_eq!(first.as_string(), second.as_string());
}

#[test]
fn test_run_reports_filename() {
    let error = run("session.calc", "1..2").unwrap_err();

    assert_eq!(error.get_kind(), &ErrorImpl::IllegalFloatingPoint);
    assert_eq!(
        error.as_string(),
        "IllegalFloatingPointError: Two floating points in a same float\nFile session.calc, line 1"
    );
    assert!(display_error(&error).contains("-> session.calc"));
}

#[test]
fn test_cli_eval_prints_tokens() {
    let mut cmd = Command::cargo_bin("upita").unwrap();
    cmd.args(["-e", "(5-2)"])
        .assert()
        .success()
        .stdout("[LPAREN, INT:5, MINUS, INT:2, RPAREN, EOF]\n");
}

#[test]
fn test_cli_eval_reports_illegal_character() {
    let mut cmd = Command::cargo_bin("upita").unwrap();
    cmd.args(["-e", "5&3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("IllegalCharacterError: '&'"))
        .stderr(predicate::str::contains("-> <eval>"));
}

#[test]
fn test_cli_file_mode() {
    let path = std::env::temp_dir().join(format!("upita_cli_{}.calc", std::process::id()));
    std::fs::write(&path, "3.14 * 2\n").unwrap();

    let mut cmd = Command::cargo_bin("upita").unwrap();
    cmd.arg(&path)
        .assert()
        .success()
        .stdout("[FLOAT:3.14, MUL, INT:2, EOF]\n");

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_cli_missing_file() {
    let mut cmd = Command::cargo_bin("upita").unwrap();
    cmd.arg("does/not/exist.calc")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}
