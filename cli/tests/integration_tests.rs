//! Integration tests for the runlet CLI.

use assert_cmd::Command;
use predicates::prelude::*;

fn fixture(name: &str) -> String {
    format!("{}/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

// ============================================================================
// Script files
// ============================================================================

#[test]
fn arithmetic_script() {
    let mut cmd = Command::cargo_bin("runlet-cli").unwrap();
    let assert = cmd.arg(fixture("arithmetic.rlt")).assert();
    assert.success().stdout("> 14\n> 20\n");
}

#[test]
fn countdown_script() {
    let mut cmd = Command::cargo_bin("runlet-cli").unwrap();
    let assert = cmd.arg(fixture("countdown.rlt")).assert();
    assert.success().stdout("> 0\n> 1\n> 2\n");
}

#[test]
fn branching_script() {
    let mut cmd = Command::cargo_bin("runlet-cli").unwrap();
    let assert = cmd.arg(fixture("branching.rlt")).assert();
    assert.success().stdout("two\n");
}

#[test]
fn greeting_script_mixes_prefixed_and_plain_output() {
    let mut cmd = Command::cargo_bin("runlet-cli").unwrap();
    let assert = cmd.arg(fixture("greeting.rlt")).assert();
    assert.success().stdout("hello, world\n> 42\n");
}

#[test]
fn missing_file_reports_usage_error() {
    let mut cmd = Command::cargo_bin("runlet-cli").unwrap();
    let assert = cmd.arg(fixture("no_such_file.rlt")).assert();
    assert
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error reading file"));
}

// ============================================================================
// Inline programs and stdin
// ============================================================================

#[test]
fn eval_inline_program() {
    let mut cmd = Command::cargo_bin("runlet-cli").unwrap();
    let assert = cmd.arg("-e").arg("print 1 + 2\nrun").assert();
    assert.success().stdout("> 3\n");
}

#[test]
fn eval_appends_missing_final_newline() {
    let mut cmd = Command::cargo_bin("runlet-cli").unwrap();
    let assert = cmd.arg("--eval").arg("print \"ok\"\nrun").assert();
    assert.success().stdout("ok\n");
}

#[test]
fn stdin_program() {
    let mut cmd = Command::cargo_bin("runlet-cli").unwrap();
    let assert = cmd.write_stdin("print 7 / 2\nrun\n").assert();
    assert.success().stdout("> 3\n");
}

#[test]
fn stdin_declaration_program() {
    let mut cmd = Command::cargo_bin("runlet-cli").unwrap();
    let assert = cmd
        .write_stdin("var int x = 1\nprint x\nrun\n")
        .assert();
    assert.success().stdout("> 1\n");
}

// ============================================================================
// Error reporting
// ============================================================================

#[test]
fn illegal_character_is_rendered_with_its_span() {
    let mut cmd = Command::cargo_bin("runlet-cli").unwrap();
    let assert = cmd.arg("-e").arg("x = @\nrun").assert();
    assert
        .failure()
        .code(2)
        .stderr(predicate::str::contains(
            "0:4-0:4 > Illegal Character(s): Unexpected character '@'",
        ))
        .stdout("");
}

#[test]
fn syntax_error_is_rendered_with_expected_and_actual() {
    let mut cmd = Command::cargo_bin("runlet-cli").unwrap();
    let assert = cmd.arg("-e").arg("var x = 1\nrun").assert();
    assert
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid Syntax"))
        .stderr(predicate::str::contains("Expected data type (int or float)"));
}

#[test]
fn runtime_error_is_rendered_without_a_span() {
    let mut cmd = Command::cargo_bin("runlet-cli").unwrap();
    let assert = cmd.arg("-e").arg("print missing\nrun").assert();
    assert
        .failure()
        .code(2)
        .stderr("Runtime Error: Variable not declared: missing\n");
}

#[test]
fn division_by_zero_is_a_runtime_error() {
    let mut cmd = Command::cargo_bin("runlet-cli").unwrap();
    let assert = cmd.arg("-e").arg("print 5 / 0\nrun").assert();
    assert
        .failure()
        .code(2)
        .stderr("Runtime Error: Division by zero\n");
}

// ============================================================================
// Debug introspection
// ============================================================================

#[test]
fn debug_flag_dumps_tokens_and_ast() {
    let mut cmd = Command::cargo_bin("runlet-cli").unwrap();
    let assert = cmd.arg("-d").arg("-e").arg("print 1\nrun").assert();
    assert
        .success()
        .stdout(predicate::str::contains("Tokens:"))
        .stdout(predicate::str::contains("Token(Keyword, \"print\", 0:0-0:5)"))
        .stdout(predicate::str::contains("AST:"))
        .stdout(predicate::str::contains("Program"))
        .stdout(predicate::str::contains("  PrintStatement"))
        .stdout(predicate::str::contains("> 1\n"));
}
