use std::fs;

use tally::{
    ErrorKind, run_source,
    interpreter::evaluator::core::{Evaluator, Outcome},
};

fn run(src: &str) -> tally::Result<Outcome> {
    run_source(src, &mut Evaluator::new())
}

fn assert_exits(src: &str, code: i32) {
    match run(src) {
        Ok(outcome) => assert_eq!(outcome, Outcome::Exit(code), "script: {src}"),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn assert_value(src: &str, value: i32) {
    match run(src) {
        Ok(outcome) => assert_eq!(outcome, Outcome::Value(value), "script: {src}"),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn assert_failure(src: &str, kind: ErrorKind) {
    match run(src) {
        Ok(outcome) => panic!("Script succeeded with {outcome:?} but was expected to fail"),
        Err(e) => assert_eq!(e.kind(), kind, "script: {src}"),
    }
}

#[test]
fn exit_with_basic_arithmetic() {
    for (a, b) in [(7, 3), (0, 5), (100, 10), (12, 12), (9, 4)] {
        assert_exits(&format!("exit {a} + {b};"), a + b);
        assert_exits(&format!("exit {a} - {b};"), a - b);
        assert_exits(&format!("exit {a} * {b};"), a * b);
        assert_exits(&format!("exit {a} / {b};"), a / b);
    }
}

#[test]
fn operators_fold_left_to_right() {
    assert_exits("exit 2 + 3 * 4;", 20);
    assert_exits("exit 1 + 2 * 5 - 3;", 12);
    assert_exits("exit 10 - 4 - 3;", 3);
    assert_exits("exit 100 / 10 / 5;", 2);
}

#[test]
fn parentheses_are_unsupported_syntax() {
    // `(` and `)` are dropped by the lexer, so grouping has no effect and the
    // chain still folds left: ((1 + 2) * 5) - 3, not (1 + 2) * (5 - 3).
    assert_exits("exit (1 + 2) * (5 - 3);", 12);
}

#[test]
fn let_bindings_feed_later_statements() {
    assert_value("let x = 5;", 5);
    assert_exits("let x = 5; exit x;", 5);
    assert_exits("let x = 1; let y = x + 1; exit x + y;", 3);
}

#[test]
fn rebinding_is_last_write_wins() {
    assert_exits("let x = 1; let x = 2; exit x;", 2);
    assert_exits("let x = 1; let x = x + 5; exit x;", 6);
}

#[test]
fn last_statement_is_the_result() {
    assert_value("let a = 1; let b = 2;", 2);
    assert_exits("let a = 1; exit 9;", 9);
}

#[test]
fn empty_program_is_zero() {
    assert_value("", 0);
    assert_value("   \n\t  ", 0);
}

#[test]
fn statements_after_exit_do_not_run() {
    let mut evaluator = Evaluator::new();
    let outcome = run_source("exit 3; let after = 1 / 0;", &mut evaluator).unwrap();

    assert_eq!(outcome, Outcome::Exit(3));
    assert!(!evaluator.environment().contains("after"));
}

#[test]
fn session_state_persists_between_sources() {
    let mut evaluator = Evaluator::new();

    assert_eq!(run_source("let total = 40;", &mut evaluator), Ok(Outcome::Value(40)));
    assert_eq!(run_source("let total = total + 2;", &mut evaluator), Ok(Outcome::Value(42)));
    assert_eq!(run_source("exit total;", &mut evaluator), Ok(Outcome::Exit(42)));
}

#[test]
fn failed_statement_leaves_environment_unchanged() {
    let mut evaluator = Evaluator::new();
    run_source("let x = 8;", &mut evaluator).unwrap();

    assert!(run_source("let x = x / 0;", &mut evaluator).is_err());
    assert!(run_source("let x = 1 +;", &mut evaluator).is_err());
    assert_eq!(evaluator.environment().get("x"), Some(8));
}

#[test]
fn unrecognized_characters_are_ignored() {
    assert_exits("let x = 4; @@ exit x * 2 ?;", 8);
    // `%` is not an operator, so the two operands end up side by side.
    assert_failure("exit 7 % 2;", ErrorKind::Syntax);
}

#[test]
fn division_by_zero_is_error() {
    assert_failure("exit 1 / 0;", ErrorKind::DivisionByZero);
    assert_failure("let z = 0; exit 5 / z;", ErrorKind::DivisionByZero);
}

#[test]
fn unbound_name_is_error() {
    assert_failure("exit foo;", ErrorKind::UnboundName);
    assert_failure("let y = x + 1;", ErrorKind::UnboundName);
}

#[test]
fn syntax_errors() {
    assert_failure("x;", ErrorKind::Syntax);
    assert_failure("let x = 5", ErrorKind::Syntax);
    assert_failure("let 5 = x;", ErrorKind::Syntax);
    assert_failure("exit;", ErrorKind::Syntax);
    assert_failure("exit 1 + ;", ErrorKind::Syntax);
    assert_failure("exit 99999999999;", ErrorKind::Syntax);
}

#[test]
fn syntax_error_prevents_evaluation() {
    let mut evaluator = Evaluator::new();

    assert!(run_source("let a = 1; let b = ;", &mut evaluator).is_err());
    assert!(evaluator.environment().is_empty());
}

#[test]
fn error_messages_name_the_line() {
    let err = run("let a = 1;\nexit a / 0;").unwrap_err();
    assert_eq!(err.to_string(), "Error on line 2: Division by zero.");

    let err = run("let a = 1;\n\nexit b;").unwrap_err();
    assert_eq!(err.to_string(), "Error on line 3: Unbound name 'b'.");
}

#[test]
fn example_works() {
    let contents = fs::read_to_string("tests/example.tally").unwrap();
    assert_exits(&contents, 6);
}
