use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use minipas::{
    error::{Error, RuntimeError, SemanticError, SyntaxError},
    interpreter::{evaluator::core::Interpreter, token::TokenKind, value::core::Value},
    parse, run,
};
use walkdir::WalkDir;

fn programs_in(dir: &str) -> Vec<PathBuf> {
    WalkDir::new(dir).into_iter()
                     .filter_map(Result::ok)
                     .map(|e| e.into_path())
                     .filter(|path| path.extension().is_some_and(|ext| ext == "pas"))
                     .collect()
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"))
}

#[test]
fn valid_programs_produce_expected_variables() {
    let programs = programs_in("programs/valid");
    assert!(!programs.is_empty(), "No programs found in programs/valid");

    for path in programs {
        let expected_path = path.with_extension("json");
        let expected: serde_json::Value =
            serde_json::from_str(&read(&expected_path))
                .unwrap_or_else(|e| panic!("Bad JSON in {expected_path:?}: {e}"));

        let memory = run(&read(&path)).unwrap_or_else(|e| panic!("Program {path:?} failed:\n{e}"));
        let actual = serde_json::to_value(&memory).unwrap();

        assert_eq!(actual, expected, "Unexpected variables for {path:?}");
    }
}

#[test]
fn invalid_programs_fail_with_expected_message() {
    let programs = programs_in("programs/invalid");
    assert!(!programs.is_empty(), "No programs found in programs/invalid");

    for path in programs {
        let fragment = read(&path.with_extension("err"));
        let fragment = fragment.trim();

        match run(&read(&path)) {
            Ok(memory) => panic!("Program {path:?} succeeded but was expected to fail: {memory:?}"),
            Err(e) => assert!(e.to_string().contains(fragment),
                              "Error for {path:?} was {e}, expected it to mention '{fragment}'"),
        }
    }
}

fn assert_success(src: &str) -> BTreeMap<String, Value> {
    match run(src) {
        Ok(memory) => memory,
        Err(e) => panic!("Program failed: {e}"),
    }
}

fn assert_failure(src: &str) -> Error {
    match run(src) {
        Ok(memory) => panic!("Program succeeded but was expected to fail: {memory:?}"),
        Err(e) => e,
    }
}

#[test]
fn real_assigned_to_integer_is_truncated() {
    let memory = assert_success("PROGRAM T; VAR x: INTEGER; BEGIN x := 7.9 END.");
    assert_eq!(memory["X"], Value::Integer(7));

    let memory = assert_success("PROGRAM T; VAR x: INTEGER; BEGIN x := -7.9 END.");
    assert_eq!(memory["X"], Value::Integer(-7));

    let memory = assert_success("PROGRAM T; VAR x: INTEGER; BEGIN x := 10 / 4 END.");
    assert_eq!(memory["X"], Value::Integer(2));
}

#[test]
fn integer_assigned_to_real_is_widened() {
    let memory = assert_success("PROGRAM T; VAR i: INTEGER; r: REAL; BEGIN i := 4; r := i END.");
    assert_eq!(memory["I"], Value::Integer(4));
    assert_eq!(memory["R"], Value::Real(4.0));
}

#[test]
fn text_concatenation() {
    let memory = assert_success("PROGRAM T; VAR s: STRING; BEGIN s := 'ab' + 'cd' END.");
    assert_eq!(memory["S"], Value::Text("abcd".to_string()));
}

#[test]
fn division_always_yields_real() {
    let memory = assert_success("PROGRAM T; VAR a, b: REAL; BEGIN a := 7 / 2; b := 9 DIV 3 END.");
    assert_eq!(memory["A"], Value::Real(3.5));
    assert_eq!(memory["B"], Value::Real(3.0));
}

#[test]
fn division_by_zero_produces_no_mapping() {
    let error = assert_failure("PROGRAM T; VAR x: REAL; BEGIN x := 10 / 0 END.");
    assert!(matches!(error, Error::Runtime(RuntimeError::DivisionByZero { line: 1, .. })));
}

#[test]
fn undefined_variable_is_a_semantic_error() {
    let error = assert_failure("PROGRAM T; VAR x: REAL; BEGIN x := y + 1 END.");
    assert!(matches!(error,
                     Error::Semantic(SemanticError::UndefinedVariable { ref name, .. })
                     if name == "Y"));
}

#[test]
fn interpreter_rejects_undefined_variables_without_analysis() {
    let program = parse("PROGRAM T; VAR x: REAL; BEGIN x := y END.").unwrap();
    let error = Interpreter::new().interpret(&program).unwrap_err();
    assert_eq!(error,
               RuntimeError::UndefinedVariable { name:   "Y".to_string(),
                                                 line:   1,
                                                 column: 36, });

    let program = parse("PROGRAM T; VAR x: REAL; BEGIN z := 1 END.").unwrap();
    let error = Interpreter::new().interpret(&program).unwrap_err();
    assert_eq!(error,
               RuntimeError::UndefinedVariable { name:   "Z".to_string(),
                                                 line:   1,
                                                 column: 31, });
}

#[test]
fn analysis_runs_before_execution() {
    // The division would fail at runtime, but the undeclared Z is found first.
    let error = assert_failure("PROGRAM T; VAR x: REAL; BEGIN x := 1 / 0; x := z END.");
    assert!(matches!(error, Error::Semantic(_)));
}

#[test]
fn duplicate_declaration() {
    let error = assert_failure("PROGRAM T; VAR x: INTEGER; x: REAL; BEGIN END.");
    assert!(matches!(error,
                     Error::Semantic(SemanticError::DuplicateDeclaration { ref name, .. })
                     if name == "X"));

    let error = assert_failure("PROGRAM T; VAR a, A: INTEGER; BEGIN END.");
    assert!(matches!(error, Error::Semantic(SemanticError::DuplicateDeclaration { .. })));
}

#[test]
fn boolean_operand_is_rejected() {
    let error =
        assert_failure("PROGRAM T; VAR b: BOOLEAN; r: REAL; BEGIN b := TRUE; r := b + 10 END.");
    assert!(error.to_string().contains("Expected number, got Boolean"));

    assert_failure("PROGRAM T; VAR r: REAL; BEGIN r := -FALSE END.");
    assert_failure("PROGRAM T; VAR s: STRING; BEGIN s := 'a' - 'b' END.");
    assert_failure("PROGRAM T; VAR s: STRING; BEGIN s := 'a' + 1 END.");
}

#[test]
fn mismatched_assignment_is_rejected() {
    let error = assert_failure("PROGRAM T; VAR b: BOOLEAN; BEGIN b := 1 END.");
    assert!(matches!(error,
                     Error::Runtime(RuntimeError::TypeMismatch { .. })));
    assert!(error.to_string().contains("Expected Boolean, got Real"));

    assert_failure("PROGRAM T; VAR r: REAL; BEGIN r := 'text' END.");
    assert_failure("PROGRAM T; VAR s: STRING; BEGIN s := TRUE END.");
}

#[test]
fn declared_but_unassigned_variables_keep_defaults() {
    let memory = assert_success("PROGRAM T;
                                 VAR i: INTEGER; r: REAL; s: STRING; b: BOOLEAN;
                                 BEGIN END.");

    assert_eq!(memory["I"], Value::Integer(0));
    assert_eq!(memory["R"], Value::Real(0.0));
    assert_eq!(memory["S"], Value::Text(String::new()));
    assert_eq!(memory["B"], Value::Boolean(false));
}

#[test]
fn keywords_and_identifiers_are_case_insensitive() {
    let memory = assert_success("program t;
                                 var Total: integer;
                                 begin TOTAL := 1; total := Total + 1 end.");
    assert_eq!(memory["TOTAL"], Value::Integer(2));
    assert_eq!(memory.len(), 1);
}

#[test]
fn expression_precedence_and_associativity() {
    let memory = assert_success("PROGRAM T;
                                 VAR a, b, c, d: INTEGER;
                                 BEGIN
                                     a := 2 + 3 * 4;
                                     b := (2 + 3) * 4;
                                     c := 10 - 4 - 3;
                                     d := - - 5
                                 END.");

    assert_eq!(memory["A"], Value::Integer(14));
    assert_eq!(memory["B"], Value::Integer(20));
    assert_eq!(memory["C"], Value::Integer(3));
    assert_eq!(memory["D"], Value::Integer(5));
}

#[test]
fn assignments_run_in_order() {
    let memory = assert_success("PROGRAM T;
                                 VAR x: INTEGER;
                                 BEGIN x := 1; x := x + 1; x := x * 10 END.");
    assert_eq!(memory["X"], Value::Integer(20));
}

#[test]
fn syntax_errors() {
    let error = assert_failure("PROGRAM T; VAR x: INTEGER; BEGIN x := 1 END");
    assert!(matches!(error,
                     Error::Syntax(SyntaxError::UnexpectedToken { expected: TokenKind::Dot,
                                                                  found: TokenKind::Eof,
                                                                  .. })));

    let error = assert_failure("PROGRAM T; VAR x, y: INTEGER; BEGIN x := 1 y := 2 END.");
    assert!(matches!(error, Error::Syntax(SyntaxError::MissingSemicolon { .. })));

    let error = assert_failure("PROGRAM T; BEGIN END. BEGIN");
    assert!(matches!(error, Error::Syntax(SyntaxError::TrailingTokens { .. })));

    assert_failure("PROGRAM T; VAR x: INTEGER; BEGIN x := (1 + 2 END.");
    assert_failure("PROGRAM T; VAR x: INTEGER; BEGIN x = 1 END.");
}

#[test]
fn runs_are_deterministic() {
    let source = fs::read_to_string("programs/valid/feature_showcase.pas").unwrap();

    let first = serde_json::to_string(&assert_success(&source)).unwrap();
    let second = serde_json::to_string(&assert_success(&source)).unwrap();

    assert_eq!(first, second);
}

#[test]
fn error_positions_point_at_the_source() {
    let error = assert_failure("PROGRAM T;\nVAR x: REAL;\nBEGIN\n    x := 1 / 0\nEND.");
    assert_eq!(error.to_string(), "Error on line 4, column 12: Division by zero.");
}
