//! Diagnostics reported for rejected and failing programs

use cool_lang::util::config::InterpreterConfig;
use cool_lang::{check, run_with_io, Outcome};

fn codes(outcome: &Outcome) -> Vec<String> {
    outcome.diagnostics().iter().map(|d| d.code.clone()).collect()
}

fn run_outcome(source: &str) -> Outcome {
    let mut output = Vec::new();
    run_with_io(
        source,
        &InterpreterConfig::default(),
        "".as_bytes(),
        &mut output,
    )
    .unwrap()
}

#[test]
fn test_syntax_errors_are_all_reported() {
    let outcome = check(
        r#"
        class A { f( : Int { 1 }; };
        class B { g() : Int { 1 + }; };
        "#,
    );
    let codes = codes(&outcome);
    assert!(codes.len() >= 2);
    assert!(codes.iter().all(|c| c.starts_with("E0")));
}

#[test]
fn test_structural_error_is_fatal() {
    let outcome = check(
        r#"
        class A inherits B { };
        class B inherits A { };
        class Main { main() : Int { true }; };
        "#,
    );
    let codes = codes(&outcome);
    assert_eq!(codes.len(), 1);
    assert!(codes[0].starts_with("E2"));
}

#[test]
fn test_type_errors_accumulate() {
    let outcome = check(
        r#"
        class Main {
            a() : Int { true };
            b() : Bool { 1 + "s" };
            c() : Int { missing };
        };
        "#,
    );
    let codes = codes(&outcome);
    assert!(codes.len() >= 3);
    assert!(codes.iter().all(|c| c.starts_with("E1")));
}

#[test]
fn test_diagnostic_rendering() {
    let outcome = check("class Main {\n  main() : Int { x };\n};");
    let rendered = outcome.diagnostics()[0].to_string();
    assert!(rendered.starts_with("error[E1003]: Undefined identifier 'x' at 2:"));
}

#[test]
fn test_runtime_errors() {
    let cases = [
        ("class Main { main() : Int { 1 / 0 }; };", "E6001"),
        (
            "class A { f() : Int { 1 }; }; class Main { a : A; main() : Int { a.f() }; };",
            "E6002",
        ),
        (
            r#"class Main { main() : Object { "abc".substr(1, 9) }; };"#,
            "E6005",
        ),
    ];
    for (source, code) in cases {
        let outcome = run_outcome(source);
        assert_eq!(codes(&outcome), vec![code.to_string()], "source: {}", source);
        assert_eq!(outcome.exit_code(), 1);
    }
}

#[test]
fn test_missing_main_is_reported_at_runtime() {
    assert_eq!(check("class A { };"), Outcome::Finished);
    let outcome = run_outcome("class A { };");
    assert!(matches!(outcome, Outcome::RuntimeFailed(_)));
}
