//! End-to-end execution tests through the library API

use cool_lang::util::config::InterpreterConfig;
use cool_lang::{run_with_io, Outcome};

fn run_program(
    source: &str,
    input: &str,
) -> (Outcome, String) {
    let mut output = Vec::new();
    let outcome = run_with_io(
        source,
        &InterpreterConfig::default(),
        input.as_bytes(),
        &mut output,
    )
    .unwrap();
    (outcome, String::from_utf8(output).unwrap())
}

fn output_of(source: &str) -> String {
    let (outcome, output) = run_program(source, "");
    assert_eq!(outcome, Outcome::Finished, "output so far: {:?}", output);
    output
}

#[test]
fn test_hello_world() {
    let output = output_of(
        r#"
        class Main inherits IO {
            main() : Object { out_string("hi\n") };
        };
        "#,
    );
    assert_eq!(output, "hi\n");
}

#[test]
fn test_case_selects_nearest_branch() {
    let output = output_of(
        r#"
        class A { };
        class B inherits A { };
        class C inherits B { };
        class Main inherits IO {
            main() : Object {
                case new C of
                    b : B => out_string("B");
                    o : Object => out_string("Object");
                esac
            };
        };
        "#,
    );
    assert_eq!(output, "B");
}

#[test]
fn test_recursive_factorial() {
    let output = output_of(
        r#"
        class Main inherits IO {
            fact(n : Int) : Int { if n <= 1 then 1 else n * fact(n - 1) fi };
            main() : Object { { out_int(fact(10)); out_string("\n"); } };
        };
        "#,
    );
    assert_eq!(output, "3628800\n");
}

#[test]
fn test_dynamic_dispatch_and_self_type() {
    let output = output_of(
        r#"
        class Animal inherits IO {
            speak() : SELF_TYPE { out_string("...") };
            twice() : SELF_TYPE { speak().speak() };
        };
        class Dog inherits Animal {
            speak() : SELF_TYPE { out_string("woof ") };
        };
        class Main {
            main() : Object { (new Dog).twice() };
        };
        "#,
    );
    assert_eq!(output, "woof woof ");
}

#[test]
fn test_new_self_type_creates_runtime_class() {
    let output = output_of(
        r#"
        class A {
            make() : SELF_TYPE { new SELF_TYPE };
        };
        class B inherits A { };
        class Main inherits IO {
            main() : Object { out_string((new B).make().type_name()) };
        };
        "#,
    );
    assert_eq!(output, "B");
}

#[test]
fn test_list_sum() {
    let output = output_of(
        r#"
        class List {
            head : Int;
            tail : List;
            cons(h : Int) : List { (new List).init(h, self) };
            init(h : Int, t : List) : List { { head <- h; tail <- t; self; } };
            sum() : Int { if isvoid tail then 0 else head + tail.sum() fi };
        };
        class Main inherits IO {
            main() : Object {
                let l : List <- new List, i : Int <- 1 in {
                    while i <= 10 loop { l <- l.cons(i); i <- i + 1; } pool;
                    out_int(l.sum());
                }
            };
        };
        "#,
    );
    assert_eq!(output, "55");
}

#[test]
fn test_echo_input() {
    let (outcome, output) = run_program(
        r#"
        class Main inherits IO {
            main() : Object {
                let name : String <- in_string(), n : Int <- in_int() in {
                    out_string("hello ".concat(name));
                    out_string(" ");
                    out_int(n * 2);
                }
            };
        };
        "#,
        "world\n21\n",
    );
    assert_eq!(outcome, Outcome::Finished);
    assert_eq!(output, "hello world 42");
}

#[test]
fn test_abort_keeps_earlier_output() {
    let (outcome, output) = run_program(
        r#"
        class Main inherits IO {
            main() : Object { { out_string("partial\n"); (new IO).abort(); out_string("never"); } };
        };
        "#,
        "",
    );
    assert_eq!(
        outcome,
        Outcome::Aborted {
            class: "IO".to_string()
        }
    );
    assert_eq!(output, "partial\nIO abort and exit.\n");
}
