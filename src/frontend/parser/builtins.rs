//! Built-in class declarations
//!
//! `Object`, `IO`, `Int`, `String` and `Bool` are prepended to every program
//! in this fixed order. Method bodies are empty; the interpreter evaluates
//! them natively.

use super::ast::*;
use crate::util::span::Span;

fn ident(name: &str) -> Ident {
    Ident::new(name.to_string(), Span::dummy())
}

fn method(
    name: &str,
    formals: &[(&str, &str)],
    return_type: &str,
) -> Feature {
    Feature::Method(MethodDef {
        name: ident(name),
        formals: formals
            .iter()
            .map(|(formal, ty)| Formal {
                name: ident(formal),
                type_name: ident(ty),
            })
            .collect(),
        return_type: ident(return_type),
        body: Expr::empty(),
        span: Span::dummy(),
    })
}

fn class(
    name: &str,
    parent: Option<&str>,
    features: Vec<Feature>,
) -> ClassDef {
    ClassDef {
        name: ident(name),
        parent: parent.map(ident),
        features,
        builtin: true,
        span: Span::dummy(),
    }
}

/// The five built-in classes, in declaration order
pub fn builtin_classes() -> Vec<ClassDef> {
    vec![
        class(
            OBJECT,
            None,
            vec![
                method("abort", &[], OBJECT),
                method("type_name", &[], STRING),
                method("copy", &[], SELF_TYPE),
            ],
        ),
        class(
            IO,
            Some(OBJECT),
            vec![
                method("out_string", &[("x", STRING)], SELF_TYPE),
                method("out_int", &[("x", INT)], SELF_TYPE),
                method("in_string", &[], STRING),
                method("in_int", &[], INT),
            ],
        ),
        class(INT, Some(OBJECT), Vec::new()),
        class(
            STRING,
            Some(OBJECT),
            vec![
                method("length", &[], INT),
                method("concat", &[("s", STRING)], STRING),
                method("substr", &[("i", INT), ("l", INT)], STRING),
            ],
        ),
        class(BOOL, Some(OBJECT), Vec::new()),
    ]
}
