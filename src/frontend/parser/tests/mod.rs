//! Parser tests


#[cfg(test)]
mod parser_tests {
    use crate::frontend::lexer::tokenize;
    use crate::frontend::parser::ast::*;
    use crate::frontend::parser::{parse, parse_expression, ParseError};

    fn parse_source(source: &str) -> Program {
        parse(&tokenize(source).unwrap()).unwrap()
    }

    fn parse_errors(source: &str) -> Vec<ParseError> {
        parse(&tokenize(source).unwrap()).unwrap_err()
    }

    fn expr(source: &str) -> Expr {
        parse_expression(&tokenize(source).unwrap()).unwrap()
    }

    fn user_classes(program: &Program) -> Vec<&ClassDef> {
        program.classes.iter().filter(|c| !c.builtin).collect()
    }

    #[test]
    fn test_builtins_prepended_in_order() {
        let program = parse_source("class Main { main() : Object { 0 }; };");
        let names: Vec<&str> = program.classes.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Object", "IO", "Int", "String", "Bool", "Main"]);
        assert!(program.classes[0].parent.is_none());
        assert!(program.classes[..5].iter().all(|c| c.builtin));
    }

    #[test]
    fn test_optional_semicolons() {
        let program =
            parse_source("class Main inherits IO { main(): Object { out_string(\"hi\\n\") } }");
        let classes = user_classes(&program);
        assert_eq!(classes.len(), 1);
        assert_eq!(classes[0].parent.as_ref().map(|p| p.as_str()), Some("IO"));
        match &classes[0].features[0] {
            Feature::Method(m) => {
                assert_eq!(m.name.as_str(), "main");
                assert!(matches!(
                    &m.body.kind,
                    ExprKind::Dispatch { method, args } if method.as_str() == "out_string" && args.len() == 1
                ));
            }
            other => panic!("expected method, got {:?}", other),
        }
    }

    #[test]
    fn test_attributes_and_formals() {
        let program = parse_source(
            "class A { x : Int <- 3; y : String; f(a : Int, b : Bool) : SELF_TYPE { self }; };",
        );
        let class = user_classes(&program)[0];
        assert_eq!(class.features.len(), 3);
        match &class.features[0] {
            Feature::Attr(a) => {
                assert_eq!(a.type_name.as_str(), "Int");
                assert!(a.init.is_some());
            }
            other => panic!("expected attribute, got {:?}", other),
        }
        match &class.features[2] {
            Feature::Method(m) => {
                assert_eq!(m.formals.len(), 2);
                assert_eq!(m.return_type.as_str(), "SELF_TYPE");
            }
            other => panic!("expected method, got {:?}", other),
        }
    }

    #[test]
    fn test_arithmetic_precedence() {
        let e = expr("1 + 2 * 3");
        match e.kind {
            ExprKind::Binary {
                op: BinOp::Add,
                right,
                ..
            } => assert!(matches!(right.kind, ExprKind::Binary { op: BinOp::Mul, .. })),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_left_associative_minus() {
        let e = expr("5 - 2 - 1");
        match e.kind {
            ExprKind::Binary {
                op: BinOp::Sub,
                left,
                right,
            } => {
                assert!(matches!(left.kind, ExprKind::Binary { op: BinOp::Sub, .. }));
                assert!(matches!(right.kind, ExprKind::Int(1)));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_comparison_does_not_chain() {
        let errors = parse_expression(&tokenize("1 < 2 < 3").unwrap()).unwrap_err();
        assert!(matches!(errors[0], ParseError::NonAssociative { .. }));
    }

    #[test]
    fn test_not_binds_looser_than_comparison() {
        let e = expr("not 1 = 2");
        match e.kind {
            ExprKind::Unary {
                op: UnOp::Not,
                operand,
            } => assert!(matches!(operand.kind, ExprKind::Binary { op: BinOp::Eq, .. })),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_isvoid_binds_tighter_than_plus() {
        let e = expr("isvoid x + 1");
        assert!(matches!(e.kind, ExprKind::Binary { op: BinOp::Add, .. }));
    }

    #[test]
    fn test_assignment_is_right_associative() {
        let e = expr("a <- b <- 1 + 2");
        match e.kind {
            ExprKind::Assign { name, value } => {
                assert_eq!(name.as_str(), "a");
                assert!(matches!(value.kind, ExprKind::Assign { .. }));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_static_dispatch() {
        let e = expr("x@A.f(1, 2).g()");
        match e.kind {
            ExprKind::StaticDispatch {
                receiver,
                type_name,
                method,
                ..
            } => {
                assert_eq!(method.as_str(), "g");
                assert!(type_name.is_none());
                assert!(matches!(
                    receiver.kind,
                    ExprKind::StaticDispatch { type_name: Some(ref t), ref args, .. }
                        if t.as_str() == "A" && args.len() == 2
                ));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_self_dispatch_is_rewritten() {
        assert!(matches!(expr("self.f()").kind, ExprKind::Dispatch { .. }));
        assert!(matches!(
            expr("self@Object.f()").kind,
            ExprKind::StaticDispatch { .. }
        ));
    }

    #[test]
    fn test_let_case_while_if() {
        let e = expr(
            "let a : Int <- 1, b : Int in case a of x : Int => x; o : Object => 0; esac",
        );
        match e.kind {
            ExprKind::Let { bindings, body } => {
                assert_eq!(bindings.len(), 2);
                assert!(bindings[1].init.is_none());
                assert!(matches!(body.kind, ExprKind::Case { ref branches, .. } if branches.len() == 2));
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(matches!(
            expr("while true loop { 1; 2; } pool").kind,
            ExprKind::While { .. }
        ));
        assert!(matches!(
            expr("if true then 1 else 2 fi").kind,
            ExprKind::If { .. }
        ));
    }

    #[test]
    fn test_collects_multiple_errors() {
        let errors = parse_errors(
            "class A { f() : Int { 1 + }; g : Int <- ; }; class B inherits { }; class C { };",
        );
        assert!(errors.len() >= 3, "got {:?}", errors);
    }

    #[test]
    fn test_empty_program() {
        let errors = parse_errors("");
        assert!(matches!(errors[0], ParseError::EmptyProgram { .. }));
    }

    #[test]
    fn test_unexpected_eof() {
        let errors = parse_errors("class A {");
        assert!(errors
            .iter()
            .any(|e| matches!(e, ParseError::UnexpectedEof { .. })));
    }
}
