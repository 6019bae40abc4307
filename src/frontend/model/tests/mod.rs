//! Program model tests

#[cfg(test)]
mod class_graph_tests {
    use crate::frontend::model::{ClassGraph, SemanticError};
    use crate::util::span::Span;

    fn graph(edges: &[(&str, &str)]) -> Result<ClassGraph, SemanticError> {
        let mut graph = ClassGraph::new();
        graph.declare_class("Object", None, Span::dummy())?;
        for (name, parent) in edges {
            graph.declare_class(name, Some(*parent), Span::dummy())?;
        }
        graph.check_undefined_classes()?;
        Ok(graph)
    }

    #[test]
    fn test_ancestor_walk_ends_at_object() {
        let graph = graph(&[("A", "Object"), ("B", "A"), ("C", "B")]).unwrap();
        let chain: Vec<&str> = graph.ancestors("C").collect();
        assert_eq!(chain, vec!["C", "B", "A", "Object"]);
        assert_eq!(graph.chain_from_root("C"), vec!["Object", "A", "B", "C"]);
        assert!(graph.is_ancestor("C", "A"));
        assert!(graph.is_ancestor("A", "A"));
        assert!(!graph.is_ancestor("A", "C"));
    }

    #[test]
    fn test_duplicate_class() {
        let err = graph(&[("A", "Object"), ("A", "Object")]).unwrap_err();
        assert!(matches!(err, SemanticError::DuplicateClass { ref name, .. } if name == "A"));
    }

    #[test]
    fn test_missing_parent_requires_object() {
        let mut graph = ClassGraph::new();
        graph.declare_class("Object", None, Span::dummy()).unwrap();
        let err = graph.declare_class("A", None, Span::dummy()).unwrap_err();
        assert!(matches!(err, SemanticError::MustInheritObject { .. }));
    }

    #[test]
    fn test_cycle_detected() {
        let err = graph(&[("A", "B"), ("B", "A")]).unwrap_err();
        assert!(matches!(err, SemanticError::CyclicInheritance { ref name, .. } if name == "B"));

        let err = graph(&[("A", "A")]).unwrap_err();
        assert!(matches!(err, SemanticError::CyclicInheritance { .. }));
    }

    #[test]
    fn test_undefined_parent() {
        let err = graph(&[("A", "Missing")]).unwrap_err();
        assert!(matches!(
            err,
            SemanticError::UndefinedClass { ref name, ref parent, .. }
                if name == "A" && parent == "Missing"
        ));
    }

    #[test]
    fn test_forward_reference_allowed() {
        let graph = graph(&[("B", "A"), ("A", "Object")]).unwrap();
        assert!(graph.is_ancestor("B", "Object"));
    }

    #[test]
    fn test_basic_class_not_inheritable() {
        let mut graph = ClassGraph::new();
        graph.declare_class("Object", None, Span::dummy()).unwrap();
        let err = graph
            .declare_class("A", Some("Int"), Span::dummy())
            .unwrap_err();
        assert!(matches!(err, SemanticError::InheritsBasicClass { .. }));
    }
}

#[cfg(test)]
mod feature_tests {
    use crate::frontend::lexer::tokenize;
    use crate::frontend::model::{LookupError, ProgramModel, SemanticError};
    use crate::frontend::parser::parse;
    use crate::frontend::parser::ast::Program;
    use crate::frontend::typecheck::types::Type;

    fn program(source: &str) -> Program {
        parse(&tokenize(source).unwrap()).unwrap()
    }

    fn model(source: &str) -> Result<ProgramModel, SemanticError> {
        ProgramModel::build(&program(source))
    }

    #[test]
    fn test_builtins_only_model() {
        let model = model("class Main { main() : Object { 0 }; };").unwrap();
        assert!(model.classes.contains("IO"));
        assert!(model.methods.lookup_by_name("Main", "abort").is_some());
        assert_eq!(
            model
                .methods
                .lookup_by_name("IO", "out_string")
                .map(|m| m.return_type.as_str()),
            Some("SELF_TYPE")
        );
        assert_eq!(model.class_index("Main"), Some(5));
    }

    #[test]
    fn test_duplicate_method_in_class() {
        let err = model("class A { f(x : Int) : Int { x }; f(y : Int) : Bool { true }; };")
            .unwrap_err();
        assert!(matches!(err, SemanticError::DuplicateMethod { ref method, .. } if method == "f"));
    }

    #[test]
    fn test_overload_in_class_allowed() {
        let model = model("class A { f(x : Int) : Int { x }; f(x : String) : Int { 0 }; };").unwrap();
        let count = model
            .methods
            .methods_of("A")
            .iter()
            .filter(|m| m.name == "f")
            .count();
        assert_eq!(count, 2);
    }

    #[test]
    fn test_illegal_override() {
        let err = model(
            "class A { foo(x : Int) : Int { x }; };
             class B inherits A { foo(x : Int) : Bool { true }; };",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            SemanticError::IllegalOverride { ref class, ref method, ref expected, ref found, .. }
                if class == "B" && method == "foo" && expected == "Int" && found == "Bool"
        ));
    }

    #[test]
    fn test_identical_override_kept_once() {
        let model = model(
            "class A { foo(x : Int) : Int { x }; };
             class B inherits A { foo(x : Int) : Int { x + 1 }; };",
        )
        .unwrap();
        let foos: Vec<_> = model
            .methods
            .methods_of("B")
            .iter()
            .filter(|m| m.name == "foo")
            .collect();
        assert_eq!(foos.len(), 1);
        assert_eq!(foos[0].owner, "B");
    }

    #[test]
    fn test_self_type_override_must_match() {
        let err = model(
            "class A { me() : SELF_TYPE { self }; };
             class B inherits A { me() : B { self }; };",
        )
        .unwrap_err();
        assert!(matches!(err, SemanticError::IllegalOverride { .. }));
    }

    #[test]
    fn test_attribute_redefined() {
        let err = model(
            "class A { a : Int; };
             class B inherits A { a : String; };",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            SemanticError::AttributeRedefined { ref class, ref name, ref owner, .. }
                if class == "B" && name == "a" && owner == "A"
        ));
    }

    #[test]
    fn test_attribute_named_self() {
        let err = model("class A { self : Int; };").unwrap_err();
        assert!(matches!(err, SemanticError::AssignToSelf { .. }));
    }

    #[test]
    fn test_attribute_table_inherits_and_binds_self() {
        let model = model(
            "class A { a : Int; };
             class B inherits A { b : String; };",
        )
        .unwrap();
        let table = model.symbol_table("B").unwrap();
        assert_eq!(table.lookup("a").map(String::as_str), Some("Int"));
        assert_eq!(table.lookup("b").map(String::as_str), Some("String"));
        assert_eq!(table.lookup("self").map(String::as_str), Some("SELF_TYPE"));
        let names: Vec<&str> = table.bindings().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["a", "b", "self"]);
    }

    #[test]
    fn test_overload_resolution_picks_most_specific() {
        let model = model(
            "class A {
                m(x : Object) : Int { 1 };
                m(x : Int) : Int { 2 };
             };",
        )
        .unwrap();
        let graph = &model.classes;

        let picked = model
            .methods
            .lookup(graph, "A", "m", &[Type::named("Int")])
            .unwrap();
        assert_eq!(picked.params.as_slice(), ["Int".to_string()]);

        let picked = model
            .methods
            .lookup(graph, "A", "m", &[Type::named("String")])
            .unwrap();
        assert_eq!(picked.params.as_slice(), ["Object".to_string()]);
    }

    #[test]
    fn test_overload_resolution_ambiguous() {
        let model = model(
            "class A { };
             class B inherits A { };
             class C {
                m(x : A, y : B) : Int { 1 };
                m(x : B, y : A) : Int { 2 };
             };",
        )
        .unwrap();
        let err = model
            .methods
            .lookup(&model.classes, "C", "m", &[Type::named("B"), Type::named("B")])
            .unwrap_err();
        assert_eq!(err, LookupError::Ambiguous);
    }

    #[test]
    fn test_lookup_arity_and_undefined() {
        let model = model("class A { m(x : Int) : Int { x }; };").unwrap();
        let graph = &model.classes;
        assert_eq!(
            model.methods.lookup(graph, "A", "m", &[]).unwrap_err(),
            LookupError::Undefined
        );
        assert_eq!(
            model
                .methods
                .lookup(graph, "A", "nope", &[Type::named("Int")])
                .unwrap_err(),
            LookupError::Undefined
        );
        assert_eq!(
            model
                .methods
                .lookup(graph, "Missing", "m", &[Type::named("Int")])
                .unwrap_err(),
            LookupError::Undefined
        );
    }

    #[test]
    fn test_inherited_method_found_on_subclass() {
        let model = model(
            "class A { m() : Int { 1 }; };
             class B inherits A { };",
        )
        .unwrap();
        let found = model.methods.lookup(&model.classes, "B", "m", &[]).unwrap();
        assert_eq!(found.owner, "A");
    }
}
