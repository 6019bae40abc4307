//! Diagnostic system tests

#[cfg(test)]
mod registry_tests {
    use crate::util::diagnostic::codes::*;

    #[test]
    fn test_find_error_code() {
        let code = ErrorCodeDefinition::find("E1002");
        assert!(code.is_some());
        assert_eq!(code.map(|c| c.category), Some(ErrorCategory::TypeCheck));
    }

    #[test]
    fn test_find_unknown_code() {
        assert!(ErrorCodeDefinition::find("E9999").is_none());
    }

    #[test]
    fn test_codes_are_unique() {
        let all = ErrorCodeDefinition::all();
        let mut seen = std::collections::HashSet::new();
        for def in all {
            assert!(seen.insert(def.code), "duplicate code {}", def.code);
        }
    }

    #[test]
    fn test_code_prefix_matches_category() {
        for def in ErrorCodeDefinition::all() {
            let prefix = match def.category {
                ErrorCategory::Lexer | ErrorCategory::Parser => "E0",
                ErrorCategory::TypeCheck => "E1",
                ErrorCategory::Semantic => "E2",
                ErrorCategory::Runtime => "E6",
                ErrorCategory::Internal => "E8",
            };
            assert!(def.code.starts_with(prefix), "{} in {}", def.code, def.category);
        }
    }

    #[test]
    fn test_by_category() {
        assert_eq!(
            ErrorCodeDefinition::by_category(ErrorCategory::Internal).count(),
            1
        );
    }
}

#[cfg(test)]
mod builder_tests {
    use crate::util::diagnostic::codes::builder::render;
    use crate::util::diagnostic::codes::*;
    use crate::util::diagnostic::render_all;
    use crate::util::span::{Position, Span};

    #[test]
    fn test_template_render() {
        let params = vec![("name", "x".to_string())];
        assert_eq!(
            render("Undefined identifier '{name}'", &params),
            "Undefined identifier 'x'"
        );
    }

    #[test]
    fn test_render_keeps_unknown_placeholder() {
        assert_eq!(render("a {b} c", &[]), "a {b} c");
        assert_eq!(render("open { only", &[]), "open { only");
    }

    #[test]
    fn test_diagnostic_display_with_span() {
        let span = Span::new(Position::new(3, 5), Position::new(3, 9));
        let diagnostic = NOT_SUBTYPE
            .builder()
            .param("sub", "Int")
            .param("sup", "String")
            .at(span)
            .build();

        assert_eq!(diagnostic.code, "E1002");
        assert!(diagnostic.is_error());
        assert_eq!(
            diagnostic.to_string(),
            "error[E1002]: Type 'Int' does not conform to 'String' at 3:5 to 3:9"
        );
    }

    #[test]
    fn test_diagnostic_display_without_span() {
        let diagnostic = DIVIDE_BY_ZERO.builder().build();
        assert_eq!(diagnostic.to_string(), "error[E6001]: Division by zero");
    }

    #[test]
    fn test_render_all_one_per_line() {
        let a = DIVIDE_BY_ZERO.builder().build();
        let b = INTERNAL_ERROR.builder().param("message", "boom").build();
        let out = render_all([&a, &b]);
        assert_eq!(out.lines().count(), 2);
        assert!(out.ends_with("Internal error: boom\n"));
    }
}
