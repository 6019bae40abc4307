//! Utility tests

#[cfg(test)]
mod span_tests {
    use crate::util::span::{Position, Span};
    use crate::util::Spanned;

    #[test]
    fn test_position_display() {
        assert_eq!(Position::new(4, 2).to_string(), "4:2");
    }

    #[test]
    fn test_span_merge() {
        let a = Span::new(Position::with_offset(1, 1, 0), Position::with_offset(1, 4, 3));
        let b = Span::new(Position::with_offset(2, 1, 10), Position::with_offset(2, 6, 15));
        let merged = a.to(b);
        assert_eq!(merged.start, a.start);
        assert_eq!(merged.end, b.end);
        assert_eq!(merged.len(), 15);
    }

    #[test]
    fn test_span_merge_with_dummy() {
        let a = Span::new(Position::new(1, 1), Position::new(1, 2));
        assert_eq!(Span::dummy().to(a), a);
        assert_eq!(a.to(Span::dummy()), a);
        assert!(Span::dummy().is_dummy());
    }

    #[test]
    fn test_spanned_deref() {
        let name = Spanned::new("Main".to_string(), Span::dummy());
        assert_eq!(name.len(), 4);
        assert_eq!(name.as_str(), "Main");
    }
}

#[cfg(test)]
mod symbol_table_tests {
    use crate::util::symbol_table::SymbolTable;

    #[test]
    fn test_lookup_innermost_first() {
        let mut table = SymbolTable::new();
        table.enter_scope();
        table.add_id("x", 1);
        table.enter_scope();
        table.add_id("x", 2);
        assert_eq!(table.lookup("x"), Some(&2));
        table.exit_scope();
        assert_eq!(table.lookup("x"), Some(&1));
    }

    #[test]
    fn test_lookup_missing() {
        let mut table: SymbolTable<i32> = SymbolTable::new();
        assert_eq!(table.lookup("x"), None);
        table.enter_scope();
        assert!(!table.contains("x"));
    }

    #[test]
    fn test_update_nearest_binding() {
        let mut table = SymbolTable::new();
        table.enter_scope();
        table.add_id("x", 1);
        table.enter_scope();
        table.add_id("y", 5);
        assert!(table.update("x", 10));
        table.exit_scope();
        assert_eq!(table.lookup("x"), Some(&10));
    }

    #[test]
    fn test_update_never_creates() {
        let mut table = SymbolTable::new();
        table.enter_scope();
        table.add_id("x", 1);
        assert!(!table.update("y", 2));
        assert!(!table.contains("y"));
    }

    #[test]
    fn test_update_shadowed_binding() {
        let mut table = SymbolTable::new();
        table.enter_scope();
        table.add_id("x", 1);
        table.enter_scope();
        table.add_id("x", 2);
        assert!(table.update("x", 3));
        table.exit_scope();
        assert_eq!(table.lookup("x"), Some(&1));
    }

    #[test]
    fn test_values_across_scopes() {
        let mut table = SymbolTable::new();
        table.enter_scope();
        table.add_id("a", 1);
        table.enter_scope();
        table.add_id("b", 2);
        assert_eq!(table.depth(), 2);
        assert_eq!(table.values().copied().collect::<Vec<_>>(), vec![1, 2]);
        let names: Vec<&str> = table.bindings().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_add_id_opens_scope() {
        let mut table = SymbolTable::new();
        table.add_id("x", 'c');
        assert_eq!(table.depth(), 1);
        assert_eq!(table.lookup("x"), Some(&'c'));
    }
}
