//! Scoped symbol table
//!
//! A stack of scopes mapping names to values. The same structure backs the
//! type checker's environment (name -> declared type name) and the
//! evaluator's object field tables (name -> runtime value).

use indexmap::IndexMap;

/// Stack of scopes, innermost last
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolTable<V> {
    scopes: Vec<IndexMap<String, V>>,
}

impl<V> Default for SymbolTable<V> {
    fn default() -> Self {
        Self { scopes: Vec::new() }
    }
}

impl<V> SymbolTable<V> {
    /// Create an empty table with no open scope
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new innermost scope
    pub fn enter_scope(&mut self) {
        self.scopes.push(IndexMap::new());
    }

    /// Close the innermost scope
    pub fn exit_scope(&mut self) {
        debug_assert!(!self.scopes.is_empty(), "exit_scope without enter_scope");
        self.scopes.pop();
    }

    /// Bind `name` in the innermost scope, shadowing outer bindings.
    ///
    /// Opens a scope first if the table has none.
    pub fn add_id(
        &mut self,
        name: impl Into<String>,
        value: V,
    ) {
        if self.scopes.is_empty() {
            self.enter_scope();
        }
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name.into(), value);
        }
    }

    /// Find the innermost binding of `name`
    pub fn lookup(
        &self,
        name: &str,
    ) -> Option<&V> {
        self.scopes.iter().rev().find_map(|scope| scope.get(name))
    }

    /// Overwrite the binding in the nearest scope that already holds `name`.
    ///
    /// Returns `false` (and binds nothing) when no scope holds it.
    pub fn update(
        &mut self,
        name: &str,
        value: V,
    ) -> bool {
        match self
            .scopes
            .iter_mut()
            .rev()
            .find_map(|scope| scope.get_mut(name))
        {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Check if `name` is bound in any scope
    pub fn contains(
        &self,
        name: &str,
    ) -> bool {
        self.lookup(name).is_some()
    }

    /// Number of open scopes
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Every live binding, outermost scope first
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.scopes.iter().flat_map(|scope| scope.values())
    }

    /// Every live binding with its name, outermost scope first
    pub fn bindings(&self) -> impl Iterator<Item = (&str, &V)> {
        self.scopes
            .iter()
            .flat_map(|scope| scope.iter().map(|(k, v)| (k.as_str(), v)))
    }
}
