//! Class hierarchy
//!
//! Maps every class to its parent. `Object` is the only root.

use super::errors::SemanticError;
use crate::frontend::parser::ast::{is_basic_class, OBJECT};
use crate::util::span::Span;
use indexmap::IndexMap;

#[derive(Debug, Clone, PartialEq)]
struct ClassEntry {
    parent: Option<String>,
    span: Span,
}

/// Inheritance graph in declaration order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassGraph {
    classes: IndexMap<String, ClassEntry>,
}

impl ClassGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a class and its parent edge.
    ///
    /// Only `Object` may omit the parent. The edge is re-validated for
    /// cycles right away; parents that are still unknown are accepted and
    /// checked later by [`ClassGraph::check_undefined_classes`].
    pub fn declare_class(
        &mut self,
        name: &str,
        parent: Option<&str>,
        span: Span,
    ) -> Result<(), SemanticError> {
        if self.classes.contains_key(name) {
            return Err(SemanticError::DuplicateClass {
                name: name.to_string(),
                span,
            });
        }

        match parent {
            None if name != OBJECT => Err(SemanticError::MustInheritObject {
                name: name.to_string(),
                span,
            }),
            None => {
                self.classes.insert(name.to_string(), ClassEntry { parent: None, span });
                Ok(())
            }
            Some(parent) if is_basic_class(parent) => Err(SemanticError::InheritsBasicClass {
                name: name.to_string(),
                parent: parent.to_string(),
                span,
            }),
            Some(parent) => {
                self.classes.insert(
                    name.to_string(),
                    ClassEntry {
                        parent: Some(parent.to_string()),
                        span,
                    },
                );
                if self.reaches_itself(name) {
                    return Err(SemanticError::CyclicInheritance {
                        name: name.to_string(),
                        span,
                    });
                }
                Ok(())
            }
        }
    }

    fn reaches_itself(
        &self,
        name: &str,
    ) -> bool {
        let mut current = self.parent(name);
        let mut steps = 0;
        while let Some(class) = current {
            if class == name {
                return true;
            }
            steps += 1;
            if steps > self.classes.len() {
                return true;
            }
            current = self.parent(class);
        }
        false
    }

    /// Fail on the first parent edge that points at an undeclared class
    pub fn check_undefined_classes(&self) -> Result<(), SemanticError> {
        for (name, entry) in &self.classes {
            if let Some(parent) = &entry.parent {
                if !self.classes.contains_key(parent) {
                    return Err(SemanticError::UndefinedClass {
                        name: name.clone(),
                        parent: parent.clone(),
                        span: entry.span,
                    });
                }
            }
        }
        Ok(())
    }

    pub fn contains(
        &self,
        name: &str,
    ) -> bool {
        self.classes.contains_key(name)
    }

    pub fn parent(
        &self,
        name: &str,
    ) -> Option<&str> {
        self.classes.get(name)?.parent.as_deref()
    }

    /// `name` followed by its ancestors, ending at `Object`
    pub fn ancestors<'g>(
        &'g self,
        name: &'g str,
    ) -> impl Iterator<Item = &'g str> + 'g {
        let limit = self.classes.len() + 1;
        std::iter::successors(Some(name), move |class| self.parent(class)).take(limit)
    }

    /// Ancestor chain from `Object` down to `name`
    pub fn chain_from_root<'g>(
        &'g self,
        name: &'g str,
    ) -> Vec<&'g str> {
        let mut chain: Vec<&str> = self.ancestors(name).collect();
        chain.reverse();
        chain
    }

    /// Is `sup` equal to `sub` or one of its ancestors
    pub fn is_ancestor(
        &self,
        sub: &str,
        sup: &str,
    ) -> bool {
        self.ancestors(sub).any(|class| class == sup)
    }

    /// Class names in declaration order
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
