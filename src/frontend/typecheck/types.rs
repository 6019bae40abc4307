//! Type lattice
//!
//! Three shapes: a named class, `SELF_TYPE` bound to its enclosing class,
//! and the absent type used for error recovery.

use crate::frontend::model::ClassGraph;
use crate::frontend::parser::ast::{OBJECT, SELF_TYPE};
use std::fmt;

/// Static type of an expression
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Type {
    /// A class type
    Named(String),
    /// `SELF_TYPE` inside the given class
    SelfType(String),
    /// No type; accepted everywhere so one error does not cascade
    #[default]
    None,
}

impl Type {
    pub fn named(name: impl Into<String>) -> Self {
        Type::Named(name.into())
    }

    /// Type for a written type name inside `enclosing`
    pub fn of(
        type_name: &str,
        enclosing: &str,
    ) -> Self {
        if type_name == SELF_TYPE {
            Type::SelfType(enclosing.to_string())
        } else {
            Type::Named(type_name.to_string())
        }
    }

    /// Resolve `SELF_TYPE` to its enclosing class
    pub fn replace(&self) -> Type {
        match self {
            Type::SelfType(class) => Type::Named(class.clone()),
            other => other.clone(),
        }
    }

    /// Concrete class name, resolving `SELF_TYPE`
    pub fn class_name(&self) -> Option<&str> {
        match self {
            Type::Named(name) | Type::SelfType(name) => Some(name),
            Type::None => None,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Type::None)
    }

    /// Named type equal to `name` (a `SELF_TYPE` never is)
    pub fn is(
        &self,
        name: &str,
    ) -> bool {
        matches!(self, Type::Named(n) if n == name)
    }
}

impl fmt::Display for Type {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Type::Named(name) => f.write_str(name),
            Type::SelfType(_) => f.write_str(SELF_TYPE),
            Type::None => f.write_str("_no_type"),
        }
    }
}

/// Subtype test: is `sub` equal to or a descendant of `sup`
pub fn is_parent(
    graph: &ClassGraph,
    sub: &Type,
    sup: &Type,
) -> bool {
    match (sub, sup) {
        (Type::None, _) | (_, Type::None) => true,
        (Type::SelfType(a), Type::SelfType(b)) => a == b,
        (Type::Named(_), Type::SelfType(_)) => false,
        (Type::SelfType(a), Type::Named(b)) | (Type::Named(a), Type::Named(b)) => {
            graph.is_ancestor(a, b)
        }
    }
}

/// Least upper bound of a set of types
pub fn lub<'t>(
    graph: &ClassGraph,
    types: impl IntoIterator<Item = &'t Type>,
) -> Type {
    types
        .into_iter()
        .fold(Type::None, |acc, ty| join(graph, &acc, ty))
}

/// Join of two types
pub fn join(
    graph: &ClassGraph,
    a: &Type,
    b: &Type,
) -> Type {
    match (a, b) {
        (Type::None, other) | (other, Type::None) => other.clone(),
        (Type::SelfType(x), Type::SelfType(y)) if x == y => a.clone(),
        _ => {
            let (Some(x), Some(y)) = (a.class_name(), b.class_name()) else {
                return Type::None;
            };
            let right: Vec<&str> = graph.ancestors(y).collect();
            let common = graph
                .ancestors(x)
                .find(|class| right.contains(class))
                .unwrap_or(OBJECT);
            Type::named(common)
        }
    }
}
