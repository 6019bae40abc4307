//! Method tables and overload resolution

use super::class_graph::ClassGraph;
use super::errors::SemanticError;
use super::FeatureRef;
use crate::frontend::parser::ast::{ClassDef, Feature};
use crate::frontend::typecheck::types::{is_parent, Type};
use crate::util::span::Span;
use indexmap::IndexMap;
use smallvec::SmallVec;

/// Formal parameter type names
pub type Params = SmallVec<[String; 4]>;

/// One declared method
#[derive(Debug, Clone, PartialEq)]
pub struct MethodDeclaration {
    pub owner: String,
    pub name: String,
    pub params: Params,
    /// Written return type, possibly `SELF_TYPE`
    pub return_type: String,
    pub feature: FeatureRef,
    pub span: Span,
}

impl MethodDeclaration {
    /// Same name and formal types; the return type is not part of identity
    pub fn same_signature(
        &self,
        other: &MethodDeclaration,
    ) -> bool {
        self.name == other.name && self.params == other.params
    }
}

/// Why a lookup failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupError {
    Undefined,
    Ambiguous,
}

/// Local and effective method tables per class
#[derive(Debug, Clone, Default)]
pub struct MethodGraph {
    local: IndexMap<String, Vec<MethodDeclaration>>,
    effective: IndexMap<String, Vec<MethodDeclaration>>,
}

impl MethodGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect the methods a class declares itself
    pub fn collect_class(
        &mut self,
        class_index: usize,
        class: &ClassDef,
    ) -> Result<(), SemanticError> {
        let mut table: Vec<MethodDeclaration> = Vec::new();
        for (feature_index, feature) in class.features.iter().enumerate() {
            let Feature::Method(method) = feature else {
                continue;
            };
            let decl = MethodDeclaration {
                owner: class.name.value.clone(),
                name: method.name.value.clone(),
                params: method
                    .formals
                    .iter()
                    .map(|f| f.type_name.value.clone())
                    .collect(),
                return_type: method.return_type.value.clone(),
                feature: FeatureRef {
                    class: class_index,
                    feature: feature_index,
                },
                span: method.name.span,
            };
            if table.iter().any(|m| m.same_signature(&decl)) {
                return Err(SemanticError::DuplicateMethod {
                    class: decl.owner,
                    method: decl.name,
                    span: decl.span,
                });
            }
            table.push(decl);
        }
        self.local.insert(class.name.value.clone(), table);
        Ok(())
    }

    /// Build every class's effective table.
    ///
    /// Local methods come first, then each ancestor's methods that no closer
    /// class redeclares, walking up to `Object`.
    pub fn merge(
        &mut self,
        graph: &ClassGraph,
    ) -> Result<(), SemanticError> {
        let mut effective = IndexMap::new();
        for class in graph.classes() {
            let mut table: Vec<MethodDeclaration> =
                self.local.get(class).cloned().unwrap_or_default();
            for ancestor in graph.ancestors(class).skip(1) {
                let Some(inherited) = self.local.get(ancestor) else {
                    continue;
                };
                for method in inherited {
                    match table.iter().find(|m| m.same_signature(method)) {
                        Some(existing) if existing.return_type != method.return_type => {
                            return Err(SemanticError::IllegalOverride {
                                class: existing.owner.clone(),
                                method: existing.name.clone(),
                                expected: method.return_type.clone(),
                                found: existing.return_type.clone(),
                                span: existing.span,
                            });
                        }
                        Some(_) => {}
                        None => table.push(method.clone()),
                    }
                }
            }
            effective.insert(class.to_string(), table);
        }
        self.effective = effective;
        Ok(())
    }

    /// Effective table of a class
    pub fn methods_of(
        &self,
        class: &str,
    ) -> &[MethodDeclaration] {
        self.effective.get(class).map(Vec::as_slice).unwrap_or(&[])
    }

    /// First effective method called `name`, ignoring argument types.
    ///
    /// A query only; dispatch goes through `lookup`.
    pub fn lookup_by_name(
        &self,
        class: &str,
        name: &str,
    ) -> Option<&MethodDeclaration> {
        self.methods_of(class).iter().find(|m| m.name == name)
    }

    /// Resolve a call of `name` on `class` with the given argument types.
    ///
    /// Candidates take exactly as many formals as there are arguments and
    /// accept each argument. Among several, the minimum method wins: the one
    /// whose formals are subtypes of every other candidate's formals.
    pub fn lookup(
        &self,
        graph: &ClassGraph,
        class: &str,
        name: &str,
        args: &[Type],
    ) -> Result<&MethodDeclaration, LookupError> {
        let candidates: Vec<&MethodDeclaration> = self
            .methods_of(class)
            .iter()
            .filter(|m| {
                m.name == name
                    && m.params.len() == args.len()
                    && args
                        .iter()
                        .zip(&m.params)
                        .all(|(arg, param)| is_parent(graph, arg, &Type::of(param, class)))
            })
            .collect();

        match candidates.as_slice() {
            [] => Err(LookupError::Undefined),
            [only] => Ok(*only),
            _ => minimum_method(graph, &candidates),
        }
    }
}

fn params_below(
    graph: &ClassGraph,
    sub: &[String],
    sup: &[String],
) -> bool {
    sub.iter()
        .zip(sup)
        .all(|(a, b)| graph.is_ancestor(a, b))
}

fn minimum_method<'m>(
    graph: &ClassGraph,
    candidates: &[&'m MethodDeclaration],
) -> Result<&'m MethodDeclaration, LookupError> {
    // Every candidate is below the all-Object starting point.
    let mut best = candidates[0];
    loop {
        let narrower = candidates.iter().find(|c| {
            params_below(graph, &c.params, &best.params)
                && !params_below(graph, &best.params, &c.params)
        });
        match narrower {
            Some(c) => best = *c,
            None => break,
        }
    }

    if candidates
        .iter()
        .all(|c| params_below(graph, &best.params, &c.params))
    {
        Ok(best)
    } else {
        Err(LookupError::Ambiguous)
    }
}
