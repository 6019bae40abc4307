//! Attribute tables

use super::class_graph::ClassGraph;
use super::errors::SemanticError;
use super::FeatureRef;
use crate::frontend::parser::ast::{ClassDef, Feature, SELF, SELF_TYPE};
use crate::util::span::Span;
use crate::util::symbol_table::SymbolTable;
use indexmap::IndexMap;
use std::collections::HashMap;

/// One declared attribute
#[derive(Debug, Clone, PartialEq)]
pub struct AttrDeclaration {
    pub owner: String,
    pub name: String,
    pub type_name: String,
    pub has_init: bool,
    pub feature: FeatureRef,
    pub span: Span,
}

/// Attributes each class declares itself, in declaration order
#[derive(Debug, Clone, Default)]
pub struct AttributeGraph {
    local: IndexMap<String, Vec<AttrDeclaration>>,
}

impl AttributeGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn collect_class(
        &mut self,
        class_index: usize,
        class: &ClassDef,
    ) -> Result<(), SemanticError> {
        let mut table: Vec<AttrDeclaration> = Vec::new();
        for (feature_index, feature) in class.features.iter().enumerate() {
            let Feature::Attr(attr) = feature else {
                continue;
            };
            if attr.name.value == SELF {
                return Err(SemanticError::AssignToSelf {
                    class: class.name.value.clone(),
                    span: attr.name.span,
                });
            }
            if table.iter().any(|a| a.name == attr.name.value) {
                return Err(SemanticError::AttributeRedefined {
                    class: class.name.value.clone(),
                    name: attr.name.value.clone(),
                    owner: class.name.value.clone(),
                    span: attr.name.span,
                });
            }
            table.push(AttrDeclaration {
                owner: class.name.value.clone(),
                name: attr.name.value.clone(),
                type_name: attr.type_name.value.clone(),
                has_init: attr.init.is_some(),
                feature: FeatureRef {
                    class: class_index,
                    feature: feature_index,
                },
                span: attr.name.span,
            });
        }
        self.local.insert(class.name.value.clone(), table);
        Ok(())
    }

    /// Attributes declared directly in `class`
    pub fn local(
        &self,
        class: &str,
    ) -> &[AttrDeclaration] {
        self.local.get(class).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every attribute of `class`, root class first
    pub fn chain<'a>(
        &'a self,
        graph: &'a ClassGraph,
        class: &'a str,
    ) -> impl Iterator<Item = &'a AttrDeclaration> + 'a {
        graph
            .chain_from_root(class)
            .into_iter()
            .flat_map(move |ancestor| self.local(ancestor).iter())
    }

    /// Build each class's compile-time table of attribute name -> type name.
    ///
    /// `self : SELF_TYPE` is bound last.
    pub fn merge(
        &self,
        graph: &ClassGraph,
    ) -> Result<HashMap<String, SymbolTable<String>>, SemanticError> {
        let mut tables = HashMap::new();
        for class in graph.classes() {
            let mut table = SymbolTable::new();
            table.enter_scope();
            let mut owners: HashMap<&str, &str> = HashMap::new();
            for attr in self.chain(graph, class) {
                if let Some(owner) = owners.get(attr.name.as_str()) {
                    return Err(SemanticError::AttributeRedefined {
                        class: attr.owner.clone(),
                        name: attr.name.clone(),
                        owner: owner.to_string(),
                        span: attr.span,
                    });
                }
                owners.insert(&attr.name, &attr.owner);
                table.add_id(attr.name.clone(), attr.type_name.clone());
            }
            table.add_id(SELF, SELF_TYPE.to_string());
            tables.insert(class.to_string(), table);
        }
        Ok(tables)
    }
}
