//! Program model
//!
//! The class hierarchy plus the merged method and attribute tables. Built
//! once from the parsed program, then shared read-only by the type checker
//! and the interpreter.

pub mod attributes;
pub mod class_graph;
pub mod errors;
pub mod methods;

pub use attributes::{AttrDeclaration, AttributeGraph};
pub use class_graph::ClassGraph;
pub use errors::SemanticError;
pub use methods::{LookupError, MethodDeclaration, MethodGraph};

use crate::frontend::parser::ast::{AttrDef, Feature, MethodDef, Program};
use crate::util::symbol_table::SymbolTable;
use std::collections::HashMap;
use tracing::debug;

/// Position of a feature inside `Program::classes`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeatureRef {
    pub class: usize,
    pub feature: usize,
}

impl FeatureRef {
    pub fn resolve<'p>(
        &self,
        program: &'p Program,
    ) -> Option<&'p Feature> {
        program.classes.get(self.class)?.features.get(self.feature)
    }

    pub fn method<'p>(
        &self,
        program: &'p Program,
    ) -> Option<&'p MethodDef> {
        match self.resolve(program)? {
            Feature::Method(method) => Some(method),
            Feature::Attr(_) => None,
        }
    }

    pub fn attr<'p>(
        &self,
        program: &'p Program,
    ) -> Option<&'p AttrDef> {
        match self.resolve(program)? {
            Feature::Attr(attr) => Some(attr),
            Feature::Method(_) => None,
        }
    }
}

/// Hierarchy and feature tables of one program
#[derive(Debug, Clone, Default)]
pub struct ProgramModel {
    pub classes: ClassGraph,
    pub methods: MethodGraph,
    pub attributes: AttributeGraph,
    symbol_tables: HashMap<String, SymbolTable<String>>,
    class_indices: HashMap<String, usize>,
}

impl ProgramModel {
    /// Build and validate the model. Stops at the first structural error.
    pub fn build(program: &Program) -> Result<Self, SemanticError> {
        let mut classes = ClassGraph::new();
        for class in &program.classes {
            let parent = class.parent.as_ref().map(|p| p.value.as_str());
            classes.declare_class(&class.name.value, parent, class.name.span)?;
        }
        classes.check_undefined_classes()?;
        debug!("class graph built with {} classes", classes.len());

        let mut methods = MethodGraph::new();
        for (index, class) in program.classes.iter().enumerate() {
            methods.collect_class(index, class)?;
        }
        methods.merge(&classes)?;

        let mut attributes = AttributeGraph::new();
        for (index, class) in program.classes.iter().enumerate() {
            attributes.collect_class(index, class)?;
        }
        let symbol_tables = attributes.merge(&classes)?;
        debug!("feature tables merged");

        let class_indices = program
            .classes
            .iter()
            .enumerate()
            .map(|(index, class)| (class.name.value.clone(), index))
            .collect();

        Ok(Self {
            classes,
            methods,
            attributes,
            symbol_tables,
            class_indices,
        })
    }

    /// Compile-time attribute table of a class (attribute name -> type name)
    pub fn symbol_table(
        &self,
        class: &str,
    ) -> Option<&SymbolTable<String>> {
        self.symbol_tables.get(class)
    }

    /// Index of a class in `Program::classes`
    pub fn class_index(
        &self,
        class: &str,
    ) -> Option<usize> {
        self.class_indices.get(class).copied()
    }
}

#[cfg(test)]
mod tests;
