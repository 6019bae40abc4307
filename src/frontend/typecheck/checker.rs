//! Class and feature level checks

use super::errors::{TypeError, TypeErrorCollector};
use super::types::{is_parent, Type};
use crate::frontend::model::ProgramModel;
use crate::frontend::parser::ast::{AttrDef, ClassDef, Feature, Ident, MethodDef, SELF, SELF_TYPE};
use crate::frontend::parser::ast::Program;
use crate::util::symbol_table::SymbolTable;
use tracing::{debug, trace};

/// Annotates every expression of a program with its static type
pub struct TypeChecker<'m> {
    pub(super) model: &'m ProgramModel,
    /// Name -> declared type name, seeded from the class's attribute table
    pub(super) env: SymbolTable<String>,
    /// Lexically enclosing class
    pub(super) class: String,
    pub(super) errors: TypeErrorCollector,
}

impl<'m> TypeChecker<'m> {
    pub fn new(model: &'m ProgramModel) -> Self {
        Self {
            model,
            env: SymbolTable::new(),
            class: String::new(),
            errors: TypeErrorCollector::new(),
        }
    }

    /// Check every user class, writing `ty` on each expression node
    pub fn check_program(
        mut self,
        program: &mut Program,
    ) -> Result<(), Vec<TypeError>> {
        for class in program.classes.iter_mut().filter(|c| !c.builtin) {
            self.check_class(class);
        }
        debug!(
            "type checking finished with {} error(s)",
            self.errors.error_count()
        );
        if self.errors.has_errors() {
            Err(self.errors.into_errors())
        } else {
            Ok(())
        }
    }

    fn check_class(
        &mut self,
        class: &mut ClassDef,
    ) {
        trace!("checking class {}", class.name.value);
        self.class = class.name.value.clone();
        self.env = self
            .model
            .symbol_table(&self.class)
            .cloned()
            .unwrap_or_default();

        for feature in class.features.iter_mut() {
            match feature {
                Feature::Attr(attr) => self.check_attr(attr),
                Feature::Method(method) => self.check_method(method),
            }
        }
    }

    fn check_attr(
        &mut self,
        attr: &mut AttrDef,
    ) {
        let declared_ok = self.check_type_defined(&attr.type_name);
        let Some(init) = attr.init.as_mut() else {
            return;
        };
        let found = self.check_expr(init);
        let declared = Type::of(&attr.type_name, &self.class);
        if declared_ok && !is_parent(&self.model.classes, &found, &declared) {
            self.errors
                .add_error(TypeError::not_subtype(&found, &declared, init.span));
        }
    }

    fn check_method(
        &mut self,
        method: &mut MethodDef,
    ) {
        let return_ok = self.check_type_defined(&method.return_type);

        self.env.enter_scope();
        for formal in &method.formals {
            if formal.name.value == SELF {
                self.errors
                    .add_error(TypeError::assign_to_self("formal parameter", formal.name.span));
                continue;
            }
            self.check_type_defined(&formal.type_name);
            self.env
                .add_id(formal.name.value.clone(), formal.type_name.value.clone());
        }

        let found = self.check_expr(&mut method.body);
        let declared = Type::of(&method.return_type, &self.class);
        if return_ok && !is_parent(&self.model.classes, &found, &declared) {
            self.errors
                .add_error(TypeError::not_subtype(&found, &declared, method.body.span));
        }
        self.env.exit_scope();
    }

    /// Report `TypeUndefined` for a type name outside the class graph
    pub(super) fn check_type_defined(
        &mut self,
        type_name: &Ident,
    ) -> bool {
        if type_name.value == SELF_TYPE || self.model.classes.contains(&type_name.value) {
            return true;
        }
        self.errors.add_error(TypeError::TypeUndefined {
            name: type_name.value.clone(),
            span: type_name.span,
        });
        false
    }
}
