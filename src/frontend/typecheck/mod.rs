//! Type checker
//!
//! One depth-first pass over every user class. Each expression node gets its
//! static type; errors are collected and reported together.

mod checker;
pub mod errors;
mod expressions;
pub mod types;

pub use checker::TypeChecker;
pub use errors::{TypeError, TypeErrorCollector};
pub use types::{is_parent, join, lub, Type};

use crate::frontend::model::ProgramModel;
use crate::frontend::parser::ast::Program;

/// Type check a program against its model
pub fn check_program(
    program: &mut Program,
    model: &ProgramModel,
) -> Result<(), Vec<TypeError>> {
    TypeChecker::new(model).check_program(program)
}

#[cfg(test)]
mod tests;
