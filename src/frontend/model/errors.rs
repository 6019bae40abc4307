//! Structural semantic errors
//!
//! These come from the class hierarchy and feature tables. Any one of them
//! leaves the model unusable, so analysis stops at the first.

use crate::util::diagnostic::codes::*;
use crate::util::diagnostic::{Diagnostic, IntoDiagnostic};
use crate::util::span::{Span, SpannedError};
use thiserror::Error;

/// Fatal semantic error
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SemanticError {
    #[error("Class '{name}' is already defined")]
    DuplicateClass { name: String, span: Span },

    #[error("Class '{name}' must inherit from Object")]
    MustInheritObject { name: String, span: Span },

    #[error("Class '{name}' inherits from itself")]
    CyclicInheritance { name: String, span: Span },

    #[error("Class '{name}' inherits from undefined class '{parent}'")]
    UndefinedClass {
        name: String,
        parent: String,
        span: Span,
    },

    #[error("Class '{name}' cannot inherit from basic class '{parent}'")]
    InheritsBasicClass {
        name: String,
        parent: String,
        span: Span,
    },

    #[error("Method '{method}' is already defined in class '{class}'")]
    DuplicateMethod {
        class: String,
        method: String,
        span: Span,
    },

    #[error("Method '{method}' in class '{class}' returns '{found}' but overrides a method returning '{expected}'")]
    IllegalOverride {
        class: String,
        method: String,
        expected: String,
        found: String,
        span: Span,
    },

    #[error("Attribute '{name}' of class '{class}' is already defined in class '{owner}'")]
    AttributeRedefined {
        class: String,
        name: String,
        owner: String,
        span: Span,
    },

    #[error("Class '{class}' declares an attribute named 'self'")]
    AssignToSelf { class: String, span: Span },
}

impl SpannedError for SemanticError {
    fn span(&self) -> Span {
        match self {
            SemanticError::DuplicateClass { span, .. }
            | SemanticError::MustInheritObject { span, .. }
            | SemanticError::CyclicInheritance { span, .. }
            | SemanticError::UndefinedClass { span, .. }
            | SemanticError::InheritsBasicClass { span, .. }
            | SemanticError::DuplicateMethod { span, .. }
            | SemanticError::IllegalOverride { span, .. }
            | SemanticError::AttributeRedefined { span, .. }
            | SemanticError::AssignToSelf { span, .. } => *span,
        }
    }
}

impl IntoDiagnostic for SemanticError {
    fn to_diagnostic(&self) -> Diagnostic {
        let builder = match self {
            SemanticError::DuplicateClass { name, .. } => {
                DUPLICATE_CLASS.builder().param("name", name.as_str())
            }
            SemanticError::MustInheritObject { name, .. } => {
                MUST_INHERIT_OBJECT.builder().param("name", name.as_str())
            }
            SemanticError::CyclicInheritance { name, .. } => {
                CYCLIC_INHERITANCE.builder().param("name", name.as_str())
            }
            SemanticError::UndefinedClass { name, parent, .. } => UNDEFINED_CLASS
                .builder()
                .param("name", name.as_str())
                .param("parent", parent.as_str()),
            SemanticError::InheritsBasicClass { name, parent, .. } => INHERITS_BASIC_CLASS
                .builder()
                .param("name", name.as_str())
                .param("parent", parent.as_str()),
            SemanticError::DuplicateMethod { class, method, .. } => DUPLICATE_METHOD
                .builder()
                .param("name", method.as_str())
                .param("class", class.as_str()),
            SemanticError::IllegalOverride {
                class,
                method,
                expected,
                found,
                ..
            } => ILLEGAL_OVERRIDE
                .builder()
                .param("name", method.as_str())
                .param("class", class.as_str())
                .param("expected", expected.as_str())
                .param("found", found.as_str()),
            SemanticError::AttributeRedefined {
                class, name, owner, ..
            } => ATTRIBUTE_REDEFINED
                .builder()
                .param("name", name.as_str())
                .param("class", class.as_str())
                .param("owner", owner.as_str()),
            SemanticError::AssignToSelf { class, .. } => {
                SELF_ATTRIBUTE.builder().param("class", class.as_str())
            }
        };
        builder.at(self.span()).build()
    }
}
