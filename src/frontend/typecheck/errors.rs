//! Type errors and their collector
//!
//! Type errors never stop the walk. The offending node gets the absent type
//! and checking goes on, so one run reports every independent error.

use crate::util::diagnostic::codes::*;
use crate::util::diagnostic::{Diagnostic, IntoDiagnostic};
use crate::util::span::{Span, SpannedError};
use thiserror::Error;

/// Accumulated type error
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TypeError {
    #[error("Expected type '{expected}', found '{found}'")]
    ExpectedType {
        expected: String,
        found: String,
        span: Span,
    },

    #[error("Type '{sub}' does not conform to '{sup}'")]
    NotSubtype { sub: String, sup: String, span: Span },

    #[error("Undefined identifier '{name}'")]
    IdUndefined { name: String, span: Span },

    #[error("Undefined type '{name}'")]
    TypeUndefined { name: String, span: Span },

    #[error("Undefined method '{name}({args})' in class '{class}'")]
    MethodUndefined {
        name: String,
        args: String,
        class: String,
        span: Span,
    },

    #[error("Ambiguous call '{name}({args})' in class '{class}'")]
    AmbiguousOverload {
        name: String,
        args: String,
        class: String,
        span: Span,
    },

    #[error("Cannot compare '{left}' with '{right}'")]
    IncomparableTypes {
        left: String,
        right: String,
        span: Span,
    },

    #[error("Duplicate branch type '{name}' in case")]
    DuplicateBranchType { name: String, span: Span },

    #[error("Cannot bind or assign 'self' ({context})")]
    AssignToSelf { context: String, span: Span },
}

impl TypeError {
    pub fn expected_type(
        expected: impl ToString,
        found: impl ToString,
        span: Span,
    ) -> Self {
        TypeError::ExpectedType {
            expected: expected.to_string(),
            found: found.to_string(),
            span,
        }
    }

    pub fn not_subtype(
        sub: impl ToString,
        sup: impl ToString,
        span: Span,
    ) -> Self {
        TypeError::NotSubtype {
            sub: sub.to_string(),
            sup: sup.to_string(),
            span,
        }
    }

    pub fn assign_to_self(
        context: &str,
        span: Span,
    ) -> Self {
        TypeError::AssignToSelf {
            context: context.to_string(),
            span,
        }
    }
}

impl SpannedError for TypeError {
    fn span(&self) -> Span {
        match self {
            TypeError::ExpectedType { span, .. }
            | TypeError::NotSubtype { span, .. }
            | TypeError::IdUndefined { span, .. }
            | TypeError::TypeUndefined { span, .. }
            | TypeError::MethodUndefined { span, .. }
            | TypeError::AmbiguousOverload { span, .. }
            | TypeError::IncomparableTypes { span, .. }
            | TypeError::DuplicateBranchType { span, .. }
            | TypeError::AssignToSelf { span, .. } => *span,
        }
    }
}

impl IntoDiagnostic for TypeError {
    fn to_diagnostic(&self) -> Diagnostic {
        let builder = match self {
            TypeError::ExpectedType {
                expected, found, ..
            } => EXPECTED_TYPE
                .builder()
                .param("expected", expected.as_str())
                .param("found", found.as_str()),
            TypeError::NotSubtype { sub, sup, .. } => NOT_SUBTYPE
                .builder()
                .param("sub", sub.as_str())
                .param("sup", sup.as_str()),
            TypeError::IdUndefined { name, .. } => {
                ID_UNDEFINED.builder().param("name", name.as_str())
            }
            TypeError::TypeUndefined { name, .. } => {
                TYPE_UNDEFINED.builder().param("name", name.as_str())
            }
            TypeError::MethodUndefined {
                name, args, class, ..
            } => METHOD_UNDEFINED
                .builder()
                .param("name", name.as_str())
                .param("args", args.as_str())
                .param("class", class.as_str()),
            TypeError::AmbiguousOverload {
                name, args, class, ..
            } => AMBIGUOUS_OVERLOAD
                .builder()
                .param("name", name.as_str())
                .param("args", args.as_str())
                .param("class", class.as_str()),
            TypeError::IncomparableTypes { left, right, .. } => INCOMPARABLE_TYPES
                .builder()
                .param("left", left.as_str())
                .param("right", right.as_str()),
            TypeError::DuplicateBranchType { name, .. } => {
                DUPLICATE_BRANCH_TYPE.builder().param("name", name.as_str())
            }
            TypeError::AssignToSelf { context, .. } => {
                ASSIGN_TO_SELF.builder().param("context", context.as_str())
            }
        };
        builder.at(self.span()).build()
    }
}

/// Collects type errors for batch reporting
#[derive(Debug, Default)]
pub struct TypeErrorCollector {
    errors: Vec<TypeError>,
}

impl TypeErrorCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(
        &mut self,
        error: TypeError,
    ) {
        self.errors.push(error);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> &[TypeError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<TypeError> {
        self.errors
    }
}
