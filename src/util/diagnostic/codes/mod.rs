//! Error code registry
//!
//! Central definition of every diagnostic code.

pub mod e0xxx;
pub mod e1xxx;
pub mod e2xxx;
pub mod e6xxx;
pub mod e8xxx;

pub use e0xxx::*;
pub use e1xxx::*;
pub use e2xxx::*;
pub use e6xxx::*;
pub use e8xxx::*;

pub mod builder;
pub use builder::DiagnosticBuilder;

use once_cell::sync::Lazy;

/// Error category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Lexer,     // E0xxx: lexical analysis
    Parser,    // E0xxx: syntax
    TypeCheck, // E1xxx: type checking
    Semantic,  // E2xxx: class hierarchy and features
    Runtime,   // E6xxx: evaluation
    Internal,  // E8xxx: internal invariants
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            ErrorCategory::Lexer => write!(f, "Lexer"),
            ErrorCategory::Parser => write!(f, "Parser"),
            ErrorCategory::TypeCheck => write!(f, "Type Check"),
            ErrorCategory::Semantic => write!(f, "Semantic"),
            ErrorCategory::Runtime => write!(f, "Runtime"),
            ErrorCategory::Internal => write!(f, "Internal"),
        }
    }
}

/// Error code definition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorCodeDefinition {
    /// Code, e.g. "E1001"
    pub code: &'static str,
    /// Category
    pub category: ErrorCategory,
    /// Message template with `{param}` placeholders
    pub message_template: &'static str,
}

/// Full registry
static ERROR_CODES: Lazy<Vec<ErrorCodeDefinition>> = Lazy::new(|| {
    let mut codes: Vec<ErrorCodeDefinition> = Vec::new();

    codes.extend_from_slice(e0xxx::E0XXX);
    codes.extend_from_slice(e1xxx::E1XXX);
    codes.extend_from_slice(e2xxx::E2XXX);
    codes.extend_from_slice(e6xxx::E6XXX);
    codes.extend_from_slice(e8xxx::E8XXX);

    codes
});

impl ErrorCodeDefinition {
    /// Find a definition by code
    pub fn find(code: &str) -> Option<&'static Self> {
        ERROR_CODES.iter().find(|c| c.code == code)
    }

    /// All registered codes
    pub fn all() -> &'static [Self] {
        &ERROR_CODES
    }

    /// Codes of one category
    pub fn by_category(category: ErrorCategory) -> impl Iterator<Item = &'static Self> {
        ERROR_CODES.iter().filter(move |c| c.category == category)
    }

    /// Start a `DiagnosticBuilder` for this code
    pub fn builder(&self) -> DiagnosticBuilder {
        DiagnosticBuilder::new(self.code, self.message_template)
    }
}
