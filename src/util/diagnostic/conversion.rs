//! Error conversion
//!
//! Every phase error type turns into a `Diagnostic` through the registry.

use super::codes::INTERNAL_ERROR;
use super::error::Diagnostic;

/// Phase errors that can be reported as diagnostics
pub trait IntoDiagnostic {
    fn to_diagnostic(&self) -> Diagnostic;
}

/// Report a free-form internal failure
pub fn internal_error(message: impl Into<String>) -> Diagnostic {
    INTERNAL_ERROR.builder().param("message", message).build()
}
