//! Diagnostic data structures
//!
//! A `Diagnostic` carries an already rendered message. Diagnostics are only
//! created through `DiagnosticBuilder`, so every one of them has a code that
//! is listed in the registry.

use crate::util::span::{Span, SpannedError};
use std::fmt;

/// Diagnostic severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    /// Check if this is an error
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }
}

impl fmt::Display for Severity {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A rendered diagnostic message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity
    pub severity: Severity,
    /// Error code, e.g. `E1002`
    pub code: String,
    /// Rendered message
    pub message: String,
    /// Location in the source
    pub span: Option<Span>,
}

impl Diagnostic {
    /// `pub(crate)`: only `DiagnosticBuilder::build()` creates diagnostics.
    pub(crate) fn error(
        code: String,
        message: String,
        span: Option<Span>,
    ) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message,
            span,
        }
    }

    /// Check if this diagnostic is an error
    pub fn is_error(&self) -> bool {
        self.severity.is_error()
    }
}

impl SpannedError for Diagnostic {
    fn span(&self) -> Span {
        self.span.unwrap_or_default()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.code, self.message)?;
        match self.span {
            Some(span) if !span.is_dummy() => write!(f, " at {}", span),
            _ => Ok(()),
        }
    }
}
