//! Unified diagnostic system
//!
//! - [`error`] - `Diagnostic` and `Severity`
//! - [`codes`] - error code registry and `DiagnosticBuilder`
//! - [`conversion`] - phase error to diagnostic conversion
//!
//! ```ignore
//! use cool_lang::util::diagnostic::codes::ID_UNDEFINED;
//!
//! let diagnostic = ID_UNDEFINED.builder().param("name", "x").at(span).build();
//! eprintln!("{}", diagnostic);
//! ```

pub mod codes;
pub mod conversion;
pub mod error;

pub use codes::{DiagnosticBuilder, ErrorCategory, ErrorCodeDefinition};
pub use conversion::{internal_error, IntoDiagnostic};
pub use error::{Diagnostic, Severity};

/// Render diagnostics one per line
pub fn render_all<'a>(diagnostics: impl IntoIterator<Item = &'a Diagnostic>) -> String {
    let mut output = String::new();
    for diagnostic in diagnostics {
        output.push_str(&diagnostic.to_string());
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests;
