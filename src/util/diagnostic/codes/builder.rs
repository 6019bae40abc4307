//! Diagnostic builder
//!
//! Renders a registered message template with named parameters.

use crate::util::diagnostic::Diagnostic;
use crate::util::span::Span;

/// Diagnostic builder (template parameters + location)
#[derive(Debug, Clone)]
pub struct DiagnosticBuilder {
    code: &'static str,
    message_template: &'static str,
    params: Vec<(&'static str, String)>,
    span: Option<Span>,
}

impl DiagnosticBuilder {
    /// Create a builder for a code and its template
    pub fn new(
        code: &'static str,
        template: &'static str,
    ) -> Self {
        Self {
            code,
            message_template: template,
            params: Vec::new(),
            span: None,
        }
    }

    /// Add a template parameter
    pub fn param(
        mut self,
        key: &'static str,
        value: impl Into<String>,
    ) -> Self {
        self.params.push((key, value.into()));
        self
    }

    /// Set the location
    #[inline]
    pub fn at(
        mut self,
        span: Span,
    ) -> Self {
        self.span = Some(span);
        self
    }

    /// Build the diagnostic
    pub fn build(&self) -> Diagnostic {
        let message = render(self.message_template, &self.params);
        Diagnostic::error(self.code.to_string(), message, self.span)
    }
}

/// Substitute `{key}` placeholders.
///
/// A placeholder without a matching parameter is left as written.
pub fn render(
    template: &str,
    params: &[(&'static str, String)],
) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let key = &after[..close];
                match params.iter().find(|(k, _)| *k == key) {
                    Some((_, value)) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(key);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}
