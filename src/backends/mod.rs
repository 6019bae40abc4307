//! Execution backends
//!
//! The tree-walking interpreter, plus the runtime error types it reports.
//!
//! ```text
//! CompiledProgram (typed AST + model)
//!         |
//!         v
//!    Interpreter ---> ObjectHeap / Collector
//!         |
//!         v
//!       Value
//! ```

pub mod interpreter;

use crate::util::diagnostic::codes::*;
use crate::util::diagnostic::{Diagnostic, IntoDiagnostic};
use crate::util::span::{Span, SpannedError};
use thiserror::Error;

/// Default maximum dispatch nesting
pub const DEFAULT_MAX_CALL_DEPTH: usize = 10_000;

/// Executor configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutorConfig {
    /// Maximum nested dispatch depth
    pub max_call_depth: usize,
    /// Registered heap size that triggers a collection
    pub gc_threshold: usize,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
            gc_threshold: crate::runtime::gc::DEFAULT_GC_THRESHOLD,
        }
    }
}

/// Fatal runtime error
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RuntimeError {
    #[error("Division by zero")]
    DivideByZero { span: Span },

    #[error("Dispatch of '{method}' on void")]
    DispatchOnVoid { method: String, span: Span },

    #[error("No case branch matches type '{class}'")]
    CaseNotMatched { class: String, span: Span },

    #[error("Case branch '{branch}' evaluated to void")]
    UnexpectedVoid { branch: String, span: Span },

    #[error("substr({index}, {length}) out of range for a string of length {len}")]
    SubstrOutOfRange {
        index: i64,
        length: i64,
        len: usize,
        span: Span,
    },

    #[error("Input '{input}' is not an integer")]
    InvalidInput { input: String, span: Span },

    #[error("Stack overflow: call depth exceeded limit {limit}")]
    StackOverflow { limit: usize, span: Span },

    #[error("No entry point: {reason}")]
    NoEntryPoint { reason: String },

    #[error("I/O error: {message}")]
    Io { message: String, span: Span },

    /// Broken invariant that the type checker should have ruled out
    #[error("Internal error: {message}")]
    Internal { message: String, span: Span },
}

impl RuntimeError {
    pub fn internal(
        message: impl Into<String>,
        span: Span,
    ) -> Self {
        RuntimeError::Internal {
            message: message.into(),
            span,
        }
    }
}

impl SpannedError for RuntimeError {
    fn span(&self) -> Span {
        match self {
            RuntimeError::DivideByZero { span }
            | RuntimeError::DispatchOnVoid { span, .. }
            | RuntimeError::CaseNotMatched { span, .. }
            | RuntimeError::UnexpectedVoid { span, .. }
            | RuntimeError::SubstrOutOfRange { span, .. }
            | RuntimeError::InvalidInput { span, .. }
            | RuntimeError::StackOverflow { span, .. }
            | RuntimeError::Io { span, .. }
            | RuntimeError::Internal { span, .. } => *span,
            RuntimeError::NoEntryPoint { .. } => Span::dummy(),
        }
    }
}

impl IntoDiagnostic for RuntimeError {
    fn to_diagnostic(&self) -> Diagnostic {
        let builder = match self {
            RuntimeError::DivideByZero { .. } => DIVIDE_BY_ZERO.builder(),
            RuntimeError::DispatchOnVoid { method, .. } => {
                DISPATCH_ON_VOID.builder().param("name", method.as_str())
            }
            RuntimeError::CaseNotMatched { class, .. } => {
                CASE_NOT_MATCHED.builder().param("name", class.as_str())
            }
            RuntimeError::UnexpectedVoid { branch, .. } => {
                UNEXPECTED_VOID.builder().param("name", branch.as_str())
            }
            RuntimeError::SubstrOutOfRange {
                index, length, len, ..
            } => SUBSTR_OUT_OF_RANGE
                .builder()
                .param("index", index.to_string())
                .param("length", length.to_string())
                .param("len", len.to_string()),
            RuntimeError::InvalidInput { input, .. } => {
                INVALID_INPUT.builder().param("input", input.as_str())
            }
            RuntimeError::StackOverflow { limit, .. } => {
                STACK_OVERFLOW.builder().param("limit", limit.to_string())
            }
            RuntimeError::NoEntryPoint { reason } => {
                NO_ENTRY_POINT.builder().param("reason", reason.as_str())
            }
            RuntimeError::Io { message, .. } => {
                IO_FAILURE.builder().param("message", message.as_str())
            }
            RuntimeError::Internal { message, .. } => {
                INTERNAL_ERROR.builder().param("message", message.as_str())
            }
        };
        builder.at(self.span()).build()
    }
}

/// Why evaluation stopped before the entry method returned
#[derive(Debug, Clone, PartialEq)]
pub enum Termination {
    /// `abort` was called on an object of this class
    Abort { class: String },
    Error(RuntimeError),
}

impl From<RuntimeError> for Termination {
    fn from(error: RuntimeError) -> Self {
        Termination::Error(error)
    }
}

/// Result type for evaluation steps
pub type ExecutorResult<T> = Result<T, Termination>;

/// How a completed run ended
#[derive(Debug, Clone, PartialEq)]
pub enum ExecutionOutcome {
    /// `Main.main` returned
    Finished,
    /// `abort` was called on an object of this class
    Aborted { class: String },
}
