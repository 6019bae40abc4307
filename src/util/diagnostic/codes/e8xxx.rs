//! E8xxx: internal errors

use super::{ErrorCategory, ErrorCodeDefinition};

pub const INTERNAL_ERROR: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E8001",
    category: ErrorCategory::Internal,
    message_template: "Internal error: {message}",
};

pub static E8XXX: &[ErrorCodeDefinition] = &[INTERNAL_ERROR];
