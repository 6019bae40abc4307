//! E6xxx: runtime errors

use super::{ErrorCategory, ErrorCodeDefinition};

pub const DIVIDE_BY_ZERO: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E6001",
    category: ErrorCategory::Runtime,
    message_template: "Division by zero",
};

pub const DISPATCH_ON_VOID: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E6002",
    category: ErrorCategory::Runtime,
    message_template: "Dispatch of '{name}' on void",
};

pub const CASE_NOT_MATCHED: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E6003",
    category: ErrorCategory::Runtime,
    message_template: "No case branch matches type '{name}'",
};

pub const UNEXPECTED_VOID: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E6004",
    category: ErrorCategory::Runtime,
    message_template: "Case branch '{name}' evaluated to void",
};

pub const SUBSTR_OUT_OF_RANGE: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E6005",
    category: ErrorCategory::Runtime,
    message_template: "substr({index}, {length}) out of range for a string of length {len}",
};

pub const INVALID_INPUT: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E6006",
    category: ErrorCategory::Runtime,
    message_template: "Input '{input}' is not an integer",
};

pub const STACK_OVERFLOW: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E6007",
    category: ErrorCategory::Runtime,
    message_template: "Stack overflow: call depth exceeded limit {limit}",
};

pub const NO_ENTRY_POINT: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E6008",
    category: ErrorCategory::Runtime,
    message_template: "No entry point: {reason}",
};

pub const IO_FAILURE: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E6009",
    category: ErrorCategory::Runtime,
    message_template: "I/O error: {message}",
};

pub static E6XXX: &[ErrorCodeDefinition] = &[
    DIVIDE_BY_ZERO,
    DISPATCH_ON_VOID,
    CASE_NOT_MATCHED,
    UNEXPECTED_VOID,
    SUBSTR_OUT_OF_RANGE,
    INVALID_INPUT,
    STACK_OVERFLOW,
    NO_ENTRY_POINT,
    IO_FAILURE,
];
