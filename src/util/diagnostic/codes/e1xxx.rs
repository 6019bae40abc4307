//! E1xxx: type errors
//!
//! These are accumulated; one run reports all of them.

use super::{ErrorCategory, ErrorCodeDefinition};

pub const EXPECTED_TYPE: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E1001",
    category: ErrorCategory::TypeCheck,
    message_template: "Expected type '{expected}', found '{found}'",
};

pub const NOT_SUBTYPE: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E1002",
    category: ErrorCategory::TypeCheck,
    message_template: "Type '{sub}' does not conform to '{sup}'",
};

pub const ID_UNDEFINED: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E1003",
    category: ErrorCategory::TypeCheck,
    message_template: "Undefined identifier '{name}'",
};

pub const TYPE_UNDEFINED: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E1004",
    category: ErrorCategory::TypeCheck,
    message_template: "Undefined type '{name}'",
};

pub const METHOD_UNDEFINED: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E1005",
    category: ErrorCategory::TypeCheck,
    message_template: "Undefined method '{name}({args})' in class '{class}'",
};

pub const AMBIGUOUS_OVERLOAD: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E1006",
    category: ErrorCategory::TypeCheck,
    message_template: "Ambiguous call '{name}({args})' in class '{class}'",
};

pub const INCOMPARABLE_TYPES: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E1007",
    category: ErrorCategory::TypeCheck,
    message_template: "Cannot compare '{left}' with '{right}'",
};

pub const DUPLICATE_BRANCH_TYPE: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E1008",
    category: ErrorCategory::TypeCheck,
    message_template: "Duplicate branch type '{name}' in case",
};

pub const ASSIGN_TO_SELF: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E1009",
    category: ErrorCategory::TypeCheck,
    message_template: "Cannot bind or assign 'self' ({context})",
};

pub static E1XXX: &[ErrorCodeDefinition] = &[
    EXPECTED_TYPE,
    NOT_SUBTYPE,
    ID_UNDEFINED,
    TYPE_UNDEFINED,
    METHOD_UNDEFINED,
    AMBIGUOUS_OVERLOAD,
    INCOMPARABLE_TYPES,
    DUPLICATE_BRANCH_TYPE,
    ASSIGN_TO_SELF,
];
