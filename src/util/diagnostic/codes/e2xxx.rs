//! E2xxx: class hierarchy and feature table errors
//!
//! Any one of these stops analysis immediately.

use super::{ErrorCategory, ErrorCodeDefinition};

pub const DUPLICATE_CLASS: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E2001",
    category: ErrorCategory::Semantic,
    message_template: "Class '{name}' is already defined",
};

pub const MUST_INHERIT_OBJECT: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E2002",
    category: ErrorCategory::Semantic,
    message_template: "Class '{name}' must inherit from Object",
};

pub const CYCLIC_INHERITANCE: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E2003",
    category: ErrorCategory::Semantic,
    message_template: "Class '{name}' inherits from itself",
};

pub const UNDEFINED_CLASS: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E2004",
    category: ErrorCategory::Semantic,
    message_template: "Class '{name}' inherits from undefined class '{parent}'",
};

pub const DUPLICATE_METHOD: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E2005",
    category: ErrorCategory::Semantic,
    message_template: "Method '{name}' is already defined in class '{class}'",
};

pub const ILLEGAL_OVERRIDE: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E2006",
    category: ErrorCategory::Semantic,
    message_template: "Method '{name}' in class '{class}' returns '{found}' but overrides a method returning '{expected}'",
};

pub const ATTRIBUTE_REDEFINED: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E2007",
    category: ErrorCategory::Semantic,
    message_template: "Attribute '{name}' of class '{class}' is already defined in class '{owner}'",
};

pub const SELF_ATTRIBUTE: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E2008",
    category: ErrorCategory::Semantic,
    message_template: "Class '{class}' declares an attribute named 'self'",
};

pub const INHERITS_BASIC_CLASS: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E2009",
    category: ErrorCategory::Semantic,
    message_template: "Class '{name}' cannot inherit from basic class '{parent}'",
};

pub static E2XXX: &[ErrorCodeDefinition] = &[
    DUPLICATE_CLASS,
    MUST_INHERIT_OBJECT,
    CYCLIC_INHERITANCE,
    UNDEFINED_CLASS,
    DUPLICATE_METHOD,
    ILLEGAL_OVERRIDE,
    ATTRIBUTE_REDEFINED,
    SELF_ATTRIBUTE,
    INHERITS_BASIC_CLASS,
];
