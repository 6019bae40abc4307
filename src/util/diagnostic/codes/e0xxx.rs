//! E0xxx: lexical and syntax errors

use super::{ErrorCategory, ErrorCodeDefinition};

pub const INVALID_CHARACTER: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E0001",
    category: ErrorCategory::Lexer,
    message_template: "Invalid character '{char}'",
};

pub const UNTERMINATED_STRING: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E0002",
    category: ErrorCategory::Lexer,
    message_template: "Unterminated string literal",
};

pub const NEWLINE_IN_STRING: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E0003",
    category: ErrorCategory::Lexer,
    message_template: "Unescaped newline in string literal",
};

pub const UNTERMINATED_COMMENT: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E0004",
    category: ErrorCategory::Lexer,
    message_template: "Unterminated comment",
};

pub const INTEGER_OUT_OF_RANGE: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E0005",
    category: ErrorCategory::Lexer,
    message_template: "Integer literal '{literal}' is out of range",
};

pub const UNMATCHED_COMMENT_CLOSE: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E0006",
    category: ErrorCategory::Lexer,
    message_template: "Unmatched '*)'",
};

pub const UNEXPECTED_TOKEN: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E0010",
    category: ErrorCategory::Parser,
    message_template: "Expected {expected}, found {found}",
};

pub const UNEXPECTED_EOF: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E0011",
    category: ErrorCategory::Parser,
    message_template: "Unexpected end of input, expected {expected}",
};

pub const NON_ASSOCIATIVE: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E0012",
    category: ErrorCategory::Parser,
    message_template: "Comparison operator '{op}' cannot be chained",
};

pub const EMPTY_PROGRAM: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E0013",
    category: ErrorCategory::Parser,
    message_template: "A program must contain at least one class",
};

pub static E0XXX: &[ErrorCodeDefinition] = &[
    INVALID_CHARACTER,
    UNTERMINATED_STRING,
    NEWLINE_IN_STRING,
    UNTERMINATED_COMMENT,
    INTEGER_OUT_OF_RANGE,
    UNMATCHED_COMMENT_CLOSE,
    UNEXPECTED_TOKEN,
    UNEXPECTED_EOF,
    NON_ASSOCIATIVE,
    EMPTY_PROGRAM,
];
