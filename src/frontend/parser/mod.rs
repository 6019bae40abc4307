//! Parser module
//!
//! A Pratt parser over the token stream. The resulting `Program` always
//! starts with the five built-in classes, followed by the user classes in
//! source order.

pub mod ast;
pub mod builtins;
mod expr;
mod led;
mod nud;
mod state;

pub use state::{ParserState, BP_LOWEST};

use crate::frontend::lexer::tokens::*;
use crate::util::diagnostic::codes::*;
use crate::util::diagnostic::{Diagnostic, IntoDiagnostic};
use crate::util::span::{Span, SpannedError};
use ast::*;

/// Parse tokens into a program.
///
/// All syntax errors are collected using panic-mode recovery: an error in a
/// feature skips to the next `;` and an error elsewhere in a class skips to
/// the next `class`.
pub fn parse(tokens: &[Token]) -> Result<Program, Vec<ParseError>> {
    let mut state = ParserState::new(tokens);
    let mut classes = builtins::builtin_classes();
    let builtin_count = classes.len();

    while !state.at_end() {
        match state.parse_class() {
            Some(class) => classes.push(class),
            None => state.synchronize_class(),
        }
    }

    if classes.len() == builtin_count && !state.has_errors() {
        state.error(ParseError::EmptyProgram { span: state.span() });
    }

    if state.has_errors() {
        return Err(state.into_errors());
    }

    let span = match (classes.get(builtin_count), classes.last()) {
        (Some(first), Some(last)) => first.span.to(last.span),
        _ => Span::dummy(),
    };
    Ok(Program { classes, span })
}

/// Parse a single expression
pub fn parse_expression(tokens: &[Token]) -> Result<Expr, Vec<ParseError>> {
    let mut state = ParserState::new(tokens);
    let expr = state.parse_expression(BP_LOWEST);
    if expr.is_some() && !state.at_end() {
        state.unexpected("end of input");
    }
    match expr {
        Some(e) if !state.has_errors() => Ok(e),
        _ => Err(state.into_errors()),
    }
}

impl<'a> ParserState<'a> {
    /// `class TYPE [inherits TYPE] { [feature;]* } [;]`
    fn parse_class(&mut self) -> Option<ClassDef> {
        let start = self.expect(&TokenKind::KwClass)?;
        let name = self.expect_type_id()?;
        let parent = if self.skip(&TokenKind::KwInherits) {
            self.expect_type_id()?
        } else {
            Ident::new(OBJECT.to_string(), name.span)
        };
        self.expect(&TokenKind::LBrace)?;

        let mut features = Vec::new();
        while !self.at(&TokenKind::RBrace) && !self.at_end() && !self.at(&TokenKind::KwClass) {
            match self.parse_feature() {
                Some(feature) => {
                    features.push(feature);
                    self.skip(&TokenKind::Semicolon);
                }
                None => self.synchronize_feature(),
            }
        }
        self.expect(&TokenKind::RBrace)?;
        self.skip(&TokenKind::Semicolon);

        Some(ClassDef {
            name,
            parent: Some(parent),
            features,
            builtin: false,
            span: self.span_from(start),
        })
    }

    /// `ID([formal [, formal]*]) : TYPE { expr }` or `ID : TYPE [<- expr]`
    fn parse_feature(&mut self) -> Option<Feature> {
        let name = self.expect_object_id()?;
        let start = name.span;

        if self.skip(&TokenKind::LParen) {
            let mut formals = Vec::new();
            if !self.skip(&TokenKind::RParen) {
                loop {
                    let formal_name = self.expect_object_id()?;
                    self.expect(&TokenKind::Colon)?;
                    let type_name = self.expect_type_id()?;
                    formals.push(Formal {
                        name: formal_name,
                        type_name,
                    });
                    if !self.skip(&TokenKind::Comma) {
                        break;
                    }
                }
                self.expect(&TokenKind::RParen)?;
            }
            self.expect(&TokenKind::Colon)?;
            let return_type = self.expect_type_id()?;
            self.expect(&TokenKind::LBrace)?;
            let body = self.parse_expression(BP_LOWEST)?;
            self.expect(&TokenKind::RBrace)?;

            Some(Feature::Method(MethodDef {
                name,
                formals,
                return_type,
                body,
                span: self.span_from(start),
            }))
        } else {
            self.expect(&TokenKind::Colon)?;
            let type_name = self.expect_type_id()?;
            let init = if self.skip(&TokenKind::Assign) {
                Some(self.parse_expression(BP_LOWEST)?)
            } else {
                None
            };

            Some(Feature::Attr(AttrDef {
                name,
                type_name,
                init,
                span: self.span_from(start),
            }))
        }
    }
}

/// Parse error types
#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum ParseError {
    #[error("Expected {expected}, found {found}")]
    UnexpectedToken {
        expected: String,
        found: TokenKind,
        span: Span,
    },

    #[error("Unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: String, span: Span },

    #[error("Comparison operator '{op}' cannot be chained")]
    NonAssociative { op: String, span: Span },

    #[error("A program must contain at least one class")]
    EmptyProgram { span: Span },
}

impl SpannedError for ParseError {
    fn span(&self) -> Span {
        match self {
            ParseError::UnexpectedToken { span, .. }
            | ParseError::UnexpectedEof { span, .. }
            | ParseError::NonAssociative { span, .. }
            | ParseError::EmptyProgram { span } => *span,
        }
    }
}

impl IntoDiagnostic for ParseError {
    fn to_diagnostic(&self) -> Diagnostic {
        let builder = match self {
            ParseError::UnexpectedToken {
                expected, found, ..
            } => UNEXPECTED_TOKEN
                .builder()
                .param("expected", expected.as_str())
                .param("found", found.to_string()),
            ParseError::UnexpectedEof { expected, .. } => {
                UNEXPECTED_EOF.builder().param("expected", expected.as_str())
            }
            ParseError::NonAssociative { op, .. } => {
                NON_ASSOCIATIVE.builder().param("op", op.as_str())
            }
            ParseError::EmptyProgram { .. } => EMPTY_PROGRAM.builder(),
        };
        builder.at(self.span()).build()
    }
}

#[cfg(test)]
mod tests;
