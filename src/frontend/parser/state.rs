//! Parser state and token stream management

use super::super::lexer::tokens::*;
use super::ParseError;
use crate::util::span::Span;

/// Binding power levels for the Pratt parser
pub const BP_LOWEST: u8 = 0;
pub const BP_NOT: u8 = 20;
pub const BP_CMP: u8 = 30;
pub const BP_ADD: u8 = 40;
pub const BP_MUL: u8 = 50;
pub const BP_ISVOID: u8 = 60;
pub const BP_NEG: u8 = 70;
pub const BP_DISPATCH: u8 = 80;

/// Parser state for tracking position and errors
#[derive(Debug)]
pub struct ParserState<'a> {
    /// Token stream, always terminated by `Eof`
    tokens: &'a [Token],
    /// Current position in token stream
    pos: usize,
    /// Parsing errors
    errors: Vec<ParseError>,
    /// End of the last consumed token
    last_span: Span,
}

impl<'a> ParserState<'a> {
    /// Create a new parser state
    #[inline]
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            errors: Vec::new(),
            last_span: Span::dummy(),
        }
    }

    /// Check if at end of token stream
    #[inline]
    pub fn at_end(&self) -> bool {
        self.pos >= self.tokens.len() || matches!(self.tokens[self.pos].kind, TokenKind::Eof)
    }

    /// Get current token
    #[inline]
    pub fn current(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Get current token kind
    #[inline]
    pub fn current_kind(&self) -> Option<&TokenKind> {
        self.current().map(|t| &t.kind)
    }

    /// Check the current token kind
    #[inline]
    pub fn at(
        &self,
        kind: &TokenKind,
    ) -> bool {
        matches!(self.current(), Some(t) if &t.kind == kind)
    }

    /// Peek at next token
    #[inline]
    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos + 1)
    }

    /// Advance to next token
    #[inline]
    pub fn bump(&mut self) {
        if !self.at_end() {
            self.last_span = self.tokens[self.pos].span;
            self.pos += 1;
        }
    }

    /// Skip a specific token
    #[inline]
    pub fn skip(
        &mut self,
        kind: &TokenKind,
    ) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Expect a specific token, report error if not found
    pub fn expect(
        &mut self,
        kind: &TokenKind,
    ) -> Option<Span> {
        if self.at(kind) {
            let span = self.span();
            self.bump();
            Some(span)
        } else {
            self.unexpected(&kind.to_string());
            None
        }
    }

    /// Report that the current token is not what the grammar wants
    pub fn unexpected(
        &mut self,
        expected: &str,
    ) {
        let span = self.span();
        let error = match self.current_kind() {
            Some(TokenKind::Eof) | None => ParseError::UnexpectedEof {
                expected: expected.to_string(),
                span,
            },
            Some(found) => ParseError::UnexpectedToken {
                expected: expected.to_string(),
                found: found.clone(),
                span,
            },
        };
        self.error(error);
    }

    /// Span of the current token
    #[inline]
    pub fn span(&self) -> Span {
        self.current().map(|t| t.span).unwrap_or(self.last_span)
    }

    /// Span from `start` through the last consumed token
    #[inline]
    pub fn span_from(
        &self,
        start: Span,
    ) -> Span {
        Span::new(start.start, self.last_span.end)
    }

    /// Add a parse error
    #[inline]
    pub fn error(
        &mut self,
        error: ParseError,
    ) {
        self.errors.push(error);
    }

    /// Check if there are errors
    #[inline]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Get all errors
    #[inline]
    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }

    /// Skip to the start of the next class
    pub fn synchronize_class(&mut self) {
        while !self.at_end() && !self.at(&TokenKind::KwClass) {
            self.bump();
        }
    }

    /// Skip the rest of a broken feature.
    ///
    /// Stops after a `;` at brace depth zero, or before a `}` at depth zero
    /// that closes the enclosing class.
    pub fn synchronize_feature(&mut self) {
        let mut depth = 0usize;
        while !self.at_end() {
            match self.current_kind() {
                Some(TokenKind::LBrace) => depth += 1,
                Some(TokenKind::RBrace) => {
                    if depth == 0 {
                        return;
                    }
                    depth -= 1;
                }
                Some(TokenKind::Semicolon) if depth == 0 => {
                    self.bump();
                    return;
                }
                Some(TokenKind::KwClass) => return,
                _ => {}
            }
            self.bump();
        }
    }

    /// Type identifier
    pub fn expect_type_id(&mut self) -> Option<super::ast::Ident> {
        match self.current_kind() {
            Some(TokenKind::TypeId(name)) => {
                let ident = super::ast::Ident::new(name.clone(), self.span());
                self.bump();
                Some(ident)
            }
            _ => {
                self.unexpected("type identifier");
                None
            }
        }
    }

    /// Object identifier
    pub fn expect_object_id(&mut self) -> Option<super::ast::Ident> {
        match self.current_kind() {
            Some(TokenKind::ObjectId(name)) => {
                let ident = super::ast::Ident::new(name.clone(), self.span());
                self.bump();
                Some(ident)
            }
            _ => {
                self.unexpected("object identifier");
                None
            }
        }
    }
}
