//! Lexer module

pub mod tokens;

use crate::util::diagnostic::codes::*;
use crate::util::diagnostic::{Diagnostic, IntoDiagnostic};
use crate::util::span::{Span, SpannedError};
use tokens::*;

pub use tokenizer::tokenize;

/// Lexer error
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LexError {
    #[error("Invalid character '{ch}'")]
    InvalidCharacter { ch: char, span: Span },
    #[error("Unterminated string literal")]
    UnterminatedString { span: Span },
    #[error("Unescaped newline in string literal")]
    NewlineInString { span: Span },
    #[error("Unterminated comment")]
    UnterminatedComment { span: Span },
    #[error("Integer literal '{literal}' is out of range")]
    IntegerOutOfRange { literal: String, span: Span },
    #[error("Unmatched '*)'")]
    UnmatchedCommentClose { span: Span },
}

impl SpannedError for LexError {
    fn span(&self) -> Span {
        match self {
            LexError::InvalidCharacter { span, .. }
            | LexError::UnterminatedString { span }
            | LexError::NewlineInString { span }
            | LexError::UnterminatedComment { span }
            | LexError::IntegerOutOfRange { span, .. }
            | LexError::UnmatchedCommentClose { span } => *span,
        }
    }
}

impl IntoDiagnostic for LexError {
    fn to_diagnostic(&self) -> Diagnostic {
        let builder = match self {
            LexError::InvalidCharacter { ch, .. } => {
                INVALID_CHARACTER.builder().param("char", ch.escape_default().to_string())
            }
            LexError::UnterminatedString { .. } => UNTERMINATED_STRING.builder(),
            LexError::NewlineInString { .. } => NEWLINE_IN_STRING.builder(),
            LexError::UnterminatedComment { .. } => UNTERMINATED_COMMENT.builder(),
            LexError::IntegerOutOfRange { literal, .. } => {
                INTEGER_OUT_OF_RANGE.builder().param("literal", literal.as_str())
            }
            LexError::UnmatchedCommentClose { .. } => UNMATCHED_COMMENT_CLOSE.builder(),
        };
        builder.at(self.span()).build()
    }
}

/// Tokenize source code
mod tokenizer {
    use super::*;
    use crate::util::span::Position;
    use std::iter::Peekable;
    use std::str::Chars;

    /// Scan the whole input.
    ///
    /// Scanning continues after an error, so every lexical error in the file
    /// is reported at once.
    pub fn tokenize(source: &str) -> Result<Vec<Token>, Vec<LexError>> {
        let mut lexer = Lexer::new(source);
        let mut tokens = Vec::new();

        while let Some(token) = lexer.next_token() {
            tokens.push(token);
        }

        if !lexer.errors.is_empty() {
            return Err(lexer.errors);
        }

        let end = lexer.position();
        tokens.push(Token::new(TokenKind::Eof, Span::new(end, end)));
        Ok(tokens)
    }

    struct Lexer<'a> {
        chars: Peekable<Chars<'a>>,
        offset: usize,
        line: usize,
        column: usize,
        start: Position,
        errors: Vec<LexError>,
    }

    impl<'a> Lexer<'a> {
        fn new(source: &'a str) -> Self {
            Self {
                chars: source.chars().peekable(),
                offset: 0,
                line: 1,
                column: 1,
                start: Position::with_offset(1, 1, 0),
                errors: Vec::new(),
            }
        }

        fn position(&self) -> Position {
            Position::with_offset(self.line, self.column, self.offset)
        }

        fn span(&self) -> Span {
            Span::new(self.start, self.position())
        }

        fn advance(&mut self) -> Option<char> {
            match self.chars.next() {
                Some('\n') => {
                    self.offset += 1;
                    self.line += 1;
                    self.column = 1;
                    Some('\n')
                }
                Some(c) => {
                    self.offset += c.len_utf8();
                    self.column += 1;
                    Some(c)
                }
                None => None,
            }
        }

        fn peek(&mut self) -> Option<char> {
            self.chars.peek().copied()
        }

        fn eat(
            &mut self,
            expected: char,
        ) -> bool {
            if self.peek() == Some(expected) {
                self.advance();
                true
            } else {
                false
            }
        }

        fn make_token(
            &self,
            kind: TokenKind,
        ) -> Token {
            Token::new(kind, self.span())
        }

        fn next_token(&mut self) -> Option<Token> {
            loop {
                self.skip_whitespace();
                self.start = self.position();
                let c = self.advance()?;

                let kind = match c {
                    c if c.is_ascii_alphabetic() => self.scan_identifier(c),
                    c if c.is_ascii_digit() => match self.scan_number(c) {
                        Some(kind) => kind,
                        None => continue,
                    },
                    '"' => match self.scan_string() {
                        Some(kind) => kind,
                        None => continue,
                    },
                    '-' => {
                        if self.eat('-') {
                            self.skip_line_comment();
                            continue;
                        }
                        TokenKind::Minus
                    }
                    '(' => {
                        if self.eat('*') {
                            self.skip_block_comment();
                            continue;
                        }
                        TokenKind::LParen
                    }
                    '*' => {
                        if self.eat(')') {
                            self.errors.push(LexError::UnmatchedCommentClose { span: self.span() });
                            continue;
                        }
                        TokenKind::Star
                    }
                    '<' => {
                        if self.eat('-') {
                            TokenKind::Assign
                        } else if self.eat('=') {
                            TokenKind::Le
                        } else {
                            TokenKind::Lt
                        }
                    }
                    '=' => {
                        if self.eat('>') {
                            TokenKind::DArrow
                        } else {
                            TokenKind::Eq
                        }
                    }
                    '+' => TokenKind::Plus,
                    '/' => TokenKind::Slash,
                    '~' => TokenKind::Tilde,
                    '@' => TokenKind::At,
                    '.' => TokenKind::Dot,
                    ',' => TokenKind::Comma,
                    ':' => TokenKind::Colon,
                    ';' => TokenKind::Semicolon,
                    ')' => TokenKind::RParen,
                    '{' => TokenKind::LBrace,
                    '}' => TokenKind::RBrace,
                    c => {
                        self.errors.push(LexError::InvalidCharacter {
                            ch: c,
                            span: self.span(),
                        });
                        continue;
                    }
                };
                return Some(self.make_token(kind));
            }
        }

        fn skip_whitespace(&mut self) {
            while let Some(c) = self.peek() {
                if c.is_whitespace() {
                    self.advance();
                } else {
                    break;
                }
            }
        }

        fn skip_line_comment(&mut self) {
            while let Some(c) = self.peek() {
                if c == '\n' {
                    break;
                }
                self.advance();
            }
        }

        /// Skip a `(* ... *)` comment; the opening delimiter is consumed.
        fn skip_block_comment(&mut self) {
            let mut depth = 1usize;
            while depth > 0 {
                match self.advance() {
                    Some('(') if self.eat('*') => depth += 1,
                    Some('*') if self.eat(')') => depth -= 1,
                    Some(_) => {}
                    None => {
                        self.errors.push(LexError::UnterminatedComment { span: self.span() });
                        return;
                    }
                }
            }
        }

        fn scan_identifier(
            &mut self,
            first_char: char,
        ) -> TokenKind {
            let mut value = String::new();
            value.push(first_char);

            while let Some(c) = self.peek() {
                if c.is_ascii_alphanumeric() || c == '_' {
                    value.push(c);
                    self.advance();
                } else {
                    break;
                }
            }

            if let Some(kind) = TokenKind::keyword(&value) {
                kind
            } else if first_char.is_ascii_uppercase() {
                TokenKind::TypeId(value)
            } else {
                TokenKind::ObjectId(value)
            }
        }

        fn scan_number(
            &mut self,
            first_char: char,
        ) -> Option<TokenKind> {
            let mut value = String::new();
            value.push(first_char);

            while let Some(c) = self.peek() {
                if c.is_ascii_digit() {
                    value.push(c);
                    self.advance();
                } else {
                    break;
                }
            }

            match value.parse::<i64>() {
                Ok(n) => Some(TokenKind::IntLiteral(n)),
                Err(_) => {
                    self.errors.push(LexError::IntegerOutOfRange {
                        literal: value,
                        span: self.span(),
                    });
                    None
                }
            }
        }

        /// Scan a string literal; the opening quote is consumed.
        fn scan_string(&mut self) -> Option<TokenKind> {
            let mut value = String::new();
            loop {
                match self.advance() {
                    Some('"') => return Some(TokenKind::StringLiteral(value)),
                    Some('\n') => {
                        // Scanning resumes on the next line.
                        self.errors.push(LexError::NewlineInString { span: self.span() });
                        return None;
                    }
                    Some('\\') => match self.advance() {
                        Some('n') => value.push('\n'),
                        Some('t') => value.push('\t'),
                        Some('b') => value.push('\u{8}'),
                        Some('f') => value.push('\u{c}'),
                        Some(c) => value.push(c),
                        None => break,
                    },
                    Some(c) => value.push(c),
                    None => break,
                }
            }
            self.errors.push(LexError::UnterminatedString { span: self.span() });
            None
        }
    }
}

#[cfg(test)]
mod tests;
