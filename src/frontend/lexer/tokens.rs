//! Token types

use crate::util::span::Span;
use std::fmt;

/// Token kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    // Keywords
    KwClass,
    KwElse,
    KwFi,
    KwIf,
    KwIn,
    KwInherits,
    KwIsvoid,
    KwLet,
    KwLoop,
    KwPool,
    KwThen,
    KwWhile,
    KwCase,
    KwEsac,
    KwNew,
    KwOf,
    KwNot,

    // Identifiers
    TypeId(String),
    ObjectId(String),

    // Literals
    IntLiteral(i64),
    StringLiteral(String),
    BoolLiteral(bool),

    // Operators
    Assign,
    DArrow,
    Le,
    Lt,
    Eq,
    Plus,
    Minus,
    Star,
    Slash,
    Tilde,
    At,
    Dot,

    // Delimiters
    Comma,
    Colon,
    Semicolon,
    LParen,
    RParen,
    LBrace,
    RBrace,

    // Special
    Eof,
}

impl TokenKind {
    /// Keyword for an identifier, ignoring case.
    ///
    /// `true` and `false` must begin with a lowercase letter.
    pub fn keyword(ident: &str) -> Option<TokenKind> {
        let lower = ident.to_ascii_lowercase();
        let kind = match lower.as_str() {
            "class" => TokenKind::KwClass,
            "else" => TokenKind::KwElse,
            "fi" => TokenKind::KwFi,
            "if" => TokenKind::KwIf,
            "in" => TokenKind::KwIn,
            "inherits" => TokenKind::KwInherits,
            "isvoid" => TokenKind::KwIsvoid,
            "let" => TokenKind::KwLet,
            "loop" => TokenKind::KwLoop,
            "pool" => TokenKind::KwPool,
            "then" => TokenKind::KwThen,
            "while" => TokenKind::KwWhile,
            "case" => TokenKind::KwCase,
            "esac" => TokenKind::KwEsac,
            "new" => TokenKind::KwNew,
            "of" => TokenKind::KwOf,
            "not" => TokenKind::KwNot,
            "true" | "false" if ident.starts_with(|c: char| c.is_ascii_lowercase()) => {
                TokenKind::BoolLiteral(lower == "true")
            }
            _ => return None,
        };
        Some(kind)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let text = match self {
            TokenKind::KwClass => "'class'",
            TokenKind::KwElse => "'else'",
            TokenKind::KwFi => "'fi'",
            TokenKind::KwIf => "'if'",
            TokenKind::KwIn => "'in'",
            TokenKind::KwInherits => "'inherits'",
            TokenKind::KwIsvoid => "'isvoid'",
            TokenKind::KwLet => "'let'",
            TokenKind::KwLoop => "'loop'",
            TokenKind::KwPool => "'pool'",
            TokenKind::KwThen => "'then'",
            TokenKind::KwWhile => "'while'",
            TokenKind::KwCase => "'case'",
            TokenKind::KwEsac => "'esac'",
            TokenKind::KwNew => "'new'",
            TokenKind::KwOf => "'of'",
            TokenKind::KwNot => "'not'",
            TokenKind::TypeId(name) => return write!(f, "type '{}'", name),
            TokenKind::ObjectId(name) => return write!(f, "identifier '{}'", name),
            TokenKind::IntLiteral(n) => return write!(f, "integer {}", n),
            TokenKind::StringLiteral(_) => "string literal",
            TokenKind::BoolLiteral(b) => return write!(f, "'{}'", b),
            TokenKind::Assign => "'<-'",
            TokenKind::DArrow => "'=>'",
            TokenKind::Le => "'<='",
            TokenKind::Lt => "'<'",
            TokenKind::Eq => "'='",
            TokenKind::Plus => "'+'",
            TokenKind::Minus => "'-'",
            TokenKind::Star => "'*'",
            TokenKind::Slash => "'/'",
            TokenKind::Tilde => "'~'",
            TokenKind::At => "'@'",
            TokenKind::Dot => "'.'",
            TokenKind::Comma => "','",
            TokenKind::Colon => "':'",
            TokenKind::Semicolon => "';'",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::LBrace => "'{'",
            TokenKind::RBrace => "'}'",
            TokenKind::Eof => "end of input",
        };
        f.write_str(text)
    }
}

/// Token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(
        kind: TokenKind,
        span: Span,
    ) -> Self {
        Self { kind, span }
    }
}

impl From<TokenKind> for Token {
    fn from(kind: TokenKind) -> Self {
        Token {
            kind,
            span: Span::dummy(),
        }
    }
}
