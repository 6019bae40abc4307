//! Abstract Syntax Tree types
//!
//! Every expression carries a `ty` slot that the type checker fills in.

use crate::frontend::typecheck::types::Type;
use crate::util::span::Span;
use crate::util::Spanned;

pub const OBJECT: &str = "Object";
pub const IO: &str = "IO";
pub const INT: &str = "Int";
pub const STRING: &str = "String";
pub const BOOL: &str = "Bool";
pub const SELF_TYPE: &str = "SELF_TYPE";
pub const SELF: &str = "self";
pub const MAIN_CLASS: &str = "Main";
pub const MAIN_METHOD: &str = "main";

/// Basic classes carry primitive values and cannot be inherited
pub fn is_basic_class(name: &str) -> bool {
    matches!(name, INT | STRING | BOOL)
}

/// Identifier with its location
pub type Ident = Spanned<String>;

/// Whole program: built-in classes first, then user classes in source order
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub classes: Vec<ClassDef>,
    pub span: Span,
}

/// Class definition
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDef {
    pub name: Ident,
    /// Defaults to `Object` when `inherits` is omitted; `None` only for
    /// `Object` itself
    pub parent: Option<Ident>,
    pub features: Vec<Feature>,
    /// Built-in classes have native method bodies
    pub builtin: bool,
    pub span: Span,
}

/// Class feature
#[derive(Debug, Clone, PartialEq)]
pub enum Feature {
    Method(MethodDef),
    Attr(AttrDef),
}

impl Feature {
    pub fn name(&self) -> &Ident {
        match self {
            Feature::Method(m) => &m.name,
            Feature::Attr(a) => &a.name,
        }
    }
}

/// Method definition
#[derive(Debug, Clone, PartialEq)]
pub struct MethodDef {
    pub name: Ident,
    pub formals: Vec<Formal>,
    pub return_type: Ident,
    pub body: Expr,
    pub span: Span,
}

/// Formal parameter
#[derive(Debug, Clone, PartialEq)]
pub struct Formal {
    pub name: Ident,
    pub type_name: Ident,
}

/// Attribute definition
#[derive(Debug, Clone, PartialEq)]
pub struct AttrDef {
    pub name: Ident,
    pub type_name: Ident,
    pub init: Option<Expr>,
    pub span: Span,
}

/// Expression
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
    /// Static type, set by the type checker
    pub ty: Type,
}

impl Expr {
    pub fn new(
        kind: ExprKind,
        span: Span,
    ) -> Self {
        Self {
            kind,
            span,
            ty: Type::None,
        }
    }

    /// Body of a built-in method
    pub fn empty() -> Self {
        Self::new(ExprKind::NoExpr, Span::dummy())
    }
}

/// Expression kind
#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    /// `id <- expr`
    Assign { name: Ident, value: Box<Expr> },
    /// `id(args)`, dispatched on `self`
    Dispatch { method: Ident, args: Vec<Expr> },
    /// `expr[@T].id(args)`
    StaticDispatch {
        receiver: Box<Expr>,
        type_name: Option<Ident>,
        method: Ident,
        args: Vec<Expr>,
    },
    If {
        cond: Box<Expr>,
        then_branch: Box<Expr>,
        else_branch: Box<Expr>,
    },
    While { cond: Box<Expr>, body: Box<Expr> },
    Block(Vec<Expr>),
    Let {
        bindings: Vec<LetBinding>,
        body: Box<Expr>,
    },
    Case {
        scrutinee: Box<Expr>,
        branches: Vec<CaseBranch>,
    },
    New(Ident),
    IsVoid(Box<Expr>),
    Binary {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Unary { op: UnOp, operand: Box<Expr> },
    Id(String),
    Int(i64),
    Str(String),
    Bool(bool),
    /// Placeholder body of built-in methods
    NoExpr,
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Lt,
    Le,
    Eq,
}

impl BinOp {
    pub fn is_arithmetic(self) -> bool {
        matches!(self, BinOp::Add | BinOp::Sub | BinOp::Mul | BinOp::Div)
    }

    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Lt => "<",
            BinOp::Le => "<=",
            BinOp::Eq => "=",
        }
    }
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnOp {
    /// `~`
    Neg,
    /// `not`
    Not,
}

/// One `id : T [<- init]` binding of a `let`
#[derive(Debug, Clone, PartialEq)]
pub struct LetBinding {
    pub name: Ident,
    pub type_name: Ident,
    pub init: Option<Expr>,
}

/// One `id : T => expr;` branch of a `case`
#[derive(Debug, Clone, PartialEq)]
pub struct CaseBranch {
    pub name: Ident,
    pub type_name: Ident,
    pub body: Expr,
    pub span: Span,
}
