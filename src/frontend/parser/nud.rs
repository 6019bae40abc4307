//! Prefix expression parsing (nud - null denotation)

use super::super::lexer::tokens::*;
use super::ast::*;
use super::state::*;

impl<'a> ParserState<'a> {
    /// Get the prefix parser for the current token
    #[inline]
    pub(crate) fn prefix_info(&self) -> Option<fn(&mut Self) -> Option<Expr>> {
        match self.current_kind()? {
            TokenKind::KwNot | TokenKind::Tilde | TokenKind::KwIsvoid => Some(Self::parse_unary),
            TokenKind::IntLiteral(_) | TokenKind::StringLiteral(_) | TokenKind::BoolLiteral(_) => {
                Some(Self::parse_literal)
            }
            TokenKind::ObjectId(_) => Some(Self::parse_identifier),
            TokenKind::LParen => Some(Self::parse_group),
            TokenKind::LBrace => Some(Self::parse_block),
            TokenKind::KwIf => Some(Self::parse_if),
            TokenKind::KwWhile => Some(Self::parse_while),
            TokenKind::KwLet => Some(Self::parse_let),
            TokenKind::KwCase => Some(Self::parse_case),
            TokenKind::KwNew => Some(Self::parse_new),
            _ => None,
        }
    }

    /// `not e`, `~e`, `isvoid e`
    fn parse_unary(&mut self) -> Option<Expr> {
        let start = self.span();
        let kind = self.current_kind()?.clone();
        self.bump();

        let expr = match kind {
            TokenKind::KwNot => {
                let operand = self.parse_expression(BP_NOT)?;
                ExprKind::Unary {
                    op: UnOp::Not,
                    operand: Box::new(operand),
                }
            }
            TokenKind::Tilde => {
                let operand = self.parse_expression(BP_NEG)?;
                ExprKind::Unary {
                    op: UnOp::Neg,
                    operand: Box::new(operand),
                }
            }
            _ => {
                let operand = self.parse_expression(BP_ISVOID)?;
                ExprKind::IsVoid(Box::new(operand))
            }
        };
        Some(Expr::new(expr, self.span_from(start)))
    }

    fn parse_literal(&mut self) -> Option<Expr> {
        let span = self.span();
        let kind = match self.current_kind()? {
            TokenKind::IntLiteral(n) => ExprKind::Int(*n),
            TokenKind::StringLiteral(s) => ExprKind::Str(s.clone()),
            TokenKind::BoolLiteral(b) => ExprKind::Bool(*b),
            _ => return None,
        };
        self.bump();
        Some(Expr::new(kind, span))
    }

    /// `id`, `id <- expr` or `id(args)`
    fn parse_identifier(&mut self) -> Option<Expr> {
        let name = self.expect_object_id()?;
        let start = name.span;

        match self.current_kind() {
            Some(TokenKind::Assign) => {
                self.bump();
                let value = self.parse_expression(BP_LOWEST)?;
                Some(Expr::new(
                    ExprKind::Assign {
                        name,
                        value: Box::new(value),
                    },
                    self.span_from(start),
                ))
            }
            Some(TokenKind::LParen) => {
                let args = self.parse_args()?;
                Some(Expr::new(
                    ExprKind::Dispatch { method: name, args },
                    self.span_from(start),
                ))
            }
            _ => Some(Expr::new(ExprKind::Id(name.value), start)),
        }
    }

    /// `( expr )`
    fn parse_group(&mut self) -> Option<Expr> {
        self.bump();
        let expr = self.parse_expression(BP_LOWEST)?;
        self.expect(&TokenKind::RParen)?;
        Some(expr)
    }

    /// `{ [expr;]+ }`
    fn parse_block(&mut self) -> Option<Expr> {
        let start = self.span();
        self.bump();

        let mut exprs = Vec::new();
        loop {
            exprs.push(self.parse_expression(BP_LOWEST)?);
            self.expect(&TokenKind::Semicolon)?;
            if self.skip(&TokenKind::RBrace) {
                break;
            }
        }
        Some(Expr::new(ExprKind::Block(exprs), self.span_from(start)))
    }

    /// `if e then e else e fi`
    fn parse_if(&mut self) -> Option<Expr> {
        let start = self.span();
        self.bump();

        let cond = self.parse_expression(BP_LOWEST)?;
        self.expect(&TokenKind::KwThen)?;
        let then_branch = self.parse_expression(BP_LOWEST)?;
        self.expect(&TokenKind::KwElse)?;
        let else_branch = self.parse_expression(BP_LOWEST)?;
        self.expect(&TokenKind::KwFi)?;

        Some(Expr::new(
            ExprKind::If {
                cond: Box::new(cond),
                then_branch: Box::new(then_branch),
                else_branch: Box::new(else_branch),
            },
            self.span_from(start),
        ))
    }

    /// `while e loop e pool`
    fn parse_while(&mut self) -> Option<Expr> {
        let start = self.span();
        self.bump();

        let cond = self.parse_expression(BP_LOWEST)?;
        self.expect(&TokenKind::KwLoop)?;
        let body = self.parse_expression(BP_LOWEST)?;
        self.expect(&TokenKind::KwPool)?;

        Some(Expr::new(
            ExprKind::While {
                cond: Box::new(cond),
                body: Box::new(body),
            },
            self.span_from(start),
        ))
    }

    /// `let id : T [<- e] [, id : T [<- e]]* in e`
    fn parse_let(&mut self) -> Option<Expr> {
        let start = self.span();
        self.bump();

        let mut bindings = Vec::new();
        loop {
            let name = self.expect_object_id()?;
            self.expect(&TokenKind::Colon)?;
            let type_name = self.expect_type_id()?;
            let init = if self.skip(&TokenKind::Assign) {
                Some(self.parse_expression(BP_LOWEST)?)
            } else {
                None
            };
            bindings.push(LetBinding {
                name,
                type_name,
                init,
            });
            if !self.skip(&TokenKind::Comma) {
                break;
            }
        }
        self.expect(&TokenKind::KwIn)?;
        let body = self.parse_expression(BP_LOWEST)?;

        Some(Expr::new(
            ExprKind::Let {
                bindings,
                body: Box::new(body),
            },
            self.span_from(start),
        ))
    }

    /// `case e of [id : T => e;]+ esac`
    fn parse_case(&mut self) -> Option<Expr> {
        let start = self.span();
        self.bump();

        let scrutinee = self.parse_expression(BP_LOWEST)?;
        self.expect(&TokenKind::KwOf)?;

        let mut branches = Vec::new();
        loop {
            let name = self.expect_object_id()?;
            let branch_start = name.span;
            self.expect(&TokenKind::Colon)?;
            let type_name = self.expect_type_id()?;
            self.expect(&TokenKind::DArrow)?;
            let body = self.parse_expression(BP_LOWEST)?;
            self.expect(&TokenKind::Semicolon)?;
            branches.push(CaseBranch {
                name,
                type_name,
                body,
                span: self.span_from(branch_start),
            });
            if self.skip(&TokenKind::KwEsac) {
                break;
            }
        }

        Some(Expr::new(
            ExprKind::Case {
                scrutinee: Box::new(scrutinee),
                branches,
            },
            self.span_from(start),
        ))
    }

    /// `new T`
    fn parse_new(&mut self) -> Option<Expr> {
        let start = self.span();
        self.bump();
        let type_name = self.expect_type_id()?;
        Some(Expr::new(ExprKind::New(type_name), self.span_from(start)))
    }
}
