//! Infix expression parsing (led - left denotation)

use super::super::lexer::tokens::*;
use super::ast::*;
use super::state::*;
use super::ParseError;

type InfixFn<'a> = fn(&mut ParserState<'a>, Expr, u8) -> Option<Expr>;

impl<'a> ParserState<'a> {
    /// Get infix binding powers and parser for current token
    #[inline]
    pub(crate) fn infix_info(&self) -> Option<(u8, u8, InfixFn<'a>)> {
        match self.current_kind()? {
            TokenKind::Lt | TokenKind::Le | TokenKind::Eq => {
                Some((BP_CMP, BP_CMP + 1, Self::parse_comparison))
            }
            TokenKind::Plus | TokenKind::Minus => Some((BP_ADD, BP_ADD + 1, Self::parse_binary)),
            TokenKind::Star | TokenKind::Slash => Some((BP_MUL, BP_MUL + 1, Self::parse_binary)),
            TokenKind::Dot | TokenKind::At => {
                Some((BP_DISPATCH, BP_DISPATCH + 1, Self::parse_dispatch))
            }
            _ => None,
        }
    }

    fn binary_op(&self) -> Option<BinOp> {
        match self.current_kind()? {
            TokenKind::Plus => Some(BinOp::Add),
            TokenKind::Minus => Some(BinOp::Sub),
            TokenKind::Star => Some(BinOp::Mul),
            TokenKind::Slash => Some(BinOp::Div),
            TokenKind::Lt => Some(BinOp::Lt),
            TokenKind::Le => Some(BinOp::Le),
            TokenKind::Eq => Some(BinOp::Eq),
            _ => None,
        }
    }

    /// Parse a left-associative arithmetic operator
    fn parse_binary(
        &mut self,
        lhs: Expr,
        right_bp: u8,
    ) -> Option<Expr> {
        let op = self.binary_op()?;
        self.bump();

        let rhs = self.parse_expression(right_bp)?;
        let span = lhs.span.to(rhs.span);

        Some(Expr::new(
            ExprKind::Binary {
                op,
                left: Box::new(lhs),
                right: Box::new(rhs),
            },
            span,
        ))
    }

    /// Parse `<`, `<=` or `=`; these do not chain
    fn parse_comparison(
        &mut self,
        lhs: Expr,
        right_bp: u8,
    ) -> Option<Expr> {
        let expr = self.parse_binary(lhs, right_bp)?;

        if let Some(op) = self.binary_op().filter(|op| !op.is_arithmetic()) {
            self.error(ParseError::NonAssociative {
                op: op.symbol().to_string(),
                span: self.span(),
            });
            return None;
        }
        Some(expr)
    }

    /// Parse `[@T].id(args)` after a receiver.
    ///
    /// `self.id(args)` without `@T` becomes a plain dispatch.
    fn parse_dispatch(
        &mut self,
        lhs: Expr,
        _right_bp: u8,
    ) -> Option<Expr> {
        let type_name = if self.skip(&TokenKind::At) {
            Some(self.expect_type_id()?)
        } else {
            None
        };
        self.expect(&TokenKind::Dot)?;
        let method = self.expect_object_id()?;
        let args = self.parse_args()?;
        let span = self.span_from(lhs.span);

        let is_self = matches!(&lhs.kind, ExprKind::Id(name) if name == SELF);
        let kind = if is_self && type_name.is_none() {
            ExprKind::Dispatch { method, args }
        } else {
            ExprKind::StaticDispatch {
                receiver: Box::new(lhs),
                type_name,
                method,
                args,
            }
        };
        Some(Expr::new(kind, span))
    }
}
