//! Pratt Parser expression parsing

use super::ast::*;
use super::state::*;

impl<'a> ParserState<'a> {
    /// Parse an expression using Pratt parser
    ///
    /// # Algorithm
    /// 1. Parse prefix expression (nud)
    /// 2. While next token is an infix operator with binding power >= `min_bp`,
    ///    parse the infix expression (led) with its right binding power
    /// 3. Return expression
    pub fn parse_expression(
        &mut self,
        min_bp: u8,
    ) -> Option<Expr> {
        let prefix_fn = match self.prefix_info() {
            Some(f) => f,
            None => {
                self.unexpected("expression");
                return None;
            }
        };

        let mut lhs = (prefix_fn)(self)?;

        loop {
            if self.at_end() {
                break;
            }

            let (left_bp, right_bp, infix_fn) = match self.infix_info() {
                Some(info) => info,
                None => break,
            };

            if left_bp < min_bp {
                break;
            }

            lhs = (infix_fn)(self, lhs, right_bp)?;
        }

        Some(lhs)
    }

    /// Parse `( [expr [, expr]*] )`
    pub(crate) fn parse_args(&mut self) -> Option<Vec<Expr>> {
        use super::super::lexer::tokens::TokenKind;

        self.expect(&TokenKind::LParen)?;
        let mut args = Vec::new();
        if self.skip(&TokenKind::RParen) {
            return Some(args);
        }
        loop {
            args.push(self.parse_expression(BP_LOWEST)?);
            if self.skip(&TokenKind::Comma) {
                continue;
            }
            self.expect(&TokenKind::RParen)?;
            return Some(args);
        }
    }
}
