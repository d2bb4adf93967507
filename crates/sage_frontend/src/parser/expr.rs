use super::{ParseError, ParseErrorKind, ParseResult, Parser};
use crate::ast::{BinOp, Expr, ExprKind};
use crate::token::{Token, TokenKind};

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Prec {
    Lowest,
    Term,
    Factor,
}

fn binop_prec(binop: BinOp) -> Prec {
    match binop {
        BinOp::Add | BinOp::Sub => Prec::Term,
        BinOp::Mul | BinOp::Div => Prec::Factor,
    }
}

impl<I: Iterator<Item = Token>> Parser<I> {
    pub(super) fn parse_expr(&mut self) -> ParseResult<Expr> {
        self.parse_prec(Prec::Lowest)
    }

    // Strictly-greater precedence check makes every operator left-associative.
    fn parse_prec(&mut self, prec: Prec) -> ParseResult<Expr> {
        let mut expr = self.parse_primary()?;

        while let Some(op) = self.peek_bin_op(prec) {
            self.advance();

            let rhs = self.parse_prec(binop_prec(op))?;

            let span = expr.span.union(rhs.span);
            expr = Expr::new(
                ExprKind::BinOp {
                    op,
                    lhs: Box::new(expr),
                    rhs: Box::new(rhs),
                },
                span,
            );
        }

        Ok(expr)
    }

    fn parse_primary(&mut self) -> ParseResult<Expr> {
        match &self.current.kind {
            TokenKind::Integer(literal) => {
                let value: i64 = literal.parse().map_err(|_| ParseError {
                    kind: ParseErrorKind::IntegerOutOfRange(literal.clone()),
                    span: self.current.span,
                })?;

                let token = self.advance();
                Ok(Expr::new(ExprKind::Integer(value), token.span))
            }

            TokenKind::LParen => {
                self.advance();

                let expr = self.parse_expr()?;
                self.expect(TokenKind::RParen)?;

                Ok(expr)
            }

            _ => Err(self.error_expected("an expression")),
        }
    }

    fn peek_bin_op(&self, prec: Prec) -> Option<BinOp> {
        let op = match self.current.kind {
            TokenKind::Add => BinOp::Add,
            TokenKind::Minus => BinOp::Sub,
            TokenKind::Multiply => BinOp::Mul,
            TokenKind::Divide => BinOp::Div,

            _ => return None,
        };

        (binop_prec(op) > prec).then_some(op)
    }
}
