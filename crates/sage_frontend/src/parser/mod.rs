
mod expr;

use std::mem;

use sage_session::span::Span;

use crate::ast::*;
use crate::token::{Token, TokenKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.kind.fmt(f)
    }
}

impl std::error::Error for ParseError {}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    #[error("expected {expected}, found {found}")]
    Expected {
        expected: String,
        found: &'static str,
    },

    #[error("integer literal `{0}` does not fit in an i64")]
    IntegerOutOfRange(String),
}

pub type ParseResult<T> = Result<T, ParseError>;

/// A recursive-descent parser with a two-token window (`current` and one
/// token of lookahead).
///
/// Every production returns a [`ParseResult`]; the first mismatch aborts the
/// whole parse. There is deliberately no recovery or resynchronization.
pub struct Parser<I: Iterator<Item = Token>> {
    tokens: I,
    current: Token,
    next: Token,
}

impl<I: Iterator<Item = Token>> Parser<I> {
    pub fn new(mut tokens: I) -> Self {
        let current = next_or_eof(&mut tokens, 0);
        let end = current.span.end;
        let next = next_or_eof(&mut tokens, end);

        Self {
            tokens,
            current,
            next,
        }
    }

    pub fn parse(mut self) -> ParseResult<Program> {
        let mut functions = vec![];

        while self.current.kind != TokenKind::Eof {
            functions.push(self.parse_func_decl()?);
        }

        Ok(Program { functions })
    }

    fn parse_func_decl(&mut self) -> ParseResult<FuncDecl> {
        self.expect(TokenKind::Function)?;
        let name = self.parse_ident()?;

        self.expect(TokenKind::LParen)?;
        self.expect(TokenKind::RParen)?;

        let ret_ty = if self.eat(TokenKind::Colon) {
            self.expect(TokenKind::I64)?;
            Type::I64
        } else {
            Type::None
        };

        self.expect(TokenKind::LBrace)?;

        let mut body = vec![];
        while !matches!(self.current.kind, TokenKind::RBrace | TokenKind::Eof) {
            body.push(self.parse_statement()?);
        }

        self.expect(TokenKind::RBrace)?;

        Ok(FuncDecl { name, ret_ty, body })
    }

    fn parse_statement(&mut self) -> ParseResult<Stmt> {
        match self.current.kind {
            TokenKind::Return => {
                let ret = self.advance();

                // `return;` means "return the zero value"
                let value = if self.current.kind == TokenKind::Semicolon {
                    Expr::new(ExprKind::Integer(0), ret.span)
                } else {
                    self.parse_expr()?
                };

                self.expect(TokenKind::Semicolon)?;
                Ok(Stmt::Return(value))
            }

            TokenKind::Identifier(_) => {
                let name = self.parse_ident()?;
                self.expect(TokenKind::Colon)?;

                let ty = if self.eat(TokenKind::I64) {
                    Type::I64
                } else {
                    Type::None
                };

                self.expect(TokenKind::Equals)?;
                let value = self.parse_expr()?;
                self.expect(TokenKind::Semicolon)?;

                Ok(Stmt::Assign { name, ty, value })
            }

            _ => Err(self.error_expected("a statement")),
        }
    }

    fn parse_ident(&mut self) -> ParseResult<String> {
        if let TokenKind::Identifier(name) = &self.current.kind {
            let name = name.clone();
            self.advance();
            Ok(name)
        } else {
            Err(self.error_expected("an identifier"))
        }
    }

    /// Advance and return the current token if it has the expected kind,
    /// otherwise fail the parse.
    fn expect(&mut self, kind: TokenKind) -> ParseResult<Token> {
        if mem::discriminant(&self.current.kind) == mem::discriminant(&kind) {
            Ok(self.advance())
        } else {
            Err(self.error_expected(kind.token_name()))
        }
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        if mem::discriminant(&self.current.kind) == mem::discriminant(&kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn advance(&mut self) -> Token {
        let pulled = next_or_eof(&mut self.tokens, self.next.span.end);
        let next = mem::replace(&mut self.next, pulled);
        mem::replace(&mut self.current, next)
    }

    fn error_expected(&self, expected: impl Into<String>) -> ParseError {
        ParseError {
            kind: ParseErrorKind::Expected {
                expected: expected.into(),
                found: self.current.kind.token_name(),
            },
            span: self.current.span,
        }
    }
}

/// A token source may stop after its `Eof` token; keep the window total by
/// synthesizing further `Eof` tokens at the end position.
fn next_or_eof(tokens: &mut impl Iterator<Item = Token>, end: usize) -> Token {
    tokens.next().unwrap_or(Token {
        kind: TokenKind::Eof,
        span: Span::empty(end),
    })
}
