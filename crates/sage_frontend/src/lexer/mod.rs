#[cfg(test)]
mod tests;

use std::str::Chars;

use sage_session::span::Span;

use crate::token::{Token, TokenKind};

/// A pull-based lexer over a source string.
///
/// [`next_token`](Lexer::next_token) is total: once the input is exhausted it
/// returns `Eof` tokens forever. The [`Iterator`] impl yields the `Eof` token
/// exactly once and then stops, so driving the lexer to exhaustion produces a
/// finite sequence in source order.
pub struct Lexer<'src> {
    all: &'src str,
    chars: Chars<'src>,

    token_start: usize,
    reached_eof: bool,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            all: source,
            chars: source.chars(),

            token_start: 0,
            reached_eof: false,
        }
    }

    pub fn next_token(&mut self) -> Token {
        loop {
            self.token_start = self.byte_pos();

            let Some(ch) = self.chars.next() else {
                self.reached_eof = true;
                return self.token(TokenKind::Eof);
            };

            let kind = match ch {
                ch if ch.is_whitespace() => continue,

                ';' => TokenKind::Semicolon,
                ':' => TokenKind::Colon,
                '=' => TokenKind::Equals,

                '(' => TokenKind::LParen,
                ')' => TokenKind::RParen,
                '{' => TokenKind::LBrace,
                '}' => TokenKind::RBrace,

                '+' => TokenKind::Add,
                '-' => TokenKind::Minus,
                '*' => TokenKind::Multiply,
                '/' => TokenKind::Divide,

                '0'..='9' => self.lex_integer(),

                ch if is_ident_char(ch) => self.lex_alpha(),

                ch => TokenKind::Illegal(ch),
            };

            return self.token(kind);
        }
    }

    fn lex_integer(&mut self) -> TokenKind {
        while matches!(self.peek(), Some('0'..='9')) {
            self.chars.next();
        }

        let literal = &self.all[self.token_start..self.byte_pos()];
        TokenKind::Integer(literal.to_owned())
    }

    fn lex_alpha(&mut self) -> TokenKind {
        while matches!(self.peek(), Some(ch) if is_ident_char(ch)) {
            self.chars.next();
        }

        let s = &self.all[self.token_start..self.byte_pos()];

        match s {
            "fn" => TokenKind::Function,
            "i64" => TokenKind::I64,
            "return" => TokenKind::Return,
            _ => TokenKind::Identifier(s.to_owned()),
        }
    }

    fn token(&self, kind: TokenKind) -> Token {
        Token {
            kind,
            span: Span::new(self.token_start, self.byte_pos()),
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.clone().next()
    }

    fn byte_pos(&self) -> usize {
        self.all.len() - self.chars.as_str().len()
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if self.reached_eof {
            return None;
        }
        Some(self.next_token())
    }
}

fn is_ident_char(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_'
}
