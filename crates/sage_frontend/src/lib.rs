//! The sage frontend: lexing and parsing.
//!
//! The lexer is total over its input; anything it doesn't recognize becomes
//! an [`Illegal`](token::TokenKind::Illegal) token for the parser to trip
//! over. The parser stops at the first syntax error and returns it; there is
//! no recovery, so a malformed construct invalidates the whole translation
//! unit.

#[macro_use]
extern crate macro_rules_attribute;

mod lexer;
mod parser;

pub mod ast;
pub mod symbols;
pub mod token;

pub use lexer::Lexer;
pub use parser::{ParseError, ParseErrorKind, ParseResult, Parser};

use ast::Program;
use token::Token;

derive_alias! {
    #[derive(Node!)] = #[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)];
    #[derive(NodeCopy!)] = #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)];
}

/// Lex `source` to exhaustion, producing the full token sequence terminated
/// by an `Eof` token.
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}

/// Parse a token sequence into a [`Program`], stopping at the first syntax
/// error.
pub fn parse(tokens: impl IntoIterator<Item = Token>) -> Result<Program, ParseError> {
    Parser::new(tokens.into_iter()).parse()
}
