use sage_session::span::Span;

use super::Lexer;
use crate::token::TokenKind;

fn lex_kinds(source: &str) -> Vec<TokenKind> {
    Lexer::new(source).map(|t| t.kind).collect()
}

fn ident(s: &str) -> TokenKind {
    TokenKind::Identifier(s.to_owned())
}

fn integer(s: &str) -> TokenKind {
    TokenKind::Integer(s.to_owned())
}

#[test]
fn full_program() {
    assert_eq!(
        lex_kinds("fn main(): i64 { return 42; }"),
        vec![
            TokenKind::Function,
            ident("main"),
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::Colon,
            TokenKind::I64,
            TokenKind::LBrace,
            TokenKind::Return,
            integer("42"),
            TokenKind::Semicolon,
            TokenKind::RBrace,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn newlines() {
    assert_eq!(
        lex_kinds("\nfn\nmain\n(\n)\n{\nreturn\n0\n;\n}"),
        vec![
            TokenKind::Function,
            ident("main"),
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::LBrace,
            TokenKind::Return,
            integer("0"),
            TokenKind::Semicolon,
            TokenKind::RBrace,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn no_whitespace() {
    assert_eq!(
        lex_kinds("fn main(){return 0;}"),
        lex_kinds("  fn  main  (  )  {  return  0  ;  }"),
    );
}

#[test]
fn operators() {
    assert_eq!(
        lex_kinds("1 + 2 - 3 * 4 / 5"),
        vec![
            integer("1"),
            TokenKind::Add,
            integer("2"),
            TokenKind::Minus,
            integer("3"),
            TokenKind::Multiply,
            integer("4"),
            TokenKind::Divide,
            integer("5"),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn keywords_vs_identifiers() {
    assert_eq!(
        lex_kinds("fn i64 return foo returning _bar"),
        vec![
            TokenKind::Function,
            TokenKind::I64,
            TokenKind::Return,
            ident("foo"),
            ident("returning"),
            ident("_bar"),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn digits_end_identifiers() {
    // digits aren't identifier characters, so `return0` is two tokens
    assert_eq!(
        lex_kinds("return0"),
        vec![TokenKind::Return, integer("0"), TokenKind::Eof]
    );
}

#[test]
fn maximal_digit_run() {
    assert_eq!(
        lex_kinds("123abc"),
        vec![integer("123"), ident("abc"), TokenKind::Eof]
    );
}

#[test]
fn illegal_characters() {
    assert_eq!(
        lex_kinds("1 @ 2"),
        vec![
            integer("1"),
            TokenKind::Illegal('@'),
            integer("2"),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn empty_input() {
    assert_eq!(lex_kinds(""), vec![TokenKind::Eof]);
}

#[test]
fn spans() {
    let tokens: Vec<_> = Lexer::new("return 42;").collect();
    let spans: Vec<_> = tokens.iter().map(|t| t.span).collect();
    assert_eq!(
        spans,
        vec![
            Span::new(0, 6),
            Span::new(7, 9),
            Span::new(9, 10),
            Span::new(10, 10),
        ]
    );
}

#[test]
fn total_after_exhaustion() {
    let mut lexer = Lexer::new(";");
    assert_eq!(lexer.next_token().kind, TokenKind::Semicolon);
    assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    assert_eq!(lexer.next_token().kind, TokenKind::Eof);
}

#[test]
fn iterator_is_finite() {
    let mut lexer = Lexer::new(";");
    assert_eq!(lexer.next().map(|t| t.kind), Some(TokenKind::Semicolon));
    assert_eq!(lexer.next().map(|t| t.kind), Some(TokenKind::Eof));
    assert_eq!(lexer.next(), None);
}
