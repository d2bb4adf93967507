use sage_session::span::Span;

use crate::Node;

#[derive(Node!)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

/// The closed set of token kinds. `Identifier` and `Integer` carry the
/// literal text they matched; numeric conversion of integer literals is the
/// parser's job.
#[derive(Node!)]
pub enum TokenKind {
    Function,
    Return,
    I64,

    Identifier(String),
    Integer(String),

    Add,
    Minus,
    Multiply,
    Divide,

    Semicolon,
    Colon,
    Equals,

    LParen,
    RParen,
    LBrace,
    RBrace,

    /// A character the lexer doesn't recognize. Not a lexer error; the
    /// parser rejects it when it gets there.
    Illegal(char),

    Eof,
}

impl TokenKind {
    pub fn token_name(&self) -> &'static str {
        match self {
            TokenKind::Function => "keyword `fn`",
            TokenKind::Return => "keyword `return`",
            TokenKind::I64 => "keyword `i64`",
            TokenKind::Identifier(_) => "identifier",
            TokenKind::Integer(_) => "integer",
            TokenKind::Add => "`+`",
            TokenKind::Minus => "`-`",
            TokenKind::Multiply => "`*`",
            TokenKind::Divide => "`/`",
            TokenKind::Semicolon => "`;`",
            TokenKind::Colon => "`:`",
            TokenKind::Equals => "`=`",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::LBrace => "`{`",
            TokenKind::RBrace => "`}`",
            TokenKind::Illegal(_) => "unrecognized character",
            TokenKind::Eof => "end of input",
        }
    }
}
