use sage_session::span::Span;

use crate::{Node, NodeCopy};

#[derive(Node!)]
pub struct Program {
    pub functions: Vec<FuncDecl>,
}

#[derive(Node!)]
pub struct FuncDecl {
    pub name: String,
    pub ret_ty: Type,
    pub body: Vec<Stmt>,
}

#[derive(NodeCopy!)]
pub enum Type {
    I64,
    /// The absence-of-value type, the return type of a function declared
    /// without a `: i64` clause.
    None,
}

#[derive(Node!)]
pub enum Stmt {
    Return(Expr),

    /// Parsed but not yet lowered by the code generator.
    Assign {
        name: String,
        ty: Type,
        value: Expr,
    },
}

#[derive(Node!)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Self { kind, span }
    }
}

#[derive(Node!)]
pub enum ExprKind {
    Integer(i64),

    BinOp {
        op: BinOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

#[derive(NodeCopy!)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}
