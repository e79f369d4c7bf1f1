use std::{fmt::Display, slice::Iter};

use crate::Position;

use super::ast::{Expr, Stmt};

#[derive(Debug, Clone, PartialEq)]
pub struct BlockStmt {
    pub body: Vec<Stmt>,
    pub position: Position,
}

impl BlockStmt {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.body.iter()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    pub expression: Expr,
    pub position: Position,
}

/// The keyword a variable was declared with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKind {
    Let,
    Const,
    Var,
}

impl Display for DeclKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeclKind::Let => write!(f, "let"),
            DeclKind::Const => write!(f, "const"),
            DeclKind::Var => write!(f, "var"),
        }
    }
}

/// A written type annotation such as the `number` in `let x: number`.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeAnnotation {
    pub name: String,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclStmt {
    pub kind: DeclKind,
    pub identifier: String,
    pub assigned_value: Option<Expr>,
    pub explicit_type: Option<TypeAnnotation>,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub value: Option<Expr>,
    pub position: Position,
}
