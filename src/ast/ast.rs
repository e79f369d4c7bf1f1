use std::fmt::Display;

use crate::Position;

use super::{
    expressions::{
        BinaryExpr, CallExpr, ConsoleLogExpr, FunctionExpr, MemberExpr, NumberExpr, PrefixExpr,
        StringExpr, SymbolExpr,
    },
    statements::{BlockStmt, ExpressionStmt, ReturnStmt, VarDeclStmt},
};

/// The root of a parsed source file: its top-level statements in order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub body: Vec<Stmt>,
}

impl Program {
    pub fn iter(&self) -> std::slice::Iter<'_, Stmt> {
        self.body.iter()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Expression(ExpressionStmt),
    Block(BlockStmt),
    VarDecl(VarDeclStmt),
    Return(ReturnStmt),
}

impl Stmt {
    pub fn get_position(&self) -> &Position {
        match self {
            Stmt::Expression(stmt) => &stmt.position,
            Stmt::Block(stmt) => &stmt.position,
            Stmt::VarDecl(stmt) => &stmt.position,
            Stmt::Return(stmt) => &stmt.position,
        }
    }
}

/// Expression Types
///
/// Defines the various kinds of expressions in the AST.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ExprType {
    Number,
    String,
    Symbol,
    Function,
    Prefix,
    Binary,
    Call,
    Member,
    ConsoleLog,
}

impl Display for ExprType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ExprType::Number => "NumberExpr",
            ExprType::String => "StringExpr",
            ExprType::Symbol => "SymbolExpr",
            ExprType::Function => "FunctionExpr",
            ExprType::Prefix => "PrefixExpr",
            ExprType::Binary => "BinaryExpr",
            ExprType::Call => "CallExpr",
            ExprType::Member => "MemberExpr",
            ExprType::ConsoleLog => "ConsoleLogExpr",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(NumberExpr),
    String(StringExpr),
    Symbol(SymbolExpr),
    Function(FunctionExpr),
    Prefix(PrefixExpr),
    Binary(BinaryExpr),
    Call(CallExpr),
    Member(MemberExpr),
    ConsoleLog(ConsoleLogExpr),
}

impl Expr {
    pub fn get_expr_type(&self) -> ExprType {
        match self {
            Expr::Number(_) => ExprType::Number,
            Expr::String(_) => ExprType::String,
            Expr::Symbol(_) => ExprType::Symbol,
            Expr::Function(_) => ExprType::Function,
            Expr::Prefix(_) => ExprType::Prefix,
            Expr::Binary(_) => ExprType::Binary,
            Expr::Call(_) => ExprType::Call,
            Expr::Member(_) => ExprType::Member,
            Expr::ConsoleLog(_) => ExprType::ConsoleLog,
        }
    }

    pub fn get_position(&self) -> &Position {
        match self {
            Expr::Number(expr) => &expr.position,
            Expr::String(expr) => &expr.position,
            Expr::Symbol(expr) => &expr.position,
            Expr::Function(expr) => &expr.position,
            Expr::Prefix(expr) => &expr.position,
            Expr::Binary(expr) => &expr.position,
            Expr::Call(expr) => &expr.position,
            Expr::Member(expr) => &expr.position,
            Expr::ConsoleLog(expr) => &expr.position,
        }
    }
}
