use crate::{lexer::tokens::TokenKind, Position};

use super::{
    ast::Expr,
    statements::{BlockStmt, TypeAnnotation},
};

// LITERALS

/// Number Expression
/// The digits exactly as written. Literals are never evaluated, so there is
/// no width limit.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberExpr {
    pub literal: String,
    pub position: Position,
}

/// String Expression
/// `value` is the text between the quotes, exactly as written.
#[derive(Debug, Clone, PartialEq)]
pub struct StringExpr {
    pub value: String,
    pub position: Position,
}

/// Symbol Expression
/// A reference to a named binding.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolExpr {
    pub value: String,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub explicit_type: Option<TypeAnnotation>,
}

/// Function Expression
/// `function name(a: T, b) : R { ... }` with the name and annotations optional.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionExpr {
    pub name: Option<String>,
    pub parameters: Vec<Parameter>,
    pub return_type: Option<TypeAnnotation>,
    pub body: BlockStmt,
    pub position: Position,
}

// OPERATORS

#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpr {
    pub operator: TokenKind,
    pub right_expr: Box<Expr>,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: TokenKind,
    pub right: Box<Expr>,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: Box<Expr>,
    pub arguments: Vec<Expr>,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MemberExpr {
    pub object: Box<Expr>,
    pub property: String,
    pub position: Position,
}

/// `console.log(...)`, which the lexer reserves both halves of.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleLogExpr {
    pub arguments: Vec<Expr>,
    pub position: Position,
}
