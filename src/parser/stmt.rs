use crate::{
    ast::{
        ast::{Expr, Stmt},
        statements::{BlockStmt, DeclKind, ExpressionStmt, ReturnStmt, VarDeclStmt},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::{parser::Parser, types::parse_type_annotation};

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    if let Some(stmt_fn) = parser.get_stmt_lookup().get(&parser.current_token_kind()).copied() {
        return stmt_fn(parser);
    }

    let position = parser.get_position();
    let expr = parse_expr(parser, BindingPower::Default)?;

    // A function statement ends at its closing brace
    if let Expr::Function(_) = expr {
        if parser.current_token_kind() == TokenKind::Semicolon {
            parser.advance();
        }
    } else {
        parser.expect_terminator()?;
    }

    Ok(Stmt::Expression(ExpressionStmt {
        expression: expr,
        position,
    }))
}

pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start_token = parser.advance();
    let kind = match start_token.kind {
        TokenKind::Const => DeclKind::Const,
        TokenKind::Var => DeclKind::Var,
        _ => DeclKind::Let,
    };

    let identifier = parser.expect(TokenKind::Identifier)?.value;

    let explicit_type = if parser.current_token_kind() == TokenKind::Colon {
        parser.advance();
        Some(parse_type_annotation(parser)?)
    } else {
        None
    };

    let assigned_value = if parser.current_token_kind() == TokenKind::Assignment {
        parser.advance();
        Some(parse_expr(parser, BindingPower::Default)?)
    } else {
        None
    };

    if kind == DeclKind::Const && assigned_value.is_none() {
        return Err(Error::new(
            ErrorImpl::MissingInitializer {
                variable: identifier,
            },
            start_token.position,
        ));
    }

    parser.expect_terminator()?;

    Ok(Stmt::VarDecl(VarDeclStmt {
        kind,
        identifier,
        assigned_value,
        explicit_type,
        position: start_token.position,
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().position;

    let ends_here = matches!(
        parser.current_token_kind(),
        TokenKind::Semicolon | TokenKind::CloseCurly | TokenKind::EOF
    ) || parser.on_new_line();

    let value = if ends_here {
        None
    } else {
        Some(parse_expr(parser, BindingPower::Default)?)
    };

    parser.expect_terminator()?;

    Ok(Stmt::Return(ReturnStmt {
        value,
        position: start,
    }))
}

pub fn parse_block_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    Ok(Stmt::Block(parse_block(parser)?))
}

/// Parses `{ ... }`. Failed statements inside the block are recorded and
/// skipped; only a missing brace fails the block itself.
pub fn parse_block(parser: &mut Parser) -> Result<BlockStmt, Error> {
    let start = parser.expect(TokenKind::OpenCurly)?.position;

    let mut statements = Vec::new();
    while !matches!(
        parser.current_token_kind(),
        TokenKind::CloseCurly | TokenKind::EOF
    ) {
        match parse_stmt(parser) {
            Ok(stmt) => statements.push(stmt),
            Err(error) => parser.recover(error),
        }
    }

    parser.expect(TokenKind::CloseCurly)?;

    Ok(BlockStmt {
        body: statements,
        position: start,
    })
}
