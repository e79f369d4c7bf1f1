use crate::{
    ast::{
        ast::Expr,
        expressions::{
            BinaryExpr, CallExpr, ConsoleLogExpr, FunctionExpr, MemberExpr, NumberExpr,
            Parameter, PrefixExpr, StringExpr, SymbolExpr,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{TokenKind, RESERVED_LOOKUP},
};

use super::{
    lookups::BindingPower, parser::Parser, stmt::parse_block, types::parse_type_annotation,
};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud_fn) = parser.get_nud_lookup().get(&token_kind).copied() else {
        let token = parser.current_token();
        let error = if token_kind == TokenKind::Illegal {
            ErrorImpl::IllegalToken {
                token: token.value.clone(),
            }
        } else {
            ErrorImpl::NoPrefixParse {
                token: if token.is_eof() {
                    String::from("EOF")
                } else {
                    token.value.clone()
                },
            }
        };
        return Err(Error::new(error, token.position));
    };

    let mut left = nud_fn(parser)?;

    // While LED and current BP is less than BP of current token, continue parsing lhs
    loop {
        let token_kind = parser.current_token_kind();
        let token_bp = *parser
            .get_bp_lookup()
            .get(&token_kind)
            .unwrap_or(&BindingPower::Default);

        if token_bp <= bp {
            break;
        }

        let Some(led_fn) = parser.get_led_lookup().get(&token_kind).copied() else {
            break;
        };

        left = led_fn(parser, left, token_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.advance();

    match token.kind {
        TokenKind::Number => Ok(Expr::Number(NumberExpr {
            literal: token.value,
            position: token.position,
        })),
        TokenKind::Identifier => Ok(Expr::Symbol(SymbolExpr {
            value: token.value,
            position: token.position,
        })),
        TokenKind::String => Ok(Expr::String(StringExpr {
            value: token.value,
            position: token.position,
        })),
        _ => Err(Error::new(
            ErrorImpl::NoPrefixParse { token: token.value },
            token.position,
        )),
    }
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator_token = parser.advance();

    let right = parse_expr(parser, bp)?;

    Ok(Expr::Binary(BinaryExpr {
        position: *left.get_position(),
        left: Box::new(left),
        operator: operator_token.kind,
        right: Box::new(right),
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator_token = parser.advance();
    let rhs = parse_expr(parser, BindingPower::Unary)?;

    Ok(Expr::Prefix(PrefixExpr {
        operator: operator_token.kind,
        right_expr: Box::new(rhs),
        position: operator_token.position,
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(expr)
}

/// Parses `( arg, arg, ... )` starting at the opening parenthesis.
fn parse_arguments(parser: &mut Parser) -> Result<Vec<Expr>, Error> {
    parser.expect(TokenKind::OpenParen)?;

    let mut args = vec![];

    if parser.current_token_kind() == TokenKind::CloseParen {
        parser.advance();
        return Ok(args);
    }

    loop {
        args.push(parse_expr(parser, BindingPower::Default)?);

        if parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
        } else {
            parser.expect(TokenKind::CloseParen)?;
            return Ok(args);
        }
    }
}

pub fn parse_call_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    let arguments = parse_arguments(parser)?;

    Ok(Expr::Call(CallExpr {
        position: *left.get_position(),
        callee: Box::new(left),
        arguments,
    }))
}

pub fn parse_member_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    parser.advance();

    // Reserved words are valid property names
    let token = parser.current_token();
    if token.kind != TokenKind::Identifier && !RESERVED_LOOKUP.contains_key(token.value.as_str()) {
        return Err(parser.unexpected(TokenKind::Identifier));
    }
    let property = parser.advance().value;

    Ok(Expr::Member(MemberExpr {
        position: *left.get_position(),
        object: Box::new(left),
        property,
    }))
}

pub fn parse_function_expr(parser: &mut Parser) -> Result<Expr, Error> {
    // function name(a: number, b): string { ... }
    let start = parser.advance().position;

    let name = if parser.current_token_kind() == TokenKind::Identifier {
        Some(parser.advance().value)
    } else {
        None
    };

    parser.expect(TokenKind::OpenParen)?;

    let mut parameters = Vec::new();
    while parser.current_token_kind() != TokenKind::CloseParen {
        let name = parser.expect(TokenKind::Identifier)?.value;

        let explicit_type = if parser.current_token_kind() == TokenKind::Colon {
            parser.advance();
            Some(parse_type_annotation(parser)?)
        } else {
            None
        };

        parameters.push(Parameter {
            name,
            explicit_type,
        });

        if parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
        } else {
            break;
        }
    }

    parser.expect(TokenKind::CloseParen)?;

    let return_type = if parser.current_token_kind() == TokenKind::Colon {
        parser.advance();
        Some(parse_type_annotation(parser)?)
    } else {
        None
    };

    let body = parse_block(parser)?;

    Ok(Expr::Function(FunctionExpr {
        name,
        parameters,
        return_type,
        body,
        position: start,
    }))
}

pub fn parse_console_log_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.advance().position;

    parser.expect(TokenKind::Dot)?;
    parser.expect(TokenKind::Log)?;
    let arguments = parse_arguments(parser)?;

    Ok(Expr::ConsoleLog(ConsoleLogExpr {
        arguments,
        position: start,
    }))
}
