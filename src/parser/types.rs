use crate::{ast::statements::TypeAnnotation, errors::errors::Error, lexer::tokens::TokenKind};

use super::parser::Parser;

/// Parses the type name after a `:`. Only plain names are accepted, plus the
/// `function` keyword; they are resolved later by the type checker.
pub fn parse_type_annotation(parser: &mut Parser) -> Result<TypeAnnotation, Error> {
    let token = match parser.current_token_kind() {
        TokenKind::Function => parser.advance(),
        _ => parser.expect(TokenKind::Identifier)?,
    };

    Ok(TypeAnnotation {
        name: token.value,
        position: token.position,
    })
}
