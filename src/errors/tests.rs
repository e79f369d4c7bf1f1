//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::tokens::TokenKind;
use crate::Position;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::IllegalToken {
            token: "@".to_string(),
        },
        Position::new(1, 10),
    );

    assert_eq!(error.get_error_name(), "IllegalToken");
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::NoPrefixParse {
            token: ";".to_string(),
        },
        Position::new(4, 2),
    );

    assert_eq!(error.get_position().line, 4);
    assert_eq!(error.get_position().column, 2);
}

#[test]
fn test_undefined_variable_message() {
    let error = Error::new(
        ErrorImpl::UndefinedVariable {
            variable: "y".to_string(),
        },
        Position::new(1, 9),
    );

    assert_eq!(error.to_string(), "undefined variable: y");
    assert_eq!(error.get_error_name(), "UndefinedVariable");
}

#[test]
fn test_unknown_expression_message() {
    let error = Error::new(
        ErrorImpl::UnknownExpression {
            kind: "BinaryExpr".to_string(),
        },
        Position::new(1, 1),
    );

    assert_eq!(error.to_string(), "unknown expression type: BinaryExpr");
}

#[test]
fn test_expected_token_message() {
    let error = Error::new(
        ErrorImpl::ExpectedToken {
            expected: TokenKind::Identifier,
            found: "=".to_string(),
        },
        Position::new(1, 5),
    );

    assert_eq!(
        error.to_string(),
        "expected next token to be Identifier, got \"=\" instead"
    );
}

#[test]
fn test_pipeline_messages() {
    let parse = Error::new(
        ErrorImpl::ParseErrors {
            messages: "a, b".to_string(),
        },
        Position::new(1, 1),
    );
    let type_error = Error::new(
        ErrorImpl::TypeError {
            message: "undefined variable: y".to_string(),
        },
        Position::new(1, 1),
    );

    assert_eq!(parse.to_string(), "parse errors: a, b");
    assert_eq!(type_error.to_string(), "type error: undefined variable: y");
}

#[test]
fn test_io_error_is_verbatim() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
    let error = Error::from(io);

    assert_eq!(error.to_string(), "no such file");
    assert_eq!(error.get_error_name(), "Io");
    assert!(error.get_position().is_null());
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::IllegalToken {
            token: "@".to_string(),
        },
        Position::new(1, 1),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_missing_semicolon_tip() {
    let error = Error::new(
        ErrorImpl::ExpectedToken {
            expected: TokenKind::Semicolon,
            found: "y".to_string(),
        },
        Position::new(1, 1),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("semicolon")),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
