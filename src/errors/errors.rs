use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::IllegalToken { .. } => "IllegalToken",
            ErrorImpl::ExpectedToken { .. } => "ExpectedToken",
            ErrorImpl::NoPrefixParse { .. } => "NoPrefixParse",
            ErrorImpl::MissingInitializer { .. } => "MissingInitializer",
            ErrorImpl::UndefinedVariable { .. } => "UndefinedVariable",
            ErrorImpl::UnknownExpression { .. } => "UnknownExpression",
            ErrorImpl::UnknownType { .. } => "UnknownType",
            ErrorImpl::TypeMatchError { .. } => "TypeMatchError",
            ErrorImpl::UnsupportedSyntax { .. } => "UnsupportedSyntax",
            ErrorImpl::ParseErrors { .. } => "ParseErrors",
            ErrorImpl::TypeError { .. } => "TypeError",
            ErrorImpl::Io { .. } => "Io",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::IllegalToken { .. } => ErrorTip::None,
            ErrorImpl::ExpectedToken { expected, .. } if *expected == TokenKind::Semicolon => {
                ErrorTip::Suggestion(String::from("did you miss a semicolon?"))
            }
            ErrorImpl::ExpectedToken { .. } => ErrorTip::None,
            ErrorImpl::NoPrefixParse { token } => ErrorTip::Suggestion(format!(
                "`{}` cannot start an expression",
                token
            )),
            ErrorImpl::MissingInitializer { variable } => ErrorTip::Suggestion(format!(
                "Constant `{}` must be given a value",
                variable
            )),
            ErrorImpl::UndefinedVariable { variable } => {
                ErrorTip::Suggestion(format!("Variable `{}` not declared", variable))
            }
            ErrorImpl::UnknownExpression { .. } => ErrorTip::Suggestion(String::from(
                "This expression kind cannot be type checked yet",
            )),
            ErrorImpl::UnknownType { type_ } => {
                ErrorTip::Suggestion(format!("Unknown type `{}` found", type_))
            }
            ErrorImpl::TypeMatchError { expected, received } => ErrorTip::Suggestion(format!(
                "Expected type `{}`, received `{}`",
                expected, received
            )),
            ErrorImpl::UnsupportedSyntax { kind } => ErrorTip::Suggestion(format!(
                "{} cannot be translated yet",
                kind
            )),
            ErrorImpl::ParseErrors { .. } | ErrorImpl::TypeError { .. } | ErrorImpl::Io { .. } => {
                ErrorTip::None
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::new(
            ErrorImpl::Io {
                message: error.to_string(),
            },
            Position::null(),
        )
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("illegal token: {token:?}")]
    IllegalToken { token: String },
    #[error("expected next token to be {expected}, got {found:?} instead")]
    ExpectedToken { expected: TokenKind, found: String },
    #[error("no prefix parse function for {token:?} found")]
    NoPrefixParse { token: String },
    #[error("missing initializer in const declaration: {variable}")]
    MissingInitializer { variable: String },
    #[error("undefined variable: {variable}")]
    UndefinedVariable { variable: String },
    #[error("unknown expression type: {kind}")]
    UnknownExpression { kind: String },
    #[error("unknown type: {type_}")]
    UnknownType { type_: String },
    #[error("type mismatch: expected {expected}, received {received}")]
    TypeMatchError { expected: String, received: String },
    #[error("cannot generate code for {kind}")]
    UnsupportedSyntax { kind: String },
    #[error("parse errors: {messages}")]
    ParseErrors { messages: String },
    #[error("type error: {message}")]
    TypeError { message: String },
    #[error("{message}")]
    Io { message: String },
}
