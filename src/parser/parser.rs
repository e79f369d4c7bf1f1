//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! The parser uses a Pratt parser approach with NUD/LED handlers for
//! expression parsing and specialized functions for statement parsing.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence
//!
//! Errors do not stop parsing. A failed statement is recorded, the parser
//! skips to the next statement boundary and carries on, so one pass reports
//! every syntax error it can find.

use std::collections::HashMap;

use log::trace;

use crate::{
    ast::ast::{Program, Stmt},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position, MK_TOKEN,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// The list of tokens to parse, always ending with `EOF`
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Errors recorded so far, in source order
    errors: Vec<Error>,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
}

impl Parser {
    /// Creates a new Parser over `tokens` with empty lookup tables.
    ///
    /// An `EOF` token is appended when the stream does not already end in one.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if !tokens.last().is_some_and(Token::is_eof) {
            let position = tokens
                .last()
                .map(|token| token.position)
                .unwrap_or_else(|| Position::new(1, 0));
            tokens.push(MK_TOKEN!(TokenKind::EOF, String::new(), position));
        }

        Parser {
            tokens,
            pos: 0,
            errors: vec![],
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Returns the token before the current one, if any.
    pub fn previous_token(&self) -> Option<&Token> {
        self.pos.checked_sub(1).and_then(|pos| self.tokens.get(pos))
    }

    /// Advances to the next token and returns the previous token.
    /// The position never moves past `EOF`.
    pub fn advance(&mut self) -> Token {
        let token = self.current_token().clone();
        if !token.is_eof() {
            self.pos += 1;
        }
        token
    }

    /// Expects a token of the specified kind.
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise an
    /// `ExpectedToken` error positioned at the current token.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        if self.current_token_kind() == expected_kind {
            Ok(self.advance())
        } else {
            Err(self.unexpected(expected_kind))
        }
    }

    /// Builds the error for finding the current token where `expected_kind` was required.
    pub fn unexpected(&self, expected_kind: TokenKind) -> Error {
        let token = self.current_token();
        let found = if token.is_eof() {
            String::from("EOF")
        } else {
            token.value.clone()
        };

        Error::new(
            ErrorImpl::ExpectedToken {
                expected: expected_kind,
                found,
            },
            token.position,
        )
    }

    /// Whether the current token starts on a later line than the one before it.
    pub fn on_new_line(&self) -> bool {
        match self.previous_token() {
            Some(previous) => previous.position.line < self.current_token().position.line,
            None => false,
        }
    }

    /// Consumes a statement terminator.
    ///
    /// A `;` is consumed when present. It may be left out before `}`, at the
    /// end of input, or when the next token is on a new line.
    pub fn expect_terminator(&mut self) -> Result<(), Error> {
        match self.current_token_kind() {
            TokenKind::Semicolon => {
                self.advance();
                Ok(())
            }
            TokenKind::CloseCurly | TokenKind::EOF => Ok(()),
            _ if self.on_new_line() => Ok(()),
            _ => Err(self.unexpected(TokenKind::Semicolon)),
        }
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    /// Records `error` and skips past the end of the failed statement.
    pub fn recover(&mut self, error: Error) {
        trace!("recovering from parse error at {}: {}", error.get_position(), error);
        self.errors.push(error);

        while !matches!(
            self.current_token_kind(),
            TokenKind::Semicolon | TokenKind::CloseCurly | TokenKind::EOF
        ) {
            self.advance();
        }

        if self.current_token_kind() == TokenKind::Semicolon {
            self.advance();
        }
    }

    /// Every error recorded while parsing, in the order they were found.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Returns the position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().position
    }
}

/// Parses a stream of tokens into a Program.
///
/// This is the main entry point for parsing. It creates a parser instance,
/// initializes all lookup tables, and parses statements until EOF. Callers
/// must check [`Parser::errors`] before trusting the returned Program.
pub fn parse(tokens: Vec<Token>) -> (Parser, Program) {
    let mut parser = Parser::new(tokens);
    create_token_lookups(&mut parser);

    let mut body: Vec<Stmt> = vec![];

    while parser.has_tokens() {
        match parse_stmt(&mut parser) {
            Ok(stmt) => {
                trace!("parsed statement at {}", stmt.get_position());
                body.push(stmt);
            }
            Err(error) => {
                parser.recover(error);

                // No block is open at the top level, so a `}` that stopped
                // recovery belongs to the failed statement
                if parser.current_token_kind() == TokenKind::CloseCurly {
                    parser.advance();
                }
            }
        }
    }

    (parser, Program { body })
}
