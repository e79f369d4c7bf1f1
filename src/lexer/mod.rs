//! Lexical analysis module for the compiler.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Character-by-character scanning with one character of lookahead
//! - Recognition of keywords, identifiers, literals, and operators
//! - Line/column tracking for error reporting
//! - Line and block comments and whitespace handling
//!
//! The lexer never fails: bytes it cannot scan become `Illegal` tokens and
//! unterminated strings or comments simply run to the end of input.

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
