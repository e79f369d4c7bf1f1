//! Code generation module for the compiler.
//!
//! This module renders the checked AST as dynamically-typed script text. It
//! handles:
//!
//! - Declarations (keyword kept, type annotations erased)
//! - Return and expression statements
//! - Nested blocks with indentation
//! - Literal rendering, with strings re-quoted in double quotes
//!
//! Node kinds without a translation produce an `UnsupportedSyntax` error
//! instead of empty output.

pub mod expr;
pub mod generator;
pub mod stmt;

#[cfg(test)]
mod tests;
