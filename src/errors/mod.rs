//! Error types and error handling for the compiler.
//!
//! This module defines the error type shared by every stage of the
//! pipeline. It includes:
//!
//! - Error structures carrying a line/column source position
//! - Specific error variants for parsing, type checking and generation
//! - The pipeline-level errors surfaced by `compile`
//! - Helpful suggestions attached to individual variants

pub mod errors;

#[cfg(test)]
mod tests;
