//! Type checking and semantic analysis module.
//!
//! This module performs a single forward pass over the AST, computing a type
//! for every binding while:
//!
//! - Resolving variable references through chained scopes
//! - Reporting undefined variables and unsupported expression kinds
//! - Checking written type annotations against inferred types
//!
//! Scopes are an owned stack of frames rather than linked environments.
//! Diagnostics are collected, never raised.

pub mod environment;
pub mod type_checker;
pub mod types;
