//! Main generator module.
//!
//! Walks a checked Program and renders target script text, one statement
//! per line. The walk is purely syntax-directed: there is no intermediate
//! representation and no state carried between statements.

use crate::{ast::ast::Program, errors::errors::Error};

use super::stmt::gen_statement;

/// Output settings for a generation pass.
#[derive(Debug, Clone, Copy)]
pub struct Generator {
    /// Spaces per nesting level inside blocks
    pub indent_width: usize,
}

impl Default for Generator {
    fn default() -> Self {
        Generator { indent_width: 2 }
    }
}

impl Generator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders every top-level statement, each followed by a newline.
    ///
    /// Fails on the first node kind that has no translation.
    pub fn generate(&self, program: &Program) -> Result<String, Error> {
        let mut output = String::new();

        for stmt in program.iter() {
            output.push_str(&gen_statement(self, stmt, 0)?);
            output.push('\n');
        }

        Ok(output)
    }

    pub fn indent(&self, depth: usize) -> String {
        " ".repeat(self.indent_width * depth)
    }
}

/// Generates target text for `program` with default settings.
pub fn generate(program: &Program) -> Result<String, Error> {
    Generator::new().generate(program)
}
