#![allow(clippy::module_inception)]

use std::{fmt::Display, fs, path::Path, time::Instant};

use log::debug;

use crate::{
    codegen::generator::generate,
    errors::errors::{Error, ErrorImpl, ErrorTip},
    lexer::lexer::tokenize,
    parser::parser::parse,
    type_checker::type_checker::type_check,
};

pub mod ast;
pub mod codegen;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod type_checker;

/// A line/column pair, both 1-based. Line 0 marks "no source location".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Position { line, column }
    }

    pub fn null() -> Self {
        Position { line: 0, column: 0 }
    }

    pub fn is_null(&self) -> bool {
        self.line == 0
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Compiles a source string into target script text.
///
/// Parser errors short-circuit before type checking and are reported joined;
/// of the collected type diagnostics only the first is surfaced.
pub fn compile(source: &str) -> Result<String, Error> {
    let start = Instant::now();
    let tokens = tokenize(source);
    debug!("Tokenized {} tokens in {:?}", tokens.len(), start.elapsed());

    let parse_start = Instant::now();
    let (parser, program) = parse(tokens);
    debug!("Parsed in {:?}", parse_start.elapsed());

    if let Some(first) = parser.errors().first() {
        let messages = parser
            .errors()
            .iter()
            .map(|error| error.to_string())
            .collect::<Vec<String>>()
            .join(", ");
        return Err(Error::new(ErrorImpl::ParseErrors { messages }, *first.get_position()));
    }

    let type_check_start = Instant::now();
    let (_, diagnostics) = type_check(&program);
    debug!("Type checked in {:?}", type_check_start.elapsed());

    for diagnostic in diagnostics.iter() {
        debug!("type diagnostic at {}: {}", diagnostic.get_position(), diagnostic);
    }

    if let Some(first) = diagnostics.first() {
        return Err(Error::new(
            ErrorImpl::TypeError { message: first.to_string() },
            *first.get_position(),
        ));
    }

    let generate_start = Instant::now();
    let output = generate(&program)?;
    debug!("Generated in {:?}", generate_start.elapsed());
    debug!("Total time: {:?}", start.elapsed());

    Ok(output)
}

/// Reads `input`, compiles it and writes the result to `output`.
/// Nothing is written when compilation fails.
pub fn compile_file(input: &Path, output: &Path) -> Result<(), Error> {
    let source = fs::read_to_string(input).map_err(Error::from)?;
    let generated = compile(&source)?;
    fs::write(output, generated).map_err(Error::from)?;

    debug!("Wrote {}", output.display());
    Ok(())
}

/// Returns the text of the 1-based `line` of `source`, if present.
pub fn get_line_at_position(source: &str, line: usize) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source.lines().nth(line - 1)
}

pub fn display_error(error: &Error, file: &Path, source: &str) {
    /*
        Error: message
        -> script.ts
           |
        20 | let a = #;
           | --------^
    */

    if let ErrorTip::None = error.get_tip() {
        eprintln!("Error: {}", error);
    } else {
        eprintln!("Error: {} ({})", error, error.get_tip());
    }
    eprintln!("-> {}", file.as_os_str().to_string_lossy());

    let position = error.get_position();
    let Some(line_text) = get_line_at_position(source, position.line) else {
        return;
    };

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    eprintln!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    eprintln!("{} | {}", line_string, line_text_removed.trim_end());

    let arrows = position.column.saturating_sub(removed_whitespace).max(1);

    eprintln!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (string.chars().skip(start).collect(), start)
}
