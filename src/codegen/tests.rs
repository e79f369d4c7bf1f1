//! Unit tests for code generation.

use pretty_assertions::assert_eq;

use super::{expr::quote_string, generator::{generate, Generator}};
use crate::{
    ast::ast::Program,
    errors::errors::ErrorImpl,
    lexer::lexer::tokenize,
    parser::parser::parse,
};

fn parse_ok(source: &str) -> Program {
    let (parser, program) = parse(tokenize(source));
    assert!(parser.errors().is_empty(), "parse errors: {:?}", parser.errors());
    program
}

fn generate_source(source: &str) -> String {
    generate(&parse_ok(source)).unwrap()
}

#[test]
fn test_single_statements() {
    let tests = [
        ("let x = 5;", "let x = 5;\n"),
        ("let y = \"hello\";", "let y = \"hello\";\n"),
        ("let z = x;", "let z = x;\n"),
        ("return 10;", "return 10;\n"),
        ("x;", "x;\n"),
    ];

    for (input, expected) in tests {
        assert_eq!(generate_source(input), expected);
    }
}

#[test]
fn test_multi_statement_generation() {
    let input = "
	let x = 5;
	let y = \"hello\";
	let z = x;
	return z;
	";

    assert_eq!(
        generate_source(input),
        "let x = 5;\nlet y = \"hello\";\nlet z = x;\nreturn z;\n"
    );
}

#[test]
fn test_integer_literal_is_verbatim() {
    assert_eq!(generate_source("let n = 007;"), "let n = 007;\n");
}

#[test]
fn test_single_quotes_are_normalized() {
    assert_eq!(generate_source("let s = 'hello';"), "let s = \"hello\";\n");
}

#[test]
fn test_declaration_variants() {
    assert_eq!(
        generate_source("const a: number = 1;\nvar b;\nlet c: string;\nreturn;"),
        "const a = 1;\nvar b;\nlet c;\nreturn;\n"
    );
}

#[test]
fn test_block_generation() {
    assert_eq!(
        generate_source("let x = 1;\n{ let y = x; { return y; } }"),
        "let x = 1;\n{\n  let y = x;\n  {\n    return y;\n  }\n}\n"
    );
}

#[test]
fn test_block_indent_width() {
    let generator = Generator { indent_width: 4 };
    let output = generator.generate(&parse_ok("{ x; }")).unwrap();

    assert_eq!(output, "{\n    x;\n}\n");
}

#[test]
fn test_console_log() {
    assert_eq!(
        generate_source("console.log('a', 1, b);\nconsole.log();"),
        "console.log(\"a\", 1, b);\nconsole.log();\n"
    );
}

#[test]
fn test_unsupported_syntax_is_an_error() {
    let sources = [
        ("let f = function() { return 1; };", "FunctionExpr"),
        ("let s = a + b;", "BinaryExpr"),
        ("add(1);", "CallExpr"),
        ("return -x;", "PrefixExpr"),
        ("a.b;", "MemberExpr"),
    ];

    for (source, kind) in sources {
        let error = generate(&parse_ok(source)).unwrap_err();
        assert_eq!(
            error.get_internal_error(),
            &ErrorImpl::UnsupportedSyntax {
                kind: kind.to_string()
            }
        );
    }
}

#[test]
fn test_empty_program() {
    assert_eq!(generate_source(""), "");
}

#[test]
fn test_quote_string() {
    assert_eq!(quote_string("hello"), "\"hello\"");
    assert_eq!(quote_string(""), "\"\"");
    assert_eq!(quote_string("say \"hi\""), "\"say \\\"hi\\\"\"");
    assert_eq!(quote_string("already \\\" escaped"), "\"already \\\" escaped\"");
    assert_eq!(quote_string("tab\\t"), "\"tab\\t\"");
    assert_eq!(quote_string("two\nlines"), "\"two\\nlines\"");
    assert_eq!(quote_string("ends\\"), "\"ends\\\\\"");
}
