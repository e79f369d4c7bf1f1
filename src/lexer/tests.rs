//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Integer and string literals
//! - Operators and punctuation
//! - Comments
//! - Positions, illegal input and end-of-input behaviour

use pretty_assertions::assert_eq;

use super::{
    lexer::{tokenize, Lexer},
    tokens::TokenKind,
};

fn kinds_and_values(source: &str) -> Vec<(TokenKind, String)> {
    tokenize(source)
        .into_iter()
        .map(|token| (token.kind, token.value))
        .collect()
}

#[test]
fn test_next_token_program() {
    let source = r#"let five = 5;
	let ten = 10;

	let add = function(x, y) {
		return x + y;
	};

	let result = add(five, ten);
	"hello world";
	'hello world';
	console.log("hello world");
	"#;

    let expected = vec![
        (TokenKind::Let, "let"),
        (TokenKind::Identifier, "five"),
        (TokenKind::Assignment, "="),
        (TokenKind::Number, "5"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Let, "let"),
        (TokenKind::Identifier, "ten"),
        (TokenKind::Assignment, "="),
        (TokenKind::Number, "10"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Let, "let"),
        (TokenKind::Identifier, "add"),
        (TokenKind::Assignment, "="),
        (TokenKind::Function, "function"),
        (TokenKind::OpenParen, "("),
        (TokenKind::Identifier, "x"),
        (TokenKind::Comma, ","),
        (TokenKind::Identifier, "y"),
        (TokenKind::CloseParen, ")"),
        (TokenKind::OpenCurly, "{"),
        (TokenKind::Return, "return"),
        (TokenKind::Identifier, "x"),
        (TokenKind::Plus, "+"),
        (TokenKind::Identifier, "y"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::CloseCurly, "}"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Let, "let"),
        (TokenKind::Identifier, "result"),
        (TokenKind::Assignment, "="),
        (TokenKind::Identifier, "add"),
        (TokenKind::OpenParen, "("),
        (TokenKind::Identifier, "five"),
        (TokenKind::Comma, ","),
        (TokenKind::Identifier, "ten"),
        (TokenKind::CloseParen, ")"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::String, "hello world"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::String, "hello world"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Console, "console"),
        (TokenKind::Dot, "."),
        (TokenKind::Log, "log"),
        (TokenKind::OpenParen, "("),
        (TokenKind::String, "hello world"),
        (TokenKind::CloseParen, ")"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::EOF, ""),
    ]
    .into_iter()
    .map(|(kind, value)| (kind, value.to_string()))
    .collect::<Vec<_>>();

    assert_eq!(kinds_and_values(source), expected);
}

#[test]
fn test_tokenize_keywords() {
    let tokens = tokenize("function let const var return if else console log");

    assert_eq!(tokens[0].kind, TokenKind::Function);
    assert_eq!(tokens[1].kind, TokenKind::Let);
    assert_eq!(tokens[2].kind, TokenKind::Const);
    assert_eq!(tokens[3].kind, TokenKind::Var);
    assert_eq!(tokens[4].kind, TokenKind::Return);
    assert_eq!(tokens[5].kind, TokenKind::If);
    assert_eq!(tokens[6].kind, TokenKind::Else);
    assert_eq!(tokens[7].kind, TokenKind::Console);
    assert_eq!(tokens[8].kind, TokenKind::Log);
    assert_eq!(tokens[9].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo _underscore CamelCase lets functional");

    for (index, name) in ["foo", "_underscore", "CamelCase", "lets", "functional"]
        .iter()
        .enumerate()
    {
        assert_eq!(tokens[index].kind, TokenKind::Identifier);
        assert_eq!(tokens[index].value, *name);
    }
}

#[test]
fn test_digit_does_not_extend_identifier() {
    assert_eq!(
        kinds_and_values("baz123"),
        vec![
            (TokenKind::Identifier, "baz".to_string()),
            (TokenKind::Number, "123".to_string()),
            (TokenKind::EOF, String::new()),
        ]
    );
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 0 007 3.14");

    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].value, "0");
    assert_eq!(tokens[2].value, "007");
    // No floats: the dot is punctuation
    assert_eq!(tokens[3].kind, TokenKind::Number);
    assert_eq!(tokens[3].value, "3");
    assert_eq!(tokens[4].kind, TokenKind::Dot);
    assert_eq!(tokens[5].value, "14");
}

#[test]
fn test_strings_are_verbatim() {
    let tokens = tokenize(r#""a\nb" 'say "hi"' "it's""#);

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, r"a\nb");
    assert_eq!(tokens[1].value, r#"say "hi""#);
    assert_eq!(tokens[2].value, "it's");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_unterminated_string_runs_to_end() {
    let tokens = tokenize("let s = \"never closed;\nlet t = 1;");

    assert_eq!(tokens[3].kind, TokenKind::String);
    assert_eq!(tokens[3].value, "never closed;\nlet t = 1;");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
    assert_eq!(tokens.len(), 5);
}

#[test]
fn test_tokenize_operators() {
    let tokens = tokenize("= + - ! * / < > , ; : ( ) { } .");
    let expected = [
        TokenKind::Assignment,
        TokenKind::Plus,
        TokenKind::Dash,
        TokenKind::Not,
        TokenKind::Star,
        TokenKind::Slash,
        TokenKind::Less,
        TokenKind::Greater,
        TokenKind::Comma,
        TokenKind::Semicolon,
        TokenKind::Colon,
        TokenKind::OpenParen,
        TokenKind::CloseParen,
        TokenKind::OpenCurly,
        TokenKind::CloseCurly,
        TokenKind::Dot,
        TokenKind::EOF,
    ];

    assert_eq!(
        tokens.iter().map(|token| token.kind).collect::<Vec<_>>(),
        expected
    );
}

#[test]
fn test_comments_are_transparent() {
    let plain = "let x = 5;\nlet y = x / 2;";
    let commented = "// leading\nlet x /* inline */ = 5; // trailing\n/* multi\nline */let y = x / 2;";

    let strip = |source: &str| {
        tokenize(source)
            .into_iter()
            .map(|token| (token.kind, token.value))
            .collect::<Vec<_>>()
    };

    assert_eq!(strip(commented), strip(plain));
}

#[test]
fn test_unterminated_block_comment_runs_to_end() {
    assert_eq!(
        kinds_and_values("let x /* no end ;"),
        vec![
            (TokenKind::Let, "let".to_string()),
            (TokenKind::Identifier, "x".to_string()),
            (TokenKind::EOF, String::new()),
        ]
    );
}

#[test]
fn test_illegal_characters() {
    let tokens = tokenize("let a = #;@");

    assert_eq!(tokens[3].kind, TokenKind::Illegal);
    assert_eq!(tokens[3].value, "#");
    assert_eq!(tokens[4].kind, TokenKind::Semicolon);
    assert_eq!(tokens[5].kind, TokenKind::Illegal);
    assert_eq!(tokens[5].value, "@");
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_unicode_whitespace_and_letters() {
    let tokens = tokenize("let\u{00A0}café\u{2003}= 1;");

    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "café");
    assert_eq!(tokens[2].kind, TokenKind::Assignment);
}

#[test]
fn test_token_positions() {
    let tokens = tokenize("let x = 5;\n  return x;");

    assert_eq!((tokens[0].position.line, tokens[0].position.column), (1, 1));
    assert_eq!((tokens[1].position.line, tokens[1].position.column), (1, 5));
    assert_eq!((tokens[3].position.line, tokens[3].position.column), (1, 9));
    assert_eq!((tokens[5].position.line, tokens[5].position.column), (2, 3));
    assert_eq!((tokens[6].position.line, tokens[6].position.column), (2, 10));
}

#[test]
fn test_eof_is_idempotent() {
    let mut lexer = Lexer::new("x");

    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    for _ in 0..5 {
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::EOF);
        assert_eq!(token.value, "");
    }
}

#[test]
fn test_empty_source() {
    let tokens = tokenize("   \n\t ");

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
}

#[test]
fn test_lone_slash_is_operator() {
    assert_eq!(
        kinds_and_values("a/b"),
        vec![
            (TokenKind::Identifier, "a".to_string()),
            (TokenKind::Slash, "/".to_string()),
            (TokenKind::Identifier, "b".to_string()),
            (TokenKind::EOF, String::new()),
        ]
    );
}
