use log::{trace, warn};

use crate::{Position, MK_TOKEN};

use super::tokens::{lookup_identifier, Token, TokenKind};

/// Hand-rolled scanner over the source characters.
///
/// `ch` is the character under examination and `read_pos` the index of the
/// next one, so a single character of lookahead is available through
/// [`Lexer::peek_char`]. `line` and `column` are 1-based and always describe
/// `ch`.
#[derive(Clone, Debug)]
pub struct Lexer {
    source: Vec<char>,
    pos: usize,
    read_pos: usize,
    ch: Option<char>,
    line: usize,
    column: usize,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        let mut lexer = Lexer {
            source: source.chars().collect(),
            pos: 0,
            read_pos: 0,
            ch: None,
            line: 1,
            column: 0,
        };
        lexer.read_char();
        lexer
    }

    fn read_char(&mut self) {
        if self.read_pos >= self.source.len() {
            self.ch = None;
            self.pos = self.source.len();
            return;
        }

        let ch = self.source[self.read_pos];
        self.ch = Some(ch);
        self.pos = self.read_pos;
        self.read_pos += 1;
        self.column += 1;
        if ch == '\n' {
            self.line += 1;
            self.column = 0;
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.source.get(self.read_pos).copied()
    }

    pub fn at_eof(&self) -> bool {
        self.ch.is_none()
    }

    /// Returns the next token. Once the input is exhausted every call yields
    /// an `EOF` token.
    pub fn next_token(&mut self) -> Token {
        loop {
            self.skip_whitespace();

            let position = Position::new(self.line, self.column);
            let Some(ch) = self.ch else {
                return MK_TOKEN!(TokenKind::EOF, String::new(), position);
            };

            if ch == '/' {
                match self.peek_char() {
                    Some('/') => {
                        self.skip_line_comment();
                        continue;
                    }
                    Some('*') => {
                        self.skip_block_comment(position);
                        continue;
                    }
                    _ => {}
                }
            }

            let token = if let Some(kind) = TokenKind::from_punctuation(ch) {
                self.read_char();
                MK_TOKEN!(kind, ch.to_string(), position)
            } else if ch == '"' || ch == '\'' {
                MK_TOKEN!(TokenKind::String, self.read_string(ch, position), position)
            } else if is_letter(ch) {
                let value = self.read_identifier();
                MK_TOKEN!(lookup_identifier(&value), value, position)
            } else if is_digit(ch) {
                MK_TOKEN!(TokenKind::Number, self.read_number(), position)
            } else {
                self.read_char();
                MK_TOKEN!(TokenKind::Illegal, ch.to_string(), position)
            };

            trace!("{}", token.debug());
            return token;
        }
    }

    fn skip_whitespace(&mut self) {
        while self.ch.is_some_and(char::is_whitespace) {
            self.read_char();
        }
    }

    fn skip_line_comment(&mut self) {
        while self.ch.is_some_and(|ch| ch != '\n') {
            self.read_char();
        }
    }

    fn skip_block_comment(&mut self, start: Position) {
        // Skip `/*`
        self.read_char();
        self.read_char();

        loop {
            match self.ch {
                None => {
                    warn!("unterminated block comment starting at {}", start);
                    break;
                }
                Some('*') if self.peek_char() == Some('/') => {
                    self.read_char();
                    self.read_char();
                    break;
                }
                Some(_) => self.read_char(),
            }
        }
    }

    fn read_identifier(&mut self) -> String {
        let start = self.pos;
        while self.ch.is_some_and(is_letter) {
            self.read_char();
        }
        self.source[start..self.pos].iter().collect()
    }

    fn read_number(&mut self) -> String {
        let start = self.pos;
        while self.ch.is_some_and(is_digit) {
            self.read_char();
        }
        self.source[start..self.pos].iter().collect()
    }

    /// Reads verbatim up to the matching `quote`. No escapes are processed and
    /// an unterminated literal runs to the end of input.
    fn read_string(&mut self, quote: char, start: Position) -> String {
        self.read_char();
        let content_start = self.pos;

        while self.ch.is_some_and(|ch| ch != quote) {
            self.read_char();
        }

        let value = self.source[content_start..self.pos].iter().collect();

        if self.at_eof() {
            warn!("unterminated string literal starting at {}", start);
        } else {
            self.read_char();
        }

        value
    }
}

fn is_letter(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_'
}

fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// Scans all of `source`, returning the tokens up to and including the single
/// trailing `EOF` token.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lex = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let done = token.is_eof();
        tokens.push(token);

        if done {
            break;
        }
    }

    tokens
}
