//! Tokenizer and classifier.
//!
//! Tokenization knows nothing about logic: parentheses are single-character
//! lexemes, whitespace separates, and every other run of characters forms one
//! lexeme. Spacing around connectives therefore matters: `A&B` is a single
//! lexeme (and thus a single symbol), while `A & B` is three.
//!
//! Classification then decides what a lexeme means using the table in
//! [`connective`][crate::connective].

use crate::connective::{self, Binary, Connective, Nullary, Unary};

/// A raw piece of input text.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Lexeme<'a> {
    /// Character offset of the first character in the input.
    pub position: usize,
    pub raw: &'a str,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TokenKind {
    OpenParen,
    CloseParen,
    Symbol,
    Nullary(Nullary),
    Unary(Unary),
    Binary(Binary),
}

/// A classified lexeme.
///
/// Positions are signed: the implicit parentheses inserted around the whole
/// input live at `-1` and at the input length.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Token<'a> {
    pub position: isize,
    pub raw: &'a str,
    pub kind: TokenKind,
    /// Inserted by the parser, not typed by the user.
    pub implicit: bool,
}

impl<'a> Token<'a> {
    pub fn new(position: isize, raw: &'a str) -> Self {
        Self {
            position,
            raw,
            kind: classify(raw),
            implicit: false,
        }
    }

    /// A parenthesis that is not part of the input.
    pub fn implicit(position: isize, raw: &'a str) -> Self {
        Self {
            implicit: true,
            ..Self::new(position, raw)
        }
    }

    /// Character offset just past this token.
    pub fn end(&self) -> isize {
        self.position + self.raw.chars().count() as isize
    }
}

impl<'a> From<Lexeme<'a>> for Token<'a> {
    fn from(lexeme: Lexeme<'a>) -> Self {
        Token::new(lexeme.position as isize, lexeme.raw)
    }
}

/// Split `input` into lexemes.
pub fn tokenize(input: &str) -> Vec<Lexeme<'_>> {
    let mut lexemes = Vec::new();
    // Start (byte, char) of the run being accumulated.
    let mut start: Option<(usize, usize)> = None;

    for (position, (byte, c)) in input.char_indices().enumerate() {
        let is_paren = c == '(' || c == ')';
        if is_paren || c.is_whitespace() {
            if let Some((start_byte, start_position)) = start.take() {
                lexemes.push(Lexeme {
                    position: start_position,
                    raw: &input[start_byte..byte],
                });
            }
            if is_paren {
                lexemes.push(Lexeme {
                    position,
                    raw: &input[byte..byte + 1],
                });
            }
        } else if start.is_none() {
            start = Some((byte, position));
        }
    }
    if let Some((start_byte, start_position)) = start {
        lexemes.push(Lexeme {
            position: start_position,
            raw: &input[start_byte..],
        });
    }

    lexemes
}

/// Determine the kind of a lexeme.
pub fn classify(raw: &str) -> TokenKind {
    match raw {
        "(" => TokenKind::OpenParen,
        ")" => TokenKind::CloseParen,
        _ => match connective::lookup(raw).map(|s| s.connective) {
            Some(Connective::Nullary(c)) => TokenKind::Nullary(c),
            Some(Connective::Unary(c)) => TokenKind::Unary(c),
            Some(Connective::Binary(c)) => TokenKind::Binary(c),
            None => TokenKind::Symbol,
        },
    }
}

/// Tokenize and classify `input`.
pub fn tokens(input: &str) -> Vec<Token<'_>> {
    tokenize(input).into_iter().map(Token::from).collect()
}
