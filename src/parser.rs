//! Recursive-descent parser for propositional formulas.
//!
//! Grammar:
//!
//! ```text
//! expr := symbol | true | false | not expr | "(" expr binary expr ")"
//! ```
//!
//! Every binary connective must be enclosed, together with its operands, in one
//! pair of parentheses. There is no precedence and no associativity. The only
//! exception is the outermost pair, which may be omitted: when the input has fewer
//! opening parentheses than binary connectives, or when a complete formula is
//! followed by more input, the whole token stream is wrapped in an implicit pair.
//!
//! Errors carry character offsets into the original input. The implicit
//! parentheses sit at `-1` and at the input length, so wrapping never shifts
//! the positions of real tokens. Reaching the implicit `)` where an operand or
//! a connective is expected is reported as the end of input.
//!
//! Nesting (negations and parenthesized pairs) is limited to [`MAX_DEPTH`] levels.
//!
//! # Examples
//!
//! ```
//! use ttgen_rs::parser::parse;
//!
//! let expr = parse("A & B").unwrap().unwrap();
//! assert_eq!(expr, parse("(A & B)").unwrap().unwrap());
//!
//! assert_eq!(parse("   ").unwrap(), None);
//!
//! let err = parse("A -> B)").unwrap_err();
//! assert_eq!(err.position, 6);
//! ```

use log::debug;

use crate::ast::Expr;
use crate::connective::{Nullary, Unary};
use crate::error::ParseError;
use crate::token::{self, Token, TokenKind};

/// Deepest accepted nesting of negations and parenthesized pairs.
pub const MAX_DEPTH: usize = 512;

/// Parse `input` into a formula.
///
/// Returns `Ok(None)` if the input is empty or contains only whitespace.
pub fn parse(input: &str) -> Result<Option<Expr>, ParseError> {
    let mut tokens = token::tokens(input);
    if tokens.is_empty() {
        return Ok(None);
    }
    let length = input.chars().count() as isize;

    let mut wrapped = wrap_outer(&mut tokens, length);
    loop {
        debug!("parse: {} tokens, wrapped = {}", tokens.len(), wrapped);
        let mut parser = Parser::new(&tokens);
        let expr = parser.parse_expr()?;

        let Some(next) = parser.peek() else {
            return Ok(Some(expr));
        };
        if !wrapped {
            debug!("parse: trailing input at {}, retrying with implicit parentheses", next.position);
            wrap(&mut tokens, length);
            wrapped = true;
            continue;
        }
        // The implicit `(` was closed early by a `)` typed by the user.
        let closing = parser.last();
        return Err(ParseError::new(closing.position, "unmatched ')'"));
    }
}

/// Wrap `tokens` in an implicit pair of parentheses if binary connectives
/// outnumber opening parentheses. Returns whether it did.
pub fn wrap_outer(tokens: &mut Vec<Token<'_>>, length: isize) -> bool {
    let opening = tokens.iter().filter(|t| t.kind == TokenKind::OpenParen).count();
    let binary = tokens.iter().filter(|t| matches!(t.kind, TokenKind::Binary(_))).count();
    if opening < binary {
        debug!("wrap_outer: {} opening parentheses for {} binary connectives", opening, binary);
        wrap(tokens, length);
        true
    } else {
        false
    }
}

fn wrap(tokens: &mut Vec<Token<'_>>, length: isize) {
    tokens.insert(0, Token::implicit(-1, "("));
    tokens.push(Token::implicit(length, ")"));
}

struct Parser<'t, 'a> {
    tokens: &'t [Token<'a>],
    /// Index of the next token to consume.
    pos: usize,
    /// Number of `parse_expr` calls in progress.
    depth: usize,
}

impl<'t, 'a> Parser<'t, 'a> {
    fn new(tokens: &'t [Token<'a>]) -> Self {
        Self { tokens, pos: 0, depth: 0 }
    }

    fn peek(&self) -> Option<&'t Token<'a>> {
        self.tokens.get(self.pos)
    }

    /// The most recently consumed token. Must not be called before consuming one.
    fn last(&self) -> &'t Token<'a> {
        &self.tokens[self.pos - 1]
    }

    /// Position just past the last consumed token typed by the user.
    fn end(&self) -> isize {
        self.tokens[..self.pos]
            .iter()
            .rev()
            .find(|t| !t.implicit)
            .map_or(0, |t| t.end())
    }

    fn advance(&mut self) -> Option<&'t Token<'a>> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    /// Like [`advance`][Self::advance], but the implicit `)` counts as the end of input.
    fn advance_explicit(&mut self) -> Option<&'t Token<'a>> {
        match self.peek() {
            Some(token) if token.implicit && token.kind == TokenKind::CloseParen => None,
            _ => self.advance(),
        }
    }

    fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        if self.depth == MAX_DEPTH {
            let position = match self.peek() {
                Some(token) if !token.implicit => token.position,
                _ => self.end(),
            };
            return Err(ParseError::new(
                position,
                format!("formula is nested deeper than {} levels", MAX_DEPTH),
            ));
        }
        self.depth += 1;
        let expr = self.parse_operand();
        self.depth -= 1;
        expr
    }

    fn parse_operand(&mut self) -> Result<Expr, ParseError> {
        let Some(token) = self.advance_explicit() else {
            return Err(ParseError::new(self.end(), "unexpected end of input, expected a formula"));
        };
        match token.kind {
            TokenKind::Symbol => Ok(Expr::symbol(token.raw)),
            TokenKind::Nullary(Nullary::True) => Ok(Expr::True),
            TokenKind::Nullary(Nullary::False) => Ok(Expr::False),
            TokenKind::Unary(Unary::Not) => {
                let sub = self.parse_expr()?;
                Ok(Expr::not(token.raw, sub))
            }
            TokenKind::OpenParen => self.parse_binary(),
            TokenKind::CloseParen => Err(ParseError::new(token.position, "unexpected ')', expected a formula")),
            TokenKind::Binary(_) => Err(ParseError::new(
                token.position,
                format!("'{}' is missing its left operand", token.raw),
            )),
        }
    }

    /// Parse the rest of `"(" expr binary expr ")"` after the opening parenthesis.
    fn parse_binary(&mut self) -> Result<Expr, ParseError> {
        let lhs = self.parse_expr()?;

        let Some(connective) = self.advance_explicit() else {
            return Err(ParseError::new(
                self.end(),
                "unexpected end of input, expected a binary connective",
            ));
        };
        let TokenKind::Binary(op) = connective.kind else {
            return Err(ParseError::new(
                connective.position,
                format!("expected a binary connective, found '{}'", connective.raw),
            ));
        };

        let rhs = self.parse_expr()?;

        match self.advance() {
            Some(Token {
                kind: TokenKind::CloseParen,
                ..
            }) => Ok(Expr::binary(op, connective.raw, lhs, rhs)),
            Some(token) => Err(ParseError::new(
                token.position,
                format!("expected ')', found '{}'", token.raw),
            )),
            None => Err(ParseError::new(self.end(), "missing closing parenthesis")),
        }
    }
}
