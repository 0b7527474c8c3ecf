/*
MIT License

Copyright (c) 2026 Raja Lehtihet and Wael El Oraiby

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

//! Tokenizer: raw text to spanned tokens.

use crate::ast::{ComparisonKind, SourceSpan, Span};
use crate::diagnostics::InequalityError;
use nom::Parser;
use nom::{
    branch::alt,
    combinator::{map, map_res},
};
use std::fmt;

use super::PResult;
use super::utils::{comparator, identifier, number_literal, symbol, ws0};

/// Token payloads.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// Unsigned decimal literal.
    Number(f64),
    /// Identifier naming the unknown.
    Variable(String),
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `^`
    Caret,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// Any comparator spelling.
    Comparator(ComparisonKind),
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number(value) => write!(f, "number {value}"),
            TokenKind::Variable(name) => write!(f, "'{name}'"),
            TokenKind::Plus => f.write_str("'+'"),
            TokenKind::Minus => f.write_str("'-'"),
            TokenKind::Star => f.write_str("'*'"),
            TokenKind::Slash => f.write_str("'/'"),
            TokenKind::Caret => f.write_str("'^'"),
            TokenKind::LParen => f.write_str("'('"),
            TokenKind::RParen => f.write_str("')'"),
            TokenKind::Comparator(kind) => write!(f, "'{kind}'"),
        }
    }
}

/// Spanned token.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Token payload.
    pub kind: TokenKind,
    /// Source location for diagnostics.
    pub span: SourceSpan,
}

/// Parses one token at the current position.
fn token(input: Span<'_>) -> PResult<'_, TokenKind> {
    alt((
        map_res(number_literal, |s: Span<'_>| {
            s.fragment().parse::<f64>().map(TokenKind::Number)
        }),
        map(identifier, TokenKind::Variable),
        map(comparator, TokenKind::Comparator),
        symbol,
    ))
    .parse(input)
}

/// Splits `source` into spanned tokens, skipping whitespace.
pub fn tokenize(source: &str) -> Result<Vec<Token>, InequalityError> {
    let mut input = Span::new(source);
    let mut tokens = Vec::new();
    loop {
        let (rest, ()) = ws0(input).map_err(|err| super::lex_error(err, source, input))?;
        input = rest;
        if input.fragment().is_empty() {
            break;
        }

        let (rest, kind) = token(input).map_err(|err| super::lex_error(err, source, input))?;
        // A number immediately followed by '.' (`1.2.3`, `1..2`) is malformed.
        if matches!(kind, TokenKind::Number(_)) && rest.fragment().starts_with('.') {
            let mut span = SourceSpan::from_bounds(input, rest);
            span.end += 1;
            return Err(InequalityError::syntax(
                "malformed number literal",
                source,
                &span,
            ));
        }
        tokens.push(Token {
            kind,
            span: SourceSpan::from_bounds(input, rest),
        });
        input = rest;
    }

    tracing::trace!(count = tokens.len(), "tokenized input");
    Ok(tokens)
}
