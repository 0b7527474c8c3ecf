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

//! Lexical helpers.

use crate::ast::{ComparisonKind, Span};
use nom::Parser;
use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{char, digit0, digit1, multispace0},
    combinator::{cut, opt, recognize, value},
    error::context,
    sequence::{pair, preceded},
};

use super::PResult;
use super::lexer::TokenKind;

/// Skips zero-or-more whitespace.
pub(super) fn ws0(input: Span<'_>) -> PResult<'_, ()> {
    value((), multispace0).parse(input)
}

/// Recognizes an unsigned decimal literal (`12`, `1.5`, `2.`, `.5`).
///
/// The sign belongs to the parser; exponents are not part of the grammar.
pub(super) fn number_literal(input: Span<'_>) -> PResult<'_, Span<'_>> {
    alt((
        recognize(pair(digit1, opt(pair(char('.'), digit0)))),
        recognize(pair(char('.'), digit1)),
    ))
    .parse(input)
}

/// Parses identifiers (`[A-Za-z]+`).
pub(super) fn identifier(input: Span<'_>) -> PResult<'_, String> {
    let (input, name) = take_while1(|c: char| c.is_ascii_alphabetic()).parse(input)?;
    Ok((input, name.fragment().to_string()))
}

/// Parses one comparator spelling.
pub(super) fn comparator(input: Span<'_>) -> PResult<'_, ComparisonKind> {
    // Two-character spellings are tried before their one-character prefixes.
    alt((
        value(ComparisonKind::LessOrEqual, alt((tag("<="), tag("≤")))),
        value(ComparisonKind::LessThan, tag("<")),
        value(ComparisonKind::GreaterOrEqual, alt((tag(">="), tag("≥")))),
        value(ComparisonKind::GreaterThan, tag(">")),
        value(ComparisonKind::NotEqual, tag("≠")),
        value(
            ComparisonKind::NotEqual,
            preceded(char('!'), cut(context("'=' after '!'", char('=')))),
        ),
        value(ComparisonKind::Equal, alt((tag("=="), tag("=")))),
    ))
    .parse(input)
}

/// Parses arithmetic and grouping symbols, including common Unicode forms.
pub(super) fn symbol(input: Span<'_>) -> PResult<'_, TokenKind> {
    alt((
        value(TokenKind::Plus, char('+')),
        value(TokenKind::Minus, alt((char('-'), char('−')))),
        value(TokenKind::Star, alt((char('*'), char('×'), char('·')))),
        value(TokenKind::Slash, alt((char('/'), char('÷')))),
        value(TokenKind::Caret, char('^')),
        value(TokenKind::LParen, char('(')),
        value(TokenKind::RParen, char(')')),
    ))
    .parse(input)
}
