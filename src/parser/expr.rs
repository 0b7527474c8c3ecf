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

//! Expression and inequality parser over the token stream.
//!
//! Precedence, loosest first: `+ -`, then `* /` and juxtaposition (`3x`,
//! `2(x+1)`), then unary signs, then right-associative `^`.

use crate::ast::{BinOp, Expr, ExprKind, Inequality, SourceSpan};
use crate::diagnostics::InequalityError;

use super::lexer::{Token, TokenKind};

type ParseResult<T> = Result<T, InequalityError>;

/// Tree height allowed per level of nesting budget.
const HEIGHT_PER_LEVEL: usize = 16;

/// Cursor over a token slice with a nesting budget.
pub(super) struct TokenParser<'a> {
    source: &'a str,
    tokens: &'a [Token],
    pos: usize,
    depth: usize,
    max_depth: usize,
}

impl<'a> TokenParser<'a> {
    pub(super) fn new(source: &'a str, tokens: &'a [Token], max_depth: usize) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
            depth: 0,
            max_depth,
        }
    }

    /// Parses `expr comparator expr` and requires the whole stream be consumed.
    pub(super) fn parse_inequality(mut self) -> ParseResult<Inequality> {
        if self.tokens.is_empty() {
            return Err(
                self.error_at_end("empty input: expected an inequality such as 'x^2 - 1 > 0'")
            );
        }

        let lhs = self.parse_side("before")?;
        let (cmp, cmp_span) = match self.peek() {
            Some(TokenKind::Comparator(kind)) => {
                let kind = *kind;
                let span = self.advance_span();
                (kind, span)
            }
            Some(TokenKind::RParen) => {
                return Err(self.error_at_current("unmatched ')'"));
            }
            Some(other) => {
                let message = format!("expected a comparator, found {other}");
                return Err(self.error_at_current(message));
            }
            None => {
                return Err(self.error_at_end(
                    "missing comparator: expected one of <, <=, >, >=, =, !=",
                ));
            }
        };
        let rhs = self.parse_side("after")?;

        match self.peek() {
            None => Ok(Inequality {
                lhs,
                cmp,
                rhs,
                cmp_span,
            }),
            Some(TokenKind::Comparator(_)) => {
                Err(self.error_at_current("only one comparator is allowed"))
            }
            Some(TokenKind::RParen) => Err(self.error_at_current("unmatched ')'")),
            Some(other) => {
                let message = format!("unexpected {other} after complete expression");
                Err(self.error_at_current(message))
            }
        }
    }

    /// Parses one side of the comparator.
    fn parse_side(&mut self, position: &str) -> ParseResult<Expr> {
        match self.peek() {
            None | Some(TokenKind::Comparator(_)) => {
                let message = format!("missing expression {position} comparator");
                Err(self.error_at_current(message))
            }
            Some(_) => self.parse_add_sub(),
        }
    }

    /// Parses left-associative `+`/`-`.
    fn parse_add_sub(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_mul_div()?;
        loop {
            let op = match self.peek() {
                Some(TokenKind::Plus) => BinOp::Add,
                Some(TokenKind::Minus) => BinOp::Sub,
                _ => break,
            };
            self.pos += 1;
            // Left-associative fold: `a-b-c` becomes `(a-b)-c`.
            let right = self.parse_mul_div()?;
            left = self.bounded(Expr::binary(op, left, right))?;
        }
        Ok(left)
    }

    /// Parses left-associative `*`/`/` and implicit multiplication.
    fn parse_mul_div(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_unary()?;
        loop {
            let op = match self.peek() {
                Some(TokenKind::Star) => {
                    self.pos += 1;
                    BinOp::Mul
                }
                Some(TokenKind::Slash) => {
                    self.pos += 1;
                    BinOp::Div
                }
                // Juxtaposition only when the right operand cannot be read as
                // a separate number: `3x`, `x(x+1)`, `(x+1)(x-1)`.
                Some(TokenKind::Variable(_)) | Some(TokenKind::LParen) => BinOp::Mul,
                _ => break,
            };
            let right = self.parse_unary()?;
            left = self.bounded(Expr::binary(op, left, right))?;
        }
        Ok(left)
    }

    /// Parses unary sign chains (`--x`, `+x`).
    fn parse_unary(&mut self) -> ParseResult<Expr> {
        match self.peek() {
            Some(TokenKind::Minus) => {
                let start = self.advance_span();
                let inner = self.nested(&start, |p| p.parse_unary())?;
                let span = start.merge(&inner.span);
                self.bounded(Expr::negated(inner, span))
            }
            Some(TokenKind::Plus) => {
                let start = self.advance_span();
                self.nested(&start, |p| p.parse_unary())
            }
            _ => self.parse_power(),
        }
    }

    /// Parses right-associative `^`; the exponent may carry its own sign.
    fn parse_power(&mut self) -> ParseResult<Expr> {
        let base = self.parse_primary()?;
        if !matches!(self.peek(), Some(TokenKind::Caret)) {
            return Ok(base);
        }
        let caret = self.advance_span();
        let exponent = self.nested(&caret, |p| p.parse_unary())?;
        self.bounded(Expr::binary(BinOp::Pow, base, exponent))
    }

    /// Parses expression atoms.
    fn parse_primary(&mut self) -> ParseResult<Expr> {
        let tokens = self.tokens;
        let Some(token) = tokens.get(self.pos) else {
            return Err(self.error_at_end("missing operand at end of input"));
        };
        let span = token.span.clone();
        match &token.kind {
            TokenKind::Number(value) => {
                self.pos += 1;
                Ok(Expr::leaf(ExprKind::Number(*value), span))
            }
            TokenKind::Variable(name) => {
                self.pos += 1;
                Ok(Expr::leaf(ExprKind::Variable(name.clone()), span))
            }
            TokenKind::LParen => {
                self.pos += 1;
                self.nested(&span, |p| p.parse_group(span.clone()))
            }
            TokenKind::RParen => Err(self.error_at_current("missing operand before ')'")),
            TokenKind::Comparator(_) => {
                Err(self.error_at_current("missing operand before comparator"))
            }
            other => {
                let message = format!("missing operand before {other}");
                Err(self.error_at_current(message))
            }
        }
    }

    /// Parses the inside of `( ... )`; the opening token is already consumed.
    fn parse_group(&mut self, open: SourceSpan) -> ParseResult<Expr> {
        if matches!(self.peek(), Some(TokenKind::RParen)) {
            return Err(self.error_at_current("empty parentheses"));
        }
        let mut inner = self.parse_add_sub()?;
        match self.peek() {
            Some(TokenKind::RParen) => {
                let close = self.advance_span();
                // Preserve outer range for better diagnostics around parenthesized terms.
                inner.span = open.merge(&close);
                Ok(inner)
            }
            Some(TokenKind::Comparator(_)) => Err(self
                .error_at_current("comparator is not allowed inside parentheses")),
            Some(other) => {
                let message = format!("expected ')', found {other}");
                Err(self.error_at_current(message))
            }
            None => Err(InequalityError::syntax("unclosed '('", self.source, &open)),
        }
    }

    /// Runs `f` one nesting level deeper, failing once `max_depth` is reached.
    fn nested<T>(
        &mut self,
        anchor: &SourceSpan,
        f: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<T> {
        if self.depth >= self.max_depth {
            return Err(InequalityError::syntax(
                format!("expression nesting exceeds the limit of {}", self.max_depth),
                self.source,
                anchor,
            ));
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    /// Rejects `expr` once its tree is taller than the height limit.
    ///
    /// Flat chains such as `x+1+1+...` never nest but still build a
    /// left-deep tree that later passes walk recursively.
    fn bounded(&self, expr: Expr) -> ParseResult<Expr> {
        let limit = self.max_height();
        if expr.height() > limit {
            let anchor = match &expr.kind {
                ExprKind::Binary { right, .. } => right.span.clone(),
                _ => expr.span.clone(),
            };
            return Err(InequalityError::syntax(
                format!("expression is too long: more than {limit} chained operations"),
                self.source,
                &anchor,
            ));
        }
        Ok(expr)
    }

    fn max_height(&self) -> usize {
        self.max_depth.saturating_mul(HEIGHT_PER_LEVEL)
    }

    fn peek(&self) -> Option<&'a TokenKind> {
        self.tokens.get(self.pos).map(|token| &token.kind)
    }

    /// Consumes the current token and returns its span.
    fn advance_span(&mut self) -> SourceSpan {
        let span = self.tokens[self.pos].span.clone();
        self.pos += 1;
        span
    }

    fn error_at_current(&self, message: impl Into<String>) -> InequalityError {
        match self.tokens.get(self.pos) {
            Some(token) => InequalityError::syntax(message, self.source, &token.span),
            None => self.error_at_end(message),
        }
    }

    fn error_at_end(&self, message: impl Into<String>) -> InequalityError {
        InequalityError::syntax(message, self.source, &end_span(self.source))
    }
}

/// Zero-width span just past the last character of `source`.
fn end_span(source: &str) -> SourceSpan {
    let line = source.split('\n').count();
    let last_line = source.rsplit('\n').next().unwrap_or("");
    SourceSpan {
        start: source.len(),
        end: source.len(),
        line,
        column: last_line.chars().count() + 1,
    }
}
