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

//! AST definitions for inequalities with precise source spans.
//!
//! The parser creates this AST first. The normalizer then folds both sides
//! into polynomial coefficients.

use nom_locate::LocatedSpan;
use std::fmt;

/// Lexer input span type carrying byte offsets and line/column info.
pub type Span<'a> = LocatedSpan<&'a str>;

/// Byte range of a token or subexpression plus its 1-based position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSpan {
    pub start: usize,
    pub end: usize,
    pub line: usize,
    /// Counted in characters, not bytes.
    pub column: usize,
}

impl SourceSpan {
    /// Creates a source span from lexer start/end positions.
    pub fn from_bounds(start: Span<'_>, end: Span<'_>) -> Self {
        Self {
            start: start.location_offset(),
            end: end.location_offset(),
            line: start.location_line() as usize,
            column: start.get_utf8_column(),
        }
    }

    /// Returns span length in bytes.
    pub(crate) fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns a span that starts at `self` and ends at `other`.
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            start: self.start,
            end: other.end,
            line: self.line,
            column: self.column,
        }
    }
}

/// Relation between the two sides of an inequality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonKind {
    /// `<`
    LessThan,
    /// `<=` or `≤`
    LessOrEqual,
    /// `>`
    GreaterThan,
    /// `>=` or `≥`
    GreaterOrEqual,
    /// `=` or `==`
    Equal,
    /// `!=` or `≠`
    NotEqual,
}

impl ComparisonKind {
    /// All comparison kinds, in declaration order.
    pub const ALL: [ComparisonKind; 6] = [
        ComparisonKind::LessThan,
        ComparisonKind::LessOrEqual,
        ComparisonKind::GreaterThan,
        ComparisonKind::GreaterOrEqual,
        ComparisonKind::Equal,
        ComparisonKind::NotEqual,
    ];

    /// Returns the relation obtained by multiplying both sides by a negative
    /// number (`<` becomes `>`); `=` and `!=` are unchanged.
    pub fn reversed(self) -> Self {
        match self {
            ComparisonKind::LessThan => ComparisonKind::GreaterThan,
            ComparisonKind::LessOrEqual => ComparisonKind::GreaterOrEqual,
            ComparisonKind::GreaterThan => ComparisonKind::LessThan,
            ComparisonKind::GreaterOrEqual => ComparisonKind::LessOrEqual,
            ComparisonKind::Equal => ComparisonKind::Equal,
            ComparisonKind::NotEqual => ComparisonKind::NotEqual,
        }
    }

    /// Returns the logical complement (`<` becomes `>=`).
    pub fn negated(self) -> Self {
        match self {
            ComparisonKind::LessThan => ComparisonKind::GreaterOrEqual,
            ComparisonKind::LessOrEqual => ComparisonKind::GreaterThan,
            ComparisonKind::GreaterThan => ComparisonKind::LessOrEqual,
            ComparisonKind::GreaterOrEqual => ComparisonKind::LessThan,
            ComparisonKind::Equal => ComparisonKind::NotEqual,
            ComparisonKind::NotEqual => ComparisonKind::Equal,
        }
    }

    /// Evaluates `value cmp 0`, treating `|value| <= epsilon` as zero.
    pub fn holds_against_zero(self, value: f64, epsilon: f64) -> bool {
        let zero = value.abs() <= epsilon;
        match self {
            ComparisonKind::LessThan => !zero && value < 0.0,
            ComparisonKind::LessOrEqual => zero || value < 0.0,
            ComparisonKind::GreaterThan => !zero && value > 0.0,
            ComparisonKind::GreaterOrEqual => zero || value > 0.0,
            ComparisonKind::Equal => zero,
            ComparisonKind::NotEqual => !zero,
        }
    }

    /// Canonical ASCII spelling.
    pub fn symbol(self) -> &'static str {
        match self {
            ComparisonKind::LessThan => "<",
            ComparisonKind::LessOrEqual => "<=",
            ComparisonKind::GreaterThan => ">",
            ComparisonKind::GreaterOrEqual => ">=",
            ComparisonKind::Equal => "=",
            ComparisonKind::NotEqual => "!=",
        }
    }
}

impl fmt::Display for ComparisonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    /// Addition (`+`).
    Add,
    /// Subtraction (`-`).
    Sub,
    /// Multiplication (`*` or juxtaposition).
    Mul,
    /// Division (`/`).
    Div,
    /// Exponentiation (`^`).
    Pow,
}

/// Arithmetic expression tree over one unknown.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    /// Unsigned literal; signs are `UnaryNeg` nodes.
    Number(f64),
    /// Reference to the unknown.
    Variable(String),
    /// `-expr`
    UnaryNeg(Box<Expr>),
    /// `left op right`
    Binary {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

/// Expression node with the source range it was parsed from.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: SourceSpan,
    /// Levels in the tree rooted here; a leaf has height 1.
    height: usize,
}

impl Expr {
    pub(crate) fn leaf(kind: ExprKind, span: SourceSpan) -> Self {
        Expr {
            kind,
            span,
            height: 1,
        }
    }

    pub(crate) fn negated(inner: Expr, span: SourceSpan) -> Self {
        let height = inner.height + 1;
        Expr {
            kind: ExprKind::UnaryNeg(Box::new(inner)),
            span,
            height,
        }
    }

    pub(crate) fn binary(op: BinOp, left: Expr, right: Expr) -> Self {
        let span = left.span.merge(&right.span);
        let height = left.height.max(right.height) + 1;
        Expr {
            kind: ExprKind::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            },
            span,
            height,
        }
    }

    /// Longest path from this node down to a leaf, counted in nodes.
    pub(crate) fn height(&self) -> usize {
        self.height
    }
}

/// A parsed inequality: `lhs cmp rhs`.
#[derive(Debug, Clone, PartialEq)]
pub struct Inequality {
    /// Left-hand side.
    pub lhs: Expr,
    /// Relation between the sides.
    pub cmp: ComparisonKind,
    /// Right-hand side.
    pub rhs: Expr,
    /// Location of the comparator token.
    pub cmp_span: SourceSpan,
}
