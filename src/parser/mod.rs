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

//! Lexer and parser for inequalities.
//!
//! The grammar supports:
//! - unsigned decimal literals and a single-identifier unknown
//! - unary `-` / `+`
//! - binary `+ - * / ^` and juxtaposition (`3x`, `2(x - 1)`)
//! - exactly one top-level comparator: `<`, `<=`, `>`, `>=`, `=`, `==`, `!=`
//!   (or `≤`, `≥`, `≠`)
//!
//! Lexing is done with `nom` over a located span; parsing is a recursive
//! descent over the token slice with a bounded nesting depth.

mod expr;
mod lexer;
mod utils;

use crate::ast::{Inequality, SourceSpan, Span};
use crate::diagnostics::{Diagnostic, InequalityError};
use nom::{
    IResult,
    error::{VerboseError, VerboseErrorKind},
};

pub use self::lexer::{Token, TokenKind, tokenize};
use self::expr::TokenParser;

type PResult<'a, O> = IResult<Span<'a>, O, VerboseError<Span<'a>>>;

/// Parses a token sequence produced by [`tokenize`] into an [`Inequality`].
///
/// `source` is only used to render diagnostics.
pub fn parse_tokens(
    source: &str,
    tokens: &[Token],
    max_depth: usize,
) -> Result<Inequality, InequalityError> {
    TokenParser::new(source, tokens, max_depth).parse_inequality()
}

/// Tokenizes and parses `source` in one step.
pub fn parse_inequality(source: &str, max_depth: usize) -> Result<Inequality, InequalityError> {
    let tokens = tokenize(source)?;
    parse_tokens(source, &tokens, max_depth)
}

/// Converts a `nom` verbose error raised at `at` to a syntax error.
fn lex_error(
    err: nom::Err<VerboseError<Span<'_>>>,
    source: &str,
    at: Span<'_>,
) -> InequalityError {
    match err {
        nom::Err::Incomplete(_) => InequalityError::Syntax(Diagnostic::message_only("incomplete input")),
        // Committed branches carry a context naming what was expected.
        nom::Err::Failure(e) => {
            if let Some((span, kind)) = e.errors.last() {
                let detail = match kind {
                    VerboseErrorKind::Context(ctx) => format!("expected {ctx}"),
                    VerboseErrorKind::Char(c) => format!("expected '{c}'"),
                    VerboseErrorKind::Nom(kind) => format!("invalid token near {kind:?}"),
                };
                InequalityError::syntax(detail, source, &char_span(*span))
            } else {
                InequalityError::syntax("invalid token", source, &char_span(at))
            }
        }
        // Every alternative failed at the token start.
        nom::Err::Error(_) => {
            let message = match at.fragment().chars().next() {
                Some(c) => format!("unexpected character '{c}'"),
                None => "unexpected end of input".to_string(),
            };
            InequalityError::syntax(message, source, &char_span(at))
        }
    }
}

/// Span covering the single character at `at` (zero-width at end of input).
fn char_span(at: Span<'_>) -> SourceSpan {
    let width = at.fragment().chars().next().map_or(0, char::len_utf8);
    let start = at.location_offset();
    SourceSpan {
        start,
        end: start + width,
        line: at.location_line() as usize,
        column: at.get_utf8_column(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{BinOp, ComparisonKind, Expr, ExprKind};
    use crate::config::DEFAULT_MAX_DEPTH;
    use crate::diagnostics::ErrorKind;

    fn parse(source: &str) -> Inequality {
        parse_inequality(source, DEFAULT_MAX_DEPTH).expect("parse should succeed")
    }

    fn parse_err(source: &str) -> InequalityError {
        parse_inequality(source, DEFAULT_MAX_DEPTH).expect_err("parse should fail")
    }

    /// Renders the tree fully parenthesized for compact assertions.
    fn sexpr(expr: &Expr) -> String {
        match &expr.kind {
            ExprKind::Number(v) => format!("{v}"),
            ExprKind::Variable(name) => name.clone(),
            ExprKind::UnaryNeg(inner) => format!("(neg {})", sexpr(inner)),
            ExprKind::Binary { op, left, right } => {
                let op = match op {
                    BinOp::Add => "+",
                    BinOp::Sub => "-",
                    BinOp::Mul => "*",
                    BinOp::Div => "/",
                    BinOp::Pow => "^",
                };
                format!("({op} {} {})", sexpr(left), sexpr(right))
            }
        }
    }

    #[test]
    fn parses_standard_precedence() {
        let ineq = parse("x^2 - 3x + 2 > 0");
        assert_eq!(sexpr(&ineq.lhs), "(+ (- (^ x 2) (* 3 x)) 2)");
        assert_eq!(ineq.cmp, ComparisonKind::GreaterThan);
        assert_eq!(sexpr(&ineq.rhs), "0");
        assert_eq!(ineq.cmp_span.column, 14);
    }

    #[test]
    fn unary_minus_applies_to_the_power() {
        let ineq = parse("-x^2 - 1 > 0");
        assert_eq!(sexpr(&ineq.lhs), "(- (neg (^ x 2)) 1)");
    }

    #[test]
    fn power_is_right_associative_and_accepts_signed_exponent() {
        assert_eq!(sexpr(&parse("2^3^2 > x").lhs), "(^ 2 (^ 3 2))");
        assert_eq!(sexpr(&parse("x^-1 > 0").lhs), "(^ x (neg 1))");
    }

    #[test]
    fn parses_juxtaposition() {
        assert_eq!(sexpr(&parse("2(x+1)(x-1) <= 0").lhs), "(* (* 2 (+ x 1)) (- x 1))");
        assert_eq!(sexpr(&parse("x(x - 4) = 0").lhs), "(* x (- x 4))");
        assert_eq!(sexpr(&parse("4x/2 != 1").lhs), "(/ (* 4 x) 2)");
    }

    #[test]
    fn parentheses_span_covers_brackets() {
        let ineq = parse("(x + 1) >= 2");
        assert_eq!(ineq.lhs.span.start, 0);
        assert_eq!(ineq.lhs.span.end, 7);
    }

    #[test]
    fn parses_every_comparator_spelling() {
        for (src, kind) in [
            ("x < 1", ComparisonKind::LessThan),
            ("x <= 1", ComparisonKind::LessOrEqual),
            ("x ≤ 1", ComparisonKind::LessOrEqual),
            ("x > 1", ComparisonKind::GreaterThan),
            ("x >= 1", ComparisonKind::GreaterOrEqual),
            ("x ≥ 1", ComparisonKind::GreaterOrEqual),
            ("x = 1", ComparisonKind::Equal),
            ("x == 1", ComparisonKind::Equal),
            ("x != 1", ComparisonKind::NotEqual),
            ("x ≠ 1", ComparisonKind::NotEqual),
        ] {
            assert_eq!(parse(src).cmp, kind, "{src}");
        }
    }

    #[test]
    fn reports_grammar_violations() {
        let cases = [
            ("empty input", "", "empty input"),
            ("no comparator", "x^2 + 1", "missing comparator"),
            ("two comparators", "0 < x < 1", "only one comparator"),
            ("missing lhs", "> 0", "missing expression before comparator"),
            ("missing rhs", "x >", "missing expression after comparator"),
            ("dangling operator", "x + > 0", "missing operand before comparator"),
            ("trailing operator", "x > 1 +", "missing operand at end of input"),
            ("unclosed group", "(x + 1 >= 0", "comparator is not allowed inside parentheses"),
            ("unclosed at end", "x > (1", "unclosed '('"),
            ("unmatched close", "x + 1) > 0", "unmatched ')'"),
            ("comparator in group", "(x > 1) = 0", "comparator is not allowed inside parentheses"),
            ("empty group", "() > 0", "empty parentheses"),
            ("trailing number", "x > 1 2", "unexpected number 2"),
            ("number after variable", "x 2 > 0", "expected a comparator, found number 2"),
        ];
        for (case, source, needle) in cases {
            let err = parse_err(source);
            assert_eq!(err.kind(), ErrorKind::Syntax, "{case}");
            assert!(
                err.diagnostic().message.contains(needle),
                "{case}: unexpected message '{}'",
                err.diagnostic().message
            );
            assert!(err.diagnostic().pointer.contains('^'), "{case}: missing caret");
        }
    }

    #[test]
    fn enforces_nesting_limit() {
        let deep = format!("{}x{} > 0", "(".repeat(80), ")".repeat(80));
        let err = parse_err(&deep);
        assert!(err.diagnostic().message.contains("nesting exceeds the limit of 64"));

        let shallow = format!("{}x{} > 0", "(".repeat(20), ")".repeat(20));
        assert_eq!(sexpr(&parse(&shallow).lhs), "x");

        let err = parse_inequality("---x > 0", 2).expect_err("three signs exceed depth 2");
        assert!(err.diagnostic().message.contains("limit of 2"));
    }

    #[test]
    fn handles_pathological_sign_chains_without_overflow() {
        let source = format!("{}x > 0", "-".repeat(100_000));
        let err = parse_err(&source);
        assert_eq!(err.kind(), ErrorKind::Syntax);
    }

    #[test]
    fn handles_long_flat_sums_without_overflow() {
        let source = format!("x{} > 0", "+1".repeat(100_000));
        let err = parse_err(&source);
        assert_eq!(err.kind(), ErrorKind::Syntax);
        assert!(err.diagnostic().message.contains("more than 1024 chained operations"));

        let products = format!("x{} > 0", "*2".repeat(100_000));
        assert_eq!(parse_err(&products).kind(), ErrorKind::Syntax);

        let long = format!("x{} > 0", "+1".repeat(500));
        assert_eq!(parse(&long).lhs.height(), 501);
    }

    #[test]
    fn height_limit_scales_with_nesting_budget() {
        let source = format!("x{} > 0", "-1".repeat(40));
        let err = parse_inequality(&source, 2).expect_err("41 terms exceed height 32");
        assert!(err.diagnostic().message.contains("more than 32 chained operations"));
        assert!(parse_inequality(&source, 4).is_ok());
    }
}
