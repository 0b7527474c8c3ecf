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

//! Folding parsed inequalities into canonical quadratic form.
//!
//! Both sides are folded into [`Polynomial`]s in one pass over the tree;
//! degree and domain violations are reported from the fold itself. The
//! right-hand side is then subtracted from the left.

mod poly;

use crate::ast::{BinOp, Expr, ExprKind, Inequality, SourceSpan};
use crate::config::SolverConfig;
use crate::diagnostics::InequalityError;
use crate::model::CanonicalQuadratic;

pub use poly::{MAX_DEGREE, Polynomial};

/// Variable name used when the input contains no identifier.
const DEFAULT_VARIABLE: &str = "x";

/// Normalizes `lhs cmp rhs` into `a·x² + b·x + c cmp 0`.
///
/// `source` is the original text, used only for diagnostics.
pub fn normalize(
    source: &str,
    inequality: &Inequality,
    config: &SolverConfig,
) -> Result<CanonicalQuadratic, InequalityError> {
    let mut ctx = FoldContext::new(source, config);
    let lhs = ctx.fold(&inequality.lhs)?;
    let rhs = ctx.fold(&inequality.rhs)?;
    let span = inequality.lhs.span.merge(&inequality.rhs.span);
    let difference = ctx.ensure_finite(lhs - rhs, &span)?;

    let quadratic = CanonicalQuadratic {
        a: difference.coefficient(2),
        b: difference.coefficient(1),
        c: difference.coefficient(0),
        cmp: inequality.cmp,
        variable: ctx
            .variable
            .unwrap_or_else(|| DEFAULT_VARIABLE.to_string()),
    };
    tracing::debug!(
        a = quadratic.a,
        b = quadratic.b,
        c = quadratic.c,
        cmp = %quadratic.cmp,
        variable = %quadratic.variable,
        "normalized inequality"
    );
    Ok(quadratic)
}

/// Fold state for one inequality: the source text and the bound unknown.
struct FoldContext<'a> {
    source: &'a str,
    epsilon: f64,
    pinned: bool,
    variable: Option<String>,
}

impl<'a> FoldContext<'a> {
    fn new(source: &'a str, config: &SolverConfig) -> Self {
        Self {
            source,
            epsilon: config.epsilon,
            pinned: config.variable.is_some(),
            variable: config.variable.clone(),
        }
    }

    /// Recursively folds an expression into a polynomial.
    fn fold(&mut self, expr: &Expr) -> Result<Polynomial, InequalityError> {
        let poly = match &expr.kind {
            ExprKind::Number(v) => Polynomial::constant(*v),
            ExprKind::Variable(name) => {
                self.bind_variable(name, &expr.span)?;
                Polynomial::variable()
            }
            ExprKind::UnaryNeg(inner) => -self.fold(inner)?,
            ExprKind::Binary { op, left, right } => {
                let lhs = self.fold(left)?;
                let rhs = self.fold(right)?;
                match op {
                    BinOp::Add => lhs + rhs,
                    BinOp::Sub => lhs - rhs,
                    BinOp::Mul => lhs.checked_mul(rhs).map_err(|degree| {
                        self.degree_error(degree, &expr.span)
                    })?,
                    BinOp::Div => self.fold_div(lhs, rhs, right, &expr.span)?,
                    BinOp::Pow => self.fold_pow(lhs, rhs, right, &expr.span)?,
                }
            }
        };
        self.ensure_finite(poly, &expr.span)
    }

    /// Division is only defined by a constant divisor.
    fn fold_div(
        &self,
        dividend: Polynomial,
        divisor: Polynomial,
        divisor_expr: &Expr,
        span: &SourceSpan,
    ) -> Result<Polynomial, InequalityError> {
        if contains_variable(divisor_expr) {
            return Err(InequalityError::domain(
                "the variable cannot appear in a divisor",
                self.source,
                &divisor_expr.span,
            ));
        }
        // A divisor without the variable always folds to a constant.
        let divisor = divisor.as_constant().unwrap_or_default();
        if divisor.abs() <= self.epsilon {
            return Err(InequalityError::domain(
                "division by zero",
                self.source,
                span,
            ));
        }
        Ok(dividend.divide(divisor))
    }

    /// Powers: any real exponent on a constant base, `0..=2` on the variable.
    fn fold_pow(
        &self,
        base: Polynomial,
        exponent: Polynomial,
        exponent_expr: &Expr,
        span: &SourceSpan,
    ) -> Result<Polynomial, InequalityError> {
        if contains_variable(exponent_expr) {
            return Err(InequalityError::degree(
                "exponent must be a constant",
                self.source,
                &exponent_expr.span,
            ));
        }
        let exponent = exponent.as_constant().unwrap_or_default();

        if let Some(value) = base.as_constant() {
            return Ok(Polynomial::constant(value.powf(exponent)));
        }

        let rounded = exponent.round();
        if rounded < 0.0 || (exponent - rounded).abs() > self.epsilon {
            return Err(InequalityError::degree(
                format!(
                    "exponent {exponent} on the variable must be a non-negative integer"
                ),
                self.source,
                &exponent_expr.span,
            ));
        }

        let base_degree = base.degree().unwrap_or(0);
        let power = rounded as usize;
        if base_degree.saturating_mul(power) > MAX_DEGREE {
            return Err(self.degree_error(base_degree.saturating_mul(power), span));
        }

        let mut result = Polynomial::constant(1.0);
        for _ in 0..power {
            result = result
                .checked_mul(base)
                .map_err(|degree| self.degree_error(degree, span))?;
        }
        Ok(result)
    }

    /// Records the unknown's name; a second distinct name is rejected.
    fn bind_variable(&mut self, name: &str, span: &SourceSpan) -> Result<(), InequalityError> {
        match &self.variable {
            Some(bound) if bound == name => Ok(()),
            Some(bound) if self.pinned => Err(InequalityError::domain(
                format!("unknown variable '{name}': expected '{bound}'"),
                self.source,
                span,
            )),
            Some(bound) => Err(InequalityError::domain(
                format!("expected a single variable '{bound}', found '{name}'"),
                self.source,
                span,
            )),
            None => {
                self.variable = Some(name.to_string());
                Ok(())
            }
        }
    }

    fn ensure_finite(
        &self,
        poly: Polynomial,
        span: &SourceSpan,
    ) -> Result<Polynomial, InequalityError> {
        if poly.is_finite() {
            Ok(poly)
        } else {
            Err(InequalityError::domain(
                "expression evaluates to a non-finite value",
                self.source,
                span,
            ))
        }
    }

    fn degree_error(&self, degree: usize, span: &SourceSpan) -> InequalityError {
        InequalityError::degree(
            format!("term of degree {degree} exceeds the supported maximum of {MAX_DEGREE}"),
            self.source,
            span,
        )
    }
}

/// Returns whether the unknown occurs anywhere in `expr`.
fn contains_variable(expr: &Expr) -> bool {
    match &expr.kind {
        ExprKind::Number(_) => false,
        ExprKind::Variable(_) => true,
        ExprKind::UnaryNeg(inner) => contains_variable(inner),
        ExprKind::Binary { left, right, .. } => {
            contains_variable(left) || contains_variable(right)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::ComparisonKind;
    use crate::diagnostics::ErrorKind;
    use crate::parser::parse_inequality;

    fn normalize_with(
        source: &str,
        config: &SolverConfig,
    ) -> Result<CanonicalQuadratic, InequalityError> {
        let inequality =
            parse_inequality(source, config.max_depth).expect("parse should succeed");
        normalize(source, &inequality, config)
    }

    fn coefficients(source: &str) -> (f64, f64, f64, ComparisonKind) {
        let q = normalize_with(source, &SolverConfig::default()).expect("normalize should succeed");
        (q.a, q.b, q.c, q.cmp)
    }

    fn error_kind(source: &str) -> (ErrorKind, String) {
        let err = normalize_with(source, &SolverConfig::default())
            .expect_err("normalize should fail");
        (err.kind(), err.diagnostic().message.clone())
    }

    #[test]
    fn collects_like_powers() {
        assert_eq!(
            coefficients("x^2 - 3x + 2 > 0"),
            (1.0, -3.0, 2.0, ComparisonKind::GreaterThan)
        );
        assert_eq!(
            coefficients("x^2 + 5x + 4 + 3x <= 0"),
            (1.0, 8.0, 4.0, ComparisonKind::LessOrEqual)
        );
    }

    #[test]
    fn moves_right_side_to_the_left() {
        assert_eq!(
            coefficients("x^2 + 5x + 2 < -x^2 - 2"),
            (2.0, 5.0, 4.0, ComparisonKind::LessThan)
        );
    }

    #[test]
    fn expands_products_and_powers() {
        let (a, b, c, _) = coefficients("(x+1)^2 >= 0");
        assert_eq!((a, b, c), (1.0, 2.0, 1.0));
        let (a, b, c, _) = coefficients("(x - 1)(x + 1) * 2 = 0");
        assert_eq!((a, b, c), (2.0, 0.0, -2.0));
        let (a, b, c, _) = coefficients("x^0 + x^1 < 3");
        assert_eq!((a, b, c), (0.0, 1.0, -2.0));
    }

    #[test]
    fn folds_constants_and_constant_division() {
        let (a, b, c, _) = coefficients("x/2 + 2^3 > 4/8");
        assert_eq!((a, b, c), (0.0, 0.5, 7.5));
        let (_, _, c, _) = coefficients("x + 4^0.5 > 0");
        assert_eq!(c, 2.0);
        let (a, _, _, _) = coefficients("x^2 / (1 + 1) > 0");
        assert_eq!(a, 0.5);
    }

    #[test]
    fn rejects_degree_above_two() {
        for source in ["x^3 - 1 > 0", "x*x*x > 0", "(x^2)^2 > 1", "x^2 * x^2 < 0"] {
            let (kind, message) = error_kind(source);
            assert_eq!(kind, ErrorKind::Degree, "{source}");
            assert!(message.contains("exceeds the supported maximum of 2"), "{source}: {message}");
        }
    }

    #[test]
    fn rejects_unsupported_exponents() {
        let (kind, message) = error_kind("2^x > 1");
        assert_eq!(kind, ErrorKind::Degree);
        assert!(message.contains("exponent must be a constant"));

        for source in ["x^-1 > 0", "x^0.5 > 0"] {
            let (kind, message) = error_kind(source);
            assert_eq!(kind, ErrorKind::Degree, "{source}");
            assert!(message.contains("non-negative integer"), "{source}: {message}");
        }
    }

    #[test]
    fn rejects_variable_in_divisor() {
        let (kind, message) = error_kind("1/x > 0");
        assert_eq!(kind, ErrorKind::Domain);
        assert!(message.contains("divisor"));
        // Structural check: the variable cancels but still appears.
        let (kind, _) = error_kind("1/(x - x) > 0");
        assert_eq!(kind, ErrorKind::Domain);
    }

    #[test]
    fn rejects_division_by_zero_and_non_finite_values() {
        let (kind, message) = error_kind("x / (2 - 2) > 0");
        assert_eq!(kind, ErrorKind::Domain);
        assert_eq!(message, "division by zero");

        // Cancellation leaves a rounding residue, not an exact zero.
        let (kind, message) = error_kind("x / (0.1 + 0.2 - 0.3) > 1");
        assert_eq!(kind, ErrorKind::Domain);
        assert_eq!(message, "division by zero");

        let (kind, message) = error_kind("x + 0^-1 > 0");
        assert_eq!(kind, ErrorKind::Domain);
        assert!(message.contains("non-finite"));

        let (kind, _) = error_kind("x + 10^400 > 0");
        assert_eq!(kind, ErrorKind::Domain);
    }

    #[test]
    fn rejects_second_variable() {
        let (kind, message) = error_kind("x^2 + y > 0");
        assert_eq!(kind, ErrorKind::Domain);
        assert_eq!(message, "expected a single variable 'x', found 'y'");
    }

    #[test]
    fn honours_pinned_variable() {
        let config = SolverConfig::default().with_variable("t");
        let q = normalize_with("t^2 - 4 < 0", &config).expect("t is the pinned variable");
        assert_eq!(q.variable, "t");
        assert_eq!((q.a, q.b, q.c), (1.0, 0.0, -4.0));

        let err = normalize_with("x^2 - 4 < 0", &config).expect_err("x is not pinned");
        assert_eq!(err.kind(), ErrorKind::Domain);
        assert_eq!(err.diagnostic().message, "unknown variable 'x': expected 't'");
    }

    #[test]
    fn keeps_first_seen_variable_name() {
        let q = normalize_with("y^2 > y", &SolverConfig::default()).expect("single variable");
        assert_eq!(q.variable, "y");
        let q = normalize_with("1 < 2", &SolverConfig::default()).expect("constant inequality");
        assert_eq!(q.variable, "x");
        assert_eq!((q.a, q.b, q.c), (0.0, 0.0, -1.0));
    }

    #[test]
    fn degree_error_points_at_offending_term() {
        let err = normalize_with("2 + x^3 > 0", &SolverConfig::default())
            .expect_err("degree 3");
        assert_eq!(err.diagnostic().column, 5);
        assert_eq!(err.diagnostic().pointer, "    ^^^");
    }
}
