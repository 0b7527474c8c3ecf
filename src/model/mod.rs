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

//! Canonical quadratic form, intervals, solution sets and the solver.

mod interval;
mod set;
mod solve;

use crate::ast::ComparisonKind;
use std::fmt;

pub use interval::{Bound, Interval};
pub use set::SolutionSet;
pub use solve::{RootStructure, classify, solve};

/// `a·x² + b·x + c cmp 0`, equivalent to the parsed inequality.
///
/// All coefficients are finite.
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalQuadratic {
    /// Coefficient of `x²`.
    pub a: f64,
    /// Coefficient of `x`.
    pub b: f64,
    /// Constant term.
    pub c: f64,
    /// Relation against zero.
    pub cmp: ComparisonKind,
    /// Name of the unknown as written in the input (`x` when absent).
    pub variable: String,
}

impl CanonicalQuadratic {
    /// Creates a canonical quadratic over `x`.
    pub fn new(a: f64, b: f64, c: f64, cmp: ComparisonKind) -> Self {
        Self {
            a,
            b,
            c,
            cmp,
            variable: "x".to_string(),
        }
    }

    /// Evaluates the left-hand polynomial at `x`.
    pub fn evaluate(&self, x: f64) -> f64 {
        (self.a * x + self.b) * x + self.c
    }

    /// Same polynomial with a different relation.
    pub fn with_cmp(&self, cmp: ComparisonKind) -> Self {
        Self {
            cmp,
            ..self.clone()
        }
    }
}

impl fmt::Display for CanonicalQuadratic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = &self.variable;
        write!(
            f,
            "{}·{v}² + {}·{v} + {} {} 0",
            self.a, self.b, self.c, self.cmp
        )
    }
}
