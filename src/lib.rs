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

//! Single-variable quadratic inequality solver.
//!
//! This crate provides:
//! - A `nom`-based lexer and a recursive-descent parser with source spans.
//! - Folding of both sides into canonical form `a·x² + b·x + c cmp 0`.
//! - Discriminant analysis producing a canonical union of intervals.
//! - Interval-notation (or relation-notation) rendering.
//! - Diagnostics with line/column/caret output.
//!
//! # Pipeline
//!
//! 1. [`tokenize`] the input.
//! 2. [`parse_tokens`] into an [`Inequality`] AST.
//! 3. [`normalize`] into a [`CanonicalQuadratic`].
//! 4. [`solve`] into a [`SolutionSet`].
//! 5. [`format`] the set.
//!
//! Every stage before the solver returns `Result<_, InequalityError>`; the
//! solver and formatter are total. [`solve_text`] collapses the result to a
//! plain string and never panics:
//!
//! ```
//! assert_eq!(quadratic_inequality::solve_text("x^2-3x+2>0"), "(-∞, 1) ∪ (2, ∞)");
//! assert_eq!(quadratic_inequality::solve_text("x^2-2x+1<=0"), "{1}");
//! ```

mod ast;
mod config;
mod diagnostics;
mod format;
mod model;
mod normalize;
mod parser;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use ast::{BinOp, ComparisonKind, Expr, ExprKind, Inequality, SourceSpan};
pub use config::{
    DEFAULT_EPSILON, DEFAULT_MAX_DEPTH, DEFAULT_SIGNIFICANT_DIGITS, Notation, SolverConfig,
};
pub use diagnostics::{Diagnostic, ErrorKind, InequalityError};
pub use format::{SetFormatter, format};
pub use model::{
    Bound, CanonicalQuadratic, Interval, RootStructure, SolutionSet, classify, solve,
};
pub use normalize::{MAX_DEGREE, Polynomial, normalize};
pub use parser::{Token, TokenKind, parse_inequality, parse_tokens, tokenize};

/// Result of a successful run: the canonical form and its solution set.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub quadratic: CanonicalQuadratic,
    pub set: SolutionSet,
}

/// Runs the full pipeline with a fixed configuration.
///
/// A `Solver` holds no state besides its configuration, so one instance can
/// serve any number of calls, including concurrent ones.
#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Lexes, parses, normalizes and solves `source`.
    pub fn try_solve(&self, source: &str) -> Result<Solution, InequalityError> {
        let span = tracing::debug_span!("solve", input = source);
        let _guard = span.enter();

        let tokens = tokenize(source)?;
        tracing::debug!(tokens = tokens.len(), "tokenized input");
        let inequality = parse_tokens(source, &tokens, self.config.max_depth)?;
        let quadratic = normalize(source, &inequality, &self.config)?;
        let set = solve(&quadratic, self.config.epsilon);
        Ok(Solution { quadratic, set })
    }

    /// Renders a solution with this solver's notation and precision.
    pub fn format(&self, solution: &Solution) -> String {
        SetFormatter::new(&self.config, &solution.quadratic.variable).format(&solution.set)
    }

    /// Returns either the rendered solution set or the one-line error message.
    pub fn solve_text(&self, source: &str) -> String {
        match self.try_solve(source) {
            Ok(solution) => self.format(&solution),
            Err(err) => {
                tracing::debug!(kind = %err.kind(), "rejected input");
                err.to_string()
            }
        }
    }
}

/// Solves `source` with the default configuration.
///
/// Returns the solution in interval notation, or a message such as
/// `"degree error: term of degree 3 exceeds the supported maximum of 2 (column 1)"`.
pub fn solve_text(source: &str) -> String {
    Solver::default().solve_text(source)
}
