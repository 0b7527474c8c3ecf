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

//! Solver options.

/// Default tolerance for every "effectively zero" decision.
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// Default parser nesting limit.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Default number of significant digits for non-integral values.
pub const DEFAULT_SIGNIFICANT_DIGITS: usize = 6;

/// How a solution set is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Notation {
    /// Interval notation: `(-∞, 1) ∪ [2, ∞)`.
    #[default]
    Interval,
    /// Relations over the variable: `x < 1 or x ≥ 2`.
    Relation,
}

/// Options shared by every pipeline stage.
///
/// A single `epsilon` drives the `a ≈ 0` test, the discriminant sign test,
/// the interval merge test and integral-value rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    /// Tolerance used to treat near-zero values as zero.
    pub epsilon: f64,
    /// Maximum expression nesting depth accepted by the parser. Expression
    /// trees may grow at most sixteen times this tall.
    pub max_depth: usize,
    /// Required variable name; `None` accepts any single identifier.
    pub variable: Option<String>,
    /// Output notation.
    pub notation: Notation,
    /// Significant digits used for non-integral values.
    pub significant_digits: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            max_depth: DEFAULT_MAX_DEPTH,
            variable: None,
            notation: Notation::Interval,
            significant_digits: DEFAULT_SIGNIFICANT_DIGITS,
        }
    }
}

impl SolverConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the shared tolerance. Negative or non-finite values are ignored.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        if epsilon.is_finite() && epsilon >= 0.0 {
            self.epsilon = epsilon;
        }
        self
    }

    /// Sets the parser nesting limit (at least 1).
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth.max(1);
        self
    }

    /// Pins the variable name.
    pub fn with_variable(mut self, name: impl Into<String>) -> Self {
        self.variable = Some(name.into());
        self
    }

    /// Sets the output notation.
    pub fn with_notation(mut self, notation: Notation) -> Self {
        self.notation = notation;
        self
    }

    /// Sets significant digits (clamped to `1..=17`).
    pub fn with_significant_digits(mut self, digits: usize) -> Self {
        self.significant_digits = digits.clamp(1, 17);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_defaults() {
        let config = SolverConfig::new()
            .with_epsilon(1e-6)
            .with_max_depth(8)
            .with_variable("t")
            .with_notation(Notation::Relation)
            .with_significant_digits(4);
        assert_eq!(config.epsilon, 1e-6);
        assert_eq!(config.max_depth, 8);
        assert_eq!(config.variable.as_deref(), Some("t"));
        assert_eq!(config.notation, Notation::Relation);
        assert_eq!(config.significant_digits, 4);
    }

    #[test]
    fn builder_rejects_unusable_values() {
        let config = SolverConfig::new()
            .with_epsilon(f64::NAN)
            .with_epsilon(-1.0)
            .with_max_depth(0)
            .with_significant_digits(40);
        assert_eq!(config.epsilon, DEFAULT_EPSILON);
        assert_eq!(config.max_depth, 1);
        assert_eq!(config.significant_digits, 17);
    }
}
