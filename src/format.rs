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

//! Rendering solution sets as text.
//!
//! Output depends only on the set and the rendering options; there is no
//! locale handling.

use crate::config::{Notation, SolverConfig};
use crate::model::{Bound, Interval, SolutionSet};

/// Renders `set` in interval notation with the default options.
pub fn format(set: &SolutionSet) -> String {
    SetFormatter::new(&SolverConfig::default(), "x").format(set)
}

/// Rendering options taken from a [`SolverConfig`] plus the variable name
/// used by relation notation.
#[derive(Debug, Clone)]
pub struct SetFormatter<'a> {
    epsilon: f64,
    digits: usize,
    notation: Notation,
    variable: &'a str,
}

impl<'a> SetFormatter<'a> {
    pub fn new(config: &SolverConfig, variable: &'a str) -> Self {
        Self {
            epsilon: config.epsilon,
            digits: config.significant_digits.max(1),
            notation: config.notation,
            variable,
        }
    }

    /// Renders `set` in the configured notation.
    pub fn format(&self, set: &SolutionSet) -> String {
        match self.notation {
            Notation::Interval => self.interval_notation(set),
            Notation::Relation => self.relation_notation(set),
        }
    }

    fn interval_notation(&self, set: &SolutionSet) -> String {
        if set.is_empty() {
            return "∅".to_string();
        }
        if set.is_all_reals() {
            return "ℝ".to_string();
        }
        set.intervals()
            .iter()
            .map(|iv| self.interval(iv))
            .collect::<Vec<_>>()
            .join(" ∪ ")
    }

    fn interval(&self, iv: &Interval) -> String {
        if iv.is_point() {
            return format!("{{{}}}", self.number(iv.lower().value()));
        }
        let lower = match iv.lower() {
            Bound::Finite { value, closed } => {
                format!("{}{}", if closed { '[' } else { '(' }, self.number(value))
            }
            Bound::NegInfinity | Bound::PosInfinity => "(-∞".to_string(),
        };
        let upper = match iv.upper() {
            Bound::Finite { value, closed } => {
                format!("{}{}", self.number(value), if closed { ']' } else { ')' })
            }
            Bound::NegInfinity | Bound::PosInfinity => "∞)".to_string(),
        };
        format!("{lower}, {upper}")
    }

    fn relation_notation(&self, set: &SolutionSet) -> String {
        if set.is_empty() {
            return "no solution".to_string();
        }
        if set.is_all_reals() {
            return "all real numbers".to_string();
        }
        if let Some(points) = set.excluded_points() {
            let exclusions = points
                .iter()
                .map(|p| format!("{} ≠ {}", self.variable, self.number(*p)))
                .collect::<Vec<_>>()
                .join(" and ");
            return format!("all real numbers with {exclusions}");
        }
        set.intervals()
            .iter()
            .map(|iv| self.relation(iv))
            .collect::<Vec<_>>()
            .join(" or ")
    }

    fn relation(&self, iv: &Interval) -> String {
        let v = self.variable;
        if iv.is_point() {
            return format!("{v} = {}", self.number(iv.lower().value()));
        }
        let lt = |closed: bool| if closed { "≤" } else { "<" };
        match (iv.lower(), iv.upper()) {
            (
                Bound::Finite {
                    value: lo,
                    closed: lo_closed,
                },
                Bound::Finite {
                    value: hi,
                    closed: hi_closed,
                },
            ) => {
                format!(
                    "{} {} {v} {} {}",
                    self.number(lo),
                    lt(lo_closed),
                    lt(hi_closed),
                    self.number(hi)
                )
            }
            (Bound::Finite { value, closed }, _) => {
                let gt = if closed { "≥" } else { ">" };
                format!("{v} {gt} {}", self.number(value))
            }
            (_, Bound::Finite { value, closed }) => {
                format!("{v} {} {}", lt(closed), self.number(value))
            }
            _ => "all real numbers".to_string(),
        }
    }

    /// Formats a finite value.
    ///
    /// Values within `ε·max(1, |v|)` of an integer print as that integer;
    /// everything else keeps the configured number of significant digits
    /// with trailing zeros removed.
    pub fn number(&self, value: f64) -> String {
        let rounded = value.round();
        if (value - rounded).abs() <= self.epsilon * value.abs().max(1.0) {
            return if rounded == 0.0 {
                "0".to_string()
            } else {
                format!("{rounded:.0}")
            };
        }

        let magnitude = value.abs().log10().floor() as i64;
        let decimals = (self.digits as i64 - 1 - magnitude).max(0) as usize;
        let mut text = format!("{value:.decimals$}");
        if text.contains('.') {
            let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
            text.truncate(trimmed);
        }
        if text == "-0" {
            text = "0".to_string();
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn set(pieces: &[(Bound, Bound)]) -> SolutionSet {
        SolutionSet::from_intervals(
            pieces
                .iter()
                .map(|(l, u)| Interval::new(*l, *u).expect("non-empty")),
            EPS,
        )
    }

    fn relation(set: &SolutionSet) -> String {
        let config = SolverConfig::default().with_notation(Notation::Relation);
        SetFormatter::new(&config, "x").format(set)
    }

    #[test]
    fn renders_empty_and_full_line() {
        assert_eq!(format(&SolutionSet::empty()), "∅");
        assert_eq!(format(&SolutionSet::all_reals()), "ℝ");
        assert_eq!(relation(&SolutionSet::empty()), "no solution");
        assert_eq!(relation(&SolutionSet::all_reals()), "all real numbers");
    }

    #[test]
    fn renders_intervals_and_points() {
        let s = set(&[
            (Bound::NegInfinity, Bound::open(1.0)),
            (Bound::closed(2.0), Bound::closed(2.0)),
            (Bound::closed(3.0), Bound::open(4.5)),
            (Bound::open(6.0), Bound::PosInfinity),
        ]);
        assert_eq!(format(&s), "(-∞, 1) ∪ {2} ∪ [3, 4.5) ∪ (6, ∞)");
        assert_eq!(relation(&s), "x < 1 or x = 2 or 3 ≤ x < 4.5 or x > 6");
    }

    #[test]
    fn relation_notation_lists_excluded_points() {
        let s = set(&[
            (Bound::NegInfinity, Bound::open(-1.0)),
            (Bound::open(-1.0), Bound::open(2.0)),
            (Bound::open(2.0), Bound::PosInfinity),
        ]);
        assert_eq!(relation(&s), "all real numbers with x ≠ -1 and x ≠ 2");

        let config = SolverConfig::default().with_notation(Notation::Relation);
        let half_line = set(&[(Bound::closed(0.25), Bound::PosInfinity)]);
        assert_eq!(SetFormatter::new(&config, "t").format(&half_line), "t ≥ 0.25");
    }

    #[test]
    fn numbers_drop_noise_and_trailing_zeros() {
        let f = SetFormatter::new(&SolverConfig::default(), "x");
        assert_eq!(f.number(2.0), "2");
        assert_eq!(f.number(-0.0), "0");
        assert_eq!(f.number(1e-12), "0");
        assert_eq!(f.number(2.9999999999), "3");
        assert_eq!(f.number(0.5), "0.5");
        assert_eq!(f.number(-0.125), "-0.125");
        assert_eq!(f.number(2f64.sqrt()), "1.41421");
        assert_eq!(f.number(1234.56789), "1234.57");
        assert_eq!(f.number(0.000123456789), "0.000123457");
        assert_eq!(f.number(1e15 + 0.25), "1000000000000000");
    }

    #[test]
    fn significant_digits_follow_config() {
        let config = SolverConfig::default().with_significant_digits(3);
        let f = SetFormatter::new(&config, "x");
        assert_eq!(f.number(2f64.sqrt()), "1.41");
        assert_eq!(f.number(-1.99999), "-2");
    }
}
