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

//! Interval bounds over the extended real line.

use std::cmp::Ordering;

/// One end of an interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    /// `-∞`, always open.
    NegInfinity,
    /// `+∞`, always open.
    PosInfinity,
    /// A finite endpoint.
    Finite {
        /// Endpoint value.
        value: f64,
        /// Whether the endpoint belongs to the interval.
        closed: bool,
    },
}

impl Bound {
    /// Finite endpoint; infinite values map to the matching open infinity.
    pub fn finite(value: f64, closed: bool) -> Self {
        if value == f64::INFINITY {
            Bound::PosInfinity
        } else if value == f64::NEG_INFINITY {
            Bound::NegInfinity
        } else {
            Bound::Finite { value, closed }
        }
    }

    /// Open finite endpoint.
    pub fn open(value: f64) -> Self {
        Self::finite(value, false)
    }

    /// Closed finite endpoint.
    pub fn closed(value: f64) -> Self {
        Self::finite(value, true)
    }

    /// Endpoint value on the extended real line.
    pub fn value(&self) -> f64 {
        match self {
            Bound::NegInfinity => f64::NEG_INFINITY,
            Bound::PosInfinity => f64::INFINITY,
            Bound::Finite { value, .. } => *value,
        }
    }

    /// Whether the endpoint belongs to the interval.
    pub fn is_closed(&self) -> bool {
        matches!(self, Bound::Finite { closed: true, .. })
    }

    /// Same position with the opposite membership, used for complements.
    pub(crate) fn flipped(self) -> Self {
        match self {
            Bound::Finite { value, closed } => Bound::Finite {
                value,
                closed: !closed,
            },
            infinite => infinite,
        }
    }

    /// Orders lower bounds: smaller value first, closed before open on ties.
    pub(crate) fn cmp_as_lower(&self, other: &Self) -> Ordering {
        self.value()
            .total_cmp(&other.value())
            .then_with(|| other.is_closed().cmp(&self.is_closed()))
    }

    /// Orders upper bounds: smaller value first, open before closed on ties.
    pub(crate) fn cmp_as_upper(&self, other: &Self) -> Ordering {
        self.value()
            .total_cmp(&other.value())
            .then_with(|| self.is_closed().cmp(&other.is_closed()))
    }
}

/// A non-empty connected subset of the real line.
///
/// Invariant: `lower < upper`, or `lower == upper` with both ends closed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    lower: Bound,
    upper: Bound,
}

impl Interval {
    /// Builds an interval, returning `None` when the bounds describe the
    /// empty set.
    pub fn new(lower: Bound, upper: Bound) -> Option<Self> {
        let valid = match (lower, upper) {
            (Bound::PosInfinity, _) | (_, Bound::NegInfinity) => false,
            (Bound::NegInfinity, _) | (_, Bound::PosInfinity) => true,
            (
                Bound::Finite {
                    value: lo,
                    closed: lo_closed,
                },
                Bound::Finite {
                    value: hi,
                    closed: hi_closed,
                },
            ) => lo < hi || (lo == hi && lo_closed && hi_closed),
        };
        valid.then_some(Self { lower, upper })
    }

    /// The whole real line.
    pub fn all() -> Self {
        Self {
            lower: Bound::NegInfinity,
            upper: Bound::PosInfinity,
        }
    }

    /// The single point `{value}`.
    pub fn point(value: f64) -> Option<Self> {
        Self::new(Bound::closed(value), Bound::closed(value))
    }

    /// `(lower, upper)`.
    pub fn open(lower: f64, upper: f64) -> Option<Self> {
        Self::new(Bound::open(lower), Bound::open(upper))
    }

    /// `[lower, upper]`.
    pub fn closed(lower: f64, upper: f64) -> Option<Self> {
        Self::new(Bound::closed(lower), Bound::closed(upper))
    }

    /// `(-∞, value)` or `(-∞, value]`.
    pub fn below(value: f64, closed: bool) -> Option<Self> {
        Self::new(Bound::NegInfinity, Bound::finite(value, closed))
    }

    /// `(value, ∞)` or `[value, ∞)`.
    pub fn above(value: f64, closed: bool) -> Option<Self> {
        Self::new(Bound::finite(value, closed), Bound::PosInfinity)
    }

    /// Lower bound.
    pub fn lower(&self) -> Bound {
        self.lower
    }

    /// Upper bound.
    pub fn upper(&self) -> Bound {
        self.upper
    }

    /// Whether this is a degenerate single-point interval.
    pub fn is_point(&self) -> bool {
        matches!(
            (self.lower, self.upper),
            (Bound::Finite { value: lo, .. }, Bound::Finite { value: hi, .. }) if lo == hi
        )
    }

    /// Whether this interval is the whole real line.
    pub fn is_all(&self) -> bool {
        self.lower == Bound::NegInfinity && self.upper == Bound::PosInfinity
    }

    /// Membership test.
    pub fn contains(&self, x: f64) -> bool {
        let above_lower = match self.lower {
            Bound::NegInfinity => true,
            Bound::PosInfinity => false,
            Bound::Finite { value, closed } => x > value || (closed && x == value),
        };
        let below_upper = match self.upper {
            Bound::PosInfinity => true,
            Bound::NegInfinity => false,
            Bound::Finite { value, closed } => x < value || (closed && x == value),
        };
        above_lower && below_upper
    }

    /// Whether `next`, which starts no earlier than `self`, overlaps or
    /// touches `self` at a point one of them contains.
    pub(crate) fn joins(&self, next: &Self, epsilon: f64) -> bool {
        match (self.upper, next.lower) {
            (Bound::PosInfinity, _) | (_, Bound::NegInfinity) => true,
            (Bound::NegInfinity, _) | (_, Bound::PosInfinity) => false,
            (
                Bound::Finite {
                    value: upper,
                    closed: upper_closed,
                },
                Bound::Finite {
                    value: lower,
                    closed: lower_closed,
                },
            ) => {
                if lower < upper {
                    true
                } else if lower - upper <= epsilon {
                    upper_closed || lower_closed
                } else {
                    false
                }
            }
        }
    }

    /// Smallest interval covering `self` and `next` (used after [`joins`]).
    ///
    /// [`joins`]: Interval::joins
    pub(crate) fn hull(&self, next: &Self) -> Self {
        let lower = if next.lower.cmp_as_lower(&self.lower) == Ordering::Less {
            next.lower
        } else {
            self.lower
        };
        let upper = if next.upper.cmp_as_upper(&self.upper) == Ordering::Greater {
            next.upper
        } else {
            self.upper
        };
        Self { lower, upper }
    }
}
