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

//! Canonical unions of disjoint intervals.

use super::interval::{Bound, Interval};

/// A finite union of pairwise disjoint, non-adjacent intervals in ascending
/// order.
///
/// Two intervals that share an endpoint contained in either of them are
/// always merged, so `(-∞, 1] ∪ (1, ∞)` is stored as `ℝ`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SolutionSet {
    intervals: Vec<Interval>,
}

impl SolutionSet {
    /// The empty set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The whole real line.
    pub fn all_reals() -> Self {
        Self {
            intervals: vec![Interval::all()],
        }
    }

    /// Builds a canonical set from arbitrary intervals.
    ///
    /// Endpoints closer than `epsilon` are treated as the same point when
    /// deciding whether neighbours touch.
    pub fn from_intervals<I>(intervals: I, epsilon: f64) -> Self
    where
        I: IntoIterator<Item = Interval>,
    {
        let mut sorted: Vec<Interval> = intervals.into_iter().collect();
        sorted.sort_by(|l, r| l.lower().cmp_as_lower(&r.lower()));

        let mut merged: Vec<Interval> = Vec::with_capacity(sorted.len());
        for next in sorted {
            match merged.last_mut() {
                Some(last) if last.joins(&next, epsilon) => {
                    tracing::trace!(?last, ?next, "merging touching intervals");
                    *last = last.hull(&next);
                }
                _ => merged.push(next),
            }
        }
        Self { intervals: merged }
    }

    /// Intervals in ascending order.
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn is_all_reals(&self) -> bool {
        matches!(self.intervals.as_slice(), [only] if only.is_all())
    }

    /// Membership test.
    pub fn contains(&self, x: f64) -> bool {
        self.intervals.iter().any(|iv| iv.contains(x))
    }

    /// Points of the real line not in this set.
    pub fn complement(&self) -> Self {
        let mut gaps = Vec::with_capacity(self.intervals.len() + 1);
        let mut cursor = Bound::NegInfinity;
        for iv in &self.intervals {
            if let Some(gap) = Interval::new(cursor, iv.lower().flipped()) {
                gaps.push(gap);
            }
            cursor = iv.upper().flipped();
        }
        if let Some(gap) = Interval::new(cursor, Bound::PosInfinity) {
            gaps.push(gap);
        }
        Self { intervals: gaps }
    }

    /// When the set is the real line minus finitely many points, returns
    /// those points in ascending order.
    pub fn excluded_points(&self) -> Option<Vec<f64>> {
        if self.is_empty() || self.is_all_reals() {
            return None;
        }
        let complement = self.complement();
        complement
            .intervals
            .iter()
            .all(Interval::is_point)
            .then(|| {
                complement
                    .intervals
                    .iter()
                    .map(|iv| iv.lower().value())
                    .collect()
            })
    }
}
