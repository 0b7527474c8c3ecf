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

//! Discriminant analysis and sign tables.

use super::CanonicalQuadratic;
use super::interval::Interval;
use super::set::SolutionSet;
use crate::ast::ComparisonKind;

/// Real roots of the canonical polynomial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RootStructure {
    /// `a ≈ 0` and `b ≈ 0`: the polynomial is the constant `c`.
    Constant,
    /// `a ≈ 0`: a line crossing zero at `root`.
    Linear { root: f64 },
    /// `D < -ε`: the quadratic never reaches zero.
    NoRealRoots,
    /// `|D| ≤ ε`: the quadratic touches zero at one point.
    DoubleRoot(f64),
    /// `D > ε`: two distinct roots, smaller first.
    TwoRoots(f64, f64),
}

/// Classifies the roots of `a·x² + b·x + c`.
///
/// The discriminant is taken on the monic polynomial `x² + (b/a)·x + c/a`
/// so the tolerance does not depend on the overall scale of the input.
/// When that overflows, the coefficients are rescaled by their largest
/// magnitude instead.
pub fn classify(q: &CanonicalQuadratic, epsilon: f64) -> RootStructure {
    if q.a.abs() <= epsilon {
        if q.b.abs() <= epsilon {
            return RootStructure::Constant;
        }
        return RootStructure::Linear { root: -q.c / q.b };
    }

    let (a, b, c) = {
        let (p, r) = (q.b / q.a, q.c / q.a);
        if (p * p - 4.0 * r).is_finite() {
            (1.0, p, r)
        } else {
            let scale = q.a.abs().max(q.b.abs()).max(q.c.abs());
            (q.a / scale, q.b / scale, q.c / scale)
        }
    };
    let disc = b * b - 4.0 * a * c;

    if disc < -epsilon {
        return RootStructure::NoRealRoots;
    }
    if disc <= epsilon {
        return RootStructure::DoubleRoot(-b / (2.0 * a));
    }

    // Avoids cancellation between -b and √D.
    let sign = if b < 0.0 { -1.0 } else { 1.0 };
    let half = -0.5 * (b + sign * disc.sqrt());
    let (mut r1, mut r2) = (half / a, c / half);
    if r1 > r2 {
        std::mem::swap(&mut r1, &mut r2);
    }
    if (r2 - r1).abs() <= epsilon {
        return RootStructure::DoubleRoot(0.5 * (r1 + r2));
    }
    RootStructure::TwoRoots(r1, r2)
}

/// Computes the solution set of `q`.
pub fn solve(q: &CanonicalQuadratic, epsilon: f64) -> SolutionSet {
    let roots = classify(q, epsilon);
    let pieces: Vec<Option<Interval>> = match roots {
        RootStructure::Constant => {
            if q.cmp.holds_against_zero(q.c, epsilon) {
                vec![Some(Interval::all())]
            } else {
                Vec::new()
            }
        }
        RootStructure::Linear { root } => {
            // b·x + c cmp 0  ⇔  x cmp' -c/b
            let cmp = if q.b < 0.0 { q.cmp.reversed() } else { q.cmp };
            relative_to(cmp, root)
        }
        RootStructure::NoRealRoots => match upward(q) {
            ComparisonKind::GreaterThan
            | ComparisonKind::GreaterOrEqual
            | ComparisonKind::NotEqual => vec![Some(Interval::all())],
            ComparisonKind::LessThan | ComparisonKind::LessOrEqual | ComparisonKind::Equal => {
                Vec::new()
            }
        },
        RootStructure::DoubleRoot(r) => match upward(q) {
            ComparisonKind::GreaterThan | ComparisonKind::NotEqual => {
                vec![Interval::below(r, false), Interval::above(r, false)]
            }
            ComparisonKind::GreaterOrEqual => vec![Some(Interval::all())],
            ComparisonKind::LessThan => Vec::new(),
            ComparisonKind::LessOrEqual | ComparisonKind::Equal => vec![Interval::point(r)],
        },
        RootStructure::TwoRoots(r1, r2) => match upward(q) {
            ComparisonKind::GreaterThan => {
                vec![Interval::below(r1, false), Interval::above(r2, false)]
            }
            ComparisonKind::GreaterOrEqual => {
                vec![Interval::below(r1, true), Interval::above(r2, true)]
            }
            ComparisonKind::LessThan => vec![Interval::open(r1, r2)],
            ComparisonKind::LessOrEqual => vec![Interval::closed(r1, r2)],
            ComparisonKind::Equal => vec![Interval::point(r1), Interval::point(r2)],
            ComparisonKind::NotEqual => vec![
                Interval::below(r1, false),
                Interval::open(r1, r2),
                Interval::above(r2, false),
            ],
        },
    };

    let set = SolutionSet::from_intervals(pieces.into_iter().flatten(), epsilon);
    tracing::debug!(?roots, pieces = set.intervals().len(), "solved quadratic");
    set
}

/// Relation for the upward-opening parabola equivalent to `q`.
fn upward(q: &CanonicalQuadratic) -> ComparisonKind {
    if q.a < 0.0 { q.cmp.reversed() } else { q.cmp }
}

/// Intervals satisfying `x cmp root`.
fn relative_to(cmp: ComparisonKind, root: f64) -> Vec<Option<Interval>> {
    match cmp {
        ComparisonKind::LessThan => vec![Interval::below(root, false)],
        ComparisonKind::LessOrEqual => vec![Interval::below(root, true)],
        ComparisonKind::GreaterThan => vec![Interval::above(root, false)],
        ComparisonKind::GreaterOrEqual => vec![Interval::above(root, true)],
        ComparisonKind::Equal => vec![Interval::point(root)],
        ComparisonKind::NotEqual => {
            vec![Interval::below(root, false), Interval::above(root, false)]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Bound;

    const EPS: f64 = 1e-9;

    fn q(a: f64, b: f64, c: f64, cmp: ComparisonKind) -> CanonicalQuadratic {
        CanonicalQuadratic::new(a, b, c, cmp)
    }

    fn two_roots(structure: RootStructure) -> (f64, f64) {
        match structure {
            RootStructure::TwoRoots(r1, r2) => (r1, r2),
            other => panic!("expected two roots, got {other:?}"),
        }
    }

    #[test]
    fn classifies_each_branch() {
        let gt = ComparisonKind::GreaterThan;
        assert_eq!(classify(&q(0.0, 0.0, 3.0, gt), EPS), RootStructure::Constant);
        assert_eq!(
            classify(&q(0.0, 2.0, -4.0, gt), EPS),
            RootStructure::Linear { root: 2.0 }
        );
        assert_eq!(classify(&q(1.0, 0.0, 1.0, gt), EPS), RootStructure::NoRealRoots);
        assert_eq!(classify(&q(1.0, -2.0, 1.0, gt), EPS), RootStructure::DoubleRoot(1.0));
        assert_eq!(two_roots(classify(&q(1.0, -3.0, 2.0, gt), EPS)), (1.0, 2.0));
    }

    #[test]
    fn roots_are_ascending_whatever_the_signs() {
        let gt = ComparisonKind::GreaterThan;
        for (a, b, c) in [
            (1.0, -3.0, 2.0),
            (-1.0, 3.0, -2.0),
            (2.0, -6.0, 4.0),
            (-0.5, 1.5, -1.0),
        ] {
            let (r1, r2) = two_roots(classify(&q(a, b, c, gt), EPS));
            assert!((r1 - 1.0).abs() < 1e-12, "({a}, {b}, {c}) -> {r1}");
            assert!((r2 - 2.0).abs() < 1e-12, "({a}, {b}, {c}) -> {r2}");
        }
    }

    #[test]
    fn small_root_survives_large_linear_term() {
        let (r1, r2) = two_roots(classify(&q(1.0, -1e8, 1.0, ComparisonKind::LessThan), EPS));
        assert!((r1 - 1e-8).abs() < 1e-20);
        assert!((r2 - 1e8).abs() < 1e-4);
    }

    #[test]
    fn discriminant_tolerance_is_scale_free() {
        let scaled = q(1e-3, -2e-3, 1e-3, ComparisonKind::LessOrEqual);
        assert_eq!(classify(&scaled, EPS), RootStructure::DoubleRoot(1.0));
        let huge = q(1e200, 0.0, -1e300, ComparisonKind::LessOrEqual);
        let (r1, r2) = two_roots(classify(&huge, EPS));
        assert!((r1 + 1e50).abs() / 1e50 < 1e-12);
        assert!((r2 - 1e50).abs() / 1e50 < 1e-12);
    }

    #[test]
    fn two_root_table() {
        let expect = |cmp, pieces: &[(Bound, Bound)]| {
            let set = solve(&q(1.0, -3.0, 2.0, cmp), EPS);
            let expected: Vec<Interval> = pieces
                .iter()
                .map(|(l, u)| Interval::new(*l, *u).expect("non-empty"))
                .collect();
            assert_eq!(set.intervals(), expected.as_slice(), "{cmp}");
        };
        use Bound::{NegInfinity as NInf, PosInfinity as PInf};
        let (o1, c1, o2, c2) = (
            Bound::open(1.0),
            Bound::closed(1.0),
            Bound::open(2.0),
            Bound::closed(2.0),
        );
        expect(ComparisonKind::GreaterThan, &[(NInf, o1), (o2, PInf)]);
        expect(ComparisonKind::GreaterOrEqual, &[(NInf, c1), (c2, PInf)]);
        expect(ComparisonKind::LessThan, &[(o1, o2)]);
        expect(ComparisonKind::LessOrEqual, &[(c1, c2)]);
        expect(ComparisonKind::Equal, &[(c1, c1), (c2, c2)]);
        expect(ComparisonKind::NotEqual, &[(NInf, o1), (o1, o2), (o2, PInf)]);
    }

    #[test]
    fn double_root_table() {
        let set = |cmp| solve(&q(1.0, -2.0, 1.0, cmp), EPS);
        assert_eq!(set(ComparisonKind::GreaterOrEqual), SolutionSet::all_reals());
        assert!(set(ComparisonKind::LessThan).is_empty());
        let point = Interval::point(1.0).expect("point");
        assert_eq!(set(ComparisonKind::LessOrEqual).intervals(), &[point]);
        assert_eq!(set(ComparisonKind::GreaterThan).excluded_points(), Some(vec![1.0]));
        assert_eq!(set(ComparisonKind::NotEqual), set(ComparisonKind::GreaterThan));
        assert_eq!(set(ComparisonKind::Equal), set(ComparisonKind::LessOrEqual));
    }

    #[test]
    fn downward_parabola_reverses_the_relation() {
        // -(x - 1)(x - 2) > 0 holds between the roots.
        let set = solve(&q(-1.0, 3.0, -2.0, ComparisonKind::GreaterThan), EPS);
        assert_eq!(set.intervals(), &[Interval::open(1.0, 2.0).expect("non-empty")]);
        // -x² - 1 > 0 never holds.
        assert!(solve(&q(-1.0, 0.0, -1.0, ComparisonKind::GreaterThan), EPS).is_empty());
    }

    #[test]
    fn linear_and_constant_cases() {
        let set = solve(&q(0.0, -2.0, 4.0, ComparisonKind::LessThan), EPS);
        assert_eq!(set.intervals(), &[Interval::above(2.0, false).expect("non-empty")]);
        let set = solve(&q(0.0, 1.0, 0.0, ComparisonKind::NotEqual), EPS);
        assert_eq!(set.excluded_points(), Some(vec![0.0]));
        assert!(solve(&q(0.0, 0.0, 0.0, ComparisonKind::LessOrEqual), EPS).is_all_reals());
        assert!(solve(&q(0.0, 0.0, 0.0, ComparisonKind::LessThan), EPS).is_empty());
        assert!(solve(&q(0.0, 0.0, -1.0, ComparisonKind::NotEqual), EPS).is_all_reals());
    }
}
