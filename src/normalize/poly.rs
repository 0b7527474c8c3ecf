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

//! Dense polynomials of degree at most two.

use std::ops::{Add, Neg, Sub};

/// Highest degree the engine represents.
pub const MAX_DEGREE: usize = 2;

/// `coeffs[i]` is the coefficient of `x^i`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Polynomial {
    coeffs: [f64; MAX_DEGREE + 1],
}

impl Polynomial {
    /// Constant polynomial.
    pub fn constant(value: f64) -> Self {
        Self {
            coeffs: [value, 0.0, 0.0],
        }
    }

    /// The unknown itself.
    pub fn variable() -> Self {
        Self {
            coeffs: [0.0, 1.0, 0.0],
        }
    }

    /// Coefficient of `x^power` (zero above [`MAX_DEGREE`]).
    pub fn coefficient(&self, power: usize) -> f64 {
        self.coeffs.get(power).copied().unwrap_or(0.0)
    }

    /// Highest power with a non-zero coefficient; `None` for the zero polynomial.
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.iter().rposition(|c| *c != 0.0)
    }

    /// Returns the value when the polynomial has no variable term.
    pub fn as_constant(&self) -> Option<f64> {
        match self.degree() {
            None | Some(0) => Some(self.coeffs[0]),
            Some(_) => None,
        }
    }

    /// Returns whether every coefficient is finite.
    pub fn is_finite(&self) -> bool {
        self.coeffs.iter().all(|c| c.is_finite())
    }

    /// Multiplies every coefficient by `factor`.
    pub fn scale(self, factor: f64) -> Self {
        Self {
            coeffs: self.coeffs.map(|c| c * factor),
        }
    }

    /// Divides every coefficient by `divisor`.
    pub fn divide(self, divisor: f64) -> Self {
        Self {
            coeffs: self.coeffs.map(|c| c / divisor),
        }
    }

    /// Multiplies two polynomials; `Err(degree)` when the product exceeds
    /// [`MAX_DEGREE`].
    pub fn checked_mul(self, other: Self) -> Result<Self, usize> {
        let mut product = [0.0; 2 * MAX_DEGREE + 1];
        for (i, lhs) in self.coeffs.iter().enumerate() {
            for (j, rhs) in other.coeffs.iter().enumerate() {
                product[i + j] += lhs * rhs;
            }
        }
        if let Some(degree) = product.iter().rposition(|c| *c != 0.0) {
            if degree > MAX_DEGREE {
                return Err(degree);
            }
        }
        Ok(Self {
            coeffs: [product[0], product[1], product[2]],
        })
    }
}

impl Add for Polynomial {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            coeffs: [
                self.coeffs[0] + rhs.coeffs[0],
                self.coeffs[1] + rhs.coeffs[1],
                self.coeffs[2] + rhs.coeffs[2],
            ],
        }
    }
}

impl Sub for Polynomial {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self + (-rhs)
    }
}

impl Neg for Polynomial {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.scale(-1.0)
    }
}
