//! Quaternions.

use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use std::fmt::{self, Write};

/// A quaternion `a + b*i + c*j + d*k` with real-valued coefficients.
///
/// Quaternions are immutable values: every operation returns a new
/// quaternion. The default value is the zero quaternion.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
pub struct Quaternion {
    inner: nalgebra::Quaternion<f64>,
}

impl Quaternion {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    pub const I: Self = Self::new(0.0, 1.0, 0.0, 0.0);
    pub const J: Self = Self::new(0.0, 0.0, 1.0, 0.0);
    pub const K: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Creates the quaternion `a + b*i + c*j + d*k`.
    #[inline]
    pub const fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self {
            inner: nalgebra::Quaternion::from_vector(nalgebra::Vector4::new(b, c, d, a)),
        }
    }

    /// The real part.
    #[inline]
    pub fn a(&self) -> f64 {
        self.inner.w
    }

    /// The coefficient of `i`.
    #[inline]
    pub fn b(&self) -> f64 {
        self.inner.i
    }

    /// The coefficient of `j`.
    #[inline]
    pub fn c(&self) -> f64 {
        self.inner.j
    }

    /// The coefficient of `k`.
    #[inline]
    pub fn d(&self) -> f64 {
        self.inner.k
    }

    /// Returns the coefficients in the order `(a, b, c, d)`.
    #[inline]
    pub fn coefficients(&self) -> (f64, f64, f64, f64) {
        (self.a(), self.b(), self.c(), self.d())
    }

    /// Returns the quaternion with the same real part and negated imaginary
    /// parts.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self {
            inner: self.inner.conjugate(),
        }
    }

    #[inline]
    pub fn norm(&self) -> f64 {
        self.inner.norm()
    }
}

impl From<(f64, f64, f64, f64)> for Quaternion {
    fn from((a, b, c, d): (f64, f64, f64, f64)) -> Self {
        Self::new(a, b, c, d)
    }
}

impl From<[f64; 4]> for Quaternion {
    fn from([a, b, c, d]: [f64; 4]) -> Self {
        Self::new(a, b, c, d)
    }
}

impl_binop!(Add, add, Quaternion, Quaternion, Quaternion, |lhs, rhs| {
    Quaternion {
        inner: lhs.inner + rhs.inner,
    }
});

// Hamilton product, written out so that the evaluation order of each
// component is fixed.
impl_binop!(Mul, mul, Quaternion, Quaternion, Quaternion, |lhs, rhs| {
    let (a1, b1, c1, d1) = lhs.coefficients();
    let (a2, b2, c2, d2) = rhs.coefficients();
    Quaternion::new(
        a1 * a2 - b1 * b2 - c1 * c2 - d1 * d2,
        a1 * b2 + b1 * a2 + c1 * d2 - d1 * c2,
        a1 * c2 - b1 * d2 + c1 * a2 + d1 * b2,
        a1 * d2 + b1 * c2 - c1 * b2 + d1 * a2,
    )
});

impl_abs_diff_eq!(Quaternion, |a, b, epsilon| {
    a.inner.abs_diff_eq(&b.inner, epsilon)
});

impl_relative_eq!(Quaternion, |a, b, epsilon, max_relative| {
    a.inner.relative_eq(&b.inner, epsilon, max_relative)
});

/// Renders the quaternion as e.g. `3.0-2.0i+k`. Zero terms are left out,
/// unit imaginary coefficients are written without their magnitude and the
/// zero quaternion is written as `0`.
///
/// Coefficients use the `Debug` form of `f64`, so integral values keep their
/// decimal point (`2.0`) and very large or small magnitudes use a bare
/// exponent (`1e16`, `1e-5`) rather than a signed, zero-padded one
/// (`1e+16`, `1e-05`).
impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut text = String::new();

        if self.a() != 0.0 {
            write!(text, "{:?}", self.a())?;
        }

        for (coefficient, unit) in [(self.b(), 'i'), (self.c(), 'j'), (self.d(), 'k')] {
            if coefficient == 0.0 {
                continue;
            }
            text.push(if coefficient > 0.0 { '+' } else { '-' });

            let magnitude = coefficient.abs();
            if magnitude != 1.0 {
                write!(text, "{magnitude:?}")?;
            }
            text.push(unit);
        }

        if text.is_empty() {
            return f.write_str("0");
        }
        f.write_str(text.strip_prefix('+').unwrap_or(&text))
    }
}
