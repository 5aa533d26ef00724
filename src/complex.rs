//! Complex scalar: `num_complex::Complex64` plus the checked operations the
//! matrix algorithms need.
//!
//! Equality is exact field-wise comparison. [`TOL`] exists for pivoting and
//! convergence decisions only and is never applied to `==`.

use core::fmt;

use num_traits::Float;

use crate::error::{MatrixError, Result};

/// Matrix element type.
pub type Complex = num_complex::Complex64;

/// Tolerance for pivot selection and iterative convergence (machine epsilon).
pub const TOL: f64 = f64::EPSILON;

/// Operations on [`Complex`] that report failure instead of producing
/// `NaN`/`inf`, and the real-axis square-root rule.
///
/// ```
/// use zmatrix::{Complex, ComplexExt, MatrixError};
///
/// let z = Complex::new(3.0, 4.0);
/// assert_eq!(z.norm(), 5.0);
/// assert_eq!(z * z.conj(), Complex::from(25.0));
/// assert_eq!(z.checked_div(Complex::ZERO), Err(MatrixError::DivisionByZero));
/// assert_eq!(Complex::new(-4.0, -0.0).lsqrt(), Complex::new(0.0, 2.0));
/// ```
pub trait ComplexExt: Sized {
    /// Division that fails with [`MatrixError::DivisionByZero`] on a zero divisor.
    fn checked_div(self, rhs: Self) -> Result<Self>;

    /// Division by a real value that fails on zero.
    fn checked_div_real(self, rhs: f64) -> Result<Self>;

    /// `1 / z`, failing on zero.
    fn checked_recip(self) -> Result<Self>;

    /// Principal square root with a fixed rule on the real axis:
    /// `(0, √−re)` when `re < 0`, `(√re, 0)` otherwise, whatever the sign
    /// of the zero imaginary part.
    fn lsqrt(self) -> Self;

    /// Unit vector `z / |z|`. Fails on zero.
    fn signum(self) -> Result<Self>;

    /// Imaginary part is exactly zero.
    fn is_real(self) -> bool;

    /// Display adapter rounding both parts to 5 decimals: `2`, `1 + i * -0.5`.
    fn rounded(self) -> Rounded;
}

impl ComplexExt for Complex {
    fn checked_div(self, rhs: Complex) -> Result<Complex> {
        if rhs == Complex::ZERO {
            return Err(MatrixError::DivisionByZero);
        }
        Ok(self / rhs)
    }

    fn checked_div_real(self, rhs: f64) -> Result<Complex> {
        if rhs == 0.0 {
            return Err(MatrixError::DivisionByZero);
        }
        Ok(self / rhs)
    }

    #[inline]
    fn checked_recip(self) -> Result<Complex> {
        Complex::ONE.checked_div(self)
    }

    fn lsqrt(self) -> Complex {
        if self.im != 0.0 {
            return self.sqrt();
        }
        if self.re < 0.0 {
            Complex::new(0.0, Float::sqrt(-self.re))
        } else {
            Complex::new(Float::sqrt(self.re), 0.0)
        }
    }

    fn signum(self) -> Result<Complex> {
        self.checked_div_real(self.norm())
    }

    #[inline]
    fn is_real(self) -> bool {
        self.im == 0.0
    }

    #[inline]
    fn rounded(self) -> Rounded {
        Rounded(self)
    }
}

/// See [`ComplexExt::rounded`]. Diagnostic only, not a parseable format.
#[derive(Debug, Clone, Copy)]
pub struct Rounded(Complex);

fn round5(x: f64) -> f64 {
    let r = Float::round(x * 1e5) / 1e5;
    // avoid printing "-0"
    if r == 0.0 {
        0.0
    } else {
        r
    }
}

impl fmt::Display for Rounded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let z = self.0;
        if z.im == 0.0 {
            write!(f, "{}", round5(z.re))
        } else {
            write!(f, "{} + i * {}", round5(z.re), round5(z.im))
        }
    }
}
