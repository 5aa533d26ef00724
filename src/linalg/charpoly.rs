use alloc::vec::Vec;

use crate::complex::Complex;
use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;
use crate::optim::{bairstow, BairstowSettings, PolynomialRoots};

/// Characteristic polynomial `p(λ) = det(λI − A)` of a quadratic matrix.
///
/// Stored as `[c₀, …, cₙ₋₁]` in ascending powers; the leading coefficient
/// `cₙ = 1` is implicit.
///
/// Coefficients come from the Faddeev–LeVerrier recurrence:
///
/// ```text
/// M₁ = I
/// cₙ₋ₖ = −tr(A·Mₖ) / k
/// Mₖ₊₁ = A·Mₖ + cₙ₋ₖ·I
/// ```
///
/// which costs `n` matrix products, O(n⁴) overall.
///
/// # Example
///
/// ```
/// use zmatrix::{Complex, Matrix};
/// use zmatrix::linalg::CharacteristicPolynomial;
///
/// // λ² − 5λ + 6
/// let p = CharacteristicPolynomial::new(&Matrix::from_real([[2.0, 0.0], [0.0, 3.0]])).unwrap();
/// assert_eq!(p.coefficients(), &[Complex::from(6.0), Complex::from(-5.0)]);
/// assert_eq!(p.eval(Complex::from(2.0)), Complex::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CharacteristicPolynomial {
    coeffs: Vec<Complex>,
}

impl CharacteristicPolynomial {
    pub fn new(a: &Matrix) -> Result<Self> {
        if !a.is_square() {
            return Err(MatrixError::NotSquare {
                nrows: a.nrows(),
                ncols: a.ncols(),
            });
        }
        let n = a.nrows();
        let mut coeffs = alloc::vec![Complex::ZERO; n];
        let mut m = Matrix::identity(n);

        for k in 1..=n {
            let am = a.matmul(&m);
            let ck = -(am.trace_unchecked() / k as f64);
            coeffs[n - k] = ck;
            if k < n {
                m = am.add_diagonal(ck);
            }
        }

        Ok(Self { coeffs })
    }

    /// `[c₀, …, cₙ₋₁]`, leading 1 omitted.
    pub fn coefficients(&self) -> &[Complex] {
        &self.coeffs
    }

    /// `[c₀, …, cₙ₋₁, 1]`, the form consumed by [`bairstow`].
    pub fn monic_coefficients(&self) -> Vec<Complex> {
        let mut v = Vec::with_capacity(self.coeffs.len() + 1);
        v.extend_from_slice(&self.coeffs);
        v.push(Complex::ONE);
        v
    }

    pub fn degree(&self) -> usize {
        self.coeffs.len()
    }

    /// Evaluate `p(λ)` by Horner's rule.
    pub fn eval(&self, lambda: Complex) -> Complex {
        self.coeffs
            .iter()
            .rev()
            .fold(Complex::ONE, |acc, &c| acc * lambda + c)
    }

    /// Roots of the polynomial (the eigenvalues of the source matrix).
    pub fn roots(&self, settings: &BairstowSettings) -> Result<PolynomialRoots> {
        bairstow(&self.monic_coefficients(), settings)
    }
}
