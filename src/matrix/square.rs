use alloc::vec::Vec;

use crate::complex::{Complex, ComplexExt};
use crate::error::{MatrixError, Result};
use crate::linalg::{hessenberg, CharacteristicPolynomial, Determinant};
use crate::optim::{BairstowSettings, PolynomialRoots};

use super::Matrix;

impl Matrix {
    fn require_square(&self) -> Result<()> {
        if self.is_square() {
            Ok(())
        } else {
            Err(MatrixError::NotSquare {
                nrows: self.nrows,
                ncols: self.ncols,
            })
        }
    }

    /// Sum of the diagonal elements.
    pub fn trace(&self) -> Result<Complex> {
        self.require_square()?;
        Ok(self.trace_unchecked())
    }

    pub(crate) fn trace_unchecked(&self) -> Complex {
        (0..self.nrows.min(self.ncols))
            .map(|i| self.data[i * self.ncols + i])
            .sum()
    }

    /// Determinant, computed on first call and cached.
    ///
    /// See [`Determinant`] for the algorithm.
    ///
    /// ```
    /// use zmatrix::{Complex, Matrix};
    /// let m = Matrix::from_real([[2.0, 0.0], [0.0, 3.0]]);
    /// assert_eq!(m.determinant().unwrap(), Complex::from(6.0));
    /// ```
    pub fn determinant(&self) -> Result<Complex> {
        self.require_square()?;
        Ok(*self
            .det
            .get_or_init(|| Determinant::of_square(self).value()))
    }

    /// Quadratic with a nonzero determinant.
    pub fn is_regular(&self) -> bool {
        match self.determinant() {
            Ok(d) => d != Complex::ZERO,
            Err(_) => false,
        }
    }

    // ── Structural predicates ───────────────────────────────────────
    //
    // Exact comparisons; all false for non-quadratic input.

    fn all_pairs(&self, f: impl Fn(Complex, Complex) -> bool) -> bool {
        let n = self.nrows;
        self.is_square()
            && (0..n).all(|i| (0..n).all(|j| f(self.data[i * n + j], self.data[j * n + i])))
    }

    /// `A == Aᵀ`
    pub fn is_symmetric(&self) -> bool {
        self.all_pairs(|a, at| a == at)
    }

    /// `A == −Aᵀ`
    pub fn is_skew_symmetric(&self) -> bool {
        self.all_pairs(|a, at| a == -at)
    }

    /// `A == Aᴴ`
    pub fn is_hermitian(&self) -> bool {
        self.all_pairs(|a, at| a == at.conj())
    }

    /// `A == −Aᴴ`
    pub fn is_skew_hermitian(&self) -> bool {
        self.all_pairs(|a, at| a == -at.conj())
    }

    /// `A·Aᵀ == I`
    pub fn is_orthogonal(&self) -> bool {
        self.is_square() && self.matmul(&self.transpose()) == Matrix::identity(self.nrows)
    }

    /// `A·Aᴴ == I`
    pub fn is_unitary(&self) -> bool {
        self.is_square() && self.matmul(&self.conjugate_transpose()) == Matrix::identity(self.nrows)
    }

    // ── Inverse and rank ────────────────────────────────────────────

    /// Inverse by the adjugate: `A⁻¹[r][c] = (−1)^(r+c) · det(minor(c, r)) / det(A)`.
    ///
    /// Each entry costs one determinant of an `(n−1)x(n−1)` minor.
    ///
    /// # Errors
    ///
    /// [`MatrixError::NotSquare`] for rectangular input and
    /// [`MatrixError::Singular`] when the determinant is exactly zero.
    ///
    /// ```
    /// use zmatrix::{Matrix, MatrixError};
    /// let a = Matrix::from_real([[1.0, 2.0], [3.0, 4.0]]);
    /// let inv = a.inverse().unwrap();
    /// assert!((inv[(1, 0)].re - 1.5).abs() < 1e-12);
    ///
    /// let s = Matrix::from_real([[1.0, 2.0], [2.0, 4.0]]);
    /// assert_eq!(s.inverse().unwrap_err(), MatrixError::Singular);
    /// ```
    pub fn inverse(&self) -> Result<Matrix> {
        let det = self.determinant()?;
        if det == Complex::ZERO {
            return Err(MatrixError::Singular);
        }
        let n = self.nrows;
        let mut data = Vec::with_capacity(n * n);
        for r in 0..n {
            for c in 0..n {
                let minor = Determinant::of_square(&self.minor(c, r)).value();
                let cofactor = if (r + c) % 2 == 0 { minor } else { -minor };
                data.push(cofactor.checked_div(det)?);
            }
        }
        Ok(Matrix::from_parts(n, n, data))
    }

    /// Rank by minor expansion.
    ///
    /// A regular quadratic matrix has full rank. Otherwise one row (or
    /// column) is deleted at a time and the largest rank among the
    /// submatrices is taken, stopping as soon as the largest possible value
    /// is found. Exponential in the worst case; suitable for small matrices.
    ///
    /// Regularity is the exact test `det != 0`. Input that is singular only
    /// up to rounding, such as `0.1 · [[1, 2, 3], [4, 5, 6], [7, 8, 9]]`,
    /// can keep a tiny nonzero determinant and report full rank.
    ///
    /// ```
    /// use zmatrix::Matrix;
    /// assert_eq!(Matrix::identity(3).rank(), 3);
    /// assert_eq!(Matrix::zeros(3).rank(), 0);
    /// assert_eq!(Matrix::from_real([[1.0, 2.0], [2.0, 4.0]]).rank(), 1);
    /// ```
    pub fn rank(&self) -> usize {
        if self.nrows == 0 || self.ncols == 0 {
            return 0;
        }
        self.rank_rec()
    }

    fn rank_rec(&self) -> usize {
        let (r, c) = self.shape();
        if r == 1 && c == 1 {
            return usize::from(self.data[0] != Complex::ZERO);
        }
        if r == c {
            if self.is_regular() {
                return r;
            }
            if r == 2 {
                return usize::from(self.data.iter().any(|&a| a != Complex::ZERO));
            }
        }

        // singular square: at most n − 1
        let bound = if r == c { r - 1 } else { r.min(c) };
        let mut best = 0;
        if r >= c {
            for i in 0..r {
                best = best.max(self.delete(Some(i), None).rank_rec());
                if best == bound {
                    break;
                }
            }
        } else {
            for j in 0..c {
                best = best.max(self.delete(None, Some(j)).rank_rec());
                if best == bound {
                    break;
                }
            }
        }
        best
    }

    // ── Eigen-analysis ──────────────────────────────────────────────

    /// Upper-Hessenberg matrix similar to `self`.
    ///
    /// See [`hessenberg`](crate::linalg::hessenberg()).
    pub fn hessenberg(&self) -> Result<Matrix> {
        hessenberg(self)
    }

    /// Characteristic polynomial `det(λI − A)`.
    pub fn characteristic_polynomial(&self) -> Result<CharacteristicPolynomial> {
        CharacteristicPolynomial::new(self)
    }

    /// Eigenvalues with default [`BairstowSettings`], in deflation order.
    ///
    /// ```
    /// use zmatrix::{Complex, Matrix};
    /// let m = Matrix::from_real([[2.0, 0.0], [0.0, 3.0]]);
    /// let ev = m.eigenvalues().unwrap();
    /// assert_eq!(ev, vec![Complex::from(3.0), Complex::from(2.0)]);
    /// ```
    pub fn eigenvalues(&self) -> Result<Vec<Complex>> {
        Ok(self.eigenvalues_with(&BairstowSettings::default())?.roots)
    }

    /// Eigenvalues together with per-factor convergence information.
    ///
    /// The matrix is reduced to Hessenberg form, its characteristic
    /// polynomial formed and the polynomial's roots found by
    /// [`bairstow`](crate::optim::bairstow).
    pub fn eigenvalues_with(&self, settings: &BairstowSettings) -> Result<PolynomialRoots> {
        let h = self.hessenberg()?;
        CharacteristicPolynomial::new(&h)?.roots(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    const TOL: f64 = 1e-10;

    fn c(re: f64, im: f64) -> Complex {
        Complex::new(re, im)
    }

    fn approx_eq(a: &Matrix, b: &Matrix, tol: f64) -> bool {
        a.shape() == b.shape()
            && a.as_slice()
                .iter()
                .zip(b.as_slice())
                .all(|(x, y)| (*x - *y).norm() < tol)
    }

    fn contains(roots: &[Complex], z: Complex, tol: f64) -> bool {
        roots.iter().any(|r| (*r - z).norm() < tol)
    }

    #[test]
    fn trace_requires_square() {
        let m = Matrix::new([[c(1.0, 1.0), c(2.0, 0.0)], [c(0.0, 0.0), c(3.0, -2.0)]]);
        assert_eq!(m.trace().unwrap(), c(4.0, -1.0));
        assert_eq!(
            Matrix::from_real([[1.0, 2.0, 3.0]]).trace().unwrap_err(),
            MatrixError::NotSquare { nrows: 1, ncols: 3 }
        );
    }

    #[test]
    fn determinant_rectangular_fails() {
        assert!(Matrix::from_real([[1.0], [2.0]]).determinant().is_err());
        assert!(!Matrix::from_real([[1.0], [2.0]]).is_regular());
    }

    #[test]
    fn symmetry_family() {
        let sym = Matrix::from_real([[1.0, 2.0], [2.0, 5.0]]);
        assert!(sym.is_symmetric());
        assert!(sym.is_hermitian());
        assert!(!sym.is_skew_symmetric());

        let skew = Matrix::from_real([[0.0, 2.0], [-2.0, 0.0]]);
        assert!(skew.is_skew_symmetric());
        assert!(skew.is_skew_hermitian());
        assert!(!skew.is_symmetric());

        let herm = Matrix::new([[c(2.0, 0.0), c(1.0, -1.0)], [c(1.0, 1.0), c(3.0, 0.0)]]);
        assert!(herm.is_hermitian());
        assert!(!herm.is_symmetric());

        let skew_herm = Matrix::new([[c(0.0, 1.0), c(1.0, 2.0)], [c(-1.0, 2.0), c(0.0, -3.0)]]);
        assert!(skew_herm.is_skew_hermitian());
        assert!(!skew_herm.is_hermitian());

        let rect = Matrix::from_real([[0.0, 0.0, 0.0]]);
        assert!(!rect.is_symmetric());
        assert!(!rect.is_skew_symmetric());
        assert!(!rect.is_hermitian());
        assert!(!rect.is_skew_hermitian());
        assert!(!rect.is_orthogonal());
        assert!(!rect.is_unitary());
    }

    #[test]
    fn orthogonal_and_unitary() {
        let rot = Matrix::rotation(0, 1, Complex::ZERO, Complex::ONE, 3).unwrap();
        assert!(rot.is_orthogonal());
        assert!(rot.is_unitary());

        let generic = Matrix::from_real([[1.0, 2.0], [3.0, 4.0]]);
        assert!(!generic.is_orthogonal());
        assert!(!generic.is_unitary());

        // diag(i, 1) is unitary but not orthogonal
        let phase = Matrix::from_diagonal(&[Complex::I, Complex::ONE]);
        assert!(phase.is_unitary());
        assert!(!phase.is_orthogonal());
    }

    #[test]
    fn inverse_2x2() {
        let a = Matrix::from_real([[1.0, 2.0], [3.0, 4.0]]);
        let inv = a.inverse().unwrap();
        let expected = Matrix::from_real([[-2.0, 1.0], [1.5, -0.5]]);
        assert!(approx_eq(&inv, &expected, 1e-12), "{:#}", inv);
        assert!(approx_eq(&(&a * &inv), &Matrix::identity(2), 1e-12));
    }

    #[test]
    fn inverse_complex_3x3() {
        let a = Matrix::new([
            [c(1.0, 1.0), c(2.0, 0.0), c(0.0, 0.0)],
            [c(0.0, 0.0), c(3.0, -1.0), c(1.0, 0.0)],
            [c(0.0, 1.0), c(0.0, 0.0), c(2.0, 0.0)],
        ]);
        let inv = a.inverse().unwrap();
        assert!(approx_eq(&(&a * &inv), &Matrix::identity(3), TOL));
        assert!(approx_eq(&(&inv * &a), &Matrix::identity(3), TOL));
    }

    #[test]
    fn inverse_edge_cases() {
        assert_eq!(
            Matrix::from_real([[4.0]]).inverse().unwrap(),
            Matrix::from_real([[0.25]])
        );
        assert_eq!(
            Matrix::from_real([[1.0, 2.0]]).inverse().unwrap_err(),
            MatrixError::NotSquare { nrows: 1, ncols: 2 }
        );
        assert_eq!(Matrix::zeros(3).inverse().unwrap_err(), MatrixError::Singular);
    }

    #[test]
    fn rank_values() {
        assert_eq!(Matrix::zeros(0).rank(), 0);
        for n in 1..=4 {
            assert_eq!(Matrix::zeros(n).rank(), 0, "zeros({})", n);
            assert_eq!(Matrix::identity(n).rank(), n, "identity({})", n);
        }
        assert_eq!(Matrix::from_real([[1.0, 2.0], [2.0, 4.0]]).rank(), 1);
        assert_eq!(
            Matrix::from_real([[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [1.0, 1.0, 1.0]]).rank(),
            2
        );
        assert_eq!(Matrix::from_real([[0.0, 3.0]]).rank(), 1);
        assert_eq!(Matrix::from_real([[1.0, 2.0, 3.0], [2.0, 4.0, 6.0]]).rank(), 1);
        assert_eq!(
            Matrix::from_real([[1.0, 0.0], [0.0, 1.0], [1.0, 1.0]]).rank(),
            2
        );
    }

    #[test]
    fn rank_uses_exact_regularity() {
        let exact = Matrix::from_fn(3, 3, |i, j| Complex::from((3 * i + j + 1) as f64));
        assert_eq!(exact.rank(), 2);

        // rounding leaves a determinant near, but not at, zero
        let scaled = exact.scale_real(0.1);
        let d = scaled.determinant().unwrap();
        assert!(d.norm() < 1e-15, "{}", d);
        assert_eq!(scaled.rank() == 3, d != Complex::ZERO);
    }

    #[test]
    fn scenario_diagonal() {
        let m = Matrix::from_real([[2.0, 0.0], [0.0, 3.0]]);
        assert_eq!(m.determinant().unwrap(), Complex::from(6.0));
        assert_eq!(m.trace().unwrap(), Complex::from(5.0));
        let ev = m.eigenvalues().unwrap();
        assert_eq!(ev.len(), 2);
        assert!(contains(&ev, Complex::from(2.0), TOL));
        assert!(contains(&ev, Complex::from(3.0), TOL));
    }

    #[test]
    fn scenario_rotation() {
        let m = Matrix::from_real([[0.0, -1.0], [1.0, 0.0]]);
        assert_eq!(m.determinant().unwrap(), Complex::ONE);
        assert_eq!(m.trace().unwrap(), Complex::ZERO);
        let ev = m.eigenvalues().unwrap();
        assert_eq!(ev.len(), 2);
        assert!(contains(&ev, Complex::I, TOL));
        assert!(contains(&ev, -Complex::I, TOL));
    }

    #[test]
    fn eigenvalues_report_convergence() {
        let m = Matrix::from_real([[2.0, 1.0, 0.0], [1.0, 3.0, 1.0], [0.0, 1.0, 4.0]]);
        let r = m.eigenvalues_with(&BairstowSettings::default()).unwrap();
        assert!(r.converged());
        assert_eq!(r.roots.len(), 3);
        assert_eq!(r.factors.len(), 1);
        let sum: Complex = r.roots.iter().sum();
        assert!((sum - m.trace().unwrap()).norm() < 1e-6);
    }

    #[test]
    fn cyclic_permutation_eigenvalues() {
        // characteristic polynomial λ³ − 1 starts Bairstow on a singular
        // Newton system
        let m = Matrix::from_real([[0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]]);
        let r = m.eigenvalues_with(&BairstowSettings::default()).unwrap();
        assert!(r.converged());
        assert_eq!(r.roots.len(), 3);
        let h = 3.0_f64.sqrt() / 2.0;
        for z in [Complex::ONE, c(-0.5, h), c(-0.5, -h)] {
            assert!(contains(&r.roots, z, 1e-6), "missing {} in {:?}", z, r.roots);
        }
    }

    #[test]
    fn eigenvalues_non_square() {
        assert_eq!(
            Matrix::from_real([[1.0, 2.0]]).eigenvalues().unwrap_err(),
            MatrixError::NotSquare { nrows: 1, ncols: 2 }
        );
        assert!(Matrix::zeros(0).eigenvalues().unwrap().is_empty());
        assert_eq!(vec![Complex::from(5.0)], Matrix::from_real([[5.0]]).eigenvalues().unwrap());
    }
}
