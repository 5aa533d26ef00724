use alloc::vec::Vec;

use crate::complex::{Complex, TOL};
use crate::error::{MatrixError, Result};
use crate::linalg::lu::lup_counting;
use crate::matrix::{Matrix, Scratch};

/// Outcome of the pivoted factorization attempted by [`Determinant`].
///
/// When `success` is false the factorization stopped at a pivot below
/// [`TOL`]; `factors`, `perm` and `swaps` then describe the partially
/// eliminated matrix at that point.
#[derive(Debug, Clone)]
pub struct Decomposition {
    /// Packed L/U factors (unit lower triangle below the diagonal).
    pub factors: Matrix,
    /// Row permutation: row `i` of the factorization is row `perm[i]` of the input.
    pub perm: Vec<usize>,
    /// Number of row swaps performed, including those made before an abort.
    pub swaps: usize,
    /// Whether every pivot cleared the tolerance.
    pub success: bool,
}

impl Decomposition {
    /// Factor a quadratic matrix.
    pub fn new(m: &Matrix) -> Result<Self> {
        require_square(m)?;
        Ok(Self::factor(m))
    }

    fn factor(m: &Matrix) -> Self {
        let n = m.nrows();
        let mut work = Scratch::new(m.clone());
        let mut perm = alloc::vec![0usize; n];
        let mut swaps = 0;
        let success = lup_counting(&mut work, &mut perm, TOL, &mut swaps).is_ok();
        Self {
            factors: work.into_matrix(),
            perm,
            swaps,
            success,
        }
    }

    /// Product of the U diagonal, sign-flipped once per row swap.
    ///
    /// Only meaningful when `success` is true.
    pub fn determinant(&self) -> Complex {
        let d: Complex = (0..self.factors.nrows())
            .map(|i| self.factors[(i, i)])
            .product();
        if self.swaps % 2 == 0 {
            d
        } else {
            -d
        }
    }
}

/// How a [`Determinant`] value was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeterminantMethod {
    /// Pivoted factorization.
    Lup,
    /// Recursive cofactor expansion along the first row.
    Cofactor,
}

/// Determinant of a quadratic matrix.
///
/// Tries the pivoted LUP factorization first. If any pivot falls below
/// [`TOL`] the factorization is abandoned and the determinant is computed
/// by exact cofactor expansion instead, which is exponential in the
/// dimension but does not depend on pivot quality.
///
/// ```
/// use zmatrix::{Matrix, Complex};
/// use zmatrix::linalg::{Determinant, DeterminantMethod};
///
/// let d = Determinant::new(&Matrix::from_real([[2.0, 0.0], [0.0, 3.0]])).unwrap();
/// assert_eq!(d.value(), Complex::from(6.0));
/// assert_eq!(d.method(), DeterminantMethod::Lup);
///
/// let s = Determinant::new(&Matrix::from_real([[1.0, 2.0], [2.0, 4.0]])).unwrap();
/// assert_eq!(s.value(), Complex::ZERO);
/// assert_eq!(s.method(), DeterminantMethod::Cofactor);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Determinant {
    value: Complex,
    method: DeterminantMethod,
}

impl Determinant {
    pub fn new(m: &Matrix) -> Result<Self> {
        require_square(m)?;
        Ok(Self::of_square(m))
    }

    /// Caller guarantees `m` is square.
    pub(crate) fn of_square(m: &Matrix) -> Self {
        let decomposition = Decomposition::factor(m);
        if decomposition.success {
            return Self {
                value: decomposition.determinant(),
                method: DeterminantMethod::Lup,
            };
        }
        log::debug!(
            target: "zmatrix",
            "pivot below tolerance in {}x{} determinant, falling back to cofactor expansion",
            m.nrows(),
            m.ncols()
        );
        Self {
            value: cofactor_rec(m),
            method: DeterminantMethod::Cofactor,
        }
    }

    pub fn value(&self) -> Complex {
        self.value
    }

    pub fn method(&self) -> DeterminantMethod {
        self.method
    }
}

/// Determinant by recursive cofactor expansion along the first row.
///
/// `det(M) = Σ_j (−1)^j · M[0, j] · det(minor(0, j))`, with the 2x2 block
/// evaluated directly. Cost is O(n!); intended for small or rank-deficient
/// inputs where pivoting cannot be trusted.
pub fn cofactor_determinant(m: &Matrix) -> Result<Complex> {
    require_square(m)?;
    Ok(cofactor_rec(m))
}

fn cofactor_rec(m: &Matrix) -> Complex {
    match m.nrows() {
        0 => Complex::ONE,
        1 => m[(0, 0)],
        2 => m[(0, 0)] * m[(1, 1)] - m[(0, 1)] * m[(1, 0)],
        n => {
            let mut sum = Complex::ZERO;
            for col in 0..n {
                let a = m[(0, col)];
                if a == Complex::ZERO {
                    continue;
                }
                let term = a * cofactor_rec(&m.minor(0, col));
                if col % 2 == 0 {
                    sum += term;
                } else {
                    sum -= term;
                }
            }
            sum
        }
    }
}

fn require_square(m: &Matrix) -> Result<()> {
    if m.is_square() {
        Ok(())
    } else {
        Err(MatrixError::NotSquare {
            nrows: m.nrows(),
            ncols: m.ncols(),
        })
    }
}
