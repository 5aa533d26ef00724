mod ops;
mod square;
mod util;

use alloc::vec;
use alloc::vec::Vec;
use core::ops::Index;

use crate::complex::{Complex, ComplexExt};
use crate::error::{MatrixError, Result};
use crate::traits::{MatrixMut, MatrixRef};

#[cfg(feature = "std")]
type DetCache = std::sync::OnceLock<Complex>;
#[cfg(not(feature = "std"))]
type DetCache = core::cell::OnceCell<Complex>;

/// Dense `nrows x ncols` matrix of complex values.
///
/// Row-major `Vec<Complex>` storage. Indexing with `m[(row, col)]` is
/// 0-based; [`Matrix::value`] offers a checked 1-based accessor.
///
/// The determinant of a quadratic matrix is computed on first request and
/// cached for the lifetime of the value. `Matrix` does not implement
/// [`MatrixMut`], so a value never changes after construction; the
/// in-place algorithms in [`crate::linalg`] run on private working copies.
///
/// ```compile_fail
/// use zmatrix::{Complex, Matrix, MatrixMut};
/// let mut m = Matrix::identity(2);
/// *m.get_mut(0, 0) = Complex::from(2.0);
/// ```
///
/// # Examples
///
/// ```
/// use zmatrix::{Complex, Matrix};
///
/// let a = Matrix::from_real([[1.0, 2.0], [3.0, 4.0]]);
/// assert_eq!(a[(0, 1)], Complex::from(2.0));
/// assert_eq!(a.value(2, 1).unwrap(), Complex::from(3.0));
/// assert_eq!(a.nrows(), 2);
///
/// let inv = a.inverse().unwrap();
/// let id = a.checked_mul(&inv).unwrap();
/// assert!((id[(0, 0)] - Complex::ONE).norm() < 1e-12);
/// assert!(id[(1, 0)].norm() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct Matrix {
    data: Vec<Complex>,
    nrows: usize,
    ncols: usize,
    det: DetCache,
}

// ── Constructors ────────────────────────────────────────────────────

impl Matrix {
    fn from_parts(nrows: usize, ncols: usize, data: Vec<Complex>) -> Self {
        debug_assert_eq!(data.len(), nrows * ncols);
        Self {
            data,
            nrows,
            ncols,
            det: DetCache::new(),
        }
    }

    /// Create a matrix from a 2D array of rows.
    ///
    /// ```
    /// use zmatrix::{Complex, Matrix};
    /// let m = Matrix::new([[Complex::ONE, Complex::I]]);
    /// assert_eq!(m.ncols(), 2);
    /// assert_eq!(m[(0, 1)], Complex::I);
    /// ```
    pub fn new<const R: usize, const C: usize>(rows: [[Complex; C]; R]) -> Self {
        let data = rows.iter().flat_map(|r| r.iter().copied()).collect();
        Self::from_parts(R, C, data)
    }

    /// Create a matrix with real entries from a 2D array of rows.
    pub fn from_real<const R: usize, const C: usize>(rows: [[f64; C]; R]) -> Self {
        let data = rows
            .iter()
            .flat_map(|r| r.iter().map(|&x| Complex::from(x)))
            .collect();
        Self::from_parts(R, C, data)
    }

    /// Create a matrix from a row-major `Vec`.
    ///
    /// Fails with [`MatrixError::ShapeMismatch`] if `data.len() != nrows * ncols`.
    pub fn from_vec(nrows: usize, ncols: usize, data: Vec<Complex>) -> Result<Self> {
        if data.len() != nrows * ncols {
            return Err(MatrixError::ShapeMismatch {
                op: "from_vec",
                lhs: (nrows, ncols),
                rhs: (data.len(), 1),
            });
        }
        Ok(Self::from_parts(nrows, ncols, data))
    }

    /// Create a matrix by calling `f(row, col)` for each element.
    ///
    /// ```
    /// use zmatrix::{Complex, Matrix};
    /// let m = Matrix::from_fn(2, 3, |i, j| Complex::from((i * 3 + j) as f64));
    /// assert_eq!(m[(1, 2)], Complex::from(5.0));
    /// ```
    pub fn from_fn(nrows: usize, ncols: usize, f: impl Fn(usize, usize) -> Complex) -> Self {
        let mut data = Vec::with_capacity(nrows * ncols);
        for i in 0..nrows {
            for j in 0..ncols {
                data.push(f(i, j));
            }
        }
        Self::from_parts(nrows, ncols, data)
    }

    /// `n x n` zero matrix.
    pub fn zeros(n: usize) -> Self {
        Self::from_parts(n, n, vec![Complex::ZERO; n * n])
    }

    /// `n x n` identity matrix.
    pub fn identity(n: usize) -> Self {
        Self::from_fn(n, n, |i, j| if i == j { Complex::ONE } else { Complex::ZERO })
    }

    /// Square diagonal matrix with `diag` on the main diagonal.
    pub fn from_diagonal(diag: &[Complex]) -> Self {
        let n = diag.len();
        Self::from_fn(n, n, |i, j| if i == j { diag[i] } else { Complex::ZERO })
    }

    /// `n x 1` column vector.
    pub fn column_vector(values: &[Complex]) -> Self {
        Self::from_parts(values.len(), 1, values.to_vec())
    }

    /// `n x n` plane rotation acting on axes `p` and `q` (0-based).
    ///
    /// The angle is given by the direction `(x1, x2)`: with `t = x2 / x1`,
    /// `cos = 1 / √(1 + t²)` and `sin = t / √(1 + t²)`; `x1 == 0` is a
    /// quarter turn (`cos = 0`, `sin = 1`). Entries `[p][p]` and `[q][q]`
    /// hold `cos`, `[p][q]` holds `sin` and `[q][p]` holds `−sin`.
    ///
    /// ```
    /// use zmatrix::{Complex, Matrix};
    /// let r = Matrix::rotation(0, 2, Complex::ZERO, Complex::ONE, 3).unwrap();
    /// assert!(r.is_orthogonal());
    /// assert_eq!(r[(0, 2)], Complex::ONE);
    /// assert_eq!(r[(2, 0)], -Complex::ONE);
    /// ```
    pub fn rotation(p: usize, q: usize, x1: Complex, x2: Complex, n: usize) -> Result<Self> {
        if p >= n || q >= n || p == q {
            return Err(MatrixError::IndexOutOfRange {
                row: p,
                col: q,
                nrows: n,
                ncols: n,
            });
        }

        let (cos, sin) = if x1 == Complex::ZERO {
            (Complex::ZERO, Complex::ONE)
        } else {
            let t = x2.checked_div(x1)?;
            let hyp = (1.0 + t * t).lsqrt();
            (hyp.checked_recip()?, t.checked_div(hyp)?)
        };

        let mut data = vec![Complex::ZERO; n * n];
        for i in 0..n {
            data[i * n + i] = Complex::ONE;
        }
        data[p * n + p] = cos;
        data[q * n + q] = cos;
        data[p * n + q] = sin;
        data[q * n + p] = -sin;
        Ok(Self::from_parts(n, n, data))
    }
}

impl TryFrom<Vec<Vec<Complex>>> for Matrix {
    type Error = MatrixError;

    /// Build from nested rows; every row must have the same length.
    fn try_from(rows: Vec<Vec<Complex>>) -> Result<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, |r| r.len());
        let mut data = Vec::with_capacity(nrows * ncols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != ncols {
                return Err(MatrixError::ShapeMismatch {
                    op: "row",
                    lhs: (i, ncols),
                    rhs: (i, row.len()),
                });
            }
            data.extend(row);
        }
        Ok(Self::from_parts(nrows, ncols, data))
    }
}

// ── Accessors ───────────────────────────────────────────────────────

impl Matrix {
    /// Number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Whether the matrix is quadratic.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Entry at 1-based `(row, col)`.
    ///
    /// Fails with [`MatrixError::IndexOutOfRange`] when either index is 0 or
    /// past the end.
    pub fn value(&self, row: usize, col: usize) -> Result<Complex> {
        if row == 0 || col == 0 || row > self.nrows || col > self.ncols {
            return Err(MatrixError::IndexOutOfRange {
                row,
                col,
                nrows: self.nrows,
                ncols: self.ncols,
            });
        }
        Ok(self.data[(row - 1) * self.ncols + (col - 1)])
    }

    /// Entry at 0-based `(row, col)`, or `None` out of range.
    pub fn entry(&self, row: usize, col: usize) -> Option<Complex> {
        if row < self.nrows && col < self.ncols {
            Some(self.data[row * self.ncols + col])
        } else {
            None
        }
    }

    /// Row `i` as a slice.
    pub fn row(&self, i: usize) -> &[Complex] {
        &self.data[i * self.ncols..(i + 1) * self.ncols]
    }

    /// Row-major view of all entries.
    pub fn as_slice(&self) -> &[Complex] {
        &self.data
    }
}

// ── MatrixRef / Scratch ─────────────────────────────────────────────

impl MatrixRef for Matrix {
    #[inline]
    fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.ncols
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> &Complex {
        &self.data[row * self.ncols + col]
    }
}

/// Mutable working copy of a [`Matrix`] for the in-place kernels.
///
/// `Matrix` itself is read-only outside the crate. The cached determinant
/// is dropped when the copy is taken, so the matrix handed back by
/// [`Scratch::into_matrix`] recomputes it on demand.
#[derive(Debug)]
pub(crate) struct Scratch(Matrix);

impl Scratch {
    pub(crate) fn new(mut m: Matrix) -> Self {
        m.det.take();
        Self(m)
    }

    pub(crate) fn into_matrix(self) -> Matrix {
        self.0
    }
}

impl MatrixRef for Scratch {
    #[inline]
    fn nrows(&self) -> usize {
        self.0.nrows
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.0.ncols
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> &Complex {
        MatrixRef::get(&self.0, row, col)
    }
}

impl MatrixMut for Scratch {
    #[inline]
    fn get_mut(&mut self, row: usize, col: usize) -> &mut Complex {
        let n = self.0.ncols;
        &mut self.0.data[row * n + col]
    }

    fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let n = self.0.ncols;
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let (head, tail) = self.0.data.split_at_mut(hi * n);
        head[lo * n..(lo + 1) * n].swap_with_slice(&mut tail[..n]);
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl Index<(usize, usize)> for Matrix {
    type Output = Complex;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Complex {
        assert!(
            row < self.nrows && col < self.ncols,
            "index ({}, {}) out of range for {}x{} matrix",
            row,
            col,
            self.nrows,
            self.ncols
        );
        &self.data[row * self.ncols + col]
    }
}

impl PartialEq for Matrix {
    /// Exact element-wise comparison; matrices of different shape are unequal.
    fn eq(&self, other: &Self) -> bool {
        self.nrows == other.nrows && self.ncols == other.ncols && self.data == other.data
    }
}
