use alloc::vec::Vec;
use core::fmt;

use crate::complex::ComplexExt;
use crate::error::{MatrixError, Result};

use super::Matrix;

impl Matrix {
    /// Swap rows and columns.
    pub fn transpose(&self) -> Matrix {
        Matrix::from_fn(self.ncols, self.nrows, |i, j| self.data[j * self.ncols + i])
    }

    /// Element-wise complex conjugate.
    pub fn conjugate(&self) -> Matrix {
        let data = self.data.iter().map(|a| a.conj()).collect();
        Matrix::from_parts(self.nrows, self.ncols, data)
    }

    /// Conjugate transpose `Aᴴ`.
    pub fn conjugate_transpose(&self) -> Matrix {
        Matrix::from_fn(self.ncols, self.nrows, |i, j| {
            self.data[j * self.ncols + i].conj()
        })
    }

    /// Whether any entry has a nonzero imaginary part.
    pub fn is_complex(&self) -> bool {
        self.data.iter().any(|a| !a.is_real())
    }

    /// Copy of the matrix with row `row` and/or column `col` removed
    /// (0-based). `None` keeps that axis intact.
    ///
    /// ```
    /// use zmatrix::Matrix;
    /// let m = Matrix::from_real([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
    /// assert_eq!(
    ///     m.submatrix(Some(1), Some(0)).unwrap(),
    ///     Matrix::from_real([[2.0, 3.0], [8.0, 9.0]])
    /// );
    /// assert_eq!(m.submatrix(None, Some(2)).unwrap().shape(), (3, 2));
    /// assert!(m.submatrix(Some(3), None).is_err());
    /// ```
    pub fn submatrix(&self, row: Option<usize>, col: Option<usize>) -> Result<Matrix> {
        let row_bad = row.map_or(false, |r| r >= self.nrows);
        let col_bad = col.map_or(false, |c| c >= self.ncols);
        if row_bad || col_bad {
            return Err(MatrixError::IndexOutOfRange {
                row: row.unwrap_or(0),
                col: col.unwrap_or(0),
                nrows: self.nrows,
                ncols: self.ncols,
            });
        }
        Ok(self.delete(row, col))
    }

    /// Delete row `row` and column `col`. Both must be in range.
    pub(crate) fn minor(&self, row: usize, col: usize) -> Matrix {
        self.delete(Some(row), Some(col))
    }

    pub(super) fn delete(&self, row: Option<usize>, col: Option<usize>) -> Matrix {
        let nrows = self.nrows - usize::from(row.is_some());
        let ncols = self.ncols - usize::from(col.is_some());
        let mut data = Vec::with_capacity(nrows * ncols);
        for i in (0..self.nrows).filter(|&i| Some(i) != row) {
            for j in (0..self.ncols).filter(|&j| Some(j) != col) {
                data.push(self.data[i * self.ncols + j]);
            }
        }
        Matrix::from_parts(nrows, ncols, data)
    }
}

// ── Display ─────────────────────────────────────────────────────────

impl fmt::Display for Matrix {
    /// `Matrix[r|c]`, or `Complex Matrix[r|c]` when any entry has an
    /// imaginary part. The alternate form (`{:#}`) appends one line per row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_complex() {
            write!(f, "Complex ")?;
        }
        write!(f, "Matrix[{}|{}]", self.nrows, self.ncols)?;
        if f.alternate() {
            for i in 0..self.nrows {
                writeln!(f)?;
                for (j, a) in self.row(i).iter().enumerate() {
                    if j > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", a.rounded())?;
                }
            }
        }
        Ok(())
    }
}
