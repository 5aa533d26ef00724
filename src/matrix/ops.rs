use alloc::vec::Vec;
use core::ops::{Add, Mul, Neg, Sub};

use crate::complex::Complex;
use crate::error::{MatrixError, Result};

use super::Matrix;

// ── Checked arithmetic ──────────────────────────────────────────────

impl Matrix {
    fn zip_with(
        &self,
        rhs: &Matrix,
        op: &'static str,
        f: impl Fn(Complex, Complex) -> Complex,
    ) -> Result<Matrix> {
        if self.shape() != rhs.shape() {
            return Err(MatrixError::ShapeMismatch {
                op,
                lhs: self.shape(),
                rhs: rhs.shape(),
            });
        }
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(Matrix::from_parts(self.nrows, self.ncols, data))
    }

    /// Element-wise sum; shapes must match.
    ///
    /// ```
    /// use zmatrix::{Matrix, MatrixError};
    /// let a = Matrix::from_real([[1.0, 2.0]]);
    /// assert_eq!(a.checked_add(&a).unwrap(), Matrix::from_real([[2.0, 4.0]]));
    /// assert!(matches!(
    ///     a.checked_add(&Matrix::zeros(2)),
    ///     Err(MatrixError::ShapeMismatch { .. })
    /// ));
    /// ```
    pub fn checked_add(&self, rhs: &Matrix) -> Result<Matrix> {
        self.zip_with(rhs, "+", |a, b| a + b)
    }

    /// Element-wise difference; shapes must match.
    pub fn checked_sub(&self, rhs: &Matrix) -> Result<Matrix> {
        self.zip_with(rhs, "-", |a, b| a - b)
    }

    /// Matrix product; requires `self.ncols() == rhs.nrows()`.
    pub fn checked_mul(&self, rhs: &Matrix) -> Result<Matrix> {
        if self.ncols != rhs.nrows {
            return Err(MatrixError::ShapeMismatch {
                op: "*",
                lhs: self.shape(),
                rhs: rhs.shape(),
            });
        }
        Ok(self.matmul(rhs))
    }

    /// Product without the shape check. Panics on mismatched inner dimension.
    pub(crate) fn matmul(&self, rhs: &Matrix) -> Matrix {
        assert_eq!(self.ncols, rhs.nrows, "inner dimension mismatch");
        let (m, n, p) = (self.nrows, self.ncols, rhs.ncols);
        let mut data = Vec::with_capacity(m * p);
        for i in 0..m {
            let row = self.row(i);
            for j in 0..p {
                let mut sum = Complex::ZERO;
                for (k, &a) in row.iter().enumerate().take(n) {
                    sum += a * rhs.data[k * p + j];
                }
                data.push(sum);
            }
        }
        Matrix::from_parts(m, p, data)
    }

    /// `self + s·I` for a quadratic matrix.
    pub(crate) fn add_diagonal(mut self, s: Complex) -> Matrix {
        let n = self.nrows.min(self.ncols);
        for i in 0..n {
            self.data[i * self.ncols + i] += s;
        }
        self.det.take();
        self
    }

    /// Multiply every element by a complex scalar.
    pub fn scale(&self, s: Complex) -> Matrix {
        let data = self.data.iter().map(|&a| a * s).collect();
        Matrix::from_parts(self.nrows, self.ncols, data)
    }

    /// Multiply every element by a real scalar.
    pub fn scale_real(&self, s: f64) -> Matrix {
        let data = self.data.iter().map(|&a| a * s).collect();
        Matrix::from_parts(self.nrows, self.ncols, data)
    }
}

// ── Operators ───────────────────────────────────────────────────────
//
// The operator forms panic on shape mismatch; use the checked methods
// to handle it.

impl Neg for &Matrix {
    type Output = Matrix;
    fn neg(self) -> Matrix {
        let data = self.data.iter().map(|&a| -a).collect();
        Matrix::from_parts(self.nrows, self.ncols, data)
    }
}

impl Neg for Matrix {
    type Output = Matrix;
    fn neg(self) -> Matrix {
        -&self
    }
}

macro_rules! binop {
    ($trait:ident, $method:ident, $checked:ident) => {
        impl $trait<&Matrix> for &Matrix {
            type Output = Matrix;
            fn $method(self, rhs: &Matrix) -> Matrix {
                self.$checked(rhs).unwrap_or_else(|e| panic!("{}", e))
            }
        }

        impl $trait<Matrix> for Matrix {
            type Output = Matrix;
            fn $method(self, rhs: Matrix) -> Matrix {
                (&self).$method(&rhs)
            }
        }

        impl $trait<&Matrix> for Matrix {
            type Output = Matrix;
            fn $method(self, rhs: &Matrix) -> Matrix {
                (&self).$method(rhs)
            }
        }

        impl $trait<Matrix> for &Matrix {
            type Output = Matrix;
            fn $method(self, rhs: Matrix) -> Matrix {
                self.$method(&rhs)
            }
        }
    };
}

binop!(Add, add, checked_add);
binop!(Sub, sub, checked_sub);
binop!(Mul, mul, checked_mul);

impl Mul<&Matrix> for Complex {
    type Output = Matrix;
    fn mul(self, rhs: &Matrix) -> Matrix {
        rhs.scale(self)
    }
}

impl Mul<Matrix> for Complex {
    type Output = Matrix;
    fn mul(self, rhs: Matrix) -> Matrix {
        rhs.scale(self)
    }
}

impl Mul<Complex> for &Matrix {
    type Output = Matrix;
    fn mul(self, rhs: Complex) -> Matrix {
        self.scale(rhs)
    }
}

impl Mul<Complex> for Matrix {
    type Output = Matrix;
    fn mul(self, rhs: Complex) -> Matrix {
        self.scale(rhs)
    }
}

impl Mul<&Matrix> for f64 {
    type Output = Matrix;
    fn mul(self, rhs: &Matrix) -> Matrix {
        rhs.scale_real(self)
    }
}

impl Mul<Matrix> for f64 {
    type Output = Matrix;
    fn mul(self, rhs: Matrix) -> Matrix {
        rhs.scale_real(self)
    }
}

impl Mul<f64> for &Matrix {
    type Output = Matrix;
    fn mul(self, rhs: f64) -> Matrix {
        self.scale_real(rhs)
    }
}

impl Mul<f64> for Matrix {
    type Output = Matrix;
    fn mul(self, rhs: f64) -> Matrix {
        self.scale_real(rhs)
    }
}
