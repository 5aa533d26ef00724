/// Errors from matrix construction, arithmetic, and decompositions.
///
/// Returned by every fallible operation in the crate. Shape problems come in
/// two flavours: [`MatrixError::NotSquare`] for operations that need a
/// quadratic matrix, and [`MatrixError::ShapeMismatch`] for operands that do
/// not fit together.
///
/// ```
/// use zmatrix::{Matrix, MatrixError};
///
/// let rect = Matrix::from_real([[1.0, 2.0, 3.0]]);
/// assert_eq!(rect.trace().unwrap_err(), MatrixError::NotSquare { nrows: 1, ncols: 3 });
///
/// let singular = Matrix::from_real([[1.0, 2.0], [2.0, 4.0]]);
/// assert_eq!(singular.inverse().unwrap_err(), MatrixError::Singular);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// The operation requires a quadratic matrix.
    NotSquare {
        /// Rows of the offending matrix.
        nrows: usize,
        /// Columns of the offending matrix.
        ncols: usize,
    },
    /// Operand shapes are incompatible.
    ShapeMismatch {
        /// Operation that was attempted.
        op: &'static str,
        /// `(rows, cols)` of the left operand.
        lhs: (usize, usize),
        /// `(rows, cols)` of the right operand.
        rhs: (usize, usize),
    },
    /// The matrix is not regular (zero determinant).
    Singular,
    /// Complex division by zero.
    DivisionByZero,
    /// Row or column index outside the matrix.
    IndexOutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Rows of the matrix.
        nrows: usize,
        /// Columns of the matrix.
        ncols: usize,
    },
}

impl MatrixError {
    /// Whether this is a shape error (non-quadratic input or mismatched operands).
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            MatrixError::NotSquare { .. } | MatrixError::ShapeMismatch { .. }
        )
    }
}

impl core::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MatrixError::NotSquare { nrows, ncols } => {
                write!(f, "operation requires a quadratic matrix, got {}x{}", nrows, ncols)
            }
            MatrixError::ShapeMismatch { op, lhs, rhs } => write!(
                f,
                "dimension mismatch: {}x{} {} {}x{}",
                lhs.0, lhs.1, op, rhs.0, rhs.1
            ),
            MatrixError::Singular => write!(f, "matrix is singular"),
            MatrixError::DivisionByZero => write!(f, "division by zero complex value"),
            MatrixError::IndexOutOfRange {
                row,
                col,
                nrows,
                ncols,
            } => write!(
                f,
                "index ({}, {}) out of range for {}x{} matrix",
                row, col, nrows, ncols
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MatrixError {}

/// Result type alias using [`MatrixError`].
pub type Result<T> = core::result::Result<T, MatrixError>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display_messages() {
        let e = MatrixError::ShapeMismatch {
            op: "+",
            lhs: (2, 3),
            rhs: (3, 2),
        };
        assert_eq!(e.to_string(), "dimension mismatch: 2x3 + 3x2");
        assert_eq!(
            MatrixError::NotSquare { nrows: 1, ncols: 4 }.to_string(),
            "operation requires a quadratic matrix, got 1x4"
        );
        assert_eq!(
            MatrixError::DivisionByZero.to_string(),
            "division by zero complex value"
        );
    }

    #[test]
    fn shape_classification() {
        assert!(MatrixError::NotSquare { nrows: 2, ncols: 3 }.is_shape_error());
        assert!(!MatrixError::Singular.is_shape_error());
        assert!(!MatrixError::IndexOutOfRange {
            row: 0,
            col: 0,
            nrows: 0,
            ncols: 0
        }
        .is_shape_error());
    }
}
