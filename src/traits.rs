use crate::complex::Complex;

/// Read-only access to a matrix-like grid of complex values.
///
/// Algorithms in [`crate::linalg`] are written against this trait and
/// [`MatrixMut`] so they can run in place on any row/column addressable
/// storage. Indices are 0-based.
pub trait MatrixRef {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;
    fn get(&self, row: usize, col: usize) -> &Complex;
}

/// Mutable access to a matrix-like type.
///
/// Extends `MatrixRef` with mutable element access, enabling
/// in-place algorithms (LUP, Hessenberg) to work generically.
pub trait MatrixMut: MatrixRef {
    fn get_mut(&mut self, row: usize, col: usize) -> &mut Complex;

    /// Exchange rows `a` and `b`.
    fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for j in 0..self.ncols() {
            let tmp = *self.get(a, j);
            *self.get_mut(a, j) = *self.get(b, j);
            *self.get_mut(b, j) = tmp;
        }
    }
}
