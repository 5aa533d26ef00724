use crate::error::{MatrixError, Result};
use crate::traits::MatrixMut;

/// Perform LUP decomposition with partial pivoting, in place.
///
/// On return, `a` contains both L and U packed together:
/// - Upper triangle (including diagonal): U
/// - Lower triangle (excluding diagonal): L (diagonal of L is implicitly 1)
///
/// `perm` is filled with the row permutation indices. Returns the number of
/// row swaps performed.
///
/// Fails with [`MatrixError::Singular`] as soon as the best available pivot
/// has modulus below `tol`; `a` and `perm` are then left partially factored.
pub fn lup_in_place(a: &mut impl MatrixMut, perm: &mut [usize], tol: f64) -> Result<usize> {
    let mut swaps = 0;
    lup_counting(a, perm, tol, &mut swaps)?;
    Ok(swaps)
}

/// [`lup_in_place`] with the swap count kept in `swaps`, so it survives an
/// aborted factorization.
pub(crate) fn lup_counting(
    a: &mut impl MatrixMut,
    perm: &mut [usize],
    tol: f64,
    swaps: &mut usize,
) -> Result<()> {
    let n = a.nrows();
    assert_eq!(n, a.ncols(), "LUP decomposition requires a square matrix");
    assert_eq!(n, perm.len(), "permutation slice length must match matrix size");

    for (i, p) in perm.iter_mut().enumerate() {
        *p = i;
    }

    *swaps = 0;

    for col in 0..n {
        // Partial pivoting: find row with largest modulus in this column
        let mut max_row = col;
        let mut max_val = a.get(col, col).norm();
        for row in (col + 1)..n {
            let val = a.get(row, col).norm();
            if val > max_val {
                max_val = val;
                max_row = row;
            }
        }

        if max_val < tol {
            return Err(MatrixError::Singular);
        }

        if max_row != col {
            perm.swap(col, max_row);
            a.swap_rows(col, max_row);
            *swaps += 1;
        }

        let pivot = *a.get(col, col);
        for row in (col + 1)..n {
            let factor = *a.get(row, col) / pivot;
            *a.get_mut(row, col) = factor;
            for j in (col + 1)..n {
                let u = *a.get(col, j);
                *a.get_mut(row, j) -= factor * u;
            }
        }
    }

    Ok(())
}
