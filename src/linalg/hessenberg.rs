use num_traits::Float;

use crate::complex::Complex;
use crate::error::{MatrixError, Result};
use crate::matrix::{Matrix, Scratch};
use crate::traits::MatrixMut;

/// Reduce a square matrix to upper Hessenberg form via Givens similarity
/// rotations: `G A G^H = H`.
///
/// For each pivot column `j` and each row `i > j + 1` with a nonzero entry,
/// a unitary rotation of rows `j + 1` and `i` annihilates `a[i, j]`; the
/// conjugate-transposed rotation is then applied to columns `j + 1` and `i`
/// so that eigenvalues are preserved. When the subdiagonal entry is
/// negligible next to the target the rotation degenerates to a plain
/// exchange (`cos = 0`, `sin = 1`).
///
/// On return `a` is overwritten with H.
pub fn hessenberg_in_place(a: &mut impl MatrixMut) {
    let n = a.nrows();
    assert_eq!(n, a.ncols(), "hessenberg requires a square matrix");

    for j in 0..n.saturating_sub(2) {
        let p = j + 1;
        for q in (j + 2)..n {
            let b = *a.get(q, j);
            if b == Complex::ZERO {
                continue;
            }
            let x = *a.get(p, j);

            // Row rotation:    r_p' = c r_p - conj(s) r_q,  r_q' = s r_p + c r_q
            // Column rotation: c_p' = c c_p - s c_q,        c_q' = conj(s) c_p + c c_q
            let (w, c, s) = if x.norm() < f64::EPSILON * b.norm() {
                log::trace!(target: "zmatrix", "degenerate rotation at ({}, {})", q, j);
                (-b, 0.0, Complex::ONE)
            } else {
                let r = Float::sqrt(x.norm_sqr() + b.norm_sqr());
                // x is nonzero on this branch
                let w = (x / x.norm()) * r;
                (w, x.norm() / r, -(b / w))
            };
            let s_conj = s.conj();

            for k in p..n {
                let ap = *a.get(p, k);
                let aq = *a.get(q, k);
                *a.get_mut(p, k) = ap * c - s_conj * aq;
                *a.get_mut(q, k) = s * ap + aq * c;
            }
            *a.get_mut(p, j) = w;
            *a.get_mut(q, j) = Complex::ZERO;

            for k in 0..n {
                let ap = *a.get(k, p);
                let aq = *a.get(k, q);
                *a.get_mut(k, p) = ap * c - s * aq;
                *a.get_mut(k, q) = s_conj * ap + aq * c;
            }
        }
    }
}

/// Upper Hessenberg matrix similar to `m`.
///
/// ```
/// use zmatrix::Matrix;
/// use zmatrix::linalg::hessenberg;
///
/// let m = Matrix::from_real([
///     [4.0, 1.0, -2.0, 2.0],
///     [1.0, 2.0, 0.0, 1.0],
///     [-2.0, 0.0, 3.0, -2.0],
///     [2.0, 1.0, -2.0, -1.0],
/// ]);
/// let h = hessenberg(&m).unwrap();
/// assert!(h[(2, 0)].norm() < 1e-12 && h[(3, 0)].norm() < 1e-12 && h[(3, 1)].norm() < 1e-12);
/// assert!((h.trace().unwrap() - m.trace().unwrap()).norm() < 1e-12);
/// ```
pub fn hessenberg(m: &Matrix) -> Result<Matrix> {
    if !m.is_square() {
        return Err(MatrixError::NotSquare {
            nrows: m.nrows(),
            ncols: m.ncols(),
        });
    }
    let mut work = Scratch::new(m.clone());
    hessenberg_in_place(&mut work);
    Ok(work.into_matrix())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    fn c(re: f64, im: f64) -> Complex {
        Complex::new(re, im)
    }

    fn assert_hessenberg(h: &Matrix) {
        let n = h.nrows();
        for i in 0..n {
            for j in 0..i.saturating_sub(1) {
                assert!(
                    h[(i, j)] == Complex::ZERO,
                    "H[({},{})] = {} should be zero",
                    i,
                    j,
                    h[(i, j)]
                );
            }
        }
    }

    #[test]
    fn hessenberg_3x3() {
        let orig = Matrix::from_real([[4.0, 1.0, -2.0], [1.0, 2.0, 0.0], [-2.0, 0.0, 3.0]]);
        let h = hessenberg(&orig).unwrap();
        assert_hessenberg(&h);

        // first column: |(1, -2)| carried to the subdiagonal with the sign of a[1,0]
        assert!((h[(1, 0)] - Complex::from(5.0_f64.sqrt())).norm() < TOL);
        assert_eq!(h[(0, 0)], orig[(0, 0)]);

        assert!((h.trace().unwrap() - orig.trace().unwrap()).norm() < TOL);
        assert!((h.determinant().unwrap() - orig.determinant().unwrap()).norm() < TOL);
    }

    #[test]
    fn hessenberg_preserves_symmetry() {
        // Orthogonal similarity of a symmetric matrix stays symmetric (tridiagonal)
        let orig = Matrix::from_real([
            [4.0, 1.0, -2.0, 2.0],
            [1.0, 2.0, 0.0, 1.0],
            [-2.0, 0.0, 3.0, -2.0],
            [2.0, 1.0, -2.0, -1.0],
        ]);
        let h = hessenberg(&orig).unwrap();
        assert_hessenberg(&h);
        for i in 0..4 {
            for j in 0..4 {
                assert!(
                    (h[(i, j)] - h[(j, i)]).norm() < TOL,
                    "H[({},{})] = {}, H[({},{})] = {}",
                    i,
                    j,
                    h[(i, j)],
                    j,
                    i,
                    h[(j, i)]
                );
            }
        }
    }

    #[test]
    fn hessenberg_complex_similarity() {
        let orig = Matrix::new([
            [c(1.0, 1.0), c(2.0, 0.0), c(0.0, -1.0), c(1.0, 0.0)],
            [c(0.5, 0.0), c(3.0, -1.0), c(1.0, 0.0), c(0.0, 2.0)],
            [c(0.0, 1.0), c(-1.0, 0.0), c(2.0, 0.0), c(1.0, 1.0)],
            [c(2.0, -2.0), c(0.0, 0.5), c(1.0, 0.0), c(-1.0, 0.0)],
        ]);
        let h = hessenberg(&orig).unwrap();
        assert_hessenberg(&h);

        let dt = orig.determinant().unwrap();
        let dh = h.determinant().unwrap();
        assert!((dt - dh).norm() < TOL * dt.norm(), "{} vs {}", dt, dh);
        assert!((orig.trace().unwrap() - h.trace().unwrap()).norm() < TOL);
    }

    #[test]
    fn degenerate_rotation_swaps_rows() {
        // a[1,0] == 0 forces the exchange rotation
        let orig = Matrix::from_real([[1.0, 2.0, 3.0], [0.0, 4.0, 5.0], [6.0, 7.0, 8.0]]);
        let h = hessenberg(&orig).unwrap();
        assert_hessenberg(&h);
        assert_eq!(h[(1, 0)], Complex::from(-6.0));
        assert!((h.trace().unwrap() - orig.trace().unwrap()).norm() < TOL);
        assert!((h.determinant().unwrap() - orig.determinant().unwrap()).norm() < TOL);
    }

    #[test]
    fn already_hessenberg_unchanged() {
        let orig = Matrix::from_real([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [0.0, 7.0, 8.0]]);
        let h = hessenberg(&orig).unwrap();
        assert_eq!(h, orig);
    }

    #[test]
    fn small_and_rectangular() {
        let one = Matrix::from_real([[5.0]]);
        assert_eq!(hessenberg(&one).unwrap(), one);
        let rect = Matrix::from_real([[1.0, 2.0]]);
        assert_eq!(
            hessenberg(&rect).unwrap_err(),
            MatrixError::NotSquare { nrows: 1, ncols: 2 }
        );
    }
}
