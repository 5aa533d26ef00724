use alloc::vec;
use alloc::vec::Vec;

use crate::complex::{Complex, ComplexExt, TOL};
use crate::error::Result;

use super::{PolynomialRoots, QuadraticFactor};

/// Settings for [`bairstow`].
#[derive(Debug, Clone, Copy)]
pub struct BairstowSettings {
    /// Convergence tolerance on the squared remainder `|c|² + |d|²`.
    pub tol: f64,
    /// Maximum Newton updates per quadratic factor.
    pub max_iter: usize,
}

impl Default for BairstowSettings {
    fn default() -> Self {
        Self {
            tol: TOL,
            max_iter: 1000,
        }
    }
}

/// Bairstow's method for all roots of a polynomial.
///
/// `coeffs` holds `[a₀, a₁, …, aₙ]` in ascending powers; `aₙ` must be
/// nonzero. While the degree is at least 2 a quadratic factor
/// `x² + u·x + v` is refined from the seed `u = aₙ₋₁/aₙ`, `v = aₙ₋₂/aₙ`,
/// its two roots are recorded, and the polynomial is replaced by the
/// quotient. A remaining linear factor contributes `−a₀/a₁`.
///
/// Refinement stops when the division remainder drops below
/// `settings.tol` or after `settings.max_iter` updates; the outcome is
/// recorded per factor in [`PolynomialRoots::factors`]. A singular Newton
/// system (as for `x³ − 1`, whose seed `u = v = 0` is a stationary point)
/// shifts both coefficients by one and counts as an update.
///
/// # Errors
///
/// Returns [`MatrixError::DivisionByZero`](crate::MatrixError::DivisionByZero)
/// if the leading coefficient is zero.
///
/// # Example
///
/// ```
/// use zmatrix::Complex;
/// use zmatrix::optim::{bairstow, BairstowSettings};
///
/// // (x − 1)(x − 2)(x − 3) = x³ − 6x² + 11x − 6
/// let p = [-6.0, 11.0, -6.0, 1.0].map(Complex::from);
/// let r = bairstow(&p, &BairstowSettings::default()).unwrap();
/// assert!(r.converged());
/// let mut re: Vec<f64> = r.roots.iter().map(|z| z.re).collect();
/// re.sort_by(|a, b| a.partial_cmp(b).unwrap());
/// for (got, want) in re.iter().zip([1.0, 2.0, 3.0]) {
///     assert!((got - want).abs() < 1e-6);
/// }
/// ```
pub fn bairstow(coeffs: &[Complex], settings: &BairstowSettings) -> Result<PolynomialRoots> {
    let mut a = coeffs.to_vec();
    let mut roots = Vec::with_capacity(a.len().saturating_sub(1));
    let mut factors = Vec::with_capacity(a.len() / 2);

    while a.len() > 2 {
        let n = a.len();
        let lead = a[n - 1];
        let u = a[n - 2].checked_div(lead)?;
        let v = a[n - 3].checked_div(lead)?;

        let (factor, quotient) = refine_quadratic(&a, u, v, settings);
        if !factor.converged {
            log::warn!(
                target: "zmatrix",
                "quadratic factor of degree-{} polynomial did not converge in {} iterations",
                n - 1,
                factor.iterations
            );
        } else {
            log::trace!(
                target: "zmatrix",
                "quadratic factor of degree-{} polynomial converged in {} iterations",
                n - 1,
                factor.iterations
            );
        }

        let (r1, r2) = solve_quadratic(factor.u, factor.v);
        roots.push(r1);
        roots.push(r2);
        factors.push(factor);
        a = quotient;
    }

    if a.len() == 2 {
        roots.push(-a[0].checked_div(a[1])?);
    }

    Ok(PolynomialRoots { roots, factors })
}

/// Newton refinement of `x² + u·x + v` as a factor of `a`.
///
/// Returns the factor and the quotient polynomial (degree reduced by 2).
fn refine_quadratic(
    a: &[Complex],
    mut u: Complex,
    mut v: Complex,
    settings: &BairstowSettings,
) -> (QuadraticFactor, Vec<Complex>) {
    let deg = a.len() - 1;
    debug_assert!(deg >= 2);

    // b: quotient of a / (x² + ux + v); f: quotient of b / (x² + ux + v).
    // Two trailing zeros seed the backward recurrences.
    let mut b = vec![Complex::ZERO; deg + 1];
    let mut f = vec![Complex::ZERO; deg + 1];
    let mut iterations = 0usize;

    let converged = loop {
        for i in (0..=deg - 2).rev() {
            b[i] = a[i + 2] - u * b[i + 1] - v * b[i + 2];
            f[i] = b[i + 2] - u * f[i + 1] - v * f[i + 2];
        }

        // Remainder c·x + d
        let c = a[1] - u * b[0] - v * b[1];
        let d = a[0] - v * b[0];
        if c.norm_sqr() + d.norm_sqr() < settings.tol {
            break true;
        }
        if iterations >= settings.max_iter {
            break false;
        }

        let g = b[1] - u * f[0] - v * f[1];
        let h = b[0] - v * f[0];
        let det = v * g * g + h * (h - u * g);
        iterations += 1;
        if det == Complex::ZERO {
            log::trace!(
                target: "zmatrix",
                "singular Newton step at u = {}, v = {}, reseeding",
                u,
                v
            );
            u += Complex::ONE;
            v += Complex::ONE;
            continue;
        }

        // v's correction uses the freshly updated u
        u -= (g * d - h * c) / det;
        v -= ((g * u - h) * d - g * v * c) / det;
    };

    b.truncate(deg - 1);
    (
        QuadraticFactor {
            u,
            v,
            iterations,
            converged,
        },
        b,
    )
}

/// Both roots of `x² + u·x + v`, using the principal square root of the
/// discriminant. The second root is `−u − r₁` so the pair always sums to `−u`.
pub fn solve_quadratic(u: Complex, v: Complex) -> (Complex, Complex) {
    let disc = u * u - 4.0 * v;
    let r1 = (disc.lsqrt() - u) * 0.5;
    let r2 = -u - r1;
    (r1, r2)
}
