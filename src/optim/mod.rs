//! Polynomial root finding.
//!
//! - [`bairstow`] — Bairstow's deflation: factors a complex-coefficient
//!   polynomial into quadratics by 2-variable Newton iteration and solves
//!   each factor with the quadratic formula.
//! - [`solve_quadratic`] — both roots of `x² + u·x + v`.
//!
//! Iteration limits and tolerances are carried by [`BairstowSettings`];
//! every quadratic factor reports whether it met the tolerance or hit the
//! iteration cap.

mod bairstow;

pub use bairstow::{bairstow, solve_quadratic, BairstowSettings};

use alloc::vec::Vec;

use crate::complex::Complex;

/// One quadratic factor `x² + u·x + v` split off during deflation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticFactor {
    /// Linear coefficient.
    pub u: Complex,
    /// Constant coefficient.
    pub v: Complex,
    /// Newton updates performed.
    pub iterations: usize,
    /// Whether the division remainder fell below the tolerance.
    pub converged: bool,
}

/// Result of a polynomial root search.
#[derive(Debug, Clone, PartialEq)]
pub struct PolynomialRoots {
    /// Roots in deflation order: each factor's pair, then a trailing
    /// linear root if the degree was odd.
    pub roots: Vec<Complex>,
    /// Quadratic factors in the order they were split off.
    pub factors: Vec<QuadraticFactor>,
}

impl PolynomialRoots {
    /// Whether every quadratic factor converged.
    pub fn converged(&self) -> bool {
        self.factors.iter().all(|f| f.converged)
    }

    /// Total Newton updates across all factors.
    pub fn iterations(&self) -> usize {
        self.factors.iter().map(|f| f.iterations).sum()
    }
}
