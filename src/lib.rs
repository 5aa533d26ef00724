//! # zmatrix
//!
//! Dense complex matrices and eigenvalues, no-std compatible (heap via
//! `alloc`). Eigenvalues are found the classical way: reduce to Hessenberg
//! form, build the characteristic polynomial, then factor it with
//! Bairstow's method.
//!
//! ## Quick start
//!
//! ```
//! use zmatrix::{Complex, Matrix};
//!
//! let a = Matrix::from_real([[0.0, -1.0], [1.0, 0.0]]);
//! assert_eq!(a.determinant().unwrap(), Complex::ONE);
//! assert_eq!(a.trace().unwrap(), Complex::ZERO);
//!
//! let ev = a.eigenvalues().unwrap(); // ±i
//! assert!(ev.iter().any(|z| (*z - Complex::I).norm() < 1e-12));
//! assert!(ev.iter().any(|z| (*z + Complex::I).norm() < 1e-12));
//! ```
//!
//! ## Modules
//!
//! - [`complex`] — the element type [`Complex`] (`num_complex::Complex64`)
//!   and [`ComplexExt`]: checked division, the real-axis square-root rule
//!   and rounded display. [`TOL`] is the pivot tolerance used by the
//!   determinant fast path and the default Bairstow tolerance.
//!
//! - [`matrix`] — Heap-allocated [`Matrix`] with runtime dimensions and
//!   `Vec<Complex>` row-major storage. Arithmetic, transpose/conjugate,
//!   structural predicates, inverse (adjugate), rank and a determinant that
//!   is computed once and cached.
//!
//! - [`linalg`] — LUP factorization, determinant with a cofactor fallback,
//!   unitary Hessenberg reduction and the Faddeev–LeVerrier characteristic
//!   polynomial. The in-place kernels operate on `&mut impl MatrixMut`.
//!
//! - [`optim`] — Bairstow polynomial root finder with per-factor
//!   convergence reporting.
//!
//! - [`traits`] — [`MatrixRef`] / [`MatrixMut`] element access for the
//!   in-place algorithms. [`Matrix`] is read-only and implements only
//!   [`MatrixRef`].
//!
//! ## Errors
//!
//! Fallible operations return [`Result<T>`] with a [`MatrixError`]. The
//! matrix operators `+`, `-` and `*` panic on shape mismatch, and `/` on
//! complex values yields `NaN` for a zero divisor; use the `checked_*`
//! methods to get an error instead.
//!
//! ## Logging
//!
//! Diagnostic records go through the [`log`](https://docs.rs/log) facade
//! under target `"zmatrix"`: `debug` when a determinant falls back to
//! cofactor expansion, `warn` when a Bairstow factor hits its iteration cap.
//! No logger is installed by the library.
//!
//! ## Cargo features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std`   | yes     | `std::error::Error`, thread-safe determinant cache, `std` float math |
//!
//! Without `std` the float functions come from `libm`.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod complex;
pub mod error;
pub mod linalg;
pub mod matrix;
pub mod optim;
pub mod traits;

pub use complex::{Complex, ComplexExt, TOL};
pub use error::{MatrixError, Result};
pub use matrix::Matrix;
pub use traits::{MatrixMut, MatrixRef};
