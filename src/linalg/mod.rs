//! Determinants, Hessenberg reduction and characteristic polynomials.
//!
//! In-place kernels ([`lup_in_place`], [`hessenberg_in_place`]) take
//! `&mut impl MatrixMut` so they run on any storage; the remaining items
//! work on [`Matrix`](crate::Matrix) and back the convenience methods
//! `m.determinant()`, `m.hessenberg()` and `m.characteristic_polynomial()`.

pub(crate) mod charpoly;
pub(crate) mod determinant;
pub(crate) mod hessenberg;
pub(crate) mod lu;

pub use charpoly::CharacteristicPolynomial;
pub use determinant::{cofactor_determinant, Decomposition, Determinant, DeterminantMethod};
pub use hessenberg::{hessenberg, hessenberg_in_place};
pub use lu::lup_in_place;
