//! # unital-linalg
//!
//! Matrix and vector core over unit-typed scalars.
//!
//! This crate provides:
//! - Immutable [`Matrix`] / [`Vector`] value types over
//!   [`Composite`](unital_value::Composite) entries
//! - Elementary row operations and the `base_vector` pivot step
//! - Gauss-Jordan elimination and a cofactor-expansion determinant
//! - Matrix product, difference, squared-sum and residual error
//!
//! ## Semantics
//!
//! Every operation returns a new matrix; callers never observe aliasing
//! or mutation. Structural problems (empty matrix, ragged rows,
//! dimension mismatches) are explicit [`MatrixError`]s, while arithmetic
//! degeneracy — a zero pivot during normalization or elimination —
//! silently propagates IEEE-754 infinities and NaN.
//!
//! The determinant uses cofactor expansion along the first row. Its cost
//! is factorial in the matrix size; it is meant for small matrices, and
//! an LU-based replacement would change the observable unit composition
//! of the accumulation.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod elim;
pub mod error;
pub mod matrix;


pub use error::MatrixError;
pub use matrix::{residual_error, Matrix, Vector};
