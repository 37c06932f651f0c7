//! # Unital
//!
//! A small linear-algebra engine over unit-typed scalars.
//!
//! Every scalar carries a magnitude and a symbolic unit tag; arithmetic
//! combines magnitudes while tracking how units compose under
//! multiplication and division. On top of that sit immutable matrices
//! with elementary row operations, Gauss-Jordan elimination, a cofactor
//! determinant, and a recursive search enumerating the distinct basic
//! solutions of an underdetermined system `Ax = b`.
//!
//! ## Quick Start
//!
//! ```rust
//! use unital::prelude::*;
//!
//! let system = Matrix::from_rows(&[
//!     vec![1.0, 0.0, 4.0],
//!     vec![0.0, 1.0, 5.0],
//! ])?;
//!
//! let reduced = system.gaussian();
//! let vertices = enumerate_basic_solutions(&system, 1);
//! assert!(vertices.iter().any(|s| s == &vec![4.0, 5.0]));
//! # let _ = reduced;
//! # Ok::<(), unital::linalg::MatrixError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use unital_core as core;
pub use unital_linalg as linalg;
pub use unital_solve as solve;
pub use unital_value as value;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use unital_core::{unit, unit_name, UnitId};
    pub use unital_linalg::{residual_error, Matrix, MatrixError, Vector};
    pub use unital_solve::{enumerate_basic_solutions, enumerate_with_stats, SearchStats};
    pub use unital_value::{Composite, Value};
}
