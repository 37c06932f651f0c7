//! Structural errors of the matrix core.

use thiserror::Error;

/// All structural errors returned by `unital-linalg`.
///
/// Arithmetic degeneracy (division by a zero magnitude) is not an error:
/// it propagates as infinities or NaN through the value algebra and
/// callers validate results via residual checks.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MatrixError {
    /// An operation that requires at least one row was given none.
    #[error("empty matrix")]
    Empty,

    /// A row's length disagrees with the first row's.
    #[error("row {row} has {len} columns, expected {expected}")]
    Ragged {
        /// Index of the offending row.
        row: usize,
        /// Length of the offending row.
        len: usize,
        /// Length of the first row.
        expected: usize,
    },

    /// Operand shapes are incompatible for the requested operation.
    #[error("dimension mismatch: {left:?} vs {right:?}")]
    DimensionMismatch {
        /// Shape of the left operand as (height, width).
        left: (usize, usize),
        /// Shape of the right operand as (height, width).
        right: (usize, usize),
    },
}
