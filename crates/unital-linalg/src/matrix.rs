//! Immutable matrix and vector value types.

use std::fmt;

use num_traits::Zero;
use unital_value::{Composite, ParseTermError};

use crate::error::MatrixError;

/// An ordered sequence of composite values, one per column slot.
///
/// Position is identity: the column index of a slot is meaningful and
/// preserved by every operation.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Vector {
    values: Vec<Composite>,
}

impl Vector {
    /// Creates a vector from composite values.
    #[must_use]
    pub fn new(values: Vec<Composite>) -> Self {
        Self { values }
    }

    /// Creates a vector of plain numbers.
    #[must_use]
    pub fn from_slice(nums: &[f64]) -> Self {
        Self {
            values: Composite::from_slice(nums),
        }
    }

    /// Parses a vector from term strings, e.g. `&["2i+3j", "4", "-k"]`.
    ///
    /// Plain numbers and unit-annotated terms mix freely.
    ///
    /// # Errors
    ///
    /// Returns the first term string that fails to parse.
    pub fn parse(terms: &[&str]) -> Result<Self, ParseTermError> {
        let values = terms
            .iter()
            .map(|t| t.parse())
            .collect::<Result<Vec<Composite>, _>>()?;
        Ok(Self { values })
    }

    /// Returns the number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the vector has no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the values in column order.
    #[must_use]
    pub fn values(&self) -> &[Composite] {
        &self.values
    }

    /// Returns the value at a slot, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Composite> {
        self.values.get(index)
    }

    /// Element-wise subtraction.
    ///
    /// # Panics
    ///
    /// Panics if the lengths differ; row operations only ever pair rows
    /// of one rectangular matrix.
    #[must_use]
    pub fn subtract(&self, other: &Self) -> Self {
        assert_eq!(self.len(), other.len(), "vector length mismatch");
        Self {
            values: self
                .values
                .iter()
                .zip(&other.values)
                .map(|(a, b)| a.subtract(b))
                .collect(),
        }
    }

    /// Multiplies every slot by a coefficient.
    #[must_use]
    pub fn scale(&self, coeff: &Composite) -> Self {
        Self {
            values: self.values.iter().map(|v| v.multiply(coeff)).collect(),
        }
    }

    /// Divides every slot by a coefficient.
    ///
    /// A zero coefficient yields infinite or NaN magnitudes, silently.
    #[must_use]
    pub fn divide(&self, coeff: &Composite) -> Self {
        Self {
            values: self.values.iter().map(|v| v.divide(coeff)).collect(),
        }
    }

    /// Numerizes every slot, dropping non-number terms.
    #[must_use]
    pub fn to_numeric(&self) -> Vec<f64> {
        self.values.iter().map(Composite::numerize).collect()
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.values.iter().map(ToString::to_string).collect();
        write!(f, "[{}]", parts.join(", "))
    }
}

/// A rectangular, immutable matrix of composite values.
///
/// Rows all have equal length; this is validated at construction. Every
/// operation returns a new matrix — callers never observe mutation of a
/// value they still hold.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    rows: Vec<Vector>,
}

impl Matrix {
    /// Creates a matrix from row vectors, validating rectangularity.
    ///
    /// A zero-row matrix is permitted; most operations on it fail fast.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::Ragged`] if any row's length differs from
    /// the first row's.
    pub fn new(rows: Vec<Vector>) -> Result<Self, MatrixError> {
        if let Some(first) = rows.first() {
            let expected = first.len();
            for (row, v) in rows.iter().enumerate() {
                if v.len() != expected {
                    return Err(MatrixError::Ragged {
                        row,
                        len: v.len(),
                        expected,
                    });
                }
            }
        }
        Ok(Self { rows })
    }

    /// Creates a plain-number matrix from numeric rows.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::Ragged`] if the rows have unequal lengths.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, MatrixError> {
        Self::new(rows.iter().map(|r| Vector::from_slice(r)).collect())
    }

    // Internal constructor for shapes produced by our own operations.
    pub(crate) fn from_parts(rows: Vec<Vector>) -> Self {
        Self { rows }
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Returns the row length.
    ///
    /// # Panics
    ///
    /// Panics on a zero-row matrix: a width is undefined there and
    /// continuing would corrupt downstream index arithmetic.
    #[must_use]
    pub fn width(&self) -> usize {
        assert!(!self.rows.is_empty(), "width of an empty matrix");
        self.rows[0].len()
    }

    /// Returns true if the matrix has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the rows.
    #[must_use]
    pub fn rows(&self) -> &[Vector] {
        &self.rows
    }

    /// Returns a single row.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of range.
    #[must_use]
    pub fn row(&self, row: usize) -> &Vector {
        &self.rows[row]
    }

    /// Returns the entry at (row, col), if in range.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&Composite> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Returns one vector per column, built by folding rows into column
    /// accumulators.
    #[must_use]
    pub fn columns(&self) -> Vec<Vector> {
        if self.rows.is_empty() {
            return Vec::new();
        }
        let mut columns = vec![Vec::with_capacity(self.height()); self.width()];
        for row in &self.rows {
            for (col, value) in row.values().iter().enumerate() {
                columns[col].push(value.clone());
            }
        }
        columns.into_iter().map(Vector::new).collect()
    }

    /// Returns the transpose.
    #[must_use]
    pub fn transpose(&self) -> Self {
        Self::from_parts(self.columns())
    }

    /// Returns the last column — the `b` of an augmented system `[A|b]`.
    ///
    /// # Panics
    ///
    /// Panics on a zero-row matrix.
    #[must_use]
    pub fn augmented_column(&self) -> Vector {
        let last = self.width() - 1;
        Vector::new(
            self.rows
                .iter()
                .map(|r| r.values()[last].clone())
                .collect(),
        )
    }

    /// Returns a sub-matrix over half-open column range `x1..x2` and row
    /// range `y1..y2`.
    ///
    /// A non-positive `x2` or `y2` counts from the end: `width + x2` and
    /// `height + y2`, so `slice(0, -1, 0, 0)` is "all rows, all but the
    /// last column".
    ///
    /// # Panics
    ///
    /// Panics on a zero-row matrix or if a resolved bound exceeds the
    /// matrix shape.
    #[must_use]
    pub fn slice(&self, x1: usize, x2: isize, y1: usize, y2: isize) -> Self {
        let x2 = resolve_bound(x2, self.width());
        let y2 = resolve_bound(y2, self.height());

        Self::from_parts(
            self.rows[y1..y2]
                .iter()
                .map(|r| Vector::new(r.values()[x1..x2].to_vec()))
                .collect(),
        )
    }

    /// Applies `f` to every entry, preserving the shape.
    #[must_use]
    pub fn map<F: Fn(&Composite) -> Composite>(&self, f: F) -> Self {
        Self::from_parts(
            self.rows
                .iter()
                .map(|r| Vector::new(r.values().iter().map(&f).collect()))
                .collect(),
        )
    }

    /// Collapses every entry to its plain-number part.
    #[must_use]
    pub fn numerized(&self) -> Self {
        self.map(|c| Composite::num(c.numerize()))
    }

    /// Numerizes the whole matrix into nested `f64` rows.
    ///
    /// Valid only when every entry is unit-free: non-number terms are
    /// silently dropped to 0.
    #[must_use]
    pub fn to_numeric(&self) -> Vec<Vec<f64>> {
        self.rows.iter().map(Vector::to_numeric).collect()
    }

    /// Returns a new matrix with `row` multiplied by `coeff`.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of range.
    #[must_use]
    pub fn scale_row(&self, row: usize, coeff: &Composite) -> Self {
        assert!(row < self.height(), "row index out of range");
        self.with_row(row, self.rows[row].scale(coeff))
    }

    /// Returns a new matrix with `row` divided by `coeff`.
    ///
    /// A zero coefficient propagates infinities or NaN, silently.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of range.
    #[must_use]
    pub fn divide_row(&self, row: usize, coeff: &Composite) -> Self {
        assert!(row < self.height(), "row index out of range");
        self.with_row(row, self.rows[row].divide(coeff))
    }

    /// Returns a new matrix with row `source` subtracted from `target`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[must_use]
    pub fn subtract_row(&self, target: usize, source: usize) -> Self {
        assert!(target < self.height(), "row index out of range");
        self.with_row(target, self.rows[target].subtract(&self.rows[source]))
    }

    /// Returns a new matrix with `row` divided by its own entry at `col`
    /// (the anchor), making the anchor exactly 1.
    ///
    /// A zero anchor yields infinite or NaN entries rather than failing.
    ///
    /// # Panics
    ///
    /// Panics if the indices are out of range.
    #[must_use]
    pub fn normalize_row(&self, row: usize, col: usize) -> Self {
        let anchor = self.rows[row].values()[col].clone();
        self.divide_row(row, &anchor)
    }

    fn with_row(&self, index: usize, replacement: Vector) -> Self {
        Self::from_parts(
            self.rows
                .iter()
                .enumerate()
                .map(|(i, r)| if i == index { replacement.clone() } else { r.clone() })
                .collect(),
        )
    }

    /// Standard matrix product.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] unless
    /// `self.width() == other.height()`.
    pub fn multiply(&self, other: &Self) -> Result<Self, MatrixError> {
        if self.is_empty() || other.is_empty() || self.width() != other.height() {
            return Err(self.mismatch(other));
        }

        let columns = other.columns();
        let rows = self
            .rows
            .iter()
            .map(|row| {
                Vector::new(
                    columns
                        .iter()
                        .map(|column| dot(row, column))
                        .collect(),
                )
            })
            .collect();
        Ok(Self::from_parts(rows))
    }

    /// Element-wise difference.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] unless the shapes are
    /// identical.
    pub fn difference(&self, other: &Self) -> Result<Self, MatrixError> {
        if self.height() != other.height()
            || (!self.is_empty() && self.width() != other.width())
        {
            return Err(self.mismatch(other));
        }

        Ok(Self::from_parts(
            self.rows
                .iter()
                .zip(&other.rows)
                .map(|(a, b)| a.subtract(b))
                .collect(),
        ))
    }

    /// Sum of squared entries — a Frobenius-style scalar.
    #[must_use]
    pub fn sum_squares(&self) -> Composite {
        self.rows
            .iter()
            .flat_map(|r| r.values())
            .fold(Composite::zero(), |acc, v| acc.sum(&v.multiply(v)))
    }

    fn mismatch(&self, other: &Self) -> MatrixError {
        let shape = |m: &Self| (m.height(), if m.is_empty() { 0 } else { m.width() });
        MatrixError::DimensionMismatch {
            left: shape(self),
            right: shape(other),
        }
    }
}

fn dot(row: &Vector, column: &Vector) -> Composite {
    row.values()
        .iter()
        .zip(column.values())
        .fold(Composite::zero(), |acc, (a, b)| acc.sum(&a.multiply(b)))
}

fn resolve_bound(bound: isize, len: usize) -> usize {
    let len = isize::try_from(len).expect("matrix dimension overflows isize");
    let resolved = if bound <= 0 { len + bound } else { bound };
    usize::try_from(resolved).expect("slice bound before start")
}

/// Residual between an actual and an expected matrix: the numerized sum
/// of squared element-wise differences. Near zero for a correct solve.
///
/// # Errors
///
/// Returns [`MatrixError::DimensionMismatch`] when the shapes differ.
pub fn residual_error(actual: &Matrix, expected: &Matrix) -> Result<f64, MatrixError> {
    Ok(actual.difference(expected)?.sum_squares().numerize())
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|r| r.values().iter().map(ToString::to_string).collect())
            .collect();
        let max_len = cells
            .iter()
            .flatten()
            .map(String::len)
            .max()
            .unwrap_or(0);

        writeln!(f, "[")?;
        for row in &cells {
            let padded: Vec<String> = row.iter().map(|s| format!("{s:>max_len$}")).collect();
            writeln!(f, "  {}", padded.join(", "))?;
        }
        write!(f, "]")
    }
}
