//! Gauss-Jordan elimination and the cofactor determinant.

use num_traits::Zero;
use unital_value::Composite;

use crate::error::MatrixError;
use crate::matrix::{Matrix, Vector};

impl Matrix {
    /// The canonical pivot step of Gauss-Jordan elimination.
    ///
    /// Normalizes `row` at `col` (the anchor becomes 1), then subtracts
    /// `normalized_row * other[col]` from every other row, zeroing the
    /// column everywhere but the pivot row. A zero anchor propagates
    /// infinities or NaN instead of failing.
    ///
    /// # Panics
    ///
    /// Panics if the indices are out of range.
    #[must_use]
    pub fn base_vector(&self, row: usize, col: usize) -> Self {
        let normalized = self.normalize_row(row, col);
        let pivot_row = normalized.row(row).clone();

        Self::from_parts(
            normalized
                .rows()
                .iter()
                .enumerate()
                .map(|(i, r)| {
                    if i == row {
                        r.clone()
                    } else {
                        let coeff = r.values()[col].clone();
                        r.subtract(&pivot_row.scale(&coeff))
                    }
                })
                .collect(),
        )
    }

    /// Gauss-Jordan reduction along the main diagonal.
    ///
    /// Applies [`Matrix::base_vector`] at `(i, i)` for each diagonal
    /// index, producing reduced row-echelon form on well-conditioned
    /// input. No row swapping is performed: a zero diagonal entry at any
    /// step propagates infinities or NaN through the rest of the
    /// reduction rather than terminating.
    ///
    /// # Panics
    ///
    /// Panics on a zero-row matrix.
    #[must_use]
    pub fn gaussian(&self) -> Self {
        (0..self.height().min(self.width()))
            .fold(self.clone(), |acc, i| acc.base_vector(i, i))
    }

    /// Determinant by recursive cofactor expansion along the first row.
    ///
    /// Accumulation happens in the composite algebra, so determinants of
    /// unit-tagged matrices compose units exactly as multiplication and
    /// sum would.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::Empty`] for a zero-row matrix and
    /// [`MatrixError::DimensionMismatch`] for a non-square one.
    pub fn det(&self) -> Result<Composite, MatrixError> {
        if self.is_empty() {
            return Err(MatrixError::Empty);
        }
        if self.height() != self.width() {
            return Err(MatrixError::DimensionMismatch {
                left: (self.height(), self.width()),
                right: (self.height(), self.height()),
            });
        }

        let n = self.height();
        match n {
            1 => Ok(self.row(0).values()[0].clone()),
            2 => {
                let a = &self.row(0).values()[0];
                let b = &self.row(0).values()[1];
                let c = &self.row(1).values()[0];
                let d = &self.row(1).values()[1];
                Ok(a.multiply(d).subtract(&b.multiply(c)))
            }
            _ => {
                let mut acc = Composite::zero();
                for col in 0..n {
                    let cofactor = self.row(0).values()[col].multiply(&self.minor(col).det()?);
                    acc = if col % 2 == 0 {
                        acc.sum(&cofactor)
                    } else {
                        acc.subtract(&cofactor)
                    };
                }
                Ok(acc)
            }
        }
    }

    // The sub-matrix with row 0 and the given column removed.
    fn minor(&self, col: usize) -> Self {
        Self::from_parts(
            self.rows()[1..]
                .iter()
                .map(|r| {
                    Vector::new(
                        r.values()
                            .iter()
                            .enumerate()
                            .filter(|(i, _)| *i != col)
                            .map(|(_, v)| v.clone())
                            .collect(),
                    )
                })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_vector_pivots() {
        let m = Matrix::from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();

        let p = m.base_vector(0, 0);
        assert_eq!(
            p.to_numeric(),
            vec![vec![1.0, 2.0, 3.0], vec![0.0, -3.0, -6.0]]
        );

        let q = m.base_vector(0, 1);
        assert_eq!(q.to_numeric()[0], vec![0.5, 1.0, 1.5]);
        assert_eq!(q.to_numeric()[1], vec![4.0 - 0.5 * 5.0, 0.0, 6.0 - 1.5 * 5.0]);

        let r = m.base_vector(1, 2);
        assert_eq!(r.to_numeric()[1], vec![4.0 / 6.0, 5.0 / 6.0, 1.0]);
        assert_eq!(
            r.to_numeric()[0],
            vec![
                1.0 - (4.0 / 6.0) * 3.0,
                2.0 - (5.0 / 6.0) * 3.0,
                3.0 - (6.0 / 6.0) * 3.0
            ]
        );
    }

    #[test]
    fn test_gaussian_zero_pivot_is_silent() {
        let m = Matrix::from_rows(&[vec![0.0, 1.0, 2.0], vec![1.0, 0.0, 3.0]]).unwrap();
        // First diagonal anchor is zero; the reduction completes with
        // non-finite entries instead of panicking.
        let g = m.gaussian();
        let flat: Vec<f64> = g.to_numeric().into_iter().flatten().collect();
        assert!(flat.iter().any(|v| !v.is_finite()));
    }

    #[test]
    fn test_det_base_cases() {
        let empty = Matrix::new(Vec::new()).unwrap();
        assert_eq!(empty.det(), Err(MatrixError::Empty));

        let one = Matrix::from_rows(&[vec![7.0]]).unwrap();
        assert_eq!(one.det().unwrap().numerize(), 7.0);

        let two = Matrix::from_rows(&[vec![3.0, 8.0], vec![4.0, 6.0]]).unwrap();
        // 3*6 - 8*4 = -14
        assert_eq!(two.det().unwrap().numerize(), -14.0);
    }

    #[test]
    fn test_det_three_by_three() {
        let m = Matrix::from_rows(&[
            vec![6.0, 1.0, 1.0],
            vec![4.0, -2.0, 5.0],
            vec![2.0, 8.0, 7.0],
        ])
        .unwrap();
        assert_eq!(m.det().unwrap().numerize(), -306.0);
    }

    #[test]
    fn test_det_non_square_is_error() {
        let m = Matrix::from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        assert_eq!(
            m.det(),
            Err(MatrixError::DimensionMismatch {
                left: (2, 3),
                right: (2, 2)
            })
        );
    }

    #[test]
    fn test_det_singular() {
        let m = Matrix::from_rows(&[
            vec![1.0, 2.0, 3.0],
            vec![2.0, 4.0, 6.0],
            vec![1.0, 1.0, 1.0],
        ])
        .unwrap();
        assert_eq!(m.det().unwrap().numerize(), 0.0);
    }
}
