//! Gauss-Jordan inversion
//!
//! Reduces the augmented system `[A | I]` to `[I | A^-1]` with partial
//! pivoting. Every column is eliminated both above and below the pivot, so no
//! back substitution pass is needed.

use ndarray::{Array2, ArrayView2};
use tracing::trace;

use super::{find_pivot, swap_rows};
use crate::{validation::MatrixValidator, LinalgError, Result, Scalar};

/// Gauss-Jordan elimination with partial pivoting
pub struct GaussJordan;

impl GaussJordan {
    /// Inverts a square matrix.
    ///
    /// The caller is expected to have checked squareness. A pivot whose
    /// magnitude is `<= pivot_tolerance * max|A|` aborts with
    /// [`LinalgError::Singular`].
    pub fn invert<T: Scalar>(matrix: ArrayView2<'_, T>, pivot_tolerance: f64) -> Result<Array2<T>> {
        let n = matrix.nrows();
        let threshold = T::from_tolerance(pivot_tolerance) * MatrixValidator::max_abs(matrix);

        let mut work = matrix.to_owned();
        let mut inverse = Array2::<T>::eye(n);

        for col in 0..n {
            let (pivot_row, magnitude) = find_pivot(work.view(), col, col);
            if magnitude <= threshold {
                return Err(LinalgError::singular(
                    "MATRIX_SINGULAR",
                    "Matrix is singular to working precision",
                    col,
                    magnitude.to_f64_lossy(),
                    "Check for linearly dependent rows or columns",
                ));
            }

            if pivot_row != col {
                trace!(col, pivot_row, "swapping rows");
                swap_rows(&mut work, col, pivot_row);
                swap_rows(&mut inverse, col, pivot_row);
            }

            let scale = T::one() / work[[col, col]];
            work.row_mut(col).mapv_inplace(|v| v * scale);
            inverse.row_mut(col).mapv_inplace(|v| v * scale);

            let work_pivot = work.row(col).to_owned();
            let inverse_pivot = inverse.row(col).to_owned();

            for row in 0..n {
                if row == col {
                    continue;
                }
                let factor = work[[row, col]];
                if factor == T::zero() {
                    continue;
                }
                work.row_mut(row).scaled_add(-factor, &work_pivot);
                inverse.row_mut(row).scaled_add(-factor, &inverse_pivot);
            }
        }

        Ok(inverse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn test_invert_2x2() {
        let a = array![[4.0, 7.0], [2.0, 6.0]];
        let inv = GaussJordan::invert(a.view(), 1e-14).unwrap();

        let expected = array![[0.6, -0.7], [-0.2, 0.4]];
        assert_abs_diff_eq!(inv, expected, epsilon = 1e-12);
    }

    #[test]
    fn test_invert_requires_pivoting() {
        // Zero in the leading position forces a row swap
        let a = array![[0.0, 1.0, 2.0], [1.0, 0.0, 3.0], [4.0, -3.0, 8.0]];
        let inv = GaussJordan::invert(a.view(), 1e-14).unwrap();

        let product = a.dot(&inv);
        assert_abs_diff_eq!(product, Array2::<f64>::eye(3), epsilon = 1e-12);
    }

    #[test]
    fn test_singular_matrix() {
        let a = array![[1.0, 2.0], [2.0, 4.0]];
        let err = GaussJordan::invert(a.view(), 1e-14).unwrap_err();

        match err {
            LinalgError::Singular { index, .. } => assert_eq!(index, 1),
            other => panic!("expected Singular, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_matrix_is_singular() {
        let a = Array2::<f32>::zeros((3, 3));
        let err = GaussJordan::invert(a.view(), 0.0).unwrap_err();
        assert!(err.is_singular());
    }

    #[test]
    fn test_invert_f32() {
        let a = array![[2.0f32, 0.0], [0.0, 8.0]];
        let inv = GaussJordan::invert(a.view(), 1e-6).unwrap();
        assert_abs_diff_eq!(inv, array![[0.5f32, 0.0], [0.0, 0.125]], epsilon = 1e-6);
    }
}
