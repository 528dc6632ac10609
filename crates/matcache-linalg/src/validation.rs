//! Matrix validation utilities
//!
//! Checks run by the inversion primitive before any elimination work starts,
//! so that shape and data problems are reported with a stable error code
//! instead of surfacing as a misleading singular pivot.

use ndarray::ArrayView2;

use crate::{LinalgError, Result, Scalar};

/// Matrix validation utilities
pub struct MatrixValidator;

impl MatrixValidator {
    /// Validate that a matrix can be inverted shape-wise and return its order
    pub fn validate_square(dim: (usize, usize), operation: &str) -> Result<usize> {
        let (rows, cols) = dim;

        if rows == 0 || cols == 0 {
            return Err(LinalgError::invalid_shape(
                "MATRIX_EMPTY",
                "Cannot invert an empty matrix",
                format!("({}, {})", rows, cols),
                operation,
                "Replace the subject with a non-empty square matrix before inverting",
            ));
        }

        if rows != cols {
            return Err(LinalgError::invalid_shape(
                "MATRIX_NOT_SQUARE",
                format!(
                    "Only square matrices can be inverted, got {} rows and {} columns",
                    rows, cols
                ),
                format!("({}, {})", rows, cols),
                operation,
                "Use an n x n matrix; non-square systems need a pseudo-inverse",
            ));
        }

        Ok(rows)
    }

    /// Validate that every entry is finite
    pub fn validate_finite<T: Scalar>(matrix: ArrayView2<'_, T>, operation: &str) -> Result<()> {
        if let Some(((row, col), value)) = matrix.indexed_iter().find(|(_, v)| !v.is_finite()) {
            return Err(LinalgError::non_finite(
                "MATRIX_NON_FINITE",
                format!("Entry {} cannot take part in {}", value, operation),
                row,
                col,
                "Replace NaN or infinite values, or disable check_finite to let elimination decide",
            ));
        }
        Ok(())
    }

    /// Largest absolute entry, used to scale the pivot threshold
    pub fn max_abs<T: Scalar>(matrix: ArrayView2<'_, T>) -> T {
        matrix
            .iter()
            .fold(T::zero(), |acc, &v| if v.abs() > acc { v.abs() } else { acc })
    }
}
