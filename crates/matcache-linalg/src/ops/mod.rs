//! Dense elimination kernels

pub mod gauss_jordan;
pub mod lu;
pub mod residual;

// Re-export commonly used operations
pub use gauss_jordan::*;
pub use lu::*;
pub use residual::*;

use ndarray::{Array2, ArrayView2, Axis};

use crate::Scalar;

/// Swap two rows of a matrix in place
pub(crate) fn swap_rows<T: Scalar>(matrix: &mut Array2<T>, a: usize, b: usize) {
    if a == b {
        return;
    }
    for col in 0..matrix.ncols() {
        matrix.swap([a, col], [b, col]);
    }
}

/// Find the row at or below `start` holding the largest magnitude in `col`
pub(crate) fn find_pivot<T: Scalar>(
    matrix: ArrayView2<'_, T>,
    start: usize,
    col: usize,
) -> (usize, T) {
    matrix
        .index_axis(Axis(1), col)
        .iter()
        .enumerate()
        .skip(start)
        .fold((start, T::zero()), |(best_row, best), (row, &v)| {
            if v.abs() > best {
                (row, v.abs())
            } else {
                (best_row, best)
            }
        })
}
