//! Inverse verification helpers

use ndarray::{ArrayBase, Data, Ix2};

use crate::{LinalgError, Result, Scalar};

/// Largest absolute deviation of `matrix * inverse` from the identity
pub fn identity_residual<T, S1, S2>(
    matrix: &ArrayBase<S1, Ix2>,
    inverse: &ArrayBase<S2, Ix2>,
) -> Result<T>
where
    T: Scalar,
    S1: Data<Elem = T>,
    S2: Data<Elem = T>,
{
    let (rows, inner) = matrix.dim();
    let (inv_rows, inv_cols) = inverse.dim();
    if rows != inner || inv_rows != inner || inv_cols != rows {
        return Err(LinalgError::invalid_shape(
            "RESIDUAL_SHAPE_MISMATCH",
            "Matrix and candidate inverse must be square with matching order",
            format!("({}, {}) x ({}, {})", rows, inner, inv_rows, inv_cols),
            "identity residual",
            "Compare an n x n matrix with an n x n candidate inverse",
        ));
    }

    let product = matrix.dot(inverse);
    let residual = product.indexed_iter().fold(T::zero(), |worst, ((i, j), &v)| {
        let target = if i == j { T::one() } else { T::zero() };
        let deviation = (v - target).abs();
        if deviation > worst {
            deviation
        } else {
            worst
        }
    });
    Ok(residual)
}

/// Whether `inverse` inverts `matrix` to within `tolerance`
///
/// Shape mismatches count as "not an inverse" rather than an error.
pub fn is_inverse_of<T, S1, S2>(
    matrix: &ArrayBase<S1, Ix2>,
    inverse: &ArrayBase<S2, Ix2>,
    tolerance: T,
) -> bool
where
    T: Scalar,
    S1: Data<Elem = T>,
    S2: Data<Elem = T>,
{
    identity_residual(matrix, inverse)
        .map(|residual| residual <= tolerance)
        .unwrap_or(false)
}
