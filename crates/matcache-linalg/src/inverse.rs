//! The inversion primitive and the trait that abstracts over it

use ndarray::Array2;
use tracing::debug;

use crate::config::{InversionMethod, InvertConfig};
use crate::ops::{GaussJordan, LuDecomposition};
use crate::validation::MatrixValidator;
use crate::{Result, Scalar};

/// Something that can turn a square matrix into its inverse.
///
/// Callers treat implementations as opaque: the configuration is handed
/// through untouched and failures come back as `Self::Error` unchanged.
/// Any closure `Fn(&Array2<T>, &InvertConfig) -> Result<Array2<T>, E>` is an
/// inverter, which makes it easy to wrap or replace the built-in one.
pub trait Inverter<T> {
    /// Error returned when the matrix cannot be inverted
    type Error;

    /// Compute the inverse of `matrix`
    fn invert(
        &self,
        matrix: &Array2<T>,
        config: &InvertConfig,
    ) -> std::result::Result<Array2<T>, Self::Error>;
}

impl<T, E, F> Inverter<T> for F
where
    F: Fn(&Array2<T>, &InvertConfig) -> std::result::Result<Array2<T>, E>,
{
    type Error = E;

    fn invert(
        &self,
        matrix: &Array2<T>,
        config: &InvertConfig,
    ) -> std::result::Result<Array2<T>, E> {
        self(matrix, config)
    }
}

/// Built-in dense inverter backed by [`invert`]
#[derive(Debug, Clone, Copy, Default)]
pub struct DenseInverter;

impl<T: Scalar> Inverter<T> for DenseInverter {
    type Error = crate::LinalgError;

    fn invert(&self, matrix: &Array2<T>, config: &InvertConfig) -> Result<Array2<T>> {
        invert(matrix, config)
    }
}

/// Inverts a square matrix.
///
/// Rejects empty and non-square input, and NaN/infinite entries when
/// `config.check_finite` is set, before dispatching on `config.method`.
///
/// # Example
///
/// ```
/// use matcache_linalg::{invert, InvertConfig};
/// use ndarray::array;
///
/// let a = array![[4.0f64, 7.0], [2.0, 6.0]];
/// let inv = invert(&a, &InvertConfig::default())?;
/// assert!((inv[[0, 0]] - 0.6).abs() < 1e-12);
/// # Ok::<(), matcache_linalg::LinalgError>(())
/// ```
pub fn invert<T: Scalar>(matrix: &Array2<T>, config: &InvertConfig) -> Result<Array2<T>> {
    const OPERATION: &str = "matrix inversion";

    config.validate()?;
    let n = MatrixValidator::validate_square(matrix.dim(), OPERATION)?;
    if config.check_finite {
        MatrixValidator::validate_finite(matrix.view(), OPERATION)?;
    }

    debug!(n, method = ?config.method, "inverting matrix");

    match config.method {
        InversionMethod::GaussJordan => GaussJordan::invert(matrix.view(), config.pivot_tolerance),
        InversionMethod::Lu => LuDecomposition::factor(matrix.view(), config.pivot_tolerance)
            .map(|factors| factors.inverse()),
    }
}
