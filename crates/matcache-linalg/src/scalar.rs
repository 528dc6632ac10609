//! Element types accepted by the inversion primitive

use ndarray::LinalgScalar;
use num_traits::{Float, NumCast};
use std::fmt::{Debug, Display};

/// Floating point element type usable in invertible matrices.
///
/// Implemented for every type that is both a [`Float`] and an ndarray
/// [`LinalgScalar`], which in practice means `f32` and `f64`.
pub trait Scalar: Float + LinalgScalar + Debug + Display + Send + Sync {
    /// Lossy conversion used for diagnostics and error payloads
    fn to_f64_lossy(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }

    /// Convert a tolerance expressed as `f64` into this element type.
    ///
    /// Positive tolerances are raised to at least [`Float::epsilon`], since a
    /// threshold below machine precision cannot tell a singular matrix from
    /// rounding noise. Zero stays zero.
    fn from_tolerance(value: f64) -> Self {
        let tolerance = <Self as NumCast>::from(value).unwrap_or_else(Self::epsilon);
        if tolerance > Self::zero() {
            tolerance.max(Self::epsilon())
        } else {
            tolerance
        }
    }
}

impl<T> Scalar for T where T: Float + LinalgScalar + Debug + Display + Send + Sync {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tolerance_conversion() {
        assert_eq!(f32::from_tolerance(0.5), 0.5f32);
        assert_eq!(f64::from_tolerance(1e-14), 1e-14);
    }

    #[test]
    fn test_tolerance_floors_at_epsilon() {
        assert_eq!(f32::from_tolerance(1e-14), f32::EPSILON);
        assert_eq!(f64::from_tolerance(1e-20), f64::EPSILON);
        assert_eq!(f32::from_tolerance(0.0), 0.0);
    }

    #[test]
    fn test_lossy_conversion() {
        assert_eq!(2.5f32.to_f64_lossy(), 2.5);
        assert!(f64::NAN.to_f64_lossy().is_nan());
    }
}
