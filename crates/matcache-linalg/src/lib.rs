//! Matcache Linalg: dense matrix inversion
//!
//! This crate provides the inversion primitive used by the matcache inverse
//! cache, along with the validation, configuration and error types around it.
//!
//! # Features
//!
//! - **Two elimination methods**: LU factorization and Gauss-Jordan, both with partial pivoting
//! - **Relative singularity threshold**: pivots are compared against `pivot_tolerance * max|A|`
//! - **Pluggable primitive**: [`Inverter`] is implemented by [`DenseInverter`] and by closures
//! - **TOML configuration**: [`InvertConfig`] can be loaded from and saved to disk
//! - **Coded errors**: every [`LinalgError`] carries a stable code and a suggestion
//!
//! # Example
//!
//! ```rust
//! use matcache_linalg::{invert, is_inverse_of, InvertConfig, InversionMethod};
//! use ndarray::array;
//!
//! let a = array![[2.0, -1.0], [-1.0, 2.0]];
//! let config = InvertConfig::default().with_method(InversionMethod::GaussJordan);
//!
//! let inv = invert(&a, &config)?;
//! assert!(is_inverse_of(&a, &inv, 1e-12));
//!
//! # Ok::<(), matcache_linalg::LinalgError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod inverse;
pub mod ops;
pub mod scalar;
pub mod validation;

// Re-export main types
pub use config::{InversionMethod, InvertConfig};
pub use error::{LinalgError, Result};
pub use inverse::{invert, DenseInverter, Inverter};
pub use ops::{identity_residual, is_inverse_of, GaussJordan, LuDecomposition, LuFactors};
pub use scalar::Scalar;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        invert, is_inverse_of, validation::MatrixValidator, DenseInverter, InversionMethod,
        InvertConfig, Inverter, LinalgError, Result, Scalar,
    };
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
