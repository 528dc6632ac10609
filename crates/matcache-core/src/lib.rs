//! Matcache Core - memoizing matrix inverse cache
//!
//! This crate pairs an [`InverseCache`], which owns a matrix and an optional
//! cached inverse, with the [`solve`] and [`solve_with`] functions, which
//! return the cached inverse when present and otherwise compute it through a
//! [`matcache_linalg::Inverter`] and store it.
//!
//! The cache is single-owner: the solver takes `&mut InverseCache`, so sharing
//! one across threads requires external synchronization such as a `Mutex`
//! around the whole solve call.
//!
//! # Example
//!
//! ```rust
//! use matcache_core::prelude::*;
//! use ndarray::array;
//!
//! let mut cache = InverseCache::new(array![[4.0, 7.0], [2.0, 6.0]]);
//! let inverse = solve(&mut cache, &DenseInverter)?.clone();
//! assert!(cache.is_cached());
//!
//! // Replacing the subject drops the stale inverse
//! cache.set_subject(array![[1.0, 0.0], [0.0, 2.0]]);
//! assert!(cache.inverse().is_none());
//!
//! let fresh = solve(&mut cache, &DenseInverter)?;
//! assert_ne!(fresh, &inverse);
//!
//! # Ok::<(), matcache_linalg::LinalgError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cache;
pub mod solver;

// Re-export main types
pub use cache::InverseCache;
pub use solver::{solve, solve_with};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{solve, solve_with, InverseCache};
    pub use matcache_linalg::{DenseInverter, InversionMethod, InvertConfig, Inverter, LinalgError};
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
