//! Configuration for the inversion primitive

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{LinalgError, Result};

/// Elimination algorithm used to compute an inverse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InversionMethod {
    /// Gauss-Jordan elimination on the augmented matrix `[A | I]`
    GaussJordan,
    /// LU factorization followed by triangular solves
    Lu,
}

/// Options forwarded to the inversion primitive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvertConfig {
    /// Elimination algorithm
    pub method: InversionMethod,

    /// Relative pivot threshold for singularity detection.
    ///
    /// A pivot is rejected when `|pivot| <= pivot_tolerance * max|A|`. Positive
    /// values below the element type's machine epsilon are raised to it, so the
    /// default is effectively `f32::EPSILON` for `f32` matrices.
    pub pivot_tolerance: f64,

    /// Reject matrices containing NaN or infinite entries before elimination
    pub check_finite: bool,
}

impl Default for InvertConfig {
    fn default() -> Self {
        Self {
            method: InversionMethod::Lu,
            pivot_tolerance: 1e-14,
            check_finite: true,
        }
    }
}

impl InvertConfig {
    /// Builder: set the elimination algorithm
    pub fn with_method(mut self, method: InversionMethod) -> Self {
        self.method = method;
        self
    }

    /// Builder: set the relative pivot threshold
    pub fn with_pivot_tolerance(mut self, tolerance: f64) -> Self {
        self.pivot_tolerance = tolerance;
        self
    }

    /// Builder: enable or disable the finiteness check
    pub fn with_check_finite(mut self, check: bool) -> Self {
        self.check_finite = check;
        self
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !self.pivot_tolerance.is_finite() || self.pivot_tolerance < 0.0 {
            return Err(LinalgError::invalid_config(
                "CONFIG_INVALID_TOLERANCE",
                format!(
                    "pivot_tolerance must be finite and non-negative, got {}",
                    self.pivot_tolerance
                ),
                "pivot_tolerance",
                "Use a small positive value such as 1e-14, or 0.0 to reject only exact zeros",
            ));
        }

        Ok(())
    }
}
