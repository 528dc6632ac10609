//! Error types for matrix inversion

use thiserror::Error;

/// Errors that can occur while validating or inverting a matrix
#[derive(Error, Debug)]
pub enum LinalgError {
    /// The matrix shape cannot be inverted
    #[error("Invalid shape [{code}]: {message}\nShape: {shape}\nOperation: {operation}\nSuggestion: {suggestion}")]
    InvalidShape {
        /// Error code for programmatic handling
        code: &'static str,
        /// Human-readable error message
        message: String,
        /// String representation of the offending shape
        shape: String,
        /// The operation that failed
        operation: String,
        /// Suggested fix for the error
        suggestion: String,
    },

    /// Elimination hit a pivot that is zero or below tolerance
    #[error("Singular matrix [{code}]: {message}\nPivot index: {index}, value: {value:e}\nSuggestion: {suggestion}")]
    Singular {
        /// Error code for programmatic handling
        code: &'static str,
        /// Human-readable error message
        message: String,
        /// Column at which elimination failed
        index: usize,
        /// Magnitude of the rejected pivot
        value: f64,
        /// Suggested fix for the error
        suggestion: String,
    },

    /// The matrix contains NaN or infinite entries
    #[error("Non-finite entry [{code}]: {message}\nPosition: ({row}, {col})\nSuggestion: {suggestion}")]
    NonFinite {
        /// Error code for programmatic handling
        code: &'static str,
        /// Human-readable error message
        message: String,
        /// Row of the first non-finite entry
        row: usize,
        /// Column of the first non-finite entry
        col: usize,
        /// Suggested fix for the error
        suggestion: String,
    },

    /// Inversion configuration is out of range
    #[error("Invalid configuration [{code}]: {message}\nField: {field}\nSuggestion: {suggestion}")]
    InvalidConfig {
        /// Error code for programmatic handling
        code: &'static str,
        /// Human-readable error message
        message: String,
        /// Name of the offending field
        field: String,
        /// Suggested fix for the error
        suggestion: String,
    },

    /// Reading or writing a configuration file failed
    #[error("Configuration I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file could not be parsed
    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// A configuration could not be serialized
    #[error("Configuration serialize error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

/// Convenient result type for linear algebra operations
pub type Result<T> = std::result::Result<T, LinalgError>;

impl LinalgError {
    /// Create an invalid shape error
    pub fn invalid_shape<S1, S2, S3, S4>(
        code: &'static str,
        message: S1,
        shape: S2,
        operation: S3,
        suggestion: S4,
    ) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
        S3: Into<String>,
        S4: Into<String>,
    {
        Self::InvalidShape {
            code,
            message: message.into(),
            shape: shape.into(),
            operation: operation.into(),
            suggestion: suggestion.into(),
        }
    }

    /// Create a singular matrix error
    pub fn singular<S1, S2>(
        code: &'static str,
        message: S1,
        index: usize,
        value: f64,
        suggestion: S2,
    ) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        Self::Singular {
            code,
            message: message.into(),
            index,
            value,
            suggestion: suggestion.into(),
        }
    }

    /// Create a non-finite entry error
    pub fn non_finite<S1, S2>(
        code: &'static str,
        message: S1,
        row: usize,
        col: usize,
        suggestion: S2,
    ) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        Self::NonFinite {
            code,
            message: message.into(),
            row,
            col,
            suggestion: suggestion.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_config<S1, S2, S3>(
        code: &'static str,
        message: S1,
        field: S2,
        suggestion: S3,
    ) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
        S3: Into<String>,
    {
        Self::InvalidConfig {
            code,
            message: message.into(),
            field: field.into(),
            suggestion: suggestion.into(),
        }
    }

    /// Get the error code for programmatic handling
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidShape { code, .. } => code,
            Self::Singular { code, .. } => code,
            Self::NonFinite { code, .. } => code,
            Self::InvalidConfig { code, .. } => code,
            Self::Io(_) => "CONFIG_IO",
            Self::ConfigParse(_) => "CONFIG_PARSE",
            Self::ConfigSerialize(_) => "CONFIG_SERIALIZE",
        }
    }

    /// Check if this is a shape-related error
    pub fn is_shape_error(&self) -> bool {
        matches!(self, Self::InvalidShape { .. })
    }

    /// Check if the matrix was rejected as singular
    pub fn is_singular(&self) -> bool {
        matches!(self, Self::Singular { .. })
    }

    /// Check if this error came from loading or saving configuration
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidConfig { .. }
                | Self::Io(_)
                | Self::ConfigParse(_)
                | Self::ConfigSerialize(_)
        )
    }
}
