//! Error types for pimc.
//!
//! All fallible operations return `Result<T, PiError>` instead of panicking.
//! The sampling core has exactly one failure mode, a rejected non-positive
//! batch or sample count; everything else belongs to the configuration
//! layer.

use thiserror::Error;

/// Result type alias for pimc operations.
pub type PiResult<T> = Result<T, PiError>;

/// Unified error type for all pimc operations.
#[derive(Debug, Error)]
pub enum PiError {
    // ===== Invalid arguments (sampling core) =====
    /// Batch size must be a positive integer.
    #[error("invalid batch size {got}: must be positive")]
    InvalidBatchSize {
        /// The rejected batch size.
        got: u64,
    },

    /// Sample count must be a positive integer.
    #[error("invalid sample count {got}: must be positive")]
    InvalidSampleCount {
        /// The rejected sample count.
        got: u64,
    },

    // ===== Configuration errors =====
    /// Invalid configuration parameter.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// YAML parsing error.
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    // ===== I/O Errors =====
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PiError {
    /// Create a configuration error with a message.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Check if this error is the sampling core's invalid-argument
    /// condition (as opposed to a configuration failure).
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::InvalidBatchSize { .. } | Self::InvalidSampleCount { .. }
        )
    }
}
