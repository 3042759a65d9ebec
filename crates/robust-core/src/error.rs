//! Error types for plot point generation
//!
//! Provides a unified error type for all robust-plot crates. The variants fall
//! into three groups: configuration errors (the caller passed impossible
//! input), out-of-domain errors (an interpolation function was queried outside
//! the keys it knows about), and validation errors (a computed coordinate was
//! NaN or infinite).

use thiserror::Error;

/// Core error type for point generation and aggregation
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Query outside the range an interpolation function is defined on
    #[error("Value at x={x} is undefined, function is defined on [{min}, {max}]")]
    OutOfDomain { x: f64, min: f64, max: f64 },

    /// A computed value was NaN or infinite
    #[error("Non-finite value {value} in {context}")]
    NonFinite { context: String, value: f64 },

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for empty input
    pub fn empty_input(_operation: &str) -> Self {
        Self::InsufficientData {
            expected: 1,
            actual: 0,
        }
    }

    /// Create an error for size mismatch
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::InvalidInput(format!(
            "Size mismatch in {context}: expected {expected}, got {actual}"
        ))
    }

    /// Create an error for a NaN/Inf value
    pub fn non_finite(context: &str, value: f64) -> Self {
        Self::NonFinite {
            context: context.to_string(),
            value,
        }
    }

    /// Create an error for a query outside `[min, max]`
    pub fn out_of_domain(x: f64, min: f64, max: f64) -> Self {
        Self::OutOfDomain { x, min, max }
    }

    /// True for errors caused by caller misuse (bad counts, ranges, or shapes)
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::InvalidParameter(_) | Self::InvalidInput(_) | Self::InsufficientData { .. }
        )
    }

    /// True for interpolation queries outside the defined key range
    pub fn is_out_of_domain(&self) -> bool {
        matches!(self, Self::OutOfDomain { .. })
    }

    /// True for NaN/Inf values rejected while generating points
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::NonFinite { .. })
    }
}
