//! Error types for the smoothcast crate

use polars::prelude::PolarsError;
use smoothcast_math::MathError;
use thiserror::Error;

/// Custom error types for the smoothcast crate
#[derive(Debug, Error)]
pub enum ForecastError {
    /// A parameter value is outside its valid interval
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// A required parameter was not supplied
    #[error("Missing parameter: {0}")]
    MissingParameter(String),

    /// Not enough points to run the requested operation
    #[error("Insufficient data: need at least {needed}, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// A value needed by a computation is absent
    #[error("Missing value at index {0}")]
    MissingValue(usize),

    /// Error window bounds outside [0, 100] or inverted
    #[error("Invalid error window: {0}")]
    InvalidWindow(String),

    /// Every local error in the window was excluded
    #[error("No usable error values in window [{start}, {end}]")]
    EmptyWindow { start: f64, end: f64 },

    /// The algorithm exists but has no implementation
    #[error("Not implemented: {0}")]
    NotImplemented(String),

    /// Error related to data validation or processing
    #[error("Data error: {0}")]
    DataError(String),

    /// Two sequences that must be parallel have different lengths
    #[error("Dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Error from the numeric kernels
    #[error("Math error: {0}")]
    Math(#[from] MathError),

    /// Error from Polars operations
    #[error("Polars error: {0}")]
    PolarsError(String),

    /// Error from (de)serializing parameters
    #[error("Serialization error: {0}")]
    SerdeError(String),
}

impl ForecastError {
    /// Errors raised while building a method from its parameters
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            ForecastError::InvalidParameter(_)
                | ForecastError::MissingParameter(_)
                | ForecastError::SerdeError(_)
        )
    }

    /// Errors raised because call-time input does not meet a precondition
    pub fn is_precondition_error(&self) -> bool {
        matches!(
            self,
            ForecastError::InsufficientData { .. }
                | ForecastError::MissingValue(_)
                | ForecastError::InvalidWindow(_)
                | ForecastError::DimensionMismatch { .. }
        )
    }
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;

impl From<PolarsError> for ForecastError {
    fn from(err: PolarsError) -> Self {
        ForecastError::PolarsError(err.to_string())
    }
}

impl From<serde_json::Error> for ForecastError {
    fn from(err: serde_json::Error) -> Self {
        ForecastError::SerdeError(err.to_string())
    }
}
