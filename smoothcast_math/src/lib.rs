//! # Smoothcast Math
//!
//! Numeric kernels shared by the smoothing methods and the error measures.
//! This crate provides the single-step exponential smoothing recurrences,
//! percentage window selection and the aggregation helpers used to turn a
//! window of local errors into one score.

use thiserror::Error;

pub mod aggregate;
pub mod recurrence;
pub mod window;

pub use aggregate::{arithmetic_mean, geometric_share_product};
pub use recurrence::{holt_update, ses_update, time_step, HoltState};
pub use window::PercentageWindow;

/// Errors that can occur in smoothing and aggregation calculations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Insufficient data for calculation: {0}")]
    InsufficientData(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for smoothing math operations
pub type Result<T> = std::result::Result<T, MathError>;
