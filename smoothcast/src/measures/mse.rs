//! Mean squared error

use crate::error::Result;
use crate::measures::{ErrorMeasure, LocalError};
use smoothcast_math::arithmetic_mean;

/// Mean Squared Error (MSE). No pair is ever excluded.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MeanSquaredError;

impl ErrorMeasure for MeanSquaredError {
    fn name(&self) -> &str {
        "MSE"
    }

    fn local_error(&self, actual: f64, predicted: f64) -> LocalError {
        LocalError::Value((predicted - actual).powi(2))
    }

    fn aggregate(&self, errors: &[f64]) -> Result<f64> {
        Ok(arithmetic_mean(errors)?)
    }
}
