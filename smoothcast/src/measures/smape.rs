//! Symmetric mean absolute percentage error

use crate::error::Result;
use crate::measures::{ErrorMeasure, LocalError};
use smoothcast_math::arithmetic_mean;

/// Symmetric Mean Absolute Percentage Error (SMAPE), in `[0, 200]`.
///
/// A pair where both values are zero is excluded.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SymmetricMeanAbsolutePercentageError;

impl ErrorMeasure for SymmetricMeanAbsolutePercentageError {
    fn name(&self) -> &str {
        "SMAPE"
    }

    fn local_error(&self, actual: f64, predicted: f64) -> LocalError {
        let denominator = actual.abs() + predicted.abs();
        if denominator == 0.0 {
            return LocalError::Excluded;
        }

        LocalError::Value((predicted - actual).abs() / denominator * 200.0)
    }

    fn aggregate(&self, errors: &[f64]) -> Result<f64> {
        Ok(arithmetic_mean(errors)?)
    }
}
