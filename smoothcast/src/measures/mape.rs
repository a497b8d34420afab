//! Mean and geometric mean absolute percentage error

use crate::error::Result;
use crate::measures::{ErrorMeasure, LocalError};
use smoothcast_math::{arithmetic_mean, geometric_share_product};

/// Absolute difference relative to the reference value, in percent.
///
/// A zero reference value yields [`LocalError::Excluded`].
fn absolute_percentage_error(actual: f64, predicted: f64) -> LocalError {
    if actual == 0.0 {
        return LocalError::Excluded;
    }

    LocalError::Value((predicted - actual).abs() / actual * 100.0)
}

/// Mean Absolute Percentage Error (MAPE)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MeanAbsolutePercentageError;

impl ErrorMeasure for MeanAbsolutePercentageError {
    fn name(&self) -> &str {
        "MAPE"
    }

    fn local_error(&self, actual: f64, predicted: f64) -> LocalError {
        absolute_percentage_error(actual, predicted)
    }

    fn aggregate(&self, errors: &[f64]) -> Result<f64> {
        Ok(arithmetic_mean(errors)?)
    }
}

/// Geometric Mean Absolute Percentage Error (GMAPE).
///
/// Each local error contributes `error^(1/n)` to a product, `n` being the
/// number of usable local errors. Errors of exactly zero are left out of the
/// product but still count towards `n`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GeometricMeanAbsolutePercentageError;

impl ErrorMeasure for GeometricMeanAbsolutePercentageError {
    fn name(&self) -> &str {
        "GMAPE"
    }

    fn local_error(&self, actual: f64, predicted: f64) -> LocalError {
        absolute_percentage_error(actual, predicted)
    }

    fn aggregate(&self, errors: &[f64]) -> Result<f64> {
        Ok(geometric_share_product(errors)?)
    }
}
