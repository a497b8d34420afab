//! Aggregation of local error values into a single score

use crate::{MathError, Result};
use statrs::statistics::Statistics;

/// Arithmetic mean of `values`.
///
/// Fails on an empty slice instead of returning `NaN`.
pub fn arithmetic_mean(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(MathError::InsufficientData(
            "Cannot average an empty set of values".to_string(),
        ));
    }

    Ok(values.iter().mean())
}

/// Product of `value^(1/n)` over all non-zero values, where `n` is the
/// number of values including the zeros.
///
/// Zero values are skipped so a single exact match does not collapse the
/// product, but they still count towards the exponent. The result is only a
/// true geometric mean when no value is zero.
pub fn geometric_share_product(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(MathError::InsufficientData(
            "Cannot build a geometric product of an empty set of values".to_string(),
        ));
    }

    let share = 1.0 / values.len() as f64;

    Ok(values
        .iter()
        .filter(|&&value| value != 0.0)
        .fold(1.0, |product, value| product * value.powf(share)))
}
