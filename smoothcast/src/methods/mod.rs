//! Smoothing methods that turn a time series into a smoothed and forecasted one

use crate::error::{ForecastError, Result};
use crate::parameters::{ParameterName, ParameterSet};
use crate::series::{DataPoint, TimeSeries};
use std::fmt::Debug;

pub mod exponential_smoothing;
pub mod holt;
pub mod holt_winters;

pub use exponential_smoothing::ExponentialSmoothing;
pub use holt::HoltMethod;
pub use holt_winters::HoltWintersMethod;

/// Upper bound on the number of values a [`ForecastHorizon::Until`] may resolve to
pub const MAX_RESOLVED_VALUES: usize = 1_000_000;

/// How many values a method appends after the last observation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ForecastHorizon {
    /// A fixed number of values
    Count(usize),
    /// As many values as needed to reach or pass the given timestamp
    Until(f64),
}

impl ForecastHorizon {
    /// Whether no forecast values are requested at all
    pub fn is_none(&self) -> bool {
        matches!(self, ForecastHorizon::Count(0))
    }

    /// Reject target timestamps that can never be reached
    pub fn validate(&self) -> Result<()> {
        match *self {
            ForecastHorizon::Until(target) if !target.is_finite() => {
                Err(ForecastError::InvalidParameter(format!(
                    "forecast target has to be finite, got {}",
                    target
                )))
            }
            _ => Ok(()),
        }
    }

    /// Number of values to append after `last_timestamp` with spacing `step`.
    ///
    /// An `Until` target further away than [`MAX_RESOLVED_VALUES`] steps is
    /// an error.
    pub fn resolve(&self, last_timestamp: f64, step: f64) -> Result<usize> {
        self.validate()?;
        match *self {
            ForecastHorizon::Count(count) => Ok(count),
            ForecastHorizon::Until(target) if target > last_timestamp && step > 0.0 => {
                let steps = ((target - last_timestamp) / step).ceil();
                if steps > MAX_RESOLVED_VALUES as f64 {
                    return Err(ForecastError::InvalidParameter(format!(
                        "forecast target {} is {} steps away, at most {} are allowed",
                        target, steps, MAX_RESOLVED_VALUES
                    )));
                }
                Ok(steps as usize)
            }
            ForecastHorizon::Until(_) => Ok(0),
        }
    }
}

impl Default for ForecastHorizon {
    fn default() -> Self {
        ForecastHorizon::Count(1)
    }
}

/// Common interface for parameterized smoothing methods
pub trait SmoothingMethod: Debug {
    /// Name of the method
    fn name(&self) -> &str;

    /// Parameters the method needs to be constructed
    fn required_parameters(&self) -> &'static [ParameterName];

    /// The validated parameters the method was built with
    fn parameters(&self) -> &ParameterSet;

    /// Look up a single parameter
    fn parameter(&self, name: ParameterName) -> Option<f64> {
        self.parameters().get(name)
    }

    /// Whether the input has to be sorted by timestamp
    fn has_to_be_sorted(&self) -> bool {
        true
    }

    /// Whether the input has to be normalized to equidistant timestamps
    fn has_to_be_normalized(&self) -> bool {
        true
    }

    /// Create a new time series containing the smoothed and forecasted values
    fn execute(&self, series: &TimeSeries) -> Result<TimeSeries>;
}

/// `parameters` with the forecast count matching `horizon`.
///
/// An `Until` horizon has no fixed count, so the entry is removed.
pub(crate) fn parameters_for_horizon(
    parameters: ParameterSet,
    horizon: ForecastHorizon,
) -> Result<ParameterSet> {
    horizon.validate()?;
    Ok(match horizon {
        ForecastHorizon::Count(count) => parameters.with_values_to_forecast(count),
        ForecastHorizon::Until(_) => parameters.without_values_to_forecast(),
    })
}

/// Extract the values of `series`, failing on the first absent one
pub(crate) fn observed_values(series: &TimeSeries) -> Result<Vec<(f64, f64)>> {
    series.to_twodim_list()
}

/// Step and count of the forecast tail for the already emitted points.
///
/// Returns `None` when no forecast is requested. Any requested forecast needs
/// at least two emitted points to derive the step.
pub(crate) fn forecast_plan(
    emitted: &[DataPoint],
    horizon: ForecastHorizon,
) -> Result<Option<(f64, f64, usize)>> {
    if horizon.is_none() {
        return Ok(None);
    }

    let timestamps: Vec<f64> = emitted.iter().map(|p| p.0).collect();
    let step = smoothcast_math::time_step(&timestamps).map_err(|_| {
        ForecastError::InsufficientData {
            needed: 2,
            got: emitted.len(),
        }
    })?;
    let last_timestamp = timestamps[timestamps.len() - 1];

    let count = horizon.resolve(last_timestamp, step)?;

    Ok(Some((last_timestamp, step, count)))
}
