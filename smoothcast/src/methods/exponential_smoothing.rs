//! Simple exponential smoothing

use crate::error::{ForecastError, Result};
use crate::methods::{
    forecast_plan, observed_values, parameters_for_horizon, ForecastHorizon, SmoothingMethod,
};
use crate::parameters::{ParameterName, ParameterSet};
use crate::series::TimeSeries;
use smoothcast_math::ses_update;
use tracing::debug;

const REQUIRED: &[ParameterName] = &[
    ParameterName::SmoothingFactor,
    ParameterName::ValuesToForecast,
];

/// Simple exponential smoothing.
///
/// Forecasting more than one value ends in a flat line by nature of the
/// method.
#[derive(Debug, Clone, PartialEq)]
pub struct ExponentialSmoothing {
    /// Name of the model
    name: String,
    /// Smoothing parameter
    alpha: f64,
    /// Number of appended values
    horizon: ForecastHorizon,
    parameters: ParameterSet,
}

impl ExponentialSmoothing {
    /// Create a new exponential smoothing method.
    ///
    /// `alpha` has to be in (0.0, 1.0).
    pub fn new(alpha: f64, values_to_forecast: usize) -> Result<Self> {
        let parameters = ParameterSet::new()
            .with_smoothing_factor(alpha)?
            .with_values_to_forecast(values_to_forecast);

        Self::from_parameters(&parameters)
    }

    /// Create the method from a parameter set holding every required parameter
    pub fn from_parameters(parameters: &ParameterSet) -> Result<Self> {
        parameters.validate()?;
        let alpha = parameters.require(ParameterName::SmoothingFactor)?;
        let count = parameters.require(ParameterName::ValuesToForecast)? as usize;

        Ok(Self {
            name: format!("Exponential Smoothing (alpha={})", alpha),
            alpha,
            horizon: ForecastHorizon::Count(count),
            parameters: *parameters,
        })
    }

    /// Replace the forecast horizon.
    ///
    /// An `Until` horizon removes `valuesToForecast` from [`SmoothingMethod::parameters`].
    pub fn with_horizon(mut self, horizon: ForecastHorizon) -> Result<Self> {
        self.parameters = parameters_for_horizon(self.parameters, horizon)?;
        self.horizon = horizon;
        Ok(self)
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn horizon(&self) -> ForecastHorizon {
        self.horizon
    }
}

impl Default for ExponentialSmoothing {
    fn default() -> Self {
        let alpha = 0.1;
        Self {
            name: format!("Exponential Smoothing (alpha={})", alpha),
            alpha,
            horizon: ForecastHorizon::Count(1),
            parameters: ParameterSet::from_parts(Some(alpha), None, None, Some(1)),
        }
    }
}

impl SmoothingMethod for ExponentialSmoothing {
    fn name(&self) -> &str {
        &self.name
    }

    fn required_parameters(&self) -> &'static [ParameterName] {
        REQUIRED
    }

    fn parameters(&self) -> &ParameterSet {
        &self.parameters
    }

    fn execute(&self, series: &TimeSeries) -> Result<TimeSeries> {
        let observations = observed_values(series)?;
        let mut emitted = Vec::with_capacity(observations.len());

        // (estimator, last observed value) after the pass over real data
        let mut state = None;

        if let [first, second, rest @ ..] = observations.as_slice() {
            // the first observation only initializes the estimator
            let mut estimator = first.1;
            let mut last_value = second.1;
            emitted.push((second.0, Some(estimator)));

            for &(timestamp, value) in rest {
                estimator = ses_update(self.alpha, last_value, estimator);
                last_value = value;
                emitted.push((timestamp, Some(estimator)));
            }

            state = Some((estimator, last_value));
        }

        if let Some((mut timestamp, step, count)) = forecast_plan(&emitted, self.horizon)? {
            let (mut estimator, mut last_value) = state.ok_or(ForecastError::InsufficientData {
                needed: 3,
                got: series.len(),
            })?;

            for _ in 0..count {
                timestamp += step;
                estimator = ses_update(self.alpha, last_value, estimator);
                emitted.push((timestamp, Some(estimator)));

                // the forecast point becomes the last observation
                last_value = estimator;
            }
        }

        debug!(
            method = %self.name,
            input = series.len(),
            output = emitted.len(),
            "exponential smoothing complete"
        );

        Ok(TimeSeries::from_sorted(emitted))
    }
}
