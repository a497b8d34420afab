//! Holt's trend-aware exponential smoothing

use crate::error::{ForecastError, Result};
use crate::methods::{
    forecast_plan, observed_values, parameters_for_horizon, ForecastHorizon, SmoothingMethod,
};
use crate::parameters::{ParameterName, ParameterSet};
use crate::series::TimeSeries;
use smoothcast_math::{holt_update, HoltState};
use tracing::debug;

const REQUIRED: &[ParameterName] = &[
    ParameterName::SmoothingFactor,
    ParameterName::TrendSmoothingFactor,
    ParameterName::ValuesToForecast,
];

/// Double exponential smoothing with a trend component
#[derive(Debug, Clone, PartialEq)]
pub struct HoltMethod {
    name: String,
    alpha: f64,
    beta: f64,
    horizon: ForecastHorizon,
    parameters: ParameterSet,
}

impl HoltMethod {
    /// Create a new Holt method.
    ///
    /// Both `alpha` and `beta` have to be in (0.0, 1.0).
    pub fn new(alpha: f64, beta: f64, values_to_forecast: usize) -> Result<Self> {
        let parameters = ParameterSet::new()
            .with_smoothing_factor(alpha)?
            .with_trend_smoothing_factor(beta)?
            .with_values_to_forecast(values_to_forecast);

        Self::from_parameters(&parameters)
    }

    /// Create the method from a parameter set holding every required parameter
    pub fn from_parameters(parameters: &ParameterSet) -> Result<Self> {
        parameters.validate()?;
        let alpha = parameters.require(ParameterName::SmoothingFactor)?;
        let beta = parameters.require(ParameterName::TrendSmoothingFactor)?;
        let count = parameters.require(ParameterName::ValuesToForecast)? as usize;

        Ok(Self {
            name: format!("Holt (alpha={}, beta={})", alpha, beta),
            alpha,
            beta,
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

    pub fn beta(&self) -> f64 {
        self.beta
    }

    pub fn horizon(&self) -> ForecastHorizon {
        self.horizon
    }
}

impl Default for HoltMethod {
    fn default() -> Self {
        let (alpha, beta) = (0.1, 0.5);
        Self {
            name: format!("Holt (alpha={}, beta={})", alpha, beta),
            alpha,
            beta,
            horizon: ForecastHorizon::Count(1),
            parameters: ParameterSet::from_parts(Some(alpha), Some(beta), None, Some(1)),
        }
    }
}

impl SmoothingMethod for HoltMethod {
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
        let mut pass = None;

        if let [first, second, rest @ ..] = observations.as_slice() {
            let mut state = HoltState::seed(first.1, second.1);
            let mut last_value = second.1;
            emitted.push((second.0, Some(state.estimator)));

            for &(timestamp, value) in rest {
                state = holt_update(self.alpha, self.beta, last_value, state);
                last_value = value;
                emitted.push((timestamp, Some(state.estimator)));
            }

            pass = Some((state, last_value));
        }

        if let Some((mut timestamp, step, count)) = forecast_plan(&emitted, self.horizon)? {
            let (mut state, last_value) = pass.ok_or(ForecastError::InsufficientData {
                needed: 3,
                got: series.len(),
            })?;

            // every forecast step reuses the last real observation
            for _ in 0..count {
                timestamp += step;
                state = holt_update(self.alpha, self.beta, last_value, state);
                emitted.push((timestamp, Some(state.estimator)));
            }
        }

        debug!(
            method = %self.name,
            input = series.len(),
            output = emitted.len(),
            "holt smoothing complete"
        );

        Ok(TimeSeries::from_sorted(emitted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_trend_seed_and_recurrence() {
        let series =
            TimeSeries::from_twodim_list(vec![(0.0, 1.0), (1.0, 2.0), (2.0, 3.0)]).unwrap();
        let method = HoltMethod::new(0.5, 0.5, 0).unwrap();
        let result = method.execute(&series).unwrap();

        // seed: estimator 1, trend 1; third point: error = 2 - 1,
        // estimator = 0.5*2 + 0.5*(1 + 1) = 2
        assert_eq!(result.len(), 2);
        assert_relative_eq!(result[0].1.unwrap(), 1.0);
        assert_relative_eq!(result[1].1.unwrap(), 2.0);
    }

    #[test]
    fn test_forecast_reuses_last_observation() {
        let series =
            TimeSeries::from_twodim_list(vec![(0.0, 1.0), (1.0, 2.0), (2.0, 3.0)]).unwrap();
        let method = HoltMethod::new(0.5, 0.5, 2).unwrap();
        let result = method.execute(&series).unwrap();

        // state after real data: estimator 2, trend 1, last value 3
        // step 1: error 1, estimator = 1.5 + 0.5*2 = 2.5, trend = 0.25 + 0.5 = 0.75
        // step 2: error 0.5, estimator = 1.5 + 0.5*1.25 = 2.125
        assert_eq!(result.timestamps(), vec![1.0, 2.0, 3.0, 4.0]);
        assert_relative_eq!(result[2].1.unwrap(), 2.5);
        assert_relative_eq!(result[3].1.unwrap(), 2.125);
    }

    #[test]
    fn test_rejects_invalid_beta() {
        let result = HoltMethod::new(0.5, 1.0, 1);
        assert!(matches!(result, Err(ForecastError::InvalidParameter(_))));
    }

    #[test]
    fn test_default() {
        let method = HoltMethod::default();
        assert_relative_eq!(method.alpha(), 0.1);
        assert_relative_eq!(method.beta(), 0.5);
        assert_eq!(method.required_parameters().len(), 3);
    }
}
