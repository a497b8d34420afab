//! Holt-Winters seasonal smoothing (parameters only, no implementation yet)

use crate::error::{ForecastError, Result};
use crate::methods::{ForecastHorizon, SmoothingMethod};
use crate::parameters::{ParameterName, ParameterSet};
use crate::series::TimeSeries;

const REQUIRED: &[ParameterName] = &[
    ParameterName::SmoothingFactor,
    ParameterName::TrendSmoothingFactor,
    ParameterName::SeasonLength,
    ParameterName::ValuesToForecast,
];

/// Triple exponential smoothing with a seasonal component.
///
/// Construction validates the parameters like the other methods, but
/// [`SmoothingMethod::execute`] always fails with
/// [`ForecastError::NotImplemented`].
#[derive(Debug, Clone, PartialEq)]
pub struct HoltWintersMethod {
    name: String,
    alpha: f64,
    beta: f64,
    season_length: usize,
    horizon: ForecastHorizon,
    parameters: ParameterSet,
}

impl HoltWintersMethod {
    pub fn new(
        alpha: f64,
        beta: f64,
        season_length: usize,
        values_to_forecast: usize,
    ) -> Result<Self> {
        let parameters = ParameterSet::new()
            .with_smoothing_factor(alpha)?
            .with_trend_smoothing_factor(beta)?
            .with_season_length(season_length)?
            .with_values_to_forecast(values_to_forecast);

        Self::from_parameters(&parameters)
    }

    /// Create the method from a parameter set holding every required parameter
    pub fn from_parameters(parameters: &ParameterSet) -> Result<Self> {
        parameters.validate()?;
        let alpha = parameters.require(ParameterName::SmoothingFactor)?;
        let beta = parameters.require(ParameterName::TrendSmoothingFactor)?;
        let season_length = parameters.require(ParameterName::SeasonLength)? as usize;
        let count = parameters.require(ParameterName::ValuesToForecast)? as usize;

        Ok(Self {
            name: format!(
                "Holt-Winters (alpha={}, beta={}, season={})",
                alpha, beta, season_length
            ),
            alpha,
            beta,
            season_length,
            horizon: ForecastHorizon::Count(count),
            parameters: *parameters,
        })
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }

    pub fn season_length(&self) -> usize {
        self.season_length
    }

    pub fn horizon(&self) -> ForecastHorizon {
        self.horizon
    }
}

impl Default for HoltWintersMethod {
    fn default() -> Self {
        let (alpha, beta, season_length) = (0.1, 0.5, 42);
        Self {
            name: format!(
                "Holt-Winters (alpha={}, beta={}, season={})",
                alpha, beta, season_length
            ),
            alpha,
            beta,
            season_length,
            horizon: ForecastHorizon::Count(1),
            parameters: ParameterSet::from_parts(
                Some(alpha),
                Some(beta),
                Some(season_length),
                Some(1),
            ),
        }
    }
}

impl SmoothingMethod for HoltWintersMethod {
    fn name(&self) -> &str {
        &self.name
    }

    fn required_parameters(&self) -> &'static [ParameterName] {
        REQUIRED
    }

    fn parameters(&self) -> &ParameterSet {
        &self.parameters
    }

    fn execute(&self, _series: &TimeSeries) -> Result<TimeSeries> {
        Err(ForecastError::NotImplemented(
            "Holt-Winters seasonal smoothing".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execute_not_implemented() {
        let method = HoltWintersMethod::new(0.2, 0.3, 12, 4).unwrap();
        let series =
            TimeSeries::from_twodim_list(vec![(0.0, 1.0), (1.0, 2.0), (2.0, 3.0)]).unwrap();

        assert!(matches!(
            method.execute(&series),
            Err(ForecastError::NotImplemented(_))
        ));
        assert!(matches!(
            method.execute(&TimeSeries::new()),
            Err(ForecastError::NotImplemented(_))
        ));
    }

    #[test]
    fn test_parameter_validation() {
        assert!(HoltWintersMethod::new(0.0, 0.3, 12, 1).is_err());
        assert!(HoltWintersMethod::new(0.2, 1.0, 12, 1).is_err());
        assert!(HoltWintersMethod::new(0.2, 0.3, 0, 1).is_err());

        let method = HoltWintersMethod::default();
        assert_eq!(method.season_length(), 42);
        assert_eq!(method.parameter(ParameterName::SeasonLength), Some(42.0));
    }
}
