//! Validated parameters for the smoothing methods

use crate::error::{ForecastError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Parameters recognized by the smoothing methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterName {
    /// Alpha, weight of the most recent observation
    SmoothingFactor,
    /// Beta, weight of the most recent trend change
    TrendSmoothingFactor,
    /// Expected number of observations per season
    SeasonLength,
    /// Number of values appended after the last observation
    ValuesToForecast,
}

impl ParameterName {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterName::SmoothingFactor => "smoothingFactor",
            ParameterName::TrendSmoothingFactor => "trendSmoothingFactor",
            ParameterName::SeasonLength => "seasonLength",
            ParameterName::ValuesToForecast => "valuesToForecast",
        }
    }

    /// Valid interval for this parameter
    pub fn interval(&self) -> ParameterInterval {
        match self {
            ParameterName::SmoothingFactor | ParameterName::TrendSmoothingFactor => {
                ParameterInterval {
                    lower: 0.0,
                    upper: 1.0,
                    lower_inclusive: false,
                    upper_inclusive: false,
                }
            }
            ParameterName::SeasonLength => ParameterInterval {
                lower: 1.0,
                upper: f64::INFINITY,
                lower_inclusive: true,
                upper_inclusive: false,
            },
            ParameterName::ValuesToForecast => ParameterInterval {
                lower: 0.0,
                upper: f64::INFINITY,
                lower_inclusive: true,
                upper_inclusive: false,
            },
        }
    }
}

impl fmt::Display for ParameterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Interval of valid values for a parameter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterInterval {
    pub lower: f64,
    pub upper: f64,
    pub lower_inclusive: bool,
    pub upper_inclusive: bool,
}

impl ParameterInterval {
    /// Whether `value` lies in the interval
    pub fn contains(&self, value: f64) -> bool {
        let above = if self.lower_inclusive {
            value >= self.lower
        } else {
            value > self.lower
        };
        let below = if self.upper_inclusive {
            value <= self.upper
        } else {
            value < self.upper
        };
        above && below
    }
}

impl fmt::Display for ParameterInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}, {}{}",
            if self.lower_inclusive { '[' } else { '(' },
            self.lower,
            self.upper,
            if self.upper_inclusive { ']' } else { ')' }
        )
    }
}

/// Immutable set of smoothing parameters.
///
/// Every value is checked against its interval when it is added or
/// deserialized, so a `ParameterSet` never holds an out-of-range value.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawParameterSet")]
pub struct ParameterSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    smoothing_factor: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    trend_smoothing_factor: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    season_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    values_to_forecast: Option<usize>,
}

/// Parameters as read from JSON, before validation
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawParameterSet {
    #[serde(default)]
    smoothing_factor: Option<f64>,
    #[serde(default)]
    trend_smoothing_factor: Option<f64>,
    #[serde(default)]
    season_length: Option<usize>,
    #[serde(default)]
    values_to_forecast: Option<usize>,
}

impl TryFrom<RawParameterSet> for ParameterSet {
    type Error = ForecastError;

    fn try_from(raw: RawParameterSet) -> Result<Self> {
        let params = Self::from_parts(
            raw.smoothing_factor,
            raw.trend_smoothing_factor,
            raw.season_length,
            raw.values_to_forecast,
        );
        params.validate()?;
        Ok(params)
    }
}

impl ParameterSet {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble a parameter set from known-good values
    pub(crate) fn from_parts(
        smoothing_factor: Option<f64>,
        trend_smoothing_factor: Option<f64>,
        season_length: Option<usize>,
        values_to_forecast: Option<usize>,
    ) -> Self {
        Self {
            smoothing_factor,
            trend_smoothing_factor,
            season_length,
            values_to_forecast,
        }
    }

    /// Load and validate a parameter set from JSON.
    ///
    /// ```
    /// use smoothcast::parameters::{ParameterName, ParameterSet};
    ///
    /// let json = r#"{"smoothingFactor": 0.3, "valuesToForecast": 2}"#;
    /// let params = ParameterSet::from_json(json).unwrap();
    /// assert_eq!(params.get(ParameterName::SmoothingFactor), Some(0.3));
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawParameterSet = serde_json::from_str(json)?;
        Self::try_from(raw)
    }

    /// Serialize the parameter set to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn with_smoothing_factor(self, alpha: f64) -> Result<Self> {
        check(ParameterName::SmoothingFactor, alpha)?;
        Ok(Self {
            smoothing_factor: Some(alpha),
            ..self
        })
    }

    pub fn with_trend_smoothing_factor(self, beta: f64) -> Result<Self> {
        check(ParameterName::TrendSmoothingFactor, beta)?;
        Ok(Self {
            trend_smoothing_factor: Some(beta),
            ..self
        })
    }

    pub fn with_season_length(self, season_length: usize) -> Result<Self> {
        check(ParameterName::SeasonLength, season_length as f64)?;
        Ok(Self {
            season_length: Some(season_length),
            ..self
        })
    }

    pub fn with_values_to_forecast(self, count: usize) -> Self {
        Self {
            values_to_forecast: Some(count),
            ..self
        }
    }

    /// Look up a parameter by name
    pub fn get(&self, name: ParameterName) -> Option<f64> {
        match name {
            ParameterName::SmoothingFactor => self.smoothing_factor,
            ParameterName::TrendSmoothingFactor => self.trend_smoothing_factor,
            ParameterName::SeasonLength => self.season_length.map(|v| v as f64),
            ParameterName::ValuesToForecast => self.values_to_forecast.map(|v| v as f64),
        }
    }

    pub fn smoothing_factor(&self) -> Option<f64> {
        self.smoothing_factor
    }

    pub fn trend_smoothing_factor(&self) -> Option<f64> {
        self.trend_smoothing_factor
    }

    pub fn season_length(&self) -> Option<usize> {
        self.season_length
    }

    pub fn values_to_forecast(&self) -> Option<usize> {
        self.values_to_forecast
    }

    /// Fetch a parameter that must be present
    pub fn require(&self, name: ParameterName) -> Result<f64> {
        self.get(name)
            .ok_or_else(|| ForecastError::MissingParameter(name.to_string()))
    }

    /// The same set without a forecast count
    pub(crate) fn without_values_to_forecast(self) -> Self {
        Self {
            values_to_forecast: None,
            ..self
        }
    }

    /// Check every present value against its interval
    pub fn validate(&self) -> Result<()> {
        for name in [
            ParameterName::SmoothingFactor,
            ParameterName::TrendSmoothingFactor,
            ParameterName::SeasonLength,
            ParameterName::ValuesToForecast,
        ] {
            if let Some(value) = self.get(name) {
                check(name, value)?;
            }
        }
        Ok(())
    }
}

fn check(name: ParameterName, value: f64) -> Result<()> {
    let interval = name.interval();
    if !interval.contains(value) {
        return Err(ForecastError::InvalidParameter(format!(
            "{} has to be in {}, got {}",
            name, interval, value
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, false)]
    #[case(1.0, false)]
    #[case(0.5, true)]
    #[case(1e-9, true)]
    #[case(-0.2, false)]
    #[case(f64::NAN, false)]
    fn test_smoothing_factor_interval(#[case] alpha: f64, #[case] valid: bool) {
        let result = ParameterSet::new().with_smoothing_factor(alpha);
        assert_eq!(result.is_ok(), valid);
        if let Err(err) = result {
            assert!(err.is_configuration_error());
        }
    }

    #[test]
    fn test_lookup_and_require() {
        let params = ParameterSet::new()
            .with_smoothing_factor(0.2)
            .unwrap()
            .with_values_to_forecast(3);

        assert_eq!(params.get(ParameterName::SmoothingFactor), Some(0.2));
        assert_eq!(params.get(ParameterName::ValuesToForecast), Some(3.0));
        assert_eq!(params.get(ParameterName::TrendSmoothingFactor), None);
        assert!(matches!(
            params.require(ParameterName::TrendSmoothingFactor),
            Err(ForecastError::MissingParameter(name)) if name == "trendSmoothingFactor"
        ));
    }

    #[test]
    fn test_season_length_must_be_positive() {
        assert!(ParameterSet::new().with_season_length(0).is_err());
        assert!(ParameterSet::new().with_season_length(12).is_ok());
    }

    #[test]
    fn test_json_round_trip() {
        let params = ParameterSet::new()
            .with_smoothing_factor(0.3)
            .unwrap()
            .with_trend_smoothing_factor(0.6)
            .unwrap();
        let json = params.to_json().unwrap();
        assert_eq!(json, r#"{"smoothingFactor":0.3,"trendSmoothingFactor":0.6}"#);
        assert_eq!(ParameterSet::from_json(&json).unwrap(), params);
    }

    #[test]
    fn test_json_rejects_invalid_values() {
        let result = ParameterSet::from_json(r#"{"smoothingFactor": 1.0}"#);
        assert!(matches!(result, Err(ForecastError::InvalidParameter(_))));

        let result = ParameterSet::from_json(r#"{"valuesToForecast": -1}"#);
        assert!(matches!(result, Err(ForecastError::SerdeError(_))));

        let result = ParameterSet::from_json(r#"{"alpha": 0.5}"#);
        assert!(matches!(result, Err(ForecastError::SerdeError(_))));
    }

    #[test]
    fn test_deserialize_rejects_out_of_range_values() {
        let result = serde_json::from_str::<ParameterSet>(r#"{"smoothingFactor":1.0}"#);
        assert!(result.is_err());

        let result = serde_json::from_str::<ParameterSet>(r#"{"seasonLength":0}"#);
        assert!(result.is_err());

        let params: ParameterSet =
            serde_json::from_str(r#"{"smoothingFactor":0.4,"seasonLength":7}"#).unwrap();
        assert_eq!(params.smoothing_factor(), Some(0.4));
        assert_eq!(params.season_length(), Some(7));
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_interval_display() {
        assert_eq!(ParameterName::SmoothingFactor.interval().to_string(), "(0, 1)");
        assert_eq!(ParameterName::SeasonLength.interval().to_string(), "[1, inf)");
    }
}
