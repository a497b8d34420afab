//! Windowed error measures comparing a reference series with a forecast

use crate::error::{ForecastError, Result};
use crate::series::TimeSeries;
use smoothcast_math::PercentageWindow;
use std::fmt::Debug;
use tracing::trace;

pub mod mape;
pub mod mse;
pub mod smape;

pub use mape::{GeometricMeanAbsolutePercentageError, MeanAbsolutePercentageError};
pub use mse::MeanSquaredError;
pub use smape::SymmetricMeanAbsolutePercentageError;

/// Short alias for [`MeanAbsolutePercentageError`]
pub type Mape = MeanAbsolutePercentageError;
/// Short alias for [`GeometricMeanAbsolutePercentageError`]
pub type Gmape = GeometricMeanAbsolutePercentageError;

/// Error contribution of a single (actual, predicted) pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LocalError {
    /// A usable error magnitude
    Value(f64),
    /// The pair must not take part in the aggregation
    Excluded,
}

impl LocalError {
    pub fn value(&self) -> Option<f64> {
        match self {
            LocalError::Value(v) => Some(*v),
            LocalError::Excluded => None,
        }
    }

    pub fn is_excluded(&self) -> bool {
        matches!(self, LocalError::Excluded)
    }
}

/// A forecast error metric
pub trait ErrorMeasure: Debug {
    /// Name of the metric
    fn name(&self) -> &str;

    /// Error between one reference value and its calculated counterpart
    fn local_error(&self, actual: f64, predicted: f64) -> LocalError;

    /// Combine the non-excluded local errors of a window into one score.
    ///
    /// `errors` is never empty.
    fn aggregate(&self, errors: &[f64]) -> Result<f64>;
}

/// Scores parallel actual and predicted values with an [`ErrorMeasure`]
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorEvaluator<M> {
    metric: M,
    actual: Vec<f64>,
    predicted: Vec<f64>,
}

impl<M: ErrorMeasure> ErrorEvaluator<M> {
    /// Create an evaluator over equally long actual and predicted values
    pub fn new(metric: M, actual: Vec<f64>, predicted: Vec<f64>) -> Result<Self> {
        if actual.len() != predicted.len() {
            return Err(ForecastError::DimensionMismatch {
                expected: actual.len(),
                got: predicted.len(),
            });
        }

        Ok(Self {
            metric,
            actual,
            predicted,
        })
    }

    /// Create an evaluator from the points both series share a timestamp on.
    ///
    /// Points where either value is absent are skipped.
    pub fn from_series(metric: M, original: &TimeSeries, calculated: &TimeSeries) -> Result<Self> {
        let mut actual = Vec::new();
        let mut predicted = Vec::new();

        let mut calculated_points = calculated.iter().peekable();
        for &(timestamp, original_value) in original {
            while calculated_points
                .peek()
                .is_some_and(|(t, _)| *t < timestamp)
            {
                calculated_points.next();
            }

            match calculated_points.peek() {
                Some(&&(t, calculated_value)) if t == timestamp => {
                    if let (Some(a), Some(p)) = (original_value, calculated_value) {
                        actual.push(a);
                        predicted.push(p);
                    }
                }
                Some(_) => continue,
                None => break,
            }
        }

        if actual.is_empty() {
            return Err(ForecastError::InsufficientData { needed: 1, got: 0 });
        }

        Self::new(metric, actual, predicted)
    }

    pub fn metric(&self) -> &M {
        &self.metric
    }

    /// Number of (actual, predicted) pairs
    pub fn len(&self) -> usize {
        self.actual.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actual.is_empty()
    }

    /// Local errors of every pair, in order
    pub fn local_errors(&self) -> Vec<LocalError> {
        self.actual
            .iter()
            .zip(&self.predicted)
            .map(|(&a, &p)| self.metric.local_error(a, p))
            .collect()
    }

    /// Local errors of the pairs inside the `[start, end]` percentage window,
    /// including excluded markers.
    pub fn error_values(&self, start: f64, end: f64) -> Result<Vec<LocalError>> {
        let window = PercentageWindow::new(start, end)
            .map_err(|err| ForecastError::InvalidWindow(err.to_string()))?;
        let range = window.range(self.len());

        trace!(
            metric = self.metric.name(),
            start = range.start,
            end = range.end,
            "selected error window"
        );

        Ok(self.actual[range.clone()]
            .iter()
            .zip(&self.predicted[range])
            .map(|(&a, &p)| self.metric.local_error(a, p))
            .collect())
    }

    /// Aggregated error over the `[start, end]` percentage window.
    ///
    /// Fails with [`ForecastError::InvalidWindow`] for bounds outside
    /// `[0, 100]` or `start > end`, and with [`ForecastError::EmptyWindow`]
    /// when the window holds no usable local error.
    pub fn get_error(&self, start: f64, end: f64) -> Result<f64> {
        let usable: Vec<f64> = self
            .error_values(start, end)?
            .iter()
            .filter_map(LocalError::value)
            .collect();

        if usable.is_empty() {
            return Err(ForecastError::EmptyWindow { start, end });
        }

        self.metric.aggregate(&usable)
    }

    /// Aggregated error over all pairs
    pub fn error(&self) -> Result<f64> {
        self.get_error(0.0, 100.0)
    }
}
