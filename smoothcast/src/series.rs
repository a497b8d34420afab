//! Time series container consumed and produced by the smoothing methods

use crate::error::{ForecastError, Result};
use chrono::{DateTime, Utc};
use polars::prelude::*;
use std::ops::Index;

/// A single observation: timestamp and an optional value
pub type DataPoint = (f64, Option<f64>);

/// Time series sorted ascending by strictly increasing timestamps
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeSeries {
    points: Vec<DataPoint>,
}

impl TimeSeries {
    /// Create an empty time series
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a time series from observations with optional values.
    ///
    /// The points are sorted by timestamp. Non-finite or duplicated
    /// timestamps are rejected.
    pub fn from_points(mut points: Vec<DataPoint>) -> Result<Self> {
        if let Some((idx, _)) = points.iter().enumerate().find(|(_, p)| !p.0.is_finite()) {
            return Err(ForecastError::DataError(format!(
                "Timestamp at index {} is not finite",
                idx
            )));
        }

        points.sort_by(|a, b| a.0.total_cmp(&b.0));

        if let Some(pair) = points.windows(2).find(|pair| pair[0].0 == pair[1].0) {
            return Err(ForecastError::DataError(format!(
                "Duplicate timestamp {}",
                pair[0].0
            )));
        }

        Ok(Self { points })
    }

    /// Create a time series from a list of `(timestamp, value)` pairs
    pub fn from_twodim_list(pairs: Vec<(f64, f64)>) -> Result<Self> {
        Self::from_points(pairs.into_iter().map(|(t, v)| (t, Some(v))).collect())
    }

    /// Create a time series from UTC datetimes, stored as epoch seconds
    pub fn from_datetimes(pairs: Vec<(DateTime<Utc>, f64)>) -> Result<Self> {
        Self::from_twodim_list(
            pairs
                .into_iter()
                .map(|(dt, v)| (dt.timestamp_millis() as f64 / 1000.0, v))
                .collect(),
        )
    }

    /// Create a time series from two columns of a DataFrame.
    ///
    /// Temporal time columns are read through their physical integer
    /// representation. Null values become absent values; null timestamps are
    /// rejected.
    pub fn from_dataframe(df: &DataFrame, time_column: &str, value_column: &str) -> Result<Self> {
        let times = df.column(time_column)?;
        let times = if times.dtype().is_temporal() {
            times.cast(&DataType::Int64)?
        } else {
            times.clone()
        };
        let times = times.cast(&DataType::Float64)?;
        let values = df.column(value_column)?.cast(&DataType::Float64)?;

        let points = times
            .f64()?
            .into_iter()
            .zip(values.f64()?.into_iter())
            .enumerate()
            .map(|(idx, (t, v))| match t {
                Some(t) => Ok((t, v)),
                None => Err(ForecastError::DataError(format!(
                    "Null timestamp at row {}",
                    idx
                ))),
            })
            .collect::<Result<Vec<_>>>()?;

        Self::from_points(points)
    }

    /// Convert the time series into a two column DataFrame
    pub fn to_dataframe(&self, time_column: &str, value_column: &str) -> Result<DataFrame> {
        let times = Series::new(time_column, self.timestamps());
        let values = Series::new(value_column, self.values());

        Ok(DataFrame::new(vec![times, values])?)
    }

    /// Build a series from points the caller guarantees to be strictly ascending
    pub(crate) fn from_sorted(points: Vec<DataPoint>) -> Self {
        debug_assert!(points.windows(2).all(|pair| pair[0].0 < pair[1].0));
        Self { points }
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series has no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Point at `idx`, if any
    pub fn get(&self, idx: usize) -> Option<&DataPoint> {
        self.points.get(idx)
    }

    /// Iterate over `(timestamp, value)` pairs in timestamp order
    pub fn iter(&self) -> std::slice::Iter<'_, DataPoint> {
        self.points.iter()
    }

    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    pub fn timestamps(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.0).collect()
    }

    pub fn values(&self) -> Vec<Option<f64>> {
        self.points.iter().map(|p| p.1).collect()
    }

    /// Difference between the last two timestamps
    pub fn last_step(&self) -> Option<f64> {
        match self.points.as_slice() {
            [.., previous, last] => Some(last.0 - previous.0),
            _ => None,
        }
    }

    /// Convert to a list of pairs, failing on the first absent value
    pub fn to_twodim_list(&self) -> Result<Vec<(f64, f64)>> {
        self.points
            .iter()
            .enumerate()
            .map(|(idx, (t, v))| v.map(|v| (*t, v)).ok_or(ForecastError::MissingValue(idx)))
            .collect()
    }
}

impl Index<usize> for TimeSeries {
    type Output = DataPoint;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.points[idx]
    }
}

impl<'a> IntoIterator for &'a TimeSeries {
    type Item = &'a DataPoint;
    type IntoIter = std::slice::Iter<'a, DataPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
