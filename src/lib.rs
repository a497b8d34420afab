//! # Smoothcast
//!
//! `smoothcast_workspace` bundles the smoothing methods and error measures of
//! [`smoothcast`] with the numeric kernels of [`smoothcast_math`].
//!
//! ## Example
//!
//! ```
//! use smoothcast_workspace::smoothcast::methods::{HoltMethod, SmoothingMethod};
//! use smoothcast_workspace::smoothcast::TimeSeries;
//!
//! let series = TimeSeries::from_twodim_list(vec![(0.0, 1.0), (1.0, 2.0), (2.0, 3.0)]).unwrap();
//! let forecast = HoltMethod::new(0.5, 0.5, 1).unwrap().execute(&series).unwrap();
//! assert_eq!(forecast.len(), 3);
//! ```

pub use smoothcast;
pub use smoothcast_math;

pub use smoothcast::measures::{
    GeometricMeanAbsolutePercentageError, MeanAbsolutePercentageError, MeanSquaredError,
    SymmetricMeanAbsolutePercentageError,
};
pub use smoothcast::methods::{ExponentialSmoothing, HoltMethod, HoltWintersMethod};
pub use smoothcast::{ErrorEvaluator, ForecastError, SmoothingMethod, TimeSeries};
