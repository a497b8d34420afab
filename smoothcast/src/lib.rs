//! # Smoothcast
//!
//! Exponential smoothing forecasts and windowed forecast error measures.
//!
//! ## Features
//!
//! - Time series container with timestamp ordering (`TimeSeries`)
//! - Smoothing methods: simple exponential smoothing, Holt's trend method and
//!   a Holt-Winters placeholder
//! - Error measures scored over a percentage window: MAPE, GMAPE, MSE, SMAPE
//!
//! Smoothing and scoring are independent; a caller composes them:
//!
//! ```rust
//! use smoothcast::measures::{ErrorEvaluator, Mape};
//! use smoothcast::methods::{ExponentialSmoothing, SmoothingMethod};
//! use smoothcast::TimeSeries;
//!
//! let series = TimeSeries::from_twodim_list(vec![
//!     (0.0, 10.0),
//!     (1.0, 12.0),
//!     (2.0, 11.0),
//!     (3.0, 13.0),
//! ])?;
//!
//! // Smooth and forecast two values
//! let method = ExponentialSmoothing::new(0.7, 2)?;
//! let forecast = method.execute(&series)?;
//! assert_eq!(forecast.len(), 5);
//!
//! // Score the smoothed part against the observations
//! let evaluator = ErrorEvaluator::from_series(Mape::default(), &series, &forecast)?;
//! let error = evaluator.get_error(0.0, 100.0)?;
//! assert!(error >= 0.0);
//! # Ok::<(), smoothcast::ForecastError>(())
//! ```

pub mod error;
pub mod measures;
pub mod methods;
pub mod parameters;
pub mod series;

// Re-export commonly used types
pub use crate::error::{ForecastError, Result};
pub use crate::measures::{ErrorEvaluator, ErrorMeasure, LocalError};
pub use crate::methods::{ForecastHorizon, SmoothingMethod};
pub use crate::parameters::{ParameterName, ParameterSet};
pub use crate::series::TimeSeries;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
