//! Single-step exponential smoothing recurrences
//!
//! Both updates correct the estimator with the error of the last estimation
//! instead of the previous estimator itself:
//!
//! ```text
//! error     = last_value - estimator
//! estimator = alpha * last_value + (1 - alpha) * error            (simple)
//! estimator = alpha * last_value + (1 - alpha) * (error + trend)  (Holt)
//! trend     = beta * (estimator - previous) + (1 - beta) * trend  (Holt)
//! ```

use crate::{MathError, Result};
use num_traits::Float;

/// Advance a simple exponential smoothing estimator by one step.
pub fn ses_update<T: Float>(alpha: T, last_value: T, estimator: T) -> T {
    let error = last_value - estimator;
    alpha * last_value + (T::one() - alpha) * error
}

/// Level and trend carried through a Holt pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoltState<T> {
    /// Current smoothed value
    pub estimator: T,
    /// Current trend estimate
    pub trend: T,
}

impl<T: Float> HoltState<T> {
    /// Seed the state from the first two observations.
    ///
    /// The estimator starts at the first value and the trend at the
    /// difference between the second and the first value.
    pub fn seed(first: T, second: T) -> Self {
        Self {
            estimator: first,
            trend: second - first,
        }
    }
}

/// Advance a Holt state by one step using the last observed value.
pub fn holt_update<T: Float>(
    alpha: T,
    beta: T,
    last_value: T,
    state: HoltState<T>,
) -> HoltState<T> {
    let error = last_value - state.estimator;
    let estimator = alpha * last_value + (T::one() - alpha) * (error + state.trend);
    let trend = beta * (estimator - state.estimator) + (T::one() - beta) * state.trend;

    HoltState { estimator, trend }
}

/// Derive the forecast time step from the last two timestamps.
pub fn time_step<T: Float>(timestamps: &[T]) -> Result<T> {
    match timestamps {
        [.., previous, last] => Ok(*last - *previous),
        _ => Err(MathError::InsufficientData(format!(
            "Need at least 2 timestamps to derive a time step, got {}",
            timestamps.len()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ses_update_uses_error_term() {
        // error = 4 - 2 = 2, estimator = 0.5 * 4 + 0.5 * 2
        assert_relative_eq!(ses_update(0.5, 4.0, 2.0), 3.0);

        // error = 10 - 10 = 0, only the alpha share survives
        assert_relative_eq!(ses_update(0.3, 10.0, 10.0), 3.0);
    }

    #[test]
    fn test_ses_update_f32() {
        let next: f32 = ses_update(0.5, 4.0, 2.0);
        assert!((next - 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_holt_seed() {
        let state = HoltState::seed(10.0, 12.5);
        assert_relative_eq!(state.estimator, 10.0);
        assert_relative_eq!(state.trend, 2.5);
    }

    #[test]
    fn test_holt_update() {
        let state = HoltState {
            estimator: 1.0,
            trend: 1.0,
        };
        let next = holt_update(0.5, 0.5, 2.0, state);

        // error = 1, estimator = 1 + 0.5 * 2, trend = 0.5 * 1 + 0.5 * 1
        assert_relative_eq!(next.estimator, 2.0);
        assert_relative_eq!(next.trend, 1.0);
    }

    #[test]
    fn test_time_step() {
        assert_relative_eq!(time_step(&[0.0, 1.0, 3.0]).unwrap(), 2.0);
        assert_relative_eq!(time_step(&[5.0, 7.5]).unwrap(), 2.5);
    }

    #[test]
    fn test_time_step_insufficient() {
        assert!(matches!(
            time_step::<f64>(&[1.0]),
            Err(MathError::InsufficientData(_))
        ));
        assert!(time_step::<f64>(&[]).is_err());
    }
}
