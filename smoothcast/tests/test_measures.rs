use approx::assert_relative_eq;
use rstest::rstest;
use smoothcast::measures::{
    ErrorEvaluator, ErrorMeasure, GeometricMeanAbsolutePercentageError, Gmape, LocalError, Mape,
    MeanAbsolutePercentageError, MeanSquaredError, SymmetricMeanAbsolutePercentageError,
};
use smoothcast::{ForecastError, TimeSeries};

#[test]
fn test_mape_local_error() {
    let mape = MeanAbsolutePercentageError;

    assert_eq!(mape.local_error(0.0, 42.0), LocalError::Excluded);
    assert_eq!(mape.local_error(0.0, 0.0), LocalError::Excluded);
    assert_relative_eq!(mape.local_error(10.0, 12.0).value().unwrap(), 20.0);
}

#[test]
fn test_mape_and_gmape_on_shared_window() {
    let actual = vec![10.0, 10.0, 10.0];
    let predicted = vec![10.0, 15.0, 5.0];

    let mape = ErrorEvaluator::new(Mape::default(), actual.clone(), predicted.clone()).unwrap();
    let gmape = ErrorEvaluator::new(Gmape::default(), actual, predicted).unwrap();

    let local: Vec<f64> = mape
        .error_values(0.0, 100.0)
        .unwrap()
        .iter()
        .filter_map(LocalError::value)
        .collect();
    assert_eq!(local.len(), 3);
    assert_relative_eq!(local[0], 0.0);
    assert_relative_eq!(local[1], 50.0, epsilon = 1e-9);
    assert_relative_eq!(local[2], 50.0, epsilon = 1e-9);

    assert_relative_eq!(mape.get_error(0.0, 100.0).unwrap(), 33.333, epsilon = 1e-3);
    assert_relative_eq!(gmape.get_error(0.0, 100.0).unwrap(), 13.572, epsilon = 1e-3);
}

#[rstest]
#[case(110.0, 100.0)]
#[case(60.0, 40.0)]
#[case(-5.0, 40.0)]
#[case(0.0, 101.0)]
fn test_invalid_windows_are_not_clamped(#[case] start: f64, #[case] end: f64) {
    let evaluator =
        ErrorEvaluator::new(Gmape::default(), vec![1.0, 2.0, 3.0], vec![1.5, 2.5, 3.5]).unwrap();

    assert!(matches!(
        evaluator.get_error(start, end),
        Err(ForecastError::InvalidWindow(_))
    ));
    assert!(matches!(
        evaluator.error_values(start, end),
        Err(ForecastError::InvalidWindow(_))
    ));
}

#[test]
fn test_window_selects_positions() {
    let actual = vec![10.0; 10];
    let predicted = vec![11.0, 11.0, 12.0, 12.0, 12.0, 12.0, 12.0, 12.0, 15.0, 15.0];
    let evaluator = ErrorEvaluator::new(Mape::default(), actual, predicted).unwrap();

    assert_relative_eq!(evaluator.get_error(0.0, 20.0).unwrap(), 10.0, epsilon = 1e-9);
    assert_relative_eq!(evaluator.get_error(20.0, 80.0).unwrap(), 20.0, epsilon = 1e-9);
    assert_relative_eq!(evaluator.get_error(80.0, 100.0).unwrap(), 50.0, epsilon = 1e-9);
}

#[test]
fn test_all_excluded_window_fails() {
    let evaluator = ErrorEvaluator::new(
        GeometricMeanAbsolutePercentageError,
        vec![0.0, 0.0, 5.0],
        vec![1.0, 1.0, 6.0],
    )
    .unwrap();

    assert!(matches!(
        evaluator.get_error(0.0, 60.0),
        Err(ForecastError::EmptyWindow { .. })
    ));
    assert_relative_eq!(evaluator.get_error(0.0, 100.0).unwrap(), 20.0, epsilon = 1e-9);
}

#[test]
fn test_metric_names() {
    assert_eq!(MeanAbsolutePercentageError.name(), "MAPE");
    assert_eq!(GeometricMeanAbsolutePercentageError.name(), "GMAPE");
    assert_eq!(MeanSquaredError.name(), "MSE");
    assert_eq!(SymmetricMeanAbsolutePercentageError.name(), "SMAPE");
}

#[test]
fn test_evaluator_from_series() {
    let original =
        TimeSeries::from_twodim_list(vec![(1.0, 100.0), (2.0, 200.0), (3.0, 400.0)]).unwrap();
    let calculated = TimeSeries::from_twodim_list(vec![(2.0, 220.0), (3.0, 300.0)]).unwrap();

    let evaluator = ErrorEvaluator::from_series(MeanSquaredError, &original, &calculated).unwrap();

    assert_eq!(evaluator.len(), 2);
    assert_relative_eq!(evaluator.error().unwrap(), (400.0 + 10_000.0) / 2.0);
}
