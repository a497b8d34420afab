use chrono::{Duration, TimeZone, Utc};
use smoothcast::measures::{ErrorEvaluator, Gmape, Mape};
use smoothcast::methods::{ExponentialSmoothing, HoltMethod, SmoothingMethod};
use smoothcast::TimeSeries;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Smoothcast: Basic Forecasting Example");
    println!("=====================================\n");

    // Create sample data
    let daily_data = create_sample_daily_data()?;
    println!("Sample data created: {} daily points\n", daily_data.len());

    // Hold out the last week
    let split = daily_data.len() - 7;
    let history = TimeSeries::from_points(daily_data.points()[..split].to_vec())?;

    let methods: Vec<Box<dyn SmoothingMethod>> = vec![
        Box::new(ExponentialSmoothing::new(0.2, 7)?),
        Box::new(HoltMethod::new(0.3, 0.1, 7)?),
    ];

    for method in &methods {
        let forecast = method.execute(&history)?;
        let tail = &forecast.points()[forecast.len() - 7..];

        println!("{}", method.name());
        for (i, (_, value)) in tail.iter().enumerate() {
            if let Some(value) = value {
                println!("  Day {}: {:.2}", i + 1, value);
            }
        }

        // Only the last 7 of the paired points belong to the forecast tail
        let mape = ErrorEvaluator::from_series(Mape::default(), &daily_data, &forecast)?;
        let gmape = ErrorEvaluator::from_series(Gmape::default(), &daily_data, &forecast)?;
        let start = 100.0 * (mape.len() - 7) as f64 / mape.len() as f64;

        println!("  In-sample MAPE:  {:.4}%", mape.get_error(0.0, start)?);
        println!("  Forecast MAPE:   {:.4}%", mape.get_error(start, 100.0)?);
        println!("  Forecast GMAPE:  {:.4}\n", gmape.get_error(start, 100.0)?);
    }

    Ok(())
}

/// Create sample daily data with a trend and some weekly seasonality
fn create_sample_daily_data() -> smoothcast::Result<TimeSeries> {
    let start = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();

    let pairs = (0..100)
        .map(|i| {
            let trend = 100.0 + 0.5 * i as f64;
            let season = 3.0 * ((i % 7) as f64 / 7.0 * std::f64::consts::TAU).sin();
            (start + Duration::days(i), trend + season)
        })
        .collect();

    TimeSeries::from_datetimes(pairs)
}
