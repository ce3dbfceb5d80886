use chrono::{Duration, NaiveDate};
use prediction_analytics_wasm::domain::errors::{AppError, ValidationError};
use prediction_analytics_wasm::domain::market_data::{
    IndicatorEngine, IndicatorSettings, Price, PricePoint, RsiZone, compute_rsi, compute_sma,
};
use quickcheck_macros::quickcheck;

fn series(prices: &[f64]) -> Vec<PricePoint> {
    let start = NaiveDate::from_ymd_opt(2026, 7, 1).unwrap();
    prices
        .iter()
        .enumerate()
        .map(|(i, &p)| PricePoint::new(start + Duration::days(i as i64), Price::from(p)))
        .collect()
}

#[test]
fn sma_matches_window_means() {
    let sma = compute_sma(&series(&[10.0, 11.0, 12.0, 13.0, 14.0]), 3).unwrap();
    assert_eq!(sma, vec![None, None, Some(11.0), Some(12.0), Some(13.0)]);
}

#[test]
fn sma_period_one_is_identity() {
    let prices = [2400.5, 2410.25, 2398.0];
    let sma = compute_sma(&series(&prices), 1).unwrap();
    assert_eq!(sma, prices.iter().map(|&p| Some(p)).collect::<Vec<_>>());
}

#[test]
fn sma_longer_than_series_is_all_undefined() {
    let sma = compute_sma(&series(&[1.0, 2.0]), 5).unwrap();
    assert_eq!(sma, vec![None, None]);
}

#[test]
fn empty_series_gives_empty_output() {
    assert!(compute_sma(&[], 3).unwrap().is_empty());
    assert!(compute_rsi(&[], 14).unwrap().is_empty());
}

#[test]
fn zero_period_is_rejected() {
    let data = series(&[1.0, 2.0, 3.0]);
    assert_eq!(compute_sma(&data, 0), Err(AppError::Validation(ValidationError::InvalidPeriod(0))));
    assert_eq!(compute_rsi(&data, 0), Err(AppError::Validation(ValidationError::InvalidPeriod(0))));
}

#[test]
fn rsi_flat_series_reports_no_loss() {
    let rsi = compute_rsi(&series(&[10.0; 15]), 14).unwrap();
    assert_eq!(rsi.len(), 15);
    assert!(rsi[..14].iter().all(Option::is_none));
    assert_eq!(rsi[14], Some(100.0));
}

#[test]
fn rsi_with_a_loss_in_window_is_strictly_inside_bounds() {
    let mut prices: Vec<f64> = (0..15).map(|i| 100.0 + i as f64).collect();
    prices[7] = 90.0;
    let rsi = compute_rsi(&series(&prices), 14).unwrap();
    let value = rsi[14].expect("defined at index 14");
    assert!(value > 0.0 && value < 100.0, "rsi {value}");
}

#[test]
fn rsi_uses_simple_trailing_average() {
    // changes: +1, -1, +2, -2 -> period 2 windows
    let rsi = compute_rsi(&series(&[10.0, 11.0, 10.0, 12.0, 10.0]), 2).unwrap();
    assert_eq!(rsi[0], None);
    assert_eq!(rsi[1], None);
    // gains [1, 0] losses [0, 1] -> rs = 1 -> 50
    assert_eq!(rsi[2], Some(50.0));
    // gains [0, 2] losses [1, 0] -> rs = 2 -> 100 - 100/3
    assert!((rsi[3].unwrap() - (100.0 - 100.0 / 3.0)).abs() < 1e-12);
    // gains [2, 0] losses [0, 2] -> rs = 1 -> 50
    assert_eq!(rsi[4], Some(50.0));
}

#[test]
fn rsi_only_losses_is_zero() {
    let rsi = compute_rsi(&series(&[5.0, 4.0, 3.0, 2.0]), 3).unwrap();
    assert_eq!(rsi[3], Some(0.0));
}

#[test]
fn engine_bundles_configured_periods() {
    let engine = IndicatorEngine::new(IndicatorSettings { fast_sma: 2, slow_sma: 3, rsi: 2, ..Default::default() });
    let data = series(&[1.0, 2.0, 3.0, 4.0]);
    let snapshot = engine.recompute(&data).unwrap();

    assert_eq!(snapshot.sma_fast, vec![None, Some(1.5), Some(2.5), Some(3.5)]);
    assert_eq!(snapshot.sma_slow, vec![None, None, Some(2.0), Some(3.0)]);
    assert_eq!(snapshot.latest_rsi(), Some(100.0));
    assert_eq!(engine.classify_rsi(100.0), RsiZone::Overbought);
    assert_eq!(engine.classify_rsi(50.0), RsiZone::Neutral);
    assert_eq!(engine.classify_rsi(30.0), RsiZone::Oversold);
}

#[test]
fn engine_rejects_zero_period_setting() {
    let engine = IndicatorEngine::new(IndicatorSettings { slow_sma: 0, ..Default::default() });
    assert!(engine.recompute(&series(&[1.0])).is_err());
}

#[quickcheck]
fn sma_preserves_length(prices: Vec<u16>, period: u8) -> bool {
    let period = usize::from(period) + 1;
    let data = series(&prices.iter().map(|&p| f64::from(p) + 1.0).collect::<Vec<_>>());
    compute_sma(&data, period).map(|out| out.len() == data.len()).unwrap_or(false)
}

#[quickcheck]
fn rsi_stays_in_bounds(prices: Vec<u16>, period: u8) -> bool {
    let period = usize::from(period % 30) + 1;
    let data = series(&prices.iter().map(|&p| f64::from(p) + 1.0).collect::<Vec<_>>());
    let rsi = compute_rsi(&data, period).unwrap();
    rsi.len() == data.len()
        && rsi.iter().enumerate().all(|(i, v)| match v {
            None => i < period,
            Some(v) => i >= period && (0.0..=100.0).contains(v),
        })
}

#[quickcheck]
fn recompute_is_idempotent(prices: Vec<u16>) -> bool {
    let data = series(&prices.iter().map(|&p| f64::from(p) + 1.0).collect::<Vec<_>>());
    let engine = IndicatorEngine::default();
    engine.recompute(&data) == engine.recompute(&data)
}
