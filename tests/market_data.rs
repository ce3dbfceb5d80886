use chrono::NaiveDate;
use prediction_analytics_wasm::domain::errors::{AppError, ValidationError};
use prediction_analytics_wasm::domain::market_data::{
    Price, PricePoint, PriceSeries,
    services::{DataValidationService, MarketAnalysisService},
};

fn point(y: i32, m: u32, d: u32, price: f64) -> PricePoint {
    PricePoint::new(NaiveDate::from_ymd_opt(y, m, d).unwrap(), Price::from(price))
}

#[test]
fn price_series_accessors() {
    let series = PriceSeries::from(vec![
        point(2026, 10, 7, 2400.0),
        point(2026, 10, 8, 2380.5),
        point(2026, 10, 9, 2425.0),
    ]);

    assert_eq!(series.len(), 3);
    assert!(!series.is_empty());
    assert_eq!(series.first().map(|p| p.price), Some(Price::from(2400.0)));
    assert_eq!(series.get_latest_price(), Some(Price::from(2425.0)));
    assert_eq!(series.price_range(), Some((Price::from(2380.5), Price::from(2425.0))));
}

#[test]
fn empty_series_has_no_range() {
    let series = PriceSeries::default();
    assert!(series.is_empty());
    assert_eq!(series.price_range(), None);
    assert_eq!(series.get_latest_price(), None);
}

#[test]
fn price_change_from_first_to_last() {
    let change = MarketAnalysisService::new()
        .price_change_percent(&[point(2026, 10, 7, 2000.0), point(2026, 10, 9, 2050.0)])
        .unwrap();
    assert!((change - 2.5).abs() < 1e-12);
    assert_eq!(MarketAnalysisService::new().price_change_percent(&[]), None);
}

#[test]
fn annualized_yield_over_ten_years() {
    let series = [point(2016, 1, 1, 100.0), point(2026, 1, 1, 200.0)];
    let y = MarketAnalysisService::new().annualized_yield(&series).unwrap();

    // doubling over ten years is a little over 7% a year
    assert!(y.percent() > 7.0 && y.percent() < 7.2, "yield {y}");
    assert!(y.to_string().ends_with('%'));
}

#[test]
fn annualized_yield_needs_a_span() {
    let service = MarketAnalysisService::new();
    assert_eq!(service.annualized_yield(&[point(2026, 1, 1, 100.0)]), None);
    assert_eq!(service.annualized_yield(&[point(2016, 1, 1, 0.0), point(2026, 1, 1, 200.0)]), None);
}

#[test]
fn validation_accepts_ascending_positive_feed() {
    let feed = [point(2026, 10, 7, 1.0), point(2026, 10, 8, 2.0)];
    assert_eq!(DataValidationService::new().validate_series(&feed), Ok(()));
}

#[test]
fn validation_flags_bad_feeds() {
    let service = DataValidationService::new();

    let unordered = [point(2026, 10, 8, 1.0), point(2026, 10, 8, 2.0)];
    assert_eq!(
        service.validate_series(&unordered),
        Err(AppError::Validation(ValidationError::UnorderedSeries(1)))
    );

    let negative = [point(2026, 10, 7, 1.0), point(2026, 10, 8, -2.0)];
    assert_eq!(
        service.validate_series(&negative),
        Err(AppError::Validation(ValidationError::InvalidPrice { index: 1, price: -2.0 }))
    );
}
