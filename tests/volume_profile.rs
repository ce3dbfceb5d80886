use prediction_analytics_wasm::domain::crowd::{HistogramBuilder, HistogramSettings, PredictionSample};
use prediction_analytics_wasm::domain::market_data::Price;
use quickcheck_macros::quickcheck;

fn samples(prices: &[f64]) -> Vec<PredictionSample> {
    prices.iter().copied().map(PredictionSample::from).collect()
}

#[test]
fn empty_input_gives_no_buckets() {
    assert!(HistogramBuilder::default().recompute(&[], Some(Price::from(100.0))).is_empty());
}

#[test]
fn narrow_range_uses_minimum_bucket_size() {
    let builder = HistogramBuilder::default();
    assert_eq!(builder.bucket_size(3.0), 0.25);

    let buckets = builder.recompute(&samples(&[80.0, 81.0, 82.0, 82.0, 83.0]), None);

    let rows: Vec<(f64, f64, u32)> = buckets.iter().map(|b| (b.price_min, b.price_max, b.count)).collect();
    assert_eq!(
        rows,
        vec![(80.0, 80.25, 1), (81.0, 81.25, 1), (82.0, 82.25, 2), (83.0, 83.25, 1)]
    );
    assert_eq!(buckets.iter().map(|b| b.count).sum::<u32>(), 5);
    assert!(buckets.iter().all(|b| b.count > 0));
    assert_eq!(buckets[2].price_mid, 82.125);
}

#[test]
fn reference_price_is_highlighted() {
    let buckets = HistogramBuilder::default()
        .recompute(&samples(&[80.0, 81.0, 82.0, 82.0, 83.0]), Some(Price::from(82.1)));

    let flagged: Vec<f64> = buckets.iter().filter(|b| b.contains_reference).map(|b| b.price_min).collect();
    assert_eq!(flagged, vec![82.0]);
}

#[test]
fn reference_outside_every_bucket_flags_nothing() {
    let buckets = HistogramBuilder::default()
        .recompute(&samples(&[80.0, 81.0]), Some(Price::from(80.5)));
    assert!(buckets.iter().all(|b| !b.contains_reference));
}

#[test]
fn identical_samples_share_one_bucket() {
    let buckets = HistogramBuilder::default().recompute(&samples(&[2400.0, 2400.0, 2400.0]), None);
    assert_eq!(buckets.len(), 1);
    assert_eq!(buckets[0].count, 3);
    assert!(buckets[0].contains(2400.0));
}

#[test]
fn wide_range_scales_bucket_size() {
    let builder = HistogramBuilder::default();
    let buckets = builder.recompute(&samples(&[2000.0, 2150.0, 2400.0]), None);

    assert_eq!(builder.bucket_size(400.0), 20.0);
    let mins: Vec<f64> = buckets.iter().map(|b| b.price_min).collect();
    assert_eq!(mins, vec![2000.0, 2140.0, 2400.0]);
    assert!(buckets.iter().all(|b| b.price_max - b.price_min == 20.0));
}

#[test]
fn anchor_follows_the_data_minimum() {
    let buckets = HistogramBuilder::default().recompute(&samples(&[80.1, 80.9]), None);
    assert_eq!(buckets.first().map(|b| b.price_min), Some(80.0));
}

#[test]
fn reference_at_the_minimum_is_flagged() {
    let prices = [212.908, 219.3, 226.457, 233.988, 237.05, 241.6, 244.528];
    let buckets = HistogramBuilder::default().recompute(&samples(&prices), Some(Price::from(212.908)));

    assert!(buckets[0].contains_reference);
    assert_eq!(buckets.iter().filter(|b| b.contains_reference).count(), 1);
}

#[test]
fn reference_below_the_anchor_flags_nothing() {
    let buckets = HistogramBuilder::default().recompute(&samples(&[80.0, 81.0]), Some(Price::from(79.9)));
    assert!(buckets.iter().all(|b| !b.contains_reference));
}

#[test]
fn invalid_settings_are_rejected() {
    assert!(HistogramBuilder::new(HistogramSettings { min_bucket_size: 0.0, ..Default::default() }).is_err());
    assert!(HistogramBuilder::new(HistogramSettings { target_buckets: 0, ..Default::default() }).is_err());
}

#[quickcheck]
fn counts_add_up_and_buckets_are_sorted(cents: Vec<u32>) -> bool {
    let prices: Vec<f64> = cents.iter().map(|&c| 1_000.0 + f64::from(c % 500_000) / 100.0).collect();
    let buckets = HistogramBuilder::default().recompute(&samples(&prices), None);

    buckets.iter().map(|b| b.count as usize).sum::<usize>() == prices.len()
        && buckets.iter().all(|b| b.count > 0 && b.price_min < b.price_max)
        && buckets.windows(2).all(|w| w[0].price_min < w[1].price_min)
}

#[quickcheck]
fn recompute_is_idempotent(cents: Vec<u32>, reference: u32) -> bool {
    let prices: Vec<f64> = cents.iter().map(|&c| f64::from(c % 1_000_000) / 100.0 + 1.0).collect();
    let builder = HistogramBuilder::default();
    let reference = Some(Price::from(f64::from(reference % 1_000_000) / 100.0));
    builder.recompute(&samples(&prices), reference) == builder.recompute(&samples(&prices), reference)
}

#[quickcheck]
fn every_sample_lies_in_exactly_one_bucket(thousandths: Vec<u32>, reference: u32) -> bool {
    let prices: Vec<f64> = thousandths.iter().map(|&t| 200.0 + f64::from(t % 50_000) / 1_000.0).collect();
    let reference = 200.0 + f64::from(reference % 50_000) / 1_000.0;
    let buckets = HistogramBuilder::default().recompute(&samples(&prices), Some(Price::from(reference)));

    let counted_where_contained = buckets.iter().all(|b| {
        b.count as usize == prices.iter().filter(|&&p| b.contains(p)).count()
    });
    let flags_match = buckets.iter().all(|b| b.contains_reference == b.contains(reference));

    prices.iter().all(|&p| buckets.iter().filter(|b| b.contains(p)).count() == 1)
        && counted_where_contained
        && flags_match
}
