use super::value_objects::{HistogramBucket, PredictionSample};
use crate::domain::errors::{ConfigurationError, DomainResult};
use crate::domain::logging::LogComponent;
use crate::domain::market_data::Price;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HistogramSettings {
    /// Lower bound on bucket width, in USD
    pub min_bucket_size: f64,
    /// Number of buckets the sample range is split into before the lower
    /// bound applies
    pub target_buckets: u32,
}

impl Default for HistogramSettings {
    fn default() -> Self {
        Self { min_bucket_size: 0.25, target_buckets: 20 }
    }
}

impl HistogramSettings {
    pub fn validate(&self) -> DomainResult<()> {
        if !(self.min_bucket_size.is_finite() && self.min_bucket_size > 0.0) {
            return Err(ConfigurationError::InvalidParameter(format!(
                "min_bucket_size must be positive, got {}",
                self.min_bucket_size
            ))
            .into());
        }
        if self.target_buckets == 0 {
            return Err(ConfigurationError::InvalidParameter("target_buckets must be positive".to_string()).into());
        }
        Ok(())
    }
}

/// Turns the round's predictions into the volume-profile overlay
#[derive(Debug, Clone, Default)]
pub struct HistogramBuilder {
    settings: HistogramSettings,
}

impl HistogramBuilder {
    pub fn new(settings: HistogramSettings) -> DomainResult<Self> {
        settings.validate()?;
        Ok(Self { settings })
    }

    /// Bucket width for a given sample range
    pub fn bucket_size(&self, range: f64) -> f64 {
        self.settings.min_bucket_size.max(range / f64::from(self.settings.target_buckets))
    }

    /// Buckets anchored at `floor(min / size) * size`, only the non-empty
    /// ones, ascending by price. Counts always add up to `samples.len()` and
    /// every sample lies inside the bucket that counts it.
    pub fn recompute(&self, samples: &[PredictionSample], reference: Option<Price>) -> Vec<HistogramBucket> {
        let Some(first) = samples.first() else {
            return Vec::new();
        };

        let (min, max) = samples.iter().fold((first.price.value(), first.price.value()), |(lo, hi), s| {
            (lo.min(s.price.value()), hi.max(s.price.value()))
        });
        let size = self.bucket_size(max - min);
        let start = match (min / size).floor() * size {
            anchor if anchor > min => anchor - size,
            anchor => anchor,
        };
        let lower = |key: i64| start + key as f64 * size;
        let bucket_key = |price: f64| {
            // Division rounding can land one bucket off the emitted bounds
            let mut key = ((price - start) / size).floor() as i64;
            while key > 0 && price < lower(key) {
                key -= 1;
            }
            while price >= lower(key + 1) && lower(key + 1) > lower(key) {
                key += 1;
            }
            key
        };

        let mut counts: BTreeMap<i64, u32> = BTreeMap::new();
        for sample in samples {
            *counts.entry(bucket_key(sample.price.value())).or_insert(0) += 1;
        }

        let buckets: Vec<HistogramBucket> = counts
            .into_iter()
            .map(|(key, count)| {
                let price_min = lower(key);
                let price_max = lower(key + 1);
                HistogramBucket {
                    price_min,
                    price_max,
                    price_mid: (price_min + price_max) / 2.0,
                    count,
                    contains_reference: reference.is_some_and(|r| price_min <= r.value() && r.value() < price_max),
                }
            })
            .collect();

        crate::log_trace!(
            LogComponent::Domain("Histogram"),
            "{} samples -> {} buckets of {:.4}",
            samples.len(),
            buckets.len(),
            size
        );

        buckets
    }
}
