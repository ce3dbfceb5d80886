use chrono::NaiveDate;
use derive_more::{Constructor, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Value Object - spot price in USD per troy ounce
#[derive(Debug, Clone, Copy, PartialEq, From, Into, Deref, Constructor, Display, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }
}

impl PartialOrd for Price {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

/// Value Object - one daily (or weekly) observation of the price feed
#[derive(Debug, Clone, Copy, PartialEq, Constructor, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub price: Price,
}

/// Parallel output of an indicator: `None` where history is insufficient
pub type IndicatorSeries = Vec<Option<f64>>;

/// Compound annual growth of the historical series, in percent.
///
/// Computed once by the caller and handed to whatever displays it.
#[derive(Debug, Clone, Copy, PartialEq, From, Into, Display, Serialize, Deserialize)]
#[display(fmt = "{:.2}%", _0)]
#[serde(transparent)]
pub struct AnnualizedYield(f64);

impl AnnualizedYield {
    pub fn percent(&self) -> f64 {
        self.0
    }
}
