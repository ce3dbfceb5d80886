use crate::domain::market_data::Price;
use derive_more::{Constructor, From};
use serde::{Deserialize, Serialize};

/// Value Object - one participant's guess for the round's closing price
#[derive(Debug, Clone, Copy, PartialEq, From, Constructor, Serialize, Deserialize)]
pub struct PredictionSample {
    pub price: Price,
}

impl From<f64> for PredictionSample {
    fn from(price: f64) -> Self {
        Self { price: Price::from(price) }
    }
}

/// Non-empty slice of the volume-profile overlay, `[price_min, price_max)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistogramBucket {
    pub price_min: f64,
    pub price_max: f64,
    pub price_mid: f64,
    pub count: u32,
    pub contains_reference: bool,
}

impl HistogramBucket {
    pub fn contains(&self, price: f64) -> bool {
        self.price_min <= price && price < self.price_max
    }
}
