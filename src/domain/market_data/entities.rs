pub use super::value_objects::{Price, PricePoint};
use serde::{Deserialize, Serialize};

/// Domain entity - Price series as delivered by the feed, ascending by date
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Wrap feed points as-is. Ordering is the feed's responsibility; see
    /// `DataValidationService::validate_series` for an explicit check.
    pub fn from_points(points: Vec<PricePoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&PricePoint> {
        self.points.first()
    }

    pub fn latest(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    pub fn get_latest_price(&self) -> Option<Price> {
        self.latest().map(|point| point.price)
    }

    /// Lowest and highest price in the series
    pub fn price_range(&self) -> Option<(Price, Price)> {
        let first = self.points.first()?.price;
        Some(self.points.iter().fold((first, first), |(min, max), point| {
            let min = if point.price < min { point.price } else { min };
            let max = if point.price > max { point.price } else { max };
            (min, max)
        }))
    }
}

impl From<Vec<PricePoint>> for PriceSeries {
    fn from(points: Vec<PricePoint>) -> Self {
        Self::from_points(points)
    }
}
