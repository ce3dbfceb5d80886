use crate::domain::errors::{DomainResult, ValidationError};
use crate::domain::market_data::{AnnualizedYield, PricePoint};

const DAYS_PER_YEAR: f64 = 365.25;

/// Domain service for summary figures shown next to the chart
#[derive(Debug, Clone, Copy, Default)]
pub struct MarketAnalysisService;

impl MarketAnalysisService {
    pub fn new() -> Self {
        Self
    }

    /// Percent change from the first to the last point
    pub fn price_change_percent(&self, series: &[PricePoint]) -> Option<f64> {
        let first = series.first()?.price.value();
        let last = series.last()?.price.value();
        if first <= 0.0 {
            return None;
        }
        Some((last - first) / first * 100.0)
    }

    /// Compound annual growth between the first and last observation.
    ///
    /// `None` when the series spans less than one day or starts at a
    /// non-positive price.
    pub fn annualized_yield(&self, series: &[PricePoint]) -> Option<AnnualizedYield> {
        let first = series.first()?;
        let last = series.last()?;
        let days = (last.date - first.date).num_days();
        if days <= 0 || !first.price.is_positive() || !last.price.is_positive() {
            return None;
        }

        let growth = last.price.value() / first.price.value();
        let years = days as f64 / DAYS_PER_YEAR;
        Some(AnnualizedYield::from((growth.powf(1.0 / years) - 1.0) * 100.0))
    }
}

/// Domain service for checking a feed before trusting it
#[derive(Debug, Clone, Copy, Default)]
pub struct DataValidationService;

impl DataValidationService {
    pub fn new() -> Self {
        Self
    }

    /// Prices must be positive and dates strictly ascending
    pub fn validate_series(&self, series: &[PricePoint]) -> DomainResult<()> {
        for (index, point) in series.iter().enumerate() {
            if !point.price.is_positive() {
                return Err(ValidationError::InvalidPrice { index, price: point.price.value() }.into());
            }
            if index > 0 && point.date <= series[index - 1].date {
                return Err(ValidationError::UnorderedSeries(index).into());
            }
        }
        Ok(())
    }
}
