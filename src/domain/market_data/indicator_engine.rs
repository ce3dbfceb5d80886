use super::{IndicatorSeries, PricePoint};
use crate::domain::errors::{DomainResult, ValidationError};
use crate::domain::logging::LogComponent;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay};

pub const DEFAULT_RSI_PERIOD: usize = 14;

/// Simple moving average of closing prices.
///
/// Entry `i` is the mean of the `period` prices ending at `i`, or `None` for
/// the first `period - 1` entries. The output is always as long as `series`.
pub fn compute_sma(series: &[PricePoint], period: usize) -> DomainResult<IndicatorSeries> {
    if period == 0 {
        return Err(ValidationError::InvalidPeriod(period).into());
    }

    let values = series
        .iter()
        .enumerate()
        .map(|(i, _)| {
            if i + 1 < period {
                return None;
            }
            let sum: f64 = series[i + 1 - period..=i].iter().map(|p| p.price.value()).sum();
            Some(sum / period as f64)
        })
        .collect();

    Ok(values)
}

/// Relative strength index over simple trailing averages.
///
/// Gains and losses are averaged arithmetically over the last `period`
/// changes, not with Wilder smoothing, so values differ from most charting
/// packages. Index 0 and every index below `period` are `None`.
pub fn compute_rsi(series: &[PricePoint], period: usize) -> DomainResult<IndicatorSeries> {
    if period == 0 {
        return Err(ValidationError::InvalidPeriod(period).into());
    }

    let mut gains = vec![0.0; series.len()];
    let mut losses = vec![0.0; series.len()];
    for (i, pair) in series.windows(2).enumerate() {
        let change = pair[1].price.value() - pair[0].price.value();
        if change > 0.0 {
            gains[i + 1] = change;
        } else {
            losses[i + 1] = -change;
        }
    }

    let values = (0..series.len())
        .map(|i| {
            if i < period {
                return None;
            }
            let window = i + 1 - period..=i;
            let avg_gain = gains[window.clone()].iter().sum::<f64>() / period as f64;
            let avg_loss = losses[window].iter().sum::<f64>() / period as f64;
            if avg_loss == 0.0 {
                Some(100.0)
            } else {
                Some(100.0 - 100.0 / (1.0 + avg_gain / avg_loss))
            }
        })
        .collect();

    Ok(values)
}

/// Periods and RSI bands used by [`IndicatorEngine`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IndicatorSettings {
    pub fast_sma: usize,
    pub slow_sma: usize,
    pub rsi: usize,
    pub overbought: f64,
    pub oversold: f64,
}

impl Default for IndicatorSettings {
    fn default() -> Self {
        Self { fast_sma: 20, slow_sma: 50, rsi: DEFAULT_RSI_PERIOD, overbought: 70.0, oversold: 30.0 }
    }
}

/// Where the latest RSI reading sits relative to the configured bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay, AsRefStr, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RsiZone {
    #[strum(serialize = "overbought")]
    Overbought,
    #[strum(serialize = "neutral")]
    Neutral,
    #[strum(serialize = "oversold")]
    Oversold,
}

/// All configured indicators, each parallel to the input series
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorSnapshot {
    pub sma_fast: IndicatorSeries,
    pub sma_slow: IndicatorSeries,
    pub rsi: IndicatorSeries,
}

impl IndicatorSnapshot {
    pub fn latest_rsi(&self) -> Option<f64> {
        self.rsi.last().copied().flatten()
    }
}

/// Engine computing the chart overlays from a full price history
#[derive(Debug, Clone, Default)]
pub struct IndicatorEngine {
    settings: IndicatorSettings,
}

impl IndicatorEngine {
    pub fn new(settings: IndicatorSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &IndicatorSettings {
        &self.settings
    }

    pub fn recompute(&self, series: &[PricePoint]) -> DomainResult<IndicatorSnapshot> {
        let snapshot = IndicatorSnapshot {
            sma_fast: compute_sma(series, self.settings.fast_sma)?,
            sma_slow: compute_sma(series, self.settings.slow_sma)?,
            rsi: compute_rsi(series, self.settings.rsi)?,
        };

        crate::log_trace!(
            LogComponent::Domain("Indicators"),
            "recomputed {} points, latest RSI {:?}",
            series.len(),
            snapshot.latest_rsi()
        );

        Ok(snapshot)
    }

    pub fn classify_rsi(&self, rsi: f64) -> RsiZone {
        if rsi >= self.settings.overbought {
            RsiZone::Overbought
        } else if rsi <= self.settings.oversold {
            RsiZone::Oversold
        } else {
            RsiZone::Neutral
        }
    }
}
