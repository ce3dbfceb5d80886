use crate::domain::{
    crowd::{HistogramSettings, SentimentThresholds},
    errors::{ConfigurationError, DomainResult},
    market_data::IndicatorSettings,
    round::RoundSchedule,
};
use serde::{Deserialize, Serialize};

/// Cadence the UI scheduler uses to call back into the core.
///
/// The core never reads these itself; they are published so every panel
/// polls at the same rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RefreshIntervals {
    pub countdown_tick_ms: u32,
    pub price_poll_ms: u32,
    pub predictions_poll_ms: u32,
}

impl Default for RefreshIntervals {
    fn default() -> Self {
        Self { countdown_tick_ms: 1_000, price_poll_ms: 5 * 60 * 1_000, predictions_poll_ms: 10_000 }
    }
}

/// All tunables of the analytics core. Every section falls back to its
/// defaults when missing from the JSON document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalyticsConfig {
    pub schedule: RoundSchedule,
    pub indicators: IndicatorSettings,
    pub histogram: HistogramSettings,
    pub sentiment: SentimentThresholds,
    pub refresh: RefreshIntervals,
}

impl AnalyticsConfig {
    pub fn from_json(json: &str) -> DomainResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigurationError::Malformed(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> DomainResult<()> {
        self.schedule.validate()?;
        self.histogram.validate()?;
        self.sentiment.validate()?;

        let periods = [
            ("fastSma", self.indicators.fast_sma),
            ("slowSma", self.indicators.slow_sma),
            ("rsi", self.indicators.rsi),
        ];
        if let Some((name, _)) = periods.iter().find(|(_, period)| *period == 0) {
            return Err(ConfigurationError::InvalidParameter(format!("indicator period {name} must be positive")).into());
        }
        if self.indicators.oversold >= self.indicators.overbought {
            return Err(ConfigurationError::InvalidParameter(format!(
                "RSI oversold band {} must sit below overbought band {}",
                self.indicators.oversold, self.indicators.overbought
            ))
            .into());
        }
        if self.refresh.countdown_tick_ms == 0 || self.refresh.price_poll_ms == 0 || self.refresh.predictions_poll_ms == 0 {
            return Err(ConfigurationError::InvalidParameter("refresh intervals must be positive".to_string()).into());
        }
        Ok(())
    }
}
