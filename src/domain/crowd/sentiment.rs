use super::value_objects::PredictionSample;
use crate::domain::errors::{ConfigurationError, DomainResult};
use crate::domain::market_data::Price;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter, AsRefStr, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SentimentLabel {
    #[strum(serialize = "Very Bullish")]
    VeryBullish,
    #[strum(serialize = "Bullish")]
    Bullish,
    #[strum(serialize = "Neutral")]
    Neutral,
    #[strum(serialize = "Bearish")]
    Bearish,
    #[strum(serialize = "Very Bearish")]
    VeryBearish,
}

impl SentimentLabel {
    /// Needle angle of the gauge, in degrees
    pub fn display_angle(&self) -> i32 {
        match self {
            Self::VeryBullish => 70,
            Self::Bullish => 40,
            Self::Neutral => 0,
            Self::Bearish => -40,
            Self::VeryBearish => -70,
        }
    }

    pub fn color_class(&self) -> &'static str {
        match self {
            Self::VeryBullish => "text-green-400",
            Self::Bullish => "text-green-300",
            Self::Neutral => "text-gray-400",
            Self::Bearish => "text-red-300",
            Self::VeryBearish => "text-red-400",
        }
    }
}

/// Gauge state derived from a label; output only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentState {
    pub label: SentimentLabel,
    pub display_angle: i32,
    pub color_class: &'static str,
}

impl From<SentimentLabel> for SentimentState {
    fn from(label: SentimentLabel) -> Self {
        Self { label, display_angle: label.display_angle(), color_class: label.color_class() }
    }
}

/// Percent gaps between crowd average and spot that separate the bands
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SentimentThresholds {
    pub strong_percent: f64,
    pub mild_percent: f64,
}

impl Default for SentimentThresholds {
    fn default() -> Self {
        Self { strong_percent: 3.0, mild_percent: 1.0 }
    }
}

impl SentimentThresholds {
    pub fn validate(&self) -> DomainResult<()> {
        if !(self.mild_percent >= 0.0 && self.strong_percent >= self.mild_percent) {
            return Err(ConfigurationError::InvalidParameter(format!(
                "sentiment thresholds must satisfy 0 <= mild ({}) <= strong ({})",
                self.mild_percent, self.strong_percent
            ))
            .into());
        }
        Ok(())
    }
}

/// Classifies the crowd's average guess against the spot price
#[derive(Debug, Clone, Default)]
pub struct SentimentAggregator {
    thresholds: SentimentThresholds,
}

impl SentimentAggregator {
    pub fn new(thresholds: SentimentThresholds) -> DomainResult<Self> {
        thresholds.validate()?;
        Ok(Self { thresholds })
    }

    pub fn recompute(&self, avg_prediction: Option<f64>, current_price: Price) -> SentimentState {
        let Some(avg) = avg_prediction else {
            return SentimentLabel::Neutral.into();
        };

        let diff_pct = (avg - current_price.value()) / current_price.value() * 100.0;
        let t = &self.thresholds;
        let label = if diff_pct > t.strong_percent {
            SentimentLabel::VeryBullish
        } else if diff_pct > t.mild_percent {
            SentimentLabel::Bullish
        } else if diff_pct < -t.strong_percent {
            SentimentLabel::VeryBearish
        } else if diff_pct < -t.mild_percent {
            SentimentLabel::Bearish
        } else {
            SentimentLabel::Neutral
        };

        label.into()
    }
}

/// Arithmetic mean of the guesses, `None` when nobody has predicted yet
pub fn average_prediction(samples: &[PredictionSample]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    Some(samples.iter().map(|s| s.price.value()).sum::<f64>() / samples.len() as f64)
}
