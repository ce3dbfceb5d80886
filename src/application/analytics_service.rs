use crate::{
    application::config::AnalyticsConfig,
    domain::{
        crowd::{
            HistogramBucket, HistogramBuilder, PredictionSample, SentimentAggregator, SentimentLabel,
            SentimentState, average_prediction,
        },
        errors::DomainResult,
        logging::LogComponent,
        market_data::{
            AnnualizedYield, IndicatorEngine, IndicatorSnapshot, Price, PricePoint, PriceSeries, RsiZone,
            services::{DataValidationService, MarketAnalysisService},
        },
        round::{RoundTimeline, RoundTimelineCalculator},
    },
};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Data handed over by the feed collaborators for one dashboard refresh
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DashboardInputs {
    pub prices: PriceSeries,
    pub predictions: Vec<PredictionSample>,
    /// The viewer's own guess, highlighted in the overlay
    pub own_prediction: Option<Price>,
    /// Spot price; the latest feed price is used when absent
    pub spot_price: Option<Price>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrowdSnapshot {
    pub participants: usize,
    pub average_prediction: Option<f64>,
    pub histogram: Vec<HistogramBucket>,
    pub sentiment: SentimentState,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketSummary {
    pub latest_price: Option<Price>,
    /// Lowest and highest feed price, for the chart's value axis
    pub price_low: Option<Price>,
    pub price_high: Option<Price>,
    pub change_percent: Option<f64>,
    pub rsi_zone: Option<RsiZone>,
    pub reference_yield: Option<AnnualizedYield>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub timeline: RoundTimeline,
    pub indicators: IndicatorSnapshot,
    pub crowd: CrowdSnapshot,
    pub market: MarketSummary,
}

/// Application service wiring the four analytics components together.
///
/// Holds configuration only; every `recompute_*` call is a pure function of
/// its arguments, so one instance can serve any number of panels.
#[derive(Debug, Clone)]
pub struct PredictionAnalyticsService {
    config: AnalyticsConfig,
    indicators: IndicatorEngine,
    timeline: RoundTimelineCalculator,
    histogram: HistogramBuilder,
    sentiment: SentimentAggregator,
    reference_yield: Option<AnnualizedYield>,
}

impl PredictionAnalyticsService {
    pub fn new(config: AnalyticsConfig) -> DomainResult<Self> {
        config.validate()?;

        crate::log_debug!(LogComponent::Application("AnalyticsService"), "configured with {:?}", config);

        Ok(Self {
            indicators: IndicatorEngine::new(config.indicators),
            timeline: RoundTimelineCalculator::new(config.schedule)?,
            histogram: HistogramBuilder::new(config.histogram)?,
            sentiment: SentimentAggregator::new(config.sentiment)?,
            reference_yield: None,
            config,
        })
    }

    /// Attach the historical yield figure computed once by the caller
    pub fn with_reference_yield(mut self, reference_yield: Option<AnnualizedYield>) -> Self {
        self.reference_yield = reference_yield;
        self
    }

    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    pub fn reference_yield(&self) -> Option<AnnualizedYield> {
        self.reference_yield
    }

    pub fn recompute_indicators(&self, prices: &[PricePoint]) -> DomainResult<IndicatorSnapshot> {
        if let Err(e) = DataValidationService::new().validate_series(prices) {
            // The feed owns ordering; flag it without refusing to chart
            crate::log_warn!(LogComponent::Application("AnalyticsService"), "price feed failed validation: {}", e);
        }
        self.indicators.recompute(prices)
    }

    pub fn recompute_timeline(&self, now: NaiveDateTime) -> DomainResult<RoundTimeline> {
        self.timeline.recompute(now)
    }

    pub fn recompute_timeline_at_epoch_ms(&self, epoch_ms: i64) -> DomainResult<RoundTimeline> {
        self.timeline.recompute_at_epoch_ms(epoch_ms)
    }

    pub fn recompute_histogram(&self, predictions: &[PredictionSample], reference: Option<Price>) -> Vec<HistogramBucket> {
        self.histogram.recompute(predictions, reference)
    }

    pub fn recompute_sentiment(&self, avg_prediction: Option<f64>, current_price: Price) -> SentimentState {
        self.sentiment.recompute(avg_prediction, current_price)
    }

    pub fn recompute_crowd(
        &self,
        predictions: &[PredictionSample],
        own_prediction: Option<Price>,
        spot_price: Option<Price>,
    ) -> CrowdSnapshot {
        let average = average_prediction(predictions);
        let sentiment = match spot_price {
            Some(spot) => self.recompute_sentiment(average, spot),
            None => SentimentLabel::Neutral.into(),
        };

        CrowdSnapshot {
            participants: predictions.len(),
            average_prediction: average,
            histogram: self.recompute_histogram(predictions, own_prediction),
            sentiment,
        }
    }

    /// Full dashboard refresh for one reference instant
    pub fn recompute(&self, now: NaiveDateTime, inputs: &DashboardInputs) -> DomainResult<DashboardSnapshot> {
        let indicators = self.recompute_indicators(inputs.prices.points())?;
        let latest_price = inputs.prices.get_latest_price();
        let spot_price = inputs.spot_price.or(latest_price);
        let range = inputs.prices.price_range();

        let market = MarketSummary {
            latest_price,
            price_low: range.map(|(low, _)| low),
            price_high: range.map(|(_, high)| high),
            change_percent: MarketAnalysisService::new().price_change_percent(inputs.prices.points()),
            rsi_zone: indicators.latest_rsi().map(|rsi| self.indicators.classify_rsi(rsi)),
            reference_yield: self.reference_yield,
        };

        let snapshot = DashboardSnapshot {
            timeline: self.recompute_timeline(now)?,
            crowd: self.recompute_crowd(&inputs.predictions, inputs.own_prediction, spot_price),
            indicators,
            market,
        };

        crate::log_debug!(
            LogComponent::Application("AnalyticsService"),
            "dashboard at {}: {} prices, {} predictions, phase {}",
            now,
            inputs.prices.len(),
            inputs.predictions.len(),
            snapshot.timeline.phase
        );

        Ok(snapshot)
    }
}
