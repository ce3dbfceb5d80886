use wasm_bindgen::prelude::*;

use crate::{
    application::{AnalyticsConfig, PredictionAnalyticsService},
    domain::{
        errors::{AppError, DomainResult, ValidationError},
        logging::LogComponent,
        market_data::{Price, services::MarketAnalysisService},
    },
    infrastructure::dto,
    time_utils::parse_reference_instant,
};

/// Browser entry point of the analytics core.
///
/// Every method takes explicit inputs (clock readings included) and returns
/// a JSON document; nothing is cached between calls apart from the
/// configuration and the reference yield set by the page.
#[wasm_bindgen]
pub struct PredictionAnalyticsApi {
    service: PredictionAnalyticsService,
}

#[wasm_bindgen]
impl PredictionAnalyticsApi {
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<PredictionAnalyticsApi, JsValue> {
        Self::from_config_json(config_json.as_deref()).map_err(to_js)
    }

    #[wasm_bindgen(js_name = computeIndicators)]
    pub fn compute_indicators(&self, feed_json: &str) -> Result<String, JsValue> {
        self.indicators_json(feed_json).map_err(to_js)
    }

    #[wasm_bindgen(js_name = roundTimeline)]
    pub fn round_timeline(&self, epoch_ms: f64) -> Result<String, JsValue> {
        self.timeline_json(epoch_ms).map_err(to_js)
    }

    #[wasm_bindgen(js_name = roundTimelineAt)]
    pub fn round_timeline_at(&self, instant: &str) -> Result<String, JsValue> {
        self.timeline_at_json(instant).map_err(to_js)
    }

    #[wasm_bindgen(js_name = volumeProfile)]
    pub fn volume_profile(&self, predictions_json: &str, reference: Option<f64>) -> Result<String, JsValue> {
        self.volume_profile_json(predictions_json, reference).map_err(to_js)
    }

    #[wasm_bindgen(js_name = sentiment)]
    pub fn sentiment(&self, avg_prediction: Option<f64>, current_price: f64) -> Result<String, JsValue> {
        let state = self.service.recompute_sentiment(avg_prediction, Price::from(current_price));
        dto::encode("sentiment", &state).map_err(to_js)
    }

    #[wasm_bindgen(js_name = dashboard)]
    pub fn dashboard(&self, epoch_ms: f64, inputs_json: &str) -> Result<String, JsValue> {
        self.dashboard_json(epoch_ms, inputs_json).map_err(to_js)
    }

    #[wasm_bindgen(js_name = refreshIntervals)]
    pub fn refresh_intervals(&self) -> Result<String, JsValue> {
        dto::encode("refresh intervals", &self.service.config().refresh).map_err(to_js)
    }

    /// Compute the historical yield once from a long price history and keep
    /// it for subsequent dashboards
    #[wasm_bindgen(js_name = setReferenceYieldFromFeed)]
    pub fn set_reference_yield_from_feed(&mut self, feed_json: &str) -> Result<Option<f64>, JsValue> {
        self.reference_yield_from_feed(feed_json).map_err(to_js)
    }
}

impl PredictionAnalyticsApi {
    pub fn from_config_json(config_json: Option<&str>) -> DomainResult<Self> {
        let config = match config_json {
            Some(json) if !json.trim().is_empty() => AnalyticsConfig::from_json(json)?,
            _ => AnalyticsConfig::default(),
        };
        let service = PredictionAnalyticsService::new(config)?;

        crate::log_info!(LogComponent::Presentation("WasmApi"), "analytics API ready");

        Ok(Self { service })
    }

    pub fn indicators_json(&self, feed_json: &str) -> DomainResult<String> {
        let prices = dto::decode_price_feed(feed_json)?;
        dto::encode("indicators", &self.service.recompute_indicators(&prices)?)
    }

    pub fn timeline_json(&self, epoch_ms: f64) -> DomainResult<String> {
        let timeline = self.service.recompute_timeline_at_epoch_ms(epoch_millis(epoch_ms)?)?;
        dto::encode("round timeline", &timeline)
    }

    pub fn timeline_at_json(&self, instant: &str) -> DomainResult<String> {
        let offset = self.service.config().schedule.utc_offset()?;
        let now = parse_reference_instant(instant, offset)?;
        dto::encode("round timeline", &self.service.recompute_timeline(now)?)
    }

    pub fn volume_profile_json(&self, predictions_json: &str, reference: Option<f64>) -> DomainResult<String> {
        let predictions = dto::decode_predictions(predictions_json)?;
        let buckets = self.service.recompute_histogram(&predictions, reference.map(Price::from));
        dto::encode("volume profile", &buckets)
    }

    pub fn dashboard_json(&self, epoch_ms: f64, inputs_json: &str) -> DomainResult<String> {
        let now = self.service.config().schedule.wall_clock(epoch_millis(epoch_ms)?)?;
        let inputs = dto::decode_dashboard_inputs(inputs_json)?;
        dto::encode("dashboard", &self.service.recompute(now, &inputs)?)
    }

    pub fn reference_yield_from_feed(&mut self, feed_json: &str) -> DomainResult<Option<f64>> {
        let prices = dto::decode_price_feed(feed_json)?;
        let reference_yield = MarketAnalysisService::new().annualized_yield(&prices);
        self.service = self.service.clone().with_reference_yield(reference_yield);
        Ok(reference_yield.map(|y| y.percent()))
    }
}

fn epoch_millis(value: f64) -> DomainResult<i64> {
    if !value.is_finite() {
        return Err(ValidationError::InvalidInstant(format!("epoch millis {value}")).into());
    }
    Ok(value.trunc() as i64)
}

fn to_js(error: AppError) -> JsValue {
    crate::log_error!(LogComponent::Presentation("WasmApi"), "{}", error);
    JsValue::from_str(&error.to_string())
}
