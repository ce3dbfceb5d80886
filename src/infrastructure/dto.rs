use crate::application::DashboardInputs;
use crate::domain::{
    crowd::PredictionSample,
    errors::{DomainResult, SerializationError, ValidationError},
    market_data::{Price, PricePoint, PriceSeries},
};
use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// DTO for one entry of the price feed
#[derive(Debug, Clone, Deserialize)]
pub struct PriceFeedEntryDto {
    pub date: String,
    pub price: f64,
}

impl PriceFeedEntryDto {
    /// Accepts a calendar date (`2026-10-12`) or a full RFC 3339 timestamp,
    /// in which case the date part in the timestamp's own offset is kept.
    pub fn to_domain(&self) -> DomainResult<PricePoint> {
        let date = NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
            .ok()
            .or_else(|| DateTime::parse_from_rfc3339(&self.date).ok().map(|t| t.date_naive()))
            .ok_or_else(|| ValidationError::InvalidInstant(format!("feed date {:?}", self.date)))?;
        Ok(PricePoint::new(date, Price::from(self.price)))
    }
}

/// DTO for one entry of the prediction feed
#[derive(Debug, Clone, Deserialize)]
pub struct PredictionDto {
    pub price: f64,
}

impl From<&PredictionDto> for PredictionSample {
    fn from(dto: &PredictionDto) -> Self {
        PredictionSample::from(dto.price)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DashboardInputsDto {
    pub prices: Vec<PriceFeedEntryDto>,
    pub predictions: Vec<PredictionDto>,
    pub own_prediction: Option<f64>,
    pub spot_price: Option<f64>,
}

impl DashboardInputsDto {
    pub fn to_domain(&self) -> DomainResult<DashboardInputs> {
        Ok(DashboardInputs {
            prices: PriceSeries::from_points(
                self.prices.iter().map(PriceFeedEntryDto::to_domain).collect::<DomainResult<_>>()?,
            ),
            predictions: self.predictions.iter().map(PredictionSample::from).collect(),
            own_prediction: self.own_prediction.map(Price::from),
            spot_price: self.spot_price.map(Price::from),
        })
    }
}

fn decode<T: DeserializeOwned>(what: &'static str, json: &str) -> DomainResult<T> {
    serde_json::from_str(json).map_err(|e| SerializationError::Decode { what, reason: e.to_string() }.into())
}

pub fn decode_price_feed(json: &str) -> DomainResult<Vec<PricePoint>> {
    decode::<Vec<PriceFeedEntryDto>>("price feed", json)?
        .iter()
        .map(PriceFeedEntryDto::to_domain)
        .collect()
}

pub fn decode_predictions(json: &str) -> DomainResult<Vec<PredictionSample>> {
    Ok(decode::<Vec<PredictionDto>>("prediction feed", json)?
        .iter()
        .map(PredictionSample::from)
        .collect())
}

pub fn decode_dashboard_inputs(json: &str) -> DomainResult<DashboardInputs> {
    decode::<DashboardInputsDto>("dashboard inputs", json)?.to_domain()
}

pub fn encode<T: Serialize>(what: &'static str, value: &T) -> DomainResult<String> {
    serde_json::to_string(value).map_err(|e| SerializationError::Encode { what, reason: e.to_string() }.into())
}
