use derive_more::Display;

/// Root error type for the analytics core
#[derive(Debug, Clone, PartialEq, Display)]
pub enum AppError {
    #[display(fmt = "Validation Error: {}", _0)]
    Validation(ValidationError),
    #[display(fmt = "Configuration Error: {}", _0)]
    Configuration(ConfigurationError),
    #[display(fmt = "Serialization Error: {}", _0)]
    Serialization(SerializationError),
}

/// Caller contract violations detected at the domain boundary
#[derive(Debug, Clone, PartialEq, Display)]
pub enum ValidationError {
    #[display(fmt = "Invalid period: {} (must be positive)", _0)]
    InvalidPeriod(usize),
    #[display(fmt = "Invalid reference instant: {}", _0)]
    InvalidInstant(String),
    #[display(fmt = "Invalid price {} at index {}", price, index)]
    InvalidPrice { index: usize, price: f64 },
    #[display(fmt = "Series is not strictly ascending by date at index {}", _0)]
    UnorderedSeries(usize),
}

/// Problems with schedule and tuning parameters
#[derive(Debug, Clone, PartialEq, Display)]
pub enum ConfigurationError {
    #[display(fmt = "Invalid schedule: {}", _0)]
    InvalidSchedule(String),
    #[display(fmt = "Invalid parameter: {}", _0)]
    InvalidParameter(String),
    #[display(fmt = "Malformed configuration: {}", _0)]
    Malformed(String),
}

/// JSON encode/decode failures at the infrastructure edge
#[derive(Debug, Clone, PartialEq, Display)]
pub enum SerializationError {
    #[display(fmt = "Failed to decode {}: {}", what, reason)]
    Decode { what: &'static str, reason: String },
    #[display(fmt = "Failed to encode {}: {}", what, reason)]
    Encode { what: &'static str, reason: String },
}

impl std::error::Error for AppError {}
impl std::error::Error for ValidationError {}
impl std::error::Error for ConfigurationError {}
impl std::error::Error for SerializationError {}

impl From<ValidationError> for AppError {
    fn from(error: ValidationError) -> Self {
        AppError::Validation(error)
    }
}

impl From<ConfigurationError> for AppError {
    fn from(error: ConfigurationError) -> Self {
        AppError::Configuration(error)
    }
}

impl From<SerializationError> for AppError {
    fn from(error: SerializationError) -> Self {
        AppError::Serialization(error)
    }
}

pub type DomainResult<T> = Result<T, AppError>;
