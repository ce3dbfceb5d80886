pub mod analytics_service;
pub mod config;

pub use analytics_service::*;
pub use config::*;
