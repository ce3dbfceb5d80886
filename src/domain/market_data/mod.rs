//! Market data aggregate: the price feed, its indicators and summary services.

pub mod entities;
pub mod indicator_engine;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use indicator_engine::*;
pub use value_objects::*;
