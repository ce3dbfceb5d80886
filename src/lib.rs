//! Analytics core of the weekly gold-price prediction game: indicator
//! overlays, the round timeline, the crowd volume profile and the sentiment
//! gauge. Every computation is a pure function of explicit inputs.

use wasm_bindgen::prelude::*;

use crate::domain::logging::{LogComponent, get_logger};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
pub mod time_utils;

/// Install the console logger, log clock and panic hook for the browser build
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let logger = if cfg!(debug_assertions) {
        infrastructure::ConsoleLogger::new_development()
    } else {
        infrastructure::ConsoleLogger::new_production()
    };
    domain::logging::init_logger(Box::new(logger));
    domain::logging::init_time_provider(Box::new(infrastructure::ClockTimeProvider::new()));

    get_logger().info(LogComponent::Presentation("Initialize"), "analytics core initialized");
}
