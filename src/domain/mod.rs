pub mod crowd;
pub mod errors;
pub mod logging;
pub mod market_data;
pub mod round;
