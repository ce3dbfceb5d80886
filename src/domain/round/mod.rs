//! Weekly prediction round: schedule, phase and the rendered day strip.

pub mod timeline;
pub mod value_objects;

pub use timeline::*;
pub use value_objects::*;
