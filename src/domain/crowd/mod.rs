//! Crowd aggregate: the round's predictions as a volume profile and a
//! sentiment gauge.

pub mod histogram;
pub mod sentiment;
pub mod value_objects;

pub use histogram::*;
pub use sentiment::*;
pub use value_objects::*;
