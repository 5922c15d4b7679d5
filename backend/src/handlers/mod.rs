//! HTTP handlers for the AQI Prediction API

mod health;
mod model;
mod prediction;
mod preset;

pub use health::*;
pub use model::*;
pub use prediction::*;
pub use preset::*;
