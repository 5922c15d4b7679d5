//! Domain models for the AQI prediction pipeline

mod category;
mod estimate;
mod feature;
mod pollutant;
mod preset;

pub use category::*;
pub use estimate::*;
pub use feature::*;
pub use pollutant::*;
pub use preset::*;
