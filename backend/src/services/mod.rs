//! Business logic services for the AQI Prediction service

pub mod prediction;
pub mod preset;
pub mod registry;

pub use prediction::PredictionService;
pub use preset::PresetService;
pub use registry::ModelRegistry;
