//! Shared types and models for the AQI Prediction service
//!
//! This crate contains the pure prediction pipeline shared between the
//! backend, the browser form (via WASM), and tests: input assembly, category
//! presentation and the numeric-estimate gate.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
