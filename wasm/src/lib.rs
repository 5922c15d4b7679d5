//! WebAssembly module for the AQI Prediction form
//!
//! Provides client-side computation for:
//! - City preset switching
//! - Reading validation
//! - Feature vector preview for a declared feature list
//! - Category badge color, advisory and primary pollutant

use rust_decimal::Decimal;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::log_1(&JsValue::from_str("AQI form module loaded"));
}

/// Starting readings for a city preset as JSON (`{"pm25":..,"pm10":..,"no2":..}`)
#[wasm_bindgen]
pub fn preset_readings(city: &str) -> Result<String, JsValue> {
    let preset = CityPreset::from_name(city)
        .ok_or_else(|| JsValue::from_str(&format!("Unknown city preset: {}", city)))?;

    serde_json::to_string(&preset.readings())
        .map_err(|e| JsValue::from_str(&format!("Failed to encode preset: {}", e)))
}

/// Names for the city selector, in display order
#[wasm_bindgen]
pub fn preset_names() -> js_sys::Array {
    CityPreset::ALL
        .iter()
        .map(|p| JsValue::from_str(p.name()))
        .collect()
}

/// Check a single field value before it is submitted
#[wasm_bindgen]
pub fn validate_field(pollutant_id: &str, value: f64) -> Result<(), JsValue> {
    let pollutant = Pollutant::from_id(pollutant_id)
        .ok_or_else(|| JsValue::from_str(&format!("Unknown pollutant: {}", pollutant_id)))?;

    validate_reading(pollutant, value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Feature vector the server would send for a declared feature list (JSON array)
#[wasm_bindgen]
pub fn assemble_features(
    feature_names_json: &str,
    pm25: f64,
    pm10: f64,
    no2: f64,
) -> Result<Vec<f64>, JsValue> {
    let schema = FeatureSchema::from_json(feature_names_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid feature list JSON: {}", e)))?;
    let levels = PollutantLevels::resolve(&KeyReadings::new(pm25, pm10, no2));

    Ok(FeatureVector::assemble(&schema, &levels).values().to_vec())
}

/// Badge color for a category label
#[wasm_bindgen]
pub fn category_color(label: &str) -> String {
    AqiCategory::from_label(label).color().to_string()
}

/// Health advisory for a category label; empty when unrecognized
#[wasm_bindgen]
pub fn category_advisory(label: &str) -> String {
    AqiCategory::from_label(label).advisory().to_string()
}

/// Display name of the largest resolved reading
#[wasm_bindgen]
pub fn primary_pollutant(pm25: f64, pm10: f64, no2: f64) -> String {
    let levels = PollutantLevels::resolve(&KeyReadings::new(pm25, pm10, no2));
    levels.dominant().display_name().to_string()
}

/// Format a raw numeric AQI estimate with two decimals
#[wasm_bindgen]
pub fn format_estimate(value: f64) -> String {
    round_estimate(value)
        .map(|d: Decimal| format!("{:.2}", d))
        .unwrap_or_default()
}
