//! City presets and the pre-populated input form

use std::sync::Arc;

use serde::Serialize;
use shared::{CityPreset, DefaultProfile, KeyReadings, PollutantReading};

use crate::error::{AppError, AppResult};
use crate::services::registry::ModelRegistry;

/// Preset as listed to clients
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PresetView {
    pub name: String,
    pub readings: KeyReadings,
}

impl From<CityPreset> for PresetView {
    fn from(preset: CityPreset) -> Self {
        Self {
            name: preset.name().to_string(),
            readings: preset.readings(),
        }
    }
}

/// Everything a client needs to render the input form
#[derive(Debug, Clone, Serialize)]
pub struct FormView {
    pub city: String,
    /// Starting values for the editable fields, minimum 0
    pub readings: KeyReadings,
    /// Fixed values assumed for pollutants the user does not edit
    pub assumed_defaults: Vec<PollutantReading>,
    pub presets: Vec<String>,
    /// Whether to offer the numeric-estimate opt-in
    pub numeric_estimate_available: bool,
}

#[derive(Clone)]
pub struct PresetService {
    registry: Arc<ModelRegistry>,
}

impl PresetService {
    pub fn new(registry: Arc<ModelRegistry>) -> Self {
        Self { registry }
    }

    pub fn list_presets(&self) -> Vec<PresetView> {
        CityPreset::ALL.into_iter().map(PresetView::from).collect()
    }

    pub fn get_preset(&self, name: &str) -> AppResult<PresetView> {
        find_preset(name).map(PresetView::from)
    }

    /// Form state for `city`, or the manual-input preset when none is given
    pub fn form(&self, city: Option<&str>) -> AppResult<FormView> {
        let preset = city.map(find_preset).transpose()?.unwrap_or_default();

        Ok(FormView {
            city: preset.name().to_string(),
            readings: preset.readings(),
            assumed_defaults: DefaultProfile::readings(),
            presets: CityPreset::ALL.iter().map(|p| p.name().to_string()).collect(),
            numeric_estimate_available: self.registry.estimator().is_available(),
        })
    }
}

fn find_preset(name: &str) -> AppResult<CityPreset> {
    CityPreset::from_name(name)
        .ok_or_else(|| AppError::NotFound(format!("City preset '{}'", name)))
}
