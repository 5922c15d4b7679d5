//! AQI prediction service
//!
//! Runs the per-request pipeline: resolve readings, assemble the classifier
//! input, decode and present the category, then consult the numeric
//! estimator gate.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::{
    present_category, round_estimate, validate_key_readings, CityPreset, FeatureVector,
    KeyReadings, PollutantLabel, PollutantLevels, PollutantReading, ReadingOverrides,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::services::registry::ModelRegistry;

/// Prediction service backed by the shared model registry
#[derive(Clone)]
pub struct PredictionService {
    registry: Arc<ModelRegistry>,
}

/// Input for a prediction request.
///
/// Readings that are left out are taken from `city` (or the manual-input
/// preset when no city is named). Reading values are checked after the merge
/// by `validate_key_readings`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct PredictInput {
    #[validate(length(min = 1, max = 64, message = "City must be 1 to 64 characters"))]
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub pm25: Option<f64>,
    #[serde(default)]
    pub pm10: Option<f64>,
    #[serde(default)]
    pub no2: Option<f64>,
    /// Opt in to the numeric AQI estimate
    #[serde(default)]
    pub show_numeric_estimate: bool,
}

/// Outcome of the numeric estimate for one request
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EstimateStatus {
    /// Regressor artifacts were not loaded at startup
    Unavailable,
    /// Available but the request did not opt in
    NotRequested,
    Estimated,
    /// The regressor call failed; the category result is still valid
    Failed,
}

/// Prediction result returned to clients
#[derive(Debug, Clone, Serialize)]
pub struct PredictionResult {
    pub prediction_id: Uuid,
    pub category: String,
    pub color: String,
    pub advisory: String,
    /// Largest resolved reading; illustrative, not model attribution
    pub primary_pollutant: PollutantLabel,
    pub numeric_estimate_available: bool,
    pub numeric_estimate_status: EstimateStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numeric_estimate: Option<Decimal>,
    pub readings: Vec<PollutantReading>,
    pub predicted_at: DateTime<Utc>,
}

impl PredictInput {
    /// Merge supplied readings over the selected preset
    pub fn resolve_readings(&self) -> AppResult<KeyReadings> {
        let preset = match &self.city {
            Some(name) => CityPreset::from_name(name)
                .ok_or_else(|| AppError::NotFound(format!("City preset '{}'", name)))?,
            None => CityPreset::default(),
        };

        let readings = ReadingOverrides {
            pm25: self.pm25,
            pm10: self.pm10,
            no2: self.no2,
        }
        .apply_to(preset);
        validate_key_readings(&readings)?;

        Ok(readings)
    }
}

impl PredictionService {
    /// Create a new PredictionService instance
    pub fn new(registry: Arc<ModelRegistry>) -> Self {
        Self { registry }
    }

    /// Classify the readings and build the presentation result
    #[tracing::instrument(skip(self, input), fields(city = ?input.city))]
    pub async fn predict(&self, input: PredictInput) -> AppResult<PredictionResult> {
        input.validate()?;
        let readings = input.resolve_readings()?;
        let levels = PollutantLevels::resolve(&readings);

        let features = FeatureVector::assemble(self.registry.features(), &levels);
        let label_id = self.registry.classifier().classify(&features).await?;
        let label = self.registry.decoder().decode(label_id).ok_or_else(|| {
            AppError::ModelContract(format!("label id {} has no decoder class", label_id))
        })?;

        let presentation = present_category(label);
        tracing::info!(category = %presentation.category, "AQI category predicted");

        let (numeric_estimate, numeric_estimate_status) = self
            .estimate(input.show_numeric_estimate, &levels)
            .await;

        Ok(PredictionResult {
            prediction_id: Uuid::new_v4(),
            category: presentation.category,
            color: presentation.color,
            advisory: presentation.advisory,
            primary_pollutant: levels.dominant().into(),
            numeric_estimate_available: self.registry.estimator().is_available(),
            numeric_estimate_status,
            numeric_estimate,
            readings: levels.readings(),
            predicted_at: Utc::now(),
        })
    }

    /// Call the regressor only through the gate
    async fn estimate(
        &self,
        opted_in: bool,
        levels: &PollutantLevels,
    ) -> (Option<Decimal>, EstimateStatus) {
        let gate = self.registry.estimator();
        let Some(request) = gate.request(opted_in, levels) else {
            let status = if gate.is_available() {
                EstimateStatus::NotRequested
            } else {
                EstimateStatus::Unavailable
            };
            return (None, status);
        };

        match request.model.regress(&request.input).await {
            Ok(raw) => match round_estimate(raw) {
                Some(value) => (Some(value), EstimateStatus::Estimated),
                None => {
                    tracing::warn!("Numeric AQI regressor returned a non-finite value");
                    (None, EstimateStatus::Failed)
                }
            },
            Err(e) => {
                tracing::warn!("Numeric AQI estimate failed: {}", e);
                (None, EstimateStatus::Failed)
            }
        }
    }
}
