//! HTTP handlers for AQI predictions

use axum::{extract::State, Json};

use crate::error::AppResult;
use crate::services::prediction::{PredictInput, PredictionResult};
use crate::services::PredictionService;
use crate::AppState;

/// Predict the AQI category for the submitted readings
pub async fn create_prediction(
    State(state): State<AppState>,
    Json(input): Json<PredictInput>,
) -> AppResult<Json<PredictionResult>> {
    let service = PredictionService::new(state.registry);
    let prediction = service.predict(input).await?;
    Ok(Json(prediction))
}
