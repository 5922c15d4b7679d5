//! HTTP handler for model metadata

use axum::{extract::State, Json};

use crate::services::registry::ModelInfo;
use crate::AppState;

/// Declared feature schemas, decoder classes and numeric-estimate availability
pub async fn get_model_info(State(state): State<AppState>) -> Json<ModelInfo> {
    Json(state.registry.info())
}
