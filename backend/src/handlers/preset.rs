//! HTTP handlers for city presets and the input form

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::error::AppResult;
use crate::services::preset::{FormView, PresetView};
use crate::services::PresetService;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct FormQuery {
    pub city: Option<String>,
}

/// List all city presets
pub async fn list_presets(State(state): State<AppState>) -> Json<Vec<PresetView>> {
    let service = PresetService::new(state.registry);
    Json(service.list_presets())
}

/// Get a city preset by name
pub async fn get_preset(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<PresetView>> {
    let service = PresetService::new(state.registry);
    let preset = service.get_preset(&name)?;
    Ok(Json(preset))
}

/// Pre-populated form for the selected city
pub async fn get_form(
    State(state): State<AppState>,
    Query(query): Query<FormQuery>,
) -> AppResult<Json<FormView>> {
    let service = PresetService::new(state.registry);
    let form = service.form(query.city.as_deref())?;
    Ok(Json(form))
}
