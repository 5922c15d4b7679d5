//! Error handling for the AQI Prediction service
//!
//! Request errors become a JSON body; artifact errors only occur at startup.

use std::path::PathBuf;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use shared::{Pollutant, ReadingError};
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Validation errors
    #[error("Validation error: {message}")]
    Validation { field: String, message: String },

    #[error("Resource not found: {0}")]
    NotFound(String),

    // Model service errors
    #[error("Model service error: {0}")]
    ModelService(String),

    #[error("Model returned an unusable result: {0}")]
    ModelContract(String),
}

/// Failure to load one of the model artifact slots at startup
#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("failed to read {slot} artifact at {}: {source}", path.display())]
    Read {
        slot: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {slot} artifact at {}: {source}", path.display())]
    Parse {
        slot: &'static str,
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to build client for {slot}: {source}")]
    Client {
        slot: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

impl From<ReadingError> for AppError {
    fn from(err: ReadingError) -> Self {
        // Report the request field, not the model feature name
        let field = match err.pollutant() {
            Pollutant::Pm25 => "pm25",
            Pollutant::Pm10 => "pm10",
            Pollutant::No2 => "no2",
            other => other.id(),
        };
        AppError::Validation {
            field: field.to_string(),
            message: err.to_string(),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        // Field errors come from a map; report the alphabetically first one
        let (field, message) = errors
            .field_errors()
            .into_iter()
            .min_by_key(|(field, _)| *field)
            .map(|(field, errs)| {
                let message = errs
                    .first()
                    .and_then(|e| e.message.as_ref())
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field));
                (field.to_string(), message)
            })
            .unwrap_or_else(|| ("input".to_string(), "Invalid input".to_string()));

        AppError::Validation { field, message }
    }
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_detail) = match &self {
            AppError::Validation { field, message } => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "VALIDATION_ERROR".to_string(),
                    message: message.clone(),
                    field: Some(field.clone()),
                },
            ),
            AppError::NotFound(resource) => (
                StatusCode::NOT_FOUND,
                ErrorDetail {
                    code: "NOT_FOUND".to_string(),
                    message: format!("{} not found", resource),
                    field: None,
                },
            ),
            AppError::ModelService(_) => (
                StatusCode::BAD_GATEWAY,
                ErrorDetail {
                    code: "MODEL_SERVICE_ERROR".to_string(),
                    message: "The prediction model is temporarily unavailable".to_string(),
                    field: None,
                },
            ),
            AppError::ModelContract(_) => (
                StatusCode::BAD_GATEWAY,
                ErrorDetail {
                    code: "MODEL_CONTRACT_ERROR".to_string(),
                    message: "The prediction model returned an unusable result".to_string(),
                    field: None,
                },
            ),
        };

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
