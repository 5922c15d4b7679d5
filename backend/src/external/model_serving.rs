//! Model-serving client
//!
//! The category classifier and the numeric regressor are opaque models hosted
//! behind HTTP prediction endpoints. This module only moves feature vectors
//! in and raw predictions out.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use shared::FeatureVector;

use crate::error::{AppError, AppResult};

/// Black-box category classifier: feature vector in, label id out
#[async_trait]
pub trait CategoryClassifier: Send + Sync {
    async fn classify(&self, input: &FeatureVector) -> AppResult<i64>;
}

/// Black-box numeric AQI regressor
#[async_trait]
pub trait AqiRegressor: Send + Sync {
    async fn regress(&self, input: &FeatureVector) -> AppResult<f64>;
}

/// Contents of a model artifact file
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ModelDescriptor {
    /// Prediction endpoint URL
    pub endpoint: String,
    /// Optional model name, used in logs
    #[serde(default)]
    pub name: Option<String>,
}

/// Request body sent to a prediction endpoint
#[derive(Debug, Serialize)]
pub struct PredictRequest<'a> {
    pub feature_names: &'a [String],
    pub instances: Vec<&'a [f64]>,
}

impl<'a> PredictRequest<'a> {
    pub fn single(input: &'a FeatureVector) -> Self {
        Self {
            feature_names: input.names(),
            instances: vec![input.values()],
        }
    }
}

/// Response body from a prediction endpoint
#[derive(Debug, Deserialize)]
pub struct PredictResponse<T> {
    pub predictions: Vec<T>,
}

/// Client for one model hosted on a prediction endpoint
#[derive(Clone)]
pub struct RemoteModel {
    name: String,
    endpoint: String,
    api_key: Option<String>,
    http_client: Client,
}

impl RemoteModel {
    /// Create a client for the model described by `descriptor`
    pub fn new(
        descriptor: ModelDescriptor,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(timeout).build()?;
        let name = descriptor
            .name
            .unwrap_or_else(|| descriptor.endpoint.clone());

        Ok(Self {
            name,
            endpoint: descriptor.endpoint,
            api_key,
            http_client,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Send one feature vector and return the first prediction
    async fn predict<T: DeserializeOwned>(&self, input: &FeatureVector) -> AppResult<T> {
        let mut request = self
            .http_client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(&PredictRequest::single(input));

        if let Some(api_key) = &self.api_key {
            request = request.header("x-api-key", api_key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::ModelService(format!("{}: request failed: {}", self.name, e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::ModelService(format!(
                "{}: API returned {}: {}",
                self.name, status, body
            )));
        }

        let result: PredictResponse<T> = response.json().await.map_err(|e| {
            AppError::ModelContract(format!("{}: failed to parse response: {}", self.name, e))
        })?;

        result
            .predictions
            .into_iter()
            .next()
            .ok_or_else(|| AppError::ModelContract(format!("{}: empty predictions", self.name)))
    }
}

/// Label ids may arrive as integers or integral floats
pub fn parse_label_id(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0)
            .map(|f| f as i64)
    })
}

#[async_trait]
impl CategoryClassifier for RemoteModel {
    async fn classify(&self, input: &FeatureVector) -> AppResult<i64> {
        let raw: Value = self.predict(input).await?;
        parse_label_id(&raw).ok_or_else(|| {
            AppError::ModelContract(format!("{}: label id {} is not an integer", self.name, raw))
        })
    }
}

#[async_trait]
impl AqiRegressor for RemoteModel {
    async fn regress(&self, input: &FeatureVector) -> AppResult<f64> {
        self.predict(input).await
    }
}
