//! Model registry loaded once at startup
//!
//! Three artifact slots are mandatory and abort startup when they fail to
//! load. The two regression slots are optional; any failure there closes the
//! numeric estimator gate for the lifetime of the process.

use std::{path::Path, sync::Arc, time::Duration};

use serde::{de::DeserializeOwned, Serialize};
use shared::{EstimatorGate, FeatureSchema, GateState, LabelDecoder};

use crate::config::ModelsConfig;
use crate::error::ArtifactError;
use crate::external::{AqiRegressor, CategoryClassifier, ModelDescriptor, RemoteModel};

pub const CATEGORY_CLASSIFIER: &str = "categoryClassifier";
pub const CATEGORY_LABEL_DECODER: &str = "categoryLabelDecoder";
pub const CATEGORY_FEATURE_LIST: &str = "categoryFeatureList";
pub const REGRESSION_MODEL: &str = "regressionModel";
pub const REGRESSION_FEATURE_LIST: &str = "regressionFeatureList";

/// Gate over the optional numeric regressor
pub type NumericEstimator = EstimatorGate<Arc<dyn AqiRegressor>>;

/// Read-only model artifacts shared by every request
pub struct ModelRegistry {
    classifier: Arc<dyn CategoryClassifier>,
    decoder: LabelDecoder,
    features: FeatureSchema,
    estimator: NumericEstimator,
}

/// Declared schemas, as reported by the model info endpoint
#[derive(Debug, Serialize)]
pub struct ModelInfo {
    pub category_features: FeatureSchema,
    pub category_classes: Vec<String>,
    pub numeric_estimate: GateState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regression_features: Option<FeatureSchema>,
}

impl ModelRegistry {
    pub fn new(
        classifier: Arc<dyn CategoryClassifier>,
        decoder: LabelDecoder,
        features: FeatureSchema,
        estimator: NumericEstimator,
    ) -> Self {
        Self {
            classifier,
            decoder,
            features,
            estimator,
        }
    }

    /// Load all artifact slots from the configured directory
    pub fn load(config: &ModelsConfig) -> Result<Self, ArtifactError> {
        let timeout = Duration::from_secs(config.request_timeout_secs);

        let features: FeatureSchema = read_artifact(
            CATEGORY_FEATURE_LIST,
            &config.artifact_path(&config.category_features),
        )?;
        let decoder: LabelDecoder = read_artifact(
            CATEGORY_LABEL_DECODER,
            &config.artifact_path(&config.category_label_decoder),
        )?;
        let descriptor: ModelDescriptor = read_artifact(
            CATEGORY_CLASSIFIER,
            &config.artifact_path(&config.category_classifier),
        )?;
        let classifier = RemoteModel::new(descriptor, config.api_key.clone(), timeout).map_err(
            |source| ArtifactError::Client {
                slot: CATEGORY_CLASSIFIER,
                source,
            },
        )?;

        tracing::info!(
            model = classifier.name(),
            features = features.len(),
            classes = decoder.classes().len(),
            "Category classifier loaded"
        );

        let estimator: NumericEstimator = EstimatorGate::from_load(
            load_regression(config, timeout)
                .map(|(model, schema)| {
                    tracing::info!(
                        model = model.name(),
                        features = schema.len(),
                        "Numeric AQI regressor loaded"
                    );
                    let model: Arc<dyn AqiRegressor> = Arc::new(model);
                    (model, schema)
                })
                .map_err(|e| tracing::warn!("Numeric AQI estimate disabled: {}", e)),
        );

        Ok(Self::new(Arc::new(classifier), decoder, features, estimator))
    }

    pub fn classifier(&self) -> &dyn CategoryClassifier {
        self.classifier.as_ref()
    }

    pub fn decoder(&self) -> &LabelDecoder {
        &self.decoder
    }

    pub fn features(&self) -> &FeatureSchema {
        &self.features
    }

    pub fn estimator(&self) -> &NumericEstimator {
        &self.estimator
    }

    pub fn info(&self) -> ModelInfo {
        ModelInfo {
            category_features: self.features.clone(),
            category_classes: self.decoder.classes().to_vec(),
            numeric_estimate: self.estimator.state(),
            regression_features: self.estimator.schema().cloned(),
        }
    }
}

fn load_regression(
    config: &ModelsConfig,
    timeout: Duration,
) -> Result<(RemoteModel, FeatureSchema), ArtifactError> {
    let descriptor: ModelDescriptor = read_artifact(
        REGRESSION_MODEL,
        &config.artifact_path(&config.regression_model),
    )?;
    let schema: FeatureSchema = read_artifact(
        REGRESSION_FEATURE_LIST,
        &config.artifact_path(&config.regression_features),
    )?;
    let model = RemoteModel::new(descriptor, config.api_key.clone(), timeout).map_err(
        |source| ArtifactError::Client {
            slot: REGRESSION_MODEL,
            source,
        },
    )?;

    Ok((model, schema))
}

fn read_artifact<T: DeserializeOwned>(slot: &'static str, path: &Path) -> Result<T, ArtifactError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ArtifactError::Read {
        slot,
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| ArtifactError::Parse {
        slot,
        path: path.to_path_buf(),
        source,
    })
}
