//! Configuration management for the AQI Prediction service
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with AQI_ prefix

use std::path::PathBuf;

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Model artifact configuration
    pub models: ModelsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

/// Where the five model artifact slots live
#[derive(Debug, Deserialize, Clone)]
pub struct ModelsConfig {
    /// Directory holding the artifact files
    pub artifact_dir: PathBuf,

    /// Category classifier descriptor (mandatory)
    pub category_classifier: String,

    /// Label decoder classes (mandatory)
    pub category_label_decoder: String,

    /// Classifier feature list (mandatory)
    pub category_features: String,

    /// Numeric AQI regressor descriptor (optional)
    pub regression_model: String,

    /// Regressor feature list (optional)
    pub regression_features: String,

    /// Timeout for calls to model-serving endpoints
    pub request_timeout_secs: u64,

    /// API key sent as `x-api-key` to model-serving endpoints
    #[serde(default)]
    pub api_key: Option<String>,
}

impl ModelsConfig {
    pub fn artifact_path(&self, file_name: &str) -> PathBuf {
        self.artifact_dir.join(file_name)
    }
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("AQI_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("models.artifact_dir", "artifacts")?
            .set_default("models.category_classifier", "aqi_category_model.json")?
            .set_default("models.category_label_decoder", "aqi_category_labelencoder.json")?
            .set_default("models.category_features", "aqi_category_features.json")?
            .set_default("models.regression_model", "aqi_regression_model.json")?
            .set_default("models.regression_features", "aqi_regression_features.json")?
            .set_default("models.request_timeout_secs", 30)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (AQI prefix)
            .add_source(
                Environment::with_prefix("AQI")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            artifact_dir: PathBuf::from("artifacts"),
            category_classifier: "aqi_category_model.json".to_string(),
            category_label_decoder: "aqi_category_labelencoder.json".to_string(),
            category_features: "aqi_category_features.json".to_string(),
            regression_model: "aqi_regression_model.json".to_string(),
            regression_features: "aqi_regression_features.json".to_string(),
            request_timeout_secs: 30,
            api_key: None,
        }
    }
}
