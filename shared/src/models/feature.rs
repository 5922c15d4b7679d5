//! Feature schemas declared by model artifacts and the vectors built from them

use serde::{Deserialize, Serialize};

use super::pollutant::PollutantLevels;

/// Ordered feature names a model expects. Order and membership come from the
/// model artifact and are never reordered here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct FeatureSchema {
    names: Vec<String>,
}

impl FeatureSchema {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a JSON array of feature names
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// One value per declared feature, in schema order
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FeatureVector {
    names: Vec<String>,
    values: Vec<f64>,
}

impl FeatureVector {
    /// Build the model input for `schema` from resolved pollutant levels.
    ///
    /// Every declared name gets a value (0 for names that are not known
    /// pollutants) and nothing outside the schema is included.
    pub fn assemble(schema: &FeatureSchema, levels: &PollutantLevels) -> Self {
        let values = schema
            .names()
            .iter()
            .map(|name| levels.feature_value(name))
            .collect();

        Self {
            names: schema.names().to_vec(),
            values,
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value of the first feature with this name
    pub fn get(&self, name: &str) -> Option<f64> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| self.values[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}
