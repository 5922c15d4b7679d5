//! AQI categories and their presentation

use serde::{Deserialize, Serialize};

/// AQI category decoded from the classifier output.
///
/// Labels outside the six known categories are kept verbatim in
/// `Unrecognized` so newer models cannot break presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AqiCategory {
    Good,
    Satisfactory,
    Moderate,
    Poor,
    VeryPoor,
    Severe,
    Unrecognized(String),
}

impl AqiCategory {
    /// Color used for unrecognized categories
    pub const FALLBACK_COLOR: &'static str = "#ffffff";

    /// Exact, case-sensitive match on the decoder's class name
    pub fn from_label(label: &str) -> Self {
        match label {
            "Good" => AqiCategory::Good,
            "Satisfactory" => AqiCategory::Satisfactory,
            "Moderate" => AqiCategory::Moderate,
            "Poor" => AqiCategory::Poor,
            "Very Poor" => AqiCategory::VeryPoor,
            "Severe" => AqiCategory::Severe,
            other => AqiCategory::Unrecognized(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            AqiCategory::Good => "Good",
            AqiCategory::Satisfactory => "Satisfactory",
            AqiCategory::Moderate => "Moderate",
            AqiCategory::Poor => "Poor",
            AqiCategory::VeryPoor => "Very Poor",
            AqiCategory::Severe => "Severe",
            AqiCategory::Unrecognized(label) => label.as_str(),
        }
    }

    /// Badge color as a hex token
    pub fn color(&self) -> &'static str {
        match self {
            AqiCategory::Good => "#2ecc71",
            AqiCategory::Satisfactory => "#7bed9f",
            AqiCategory::Moderate => "#f1c40f",
            AqiCategory::Poor => "#e67e22",
            AqiCategory::VeryPoor => "#e74c3c",
            AqiCategory::Severe => "#8e44ad",
            AqiCategory::Unrecognized(_) => Self::FALLBACK_COLOR,
        }
    }

    /// Health advisory sentence; empty for unrecognized categories
    pub fn advisory(&self) -> &'static str {
        match self {
            AqiCategory::Good => "Air quality is good. Ideal for outdoor activities.",
            AqiCategory::Satisfactory => {
                "Air quality is acceptable. Minor discomfort to sensitive people."
            }
            AqiCategory::Moderate => {
                "May cause breathing discomfort to people with lung or heart disease."
            }
            AqiCategory::Poor => "Breathing discomfort to most people on prolonged exposure.",
            AqiCategory::VeryPoor => {
                "Respiratory illness on prolonged exposure. Avoid outdoor activity."
            }
            AqiCategory::Severe => "Serious health impacts. Stay indoors and avoid exertion.",
            AqiCategory::Unrecognized(_) => "",
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, AqiCategory::Unrecognized(_))
    }
}

impl std::fmt::Display for AqiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Badge color and advisory for a decoded category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Presentation {
    pub category: String,
    pub color: String,
    pub advisory: String,
}

/// Map a decoded category label to its presentation. Never fails.
pub fn present_category(label: &str) -> Presentation {
    let category = AqiCategory::from_label(label);
    Presentation {
        category: category.label().to_string(),
        color: category.color().to_string(),
        advisory: category.advisory().to_string(),
    }
}

/// Inverse of the label encoder used at training time
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LabelDecoder {
    classes: Vec<String>,
}

impl LabelDecoder {
    pub fn new<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            classes: classes.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse `{"classes": [...]}`
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Class name for a label id, `None` when the id is out of range
    pub fn decode(&self, label_id: i64) -> Option<&str> {
        usize::try_from(label_id)
            .ok()
            .and_then(|i| self.classes.get(i))
            .map(String::as_str)
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }
}
