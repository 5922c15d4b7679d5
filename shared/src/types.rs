//! Common types used across the platform

use serde::{Deserialize, Serialize};

/// Pollutant identifiers known to the AQI models.
///
/// Variants are declared in canonical order; `Pollutant::ALL` iterates in
/// that order and every tie-break in the crate relies on it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Pollutant {
    #[serde(rename = "PM2.5")]
    Pm25,
    #[serde(rename = "PM10")]
    Pm10,
    #[serde(rename = "NO2")]
    No2,
    #[serde(rename = "OZONE")]
    Ozone,
    #[serde(rename = "SO2")]
    So2,
    #[serde(rename = "CO")]
    Co,
    #[serde(rename = "NH3")]
    Nh3,
}

impl Pollutant {
    /// All pollutants in canonical order
    pub const ALL: [Pollutant; 7] = [
        Pollutant::Pm25,
        Pollutant::Pm10,
        Pollutant::No2,
        Pollutant::Ozone,
        Pollutant::So2,
        Pollutant::Co,
        Pollutant::Nh3,
    ];

    /// Pollutants the user may edit directly
    pub const EDITABLE: [Pollutant; 3] = [Pollutant::Pm25, Pollutant::Pm10, Pollutant::No2];

    /// Feature name as declared in model artifacts
    pub fn id(&self) -> &'static str {
        match self {
            Pollutant::Pm25 => "PM2.5",
            Pollutant::Pm10 => "PM10",
            Pollutant::No2 => "NO2",
            Pollutant::Ozone => "OZONE",
            Pollutant::So2 => "SO2",
            Pollutant::Co => "CO",
            Pollutant::Nh3 => "NH3",
        }
    }

    /// Human-readable label for result pages
    pub fn display_name(&self) -> &'static str {
        match self {
            Pollutant::Pm25 => "PM2.5",
            Pollutant::Pm10 => "PM10",
            Pollutant::No2 => "NO₂",
            Pollutant::Ozone => "Ozone (O₃)",
            Pollutant::So2 => "Sulphur Dioxide (SO₂)",
            Pollutant::Co => "Carbon Monoxide (CO)",
            Pollutant::Nh3 => "Ammonia (NH₃)",
        }
    }

    /// Look up a pollutant by its feature name. Matching is exact.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.id() == id)
    }

    pub fn is_editable(&self) -> bool {
        Self::EDITABLE.contains(self)
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for Pollutant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Pollutant reference with both identifiers, as returned to clients
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PollutantLabel {
    pub id: String,
    pub display_name: String,
}

impl From<Pollutant> for PollutantLabel {
    fn from(p: Pollutant) -> Self {
        Self {
            id: p.id().to_string(),
            display_name: p.display_name().to_string(),
        }
    }
}
