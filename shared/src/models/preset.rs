//! City presets for the three editable pollutant fields

use serde::{Deserialize, Serialize};

use super::pollutant::KeyReadings;

/// Named starting values for PM2.5, PM10 and NO2.
///
/// A preset only seeds the form; the user may still edit every field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum CityPreset {
    #[default]
    #[serde(rename = "Manual Input")]
    ManualInput,
    Delhi,
    Mumbai,
    Bengaluru,
    Kolkata,
    Chennai,
}

impl CityPreset {
    pub const ALL: [CityPreset; 6] = [
        CityPreset::ManualInput,
        CityPreset::Delhi,
        CityPreset::Mumbai,
        CityPreset::Bengaluru,
        CityPreset::Kolkata,
        CityPreset::Chennai,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CityPreset::ManualInput => "Manual Input",
            CityPreset::Delhi => "Delhi",
            CityPreset::Mumbai => "Mumbai",
            CityPreset::Bengaluru => "Bengaluru",
            CityPreset::Kolkata => "Kolkata",
            CityPreset::Chennai => "Chennai",
        }
    }

    pub fn readings(&self) -> KeyReadings {
        match self {
            CityPreset::ManualInput => KeyReadings::new(50.0, 80.0, 40.0),
            CityPreset::Delhi => KeyReadings::new(160.0, 220.0, 90.0),
            CityPreset::Mumbai => KeyReadings::new(80.0, 120.0, 45.0),
            CityPreset::Bengaluru => KeyReadings::new(55.0, 75.0, 30.0),
            CityPreset::Kolkata => KeyReadings::new(95.0, 140.0, 50.0),
            CityPreset::Chennai => KeyReadings::new(65.0, 90.0, 35.0),
        }
    }

    /// Case-insensitive lookup by display name
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Display for CityPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Partially filled readings; missing fields fall back to a preset
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct ReadingOverrides {
    pub pm25: Option<f64>,
    pub pm10: Option<f64>,
    pub no2: Option<f64>,
}

impl ReadingOverrides {
    /// Explicit values win over the preset
    pub fn apply_to(&self, preset: CityPreset) -> KeyReadings {
        let base = preset.readings();
        KeyReadings {
            pm25: self.pm25.unwrap_or(base.pm25),
            pm10: self.pm10.unwrap_or(base.pm10),
            no2: self.no2.unwrap_or(base.no2),
        }
    }
}
