//! Pollutant readings and the default profile for unmeasured pollutants

use serde::{Deserialize, Serialize};

use crate::types::Pollutant;

/// A single concentration value keyed by pollutant.
/// Units are µg/m³ (CO follows the source defaults and is not enforced).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PollutantReading {
    pub pollutant: Pollutant,
    pub value: f64,
}

/// The three readings a user edits directly
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct KeyReadings {
    pub pm25: f64,
    pub pm10: f64,
    pub no2: f64,
}

impl KeyReadings {
    pub fn new(pm25: f64, pm10: f64, no2: f64) -> Self {
        Self { pm25, pm10, no2 }
    }

    /// Value for an editable pollutant, `None` for everything else
    pub fn get(&self, pollutant: Pollutant) -> Option<f64> {
        match pollutant {
            Pollutant::Pm25 => Some(self.pm25),
            Pollutant::Pm10 => Some(self.pm10),
            Pollutant::No2 => Some(self.no2),
            _ => None,
        }
    }
}

/// Static fallback values for pollutants the user does not edit
pub struct DefaultProfile;

impl DefaultProfile {
    /// Fallback level, `None` when the profile has no entry
    pub fn value(pollutant: Pollutant) -> Option<f64> {
        match pollutant {
            Pollutant::Ozone => Some(30.0),
            Pollutant::So2 => Some(10.0),
            Pollutant::Co => Some(0.5),
            Pollutant::Nh3 => Some(5.0),
            Pollutant::Pm25 | Pollutant::Pm10 | Pollutant::No2 => None,
        }
    }

    pub fn readings() -> Vec<PollutantReading> {
        Pollutant::ALL
            .into_iter()
            .filter_map(|pollutant| {
                Self::value(pollutant).map(|value| PollutantReading { pollutant, value })
            })
            .collect()
    }
}

/// Resolved level for each of the seven known pollutants
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PollutantLevels {
    levels: [f64; 7],
}

impl PollutantLevels {
    /// User readings first, then the default profile, then zero
    pub fn resolve(readings: &KeyReadings) -> Self {
        let mut levels = [0.0; 7];
        for pollutant in Pollutant::ALL {
            levels[pollutant.index()] = readings
                .get(pollutant)
                .or_else(|| DefaultProfile::value(pollutant))
                .unwrap_or(0.0);
        }
        Self { levels }
    }

    pub fn get(&self, pollutant: Pollutant) -> f64 {
        self.levels[pollutant.index()]
    }

    /// Level for a declared feature name; names that are not pollutants resolve to 0
    pub fn feature_value(&self, name: &str) -> f64 {
        Pollutant::from_id(name).map_or(0.0, |p| self.get(p))
    }

    pub fn readings(&self) -> Vec<PollutantReading> {
        Pollutant::ALL
            .into_iter()
            .map(|pollutant| PollutantReading {
                pollutant,
                value: self.get(pollutant),
            })
            .collect()
    }

    /// Pollutant with the strictly greatest level.
    ///
    /// Ties keep the earlier pollutant in canonical order. This is a display
    /// hint, not a model attribution.
    pub fn dominant(&self) -> Pollutant {
        let mut dominant = Pollutant::ALL[0];
        for pollutant in Pollutant::ALL.into_iter().skip(1) {
            if self.get(pollutant) > self.get(dominant) {
                dominant = pollutant;
            }
        }
        dominant
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_uses_defaults_for_unedited() {
        let levels = PollutantLevels::resolve(&KeyReadings::new(160.0, 220.0, 90.0));
        assert_eq!(levels.get(Pollutant::Pm25), 160.0);
        assert_eq!(levels.get(Pollutant::Ozone), 30.0);
        assert_eq!(levels.get(Pollutant::So2), 10.0);
        assert_eq!(levels.get(Pollutant::Co), 0.5);
        assert_eq!(levels.get(Pollutant::Nh3), 5.0);
    }

    #[test]
    fn test_feature_value_unknown_name_is_zero() {
        let levels = PollutantLevels::resolve(&KeyReadings::new(1.0, 2.0, 3.0));
        assert_eq!(levels.feature_value("Benzene"), 0.0);
        assert_eq!(levels.feature_value("pm2.5"), 0.0);
        assert_eq!(levels.feature_value("PM10"), 2.0);
    }

    #[test]
    fn test_dominant_delhi() {
        let levels = PollutantLevels::resolve(&KeyReadings::new(160.0, 220.0, 90.0));
        assert_eq!(levels.dominant(), Pollutant::Pm10);
    }

    #[test]
    fn test_dominant_tie_prefers_canonical_order() {
        let levels = PollutantLevels::resolve(&KeyReadings::new(100.0, 100.0, 10.0));
        assert_eq!(levels.dominant(), Pollutant::Pm25);
    }

    #[test]
    fn test_dominant_can_be_a_default() {
        let levels = PollutantLevels::resolve(&KeyReadings::new(0.0, 0.0, 0.0));
        assert_eq!(levels.dominant(), Pollutant::Ozone);
    }
}
