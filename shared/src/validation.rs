//! Validation of user-supplied pollutant readings
//!
//! Readings are checked at the input boundary; the assembler downstream
//! assumes they are finite and non-negative.

use thiserror::Error;

use crate::models::KeyReadings;
use crate::types::Pollutant;

/// Why a reading was rejected
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ReadingError {
    #[error("{pollutant} must not be negative (got {value})")]
    Negative { pollutant: Pollutant, value: f64 },

    #[error("{pollutant} must be a finite number")]
    NotFinite { pollutant: Pollutant },
}

impl ReadingError {
    pub fn pollutant(&self) -> Pollutant {
        match self {
            ReadingError::Negative { pollutant, .. } | ReadingError::NotFinite { pollutant } => {
                *pollutant
            }
        }
    }
}

/// Validate one concentration value
pub fn validate_reading(pollutant: Pollutant, value: f64) -> Result<(), ReadingError> {
    if !value.is_finite() {
        return Err(ReadingError::NotFinite { pollutant });
    }
    if value < 0.0 {
        return Err(ReadingError::Negative { pollutant, value });
    }
    Ok(())
}

/// Validate all three editable readings, reporting the first failure in
/// canonical order
pub fn validate_key_readings(readings: &KeyReadings) -> Result<(), ReadingError> {
    for pollutant in Pollutant::EDITABLE {
        if let Some(value) = readings.get(pollutant) {
            validate_reading(pollutant, value)?;
        }
    }
    Ok(())
}
