//! Gate for the optional numeric AQI estimate

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::feature::{FeatureSchema, FeatureVector};
use super::pollutant::PollutantLevels;

/// Whether the numeric estimate can be offered at all
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GateState {
    Available,
    Unavailable,
}

/// Numeric estimator availability, decided once when artifacts are loaded.
///
/// `Unavailable` is terminal: there is no transition back to `Available`.
#[derive(Debug, Clone)]
pub enum EstimatorGate<R> {
    Unavailable,
    Available { model: R, schema: FeatureSchema },
}

/// Regression call the caller is allowed to make
#[derive(Debug)]
pub struct EstimateRequest<'a, R> {
    pub model: &'a R,
    pub input: FeatureVector,
}

impl<R> EstimatorGate<R> {
    pub fn available(model: R, schema: FeatureSchema) -> Self {
        EstimatorGate::Available { model, schema }
    }

    /// Any load failure leaves the gate closed
    pub fn from_load<E>(loaded: Result<(R, FeatureSchema), E>) -> Self {
        match loaded {
            Ok((model, schema)) => EstimatorGate::Available { model, schema },
            Err(_) => EstimatorGate::Unavailable,
        }
    }

    pub fn state(&self) -> GateState {
        match self {
            EstimatorGate::Available { .. } => GateState::Available,
            EstimatorGate::Unavailable => GateState::Unavailable,
        }
    }

    /// The opt-in is only offered while available
    pub fn is_available(&self) -> bool {
        self.state() == GateState::Available
    }

    pub fn schema(&self) -> Option<&FeatureSchema> {
        match self {
            EstimatorGate::Available { schema, .. } => Some(schema),
            EstimatorGate::Unavailable => None,
        }
    }

    /// Regression input projected onto the regressor's own schema.
    ///
    /// Returns `None` unless the gate is available and the user opted in; the
    /// caller must not invoke the regressor otherwise.
    pub fn request(
        &self,
        opted_in: bool,
        levels: &PollutantLevels,
    ) -> Option<EstimateRequest<'_, R>> {
        match self {
            EstimatorGate::Available { model, schema } if opted_in => Some(EstimateRequest {
                model,
                input: FeatureVector::assemble(schema, levels),
            }),
            _ => None,
        }
    }
}

/// Round a raw regression output to exactly two decimals; `None` for NaN or
/// infinity
pub fn round_estimate(value: f64) -> Option<Decimal> {
    Decimal::from_f64_retain(value).map(|d| {
        let mut rounded = d.round_dp(2);
        rounded.rescale(2);
        rounded
    })
}
