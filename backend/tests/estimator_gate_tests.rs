//! Tests for the numeric estimator gate
//!
//! The gate decides once whether the regressor exists, and only hands out a
//! regression input when the user opted in.

use std::cell::Cell;

use rust_decimal::Decimal;
use shared::{
    round_estimate, EstimatorGate, FeatureSchema, GateState, KeyReadings, PollutantLevels,
};

/// Stand-in regressor that records how often it is called
struct Regressor {
    calls: Cell<usize>,
}

impl Regressor {
    fn new() -> Self {
        Self {
            calls: Cell::new(0),
        }
    }

    fn predict(&self, values: &[f64]) -> f64 {
        self.calls.set(self.calls.get() + 1);
        values.iter().sum::<f64>() / 3.0
    }
}

/// Mirrors the request path: ask the gate, call the model only when allowed
fn run(
    gate: &EstimatorGate<Regressor>,
    opted_in: bool,
    readings: &KeyReadings,
) -> Option<Decimal> {
    let levels = PollutantLevels::resolve(readings);
    gate.request(opted_in, &levels)
        .and_then(|request| round_estimate(request.model.predict(request.input.values())))
}

fn delhi() -> KeyReadings {
    KeyReadings::new(160.0, 220.0, 90.0)
}

#[test]
fn missing_artifacts_make_gate_unavailable() {
    let loaded: Result<(Regressor, FeatureSchema), std::io::Error> = Err(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        "aqi_regression_model.json",
    ));
    let gate = EstimatorGate::from_load(loaded);

    assert_eq!(gate.state(), GateState::Unavailable);
    assert!(!gate.is_available());
    assert_eq!(run(&gate, true, &delhi()), None);
    assert_eq!(run(&gate, false, &delhi()), None);
}

#[test]
fn available_gate_does_not_call_without_opt_in() {
    let gate = EstimatorGate::available(Regressor::new(), FeatureSchema::new(["PM2.5"]));

    assert_eq!(run(&gate, false, &delhi()), None);
    match &gate {
        EstimatorGate::Available { model, .. } => assert_eq!(model.calls.get(), 0),
        EstimatorGate::Unavailable => panic!("gate should be available"),
    }
}

#[test]
fn opt_in_calls_regressor_once_with_its_own_schema() {
    let schema = FeatureSchema::new(["PM10", "NO2", "OZONE"]);
    let gate = EstimatorGate::available(Regressor::new(), schema);

    let estimate = run(&gate, true, &delhi());
    // (220 + 90 + 30) / 3 = 113.333...
    assert_eq!(estimate, Some(Decimal::new(11333, 2)));

    match &gate {
        EstimatorGate::Available { model, .. } => assert_eq!(model.calls.get(), 1),
        EstimatorGate::Unavailable => panic!("gate should be available"),
    }
}

#[test]
fn regression_schema_is_independent_of_category_schema() {
    let gate = EstimatorGate::available(
        Regressor::new(),
        FeatureSchema::new(["CO", "Toluene", "PM2.5"]),
    );
    let levels = PollutantLevels::resolve(&delhi());

    let request = gate.request(true, &levels).expect("opted in");
    assert_eq!(request.input.names(), &["CO", "Toluene", "PM2.5"]);
    assert_eq!(request.input.values(), &[0.5, 0.0, 160.0]);
}

#[test]
fn estimate_is_rounded_to_two_decimals() {
    assert_eq!(round_estimate(99.995).map(|d| d.scale() <= 2), Some(true));
    assert_eq!(round_estimate(42.0), Some(Decimal::from(42)));
}
