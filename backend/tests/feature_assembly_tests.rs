//! Tests for input assembly
//! Verifies that the classifier input always matches the declared feature list

use proptest::prelude::*;
use shared::{
    CityPreset, FeatureSchema, FeatureVector, KeyReadings, Pollutant, PollutantLevels,
    ReadingOverrides,
};

/// The feature list the category model was trained with
fn category_schema() -> FeatureSchema {
    FeatureSchema::new(["PM2.5", "PM10", "NO2", "OZONE", "SO2", "CO", "NH3"])
}

// =============================================================================
// Resolution rules
// =============================================================================

mod resolution {
    use super::*;

    #[test]
    fn delhi_preset_full_vector() {
        let levels = PollutantLevels::resolve(&CityPreset::Delhi.readings());
        let vector = FeatureVector::assemble(&category_schema(), &levels);

        assert_eq!(
            vector.values(),
            &[160.0, 220.0, 90.0, 30.0, 10.0, 0.5, 5.0]
        );
    }

    #[test]
    fn user_values_take_priority() {
        let levels = PollutantLevels::resolve(&KeyReadings::new(1.5, 2.5, 3.5));
        let vector = FeatureVector::assemble(&category_schema(), &levels);

        assert_eq!(vector.get("PM2.5"), Some(1.5));
        assert_eq!(vector.get("PM10"), Some(2.5));
        assert_eq!(vector.get("NO2"), Some(3.5));
    }

    #[test]
    fn undeclared_names_fall_back_to_zero() {
        // Extra columns from a newer training run
        let schema = FeatureSchema::new(["PM2.5", "NO", "NOx", "Benzene", "CO"]);
        let levels = PollutantLevels::resolve(&KeyReadings::new(40.0, 60.0, 20.0));
        let vector = FeatureVector::assemble(&schema, &levels);

        assert_eq!(vector.values(), &[40.0, 0.0, 0.0, 0.0, 0.5]);
    }

    #[test]
    fn reordered_schema_is_respected() {
        let schema = FeatureSchema::new(["NH3", "CO", "SO2", "OZONE", "NO2", "PM10", "PM2.5"]);
        let levels = PollutantLevels::resolve(&KeyReadings::new(1.0, 2.0, 3.0));
        let vector = FeatureVector::assemble(&schema, &levels);

        assert_eq!(vector.values(), &[5.0, 0.5, 10.0, 30.0, 3.0, 2.0, 1.0]);
    }

    #[test]
    fn unused_defaults_are_dropped() {
        let schema = FeatureSchema::new(["PM2.5", "PM10"]);
        let levels = PollutantLevels::resolve(&KeyReadings::new(1.0, 2.0, 3.0));
        let vector = FeatureVector::assemble(&schema, &levels);

        assert_eq!(vector.len(), 2);
        assert!(vector.iter().all(|(name, _)| name != "OZONE"));
    }

    #[test]
    fn preset_seeds_but_does_not_lock() {
        let overrides = ReadingOverrides {
            pm10: Some(10.0),
            ..Default::default()
        };
        let readings = overrides.apply_to(CityPreset::Bengaluru);

        assert_eq!(readings, KeyReadings::new(55.0, 10.0, 30.0));
    }
}

// =============================================================================
// Property tests
// =============================================================================

mod properties {
    use super::*;

    fn feature_name_strategy() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("PM2.5".to_string()),
            Just("PM10".to_string()),
            Just("NO2".to_string()),
            Just("OZONE".to_string()),
            Just("SO2".to_string()),
            Just("CO".to_string()),
            Just("NH3".to_string()),
            "[A-Za-z][A-Za-z0-9_.]{0,8}",
        ]
    }

    fn schema_strategy() -> impl Strategy<Value = FeatureSchema> {
        prop::collection::vec(feature_name_strategy(), 0..16).prop_map(FeatureSchema::new)
    }

    fn readings_strategy() -> impl Strategy<Value = KeyReadings> {
        (0.0f64..1000.0, 0.0f64..1000.0, 0.0f64..1000.0)
            .prop_map(|(pm25, pm10, no2)| KeyReadings::new(pm25, pm10, no2))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Output length and order equal the declared feature list
        #[test]
        fn prop_vector_matches_schema(
            schema in schema_strategy(),
            readings in readings_strategy()
        ) {
            let levels = PollutantLevels::resolve(&readings);
            let vector = FeatureVector::assemble(&schema, &levels);

            prop_assert_eq!(vector.len(), schema.len());
            prop_assert_eq!(vector.names(), schema.names());
        }

        /// Same inputs, same vector
        #[test]
        fn prop_assembly_is_idempotent(
            schema in schema_strategy(),
            readings in readings_strategy()
        ) {
            let first = FeatureVector::assemble(&schema, &PollutantLevels::resolve(&readings));
            let second = FeatureVector::assemble(&schema, &PollutantLevels::resolve(&readings));

            prop_assert_eq!(first, second);
        }

        /// Every value is either a resolved pollutant level or zero
        #[test]
        fn prop_values_resolve_by_rule(
            schema in schema_strategy(),
            readings in readings_strategy()
        ) {
            let levels = PollutantLevels::resolve(&readings);
            let vector = FeatureVector::assemble(&schema, &levels);

            for (name, value) in vector.iter() {
                let expected = match Pollutant::from_id(name) {
                    Some(p) => readings.get(p).unwrap_or_else(|| levels.get(p)),
                    None => 0.0,
                };
                prop_assert_eq!(value, expected);
            }
        }
    }
}
