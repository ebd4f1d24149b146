//! Integration Tests for Feature Engineering
//!
//! Checks that the engineered vector lines up with the classifier layout.

#[cfg(test)]
mod integration_tests {
    use crate::logic::features::{engineer, layout::feature_index, FEATURE_COUNT};
    use crate::logic::telemetry::Telemetry;

    fn telemetry(machine_type: &str) -> Telemetry {
        Telemetry {
            machine_type: machine_type.to_string(),
            rotational_speed: 1432.0,
            torque: 10.0,
            tool_wear: 108.0,
            air_temperature: 298.1,
            proc_temperature: 308.6,
        }
    }

    /// Every engineered value lands at its named position
    #[test]
    fn test_input_matches_layout() {
        let features = engineer(&telemetry("h"));
        let input = features.to_input();

        assert_eq!(input.len(), FEATURE_COUNT);
        assert_eq!(input[feature_index("Type_Encoded").unwrap()], 2.0);
        assert_eq!(input[feature_index("Rotational speed").unwrap()], 1432.0);
        assert_eq!(input[feature_index("Torque").unwrap()], 10.0);
        assert_eq!(input[feature_index("Tool wear").unwrap()], 108.0);
        assert!((input[feature_index("Air_Temp_C").unwrap()] - 298.1).abs() < 1e-3);
        assert!((input[feature_index("Proc_Temp_C").unwrap()] - 308.6).abs() < 1e-3);

        let power = input[feature_index("Power_W").unwrap()];
        assert!((power - 1499.56).abs() < 0.1);
    }

    /// Temperature delta is reported but not part of the input
    #[test]
    fn test_temp_delta_is_reporting_only() {
        let features = engineer(&telemetry("L"));
        let summary = features.summary();

        assert_eq!(summary.temp_delta, 10.5);
        assert!(!features.to_input().iter().any(|&v| (v - 10.5).abs() < 1e-3));
    }

    /// Summary rounds to two decimals, raw fields stay exact
    #[test]
    fn test_summary_rounding() {
        let features = engineer(&telemetry("M"));
        let summary = features.summary();

        assert_eq!(summary.type_encoded, 1);
        assert_eq!(summary.power_w, 1499.56);
        assert!(features.power_w != summary.power_w);
    }

    /// Same telemetry, same result
    #[test]
    fn test_engineer_is_deterministic() {
        let t = telemetry("M");
        assert_eq!(engineer(&t), engineer(&t));
    }
}
