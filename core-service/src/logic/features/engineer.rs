//! Feature Engineering
//!
//! Derives classifier-ready fields from raw telemetry: categorical encoding
//! of the machine type, mechanical power and the temperature delta.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use super::layout::FEATURE_COUNT;
use crate::logic::numeric::round_to;
use crate::logic::telemetry::Telemetry;

/// Encoding used when the machine type code is missing or unknown
pub const DEFAULT_TYPE_CODE: u8 = 0;

/// Machine quality variant → classifier code
///
/// Unrecognised codes fall back to `L` (0) without an error.
pub fn encode_machine_type(code: &str) -> u8 {
    match code.trim().to_ascii_uppercase().as_str() {
        "L" => 0,
        "M" => 1,
        "H" => 2,
        _ => DEFAULT_TYPE_CODE,
    }
}

/// Mechanical power in watts: torque [Nm] * angular velocity [rad/s]
pub fn mechanical_power(torque: f64, rotational_speed_rpm: f64) -> f64 {
    torque * (rotational_speed_rpm * 2.0 * PI / 60.0)
}

/// Fields derived once per request
#[derive(Debug, Clone, PartialEq)]
pub struct EngineeredFeatures {
    pub type_encoded: u8,
    pub rotational_speed: f64,
    pub torque: f64,
    pub tool_wear: f64,
    pub air_temperature: f64,
    pub proc_temperature: f64,
    pub power_w: f64,
    /// Reporting only, never fed to the classifier
    pub temp_delta: f64,
}

impl EngineeredFeatures {
    /// Classifier input in FEATURE_LAYOUT order
    pub fn to_input(&self) -> [f32; FEATURE_COUNT] {
        [
            self.type_encoded as f32,
            self.rotational_speed as f32,
            self.torque as f32,
            self.tool_wear as f32,
            self.air_temperature as f32,
            self.proc_temperature as f32,
            self.power_w as f32,
        ]
    }

    /// Rounded subset returned to the caller
    pub fn summary(&self) -> EngineeredSummary {
        EngineeredSummary {
            power_w: round_to(self.power_w, 2),
            temp_delta: round_to(self.temp_delta, 2),
            type_encoded: self.type_encoded,
        }
    }
}

/// Engineered fields as reported in a scoring response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineeredSummary {
    pub power_w: f64,
    pub temp_delta: f64,
    pub type_encoded: u8,
}

/// Derive the engineered fields. Pure, no side effects.
pub fn engineer(telemetry: &Telemetry) -> EngineeredFeatures {
    EngineeredFeatures {
        type_encoded: encode_machine_type(&telemetry.machine_type),
        rotational_speed: telemetry.rotational_speed,
        torque: telemetry.torque,
        tool_wear: telemetry.tool_wear,
        air_temperature: telemetry.air_temperature,
        proc_temperature: telemetry.proc_temperature,
        power_w: mechanical_power(telemetry.torque, telemetry.rotational_speed),
        temp_delta: telemetry.proc_temperature - telemetry.air_temperature,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_machine_type() {
        assert_eq!(encode_machine_type("L"), 0);
        assert_eq!(encode_machine_type("m"), 1);
        assert_eq!(encode_machine_type("H"), 2);
        assert_eq!(encode_machine_type("X"), 0);
        assert_eq!(encode_machine_type(""), 0);
    }

    #[test]
    fn test_mechanical_power() {
        let power = mechanical_power(10.0, 1432.0);
        assert!((power - 1499.56).abs() < 0.1, "power = {}", power);
        assert_eq!(mechanical_power(0.0, 1500.0), 0.0);
    }

    #[test]
    fn test_mechanical_power_keeps_sign() {
        assert!(mechanical_power(-10.0, 1432.0) < 0.0);
    }
}
