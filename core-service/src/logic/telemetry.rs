//! Telemetry - one snapshot of sensor readings from one machine
//!
//! Immutable, created per request and dropped after the response.
//! No bounds are assumed on any reading (negative values are accepted).

use serde::{Deserialize, Serialize};

/// Raw sensor snapshot as received from the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Telemetry {
    /// Machine quality variant code: "L", "M" or "H" (case-insensitive)
    #[serde(default)]
    pub machine_type: String,
    pub rotational_speed: f64,
    pub torque: f64,
    pub tool_wear: f64,
    pub air_temperature: f64,
    pub proc_temperature: f64,
}

impl Telemetry {
    /// Reject readings the scoring core cannot work with.
    ///
    /// Only non-finite numbers are refused; the machine type code is never
    /// rejected (unknown codes encode as `L`).
    pub fn validate(&self) -> Result<(), String> {
        let readings = [
            ("rotational_speed", self.rotational_speed),
            ("torque", self.torque),
            ("tool_wear", self.tool_wear),
            ("air_temperature", self.air_temperature),
            ("proc_temperature", self.proc_temperature),
        ];

        for (name, value) in readings {
            if !value.is_finite() {
                return Err(format!("{} must be a finite number", name));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Telemetry {
        Telemetry {
            machine_type: "M".to_string(),
            rotational_speed: 1432.0,
            torque: 10.0,
            tool_wear: 0.0,
            air_temperature: 298.1,
            proc_temperature: 308.6,
        }
    }

    #[test]
    fn test_validate_accepts_negative_readings() {
        let mut t = sample();
        t.torque = -5.0;
        t.air_temperature = -40.0;
        assert!(t.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_nan() {
        let mut t = sample();
        t.tool_wear = f64::NAN;
        let err = t.validate().unwrap_err();
        assert!(err.contains("tool_wear"));
    }

    #[test]
    fn test_missing_machine_type_deserializes_empty() {
        let json = r#"{"rotational_speed":1500,"torque":40,"tool_wear":10,
                       "air_temperature":300,"proc_temperature":310}"#;
        let t: Telemetry = serde_json::from_str(json).unwrap();
        assert_eq!(t.machine_type, "");
    }
}
