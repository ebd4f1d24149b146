use serde::{Deserialize, Serialize};

use crate::logic::baseline::StatKey;
use crate::logic::telemetry::Telemetry;

/// Interpretable features considered by the contribution ranker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContributionFeature {
    RotationalSpeed,
    Torque,
    ToolWear,
    ProcTemperature,
}

/// Ranking input order (ties keep this order)
pub const CONTRIBUTION_FEATURES: [ContributionFeature; 4] = [
    ContributionFeature::RotationalSpeed,
    ContributionFeature::Torque,
    ContributionFeature::ToolWear,
    ContributionFeature::ProcTemperature,
];

impl ContributionFeature {
    pub fn display_name(&self) -> &'static str {
        match self {
            ContributionFeature::RotationalSpeed => "Rotational speed",
            ContributionFeature::Torque => "Torque",
            ContributionFeature::ToolWear => "Tool wear",
            ContributionFeature::ProcTemperature => "Proc_Temp_C",
        }
    }

    pub fn stat_key(&self) -> StatKey {
        match self {
            ContributionFeature::RotationalSpeed => StatKey::RotationalSpeed,
            ContributionFeature::Torque => StatKey::Torque,
            ContributionFeature::ToolWear => StatKey::ToolWear,
            ContributionFeature::ProcTemperature => StatKey::ProcTemp,
        }
    }

    /// Raw reading for this feature
    pub fn value(&self, telemetry: &Telemetry) -> f64 {
        match self {
            ContributionFeature::RotationalSpeed => telemetry.rotational_speed,
            ContributionFeature::Torque => telemetry.torque,
            ContributionFeature::ToolWear => telemetry.tool_wear,
            ContributionFeature::ProcTemperature => telemetry.proc_temperature,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributionEntry {
    pub feature: String,
    pub value: f64,
    pub z_score: f64,      // |value - mean| / std, 2 decimals
    pub contribution: f64, // z * scale, 1 decimal
}
