use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ============================================================================
// STATISTIC KEYS
// ============================================================================

/// Features with reference statistics.
///
/// Declaration order is the serialization order of `dataset_stats`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKey {
    RotationalSpeed,
    Torque,
    ToolWear,
    AirTemp,
    ProcTemp,
}

pub const STAT_KEYS: [StatKey; 5] = [
    StatKey::RotationalSpeed,
    StatKey::Torque,
    StatKey::ToolWear,
    StatKey::AirTemp,
    StatKey::ProcTemp,
];

impl StatKey {
    /// Column header in the reference dataset
    pub fn column(&self) -> &'static str {
        match self {
            StatKey::RotationalSpeed => "Rotational speed [rpm]",
            StatKey::Torque => "Torque [Nm]",
            StatKey::ToolWear => "Tool wear [min]",
            StatKey::AirTemp => "Air temperature [K]",
            StatKey::ProcTemp => "Process temperature [K]",
        }
    }
}

// ============================================================================
// FEATURE STATISTICS
// ============================================================================

/// Mean and sample standard deviation of one reference column
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureStat {
    pub mean: f64,
    pub std: f64,
}

impl FeatureStat {
    /// Two-pass mean / sample std (n - 1). A single sample has std 0.
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }

        let n = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / n;
        let std = if samples.len() > 1 {
            let variance = samples.iter()
                .map(|s| (s - mean).powi(2))
                .sum::<f64>() / (n - 1.0);
            variance.sqrt()
        } else {
            0.0
        };

        Some(Self { mean, std })
    }
}

/// Per-feature reference statistics, built once at startup.
///
/// Immutable after construction; shared read-only between requests.
/// An empty cache means the reference dataset was unavailable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatsCache {
    stats: BTreeMap<StatKey, FeatureStat>,
}

impl StatsCache {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_stats<I: IntoIterator<Item = (StatKey, FeatureStat)>>(stats: I) -> Self {
        Self {
            stats: stats.into_iter().collect(),
        }
    }

    pub fn get(&self, key: StatKey) -> Option<&FeatureStat> {
        self.stats.get(&key)
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&StatKey, &FeatureStat)> {
        self.stats.iter()
    }
}
