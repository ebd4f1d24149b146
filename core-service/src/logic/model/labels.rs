//! Failure Labels & Decoded Predictions
//!
//! The classifier scores five failure modes independently. Label order is
//! load-bearing: position `i` of the classifier output belongs to
//! `FAILURE_LABELS[i]`.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Deserialize;

use super::inference::InferenceError;
use crate::logic::numeric::round_to;

/// Number of failure labels
pub const LABEL_COUNT: usize = 5;

/// One of the five failure modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FailureLabel {
    /// Tool Wear Failure
    Twf,
    /// Heat Dissipation Failure
    Hdf,
    /// Power Failure
    Pwf,
    /// Overstrain Failure
    Osf,
    /// Random Failure
    Rnf,
}

/// Labels in classifier output order
pub const FAILURE_LABELS: [FailureLabel; LABEL_COUNT] = [
    FailureLabel::Twf,
    FailureLabel::Hdf,
    FailureLabel::Pwf,
    FailureLabel::Osf,
    FailureLabel::Rnf,
];

impl FailureLabel {
    pub fn code(&self) -> &'static str {
        match self {
            FailureLabel::Twf => "TWF",
            FailureLabel::Hdf => "HDF",
            FailureLabel::Pwf => "PWF",
            FailureLabel::Osf => "OSF",
            FailureLabel::Rnf => "RNF",
        }
    }

    /// Position in the classifier output
    pub fn index(&self) -> usize {
        match self {
            FailureLabel::Twf => 0,
            FailureLabel::Hdf => 1,
            FailureLabel::Pwf => 2,
            FailureLabel::Osf => 3,
            FailureLabel::Rnf => 4,
        }
    }
}

impl std::fmt::Display for FailureLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

// ============================================================================
// DECODED PREDICTION
// ============================================================================

/// Failure probability per label as a percentage in [0, 100], 2 decimals.
///
/// Always holds exactly one value per label, zeros included.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FailurePrediction {
    percentages: [f64; LABEL_COUNT],
}

impl FailurePrediction {
    pub fn from_percentages(percentages: [f64; LABEL_COUNT]) -> Self {
        Self { percentages }
    }

    /// Decode classifier output: one `[P(no-failure), P(failure)]` pair per
    /// label, index 1 taken as the failure probability.
    pub fn from_probabilities(pairs: &[[f32; 2]]) -> Result<Self, InferenceError> {
        if pairs.len() != LABEL_COUNT {
            return Err(InferenceError(format!(
                "Expected {} probability pairs, got {}",
                LABEL_COUNT,
                pairs.len()
            )));
        }

        let mut percentages = [0.0f64; LABEL_COUNT];
        for (label, pair) in FAILURE_LABELS.iter().zip(pairs) {
            let p = pair[1] as f64;
            if !p.is_finite() || !(0.0..=1.0).contains(&p) {
                return Err(InferenceError(format!(
                    "Invalid failure probability for {}: {}",
                    label, p
                )));
            }
            percentages[label.index()] = round_to(p * 100.0, 2);
        }

        Ok(Self { percentages })
    }

    pub fn get(&self, label: FailureLabel) -> f64 {
        self.percentages[label.index()]
    }

    /// (label, percentage) in fixed label order
    pub fn iter(&self) -> impl Iterator<Item = (FailureLabel, f64)> + '_ {
        FAILURE_LABELS.iter().map(move |&l| (l, self.get(l)))
    }

    /// Highest-risk label and its percentage.
    ///
    /// Running maximum starting at 0: a label wins only by setting a new
    /// strict maximum, so ties go to the earliest label and an all-zero
    /// prediction has no primary failure.
    pub fn primary(&self) -> (Option<FailureLabel>, f64) {
        let mut max_risk = 0.0;
        let mut primary = None;

        for (label, pct) in self.iter() {
            if pct > max_risk {
                max_risk = pct;
                primary = Some(label);
            }
        }

        (primary, max_risk)
    }
}

impl Serialize for FailurePrediction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(LABEL_COUNT))?;
        for (label, pct) in self.iter() {
            map.serialize_entry(label.code(), &pct)?;
        }
        map.end()
    }
}
