//! Explain Module - Feature Contribution Ranking
//!
//! Explains a prediction by how unusual each interpretable reading is
//! relative to reference statistics (z-score heuristic). Independent of the
//! classifier's internals, so any model can be swapped in.

pub mod types;
pub mod engine;

pub use types::{ContributionEntry, ContributionFeature, CONTRIBUTION_FEATURES};
pub use engine::{rank, z_score, CONTRIBUTION_SCALE};
