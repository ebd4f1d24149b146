//! Sentinel Core - Machine Health Risk Scoring
//!
//! Scores live machine telemetry for five failure modes, explains which
//! readings drove the result and turns it into bilingual operator guidance.
//!
//! ```text
//! Telemetry ──► features::engineer ──► model::FailureClassifier
//!                                            │
//!                       ┌────────────────────┴───────────────┐
//!                       ▼                                    ▼
//!         explain::rank (StatsCache)               insight::explain
//!                       └──────────────► ScoringResult ◄─────┘
//! ```

pub mod constants;
pub mod error;
pub mod logic;

pub use error::{CoreResult, ScoringError};
pub use logic::pipeline::{ScoringPipeline, ScoringResult};
pub use logic::telemetry::Telemetry;
