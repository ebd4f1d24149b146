//! Insight Module - Operator Guidance
//!
//! Turns per-label failure percentages into bilingual (English / Urdu)
//! insight and recommendation messages through a fixed rule table.
//!
//! ## Structure
//! - `types`: `Message`, `InsightBundle`
//! - `rules`: threshold and ordered rule table
//! - `engine`: rule evaluation

pub mod types;
pub mod rules;
pub mod engine;

pub use types::{InsightBundle, Message};
pub use rules::{InsightRule, INSIGHT_RULES, INSIGHT_THRESHOLD, HEALTHY_INSIGHT, HEALTHY_RECOMMENDATION};
pub use engine::{explain, explain_with_threshold};
