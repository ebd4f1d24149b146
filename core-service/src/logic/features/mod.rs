//! Features Module - Feature Engineering
//!
//! Turns a raw telemetry snapshot into the fixed 7-field classifier input
//! plus the derived values reported back to the operator.

pub mod layout;
pub mod engineer;

#[cfg(test)]
mod tests;

// Re-export common types
pub use layout::{FEATURE_COUNT, FEATURE_LAYOUT, FEATURE_VERSION, LayoutInfo, LayoutMismatchError};
pub use engineer::{engineer, encode_machine_type, mechanical_power, EngineeredFeatures, EngineeredSummary};
