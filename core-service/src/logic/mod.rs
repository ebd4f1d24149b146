//! Logic Module - Scoring Engines
//!
//! - `features/` - Feature engineering and classifier input layout
//! - `model/` - Classifier boundary, ONNX inference, label decoding
//! - `baseline/` - Reference statistics (StatsCache) and history cache
//! - `explain/` - Z-score contribution ranking
//! - `insight/` - Threshold rule table, bilingual guidance
//! - `assistant/` - Chat forwarding with model fallback

pub mod telemetry;
pub mod numeric;
pub mod features;
pub mod model;
pub mod baseline;
pub mod explain;
pub mod insight;
pub mod pipeline;
pub mod assistant;
