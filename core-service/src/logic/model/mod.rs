//! Model Module - Failure Classification
//!
//! Separates the classifier boundary from the rest of the pipeline so the
//! model can be swapped without touching feature engineering or explanation.

pub mod inference;
pub mod labels;
pub mod schema;

// Re-export common types
pub use inference::{FailureClassifier, InferenceError, ModelMetadata, OnnxClassifier};
pub use labels::{FailureLabel, FailurePrediction, FAILURE_LABELS, LABEL_COUNT};
pub use schema::FeatureSchema;
