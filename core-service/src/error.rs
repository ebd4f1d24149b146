//! Error handling

use thiserror::Error;

use crate::logic::model::InferenceError;

pub type CoreResult<T> = Result<T, ScoringError>;

/// Errors raised by the scoring core.
///
/// Only `ComputationFailed` crosses the pipeline boundary during a request;
/// the other variants are reported during startup.
#[derive(Debug, Error)]
pub enum ScoringError {
    /// Model or feature-schema artifact missing or unreadable
    #[error("startup aborted: {0}")]
    StartupFatal(String),

    /// Reference dataset missing or malformed
    #[error("reference statistics unavailable: {0}")]
    StatsUnavailable(String),

    /// Feature derivation or classifier invocation failed
    #[error("computation failed: {0}")]
    ComputationFailed(String),
}

impl From<InferenceError> for ScoringError {
    fn from(err: InferenceError) -> Self {
        ScoringError::ComputationFailed(err.to_string())
    }
}
