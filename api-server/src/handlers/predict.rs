//! Scoring handler

use axum::{extract::State, Json};
use serde::Serialize;

use sentinel_core::{ScoringResult, Telemetry};

use crate::{AppError, AppResult, AppState};

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub status: &'static str,
    #[serde(flatten)]
    pub result: ScoringResult,
}

/// Score one telemetry snapshot
pub async fn predict(
    State(state): State<AppState>,
    Json(telemetry): Json<Telemetry>,
) -> AppResult<Json<PredictResponse>> {
    telemetry.validate().map_err(AppError::ValidationError)?;

    // Classifier call is CPU-bound
    let pipeline = state.pipeline.clone();
    let result = tokio::task::spawn_blocking(move || pipeline.score(&telemetry))
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))??;

    tracing::debug!(
        "Prediction: primary={:?} max_risk={}",
        result.primary_failure,
        result.max_risk
    );

    Ok(Json(PredictResponse {
        status: "success",
        result,
    }))
}
