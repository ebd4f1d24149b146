//! Liveness and readiness summary

use axum::{extract::State, Json};
use serde::Serialize;

use sentinel_core::constants::APP_VERSION;
use sentinel_core::logic::features::FEATURE_VERSION;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    feature_version: u8,
    /// False when the reference dataset could not be loaded
    stats_loaded: bool,
    chat_configured: bool,
    timestamp: i64,
}

pub async fn check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: APP_VERSION,
        feature_version: FEATURE_VERSION,
        stats_loaded: !state.pipeline.stats().is_empty(),
        chat_configured: state.chat.is_configured(),
        timestamp: chrono::Utc::now().timestamp(),
    })
}
