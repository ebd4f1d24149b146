//! History handler

use axum::{extract::State, Json};
use serde::Serialize;

use sentinel_core::logic::baseline::{read_history, HistoryRecord, HISTORY_ROWS};

use crate::{AppError, AppResult, AppState};

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub status: &'static str,
    pub data: Vec<HistoryRecord>,
}

/// First rows of the reference dataset, from the startup cache when
/// available, otherwise read from disk.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<HistoryResponse>> {
    if !state.history.is_empty() {
        return Ok(Json(HistoryResponse {
            status: "success",
            data: state.history.as_ref().clone(),
        }));
    }

    let path = state.config.history_path.clone();
    if !path.exists() {
        return Err(AppError::HistoryUnavailable("History dataset file missing.".to_string()));
    }

    let data = tokio::task::spawn_blocking(move || read_history(&path, HISTORY_ROWS))
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))??;

    Ok(Json(HistoryResponse {
        status: "success",
        data,
    }))
}
