//! Assistant chat handler

use axum::{extract::State, Json};

use sentinel_core::logic::assistant::{ChatReply, ChatRequest};

use crate::AppState;

/// Forward a question to the chat backend. Always 200; backend failure is
/// reported in the body.
pub async fn chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Json<ChatReply> {
    Json(state.chat.chat(&req).await)
}
