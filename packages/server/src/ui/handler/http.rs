//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{Json, extract::State};

use crate::domain::ChatMessage;
use crate::ui::state::AppState;

/// Get the chat history for clients hydrating on connect.
///
/// Returns the live bounded window (up to `HISTORY_MAX` messages, insertion
/// order) as a JSON array.
pub async fn get_history(State(state): State<Arc<AppState>>) -> Json<Vec<ChatMessage>> {
    Json(state.get_history_usecase.execute().await)
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}
