use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::AppState;

#[axum::debug_handler]
pub async fn root() -> impl IntoResponse {
    Json(json!({
        "message": "AI Interview Coach API is running",
    }))
}

#[axum::debug_handler]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let mode = if state.ai_enabled { "ai" } else { "mock" };
    let body = json!({
        "status": "ok",
        "mode": mode,
    });
    (StatusCode::OK, Json(body))
}
