pub mod health;
pub mod interview;

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

/// Route table without transport layers (CORS, tracing); `main` adds those.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health))
        .route("/generate-question", post(interview::generate_question))
        .route("/evaluate-answer", post(interview::evaluate_answer))
        .with_state(state)
}
