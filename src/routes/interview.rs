use axum::{extract::State, response::Json};
use validator::Validate;

use crate::dto::interview_dto::{AnswerSubmission, InterviewConfig};
use crate::error::Result;
use crate::models::evaluation::EvaluationResult;
use crate::models::question::InterviewQuestion;
use crate::AppState;

#[axum::debug_handler]
pub async fn generate_question(
    State(state): State<AppState>,
    Json(payload): Json<InterviewConfig>,
) -> Result<Json<InterviewQuestion>> {
    payload.validate()?;

    tracing::info!(
        role = %payload.role,
        difficulty = %payload.difficulty,
        topic = %payload.topic,
        "Generating interview question"
    );
    let question = state
        .question_service
        .select_question(
            payload.role.as_str(),
            payload.difficulty.as_str(),
            payload.focus_topic(),
        )
        .await;
    Ok(Json(question))
}

#[axum::debug_handler]
pub async fn evaluate_answer(
    State(state): State<AppState>,
    Json(submission): Json<AnswerSubmission>,
) -> Result<Json<EvaluationResult>> {
    tracing::info!(
        role = %submission.role,
        difficulty = %submission.difficulty,
        answer_len = submission.user_answer.len(),
        "Evaluating answer"
    );
    let evaluation = state
        .eval_service
        .score_answer(
            &submission.question,
            &submission.role,
            &submission.difficulty,
            &submission.user_answer,
        )
        .await;
    Ok(Json(evaluation))
}
