use crate::models::evaluation::{EvaluationResult, MAX_SCORE, MIN_SCORE};
use crate::services::grading_service::GradingService;
use crate::services::model_client::{run_structured, ModelClient, StructuredPrompt};
use std::sync::Arc;

const EVALUATION_SYSTEM_PROMPT: &str = r#"You are a strict but helpful technical interview coach.
Evaluate the candidate's answer based on the role, difficulty, and the specific question asked.
Provide an integer score out of 10.
List key points they missed.
Provide a constructive model answer and a few short tips.
Return a JSON object with "score", "feedback", "model_answer", "missing_key_points" and "tips"."#;

#[derive(Clone)]
pub struct EvalService {
    model: Option<Arc<dyn ModelClient>>,
}

impl EvalService {
    pub fn new(model: Option<Arc<dyn ModelClient>>) -> Self {
        Self { model }
    }

    /// Grades an answer. Never fails: the heuristic grader runs without a
    /// model, and a failing model yields a fixed "unavailable" result.
    pub async fn score_answer(
        &self,
        question: &str,
        role: &str,
        difficulty: &str,
        user_answer: &str,
    ) -> EvaluationResult {
        let Some(model) = &self.model else {
            return GradingService::grade_heuristically(question, user_answer);
        };

        let request = Self::build_prompt(question, role, difficulty, user_answer);
        match run_structured::<EvaluationResult>(model.as_ref(), &request).await {
            Ok(result) => {
                if !(MIN_SCORE..=MAX_SCORE).contains(&result.score) {
                    tracing::warn!(score = result.score, "Model score out of range, clamping");
                }
                result.clamped()
            }
            Err(e) => {
                tracing::error!(error = %e, role, difficulty, "AI evaluation failed");
                GradingService::service_unavailable()
            }
        }
    }

    pub fn build_prompt(
        question: &str,
        role: &str,
        difficulty: &str,
        user_answer: &str,
    ) -> StructuredPrompt {
        StructuredPrompt {
            name: "evaluation_result",
            system_prompt: EVALUATION_SYSTEM_PROMPT.to_string(),
            prompt: format!(
                "Role: {}\nDifficulty: {}\nQuestion: {}\nCandidate Answer: {}\n\nEvaluate this answer.",
                role, difficulty, question, user_answer
            ),
            schema: EvaluationResult::schema(),
        }
    }
}
