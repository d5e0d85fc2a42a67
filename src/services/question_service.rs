use crate::models::catalog::RoleCatalog;
use crate::models::question::InterviewQuestion;
use crate::services::model_client::{run_structured, ModelClient, StructuredPrompt};
use rand::seq::SliceRandom;
use rand::Rng;
use std::sync::Arc;

const QUESTION_SYSTEM_PROMPT: &str = r#"You are an expert technical interviewer.
Your goal is to generate a realistic and challenging interview question based on the candidate's role and difficulty level.
Return a JSON object with:
- "question": the interview question,
- "context": one sentence on what the question probes (or null),
- "expected_key_points": the points a strong answer should cover."#;

#[derive(Clone)]
pub struct QuestionService {
    catalog: Arc<RoleCatalog>,
    model: Option<Arc<dyn ModelClient>>,
}

impl QuestionService {
    pub fn new(catalog: Arc<RoleCatalog>, model: Option<Arc<dyn ModelClient>>) -> Self {
        Self { catalog, model }
    }

    /// Produces a question for the role. Never fails: without a model the
    /// catalog is used, and a failing model yields a generic question.
    pub async fn select_question(
        &self,
        role: &str,
        difficulty: &str,
        topic: Option<&str>,
    ) -> InterviewQuestion {
        let Some(model) = &self.model else {
            return self.pick_from_catalog(role, difficulty);
        };

        let request = Self::build_prompt(role, difficulty, topic);
        match run_structured::<InterviewQuestion>(model.as_ref(), &request).await {
            Ok(question) => question,
            Err(e) => {
                tracing::error!(error = %e, role, difficulty, "AI question generation failed");
                Self::error_fallback(role)
            }
        }
    }

    fn pick_from_catalog(&self, role: &str, difficulty: &str) -> InterviewQuestion {
        let mut rng = rand::thread_rng();
        Self::mock_question(&self.catalog, role, difficulty, &mut rng)
    }

    /// Random catalog question for `(role, difficulty)`.
    ///
    /// Unknown roles or difficulties fall back to a single generic prompt
    /// that names the role.
    pub fn mock_question<R: Rng + ?Sized>(
        catalog: &RoleCatalog,
        role: &str,
        difficulty: &str,
        rng: &mut R,
    ) -> InterviewQuestion {
        let question = catalog
            .pool(role, difficulty)
            .and_then(|pool| pool.choose(rng))
            .cloned()
            .unwrap_or_else(|| format!("Tell me about a challenge you faced as a {}.", role));

        InterviewQuestion {
            question,
            context: Some(format!(
                "Mock Question (AI key missing) - {} level - {}",
                difficulty, role
            )),
            expected_key_points: vec![
                "Key concept definition".to_string(),
                "Real-world example".to_string(),
                "Trade-off analysis".to_string(),
            ],
        }
    }

    /// Served when the model was asked and failed. Does not look at the catalog.
    pub fn error_fallback(role: &str) -> InterviewQuestion {
        InterviewQuestion {
            question: format!("Describe the core responsibilities of a {}.", role),
            context: Some("Fallback Question (AI Error)".to_string()),
            expected_key_points: vec![
                "Responsibilities".to_string(),
                "Skills".to_string(),
                "Impact".to_string(),
            ],
        }
    }

    pub fn build_prompt(role: &str, difficulty: &str, topic: Option<&str>) -> StructuredPrompt {
        let mut prompt = format!(
            "Generate a {} level interview question for a {} position.",
            difficulty, role
        );
        if let Some(topic) = topic {
            prompt.push_str(&format!(" Focus the question on: {}.", topic));
        }

        StructuredPrompt {
            name: "interview_question",
            system_prompt: QUESTION_SYSTEM_PROMPT.to_string(),
            prompt,
            schema: InterviewQuestion::schema(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::services::model_client::MockModelClient;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::json;

    fn fixture_catalog() -> RoleCatalog {
        RoleCatalog::from_entries([
            ("SDE", "Easy", vec!["q1", "q2", "q3", "q4"]),
            ("SDE", "Hard", vec!["only hard"]),
        ])
    }

    #[test]
    fn mock_question_draws_from_matching_pool() {
        let catalog = RoleCatalog::builtin();
        let mut rng = StdRng::seed_from_u64(7);
        for role in ["SDE", "Data Analyst", "SDET"] {
            for difficulty in ["Easy", "Medium", "Hard"] {
                let pool = catalog.pool(role, difficulty).unwrap();
                for _ in 0..10 {
                    let q = QuestionService::mock_question(&catalog, role, difficulty, &mut rng);
                    assert!(pool.contains(&q.question), "{} not in {role}/{difficulty}", q.question);
                    assert_eq!(q.expected_key_points.len(), 3);
                }
            }
        }
    }

    #[test]
    fn mock_question_is_reproducible_for_a_seed() {
        let catalog = fixture_catalog();
        let draw = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..8)
                .map(|_| QuestionService::mock_question(&catalog, "SDE", "Easy", &mut rng).question)
                .collect::<Vec<_>>()
        };
        assert_eq!(draw(42), draw(42));
    }

    #[test]
    fn mock_question_follows_the_injected_source() {
        let catalog = fixture_catalog();

        let mut rng = StepRng::new(0, 0);
        let q = QuestionService::mock_question(&catalog, "SDE", "Easy", &mut rng);
        assert_eq!(q.question, "q1");

        // A draw in the top quarter of u32 picks the last of four entries.
        let mut rng = StepRng::new(0xC000_0000, 0);
        let q = QuestionService::mock_question(&catalog, "SDE", "Easy", &mut rng);
        assert_eq!(q.question, "q4");

        let mut rng = StepRng::new(0x4000_0000, 0);
        let q = QuestionService::mock_question(&catalog, "SDE", "Easy", &mut rng);
        assert_eq!(q.question, "q2");
    }

    #[test]
    fn single_entry_pool_is_always_chosen() {
        let catalog = fixture_catalog();
        let mut rng = StdRng::seed_from_u64(1);
        let q = QuestionService::mock_question(&catalog, "SDE", "Hard", &mut rng);
        assert_eq!(q.question, "only hard");
        assert_eq!(
            q.context.as_deref(),
            Some("Mock Question (AI key missing) - Hard level - SDE")
        );
    }

    #[test]
    fn unknown_role_or_difficulty_uses_generic_prompt() {
        let catalog = fixture_catalog();
        let mut rng = StdRng::seed_from_u64(3);

        let q = QuestionService::mock_question(&catalog, "Product Manager", "Easy", &mut rng);
        assert_eq!(q.question, "Tell me about a challenge you faced as a Product Manager.");

        let q = QuestionService::mock_question(&catalog, "SDE", "Medium", &mut rng);
        assert_eq!(q.question, "Tell me about a challenge you faced as a SDE.");
        assert_eq!(
            q.expected_key_points,
            vec!["Key concept definition", "Real-world example", "Trade-off analysis"]
        );
    }

    #[tokio::test]
    async fn without_model_uses_catalog() {
        let service = QuestionService::new(Arc::new(fixture_catalog()), None);
        let q = service.select_question("SDE", "Hard", None).await;
        assert_eq!(q.question, "only hard");
    }

    #[tokio::test]
    async fn model_output_is_returned_verbatim() {
        let mut model = MockModelClient::new();
        model
            .expect_run()
            .withf(|req| {
                req.prompt == "Generate a Medium level interview question for a SDET position."
            })
            .times(1)
            .returning(|_| {
                Ok(json!({
                    "question": "How would you test idempotent payment retries?",
                    "context": "Payments",
                    "expected_key_points": ["Idempotency keys", "Retry storms"]
                }))
            });

        let service = QuestionService::new(Arc::new(fixture_catalog()), Some(Arc::new(model)));
        let q = service.select_question("SDET", "Medium", None).await;
        assert_eq!(q.question, "How would you test idempotent payment retries?");
        assert_eq!(q.expected_key_points.len(), 2);
    }

    #[tokio::test]
    async fn model_failure_uses_error_fallback() {
        let mut model = MockModelClient::new();
        model
            .expect_run()
            .times(1)
            .returning(|_| Err(Error::Model("timeout".into())));

        let service = QuestionService::new(Arc::new(fixture_catalog()), Some(Arc::new(model)));
        let q = service.select_question("SDE", "Easy", None).await;
        assert_eq!(q, QuestionService::error_fallback("SDE"));
        assert_eq!(q.question, "Describe the core responsibilities of a SDE.");
        assert_eq!(q.context.as_deref(), Some("Fallback Question (AI Error)"));
    }

    #[tokio::test]
    async fn malformed_model_output_uses_error_fallback() {
        let mut model = MockModelClient::new();
        model
            .expect_run()
            .returning(|_| Ok(json!({ "question": 42 })));

        let service = QuestionService::new(Arc::new(fixture_catalog()), Some(Arc::new(model)));
        let q = service.select_question("Data Analyst", "Hard", None).await;
        assert_eq!(
            q.expected_key_points,
            vec!["Responsibilities", "Skills", "Impact"]
        );
    }

    #[test]
    fn topic_is_appended_to_prompt() {
        let req = QuestionService::build_prompt("SDE", "Hard", Some("Kafka"));
        assert_eq!(
            req.prompt,
            "Generate a Hard level interview question for a SDE position. Focus the question on: Kafka."
        );
        assert_eq!(req.name, "interview_question");
    }
}
