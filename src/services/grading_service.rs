use crate::models::evaluation::{EvaluationResult, MAX_SCORE};

pub const TECH_KEYWORDS: [&str; 7] = [
    "scale",
    "latency",
    "consistency",
    "testing",
    "data",
    "optimization",
    "trade-off",
];

const SHORT_ANSWER_WORDS: usize = 10;
const DETAILED_ANSWER_WORDS: usize = 30;

/// Length/keyword grading used when no model is configured.
pub struct GradingService;

struct LengthTier {
    score: i32,
    feedback: &'static str,
    missing_points: &'static [&'static str],
}

impl GradingService {
    pub fn grade_heuristically(question: &str, user_answer: &str) -> EvaluationResult {
        let word_count = Self::word_count(user_answer);
        let tier = Self::length_tier(word_count);

        let mut score = tier.score;
        let mut feedback = tier.feedback.to_string();
        if Self::mentions_tech_keyword(user_answer) {
            score = (score + 1).min(MAX_SCORE);
            feedback.push_str(" Good use of technical vocabulary.");
        }

        EvaluationResult {
            score,
            feedback: format!(
                "Mock Evaluation: {} (Based on answer length & keywords)",
                feedback
            ),
            model_answer: format!(
                "A great answer for '{}' would involve defining the core concept, giving a concrete example, and discussing pros/cons. For example...",
                question
            ),
            missing_key_points: tier.missing_points.iter().map(|s| s.to_string()).collect(),
            tips: vec![
                "Use the STAR method".to_string(),
                "Be concise but thorough".to_string(),
                "Focus on impact".to_string(),
            ],
        }
    }

    /// Result served when the model was asked and could not answer.
    pub fn service_unavailable() -> EvaluationResult {
        EvaluationResult {
            score: 5,
            feedback: "AI service unavailable. Please check backend logs.".to_string(),
            model_answer: "Unavailable".to_string(),
            missing_key_points: vec![],
            tips: vec![],
        }
    }

    pub fn word_count(text: &str) -> usize {
        text.split_whitespace().count()
    }

    pub fn mentions_tech_keyword(text: &str) -> bool {
        let lowered = text.to_lowercase();
        TECH_KEYWORDS.iter().any(|k| lowered.contains(k))
    }

    fn length_tier(word_count: usize) -> LengthTier {
        if word_count < SHORT_ANSWER_WORDS {
            LengthTier {
                score: 3,
                feedback: "Your answer is too short. Please elaborate and provide more details.",
                missing_points: &["Depth of explanation", "Examples", "Technical terminology"],
            }
        } else if word_count < DETAILED_ANSWER_WORDS {
            LengthTier {
                score: 6,
                feedback: "Good start, but you could provide more specific examples to strengthen your point.",
                missing_points: &["Concrete examples", "Trade-offs"],
            }
        } else {
            LengthTier {
                score: 8,
                feedback: "Strong answer! You covered the main points well. To get a perfect score, mention edge cases.",
                missing_points: &["Edge cases", "Scalability considerations"],
            }
        }
    }
}
