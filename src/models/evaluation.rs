use serde::{de::Error as _, Deserialize, Deserializer, Serialize};

pub const MIN_SCORE: i32 = 0;
pub const MAX_SCORE: i32 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResult {
    #[serde(deserialize_with = "whole_number")]
    pub score: i32,
    pub feedback: String,
    pub model_answer: String,
    pub missing_key_points: Vec<String>,
    pub tips: Vec<String>,
}

impl EvaluationResult {
    pub fn schema() -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "required": ["score", "feedback", "model_answer", "missing_key_points", "tips"],
            "additionalProperties": false,
            "properties": {
                "score": { "type": "integer" },
                "feedback": { "type": "string" },
                "model_answer": { "type": "string" },
                "missing_key_points": { "type": "array", "items": { "type": "string" } },
                "tips": { "type": "array", "items": { "type": "string" } }
            }
        })
    }

    /// Pulls the score back into `MIN_SCORE..=MAX_SCORE`.
    pub fn clamped(mut self) -> Self {
        self.score = self.score.clamp(MIN_SCORE, MAX_SCORE);
        self
    }
}

/// Accepts integers and integral floats such as `7.0`; rejects `7.5`.
fn whole_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
    let n = serde_json::Number::deserialize(deserializer)?;
    if let Some(i) = n.as_i64() {
        return Ok(i.clamp(i32::MIN as i64, i32::MAX as i64) as i32);
    }
    match n.as_f64() {
        Some(f) if f.is_finite() && f.fract() == 0.0 => {
            Ok(f.clamp(i32::MIN as f64, i32::MAX as f64) as i32)
        }
        _ => Err(D::Error::custom(format!("score must be a whole number, got {}", n))),
    }
}
