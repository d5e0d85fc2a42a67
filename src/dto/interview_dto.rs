use crate::models::question::{Difficulty, Role};
use serde::{Deserialize, Serialize};
use validator::Validate;

pub const DEFAULT_TOPIC: &str = "General";

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct InterviewConfig {
    pub role: Role,
    pub difficulty: Difficulty,
    #[validate(length(min = 1, max = 100))]
    #[serde(default = "default_topic")]
    pub topic: String,
}

fn default_topic() -> String {
    DEFAULT_TOPIC.to_string()
}

impl InterviewConfig {
    /// Topic worth steering the model with, if any.
    pub fn focus_topic(&self) -> Option<&str> {
        let topic = self.topic.trim();
        if topic.is_empty() || topic.eq_ignore_ascii_case(DEFAULT_TOPIC) {
            None
        } else {
            Some(topic)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerSubmission {
    pub question: String,
    pub difficulty: String,
    pub role: String,
    pub user_answer: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topic_defaults_to_general() {
        let config: InterviewConfig =
            serde_json::from_str(r#"{"role":"SDE","difficulty":"Hard"}"#).unwrap();
        assert_eq!(config.topic, DEFAULT_TOPIC);
        assert_eq!(config.focus_topic(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn custom_topic_is_a_focus() {
        let config = InterviewConfig {
            role: Role::Sdet,
            difficulty: Difficulty::Easy,
            topic: " Selenium ".into(),
        };
        assert_eq!(config.focus_topic(), Some("Selenium"));
    }

    #[test]
    fn overlong_topic_fails_validation() {
        let config = InterviewConfig {
            role: Role::Sde,
            difficulty: Difficulty::Medium,
            topic: "x".repeat(101),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn unknown_difficulty_is_rejected() {
        let res =
            serde_json::from_str::<InterviewConfig>(r#"{"role":"SDE","difficulty":"Expert"}"#);
        assert!(res.is_err());
    }
}
