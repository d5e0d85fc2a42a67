use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewQuestion {
    pub question: String,
    #[serde(default)]
    pub context: Option<String>,
    pub expected_key_points: Vec<String>,
}

impl InterviewQuestion {
    /// JSON schema handed to the model so its output matches this struct.
    pub fn schema() -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "required": ["question", "context", "expected_key_points"],
            "additionalProperties": false,
            "properties": {
                "question": { "type": "string" },
                "context": { "type": ["string", "null"] },
                "expected_key_points": {
                    "type": "array",
                    "items": { "type": "string" }
                }
            }
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "SDE")]
    Sde,
    #[serde(rename = "Data Analyst")]
    DataAnalyst,
    #[serde(rename = "SDET")]
    Sdet,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Sde, Role::DataAnalyst, Role::Sdet];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Sde => "SDE",
            Role::DataAnalyst => "Data Analyst",
            Role::Sdet => "SDET",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
