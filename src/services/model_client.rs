use crate::error::{Error, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

/// One schema-constrained generation request.
#[derive(Debug, Clone, PartialEq)]
pub struct StructuredPrompt {
    /// Short identifier for the expected shape, e.g. `interview_question`.
    pub name: &'static str,
    pub system_prompt: String,
    pub prompt: String,
    pub schema: JsonValue,
}

/// Anything that can turn a prompt into a JSON value of the requested shape.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn run(&self, request: &StructuredPrompt) -> Result<JsonValue>;
}

/// Runs `request` and deserializes the reply into `T`.
///
/// A reply that does not fit `T` is reported as `Error::Model`.
pub async fn run_structured<T: DeserializeOwned>(
    client: &dyn ModelClient,
    request: &StructuredPrompt,
) -> Result<T> {
    let value = client.run(request).await?;
    serde_json::from_value(value).map_err(|e| {
        Error::Model(format!(
            "{} output did not match the expected shape: {}",
            request.name, e
        ))
    })
}

/// Extracts the JSON document from a model reply, tolerating markdown fences.
pub fn extract_json(content: &str) -> Option<JsonValue> {
    let trimmed = content.trim();
    if let Ok(val) = serde_json::from_str(trimmed) {
        return Some(val);
    }

    if let Some(start) = trimmed.find("```") {
        let after = &trimmed[start + 3..];
        let body_start = after.find('\n').map(|i| i + 1).unwrap_or(0);
        let body = &after[body_start..];
        if let Some(end) = body.find("```") {
            if let Ok(val) = serde_json::from_str(body[..end].trim()) {
                return Some(val);
            }
        }
    }

    let open = trimmed.find('{')?;
    let close = trimmed.rfind('}')?;
    if close <= open {
        return None;
    }
    serde_json::from_str(&trimmed[open..=close]).ok()
}
