use crate::error::{Error, Result};
use crate::services::model_client::{extract_json, ModelClient, StructuredPrompt};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// OpenAI-compatible chat-completions client (OpenRouter by default).
#[derive(Clone)]
pub struct AIService {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

#[derive(Serialize)]
struct Msg<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct JsonSchemaFormat<'a> {
    name: &'a str,
    strict: bool,
    schema: &'a JsonValue,
}

#[derive(Serialize)]
struct ResponseFormat<'a> {
    #[serde(rename = "type")]
    r#type: &'a str,
    json_schema: JsonSchemaFormat<'a>,
}

#[derive(Serialize)]
struct Req<'a> {
    model: &'a str,
    temperature: f32,
    response_format: ResponseFormat<'a>,
    messages: Vec<Msg<'a>>,
}

#[derive(Deserialize)]
struct RespChoiceMsg {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
struct RespChoice {
    message: RespChoiceMsg,
}

#[derive(Deserialize)]
struct Resp {
    #[serde(default)]
    choices: Vec<RespChoice>,
}

impl AIService {
    pub fn new(api_key: String, base_url: String, model: String, client: Client) -> Self {
        Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
        }
    }

    async fn chat_completion(&self, request: &StructuredPrompt) -> Result<JsonValue> {
        let req = Req {
            model: &self.model,
            temperature: 0.2,
            response_format: ResponseFormat {
                r#type: "json_schema",
                json_schema: JsonSchemaFormat {
                    name: request.name,
                    strict: true,
                    schema: &request.schema,
                },
            },
            messages: vec![
                Msg {
                    role: "system",
                    content: &request.system_prompt,
                },
                Msg {
                    role: "user",
                    content: &request.prompt,
                },
            ],
        };

        let res = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&req)
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            return Err(Error::Model(format!("API error {}: {}", status, text)));
        }

        let body: Resp = res.json().await?;
        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| Error::Model("Response contained no message content".to_string()))?;

        extract_json(&content)
            .ok_or_else(|| Error::Model(format!("{} reply was not valid JSON", request.name)))
    }
}

#[async_trait]
impl ModelClient for AIService {
    async fn run(&self, request: &StructuredPrompt) -> Result<JsonValue> {
        tracing::debug!(model = %self.model, shape = request.name, "Sending structured request");
        self.chat_completion(request).await
    }
}
