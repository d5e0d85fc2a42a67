pub mod config;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use crate::config::Config;
use crate::error::Result;
use crate::models::catalog::RoleCatalog;
use crate::services::{
    ai_service::AIService, eval_service::EvalService, model_client::ModelClient,
    question_service::QuestionService,
};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub struct AppState {
    pub question_service: QuestionService,
    pub eval_service: EvalService,
    pub ai_enabled: bool,
}

impl AppState {
    /// Wires the services from configuration. Without an API key both
    /// services run on their local fallbacks.
    pub fn new(config: &Config) -> Result<Self> {
        let model: Option<Arc<dyn ModelClient>> = match &config.openrouter_api_key {
            Some(api_key) => {
                let http_client = Client::builder()
                    .timeout(Duration::from_secs(config.model_timeout_secs))
                    .build()?;
                let service: Arc<dyn ModelClient> = Arc::new(AIService::new(
                    api_key.clone(),
                    config.openrouter_base_url.clone(),
                    config.model_name.clone(),
                    http_client,
                ));
                Some(service)
            }
            None => None,
        };

        Ok(Self::with_model(Arc::new(RoleCatalog::builtin()), model))
    }

    pub fn with_model(catalog: Arc<RoleCatalog>, model: Option<Arc<dyn ModelClient>>) -> Self {
        let ai_enabled = model.is_some();
        Self {
            question_service: QuestionService::new(catalog, model.clone()),
            eval_service: EvalService::new(model),
            ai_enabled,
        }
    }
}
