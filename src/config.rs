use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::sync::OnceLock;

pub const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0:8000";
pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_MODEL_NAME: &str = "mistralai/mistral-7b-instruct:free";
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    /// `None` puts both endpoints in mock mode.
    pub openrouter_api_key: Option<String>,
    pub openrouter_base_url: String,
    pub model_name: String,
    pub model_timeout_secs: u64,
    pub cors_origins: Vec<String>,
    pub log_format: LogFormat,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            server_address: get_env_or("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS),
            openrouter_api_key: get_env_opt("OPENROUTER_API_KEY"),
            openrouter_base_url: get_env_or("OPENROUTER_BASE_URL", DEFAULT_BASE_URL),
            model_name: get_env_or("MODEL_NAME", DEFAULT_MODEL_NAME),
            model_timeout_secs: get_env_parse_or("MODEL_TIMEOUT_SECS", 60)?,
            cors_origins: parse_origins(&get_env_or("CORS_ORIGINS", DEFAULT_CORS_ORIGIN)),
            log_format: parse_log_format(&get_env_or("LOG_FORMAT", "text"))?,
        })
    }

    /// Mock-mode configuration with every default applied.
    pub fn offline() -> Self {
        Self {
            server_address: DEFAULT_SERVER_ADDRESS.to_string(),
            openrouter_api_key: None,
            openrouter_base_url: DEFAULT_BASE_URL.to_string(),
            model_name: DEFAULT_MODEL_NAME.to_string(),
            model_timeout_secs: 60,
            cors_origins: vec![DEFAULT_CORS_ORIGIN.to_string()],
            log_format: LogFormat::Text,
        }
    }

    pub fn ai_enabled(&self) -> bool {
        self.openrouter_api_key.is_some()
    }
}

fn get_env_opt(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn get_env_or(name: &str, default: &str) -> String {
    get_env_opt(name).unwrap_or_else(|| default.to_string())
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match get_env_opt(name) {
        Some(raw) => raw
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        None => Ok(default),
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|o| o.trim().trim_end_matches('/').to_string())
        .filter(|o| !o.is_empty())
        .collect()
}

fn parse_log_format(raw: &str) -> Result<LogFormat> {
    match raw.to_ascii_lowercase().as_str() {
        "text" | "pretty" => Ok(LogFormat::Text),
        "json" => Ok(LogFormat::Json),
        other => Err(Error::Config(format!(
            "Invalid value for LOG_FORMAT: {}",
            other
        ))),
    }
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> &'static Config {
    CONFIG
        .get()
        .expect("Configuration has not been initialized")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origins_are_split_and_trimmed() {
        let origins = parse_origins("http://localhost:3000/, https://coach.example.com ,,");
        assert_eq!(
            origins,
            vec!["http://localhost:3000", "https://coach.example.com"]
        );
    }

    #[test]
    fn log_format_accepts_known_values() {
        assert_eq!(parse_log_format("JSON").unwrap(), LogFormat::Json);
        assert_eq!(parse_log_format("text").unwrap(), LogFormat::Text);
        assert!(matches!(parse_log_format("xml"), Err(Error::Config(_))));
    }

    #[test]
    fn offline_config_disables_ai() {
        let config = Config::offline();
        assert!(!config.ai_enabled());
        assert_eq!(config.model_name, DEFAULT_MODEL_NAME);
    }
}
