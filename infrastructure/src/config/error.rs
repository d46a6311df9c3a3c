//! Configuration and wiring errors

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading configuration or wiring adapters from it
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("Failed to read system prompt file {}: {source}", path.display())]
    PromptFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("System prompt file {} is empty", path.display())]
    EmptyPromptFile { path: PathBuf },

    #[error("Unknown provider '{0}' (expected openai, gemini, or anthropic)")]
    UnknownProvider(String),

    #[error("API key for {provider} not found: set {env} or providers.{provider}.api_key")]
    MissingApiKey { provider: String, env: String },

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}
