//! Completion provider adapters
//!
//! Each adapter implements the [`Agent`] port over one vendor's HTTP API.
//! Response parsing is kept in pure functions so it can be tested without a
//! network.

mod anthropic;
mod gemini;
mod openai;

pub use anthropic::AnthropicAgent;
pub use gemini::GeminiAgent;
pub use openai::OpenAiAgent;

use crate::config::{ConfigError, FileConfig};
use crossfire_application::{Agent, AgentError};
use crossfire_domain::Role;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    OpenAi,
    Gemini,
    Anthropic,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "openai",
            ProviderKind::Gemini => "gemini",
            ProviderKind::Anthropic => "anthropic",
        }
    }
}

impl FromStr for ProviderKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "openai" => Ok(ProviderKind::OpenAi),
            "gemini" | "google" => Ok(ProviderKind::Gemini),
            "anthropic" | "claude" => Ok(ProviderKind::Anthropic),
            other => Err(ConfigError::UnknownProvider(other.to_string())),
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved connection settings shared by every provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderSettings {
    pub api_key_env: String,
    pub api_key: Option<String>,
    pub base_url: String,
    pub max_tokens: u32,
    pub timeout: Duration,
}

impl ProviderSettings {
    /// Explicit key first, then the configured environment variable
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| {
                std::env::var(&self.api_key_env)
                    .ok()
                    .filter(|k| !k.trim().is_empty())
            })
    }

    fn require_api_key(&self, kind: ProviderKind) -> Result<String, ConfigError> {
        self.resolve_api_key().ok_or_else(|| ConfigError::MissingApiKey {
            provider: kind.to_string(),
            env: self.api_key_env.clone(),
        })
    }
}

/// Per-participant request options
#[derive(Debug, Clone, PartialEq)]
pub struct AgentOptions {
    pub model: String,
    pub label: String,
    pub temperature: Option<f32>,
}

/// Build the agent configured for `role`
///
/// Fails at startup when the provider is unknown, its API key cannot be
/// resolved, or the HTTP client cannot be built.
pub fn build_agent(config: &FileConfig, role: Role) -> Result<Arc<dyn Agent>, ConfigError> {
    let participant = config.participant(role);
    let kind: ProviderKind = participant.provider_name(role).parse()?;
    let options = AgentOptions {
        model: participant.model_name(role).to_string(),
        label: participant.label(role),
        temperature: participant.temperature,
    };

    info!(role = %role, provider = %kind, model = %options.model, "Configuring agent");

    let agent: Arc<dyn Agent> = match kind {
        ProviderKind::OpenAi => Arc::new(OpenAiAgent::new(
            &config.providers.openai.settings(),
            options,
        )?),
        ProviderKind::Gemini => Arc::new(GeminiAgent::new(
            &config.providers.gemini.settings(),
            options,
        )?),
        ProviderKind::Anthropic => Arc::new(AnthropicAgent::new(
            &config.providers.anthropic.settings(),
            &config.providers.anthropic.api_version,
            options,
        )?),
    };

    Ok(agent)
}

fn http_client(timeout: Duration) -> Result<reqwest::Client, ConfigError> {
    Ok(reqwest::Client::builder().timeout(timeout).build()?)
}

/// Send a JSON request and return the decoded JSON body of a 2xx response
async fn send_json(request: reqwest::RequestBuilder) -> Result<Value, AgentError> {
    let response = request.send().await.map_err(map_transport_error)?;

    if !response.status().is_success() {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        return Err(AgentError::RequestFailed { status, body });
    }

    let body: Value = response.json().await.map_err(|e| {
        if e.is_timeout() {
            AgentError::Timeout
        } else {
            AgentError::InvalidResponse(e.to_string())
        }
    })?;
    debug!("Provider response: {}", body);
    Ok(body)
}

fn map_transport_error(e: reqwest::Error) -> AgentError {
    if e.is_timeout() {
        AgentError::Timeout
    } else {
        AgentError::ConnectionError(e.to_string())
    }
}

/// Concatenate the `text` of every part, skipping non-text parts
fn join_text_parts<'a>(parts: impl IntoIterator<Item = &'a Value>) -> String {
    parts
        .into_iter()
        .filter_map(|part| part.get("text").and_then(Value::as_str))
        .collect()
}
