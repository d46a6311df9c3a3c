//! Anthropic Messages API adapter

use super::{AgentOptions, ProviderKind, ProviderSettings, http_client, join_text_parts, send_json};
use crate::config::ConfigError;
use async_trait::async_trait;
use crossfire_application::{Agent, AgentError};
use serde_json::{Value, json};

/// Agent backed by `POST {base_url}/v1/messages`
pub struct AnthropicAgent {
    client: reqwest::Client,
    api_key: String,
    api_version: String,
    endpoint: String,
    max_tokens: u32,
    options: AgentOptions,
}

impl AnthropicAgent {
    pub fn new(
        settings: &ProviderSettings,
        api_version: &str,
        options: AgentOptions,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            client: http_client(settings.timeout)?,
            api_key: settings.require_api_key(ProviderKind::Anthropic)?,
            api_version: api_version.to_string(),
            endpoint: format!("{}/v1/messages", settings.base_url),
            max_tokens: settings.max_tokens,
            options,
        })
    }

    fn request_body(&self, system_prompt: &str, user_prompt: &str) -> Value {
        let mut body = json!({
            "model": self.options.model,
            "max_tokens": self.max_tokens,
            "system": system_prompt,
            "messages": [{"role": "user", "content": user_prompt}],
        });
        if let Some(temperature) = self.options.temperature {
            body["temperature"] = json!(temperature);
        }
        body
    }
}

#[async_trait]
impl Agent for AnthropicAgent {
    fn label(&self) -> &str {
        &self.options.label
    }

    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> Result<String, AgentError> {
        let request = self
            .client
            .post(&self.endpoint)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", &self.api_version)
            .json(&self.request_body(system_prompt, user_prompt));

        parse_response(&send_json(request).await?)
    }
}

/// Concatenate the `text` blocks of `content`
pub(crate) fn parse_response(body: &Value) -> Result<String, AgentError> {
    let text = body["content"]
        .as_array()
        .map(|blocks| {
            join_text_parts(
                blocks
                    .iter()
                    .filter(|block| block["type"].as_str() == Some("text")),
            )
        })
        .unwrap_or_default();

    if text.is_empty() {
        return Err(AgentError::InvalidResponse(format!(
            "no text content (stop_reason: {})",
            body["stop_reason"].as_str().unwrap_or("unknown")
        )));
    }
    Ok(text)
}
