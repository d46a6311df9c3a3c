//! OpenAI-compatible chat completions adapter

use super::{AgentOptions, ProviderKind, ProviderSettings, http_client, send_json};
use crate::config::ConfigError;
use async_trait::async_trait;
use crossfire_application::{Agent, AgentError};
use serde_json::{Value, json};

/// Agent backed by `POST {base_url}/v1/chat/completions`
pub struct OpenAiAgent {
    client: reqwest::Client,
    api_key: String,
    endpoint: String,
    max_tokens: u32,
    options: AgentOptions,
}

impl OpenAiAgent {
    pub fn new(settings: &ProviderSettings, options: AgentOptions) -> Result<Self, ConfigError> {
        Ok(Self {
            client: http_client(settings.timeout)?,
            api_key: settings.require_api_key(ProviderKind::OpenAi)?,
            endpoint: format!("{}/v1/chat/completions", settings.base_url),
            max_tokens: settings.max_tokens,
            options,
        })
    }

    fn request_body(&self, system_prompt: &str, user_prompt: &str) -> Value {
        let mut body = json!({
            "model": self.options.model,
            "max_tokens": self.max_tokens,
            "messages": [
                {"role": "system", "content": system_prompt},
                {"role": "user", "content": user_prompt},
            ],
        });
        if let Some(temperature) = self.options.temperature {
            body["temperature"] = json!(temperature);
        }
        body
    }
}

#[async_trait]
impl Agent for OpenAiAgent {
    fn label(&self) -> &str {
        &self.options.label
    }

    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> Result<String, AgentError> {
        let request = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&self.request_body(system_prompt, user_prompt));

        parse_response(&send_json(request).await?)
    }
}

/// Extract `choices[0].message.content`
pub(crate) fn parse_response(body: &Value) -> Result<String, AgentError> {
    let choice = &body["choices"][0];
    match choice["message"]["content"].as_str() {
        Some(text) if !text.is_empty() => Ok(text.to_string()),
        _ => Err(AgentError::InvalidResponse(format!(
            "no message content (finish_reason: {})",
            choice["finish_reason"].as_str().unwrap_or("unknown")
        ))),
    }
}
