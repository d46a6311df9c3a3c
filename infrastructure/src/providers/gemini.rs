//! Google Gemini `generateContent` adapter

use super::{AgentOptions, ProviderKind, ProviderSettings, http_client, join_text_parts, send_json};
use crate::config::ConfigError;
use async_trait::async_trait;
use crossfire_application::{Agent, AgentError};
use serde_json::{Value, json};

/// Agent backed by `POST {base_url}/v1beta/models/{model}:generateContent`
pub struct GeminiAgent {
    client: reqwest::Client,
    api_key: String,
    endpoint: String,
    max_tokens: u32,
    options: AgentOptions,
}

impl GeminiAgent {
    pub fn new(settings: &ProviderSettings, options: AgentOptions) -> Result<Self, ConfigError> {
        Ok(Self {
            client: http_client(settings.timeout)?,
            api_key: settings.require_api_key(ProviderKind::Gemini)?,
            endpoint: format!(
                "{}/v1beta/models/{}:generateContent",
                settings.base_url, options.model
            ),
            max_tokens: settings.max_tokens,
            options,
        })
    }

    fn request_body(&self, system_prompt: &str, user_prompt: &str) -> Value {
        let mut generation_config = json!({"maxOutputTokens": self.max_tokens});
        if let Some(temperature) = self.options.temperature {
            generation_config["temperature"] = json!(temperature);
        }

        json!({
            "systemInstruction": {"parts": [{"text": system_prompt}]},
            "contents": [{"role": "user", "parts": [{"text": user_prompt}]}],
            "generationConfig": generation_config,
        })
    }
}

#[async_trait]
impl Agent for GeminiAgent {
    fn label(&self) -> &str {
        &self.options.label
    }

    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> Result<String, AgentError> {
        let request = self
            .client
            .post(&self.endpoint)
            .header("x-goog-api-key", &self.api_key)
            .json(&self.request_body(system_prompt, user_prompt));

        parse_response(&send_json(request).await?)
    }
}

/// Concatenate `candidates[0].content.parts[*].text`
pub(crate) fn parse_response(body: &Value) -> Result<String, AgentError> {
    if let Some(reason) = body["promptFeedback"]["blockReason"].as_str() {
        return Err(AgentError::InvalidResponse(format!(
            "prompt blocked: {}",
            reason
        )));
    }

    let candidate = &body["candidates"][0];
    let text = candidate["content"]["parts"]
        .as_array()
        .map(|parts| join_text_parts(parts))
        .unwrap_or_default();

    if text.is_empty() {
        return Err(AgentError::InvalidResponse(format!(
            "no candidate text (finishReason: {})",
            candidate["finishReason"].as_str().unwrap_or("unknown")
        )));
    }
    Ok(text)
}
