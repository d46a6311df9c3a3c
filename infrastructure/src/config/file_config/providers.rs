//! Provider configuration from TOML (`[providers]` section)

use crate::providers::ProviderSettings;
use crossfire_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// OpenAI-compatible chat completions provider configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOpenAiConfig {
    /// Environment variable name for the API key (default: "OPENAI_API_KEY").
    pub api_key_env: String,
    /// Direct API key (the env var is preferred).
    pub api_key: Option<String>,
    /// Base URL (can point at any OpenAI-compatible server).
    pub base_url: String,
    /// Default max tokens per response.
    pub max_tokens: u32,
    /// Per-request timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for FileOpenAiConfig {
    fn default() -> Self {
        Self {
            api_key_env: "OPENAI_API_KEY".to_string(),
            api_key: None,
            base_url: "https://api.openai.com".to_string(),
            max_tokens: 4096,
            timeout_seconds: 120,
        }
    }
}

/// Google Gemini provider configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeminiConfig {
    /// Environment variable name for the API key (default: "GEMINI_API_KEY").
    pub api_key_env: String,
    /// Direct API key (the env var is preferred).
    pub api_key: Option<String>,
    /// Base URL for the Generative Language API.
    pub base_url: String,
    /// Default max output tokens per response.
    pub max_tokens: u32,
    /// Per-request timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for FileGeminiConfig {
    fn default() -> Self {
        Self {
            api_key_env: "GEMINI_API_KEY".to_string(),
            api_key: None,
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            max_tokens: 4096,
            timeout_seconds: 120,
        }
    }
}

/// Anthropic Messages API provider configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAnthropicConfig {
    /// Environment variable name for the API key (default: "ANTHROPIC_API_KEY").
    pub api_key_env: String,
    /// Direct API key (the env var is preferred).
    pub api_key: Option<String>,
    /// Base URL for the Anthropic API.
    pub base_url: String,
    /// Default max tokens per response.
    pub max_tokens: u32,
    /// Per-request timeout in seconds.
    pub timeout_seconds: u64,
    /// Anthropic API version header.
    pub api_version: String,
}

impl Default for FileAnthropicConfig {
    fn default() -> Self {
        Self {
            api_key_env: "ANTHROPIC_API_KEY".to_string(),
            api_key: None,
            base_url: "https://api.anthropic.com".to_string(),
            max_tokens: 4096,
            timeout_seconds: 120,
            api_version: "2023-06-01".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProvidersConfig {
    /// OpenAI API settings.
    pub openai: FileOpenAiConfig,
    /// Gemini API settings.
    pub gemini: FileGeminiConfig,
    /// Anthropic API settings.
    pub anthropic: FileAnthropicConfig,
}

macro_rules! settings {
    ($config:expr) => {
        ProviderSettings {
            api_key_env: $config.api_key_env.clone(),
            api_key: $config.api_key.clone(),
            base_url: $config.base_url.trim_end_matches('/').to_string(),
            max_tokens: $config.max_tokens,
            timeout: Duration::from_secs($config.timeout_seconds),
        }
    };
}

impl FileOpenAiConfig {
    pub fn settings(&self) -> ProviderSettings {
        settings!(self)
    }
}

impl FileGeminiConfig {
    pub fn settings(&self) -> ProviderSettings {
        settings!(self)
    }
}

impl FileAnthropicConfig {
    pub fn settings(&self) -> ProviderSettings {
        settings!(self)
    }
}

impl FileProvidersConfig {
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        let checks = [
            ("providers.openai", self.openai.settings()),
            ("providers.gemini", self.gemini.settings()),
            ("providers.anthropic", self.anthropic.settings()),
        ];

        for (section, settings) in checks {
            if settings.base_url.is_empty() {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::EmptyValue {
                        field: format!("{}.base_url", section),
                    },
                    format!("{}.base_url cannot be empty", section),
                ));
            }
            if settings.timeout.is_zero() {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::OutOfRange {
                        field: format!("{}.timeout_seconds", section),
                    },
                    format!("{}.timeout_seconds must be positive", section),
                ));
            }
        }

        issues
    }
}
