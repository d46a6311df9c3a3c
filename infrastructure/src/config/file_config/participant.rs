//! Participant configuration from TOML (`[proposer]` and `[challenger]` sections)

use crate::providers::ProviderKind;
use crossfire_domain::{ConfigIssue, ConfigIssueCode, Role};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw configuration of the agent playing one debate role
///
/// Unset provider and model fall back to the role's defaults, so a config
/// file only needs to name what it changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileParticipantConfig {
    /// "openai", "gemini", or "anthropic"
    pub provider: Option<String>,
    /// Model name passed to the provider
    pub model: Option<String>,
    /// Label recorded on turns (default: "provider:model")
    pub label: Option<String>,
    /// File overriding the built-in system prompt
    pub system_prompt_file: Option<PathBuf>,
    /// Sampling temperature (provider default when unset)
    pub temperature: Option<f32>,
}

impl FileParticipantConfig {
    pub fn provider_name(&self, role: Role) -> &str {
        self.provider.as_deref().unwrap_or(match role {
            Role::Proposer => "openai",
            Role::Challenger => "gemini",
        })
    }

    pub fn model_name(&self, role: Role) -> &str {
        self.model.as_deref().unwrap_or(match role {
            Role::Proposer => "gpt-4o-mini",
            Role::Challenger => "gemini-2.0-flash",
        })
    }

    /// Label recorded on every turn this participant produces
    pub fn label(&self, role: Role) -> String {
        match &self.label {
            Some(label) if !label.trim().is_empty() => label.clone(),
            _ => format!("{}:{}", self.provider_name(role), self.model_name(role)),
        }
    }

    pub fn validate(&self, role: Role) -> Vec<ConfigIssue> {
        let section = role.as_str().to_lowercase();
        let mut issues = Vec::new();

        let provider = self.provider_name(role);
        if provider.parse::<ProviderKind>().is_err() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::UnknownProvider {
                    field: format!("{}.provider", section),
                    value: provider.to_string(),
                },
                format!(
                    "{}.provider: unknown provider '{}' (expected openai, gemini, or anthropic)",
                    section, provider
                ),
            ));
        }

        if self.model_name(role).trim().is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::EmptyValue {
                    field: format!("{}.model", section),
                },
                format!("{}.model cannot be empty", section),
            ));
        }

        if let Some(t) = self.temperature
            && !(0.0..=2.0).contains(&t)
        {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::OutOfRange {
                    field: format!("{}.temperature", section),
                },
                format!("{}.temperature: {} is outside 0.0..=2.0", section, t),
            ));
        }

        issues
    }
}
