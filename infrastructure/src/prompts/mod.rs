//! System prompt resolution
//!
//! Each role uses the built-in system prompt unless its configuration names
//! a template file. Templates are read once at startup.

use crate::config::{ConfigError, FileConfig};
use crossfire_domain::{PromptBuilder, Role};
use std::path::Path;
use tracing::info;

/// Loads the system prompt for each debate role
pub struct SystemPromptLoader;

impl SystemPromptLoader {
    /// Resolve the system prompt for `role`
    pub fn load(config: &FileConfig, role: Role) -> Result<String, ConfigError> {
        match &config.participant(role).system_prompt_file {
            Some(path) => Self::read_template(path),
            None => Ok(Self::builtin(role).to_string()),
        }
    }

    pub fn builtin(role: Role) -> &'static str {
        match role {
            Role::Proposer => PromptBuilder::proposer_system(),
            Role::Challenger => PromptBuilder::challenger_system(),
        }
    }

    fn read_template(path: &Path) -> Result<String, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::PromptFile {
            path: path.to_path_buf(),
            source,
        })?;

        let content = content.trim();
        if content.is_empty() {
            return Err(ConfigError::EmptyPromptFile {
                path: path.to_path_buf(),
            });
        }

        info!("Loaded system prompt from {}", path.display());
        Ok(content.to_string())
    }
}
