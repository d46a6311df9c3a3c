//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod debate;
mod logging;
mod output;
mod participant;
mod providers;
mod server;

pub use debate::FileDebateConfig;
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use participant::FileParticipantConfig;
pub use providers::{FileAnthropicConfig, FileGeminiConfig, FileOpenAiConfig, FileProvidersConfig};
pub use server::{FileAuthConfig, FileServerConfig};

use crossfire_domain::{ConfigIssue, Role};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Iteration bounds and run limits
    pub debate: FileDebateConfig,
    /// Agent producing the draft
    pub proposer: FileParticipantConfig,
    /// Agent critiquing the draft
    pub challenger: FileParticipantConfig,
    /// Provider credentials and endpoints
    pub providers: FileProvidersConfig,
    /// HTTP transport settings
    pub server: FileServerConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Transcript logging
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Settings for the agent playing `role`
    pub fn participant(&self, role: Role) -> &FileParticipantConfig {
        match role {
            Role::Proposer => &self.proposer,
            Role::Challenger => &self.challenger,
        }
    }

    /// Validate the entire configuration, returning all detected issues.
    ///
    /// This is the single entry point for config validation. It checks:
    /// 1. Debate limits
    /// 2. Provider names and model names for both roles
    /// 3. Provider endpoints
    /// 4. Server authentication settings
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        issues.extend(self.debate.validate());
        issues.extend(self.proposer.validate(Role::Proposer));
        issues.extend(self.challenger.validate(Role::Challenger));
        issues.extend(self.providers.validate());
        issues.extend(self.server.validate());

        issues
    }
}
