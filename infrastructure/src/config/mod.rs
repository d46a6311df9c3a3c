//! Configuration file loading for crossfire
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./crossfire.toml` or `./.crossfire.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/crossfire/config.toml`
//! 4. `CROSSFIRE_*` environment variables (`__` separates nested keys)
//! 5. Default values

mod error;
mod file_config;
mod loader;

pub use error::ConfigError;
pub use file_config::{
    FileAnthropicConfig, FileAuthConfig, FileConfig, FileDebateConfig, FileGeminiConfig,
    FileLoggingConfig, FileOpenAiConfig, FileOutputConfig, FileParticipantConfig,
    FileProvidersConfig, FileServerConfig,
};
pub use loader::ConfigLoader;
