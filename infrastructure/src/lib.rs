//! Infrastructure layer for crossfire
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: HTTP completion providers for the
//! [`Agent`](crossfire_application::Agent) port, the JSONL transcript log
//! for the [`EventSink`](crossfire_application::EventSink) port, plus
//! configuration file loading and system prompt resolution.

pub mod config;
pub mod logging;
pub mod prompts;
pub mod providers;

// Re-export commonly used types
pub use config::{
    ConfigError, ConfigLoader, FileAuthConfig, FileConfig, FileDebateConfig, FileLoggingConfig,
    FileOutputConfig, FileParticipantConfig, FileProvidersConfig, FileServerConfig,
};
pub use logging::JsonlEventLog;
pub use prompts::SystemPromptLoader;
pub use providers::{
    AnthropicAgent, GeminiAgent, OpenAiAgent, ProviderKind, ProviderSettings, build_agent,
};
