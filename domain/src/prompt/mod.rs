//! Prompt domain
//!
//! Templates for the system and user prompts sent to each debate role.

mod template;

pub use template::PromptBuilder;
