//! Agent port
//!
//! Defines the interface for the completion services that play each debate role.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while talking to a completion service
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AgentError {
    #[error("API key not configured: set {0}")]
    MissingApiKey(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed with status {status}: {body}")]
    RequestFailed { status: u16, body: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,
}

/// A completion service bound to one debate role
///
/// Implementations (adapters) live in the infrastructure layer. The system
/// prompt is resolved once at startup and passed on every call; the user
/// prompt changes per turn.
#[async_trait]
pub trait Agent: Send + Sync {
    /// Identity recorded on every turn this agent produces
    fn label(&self) -> &str;

    /// Send one system + user prompt pair and return the raw reply text
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> Result<String, AgentError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = AgentError::RequestFailed {
            status: 429,
            body: "rate limited".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Request failed with status 429: rate limited"
        );
        assert_eq!(
            AgentError::MissingApiKey("OPENAI_API_KEY".to_string()).to_string(),
            "API key not configured: set OPENAI_API_KEY"
        );
    }
}
