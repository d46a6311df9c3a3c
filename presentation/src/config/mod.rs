//! Presentation-level configuration
//!
//! Configuration for console output and the HTTP transport. The binary maps
//! the raw file configuration onto these types.

use crate::server::BasicAuth;
use crossfire_domain::OutputFormat;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Full,
            color: true,
        }
    }
}

/// HTTP transport configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: String,
    pub port: u16,
    /// Allowed CORS origins; any origin when empty
    pub cors_origins: Vec<String>,
    /// Basic auth credentials, `None` when authentication is off
    pub auth: Option<BasicAuth>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_string(),
            port: 8080,
            cors_origins: vec!["http://localhost:5173".to_string()],
            auth: None,
        }
    }
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }

    pub fn with_auth(mut self, auth: BasicAuth) -> Self {
        self.auth = Some(auth);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address() {
        let config = ServerConfig {
            bind: "0.0.0.0".into(),
            port: 9000,
            ..Default::default()
        };
        assert_eq!(config.address(), "0.0.0.0:9000");
        assert!(config.auth.is_none());
    }
}
