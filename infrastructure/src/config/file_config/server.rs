//! Server configuration from TOML (`[server]` section)

use crossfire_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Raw HTTP transport configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Address to bind
    pub bind: String,
    /// Port to listen on
    pub port: u16,
    /// Allowed CORS origins (any origin when empty)
    pub cors_origins: Vec<String>,
    /// Basic authentication
    pub auth: FileAuthConfig,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_string(),
            port: 8080,
            cors_origins: vec!["http://localhost:5173".to_string()],
            auth: FileAuthConfig::default(),
        }
    }
}

impl FileServerConfig {
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.bind.trim().is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::EmptyValue {
                    field: "server.bind".to_string(),
                },
                "server.bind cannot be empty",
            ));
        }

        if self.auth.enabled && !self.auth.is_active() {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::IncompleteCredentials,
                "server.auth is enabled but no password is set; authentication is disabled",
            ));
        }

        issues
    }
}

/// Raw basic authentication settings (`[server.auth]`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAuthConfig {
    pub enabled: bool,
    pub username: String,
    pub password: Option<String>,
}

impl Default for FileAuthConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            username: "admin".to_string(),
            password: None,
        }
    }
}

impl FileAuthConfig {
    /// Authentication is enforced only when enabled with a non-empty password
    pub fn is_active(&self) -> bool {
        self.enabled && self.password.as_deref().is_some_and(|p| !p.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_requires_password() {
        let mut auth = FileAuthConfig {
            enabled: true,
            ..Default::default()
        };
        assert!(!auth.is_active());

        auth.password = Some(String::new());
        assert!(!auth.is_active());

        auth.password = Some("secret".to_string());
        assert!(auth.is_active());

        auth.enabled = false;
        assert!(!auth.is_active());
    }

    #[test]
    fn test_validate_warns_on_incomplete_auth() {
        let config = FileServerConfig {
            auth: FileAuthConfig {
                enabled: true,
                ..Default::default()
            },
            ..Default::default()
        };
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, ConfigIssueCode::IncompleteCredentials);
        assert!(!issues[0].is_error());
    }
}
