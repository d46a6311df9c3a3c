//! Structured configuration issues.
//!
//! Configuration sources report problems as [`ConfigIssue`]s instead of
//! failing on the first one, so the binary can log every warning and refuse
//! to start only when an [`Severity::Error`] is present.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A numeric setting lies outside its allowed range.
    OutOfRange { field: String },
    /// A provider name that no adapter handles.
    UnknownProvider { field: String, value: String },
    /// A required text setting is empty.
    EmptyValue { field: String },
    /// Authentication is requested but cannot be enforced.
    IncompleteCredentials,
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_severity() {
        let err = ConfigIssue::error(
            ConfigIssueCode::EmptyValue {
                field: "proposer.model".to_string(),
            },
            "proposer.model cannot be empty",
        );
        assert!(err.is_error());

        let warn = ConfigIssue::warning(ConfigIssueCode::IncompleteCredentials, "no password");
        assert!(!warn.is_error());
        assert_eq!(warn.code, ConfigIssueCode::IncompleteCredentials);
    }
}
