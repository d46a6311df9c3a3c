//! Debate configuration from TOML (`[debate]` section)

use crossfire_application::DebateParams;
use crossfire_domain::{
    ConfigIssue, ConfigIssueCode, DEFAULT_MAX_ITERATIONS, MAX_ITERATIONS_LIMIT, MIN_ITERATIONS,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw debate configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDebateConfig {
    /// Iterations used when a caller does not specify any
    pub default_max_iterations: usize,
    /// Wall-clock cap for one run, in seconds
    pub run_timeout_seconds: u64,
    /// Capacity of the event channel behind a streaming response
    pub stream_buffer: usize,
    /// How long a stalled stream consumer may block a run, in seconds
    pub sink_timeout_seconds: u64,
}

impl Default for FileDebateConfig {
    fn default() -> Self {
        Self {
            default_max_iterations: DEFAULT_MAX_ITERATIONS,
            run_timeout_seconds: 600,
            stream_buffer: 32,
            sink_timeout_seconds: 30,
        }
    }
}

impl FileDebateConfig {
    /// Convert to application-layer parameters
    pub fn to_params(&self) -> DebateParams {
        DebateParams::default()
            .with_default_max_iterations(self.default_max_iterations)
            .with_run_timeout(Duration::from_secs(self.run_timeout_seconds))
            .with_stream_buffer(self.stream_buffer)
            .with_sink_timeout(Duration::from_secs(self.sink_timeout_seconds))
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if !(MIN_ITERATIONS..=MAX_ITERATIONS_LIMIT).contains(&self.default_max_iterations) {
            issues.push(out_of_range(
                "debate.default_max_iterations",
                format!(
                    "must be between {} and {} (got {})",
                    MIN_ITERATIONS, MAX_ITERATIONS_LIMIT, self.default_max_iterations
                ),
            ));
        }
        if self.run_timeout_seconds == 0 {
            issues.push(out_of_range("debate.run_timeout_seconds", "must be positive"));
        }
        if self.stream_buffer == 0 {
            issues.push(out_of_range("debate.stream_buffer", "must be positive"));
        }
        if self.sink_timeout_seconds == 0 {
            issues.push(out_of_range("debate.sink_timeout_seconds", "must be positive"));
        }

        issues
    }
}

fn out_of_range(field: &str, detail: impl AsRef<str>) -> ConfigIssue {
    ConfigIssue::error(
        ConfigIssueCode::OutOfRange {
            field: field.to_string(),
        },
        format!("{}: {}", field, detail.as_ref()),
    )
}
