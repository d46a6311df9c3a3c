//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Directory receiving one JSONL event log per CLI run
    pub transcript_dir: Option<PathBuf>,
}

impl FileLoggingConfig {
    /// Path of the transcript log for a run started at `started`
    pub fn transcript_path(&self, started: chrono::DateTime<chrono::Local>) -> Option<PathBuf> {
        self.transcript_dir.as_ref().map(|dir| {
            dir.join(format!(
                "debate-{}.events.jsonl",
                started.format("%Y%m%d-%H%M%S")
            ))
        })
    }
}
