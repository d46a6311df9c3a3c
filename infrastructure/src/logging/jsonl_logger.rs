//! JSONL file writer for debate events.
//!
//! Each [`DebateEvent`] is serialized as a single JSON line with its `type`
//! field plus a `timestamp`, appended to the file via a buffered writer.

use async_trait::async_trait;
use crossfire_application::{EventSink, SinkError};
use crossfire_domain::DebateEvent;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// JSONL event log that writes one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes on `Drop`. Write
/// failures are logged and never fail the run.
pub struct JsonlEventLog {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlEventLog {
    /// Create a new log writing to the given path.
    ///
    /// Creates the file (and parent directories) if they don't exist.
    /// Returns `None` if the file cannot be created.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create transcript directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match File::create(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not create transcript file {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn record(event: &DebateEvent) -> Option<String> {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        let mut value = match serde_json::to_value(event) {
            Ok(value) => value,
            Err(e) => {
                warn!("Could not serialize {} event: {}", event.name(), e);
                return None;
            }
        };
        if let serde_json::Value::Object(map) = &mut value {
            map.insert(
                "timestamp".to_string(),
                serde_json::Value::String(timestamp),
            );
        }

        serde_json::to_string(&value).ok()
    }
}

#[async_trait]
impl EventSink for JsonlEventLog {
    async fn accept(&self, event: DebateEvent) -> Result<(), SinkError> {
        let Some(line) = Self::record(&event) else {
            return Ok(());
        };

        if let Ok(mut writer) = self.writer.lock() {
            if let Err(e) = writeln!(writer, "{}", line) {
                warn!("Could not write to {}: {}", self.path.display(), e);
            }
            // Flush per event; JSONL is append-only
            let _ = writer.flush();
        }
        Ok(())
    }
}

impl Drop for JsonlEventLog {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}
