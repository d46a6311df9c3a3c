//! Debate parameters: run limits and stream tuning.
//!
//! [`DebateParams`] groups the static parameters that the transport and CLI
//! apply around [`RunDebateUseCase`](crate::use_cases::run_debate::RunDebateUseCase).
//! These are application-layer concerns, not domain policy.

use crossfire_domain::DEFAULT_MAX_ITERATIONS;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebateParams {
    /// Iteration bound used when a caller does not choose one.
    pub default_max_iterations: usize,
    /// Wall-clock cap for one debate run.
    pub run_timeout: Duration,
    /// Capacity of the bounded event channel feeding a stream consumer.
    pub stream_buffer: usize,
    /// How long a full event channel may block the run before it fails.
    pub sink_timeout: Duration,
}

impl Default for DebateParams {
    fn default() -> Self {
        Self {
            default_max_iterations: DEFAULT_MAX_ITERATIONS,
            run_timeout: Duration::from_secs(600),
            stream_buffer: 32,
            sink_timeout: Duration::from_secs(30),
        }
    }
}

impl DebateParams {
    // ==================== Builder Methods ====================

    pub fn with_default_max_iterations(mut self, max: usize) -> Self {
        self.default_max_iterations = max;
        self
    }

    pub fn with_run_timeout(mut self, timeout: Duration) -> Self {
        self.run_timeout = timeout;
        self
    }

    pub fn with_stream_buffer(mut self, capacity: usize) -> Self {
        self.stream_buffer = capacity;
        self
    }

    pub fn with_sink_timeout(mut self, timeout: Duration) -> Self {
        self.sink_timeout = timeout;
        self
    }
}
