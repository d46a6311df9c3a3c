//! Fan-out event sink: delegates to multiple sinks.
//!
//! Used by the CLI to drive live console progress and the JSONL transcript
//! log from the same run.

use super::event_sink::{EventSink, SinkError};
use async_trait::async_trait;
use crossfire_domain::DebateEvent;

/// A sink that offers every event to each delegate in order.
///
/// Uses borrowed references with a lifetime parameter so both owned and
/// borrowed sinks can be composed without wrapper types.
///
/// ```text
/// RunDebateUseCase.execute_with_sink(input, &fanout)
///                                        |
///                  +---------------------+---------------------+
///                  |                                           |
///          ProgressReporter                              JsonlEventLog
///          → console                                     → transcript file
/// ```
pub struct FanoutSink<'a> {
    delegates: Vec<&'a dyn EventSink>,
}

impl<'a> FanoutSink<'a> {
    pub fn new(delegates: Vec<&'a dyn EventSink>) -> Self {
        Self { delegates }
    }

    pub fn push(&mut self, sink: &'a dyn EventSink) {
        self.delegates.push(sink);
    }

    pub fn len(&self) -> usize {
        self.delegates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.delegates.is_empty()
    }
}

#[async_trait]
impl EventSink for FanoutSink<'_> {
    /// Every delegate sees the event; the first failure is reported afterwards.
    async fn accept(&self, event: DebateEvent) -> Result<(), SinkError> {
        let mut first_error = None;
        for sink in &self.delegates {
            if let Err(e) = sink.accept(event.clone()).await {
                first_error.get_or_insert(e);
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
