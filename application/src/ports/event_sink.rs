//! Event sink port
//!
//! Defines where debate progress events go while a run is in flight.

use async_trait::async_trait;
use crossfire_domain::DebateEvent;
use std::sync::Mutex;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::mpsc;

/// Errors raised when a sink cannot accept an event
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SinkError {
    #[error("Event consumer closed")]
    Closed,

    #[error("Event consumer did not accept the event within {0:?}")]
    Timeout(Duration),

    #[error("Event sink error: {0}")]
    Other(String),
}

/// Consumer of debate progress events
///
/// Implementations live in the presentation layer (console, SSE stream) and
/// the infrastructure layer (transcript log). A failing sink halts the run.
#[async_trait]
pub trait EventSink: Send + Sync {
    async fn accept(&self, event: DebateEvent) -> Result<(), SinkError>;
}

/// No-op sink for synchronous runs
pub struct NoopSink;

#[async_trait]
impl EventSink for NoopSink {
    async fn accept(&self, _event: DebateEvent) -> Result<(), SinkError> {
        Ok(())
    }
}

/// Sink that keeps every event in memory
#[derive(Default)]
pub struct BufferingSink {
    events: Mutex<Vec<DebateEvent>>,
}

impl BufferingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events received so far
    pub fn events(&self) -> Vec<DebateEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    pub fn into_events(self) -> Vec<DebateEvent> {
        self.events.into_inner().unwrap_or_default()
    }
}

#[async_trait]
impl EventSink for BufferingSink {
    async fn accept(&self, event: DebateEvent) -> Result<(), SinkError> {
        self.events
            .lock()
            .map_err(|_| SinkError::Other("event buffer poisoned".to_string()))?
            .push(event);
        Ok(())
    }
}

/// Sink that forwards events into a bounded channel
///
/// Never drops events: a full channel applies backpressure for at most
/// `send_timeout`, after which the send fails with [`SinkError::Timeout`].
pub struct ChannelSink {
    sender: mpsc::Sender<DebateEvent>,
    send_timeout: Duration,
}

impl ChannelSink {
    pub fn new(sender: mpsc::Sender<DebateEvent>, send_timeout: Duration) -> Self {
        Self {
            sender,
            send_timeout,
        }
    }
}

#[async_trait]
impl EventSink for ChannelSink {
    async fn accept(&self, event: DebateEvent) -> Result<(), SinkError> {
        self.sender
            .send_timeout(event, self.send_timeout)
            .await
            .map_err(|e| match e {
                mpsc::error::SendTimeoutError::Timeout(_) => SinkError::Timeout(self.send_timeout),
                mpsc::error::SendTimeoutError::Closed(_) => SinkError::Closed,
            })
    }
}

/// Create a bounded event channel and the sink feeding it
pub fn event_channel(
    capacity: usize,
    send_timeout: Duration,
) -> (ChannelSink, mpsc::Receiver<DebateEvent>) {
    let (tx, rx) = mpsc::channel(capacity.max(1));
    (ChannelSink::new(tx, send_timeout), rx)
}
