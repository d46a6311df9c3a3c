//! Server-Sent Events encoding of debate events

use axum::response::sse::Event;
use crossfire_domain::{DebateEvent, DebateResult, Turn};
use serde::Serialize;
use tracing::warn;

/// JSON body of one SSE message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SsePayload {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Turn>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_response: Option<DebateResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iteration: Option<usize>,
}

impl SsePayload {
    fn of(kind: &'static str) -> Self {
        Self {
            kind,
            message: None,
            error: None,
            final_response: None,
            iteration: None,
        }
    }
}

impl From<&DebateEvent> for SsePayload {
    fn from(event: &DebateEvent) -> Self {
        match event {
            DebateEvent::Start => Self::of("DEBATE_START"),
            DebateEvent::IterationStart { iteration } => Self {
                iteration: Some(*iteration),
                ..Self::of("ITERATION_START")
            },
            DebateEvent::ProposerTurn(turn) => Self {
                iteration: Some(turn.iteration),
                message: Some(turn.clone()),
                ..Self::of("PROPOSER_RESPONSE")
            },
            DebateEvent::ChallengerTurn(turn) => Self {
                iteration: Some(turn.iteration),
                message: Some(turn.clone()),
                ..Self::of("CHALLENGER_RESPONSE")
            },
            DebateEvent::Error { message, turn } => Self {
                error: Some(message.clone()),
                iteration: turn.as_ref().map(|t| t.iteration),
                message: turn.clone(),
                ..Self::of("ERROR")
            },
            DebateEvent::Complete(result) => Self {
                final_response: Some(result.clone()),
                ..Self::of("DEBATE_COMPLETE")
            },
        }
    }
}

/// Encode a debate event as an SSE message; `None` if it cannot be serialized
pub fn to_sse_event(event: &DebateEvent) -> Option<Event> {
    let payload = SsePayload::from(event);
    match serde_json::to_string(&payload) {
        Ok(json) => Some(Event::default().data(json)),
        Err(e) => {
            warn!(event = event.name(), error = %e, "Failed to encode SSE payload");
            None
        }
    }
}
