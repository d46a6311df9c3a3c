//! Progress events emitted while a debate runs

use super::entities::Turn;
use super::value_objects::DebateResult;
use serde::{Deserialize, Serialize};

/// Notification delivered to an event sink during a debate run.
///
/// A run emits `Start`, then for each iteration `IterationStart` followed by
/// a Proposer turn and (unless the Proposer halted) a Challenger turn, and
/// finally `Complete`. A failed turn is reported as `Error` carrying the
/// ERROR-marked turn; a run that times out outside of any turn reports an
/// `Error` without one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DebateEvent {
    Start,
    IterationStart { iteration: usize },
    ProposerTurn(Turn),
    ChallengerTurn(Turn),
    Error { message: String, turn: Option<Turn> },
    Complete(DebateResult),
}

impl DebateEvent {
    /// Stable event name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            DebateEvent::Start => "start",
            DebateEvent::IterationStart { .. } => "iteration_start",
            DebateEvent::ProposerTurn(_) => "proposer_turn",
            DebateEvent::ChallengerTurn(_) => "challenger_turn",
            DebateEvent::Error { .. } => "error",
            DebateEvent::Complete(_) => "complete",
        }
    }

    /// The turn carried by this event, if any
    pub fn turn(&self) -> Option<&Turn> {
        match self {
            DebateEvent::ProposerTurn(turn) | DebateEvent::ChallengerTurn(turn) => Some(turn),
            DebateEvent::Error { turn, .. } => turn.as_ref(),
            _ => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, DebateEvent::Complete(_))
    }
}
