//! Debate domain entities

use super::outcome::TurnOutcome;
use super::value_objects::{DebateResult, FinalStatus};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

/// Agent role within a debate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Produces and refines the draft
    Proposer,
    /// Critiques the current draft
    Challenger,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Proposer => "PROPOSER",
            Role::Challenger => "CHALLENGER",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status of a debate session or of a single turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DebateStatus {
    #[default]
    Ongoing,
    Ready,
    MaxIterations,
    Error,
}

impl DebateStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DebateStatus::Ongoing => "ONGOING",
            DebateStatus::Ready => "READY",
            DebateStatus::MaxIterations => "MAX_ITERATIONS",
            DebateStatus::Error => "ERROR",
        }
    }

    /// Parse a status reported by the Proposer.
    ///
    /// Case-insensitive. Only `ONGOING`, `READY` and `MAX_ITERATIONS` are
    /// statuses an agent may report; anything else yields `None`.
    pub fn from_reported(value: &str) -> Option<Self> {
        match value.parse() {
            Ok(DebateStatus::Error) | Err(_) => None,
            Ok(status) => Some(status),
        }
    }

    /// Whether the session halts once it reaches this status
    pub fn is_terminal(&self) -> bool {
        !matches!(self, DebateStatus::Ongoing)
    }
}

impl FromStr for DebateStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ONGOING" => Ok(DebateStatus::Ongoing),
            "READY" => Ok(DebateStatus::Ready),
            "MAX_ITERATIONS" => Ok(DebateStatus::MaxIterations),
            "ERROR" => Ok(DebateStatus::Error),
            other => Err(format!("unknown debate status: {}", other)),
        }
    }
}

impl fmt::Display for DebateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One role's single contribution within one iteration (immutable once appended)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Turn {
    pub role: Role,
    /// Draft, proposer commentary, or rendered challenger feedback
    pub content: String,
    /// 1-based iteration number
    pub iteration: usize,
    /// Which agent produced the turn (audit/display only)
    pub agent_label: String,
    pub status: DebateStatus,
}

/// Content prefix for turns recording a failed agent exchange
pub const TURN_ERROR_PREFIX: &str = "Error processing response: ";

/// Per-run accumulator for a debate (Entity)
///
/// Owned by exactly one orchestration run. The session only advances through
/// [`DebateSession::apply`], which folds one [`TurnOutcome`] into it, so the
/// state machine can be exercised without any agents.
#[derive(Debug, Clone)]
pub struct DebateSession {
    prompt: String,
    max_iterations: usize,
    transcript: Vec<Turn>,
    sources: Vec<String>,
    current_draft: String,
    pending_feedback: String,
    status: DebateStatus,
}

impl DebateSession {
    pub fn new(prompt: impl Into<String>, max_iterations: usize) -> Self {
        Self {
            prompt: prompt.into(),
            max_iterations,
            transcript: Vec::new(),
            sources: Vec::new(),
            current_draft: String::new(),
            pending_feedback: String::new(),
            status: DebateStatus::Ongoing,
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    pub fn transcript(&self) -> &[Turn] {
        &self.transcript
    }

    pub fn last_turn(&self) -> Option<&Turn> {
        self.transcript.last()
    }

    /// Citations gathered from Proposer turns, in first-seen order
    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    pub fn current_draft(&self) -> &str {
        &self.current_draft
    }

    pub fn pending_feedback(&self) -> &str {
        &self.pending_feedback
    }

    pub fn status(&self) -> DebateStatus {
        self.status
    }

    pub fn is_halted(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn total_iterations(&self) -> usize {
        self.transcript.len() / 2
    }

    /// Fold one turn outcome into the session.
    ///
    /// A halted session is returned unchanged: nothing is appended after
    /// READY, ERROR or MAX_ITERATIONS.
    pub fn apply(mut self, outcome: TurnOutcome) -> Self {
        if self.is_halted() {
            warn!(
                status = %self.status,
                "Ignoring {} outcome for halted session",
                outcome.role()
            );
            return self;
        }

        match outcome {
            TurnOutcome::Proposed {
                iteration,
                agent_label,
                proposal,
            } => {
                self.merge_sources(&proposal.sources);

                // The opening turn has nothing to comment on, so it shows the draft itself.
                let content = if iteration <= 1 {
                    proposal.draft.clone()
                } else {
                    proposal.response_or_default().to_string()
                };

                self.current_draft = proposal.draft;
                self.transcript.push(Turn {
                    role: Role::Proposer,
                    content,
                    iteration,
                    agent_label,
                    status: proposal.status,
                });

                if proposal.status == DebateStatus::Ready {
                    self.status = DebateStatus::Ready;
                }
            }
            TurnOutcome::Critiqued {
                iteration,
                agent_label,
                critique,
            } => {
                let feedback = critique.render();
                self.pending_feedback = feedback.clone();
                self.transcript.push(Turn {
                    role: Role::Challenger,
                    content: feedback,
                    iteration,
                    agent_label,
                    status: DebateStatus::Ongoing,
                });
            }
            TurnOutcome::Failed {
                role,
                iteration,
                agent_label,
                reason,
            } => {
                self.transcript.push(Turn {
                    role,
                    content: format!("{}{}", TURN_ERROR_PREFIX, reason),
                    iteration,
                    agent_label,
                    status: DebateStatus::Error,
                });
                self.status = DebateStatus::Error;
            }
        }

        self
    }

    /// Close the session and produce the terminal result.
    ///
    /// A session still ONGOING ran out of iterations. Only READY is reported
    /// as READY; every other ending (including ERROR) is reported as
    /// MAX_ITERATIONS, with the ERROR marking kept in the transcript.
    pub fn finish(mut self) -> DebateResult {
        if self.status == DebateStatus::Ongoing {
            self.status = DebateStatus::MaxIterations;
        }

        let final_status = match self.status {
            DebateStatus::Ready => FinalStatus::Ready,
            _ => FinalStatus::MaxIterations,
        };
        let total_iterations = self.total_iterations();

        DebateResult {
            prompt: self.prompt,
            transcript: self.transcript,
            final_status,
            total_iterations,
            final_draft: self.current_draft,
            sources: self.sources,
        }
    }

    fn merge_sources(&mut self, incoming: &[String]) {
        for source in incoming {
            if source.is_empty() || self.sources.contains(source) {
                continue;
            }
            debug!(source = %source, "Added source");
            self.sources.push(source.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debate::outcome::{Critique, Proposal};

    fn proposal(draft: &str, status: DebateStatus, response: Option<&str>, sources: &[&str]) -> Proposal {
        Proposal {
            draft: draft.to_string(),
            response: response.map(str::to_string),
            status,
            sources: sources.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn proposed(iteration: usize, p: Proposal) -> TurnOutcome {
        TurnOutcome::Proposed {
            iteration,
            agent_label: "proposer".to_string(),
            proposal: p,
        }
    }

    fn critiqued(iteration: usize, text: &str) -> TurnOutcome {
        TurnOutcome::Critiqued {
            iteration,
            agent_label: "challenger".to_string(),
            critique: Critique::new(text),
        }
    }

    fn fold(outcomes: Vec<TurnOutcome>) -> DebateSession {
        outcomes
            .into_iter()
            .fold(DebateSession::new("Write a haiku", 3), DebateSession::apply)
    }

    // ==================== Status parsing ====================

    #[test]
    fn test_reported_status_case_insensitive() {
        for raw in ["ready", "READY", "Ready", " ready "] {
            assert_eq!(DebateStatus::from_reported(raw), Some(DebateStatus::Ready));
        }
        assert_eq!(
            DebateStatus::from_reported("max_iterations"),
            Some(DebateStatus::MaxIterations)
        );
        assert_eq!(DebateStatus::from_reported("ERROR"), None);
        assert_eq!(DebateStatus::from_reported("done"), None);
    }

    #[test]
    fn test_status_serializes_screaming_snake() {
        let json = serde_json::to_string(&DebateStatus::MaxIterations).unwrap();
        assert_eq!(json, "\"MAX_ITERATIONS\"");
    }

    // ==================== Fold ====================

    #[test]
    fn test_new_session_is_empty() {
        let session = DebateSession::new("p", 2);
        assert!(session.transcript().is_empty());
        assert_eq!(session.current_draft(), "");
        assert_eq!(session.pending_feedback(), "");
        assert_eq!(session.status(), DebateStatus::Ongoing);
        assert_eq!(session.max_iterations(), 2);
    }

    #[test]
    fn test_first_proposer_turn_shows_draft() {
        let session = fold(vec![proposed(
            1,
            proposal("An old pond", DebateStatus::Ongoing, Some("v1"), &[]),
        )]);
        let turn = session.last_turn().unwrap();
        assert_eq!(turn.role, Role::Proposer);
        assert_eq!(turn.content, "An old pond");
        assert_eq!(turn.iteration, 1);
        assert_eq!(session.current_draft(), "An old pond");
    }

    #[test]
    fn test_later_proposer_turn_shows_response() {
        let session = fold(vec![
            proposed(1, proposal("d1", DebateStatus::Ongoing, None, &[])),
            critiqued(1, "too long"),
            proposed(2, proposal("d2", DebateStatus::Ongoing, Some("v2"), &[])),
            critiqued(2, "better"),
            proposed(3, proposal("d3", DebateStatus::Ongoing, None, &[])),
        ]);
        assert_eq!(session.transcript()[2].content, "v2");
        assert_eq!(session.transcript()[4].content, "Initial draft created");
        assert_eq!(session.current_draft(), "d3");
    }

    #[test]
    fn test_ready_halts_and_ignores_later_outcomes() {
        let session = fold(vec![
            proposed(1, proposal("d1", DebateStatus::Ready, None, &[])),
            critiqued(1, "should be ignored"),
        ]);
        assert_eq!(session.transcript().len(), 1);
        assert_eq!(session.status(), DebateStatus::Ready);
        assert_eq!(session.pending_feedback(), "");

        let result = session.finish();
        assert_eq!(result.final_status, FinalStatus::Ready);
        assert_eq!(result.total_iterations, 0);
    }

    #[test]
    fn test_critique_becomes_pending_feedback() {
        let session = fold(vec![
            proposed(1, proposal("d1", DebateStatus::Ongoing, None, &[])),
            critiqued(1, "too long"),
        ]);
        assert_eq!(session.pending_feedback(), "too long");
        let turn = session.last_turn().unwrap();
        assert_eq!(turn.role, Role::Challenger);
        assert_eq!(turn.status, DebateStatus::Ongoing);
    }

    #[test]
    fn test_sources_deduplicated_and_non_empty() {
        let session = fold(vec![
            proposed(1, proposal("d1", DebateStatus::Ongoing, None, &["a", "", "b", "a"])),
            critiqued(1, "c"),
            proposed(2, proposal("d2", DebateStatus::Ongoing, None, &["b", "c", ""])),
        ]);
        assert_eq!(session.sources(), ["a", "b", "c"]);
    }

    #[test]
    fn test_failure_records_error_turn_and_halts() {
        let session = fold(vec![
            proposed(1, proposal("d1", DebateStatus::Ongoing, None, &["a"])),
            TurnOutcome::Failed {
                role: Role::Challenger,
                iteration: 1,
                agent_label: "challenger".to_string(),
                reason: "missing required field 'critique'".to_string(),
            },
            proposed(2, proposal("d2", DebateStatus::Ongoing, None, &[])),
        ]);

        assert_eq!(session.transcript().len(), 2);
        assert_eq!(session.status(), DebateStatus::Error);
        let turn = session.last_turn().unwrap();
        assert_eq!(turn.status, DebateStatus::Error);
        assert_eq!(
            turn.content,
            "Error processing response: missing required field 'critique'"
        );

        let result = session.finish();
        assert_eq!(result.final_status, FinalStatus::MaxIterations);
        assert_eq!(result.final_draft, "d1");
        assert_eq!(result.sources, vec!["a".to_string()]);
        assert_eq!(result.total_iterations, 1);
    }

    #[test]
    fn test_exhausted_session_reports_max_iterations() {
        let mut outcomes = Vec::new();
        for i in 1..=3 {
            outcomes.push(proposed(i, proposal("d", DebateStatus::Ongoing, None, &[])));
            outcomes.push(critiqued(i, "again"));
        }
        let result = fold(outcomes).finish();
        assert_eq!(result.transcript.len(), 6);
        assert_eq!(result.total_iterations, 3);
        assert_eq!(result.final_status, FinalStatus::MaxIterations);
    }

    #[test]
    fn test_reported_max_iterations_does_not_halt() {
        let session = fold(vec![proposed(
            1,
            proposal("d1", DebateStatus::MaxIterations, None, &[]),
        )]);
        assert!(!session.is_halted());
        assert_eq!(
            session.last_turn().unwrap().status,
            DebateStatus::MaxIterations
        );
    }
}
