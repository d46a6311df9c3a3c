//! Typed agent replies and the per-turn outcome folded into a session

use super::entities::{DebateStatus, Role};
use crate::extraction::{ExtractionError, StructuredRecord};
use tracing::warn;

/// Proposer commentary used when a refinement reply omits `response`
pub const DEFAULT_PROPOSER_RESPONSE: &str = "Initial draft created";

/// A Proposer reply: the full current draft plus its self-reported status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proposal {
    pub draft: String,
    pub response: Option<String>,
    pub status: DebateStatus,
    pub sources: Vec<String>,
}

impl Proposal {
    /// Read a Proposal from an extracted record.
    ///
    /// `draft` and `status` are required. An unrecognized status is logged
    /// and treated as ONGOING; it never halts the debate.
    pub fn from_record(record: &StructuredRecord) -> Result<Self, ExtractionError> {
        let draft = record.require_str("draft")?.to_string();
        let reported = record.require_str("status")?;

        let status = DebateStatus::from_reported(reported).unwrap_or_else(|| {
            warn!(status = reported, "Unrecognized proposer status, treating as ONGOING");
            DebateStatus::Ongoing
        });

        Ok(Self {
            draft,
            response: record.optional_str("response").map(str::to_string),
            status,
            sources: record.string_list("sources").unwrap_or_default(),
        })
    }

    pub fn response_or_default(&self) -> &str {
        self.response.as_deref().unwrap_or(DEFAULT_PROPOSER_RESPONSE)
    }
}

/// A Challenger reply: critique plus optional questions and suggestions
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Critique {
    pub critique: String,
    pub questions: Vec<String>,
    pub suggestions: Vec<String>,
}

impl Critique {
    pub fn new(critique: impl Into<String>) -> Self {
        Self {
            critique: critique.into(),
            ..Default::default()
        }
    }

    pub fn with_questions(mut self, questions: Vec<String>) -> Self {
        self.questions = questions;
        self
    }

    pub fn with_suggestions(mut self, suggestions: Vec<String>) -> Self {
        self.suggestions = suggestions;
        self
    }

    /// Read a Critique from an extracted record. Only `critique` is required.
    pub fn from_record(record: &StructuredRecord) -> Result<Self, ExtractionError> {
        Ok(Self {
            critique: record.require_str("critique")?.to_string(),
            questions: record.string_list("questions").unwrap_or_default(),
            suggestions: record.string_list("suggestions").unwrap_or_default(),
        })
    }

    /// Render as the feedback text handed to the Proposer.
    ///
    /// ```text
    /// <critique>
    ///
    /// Questions:
    /// - <q1>
    ///
    /// Suggestions:
    /// - <s1>
    /// ```
    ///
    /// Empty lists contribute no block.
    pub fn render(&self) -> String {
        let mut out = self.critique.clone();
        push_block(&mut out, "Questions:", &self.questions);
        push_block(&mut out, "Suggestions:", &self.suggestions);
        out
    }
}

fn push_block(out: &mut String, heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    out.push_str("\n\n");
    out.push_str(heading);
    for item in items {
        out.push_str("\n- ");
        out.push_str(item);
    }
}

/// Result of one agent exchange, ready to be folded into a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    Proposed {
        iteration: usize,
        agent_label: String,
        proposal: Proposal,
    },
    Critiqued {
        iteration: usize,
        agent_label: String,
        critique: Critique,
    },
    /// The agent call or extraction failed; the reason is recorded in the transcript
    Failed {
        role: Role,
        iteration: usize,
        agent_label: String,
        reason: String,
    },
}

impl TurnOutcome {
    pub fn role(&self) -> Role {
        match self {
            TurnOutcome::Proposed { .. } => Role::Proposer,
            TurnOutcome::Critiqued { .. } => Role::Challenger,
            TurnOutcome::Failed { role, .. } => *role,
        }
    }

    pub fn iteration(&self) -> usize {
        match self {
            TurnOutcome::Proposed { iteration, .. }
            | TurnOutcome::Critiqued { iteration, .. }
            | TurnOutcome::Failed { iteration, .. } => *iteration,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, TurnOutcome::Failed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::extract;

    #[test]
    fn test_proposal_from_record() {
        let record = extract(
            r#"{"draft": "d", "response": "r", "status": "ready", "sources": ["s1", "s2"]}"#,
        )
        .unwrap();
        let proposal = Proposal::from_record(&record).unwrap();
        assert_eq!(proposal.draft, "d");
        assert_eq!(proposal.response.as_deref(), Some("r"));
        assert_eq!(proposal.status, DebateStatus::Ready);
        assert_eq!(proposal.sources, vec!["s1", "s2"]);
    }

    #[test]
    fn test_proposal_requires_draft() {
        let record = extract(r#"{"status": "READY"}"#).unwrap();
        let err = Proposal::from_record(&record).unwrap_err();
        assert!(matches!(err, ExtractionError::MissingField(f) if f == "draft"));
    }

    #[test]
    fn test_proposal_requires_status() {
        let record = extract(r#"{"draft": "d"}"#).unwrap();
        let err = Proposal::from_record(&record).unwrap_err();
        assert!(matches!(err, ExtractionError::MissingField(f) if f == "status"));
    }

    #[test]
    fn test_unknown_status_is_ongoing() {
        let record = extract(r#"{"draft": "d", "status": "FINISHED"}"#).unwrap();
        let proposal = Proposal::from_record(&record).unwrap();
        assert_eq!(proposal.status, DebateStatus::Ongoing);
        assert_eq!(proposal.response_or_default(), DEFAULT_PROPOSER_RESPONSE);
        assert!(proposal.sources.is_empty());
    }

    #[test]
    fn test_critique_requires_critique_field() {
        let record = extract(r#"{"questions": ["why?"]}"#).unwrap();
        assert!(Critique::from_record(&record).is_err());
    }

    #[test]
    fn test_render_full() {
        let critique = Critique::new("Too long")
            .with_questions(vec!["Why 5 lines?".into()])
            .with_suggestions(vec!["Cut to 3".into(), "Use kigo".into()]);
        assert_eq!(
            critique.render(),
            "Too long\n\nQuestions:\n- Why 5 lines?\n\nSuggestions:\n- Cut to 3\n- Use kigo"
        );
    }

    #[test]
    fn test_render_skips_empty_blocks() {
        assert_eq!(Critique::new("Fine").render(), "Fine");
        let only_suggestions = Critique::new("Ok").with_suggestions(vec!["Trim".into()]);
        assert_eq!(only_suggestions.render(), "Ok\n\nSuggestions:\n- Trim");
    }

    #[test]
    fn test_outcome_accessors() {
        let failed = TurnOutcome::Failed {
            role: Role::Challenger,
            iteration: 2,
            agent_label: "c".into(),
            reason: "boom".into(),
        };
        assert_eq!(failed.role(), Role::Challenger);
        assert_eq!(failed.iteration(), 2);
        assert!(failed.is_failure());
    }
}
