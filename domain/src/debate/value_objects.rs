//! Debate value objects

use super::entities::Turn;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MIN_ITERATIONS: usize = 1;
pub const MAX_ITERATIONS_LIMIT: usize = 20;
pub const DEFAULT_MAX_ITERATIONS: usize = 10;

/// How a debate ended, as reported to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FinalStatus {
    Ready,
    MaxIterations,
}

impl FinalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FinalStatus::Ready => "READY",
            FinalStatus::MaxIterations => "MAX_ITERATIONS",
        }
    }
}

impl fmt::Display for FinalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Terminal result of a debate (immutable once produced)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebateResult {
    pub prompt: String,
    pub transcript: Vec<Turn>,
    pub final_status: FinalStatus,
    /// Count of complete Proposer+Challenger pairs (`transcript.len() / 2`)
    pub total_iterations: usize,
    /// Last draft the Proposer produced, empty if none
    pub final_draft: String,
    pub sources: Vec<String>,
}

impl DebateResult {
    pub fn is_ready(&self) -> bool {
        self.final_status == FinalStatus::Ready
    }
}

/// Caller input for one debate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebateRequest {
    pub prompt: String,
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
}

fn default_max_iterations() -> usize {
    DEFAULT_MAX_ITERATIONS
}

impl DebateRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Reject blank prompts and iteration bounds outside `1..=20`.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.prompt.trim().is_empty() {
            return Err(DomainError::InvalidPrompt);
        }
        if !(MIN_ITERATIONS..=MAX_ITERATIONS_LIMIT).contains(&self.max_iterations) {
            return Err(DomainError::InvalidIterations {
                value: self.max_iterations,
                min: MIN_ITERATIONS,
                max: MAX_ITERATIONS_LIMIT,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults_when_iterations_omitted() {
        let request: DebateRequest = serde_json::from_str(r#"{"prompt": "Write a haiku"}"#).unwrap();
        assert_eq!(request.max_iterations, DEFAULT_MAX_ITERATIONS);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_request_reads_camel_case() {
        let request: DebateRequest =
            serde_json::from_str(r#"{"prompt": "p", "maxIterations": 3}"#).unwrap();
        assert_eq!(request.max_iterations, 3);
    }

    #[test]
    fn test_blank_prompt_rejected() {
        let err = DebateRequest::new("  \n").validate().unwrap_err();
        assert_eq!(err, DomainError::InvalidPrompt);
    }

    #[test]
    fn test_iteration_bounds() {
        assert!(DebateRequest::new("p").with_max_iterations(1).validate().is_ok());
        assert!(DebateRequest::new("p").with_max_iterations(20).validate().is_ok());
        assert!(matches!(
            DebateRequest::new("p").with_max_iterations(0).validate(),
            Err(DomainError::InvalidIterations { value: 0, .. })
        ));
        assert!(matches!(
            DebateRequest::new("p").with_max_iterations(21).validate(),
            Err(DomainError::InvalidIterations { value: 21, .. })
        ));
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let result = DebateResult {
            prompt: "p".into(),
            transcript: vec![],
            final_status: FinalStatus::MaxIterations,
            total_iterations: 0,
            final_draft: String::new(),
            sources: vec![],
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["finalStatus"], "MAX_ITERATIONS");
        assert_eq!(json["totalIterations"], 0);
        assert_eq!(json["finalDraft"], "");
        assert!(!result.is_ready());
    }
}
