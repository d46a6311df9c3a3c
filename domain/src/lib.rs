//! Domain layer for crossfire
//!
//! This crate contains the core debate entities, the response extractor,
//! and the prompt builder. It has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! ## Debate
//!
//! A debate is a two-agent critique loop:
//!
//! - **Proposer**: produces a draft and refines it in response to critique
//! - **Challenger**: reviews each draft and returns structured critique
//!
//! The loop ends when the Proposer reports `READY` or the iteration budget
//! runs out.
//!
//! ## Structured records
//!
//! Agents answer in free text that is expected to carry a JSON object.
//! [`extraction::extract`] recovers that object even when it is wrapped in
//! markdown fences or surrounded by prose.

pub mod config;
pub mod core;
pub mod debate;
pub mod extraction;
pub mod prompt;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::error::DomainError;
pub use debate::{
    entities::{DebateSession, DebateStatus, Role, Turn},
    event::DebateEvent,
    outcome::{Critique, Proposal, TurnOutcome},
    value_objects::{
        DEFAULT_MAX_ITERATIONS, DebateRequest, DebateResult, FinalStatus, MAX_ITERATIONS_LIMIT,
        MIN_ITERATIONS,
    },
};
pub use extraction::{ExtractionError, StructuredRecord, extract};
pub use prompt::PromptBuilder;
