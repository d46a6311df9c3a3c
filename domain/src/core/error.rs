//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Prompt is required")]
    InvalidPrompt,

    #[error("Max iterations must be between {min} and {max} (got {value})")]
    InvalidIterations { value: usize, min: usize, max: usize },
}

impl DomainError {
    /// Check if this error was caused by the caller's input
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidPrompt | DomainError::InvalidIterations { .. }
        )
    }
}
