//! Extraction error types

use thiserror::Error;

/// Errors raised while recovering a structured record or reading its fields
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// No JSON object could be recovered; carries the error of the first parse attempt.
    #[error("malformed structured response: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("missing required field '{0}'")]
    MissingField(String),

    #[error("field '{field}' must be {expected}, found {found}")]
    InvalidField {
        field: String,
        expected: &'static str,
        found: &'static str,
    },
}

impl ExtractionError {
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingField(field.into())
    }

    /// Whether the record itself could not be recovered (as opposed to a field problem)
    pub fn is_malformed(&self) -> bool {
        matches!(self, ExtractionError::Malformed(_))
    }
}
