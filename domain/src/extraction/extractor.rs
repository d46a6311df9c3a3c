//! Recovering a structured record from raw agent text.
//!
//! Models reliably wrap their JSON in markdown fences or surround it with
//! prose, so extraction runs two attempts and the first success wins:
//!
//! 1. Strip an opening code fence (with or without a language tag) and its
//!    closing fence, then parse the whole text as a JSON object.
//! 2. Parse the span from the first `{` to the last `}` (inclusive).
//!
//! When both fail, the error from the first attempt is returned.

use super::error::ExtractionError;
use super::record::StructuredRecord;
use serde_json::{Map, Value};
use tracing::debug;

const FENCE: &str = "```";

/// Extract a [`StructuredRecord`] from raw agent output.
///
/// # Examples
///
/// ```
/// use crossfire_domain::extraction::extract;
///
/// let record = extract("Sure! {\"critique\": \"too long\"} Hope that helps.").unwrap();
/// assert_eq!(record.require_str("critique").unwrap(), "too long");
///
/// let fenced = extract("```json\n{\"critique\": \"too long\"}\n```").unwrap();
/// assert_eq!(record, fenced);
/// ```
pub fn extract(raw: &str) -> Result<StructuredRecord, ExtractionError> {
    let cleaned = strip_code_fence(raw.trim());

    let original = match parse_record(cleaned) {
        Ok(record) => return Ok(record),
        Err(e) => e,
    };

    debug!("Direct parse failed ({}), scanning for a brace-bounded object", original);

    if let Some(start) = cleaned.find('{')
        && let Some(end) = cleaned.rfind('}')
        && start < end
    {
        match parse_record(&cleaned[start..=end]) {
            Ok(record) => return Ok(record),
            Err(e) => debug!("Brace-bounded parse failed: {}", e),
        }
    }

    Err(ExtractionError::Malformed(original))
}

fn parse_record(text: &str) -> Result<StructuredRecord, serde_json::Error> {
    serde_json::from_str::<Map<String, Value>>(text).map(StructuredRecord::from)
}

/// Remove a leading code fence (and its language tag) plus a trailing fence.
///
/// Text that does not start with a fence is returned unchanged.
fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix(FENCE) else {
        return text;
    };

    let rest = rest
        .trim_start_matches(|c: char| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '+' | '.'));
    let rest = rest.trim_end();
    let rest = rest.strip_suffix(FENCE).unwrap_or(rest);

    rest.trim()
}
