//! Structured record extraction from free-form agent replies.
//!
//! - [`extract`]: recovers a JSON object from raw agent text
//! - [`StructuredRecord`]: the parsed key/value record with typed accessors
//! - [`ExtractionError`]: why a record or one of its fields could not be read

mod error;
mod extractor;
mod record;

pub use error::ExtractionError;
pub use extractor::extract;
pub use record::StructuredRecord;
