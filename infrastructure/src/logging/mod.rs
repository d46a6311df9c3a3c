//! Logging infrastructure: structured transcript logging.
//!
//! Provides [`JsonlEventLog`], a JSONL file writer that implements
//! the [`EventSink`](crossfire_application::EventSink) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlEventLog;
