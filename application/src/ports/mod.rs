//! Port definitions (interfaces for external adapters)
//!
//! - [`agent::Agent`]: a completion service bound to one debate role
//! - [`event_sink::EventSink`]: consumer of debate progress events
//! - [`fanout_sink::FanoutSink`]: delivers each event to several sinks

pub mod agent;
pub mod event_sink;
pub mod fanout_sink;
