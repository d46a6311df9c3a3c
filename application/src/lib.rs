//! Application layer for crossfire
//!
//! This crate contains the debate use case, port definitions, and application
//! configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::DebateParams;
pub use ports::{
    agent::{Agent, AgentError},
    event_sink::{
        BufferingSink, ChannelSink, EventSink, NoopSink, SinkError, event_channel,
    },
    fanout_sink::FanoutSink,
};
pub use use_cases::run_debate::{
    DebateParticipant, RunDebateError, RunDebateInput, RunDebateUseCase, TurnError,
};
