//! Debate domain
//!
//! - [`entities::DebateSession`]: the per-run accumulator, advanced by folding
//!   [`outcome::TurnOutcome`]s into it
//! - [`entities::Turn`]: one role's contribution within one iteration
//! - [`event::DebateEvent`]: progress notifications emitted while a debate runs
//! - [`value_objects::DebateResult`]: the terminal, immutable result
//! - [`value_objects::DebateRequest`]: caller input plus its validation rules

pub mod entities;
pub mod event;
pub mod outcome;
pub mod value_objects;
