//! Application-level configuration.
//!
//! - [`DebateParams`]: run limits and stream tuning for the debate use case

pub mod debate_params;

pub use debate_params::DebateParams;
