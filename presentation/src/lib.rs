//! Presentation layer for crossfire
//!
//! This crate contains CLI definitions, console output formatting,
//! the live progress sink, and the HTTP/SSE transport.

pub mod cli;
pub mod config;
pub mod output;
pub mod progress;
pub mod server;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, RunArgs, ServeArgs};
pub use config::{OutputConfig, ServerConfig};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::ProgressReporter;
pub use server::{AppState, BasicAuth, router, serve};
