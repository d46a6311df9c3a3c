//! Live progress reporting for CLI runs

pub mod reporter;
