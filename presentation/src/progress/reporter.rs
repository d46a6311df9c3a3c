//! Progress reporting for debate runs

use crate::output::console::ConsoleFormatter;
use async_trait::async_trait;
use colored::Colorize;
use crossfire_application::{EventSink, SinkError};
use crossfire_domain::{DebateEvent, DebateStatus, Role};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Prints each turn as it arrives, with a spinner while an agent is thinking
pub struct ProgressReporter {
    max_iterations: usize,
    proposer_label: String,
    challenger_label: String,
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new(max_iterations: usize) -> Self {
        Self {
            max_iterations,
            proposer_label: "Proposer".to_string(),
            challenger_label: "Challenger".to_string(),
            spinner: Mutex::new(None),
        }
    }

    /// Name the agents in spinner messages
    pub fn with_labels(mut self, proposer: impl Into<String>, challenger: impl Into<String>) -> Self {
        self.proposer_label = proposer.into();
        self.challenger_label = challenger.into();
        self
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn start_spinner(&self, role: Role, label: &str) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(role.as_str());
        pb.set_message(match role {
            Role::Proposer => format!("{} is drafting...", label),
            Role::Challenger => format!("{} is reviewing...", label),
        });
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.spinner.lock()
            && let Some(previous) = slot.replace(pb)
        {
            previous.finish_and_clear();
        }
    }

    fn clear_spinner(&self) {
        if let Ok(mut slot) = self.spinner.lock()
            && let Some(pb) = slot.take()
        {
            pb.finish_and_clear();
        }
    }

    fn is_spinning(&self) -> bool {
        self.spinner.lock().map(|slot| slot.is_some()).unwrap_or(false)
    }
}

impl Drop for ProgressReporter {
    fn drop(&mut self) {
        self.clear_spinner();
    }
}

#[async_trait]
impl EventSink for ProgressReporter {
    async fn accept(&self, event: DebateEvent) -> Result<(), SinkError> {
        match &event {
            DebateEvent::Start => {
                println!("{} {}", "->".cyan(), "Debate started".bold());
            }
            DebateEvent::IterationStart { iteration } => {
                println!(
                    "\n{}",
                    format!("Iteration {}/{}", iteration, self.max_iterations)
                        .cyan()
                        .bold()
                );
                self.start_spinner(Role::Proposer, &self.proposer_label);
            }
            DebateEvent::ProposerTurn(turn) => {
                self.clear_spinner();
                println!("{}\n", ConsoleFormatter::format_turn(turn));
                if turn.status != DebateStatus::Ready {
                    self.start_spinner(Role::Challenger, &self.challenger_label);
                }
            }
            DebateEvent::ChallengerTurn(turn) => {
                self.clear_spinner();
                println!("{}\n", ConsoleFormatter::format_turn(turn));
            }
            DebateEvent::Error { message, turn } => {
                self.clear_spinner();
                if let Some(turn) = turn {
                    println!("{}\n", ConsoleFormatter::format_turn(turn));
                }
                eprintln!("{} {}", "x".red(), message.red());
            }
            DebateEvent::Complete(result) => {
                self.clear_spinner();
                let status = if result.is_ready() {
                    result.final_status.as_str().green()
                } else {
                    result.final_status.as_str().yellow()
                };
                println!(
                    "{} Debate finished: {} after {} iteration(s)\n",
                    "v".green(),
                    status,
                    result.total_iterations
                );
            }
        }
        Ok(())
    }
}
