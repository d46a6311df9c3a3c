//! CLI command definitions

use clap::{Args, Parser, Subcommand};
use crossfire_domain::OutputFormat;
use std::path::PathBuf;

/// CLI arguments for crossfire
#[derive(Parser, Debug)]
#[command(name = "crossfire")]
#[command(author, version, about = "Two-agent debate - a Proposer drafts, a Challenger critiques")]
#[command(long_about = r#"
Crossfire runs a debate between two LLM agents to refine an answer.

Each iteration has two turns:
1. Proposer: writes (or refines) a draft and reports ONGOING or READY
2. Challenger: critiques the draft with questions and suggestions

The debate ends when the Proposer reports READY or the iteration budget
runs out.

Configuration files are loaded from (in priority order):
1. --config <path>                        Explicit config file
2. ./crossfire.toml or ./.crossfire.toml  Project-level config
3. ~/.config/crossfire/config.toml        Global config
4. CROSSFIRE_* environment variables      (e.g. CROSSFIRE_SERVER__PORT=9000)

Example:
  crossfire run "Write a haiku about the sea"
  crossfire run -n 3 -o draft "Summarize the CAP theorem"
  crossfire serve --port 9000
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a single debate and print the result
    Run(RunArgs),
    /// Serve the debate HTTP API
    Serve(ServeArgs),
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// The task for the Proposer
    pub prompt: String,

    /// Maximum number of iterations (1-20)
    #[arg(short = 'n', long, value_name = "N")]
    pub max_iterations: Option<usize>,

    /// Output format: full, draft or json
    #[arg(short, long, value_name = "FORMAT")]
    pub output: Option<OutputFormat>,

    /// Suppress live progress
    #[arg(short, long)]
    pub quiet: bool,

    /// Append every debate event to this JSONL file
    #[arg(long, value_name = "PATH")]
    pub transcript: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Address to bind (overrides [server].bind)
    #[arg(long, value_name = "ADDR")]
    pub bind: Option<String>,

    /// Port to listen on (overrides [server].port)
    #[arg(long)]
    pub port: Option<u16>,
}
