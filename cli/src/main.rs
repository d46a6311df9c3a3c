//! CLI entrypoint for crossfire
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use colored::Colorize;
use crossfire_application::{
    DebateParams, DebateParticipant, EventSink, FanoutSink, RunDebateError, RunDebateInput,
    RunDebateUseCase,
};
use crossfire_domain::{DebateRequest, OutputFormat, Role};
use crossfire_infrastructure::{
    ConfigLoader, FileConfig, JsonlEventLog, SystemPromptLoader, build_agent,
};
use crossfire_presentation::{
    AppState, BasicAuth, Cli, Command, ConsoleFormatter, OutputConfig, ProgressReporter, RunArgs,
    ServeArgs, ServerConfig,
};
use std::path::Path;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };
    check_config(&config)?;

    let Some(command) = cli.command else {
        bail!("No command given. Try `crossfire run <PROMPT>` or `crossfire serve`.");
    };

    // === Dependency Injection ===
    let params = config.debate.to_params();
    let use_case = build_use_case(&config)?;

    match command {
        Command::Run(args) => run(args, &config, params, use_case).await,
        Command::Serve(args) => serve(args, &config, params, use_case).await,
    }
}

fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    // RUST_LOG wins over -v
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let Some(file_name) = path.file_name() else {
        bail!("--log-file must name a file: {}", path.display());
    };
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(Some(guard))
}

/// Log warnings, refuse to start on errors
fn check_config(config: &FileConfig) -> Result<()> {
    let issues = config.validate();

    for issue in issues.iter().filter(|issue| !issue.is_error()) {
        warn!("{}", issue.message);
    }

    let errors: Vec<&str> = issues
        .iter()
        .filter(|issue| issue.is_error())
        .map(|issue| issue.message.as_str())
        .collect();
    if !errors.is_empty() {
        bail!("Invalid configuration:\n  - {}", errors.join("\n  - "));
    }

    Ok(())
}

fn build_use_case(config: &FileConfig) -> Result<RunDebateUseCase> {
    let participant = |role: Role| -> Result<DebateParticipant> {
        let agent = build_agent(config, role)
            .with_context(|| format!("Failed to set up the {} agent", role))?;
        let system_prompt = SystemPromptLoader::load(config, role)?;
        info!(role = %role, agent = agent.label(), "Agent ready");
        Ok(DebateParticipant::new(agent, system_prompt))
    };

    Ok(RunDebateUseCase::new(
        participant(Role::Proposer)?,
        participant(Role::Challenger)?,
    ))
}

async fn run(
    args: RunArgs,
    config: &FileConfig,
    params: DebateParams,
    use_case: RunDebateUseCase,
) -> Result<()> {
    let max_iterations = args
        .max_iterations
        .unwrap_or(params.default_max_iterations);
    let request = DebateRequest::new(args.prompt).with_max_iterations(max_iterations);
    request.validate()?;

    let output = OutputConfig {
        format: args.output.or(config.output.format).unwrap_or_default(),
        color: config.output.color,
    };
    if !output.color {
        colored::control::set_override(false);
    }

    // Progress goes to stdout, so JSON output stays clean without it
    let reporter = (!args.quiet && output.format != OutputFormat::Json).then(|| {
        ProgressReporter::new(request.max_iterations)
            .with_labels(use_case.proposer().label(), use_case.challenger().label())
    });
    let event_log = args
        .transcript
        .or_else(|| config.logging.transcript_path(chrono::Local::now()))
        .and_then(JsonlEventLog::new);

    let mut sinks = FanoutSink::new(Vec::new());
    if let Some(reporter) = &reporter {
        sinks.push(reporter as &dyn EventSink);
    }
    if let Some(log) = &event_log {
        sinks.push(log as &dyn EventSink);
    }

    let token = CancellationToken::new();
    tokio::spawn({
        let token = token.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("Interrupted, cancelling debate");
                token.cancel();
            }
        }
    });

    let input = RunDebateInput::from(request).with_cancellation(token.clone());
    let result =
        match tokio::time::timeout(params.run_timeout, use_case.execute_with_sink(input, &sinks))
            .await
        {
            Ok(Ok(result)) => result,
            Ok(Err(RunDebateError::Cancelled)) => bail!("Debate cancelled"),
            Err(_) => {
                token.cancel();
                bail!(
                    "Debate exceeded the {}s time limit",
                    params.run_timeout.as_secs()
                );
            }
        };

    info!(
        status = %result.final_status,
        iterations = result.total_iterations,
        draft_len = result.final_draft.len(),
        "Debate finished"
    );
    if let Some(log) = &event_log {
        info!(path = %log.path().display(), "Transcript written");
    }

    println!("{}", ConsoleFormatter::render(&result, output.format));

    Ok(())
}

async fn serve(
    args: ServeArgs,
    config: &FileConfig,
    params: DebateParams,
    use_case: RunDebateUseCase,
) -> Result<()> {
    let server = &config.server;
    let mut server_config = ServerConfig {
        bind: args.bind.unwrap_or_else(|| server.bind.clone()),
        port: args.port.unwrap_or(server.port),
        cors_origins: server.cors_origins.clone(),
        auth: None,
    };
    if let Some(password) = server
        .auth
        .password
        .as_deref()
        .filter(|_| server.auth.is_active())
    {
        server_config = server_config.with_auth(BasicAuth::new(&server.auth.username, password));
    }

    println!(
        "{} Debate API on http://{}/api ({} vs {})",
        "->".cyan(),
        server_config.address(),
        use_case.proposer().label().yellow(),
        use_case.challenger().label().magenta()
    );

    crossfire_presentation::serve(
        AppState::new(use_case, params),
        server_config,
        shutdown_signal(),
    )
    .await
    .context("Debate API failed")
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutting down"),
        Err(e) => {
            warn!(error = %e, "Cannot listen for Ctrl-C, serving until killed");
            std::future::pending::<()>().await;
        }
    }
}
