//! Console output formatter for debate results

use colored::{ColoredString, Colorize};
use crossfire_domain::{DebateResult, DebateStatus, FinalStatus, OutputFormat, Role, Turn};

/// Formats debate results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a result in the requested output format
    pub fn render(result: &DebateResult, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => Self::format(result),
            OutputFormat::Draft => Self::format_draft_only(result),
            OutputFormat::Json => Self::format_json(result),
        }
    }

    /// Format the complete debate: transcript, final draft and sources
    pub fn format(result: &DebateResult) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Crossfire Debate"));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n",
            "Prompt:".cyan().bold(),
            result.prompt
        ));

        output.push_str(&Self::section_header("Transcript"));
        for turn in &result.transcript {
            output.push('\n');
            output.push_str(&Self::format_turn(turn));
            output.push('\n');
        }

        output.push_str(&Self::section_header("Final Draft"));
        output.push('\n');
        if result.final_draft.is_empty() {
            output.push_str(&format!("{}\n", "(no draft was produced)".dimmed()));
        } else {
            output.push_str(&result.final_draft);
            output.push('\n');
        }

        output.push_str(&Self::sources(&result.sources));

        output.push_str(&format!(
            "\n{} {}   {} {}\n",
            "Status:".cyan().bold(),
            Self::final_status(result.final_status),
            "Iterations:".cyan().bold(),
            result.total_iterations
        ));

        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(result: &DebateResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the final draft only (concise output)
    pub fn format_draft_only(result: &DebateResult) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{} {}\n\n",
            "=== Final Draft ===".cyan().bold(),
            Self::final_status(result.final_status)
        ));

        output.push_str(&result.final_draft);
        output.push('\n');
        output.push_str(&Self::sources(&result.sources));

        output
    }

    /// Format one transcript turn with its heading line
    pub fn format_turn(turn: &Turn) -> String {
        let heading = format!(
            "── {} · iteration {} · {} ──",
            turn.role, turn.iteration, turn.agent_label
        );
        let heading = match (turn.role, turn.status) {
            (_, DebateStatus::Error) => heading.as_str().red().bold(),
            (Role::Proposer, _) => heading.as_str().yellow().bold(),
            (Role::Challenger, _) => heading.as_str().magenta().bold(),
        };

        let mut output = heading.to_string();
        if turn.status != DebateStatus::Ongoing {
            output.push_str(&format!(" [{}]", Self::turn_status(turn.status)));
        }
        output.push('\n');
        output.push_str(&Self::indent(&turn.content, "  "));
        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    fn sources(sources: &[String]) -> String {
        if sources.is_empty() {
            return String::new();
        }
        let mut output = format!("\n{}\n", "Sources:".cyan().bold());
        for source in sources {
            output.push_str(&format!("  * {}\n", source));
        }
        output
    }

    fn final_status(status: FinalStatus) -> ColoredString {
        match status {
            FinalStatus::Ready => status.as_str().green().bold(),
            FinalStatus::MaxIterations => status.as_str().yellow().bold(),
        }
    }

    fn turn_status(status: DebateStatus) -> ColoredString {
        match status {
            DebateStatus::Ready => status.as_str().green(),
            DebateStatus::Error => status.as_str().red(),
            _ => status.as_str().normal(),
        }
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
