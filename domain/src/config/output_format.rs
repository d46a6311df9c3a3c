//! Output format value object

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Output format for debate results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Full transcript followed by the final draft (default)
    #[default]
    Full,
    /// Only the final draft and its sources
    Draft,
    /// JSON output
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "full" => Ok(Self::Full),
            "draft" => Ok(Self::Draft),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format: {}", other)),
        }
    }
}
