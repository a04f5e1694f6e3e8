//! Loading summary requests from JSON.
use anyhow::{Context, Result};
use log::debug;
use shared::DiscordSummaryInput;
use std::io::Read;
use std::path::Path;

pub fn parse_summary_input(json: &str) -> Result<DiscordSummaryInput> {
    serde_json::from_str(json).context("Failed to parse summary input JSON")
}

/// Read a request from `path`, or from stdin when no path is given
pub fn load_summary_input(path: Option<&Path>) -> Result<DiscordSummaryInput> {
    let json = match path {
        Some(path) => {
            debug!("Reading summary input from {}", path.display());
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read summary input from {}", path.display()))?
        }
        None => {
            debug!("Reading summary input from stdin");
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read summary input from stdin")?;
            buffer
        }
    };
    parse_summary_input(&json)
}
