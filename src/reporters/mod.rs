//! Output reporters for catalog summaries
//!
//! Supports multiple output formats:
//! - `text` - Terminal output with colors
//! - `json` - Machine-readable JSON
//! - `markdown` - GitHub-flavored Markdown

mod json;
mod markdown;
mod text;

use crate::summary::Summary;
use anyhow::{anyhow, Result};
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Markdown,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(anyhow!(
                "Unknown format '{}'. Valid formats: text, json, markdown",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}

/// Render a summary in the specified format
pub fn report(summary: &Summary, format: &str) -> Result<String> {
    let fmt = OutputFormat::from_str(format)?;
    report_with_format(summary, fmt)
}

/// Render a summary using an OutputFormat enum
pub fn report_with_format(summary: &Summary, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => text::render(summary),
        OutputFormat::Json => json::render(summary),
        OutputFormat::Markdown => markdown::render(summary),
    }
}

/// Get the recommended file extension for a format
pub fn file_extension(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Text => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
    }
}

/// Bytes as whole kilobytes, the unit the charts use
pub(crate) fn kilobytes(bytes: f64) -> String {
    format!("{:.0} KB", bytes / 1000.0)
}
