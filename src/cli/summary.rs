//! `secflops summary` command - ranked rollups in text, JSON or Markdown

use anyhow::{Context, Result};
use console::style;
use secflops::config::ProjectConfig;
use secflops::reporters::{self, OutputFormat};
use secflops::summary::{summarize, SummaryOptions};
use std::path::Path;
use std::str::FromStr;

use super::{effective_top, load};

/// Run the `secflops summary` command.
pub fn run(
    data: &Path,
    config: &ProjectConfig,
    format: Option<String>,
    output: Option<&Path>,
    top: Option<usize>,
    parallel: bool,
) -> Result<()> {
    let format = format
        .or_else(|| config.defaults.format.clone())
        .unwrap_or_else(|| "text".to_string());
    let format = OutputFormat::from_str(&format)?;

    let (catalog, articles) = load(data)?;
    let opts = SummaryOptions {
        bases: config.attestations.clone(),
        parallel: parallel || config.parallel(),
    };
    let mut summary = summarize(&catalog, &articles, &opts)
        .with_context(|| format!("Failed to summarize {}", data.display()))?;

    if let Some(n) = effective_top(config, top) {
        summary.truncate(n);
    }

    let rendered = reporters::report_with_format(&summary, format)?;

    match output {
        Some(path) => {
            let path = if path.extension().is_none() {
                path.with_extension(reporters::file_extension(format))
            } else {
                path.to_path_buf()
            };
            std::fs::write(&path, &rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!(
                "{} Wrote {} report to {}",
                style("✓").green(),
                format,
                style(path.display()).cyan()
            );
        }
        None => print!("{rendered}"),
    }

    Ok(())
}
