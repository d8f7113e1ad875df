//! `secflops scatter` command - source lines against reference size

use anyhow::{Context, Result};
use console::style;
use secflops::scatter::scatter_series;
use std::path::Path;

use super::load;

/// Run the `secflops scatter` command.
pub fn run(data: &Path, json: bool) -> Result<()> {
    let (catalog, articles) = load(data)?;
    let series = scatter_series(&catalog, &articles)
        .with_context(|| format!("Failed to build scatter series from {}", data.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&series)?);
        return Ok(());
    }

    for set in &series {
        if set.points.is_empty() {
            continue;
        }
        println!();
        println!("  {}", style(&set.subsystem).bold());
        for point in &set.points {
            println!(
                "    {:<32} {:>6} lines  {:>8} bytes  {}",
                point.base,
                point.lines,
                point.ref_bytes,
                style(point.lang.as_deref().unwrap_or("-")).dim()
            );
        }
    }
    println!();

    Ok(())
}
