//! `secflops casestudy` command - case-study repositories and their history

use anyhow::{Context, Result};
use console::style;
use secflops::casestudy::{case_study_histories, rank_case_studies};
use std::path::Path;

use super::load;

/// Run the `secflops casestudy` command.
pub fn run(data: &Path, json: bool) -> Result<()> {
    let (catalog, _) = load(data)?;
    let ranked = rank_case_studies(&catalog).context("Failed to rank case studies")?;
    let histories = case_study_histories(&catalog).context("Failed to read case-study history")?;

    if json {
        let value = serde_json::json!({
            "ranking": ranked,
            "history": histories,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    if ranked.is_empty() {
        println!("No case studies found.");
        return Ok(());
    }

    println!();
    println!(
        "  {:<16} {:>8} {:>10}  {}",
        "Sandbox", "Lines", "Refs", "Repository"
    );
    println!("  {}", "\u{2500}".repeat(72));
    for entry in &ranked {
        println!(
            "  {:<16} {:>8} {:>10}  {}",
            entry.key,
            entry.source_lines,
            entry.ref_bytes,
            style(&entry.url).cyan()
        );
    }

    for history in histories.iter().filter(|h| !h.points.is_empty()) {
        println!();
        println!("  {} history", style(&history.key).bold());
        for point in &history.points {
            println!(
                "    {}  {:>4} commits",
                point.at.format("%Y-%m-%d"),
                point.commits
            );
        }
    }
    println!();

    Ok(())
}
