//! `secflops show` command - one example in detail

use anyhow::{Context, Result};
use console::style;
use secflops::attestation::article_attestations;
use secflops::config::ProjectConfig;
use secflops::detail::{describe, find_article};
use std::path::Path;

use super::load;

/// Run the `secflops show` command.
pub fn run(data: &Path, config: &ProjectConfig, base: &str, json: bool) -> Result<()> {
    let (catalog, articles) = load(data)?;

    let Some(article) = find_article(&articles, base) else {
        anyhow::bail!(
            "No example named '{}'. Run {} to list them.",
            base,
            style("secflops table").cyan()
        );
    };

    let detail = describe(&catalog, article, &config.links.example_base)
        .with_context(|| format!("Failed to resolve example {base}"))?;
    let attestations = article_attestations(article, &config.attestations);

    if json {
        let value = serde_json::json!({
            "detail": detail,
            "attestations": attestations,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!();
    println!("  {}", style(&detail.base).bold());
    println!("  {}", "\u{2500}".repeat(60));

    match &detail.system {
        Some(system) => println!("  System:     {}", system.name),
        None => println!("  System:     {}", style("any").dim()),
    }
    let deprecated = if detail.deprecated {
        format!(" {}", style("(deprecated)").yellow())
    } else {
        String::new()
    };
    println!("  Sandbox:    {}{}", detail.subsystem.name, deprecated);
    if let Some(href) = &detail.subsystem.href {
        println!("              {}", style(href).dim());
    }
    println!("  Language:   {}", detail.lang.as_deref().unwrap_or("-"));
    println!("  Lines:      {}", detail.lines);
    println!("  Source:     {}", style(&detail.source_link).cyan());

    println!();
    println!("  References");
    if detail.references.is_empty() {
        println!("    {}", style("No references given.").dim());
    }
    for reference in &detail.references {
        println!(
            "    {:>5} KB  {}",
            reference.kilobytes(),
            style(&reference.url).dim()
        );
    }

    if !attestations.is_empty() {
        println!();
        println!("  Used by ({})", attestations.len());
        for url in &attestations {
            println!("    {}", style(url).dim());
        }
    }

    println!();
    println!("  {}", detail.notes_text());
    println!();

    Ok(())
}
