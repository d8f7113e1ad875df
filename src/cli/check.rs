//! `secflops check` command - validate every key in a snapshot

use anyhow::Result;
use console::style;
use secflops::check::check;
use std::path::Path;

use super::load;

/// Run the `secflops check` command. Fails when any problem is found.
pub fn run(data: &Path) -> Result<()> {
    let (catalog, articles) = load(data)?;
    let report = check(&catalog, &articles);

    println!(
        "\n  Checked {} examples and {} references",
        report.articles_checked, report.references_checked
    );

    if report.is_clean() {
        println!("  {} No problems found\n", style("✓").green());
        return Ok(());
    }

    println!();
    for problem in &report.problems {
        println!(
            "  {} {}: {}",
            style("✗").red(),
            style(&problem.location).bold(),
            problem.error
        );
    }
    println!();

    anyhow::bail!(
        "{} problem(s) in {}",
        report.problems.len(),
        data.display()
    );
}
