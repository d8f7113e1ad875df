//! `secflops table` command - every example, sorted by one column

use anyhow::{Context, Result};
use console::style;
use secflops::config::ProjectConfig;
use secflops::table::{sorted_view, table_rows, LineBand, SortField, SortState, TableRow};
use std::path::Path;

use super::load;

/// Flags override `[defaults] sort` and `[defaults] descending`.
fn sort_state(config: &ProjectConfig, sort: Option<&str>, descending: bool) -> Result<SortState> {
    let base = config.sort_state();
    let field = match sort {
        Some(s) => s.parse::<SortField>()?,
        None => base.field,
    };
    let ascending = base.ascending && !descending;
    Ok(SortState::new(field, ascending))
}

/// Run the `secflops table` command.
pub fn run(
    data: &Path,
    config: &ProjectConfig,
    sort: Option<&str>,
    descending: bool,
    json: bool,
) -> Result<()> {
    let state = sort_state(config, sort, descending)?;
    let (catalog, articles) = load(data)?;
    let view = sorted_view(&articles, state);
    let rows = table_rows(&catalog, &view)
        .with_context(|| format!("Failed to resolve examples in {}", data.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if rows.is_empty() {
        println!("No examples found.");
        return Ok(());
    }

    println!();
    println!(
        "  {:<32} {:<12} {:<16} {:<8} {:>6}",
        "Example", "System", "Sandbox", "Lang", "Lines"
    );
    println!("  {}", "\u{2500}".repeat(78));

    for row in &rows {
        print_row(row);
    }

    println!();
    println!(
        "  {} examples sorted by {} ({})",
        rows.len(),
        state.field,
        if state.ascending { "ascending" } else { "descending" }
    );

    Ok(())
}

fn print_row(row: &TableRow<'_>) {
    let system = row.system.map(|s| s.name.as_str()).unwrap_or("-");
    let sandbox = if row.subsystem.is_deprecated() {
        style(format!("{:<16}", row.subsystem.name)).dim()
    } else {
        style(format!("{:<16}", row.subsystem.name))
    };
    let lines = match row.band {
        LineBand::TooMany => style(format!("{:>6}", row.lines)).red(),
        LineBand::Many => style(format!("{:>6}", row.lines)).yellow(),
        LineBand::Ok => style(format!("{:>6}", row.lines)).green(),
    };

    println!(
        "  {:<32} {:<12} {} {:<8} {}",
        row.base,
        system,
        sandbox,
        row.lang.unwrap_or("-"),
        lines
    );
}
