//! Markdown reporter for GitHub-flavored Markdown output
//!
//! Generates reports suitable for:
//! - README files
//! - Pull request comments
//! - Project wikis

use super::kilobytes;
use crate::ranking::RankedEntry;
use crate::summary::Summary;
use anyhow::Result;
use chrono::Local;

/// Render summary as GitHub-flavored Markdown
pub fn render(summary: &Summary) -> Result<String> {
    let mut md = String::new();

    md.push_str(&render_header(summary));
    md.push('\n');

    md.push_str(&render_toc());
    md.push('\n');

    md.push_str(&render_ranking(
        "Systems",
        "System",
        "Average references",
        &summary.systems,
    ));
    md.push('\n');

    md.push_str(&render_ranking(
        "Subsystems",
        "Sandbox",
        "References",
        &summary.subsystems,
    ));
    md.push('\n');

    md.push_str(&render_case_studies(summary));
    md.push('\n');

    md.push_str(&render_footer(summary));

    Ok(md)
}

fn render_header(summary: &Summary) -> String {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");

    format!(
        r#"# Sandbox Complexity Report

**Examples: {}** | **Lines: {}**

Generated: {}
"#,
        summary.total_examples, summary.total_lines, timestamp
    )
}

fn render_toc() -> String {
    r#"## Table of Contents

- [Systems](#systems)
- [Subsystems](#subsystems)
- [Case Studies](#case-studies)
"#
    .to_string()
}

fn render_ranking(title: &str, column: &str, refs_label: &str, entries: &[RankedEntry]) -> String {
    let mut md = format!("## {title}\n\n");

    if entries.is_empty() {
        md.push_str("*No examples.*\n");
        return md;
    }

    md.push_str(&format!(
        "| # | {column} | Average source lines | {refs_label} | Users |\n"
    ));
    md.push_str("|---|--------|------|------|------|\n");
    for (i, entry) in entries.iter().enumerate() {
        md.push_str(&format!(
            "| {} | `{}` | {:.1} | {} | {} |\n",
            i + 1,
            entry.key,
            entry.source_avg,
            kilobytes(entry.ref_bytes),
            entry.user_count
        ));
    }
    md
}

fn render_case_studies(summary: &Summary) -> String {
    let mut md = String::from("## Case Studies\n\n");

    if summary.case_studies.is_empty() {
        md.push_str("*No case studies.*\n");
        return md;
    }

    md.push_str("| Sandbox | Repository | Source lines | References |\n");
    md.push_str("|--------|------|------|------|\n");
    for study in &summary.case_studies {
        md.push_str(&format!(
            "| `{}` | <{}> | {} | {} |\n",
            study.key,
            study.url,
            study.source_lines,
            kilobytes(study.ref_bytes as f64)
        ));
    }
    md
}

fn render_footer(summary: &Summary) -> String {
    let fetched = summary
        .sizes_fetched
        .as_deref()
        .map(|f| format!(" Reference sizes fetched {f}."))
        .unwrap_or_default();
    format!("---\n\n*Generated by secflops.{fetched}*\n")
}
