//! Text (terminal) reporter with colors and formatting

use super::kilobytes;
use crate::ranking::RankedEntry;
use crate::summary::Summary;
use anyhow::Result;

/// Reset ANSI color
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const BLUE: &str = "\x1b[34m";
const RED: &str = "\x1b[91m";

/// Render summary as formatted terminal output
pub fn render(summary: &Summary) -> Result<String> {
    let mut out = String::new();

    // Header
    out.push_str(&format!("\n{BOLD}Sandbox Complexity{RESET}\n"));
    out.push_str(&format!(
        "{DIM}──────────────────────────────────────{RESET}\n"
    ));
    out.push_str(&format!(
        "Examples: {}  Lines: {}  Systems: {}  Sandboxes: {}\n\n",
        summary.total_examples,
        summary.total_lines,
        summary.tallies.systems.len(),
        summary.tallies.subsystems.len()
    ));

    render_ranking(&mut out, "BY OPERATING SYSTEM", &summary.systems);
    render_ranking(&mut out, "BY SANDBOX", &summary.subsystems);

    if !summary.case_studies.is_empty() {
        out.push_str(&format!("{BOLD}CASE STUDIES{RESET}\n"));
        for study in &summary.case_studies {
            out.push_str(&format!(
                "  {:<16} {BLUE}{:>8}{RESET} lines  {RED}{:>8}{RESET}  {DIM}{}{RESET}\n",
                study.key,
                study.source_lines,
                kilobytes(study.ref_bytes as f64),
                study.url
            ));
        }
        out.push('\n');
    }

    if let Some(fetched) = &summary.sizes_fetched {
        out.push_str(&format!("{DIM}Reference sizes fetched {fetched}{RESET}\n"));
    }

    Ok(out)
}

fn render_ranking(out: &mut String, title: &str, entries: &[RankedEntry]) {
    out.push_str(&format!("{BOLD}{title}{RESET}\n"));
    if entries.is_empty() {
        out.push_str(&format!("  {DIM}(none){RESET}\n\n"));
        return;
    }
    out.push_str(&format!(
        "{DIM}  #   NAME              SOURCE    REFERENCES  USERS{RESET}\n"
    ));
    for (i, entry) in entries.iter().enumerate() {
        // chars() so long names cannot split a UTF-8 sequence
        let name: String = entry.key.chars().take(16).collect();
        out.push_str(&format!(
            "  {DIM}{:>3}{RESET} {:<16} {BLUE}{:>8.1}{RESET}  {RED}{:>10}{RESET}  {:>5}\n",
            i + 1,
            name,
            entry.source_avg,
            kilobytes(entry.ref_bytes),
            entry.user_count
        ));
    }
    out.push('\n');
}
