//! CLI command definitions and handlers

mod casestudy;
mod check;
mod init;
mod scatter;
mod show;
mod summary;
mod table;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use secflops::config::{load_project_config, ProjectConfig};
use secflops::{Article, Catalog, Snapshot};
use std::path::{Path, PathBuf};

/// Snapshot read when neither --data nor the config names one
const DEFAULT_DATA: &str = "data.json";

/// secflops - how much code does a sandbox take?
#[derive(Parser, Debug)]
#[command(name = "secflops")]
#[command(
    version,
    about = "Rollups over a catalog of sandboxing code examples: source size vs. reference size and attestations",
    long_about = "secflops reads a snapshot of sandboxing code examples (pledge, capsicum, \
seccomp, ...) and ranks operating systems and sandboxes by how much example code \
and how much reference documentation they need.\n\n\
Run without a subcommand to print the summary:\n  \
secflops --data data.json",
    after_help = "\
Examples:
  secflops --data data.json                 Ranked summary
  secflops summary --format json            JSON output for scripting
  secflops table --sort lines --descending  Longest examples first
  secflops show openbsd-pledge-c            Details for one example
  secflops check                            Validate the snapshot"
)]
pub struct Cli {
    /// Dataset snapshot (default: data.json, or [defaults] data in secflops.toml)
    #[arg(long, short = 'd', global = true, env = "SECFLOPS_DATA")]
    pub data: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rank systems and sandboxes by source and reference size
    #[command(after_help = "\
Examples:
  secflops summary                           Terminal output
  secflops summary --format markdown -o r.md Markdown report
  secflops summary --top 5                   Only the five smallest groups")]
    Summary {
        /// Output format: text, json, markdown (or md)
        #[arg(long, short = 'f', value_parser = ["text", "json", "markdown", "md"])]
        format: Option<String>,

        /// Output file path (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Show only the first N systems and sandboxes
        #[arg(long)]
        top: Option<usize>,

        /// Aggregate with multiple threads
        #[arg(long)]
        parallel: bool,
    },

    /// List the examples as a sorted table
    Table {
        /// Column to sort by: system, subsystem, lang, lines
        #[arg(long, short = 's')]
        sort: Option<String>,

        /// Sort descending
        #[arg(long)]
        descending: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show everything known about one example
    Show {
        /// Example base name (e.g. openbsd-pledge-c)
        base: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Per-example points: source lines vs. subsystem reference size
    Scatter {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Case-study repositories: ranking and commit history
    Casestudy {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate the snapshot, reporting every missing key
    Check,

    /// Write an example secflops.toml in the current directory
    Init,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let config = load_project_config(Path::new("."));
    let data = cli
        .data
        .clone()
        .or_else(|| config.defaults.data.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA));

    match cli.command {
        None => summary::run(&data, &config, None, None, None, false),

        Some(Commands::Summary {
            format,
            output,
            top,
            parallel,
        }) => summary::run(&data, &config, format, output.as_deref(), top, parallel),

        Some(Commands::Table {
            sort,
            descending,
            json,
        }) => table::run(&data, &config, sort.as_deref(), descending, json),

        Some(Commands::Show { base, json }) => show::run(&data, &config, &base, json),

        Some(Commands::Scatter { json }) => scatter::run(&data, json),

        Some(Commands::Casestudy { json }) => casestudy::run(&data, json),

        Some(Commands::Check) => check::run(&data),

        Some(Commands::Init) => init::run(Path::new(".")),
    }
}

/// Load the snapshot and split it into lookup tables and examples
fn load(path: &Path) -> Result<(Catalog, Vec<Article>)> {
    let snapshot = Snapshot::load(path)
        .with_context(|| format!("Failed to load dataset {}", path.display()))?;
    Ok(snapshot.into_parts())
}

/// --top from the command line, else `[defaults] top`
pub(crate) fn effective_top(config: &ProjectConfig, top: Option<usize>) -> Option<usize> {
    top.or(config.defaults.top)
}
