//! Project-level configuration support
//!
//! Loads configuration from `secflops.toml` or `.secflopsrc.json` in the
//! working directory.
//!
//! # Configuration Format
//!
//! ```toml
//! # secflops.toml
//!
//! [attestations]
//! github = "https://github.com/"
//! openbsd = "https://github.com/openbsd/src/tree/master/"
//!
//! [links]
//! example_base = "https://github.com/kristapsdz/dev_sec_flops/blob/main/"
//!
//! [defaults]
//! data = "data.json"
//! format = "text"
//! sort = "lines"
//! descending = false
//! top = 10
//! parallel = false
//! ```

use crate::attestation::AttestationBases;
use crate::detail::EXAMPLE_BASE;
use crate::table::{SortField, SortState};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File names searched for, in order
pub const CONFIG_FILES: &[&str] = &["secflops.toml", ".secflopsrc.json"];

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ProjectConfig {
    /// Base URLs for relative attestation targets
    #[serde(default)]
    pub attestations: AttestationBases,

    #[serde(default)]
    pub links: LinkConfig,

    /// Default CLI flags
    #[serde(default)]
    pub defaults: CliDefaults,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LinkConfig {
    /// Prefix for example source links; `<base>.md` is appended
    #[serde(default = "default_example_base")]
    pub example_base: String,
}

fn default_example_base() -> String {
    EXAMPLE_BASE.to_string()
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            example_base: default_example_base(),
        }
    }
}

/// Default CLI flags that can be set in project config
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CliDefaults {
    /// Snapshot file to read
    #[serde(default)]
    pub data: Option<PathBuf>,

    /// Default output format (text, json, markdown)
    #[serde(default)]
    pub format: Option<String>,

    /// Default table sort column
    #[serde(default)]
    pub sort: Option<String>,

    /// Sort the table descending by default
    #[serde(default)]
    pub descending: Option<bool>,

    /// Default number of ranked groups to show
    #[serde(default)]
    pub top: Option<usize>,

    /// Aggregate with rayon
    #[serde(default)]
    pub parallel: Option<bool>,
}

impl ProjectConfig {
    /// Table sort state from the defaults; an unknown column falls back
    /// to the default state with a warning
    pub fn sort_state(&self) -> SortState {
        let ascending = !self.defaults.descending.unwrap_or(false);
        match self.defaults.sort.as_deref().map(str::parse::<SortField>) {
            Some(Ok(field)) => SortState::new(field, ascending),
            Some(Err(e)) => {
                warn!("Ignoring default sort: {}", e);
                SortState {
                    ascending,
                    ..SortState::default()
                }
            }
            None => SortState {
                ascending,
                ..SortState::default()
            },
        }
    }

    pub fn parallel(&self) -> bool {
        self.defaults.parallel.unwrap_or(false)
    }
}

/// Load project configuration from `dir`.
///
/// Searches [`CONFIG_FILES`] in order and uses the first that parses. A
/// file that fails to parse is skipped with a warning.
pub fn load_project_config(dir: &Path) -> ProjectConfig {
    let toml_path = dir.join(CONFIG_FILES[0]);
    if toml_path.exists() {
        match load_toml_config(&toml_path) {
            Ok(config) => {
                debug!("Loaded project config from {}", toml_path.display());
                return config;
            }
            Err(e) => {
                warn!("Failed to load {}: {}", toml_path.display(), e);
            }
        }
    }

    let json_path = dir.join(CONFIG_FILES[1]);
    if json_path.exists() {
        match load_json_config(&json_path) {
            Ok(config) => {
                debug!("Loaded project config from {}", json_path.display());
                return config;
            }
            Err(e) => {
                warn!("Failed to load {}: {}", json_path.display(), e);
            }
        }
    }

    debug!("No project config found, using defaults");
    ProjectConfig::default()
}

fn load_toml_config(path: &Path) -> anyhow::Result<ProjectConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: ProjectConfig = toml::from_str(&content)?;
    Ok(config)
}

fn load_json_config(path: &Path) -> anyhow::Result<ProjectConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: ProjectConfig = serde_json::from_str(&content)?;
    Ok(config)
}

/// Example configuration written by `secflops init`
pub const EXAMPLE_CONFIG: &str = r#"# secflops configuration

[attestations]
# Prepended to relative targets in githubAttestations
github = "https://github.com/"
# Prepended to relative targets in openbsdAttestations
openbsd = "https://github.com/openbsd/src/tree/master/"

[links]
# Where example sources are published; "<base>.md" is appended
example_base = "https://github.com/kristapsdz/dev_sec_flops/blob/main/"

[defaults]
# data = "data.json"
# format = "text"       # text, json, markdown
# sort = "subsystem"    # system, subsystem, lang, lines
# descending = false
# top = 10
# parallel = false
"#;

#[cfg(test)]
mod tests;
