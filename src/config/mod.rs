//! Configuration module for secflops
//!
//! This module handles:
//! - Project-level configuration (secflops.toml)
//! - Attestation base URLs
//! - CLI defaults

mod project_config;

pub use project_config::{
    load_project_config, CliDefaults, LinkConfig, ProjectConfig, CONFIG_FILES, EXAMPLE_CONFIG,
};
