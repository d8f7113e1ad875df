//! Loading the pre-built dataset snapshot
//!
//! The snapshot is a single JSON document produced by the dataset build:
//!
//! ```json
//! {
//!   "systems": { "openbsd": { "name": "OpenBSD", "link": "https://www.openbsd.org" } },
//!   "subsystems": { "pledge": { "deprecated": null, "sources": ["https://man.openbsd.org/pledge.2"] } },
//!   "subsystemSizes": { "fetched": "2023-01-01", "results": { "https://man.openbsd.org/pledge.2": 12000 } },
//!   "articles": [ { "base": "openbsd-pledge-c", "subsystem": "pledge", "system": "openbsd", "lines": "12" } ],
//!   "casestudy": {},
//!   "casestudySizes": { "results": {} }
//! }
//! ```

use crate::catalog::Catalog;
use crate::error::{CatalogError, Result};
use crate::models::{Article, CaseStudySizes, SizeIndex, SubsystemDescriptor, SystemDescriptor};
use serde::{Deserialize, Serialize};
use indexmap::IndexMap;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default)]
    pub systems: IndexMap<String, SystemDescriptor>,
    #[serde(default)]
    pub subsystems: IndexMap<String, SubsystemDescriptor>,
    #[serde(default)]
    pub subsystem_sizes: SizeIndex,
    #[serde(default)]
    pub articles: Vec<Article>,
    #[serde(default)]
    pub casestudy: IndexMap<String, String>,
    #[serde(default)]
    pub casestudy_sizes: CaseStudySizes,
}

impl Snapshot {
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let snapshot = Self::from_json_str(&content)?;
        debug!(
            "Loaded snapshot from {}: {} examples, {} subsystems, {} systems",
            path.display(),
            snapshot.articles.len(),
            snapshot.subsystems.len(),
            snapshot.systems.len()
        );
        Ok(snapshot)
    }

    /// Split into the read-only lookup tables and the example list
    pub fn into_parts(self) -> (Catalog, Vec<Article>) {
        let catalog = Catalog::new(self.systems, self.subsystems, self.subsystem_sizes)
            .with_case_studies(self.casestudy, self.casestudy_sizes);
        (catalog, self.articles)
    }
}
