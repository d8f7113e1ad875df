//! Reference-size resolution
//!
//! Reference documents (man pages, design notes) are identified by URL and
//! their byte sizes come from the catalog's [`SizeIndex`]. A missing entry
//! means the snapshot is out of sync and is reported, never read as zero.
//!
//! [`SizeIndex`]: crate::models::SizeIndex

use crate::catalog::Catalog;
use crate::error::{CatalogError, EntityKind, Result};
use crate::models::Article;
use std::collections::BTreeSet;
use tracing::trace;

impl Catalog {
    /// Byte size of a single reference document
    pub fn size_of(&self, url: &str) -> Result<u64> {
        let url = url.trim();
        self.sizes()
            .get(url)
            .ok_or_else(|| CatalogError::not_found(EntityKind::Reference, url))
    }

    /// Cumulative size of all references for a subsystem
    pub fn subsystem_reference_size(&self, name: &str) -> Result<u64> {
        let subsystem = self.resolve_subsystem(Some(name))?;
        let mut bytes = 0u64;
        for source in &subsystem.sources {
            bytes += self.size_of(source)?;
        }
        Ok(bytes)
    }

    /// Mean reference size over the distinct subsystems that `articles`
    /// use under system `name`.
    ///
    /// Each subsystem counts once however many examples use it. A system
    /// with no examples has nothing to average and is rejected.
    pub fn system_reference_size(&self, articles: &[Article], name: &str) -> Result<f64> {
        let used: BTreeSet<&str> = articles
            .iter()
            .filter(|a| a.system_name() == Some(name))
            .filter_map(|a| a.subsystem_name())
            .collect();

        if used.is_empty() {
            return Err(CatalogError::Degenerate {
                key: name.to_string(),
            });
        }

        let mut bytes = 0u64;
        for subsystem in &used {
            bytes += self.subsystem_reference_size(subsystem)?;
        }
        trace!(system = name, subsystems = used.len(), bytes, "system reference size");
        Ok(bytes as f64 / used.len() as f64)
    }
}
