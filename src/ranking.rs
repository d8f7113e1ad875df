//! Ranking of tallied groups
//!
//! Each group becomes a [`RankedEntry`] pairing its mean example size with
//! its reference size. Groups are ordered by the product of the two,
//! smallest first, so "small code, small docs" sandboxes lead the list.
//! Equal products fall back to source size, then reference size, then the
//! key. A group without references has a product of zero, so its source
//! size still decides where it lands among the others.

use crate::aggregate::{Tallies, Tally};
use crate::catalog::Catalog;
use crate::error::{CatalogError, Result};
use crate::models::Article;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Anything that can be placed on the source-vs-reference ranking
pub trait Ranked {
    fn key(&self) -> &str;

    /// Mean (or total) source lines
    fn source_size(&self) -> f64;

    /// Reference bytes
    fn reference_size(&self) -> f64;

    /// Combined magnitude; lower ranks first
    fn score(&self) -> f64 {
        self.source_size() * self.reference_size()
    }
}

/// Sort ascending by score, then source size, reference size and key
pub fn sort_ranked<T: Ranked>(entries: &mut [T]) {
    entries.sort_by(|a, b| {
        a.score()
            .total_cmp(&b.score())
            .then_with(|| a.source_size().total_cmp(&b.source_size()))
            .then_with(|| a.reference_size().total_cmp(&b.reference_size()))
            .then_with(|| a.key().cmp(b.key()))
    });
}

/// Summary of one system or subsystem, ready for presentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub key: String,
    /// Mean lines per example
    pub source_avg: f64,
    /// Reference size in bytes (a mean for systems)
    pub ref_bytes: f64,
    pub user_count: u64,
}

impl Ranked for RankedEntry {
    fn key(&self) -> &str {
        &self.key
    }

    fn source_size(&self) -> f64 {
        self.source_avg
    }

    fn reference_size(&self) -> f64 {
        self.ref_bytes
    }
}

/// Turn tallies into sorted entries, sizing each group with `ref_size`
pub fn rank<F>(tallies: &BTreeMap<String, Tally>, mut ref_size: F) -> Result<Vec<RankedEntry>>
where
    F: FnMut(&str) -> Result<f64>,
{
    let mut entries = Vec::with_capacity(tallies.len());
    for (key, tally) in tallies {
        let source_avg = tally
            .source_average()
            .ok_or_else(|| CatalogError::Degenerate { key: key.clone() })?;
        entries.push(RankedEntry {
            key: key.clone(),
            source_avg,
            ref_bytes: ref_size(key)?,
            user_count: tally.users,
        });
    }
    sort_ranked(&mut entries);
    Ok(entries)
}

pub fn rank_subsystems(catalog: &Catalog, tallies: &Tallies) -> Result<Vec<RankedEntry>> {
    rank(&tallies.subsystems, |key| {
        catalog.subsystem_reference_size(key).map(|bytes| bytes as f64)
    })
}

/// Systems are sized by the mean of their distinct subsystems, which needs
/// the articles again
pub fn rank_systems(
    catalog: &Catalog,
    articles: &[Article],
    tallies: &Tallies,
) -> Result<Vec<RankedEntry>> {
    rank(&tallies.systems, |key| {
        catalog.system_reference_size(articles, key)
    })
}
