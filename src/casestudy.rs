//! Case studies: real repositories that adopted a sandbox
//!
//! A case study is named after the subsystem it adopted, so its reference
//! size is that subsystem's. Its source size and commit history come from
//! the separate case-study size table.

use crate::catalog::Catalog;
use crate::error::{CatalogError, EntityKind, Result};
use crate::models::CaseStudySize;
use crate::ranking::{sort_ranked, Ranked};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseStudyEntry {
    pub key: String,
    pub url: String,
    pub source_lines: u64,
    pub ref_bytes: u64,
}

impl Ranked for CaseStudyEntry {
    fn key(&self) -> &str {
        &self.key
    }

    fn source_size(&self) -> f64 {
        self.source_lines as f64
    }

    fn reference_size(&self) -> f64 {
        self.ref_bytes as f64
    }
}

/// One commit in a cumulative history line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryPoint {
    pub at: DateTime<Utc>,
    /// Commits before this one
    pub commits: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseStudyHistory {
    pub key: String,
    pub points: Vec<HistoryPoint>,
}

/// Size entry of a case study's repository
pub(crate) fn size_for<'a>(catalog: &'a Catalog, url: &str) -> Result<&'a CaseStudySize> {
    catalog
        .case_study_sizes()
        .results
        .get(url)
        .ok_or_else(|| CatalogError::not_found(EntityKind::CaseStudy, url))
}

/// Case studies ordered like the subsystem ranking
pub fn rank_case_studies(catalog: &Catalog) -> Result<Vec<CaseStudyEntry>> {
    let mut entries = Vec::new();
    for (key, url) in catalog.case_studies() {
        entries.push(CaseStudyEntry {
            key: key.to_string(),
            url: url.to_string(),
            source_lines: size_for(catalog, url)?.lines,
            ref_bytes: catalog.subsystem_reference_size(key)?,
        });
    }
    sort_ranked(&mut entries);
    Ok(entries)
}

/// Accepts RFC 3339 timestamps and bare `YYYY-MM-DD` dates (midnight UTC)
pub fn parse_history_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// Cumulative commit lines, one per case study, in dataset order
pub fn case_study_histories(catalog: &Catalog) -> Result<Vec<CaseStudyHistory>> {
    let mut histories = Vec::new();
    for (key, url) in catalog.case_studies() {
        let size = size_for(catalog, url)?;
        let mut points = Vec::with_capacity(size.history.len());
        for (commits, date) in size.history.iter().enumerate() {
            let at = parse_history_date(date).ok_or_else(|| CatalogError::InvalidDate {
                key: key.to_string(),
                value: date.clone(),
            })?;
            points.push(HistoryPoint {
                at,
                commits: commits as u64,
            });
        }
        histories.push(CaseStudyHistory {
            key: key.to_string(),
            points,
        });
    }
    Ok(histories)
}
