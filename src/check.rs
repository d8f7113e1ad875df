//! Snapshot integrity check
//!
//! The rollups stop at the first missing key. This walks the whole
//! snapshot instead and collects every problem, so a broken dataset build
//! can be fixed in one go.

use crate::casestudy::{parse_history_date, size_for};
use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::models::Article;
use std::collections::BTreeSet;
use tracing::debug;

#[derive(Debug, Default)]
pub struct IntegrityReport {
    pub articles_checked: usize,
    pub references_checked: usize,
    pub problems: Vec<Problem>,
}

/// A problem and where it was found
#[derive(Debug)]
pub struct Problem {
    pub location: String,
    pub error: CatalogError,
}

impl IntegrityReport {
    pub fn is_clean(&self) -> bool {
        self.problems.is_empty()
    }

    fn push(&mut self, location: impl Into<String>, error: CatalogError) {
        self.problems.push(Problem {
            location: location.into(),
            error,
        });
    }
}

pub fn check(catalog: &Catalog, articles: &[Article]) -> IntegrityReport {
    let mut report = IntegrityReport::default();

    for article in articles {
        report.articles_checked += 1;
        let location = format!("example {}", article.base);
        if let Err(e) = catalog.resolve_subsystem(article.subsystem_name()) {
            report.push(location.clone(), e);
        }
        if let Err(e) = catalog.resolve_system(article.system_name()) {
            report.push(location, e);
        }
    }

    // A reference shared by several subsystems is reported under each.
    let mut seen = BTreeSet::new();
    for (key, subsystem) in catalog.subsystems() {
        for source in &subsystem.sources {
            seen.insert(source.trim());
            if let Err(e) = catalog.size_of(source) {
                report.push(format!("subsystem {key}"), e);
            }
        }
    }
    report.references_checked = seen.len();

    for (key, url) in catalog.case_studies() {
        let location = format!("case study {key}");
        if let Err(e) = catalog.resolve_subsystem(Some(key)) {
            report.push(location.clone(), e);
        }
        let size = match size_for(catalog, url) {
            Ok(size) => size,
            Err(e) => {
                report.push(location, e);
                continue;
            }
        };
        for date in &size.history {
            if parse_history_date(date).is_none() {
                report.push(
                    location.clone(),
                    CatalogError::InvalidDate {
                        key: key.to_string(),
                        value: date.clone(),
                    },
                );
            }
        }
    }

    debug!(
        articles = report.articles_checked,
        references = report.references_checked,
        problems = report.problems.len(),
        "integrity check finished"
    );
    report
}
