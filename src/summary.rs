//! The full rollup handed to reporters

use crate::aggregate::{aggregate, aggregate_parallel, Tallies};
use crate::attestation::AttestationBases;
use crate::casestudy::{rank_case_studies, CaseStudyEntry};
use crate::catalog::Catalog;
use crate::error::Result;
use crate::models::Article;
use crate::ranking::{rank_subsystems, rank_systems, RankedEntry};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    pub total_examples: usize,
    pub total_lines: u64,
    /// Ranked by combined source and reference size, smallest first
    pub systems: Vec<RankedEntry>,
    pub subsystems: Vec<RankedEntry>,
    #[serde(default)]
    pub case_studies: Vec<CaseStudyEntry>,
    pub tallies: Tallies,
    /// When the reference sizes were fetched
    #[serde(default)]
    pub sizes_fetched: Option<String>,
}

impl Summary {
    /// Keep only the first `n` systems and subsystems
    pub fn truncate(&mut self, n: usize) {
        self.systems.truncate(n);
        self.subsystems.truncate(n);
    }
}

#[derive(Debug, Clone, Default)]
pub struct SummaryOptions {
    pub bases: AttestationBases,
    pub parallel: bool,
}

pub fn summarize(catalog: &Catalog, articles: &[Article], opts: &SummaryOptions) -> Result<Summary> {
    let tallies = if opts.parallel {
        aggregate_parallel(catalog, articles, &opts.bases)?
    } else {
        aggregate(catalog, articles, &opts.bases)?
    };
    let systems = rank_systems(catalog, articles, &tallies)?;
    let subsystems = rank_subsystems(catalog, &tallies)?;
    let case_studies = rank_case_studies(catalog)?;

    info!(
        "Ranked {} of {} systems and {} of {} subsystems from {} examples",
        systems.len(),
        catalog.system_count(),
        subsystems.len(),
        catalog.subsystem_count(),
        articles.len()
    );

    Ok(Summary {
        total_examples: articles.len(),
        total_lines: articles.iter().map(|a| a.lines).sum(),
        systems,
        subsystems,
        case_studies,
        tallies,
        sizes_fetched: catalog.sizes().fetched.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::{test_articles, test_catalog};

    #[test]
    fn test_summarize() {
        let summary = summarize(
            &test_catalog(),
            &test_articles(),
            &SummaryOptions::default(),
        )
        .unwrap();
        assert_eq!(summary.total_examples, 4);
        assert_eq!(summary.total_lines, 79);
        assert_eq!(summary.systems.len(), 2);
        assert_eq!(summary.subsystems.len(), 3);
        assert_eq!(summary.case_studies.len(), 1);
        assert_eq!(summary.case_studies[0].ref_bytes, 12_000);
    }

    #[test]
    fn test_parallel_summary_matches() {
        let catalog = test_catalog();
        let articles = test_articles();
        let seq = summarize(&catalog, &articles, &SummaryOptions::default()).unwrap();
        let par = summarize(
            &catalog,
            &articles,
            &SummaryOptions {
                parallel: true,
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(seq.tallies, par.tallies);
        assert_eq!(seq.subsystems, par.subsystems);
    }

    #[test]
    fn test_truncate() {
        let mut summary = summarize(
            &test_catalog(),
            &test_articles(),
            &SummaryOptions::default(),
        )
        .unwrap();
        summary.truncate(1);
        assert_eq!(summary.systems.len(), 1);
        assert_eq!(summary.subsystems[0].key, "pledge");
    }
}
