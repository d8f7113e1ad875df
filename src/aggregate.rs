//! Per-group tallies over the example catalog
//!
//! One pass over the articles builds a [`Tally`] per subsystem and, for
//! articles that name one, per system. The result depends only on which
//! articles are present, not their order: [`Tally::merge`] is associative
//! and commutative, which is also what lets [`aggregate_parallel`] split
//! the work across threads.

use crate::attestation::{article_attestations, AttestationBases};
use crate::catalog::Catalog;
use crate::error::Result;
use crate::models::Article;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Running totals for one subsystem or system
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub line_total: u64,
    pub sample_count: u64,
    /// Sum of each member example's distinct attestation count
    pub users: u64,
}

impl Tally {
    pub fn record(&mut self, lines: u64, users: u64) {
        self.line_total += lines;
        self.sample_count += 1;
        self.users += users;
    }

    pub fn merge(&mut self, other: &Tally) {
        self.line_total += other.line_total;
        self.sample_count += other.sample_count;
        self.users += other.users;
    }

    /// Mean lines per example, `None` for an empty tally
    pub fn source_average(&self) -> Option<f64> {
        (self.sample_count > 0).then(|| self.line_total as f64 / self.sample_count as f64)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tallies {
    pub subsystems: BTreeMap<String, Tally>,
    pub systems: BTreeMap<String, Tally>,
}

impl Tallies {
    fn observe(&mut self, obs: &Observation<'_>) {
        self.subsystems
            .entry(obs.subsystem.to_string())
            .or_default()
            .record(obs.lines, obs.users);
        if let Some(system) = obs.system {
            self.systems
                .entry(system.to_string())
                .or_default()
                .record(obs.lines, obs.users);
        }
    }

    fn merge(mut self, other: Tallies) -> Tallies {
        for (key, tally) in other.subsystems {
            self.subsystems.entry(key).or_default().merge(&tally);
        }
        for (key, tally) in other.systems {
            self.systems.entry(key).or_default().merge(&tally);
        }
        self
    }
}

/// What one article contributes to the tallies
struct Observation<'a> {
    subsystem: &'a str,
    system: Option<&'a str>,
    lines: u64,
    users: u64,
}

fn observe<'a>(
    catalog: &Catalog,
    bases: &AttestationBases,
    article: &'a Article,
) -> Result<Observation<'a>> {
    // Both lookups are integrity checks; unknown names abort the pass.
    catalog.resolve_subsystem(article.subsystem_name())?;
    catalog.resolve_system(article.system_name())?;

    let users = article_attestations(article, bases).len() as u64;
    Ok(Observation {
        subsystem: article.subsystem_name().unwrap_or_default(),
        system: article.system_name(),
        lines: article.lines,
        users,
    })
}

/// Tally every article by subsystem and by system
pub fn aggregate(
    catalog: &Catalog,
    articles: &[Article],
    bases: &AttestationBases,
) -> Result<Tallies> {
    let mut tallies = Tallies::default();
    for article in articles {
        tallies.observe(&observe(catalog, bases, article)?);
    }
    debug!(
        articles = articles.len(),
        subsystems = tallies.subsystems.len(),
        systems = tallies.systems.len(),
        "aggregated examples"
    );
    Ok(tallies)
}

/// Same result as [`aggregate`], computed with rayon
pub fn aggregate_parallel(
    catalog: &Catalog,
    articles: &[Article],
    bases: &AttestationBases,
) -> Result<Tallies> {
    articles
        .par_iter()
        .map(|article| observe(catalog, bases, article))
        .try_fold(Tallies::default, |mut tallies, obs| -> Result<Tallies> {
            tallies.observe(&obs?);
            Ok(tallies)
        })
        .try_reduce(Tallies::default, |a, b| -> Result<Tallies> { Ok(a.merge(b)) })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::{article, test_articles, test_catalog};
    use crate::models::{SizeIndex, SubsystemDescriptor};

    #[test]
    fn test_round_trip_without_system() {
        let subsystems = BTreeMap::from([(
            "foo".to_string(),
            SubsystemDescriptor {
                sources: vec!["u1".into(), "u2".into()],
                ..Default::default()
            },
        )]);
        let sizes: SizeIndex = [("u1", 1000), ("u2", 2000)].into_iter().collect();
        let catalog = Catalog::new(BTreeMap::new(), subsystems, sizes);
        let articles = vec![article("a", "foo", None, 10), article("b", "foo", None, 20)];

        let tallies = aggregate(&catalog, &articles, &AttestationBases::default()).unwrap();
        assert_eq!(
            tallies.subsystems["foo"],
            Tally {
                line_total: 30,
                sample_count: 2,
                users: 0
            }
        );
        assert!(tallies.systems.is_empty());
    }

    #[test]
    fn test_system_and_subsystem_tallies() {
        let catalog = test_catalog();
        let tallies = aggregate(&catalog, &test_articles(), &AttestationBases::default()).unwrap();

        let pledge = tallies.subsystems["pledge"];
        assert_eq!(pledge.line_total, 24);
        assert_eq!(pledge.sample_count, 2);
        // acme/tool, bob/thing, openbsd bin/ls
        assert_eq!(pledge.users, 3);

        let openbsd = tallies.systems["openbsd"];
        assert_eq!(openbsd.line_total, 40);
        assert_eq!(openbsd.sample_count, 2);
        assert_eq!(openbsd.users, 3);

        assert_eq!(tallies.systems["freebsd"].line_total, 25);
        assert_eq!(tallies.systems.len(), 2);
    }

    #[test]
    fn test_same_attestation_counts_per_group() {
        let catalog = test_catalog();
        let mut a = article("a", "pledge", Some("openbsd"), 1);
        a.github_attestations = Some("x acme/tool".into());
        let mut b = article("b", "unveil", Some("openbsd"), 1);
        b.github_attestations = Some("x acme/tool, y acme/tool".into());

        let tallies = aggregate(&catalog, &[a, b], &AttestationBases::default()).unwrap();
        assert_eq!(tallies.subsystems["pledge"].users, 1);
        assert_eq!(tallies.subsystems["unveil"].users, 1);
        assert_eq!(tallies.systems["openbsd"].users, 2);
    }

    #[test]
    fn test_order_independent() {
        let catalog = test_catalog();
        let bases = AttestationBases::default();
        let articles = test_articles();
        let mut reversed = articles.clone();
        reversed.reverse();
        let mut rotated = articles.clone();
        rotated.rotate_left(2);

        let expected = aggregate(&catalog, &articles, &bases).unwrap();
        assert_eq!(aggregate(&catalog, &reversed, &bases).unwrap(), expected);
        assert_eq!(aggregate(&catalog, &rotated, &bases).unwrap(), expected);
    }

    #[test]
    fn test_idempotent() {
        let catalog = test_catalog();
        let bases = AttestationBases::default();
        let articles = test_articles();
        let first = aggregate(&catalog, &articles, &bases).unwrap();
        let second = aggregate(&catalog, &articles, &bases).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let catalog = test_catalog();
        let bases = AttestationBases::default();
        let mut articles = test_articles();
        for i in 0..200 {
            articles.push(article(&format!("extra-{i}"), "unveil", Some("openbsd"), i));
        }
        assert_eq!(
            aggregate_parallel(&catalog, &articles, &bases).unwrap(),
            aggregate(&catalog, &articles, &bases).unwrap()
        );
    }

    #[test]
    fn test_unknown_subsystem_aborts() {
        let catalog = test_catalog();
        let articles = vec![article("x", "seccomp", Some("linux"), 5)];
        let err = aggregate(&catalog, &articles, &AttestationBases::default()).unwrap_err();
        assert!(err.is_not_found());
        assert!(aggregate_parallel(&catalog, &articles, &AttestationBases::default()).is_err());
    }

    #[test]
    fn test_unknown_system_aborts() {
        let catalog = test_catalog();
        let articles = vec![article("x", "pledge", Some("plan9"), 5)];
        let err = aggregate(&catalog, &articles, &AttestationBases::default()).unwrap_err();
        assert!(err.to_string().contains("plan9"));
    }

    #[test]
    fn test_source_average() {
        let mut tally = Tally::default();
        assert_eq!(tally.source_average(), None);
        tally.record(10, 0);
        tally.record(20, 0);
        assert_eq!(tally.source_average(), Some(15.0));
    }
}
