//! Lookup layer over the static catalog tables
//!
//! A [`Catalog`] bundles the read-only tables every rollup needs. It is
//! built once (usually from a [`crate::snapshot::Snapshot`]) and passed by
//! reference into the aggregation and ranking functions.
//!
//! The tables keep the order they were given in, so anything drawn per
//! system, subsystem or case study comes out in dataset order.

use crate::error::{CatalogError, EntityKind, Result};
use crate::models::{CaseStudySizes, SizeIndex, SubsystemDescriptor, SystemDescriptor};
use indexmap::IndexMap;

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    systems: IndexMap<String, SystemDescriptor>,
    subsystems: IndexMap<String, SubsystemDescriptor>,
    sizes: SizeIndex,
    case_studies: IndexMap<String, String>,
    case_study_sizes: CaseStudySizes,
}

impl Catalog {
    pub fn new(
        systems: impl IntoIterator<Item = (String, SystemDescriptor)>,
        subsystems: impl IntoIterator<Item = (String, SubsystemDescriptor)>,
        sizes: SizeIndex,
    ) -> Self {
        let systems: IndexMap<_, _> = systems.into_iter().collect();
        let mut subsystems: IndexMap<_, _> = subsystems.into_iter().collect();
        for (key, subsystem) in subsystems.iter_mut() {
            if subsystem.name.is_empty() {
                subsystem.name = key.clone();
            }
        }
        Self {
            systems,
            subsystems,
            sizes,
            case_studies: IndexMap::new(),
            case_study_sizes: CaseStudySizes::default(),
        }
    }

    /// Attach named case-study repositories and their sizes
    pub fn with_case_studies(
        mut self,
        case_studies: impl IntoIterator<Item = (String, String)>,
        case_study_sizes: CaseStudySizes,
    ) -> Self {
        self.case_studies = case_studies.into_iter().collect();
        self.case_study_sizes = case_study_sizes;
        self
    }

    /// Look up a system (e.g. `openbsd`). An absent name is valid and
    /// yields `None`; a name that is not in the table is an error.
    pub fn resolve_system(&self, name: Option<&str>) -> Result<Option<&SystemDescriptor>> {
        let Some(name) = name else {
            return Ok(None);
        };
        self.systems
            .get(name)
            .map(Some)
            .ok_or_else(|| CatalogError::not_found(EntityKind::System, name))
    }

    /// Look up a subsystem (e.g. `pledge`). Every example must have one.
    pub fn resolve_subsystem(&self, name: Option<&str>) -> Result<&SubsystemDescriptor> {
        let name = name.unwrap_or_default();
        self.subsystems
            .get(name)
            .ok_or_else(|| CatalogError::not_found(EntityKind::Subsystem, name))
    }

    pub fn systems(&self) -> impl Iterator<Item = (&str, &SystemDescriptor)> {
        self.systems.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn subsystems(&self) -> impl Iterator<Item = (&str, &SubsystemDescriptor)> {
        self.subsystems.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn sizes(&self) -> &SizeIndex {
        &self.sizes
    }

    /// Case-study name to repository URL
    pub fn case_studies(&self) -> impl Iterator<Item = (&str, &str)> {
        self.case_studies
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn case_study_sizes(&self) -> &CaseStudySizes {
        &self.case_study_sizes
    }

    pub fn system_count(&self) -> usize {
        self.systems.len()
    }

    pub fn subsystem_count(&self) -> usize {
        self.subsystems.len()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::{Article, CaseStudySize};
    use std::collections::BTreeMap;

    /// Small catalog shared by the unit tests across the crate:
    /// two systems, three subsystems, five reference documents.
    pub(crate) fn test_catalog() -> Catalog {
        let systems = BTreeMap::from([
            (
                "openbsd".to_string(),
                SystemDescriptor {
                    name: "OpenBSD".into(),
                    link: "https://www.openbsd.org".into(),
                },
            ),
            (
                "freebsd".to_string(),
                SystemDescriptor {
                    name: "FreeBSD".into(),
                    link: "https://www.freebsd.org".into(),
                },
            ),
        ]);
        let subsystems = BTreeMap::from([
            (
                "pledge".to_string(),
                SubsystemDescriptor {
                    sources: vec!["https://man.openbsd.org/pledge.2".into()],
                    link: Some("https://man.openbsd.org/pledge.2".into()),
                    ..Default::default()
                },
            ),
            (
                "unveil".to_string(),
                SubsystemDescriptor {
                    sources: vec![
                        "https://man.openbsd.org/unveil.2".into(),
                        "https://man.openbsd.org/pledge.2".into(),
                    ],
                    ..Default::default()
                },
            ),
            (
                "capsicum".to_string(),
                SubsystemDescriptor {
                    deprecated: None,
                    sources: vec![
                        "https://man.freebsd.org/capsicum.4".into(),
                        "https://man.freebsd.org/cap_enter.2".into(),
                        " https://man.freebsd.org/cap_rights_limit.2 ".into(),
                    ],
                    ..Default::default()
                },
            ),
        ]);
        let sizes: SizeIndex = [
            ("https://man.openbsd.org/pledge.2", 12_000),
            ("https://man.openbsd.org/unveil.2", 6_000),
            ("https://man.freebsd.org/capsicum.4", 4_000),
            ("https://man.freebsd.org/cap_enter.2", 2_000),
            ("https://man.freebsd.org/cap_rights_limit.2", 9_000),
        ]
        .into_iter()
        .collect();
        let studies = BTreeMap::from([(
            "pledge".to_string(),
            "https://github.com/example/pledged".to_string(),
        )]);
        let study_sizes = CaseStudySizes {
            fetched: None,
            results: BTreeMap::from([(
                "https://github.com/example/pledged".to_string(),
                CaseStudySize {
                    lines: 40,
                    history: vec!["2020-01-01".into(), "2021-06-01T12:00:00Z".into()],
                },
            )]),
        };
        Catalog::new(systems, subsystems, sizes).with_case_studies(studies, study_sizes)
    }

    pub(crate) fn article(
        base: &str,
        subsystem: &str,
        system: Option<&str>,
        lines: u64,
    ) -> Article {
        Article {
            base: base.into(),
            subsystem: Some(subsystem.into()),
            system: system.map(Into::into),
            lang: Some("C".into()),
            lines,
            ..Default::default()
        }
    }

    /// Four examples over the shared catalog
    pub(crate) fn test_articles() -> Vec<Article> {
        let mut with_users = article("openbsd-pledge-c", "pledge", Some("openbsd"), 10);
        with_users.github_attestations = Some("acme acme/tool, bob bob/thing".into());
        with_users.openbsd_attestations = Some("ls bin/ls".into());
        vec![
            with_users,
            article("openbsd-unveil-c", "unveil", Some("openbsd"), 30),
            article("freebsd-capsicum-c", "capsicum", Some("freebsd"), 25),
            article("pledge-rust", "pledge", None, 14),
        ]
    }

    #[test]
    fn test_resolve_system_absent_is_none() {
        let catalog = test_catalog();
        assert!(catalog.resolve_system(None).unwrap().is_none());
    }

    #[test]
    fn test_resolve_system_known() {
        let catalog = test_catalog();
        let sys = catalog.resolve_system(Some("openbsd")).unwrap().unwrap();
        assert_eq!(sys.name, "OpenBSD");
    }

    #[test]
    fn test_resolve_system_unknown_fails() {
        let catalog = test_catalog();
        let err = catalog.resolve_system(Some("plan9")).unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("plan9"));
    }

    #[test]
    fn test_resolve_subsystem_unknown_fails() {
        let catalog = test_catalog();
        let err = catalog.resolve_subsystem(Some("bar")).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::NotFound {
                kind: EntityKind::Subsystem,
                ..
            }
        ));
    }

    #[test]
    fn test_resolve_subsystem_missing_name_fails() {
        let catalog = test_catalog();
        assert!(catalog.resolve_subsystem(None).unwrap_err().is_not_found());
    }

    #[test]
    fn test_subsystem_name_defaults_to_key() {
        let catalog = test_catalog();
        let pledge = catalog.resolve_subsystem(Some("pledge")).unwrap();
        assert_eq!(pledge.name, "pledge");
    }
}
