//! Everything shown about a single example when it is opened

use crate::catalog::Catalog;
use crate::error::Result;
use crate::models::Article;
use serde::Serialize;

/// Where example sources are published; `<base>.md` is appended
pub const EXAMPLE_BASE: &str = "https://github.com/kristapsdz/dev_sec_flops/blob/main/";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Link {
    pub name: String,
    pub href: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferenceSize {
    pub url: String,
    pub bytes: u64,
}

impl ReferenceSize {
    /// Size in whole kilobytes (1000 bytes), rounded
    pub fn kilobytes(&self) -> u64 {
        (self.bytes as f64 / 1000.0).round() as u64
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExampleDetail {
    pub base: String,
    pub system: Option<Link>,
    pub subsystem: Link,
    pub deprecated: bool,
    pub lang: Option<String>,
    pub lines: u64,
    pub references: Vec<ReferenceSize>,
    pub notes: Option<String>,
    pub source_link: String,
}

impl ExampleDetail {
    pub fn notes_text(&self) -> &str {
        self.notes.as_deref().unwrap_or("No notes.")
    }
}

pub fn find_article<'a>(articles: &'a [Article], base: &str) -> Option<&'a Article> {
    articles.iter().find(|a| a.base == base)
}

/// Resolve an example's system, subsystem and references
pub fn describe(catalog: &Catalog, article: &Article, example_base: &str) -> Result<ExampleDetail> {
    let subsystem = catalog.resolve_subsystem(article.subsystem_name())?;
    let system = catalog.resolve_system(article.system_name())?;

    let mut references = Vec::with_capacity(subsystem.sources.len());
    for source in &subsystem.sources {
        let url = source.trim().to_string();
        let bytes = catalog.size_of(&url)?;
        references.push(ReferenceSize { url, bytes });
    }

    Ok(ExampleDetail {
        base: article.base.clone(),
        system: system.map(|s| Link {
            name: s.name.clone(),
            href: Some(s.link.clone()),
        }),
        subsystem: Link {
            name: subsystem.name.clone(),
            href: subsystem.link.clone(),
        },
        deprecated: subsystem.is_deprecated(),
        lang: article.lang.clone(),
        lines: article.lines,
        references,
        notes: article.notes.clone(),
        source_link: format!("{example_base}{}.md", article.base),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::{article, test_articles, test_catalog};

    #[test]
    fn test_describe_with_system() {
        let catalog = test_catalog();
        let articles = test_articles();
        let article = find_article(&articles, "freebsd-capsicum-c").unwrap();
        let detail = describe(&catalog, article, EXAMPLE_BASE).unwrap();

        assert_eq!(detail.system.as_ref().unwrap().name, "FreeBSD");
        assert_eq!(detail.subsystem.name, "capsicum");
        assert!(!detail.deprecated);
        assert_eq!(detail.references.len(), 3);
        // Sources are trimmed before lookup and display
        assert_eq!(
            detail.references[2].url,
            "https://man.freebsd.org/cap_rights_limit.2"
        );
        assert_eq!(detail.references[2].kilobytes(), 9);
        assert_eq!(
            detail.source_link,
            "https://github.com/kristapsdz/dev_sec_flops/blob/main/freebsd-capsicum-c.md"
        );
        assert_eq!(detail.notes_text(), "No notes.");
    }

    #[test]
    fn test_describe_without_system() {
        let catalog = test_catalog();
        let mut example = article("pledge-rust", "pledge", None, 14);
        example.notes = Some("Uses the pledge crate.".into());
        let detail = describe(&catalog, &example, "https://example.org/").unwrap();
        assert!(detail.system.is_none());
        assert_eq!(detail.notes_text(), "Uses the pledge crate.");
        assert_eq!(
            detail.subsystem.href.as_deref(),
            Some("https://man.openbsd.org/pledge.2")
        );
    }

    #[test]
    fn test_kilobytes_round() {
        let r = ReferenceSize {
            url: "u".into(),
            bytes: 1_499,
        };
        assert_eq!(r.kilobytes(), 1);
        let r = ReferenceSize {
            url: "u".into(),
            bytes: 1_500,
        };
        assert_eq!(r.kilobytes(), 2);
    }

    #[test]
    fn test_find_article_missing() {
        assert!(find_article(&test_articles(), "nope").is_none());
    }
}
