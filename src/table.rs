//! Sortable table view of the examples
//!
//! [`sorted_view`] never reorders the catalog itself; it returns a fresh
//! ordering of references, so the table can be re-sorted as often as
//! needed while aggregation keeps reading the original sequence.

use crate::catalog::Catalog;
use crate::error::Result;
use crate::models::{Article, SubsystemDescriptor, SystemDescriptor};
use anyhow::anyhow;
use serde::Serialize;
use std::cmp::Ordering;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    System,
    Subsystem,
    Lang,
    Lines,
}

impl SortField {
    pub fn is_numeric(self) -> bool {
        matches!(self, SortField::Lines)
    }
}

impl FromStr for SortField {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "system" => Ok(SortField::System),
            "subsystem" => Ok(SortField::Subsystem),
            "lang" | "language" => Ok(SortField::Lang),
            "lines" => Ok(SortField::Lines),
            _ => Err(anyhow!(
                "Unknown column '{}'. Valid columns: system, subsystem, lang, lines",
                s
            )),
        }
    }
}

impl std::fmt::Display for SortField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortField::System => write!(f, "system"),
            SortField::Subsystem => write!(f, "subsystem"),
            SortField::Lang => write!(f, "lang"),
            SortField::Lines => write!(f, "lines"),
        }
    }
}

/// Which column the table is sorted by, and in which direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub field: SortField,
    pub ascending: bool,
}

impl SortState {
    pub fn new(field: SortField, ascending: bool) -> Self {
        Self { field, ascending }
    }

    /// The state after clicking the same column again
    pub fn toggled(self) -> Self {
        Self {
            ascending: !self.ascending,
            ..self
        }
    }
}

impl Default for SortState {
    fn default() -> Self {
        Self::new(SortField::Subsystem, true)
    }
}

fn text_value(article: &Article, field: SortField) -> &str {
    match field {
        SortField::System => article.system_name(),
        SortField::Subsystem => article.subsystem_name(),
        SortField::Lang => article.lang.as_deref(),
        SortField::Lines => None,
    }
    .unwrap_or("")
}

fn compare(a: &Article, b: &Article, field: SortField) -> Ordering {
    if field.is_numeric() {
        a.lines.cmp(&b.lines)
    } else {
        text_value(a, field).cmp(text_value(b, field))
    }
}

/// A new ordering of `articles`. The sort is stable in both directions:
/// equal rows keep their catalog order.
pub fn sorted_view(articles: &[Article], state: SortState) -> Vec<&Article> {
    let mut view: Vec<&Article> = articles.iter().collect();
    view.sort_by(|a, b| {
        let ord = compare(a, b, state.field);
        if state.ascending {
            ord
        } else {
            ord.reverse()
        }
    });
    view
}

/// How long an example is, for highlighting in the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineBand {
    Ok,
    Many,
    TooMany,
}

impl LineBand {
    pub fn of(lines: u64) -> Self {
        match lines {
            n if n >= 30 => LineBand::TooMany,
            n if n >= 20 => LineBand::Many,
            _ => LineBand::Ok,
        }
    }
}

/// One resolved table row
#[derive(Debug, Clone, Serialize)]
pub struct TableRow<'a> {
    pub base: &'a str,
    pub system: Option<&'a SystemDescriptor>,
    pub subsystem_key: &'a str,
    pub subsystem: &'a SubsystemDescriptor,
    pub lang: Option<&'a str>,
    pub lines: u64,
    pub band: LineBand,
}

/// Resolve every row of a view; an unknown system or subsystem aborts
pub fn table_rows<'a>(catalog: &'a Catalog, view: &[&'a Article]) -> Result<Vec<TableRow<'a>>> {
    view.iter()
        .map(|&article| -> Result<TableRow<'a>> {
            Ok(TableRow {
                base: &article.base,
                system: catalog.resolve_system(article.system_name())?,
                subsystem_key: article.subsystem_name().unwrap_or_default(),
                subsystem: catalog.resolve_subsystem(article.subsystem_name())?,
                lang: article.lang.as_deref(),
                lines: article.lines,
                band: LineBand::of(article.lines),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::{article, test_articles, test_catalog};

    fn bases<'a>(view: &[&'a Article]) -> Vec<&'a str> {
        view.iter().map(|a| a.base.as_str()).collect()
    }

    #[test]
    fn test_sort_lines_numeric() {
        let articles = vec![
            article("nine", "pledge", None, 9),
            article("hundred", "pledge", None, 100),
            article("ten", "pledge", None, 10),
        ];
        let view = sorted_view(&articles, SortState::new(SortField::Lines, true));
        assert_eq!(bases(&view), ["nine", "ten", "hundred"]);

        let view = sorted_view(&articles, SortState::new(SortField::Lines, false));
        assert_eq!(bases(&view), ["hundred", "ten", "nine"]);
    }

    #[test]
    fn test_absent_values_sort_first_ascending() {
        let articles = test_articles();
        let view = sorted_view(&articles, SortState::new(SortField::System, true));
        assert_eq!(view[0].base, "pledge-rust");
        let view = sorted_view(&articles, SortState::new(SortField::System, false));
        assert_eq!(view.last().unwrap().base, "pledge-rust");
    }

    #[test]
    fn test_sort_is_stable_and_pure() {
        let articles = test_articles();
        let original = articles.clone();
        let view = sorted_view(&articles, SortState::new(SortField::Lang, false));
        // All examples share a language, so catalog order is kept.
        assert_eq!(
            bases(&view),
            ["openbsd-pledge-c", "openbsd-unveil-c", "freebsd-capsicum-c", "pledge-rust"]
        );
        assert_eq!(articles, original);
    }

    #[test]
    fn test_toggle() {
        let state = SortState::new(SortField::Lines, true);
        assert!(!state.toggled().ascending);
        assert_eq!(state.toggled().toggled(), state);
    }

    #[test]
    fn test_field_parsing() {
        assert_eq!("LINES".parse::<SortField>().unwrap(), SortField::Lines);
        assert_eq!("language".parse::<SortField>().unwrap(), SortField::Lang);
        assert!("bytes".parse::<SortField>().is_err());
    }

    #[test]
    fn test_line_bands() {
        assert_eq!(LineBand::of(19), LineBand::Ok);
        assert_eq!(LineBand::of(20), LineBand::Many);
        assert_eq!(LineBand::of(29), LineBand::Many);
        assert_eq!(LineBand::of(30), LineBand::TooMany);
    }

    #[test]
    fn test_table_rows_resolve() {
        let catalog = test_catalog();
        let articles = test_articles();
        let view = sorted_view(&articles, SortState::default());
        let rows = table_rows(&catalog, &view).unwrap();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].subsystem_key, "capsicum");
        assert_eq!(rows[0].system.map(|s| s.name.as_str()), Some("FreeBSD"));
    }

    #[test]
    fn test_table_rows_unknown_subsystem() {
        let catalog = test_catalog();
        let articles = vec![article("x", "landlock", None, 3)];
        let view = sorted_view(&articles, SortState::default());
        assert!(table_rows(&catalog, &view).is_err());
    }
}
