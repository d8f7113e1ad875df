//! Per-example points for the source-vs-reference scatter plot

use crate::catalog::Catalog;
use crate::error::Result;
use crate::models::Article;
use indexmap::IndexMap;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub base: String,
    /// Example size (x axis)
    pub lines: u64,
    /// Subsystem reference size (y axis)
    pub ref_bytes: u64,
    pub lang: Option<String>,
}

/// All points of one subsystem, plotted in the same colour
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterSeries {
    pub subsystem: String,
    pub points: Vec<ScatterPoint>,
}

/// One series per catalog subsystem (empty ones included, so colours stay
/// stable across datasets), each holding its examples in input order.
pub fn scatter_series(catalog: &Catalog, articles: &[Article]) -> Result<Vec<ScatterSeries>> {
    let mut series: IndexMap<&str, ScatterSeries> = catalog
        .subsystems()
        .map(|(key, _)| {
            (
                key,
                ScatterSeries {
                    subsystem: key.to_string(),
                    points: Vec::new(),
                },
            )
        })
        .collect();

    for article in articles {
        let key = article.subsystem_name().unwrap_or_default();
        let ref_bytes = catalog.subsystem_reference_size(key)?;
        if let Some(set) = series.get_mut(key) {
            set.points.push(ScatterPoint {
                base: article.base.clone(),
                lines: article.lines,
                ref_bytes,
                lang: article.lang.clone(),
            });
        }
    }

    Ok(series.into_values().collect())
}
