//! Contributor attestations
//!
//! An attestation field is a comma-separated list of `label target` pairs,
//! e.g. `"acme acme/tool, ls bin/ls"`. Each target is either an absolute
//! URL or a path relative to a per-field base URL. Pairs that do not have
//! exactly two tokens are skipped.

use crate::models::Article;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::trace;

/// Base for relative targets in `githubAttestations`
pub const GITHUB_BASE: &str = "https://github.com/";

/// Base for relative targets in `openbsdAttestations`
pub const OPENBSD_BASE: &str = "https://github.com/openbsd/src/tree/master/";

/// Base URLs prepended to relative attestation targets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttestationBases {
    #[serde(default = "default_github_base")]
    pub github: String,
    #[serde(default = "default_openbsd_base")]
    pub openbsd: String,
}

fn default_github_base() -> String {
    GITHUB_BASE.to_string()
}

fn default_openbsd_base() -> String {
    OPENBSD_BASE.to_string()
}

impl Default for AttestationBases {
    fn default() -> Self {
        Self {
            github: default_github_base(),
            openbsd: default_openbsd_base(),
        }
    }
}

/// Parse one attestation field into canonical URLs
pub fn extract_attestations(base_url: &str, raw: Option<&str>) -> BTreeSet<String> {
    let mut urls = BTreeSet::new();
    extend_attestations(&mut urls, base_url, raw);
    urls
}

/// Parse one attestation field, adding its canonical URLs to `urls`
pub fn extend_attestations(urls: &mut BTreeSet<String>, base_url: &str, raw: Option<&str>) {
    let Some(raw) = raw else {
        return;
    };
    for pair in raw.split(',') {
        let tokens: Vec<&str> = pair.split_whitespace().collect();
        let [_label, target] = tokens.as_slice() else {
            trace!(pair, "skipping malformed attestation");
            continue;
        };
        if target.starts_with("https://") || target.starts_with("http://") {
            urls.insert((*target).to_string());
        } else {
            urls.insert(format!("{base_url}{target}"));
        }
    }
}

/// All attestations of an article, deduplicated across its fields
pub fn article_attestations(article: &Article, bases: &AttestationBases) -> BTreeSet<String> {
    let mut urls = BTreeSet::new();
    extend_attestations(
        &mut urls,
        &bases.github,
        article.github_attestations.as_deref(),
    );
    extend_attestations(
        &mut urls,
        &bases.openbsd,
        article.openbsd_attestations.as_deref(),
    );
    urls
}
