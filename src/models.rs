//! Core data models for secflops
//!
//! These are the records of the static catalog: operating systems,
//! sandboxing subsystems, reference sizes, case studies, and the code
//! examples ("articles") themselves. They are loaded once and never
//! mutated afterwards.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// An operating system under study (e.g. `openbsd`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemDescriptor {
    pub name: String,
    pub link: String,
}

/// A sandboxing facility (e.g. `pledge`, `capsicum`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubsystemDescriptor {
    /// Display name; filled from the table key when the snapshot omits it
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub deprecated: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    /// Reference documents, in order. Sizes live in [`SizeIndex`].
    #[serde(default)]
    pub sources: Vec<String>,
}

impl SubsystemDescriptor {
    pub fn is_deprecated(&self) -> bool {
        self.deprecated.is_some()
    }
}

/// Reference URL to byte size
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeIndex {
    /// When the sizes were fetched, as recorded by the snapshot generator
    #[serde(default)]
    pub fetched: Option<String>,
    #[serde(default)]
    pub results: BTreeMap<String, u64>,
}

impl SizeIndex {
    pub fn get(&self, url: &str) -> Option<u64> {
        self.results.get(url).copied()
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for SizeIndex {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        SizeIndex {
            fetched: None,
            results: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Size and commit history of one case-study repository
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseStudySize {
    pub lines: u64,
    /// Commit dates, oldest first
    #[serde(default)]
    pub history: Vec<String>,
}

/// Repository URL to case-study size
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseStudySizes {
    #[serde(default)]
    pub fetched: Option<String>,
    #[serde(default)]
    pub results: BTreeMap<String, CaseStudySize>,
}

/// One cataloged code example
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Source file stem of the example (e.g. `openbsd-pledge-c`)
    #[serde(default)]
    pub base: String,
    /// Required by the catalog; absence is reported as a lookup failure
    #[serde(default)]
    pub subsystem: Option<String>,
    #[serde(default)]
    pub system: Option<String>,
    #[serde(default)]
    pub lang: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lines")]
    pub lines: u64,
    #[serde(default)]
    pub github_attestations: Option<String>,
    #[serde(default)]
    pub openbsd_attestations: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Article {
    pub fn subsystem_name(&self) -> Option<&str> {
        self.subsystem.as_deref()
    }

    pub fn system_name(&self) -> Option<&str> {
        self.system.as_deref()
    }
}

/// Line counts arrive either as JSON numbers or as numeric strings.
/// Whole-valued decimals such as `12.0` are accepted; fractions are not.
#[derive(Deserialize)]
#[serde(untagged)]
enum LineCount {
    Whole(u64),
    Decimal(f64),
    Text(String),
}

fn whole_lines(value: f64) -> Option<u64> {
    (value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= u64::MAX as f64)
        .then_some(value as u64)
}

fn deserialize_lines<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let parsed = match LineCount::deserialize(deserializer)? {
        LineCount::Whole(n) => return Ok(n),
        LineCount::Decimal(value) => whole_lines(value).ok_or_else(|| value.to_string()),
        LineCount::Text(s) => {
            let text = s.trim();
            text.parse::<u64>()
                .ok()
                .or_else(|| text.parse::<f64>().ok().and_then(whole_lines))
                .ok_or(s)
        }
    };
    parsed.map_err(|raw| serde::de::Error::custom(format!("'{}' is not a line count", raw)))
}
