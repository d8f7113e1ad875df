//! Error types for catalog lookups and rollups

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

/// The kind of record a lookup was looking for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    System,
    Subsystem,
    Reference,
    CaseStudy,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::System => write!(f, "system"),
            EntityKind::Subsystem => write!(f, "subsystem"),
            EntityKind::Reference => write!(f, "reference"),
            EntityKind::CaseStudy => write!(f, "case study"),
        }
    }
}

#[derive(Error, Debug)]
pub enum CatalogError {
    /// A key that the dataset says must exist is absent
    #[error("{}", describe_missing(.kind, .key))]
    NotFound { kind: EntityKind, key: String },

    /// An average was requested over zero samples
    #[error("No samples to average for {key}")]
    Degenerate { key: String },

    #[error("Invalid date {value:?} in history of {key}")]
    InvalidDate { key: String, value: String },

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse snapshot: {0}")]
    Parse(#[from] serde_json::Error),
}

impl CatalogError {
    pub fn not_found(kind: EntityKind, key: impl Into<String>) -> Self {
        CatalogError::NotFound {
            kind,
            key: key.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound { .. })
    }
}

fn describe_missing(kind: &EntityKind, key: &str) -> String {
    if key.is_empty() {
        format!("No {kind} name given")
    } else {
        format!("No {kind} for {key}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_names_the_key() {
        let err = CatalogError::not_found(EntityKind::Subsystem, "bar");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "No subsystem for bar");
    }

    #[test]
    fn test_not_found_without_key() {
        let err = CatalogError::not_found(EntityKind::Subsystem, "");
        assert_eq!(err.to_string(), "No subsystem name given");
    }

    #[test]
    fn test_degenerate_is_not_lookup_failure() {
        let err = CatalogError::Degenerate { key: "linux".into() };
        assert!(!err.is_not_found());
        assert!(err.to_string().contains("linux"));
    }
}
