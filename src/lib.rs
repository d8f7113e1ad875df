//! secflops - rollups over a catalog of sandboxing code examples
//!
//! Each example shows one sandboxing facility (a "subsystem" such as
//! pledge or capsicum), optionally on one operating system. This crate
//! compares how much code the examples need against how much reference
//! documentation their subsystem carries, and how many real projects
//! attest to using it.
//!
//! The pipeline is:
//!
//! ```text
//! Snapshot -> Catalog + articles -> aggregate -> rank -> reporters
//! ```
//!
//! Every lookup is strict: a system, subsystem or reference that the
//! snapshot mentions but does not define is a [`CatalogError::NotFound`].

pub mod aggregate;
pub mod attestation;
pub mod casestudy;
pub mod catalog;
pub mod check;
pub mod config;
pub mod detail;
pub mod error;
pub mod models;
pub mod ranking;
pub mod reporters;
pub mod scatter;
pub mod sizes;
pub mod snapshot;
pub mod summary;
pub mod table;

pub use aggregate::{aggregate, aggregate_parallel, Tallies, Tally};
pub use attestation::{extract_attestations, AttestationBases};
pub use catalog::Catalog;
pub use error::{CatalogError, EntityKind, Result};
pub use models::{Article, SizeIndex, SubsystemDescriptor, SystemDescriptor};
pub use ranking::{rank, rank_subsystems, rank_systems, RankedEntry};
pub use snapshot::Snapshot;
pub use summary::{summarize, Summary, SummaryOptions};
pub use table::{sorted_view, SortField, SortState};
