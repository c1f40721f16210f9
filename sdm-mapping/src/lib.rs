//! Relational-to-graph mapping engine for academic publishing data
//!
//! Takes one typed [`ColumnBatch`](sdm_tabular::ColumnBatch) per relational
//! table (areas, authors, conferences, journals, volumes, proceedings, papers,
//! reviews, and the `has_author` / `has_topic` membership tables) and emits
//! the instance facts (ABox) of the academic publishing graph, using only the
//! vocabulary of a [`Schema`](sdm_schema::Schema).
//!
//! # Key Features
//!
//! - **Deterministic identifiers**: every resource IRI is
//!   `namespace + Kind + "_" + key`, whitespace in keys replaced by `_`
//! - **Typed classification**: paper, conference, venue and topic-target
//!   strings parse into closed enums; unknown values are errors
//! - **Conditional facts**: publication facts exist only for accepted papers,
//!   and posters use `posterPublishedIn`
//! - **Typed coercion**: literals follow each column's declared type
//! - **Consistency pass**: every referenced resource must be declared by the
//!   table that owns it, with domain and range checked against the class
//!   hierarchy
//!
//! # Usage
//!
//! Build a [`Dataset`], then run a [`MappingEngine`] over it. The returned
//! [`MappingOutput`] holds the graph, the consistency report, and per-table
//! statistics.

mod coerce;
pub mod config;
pub mod consistency;
pub mod dataset;
pub mod decision;
mod emit;
pub mod engine;
pub mod error;
pub mod kinds;
mod mappers;
pub mod resource;
pub mod row;
pub mod table;

pub use coerce::{date_from_epoch_days, epoch_days, literal_kind, LiteralKind};
pub use config::{MappingConfig, Strictness};
pub use consistency::{ConsistencyReport, Violation, ViolationCounts, ViolationKind};
pub use dataset::Dataset;
pub use decision::{aggregate_decisions, apply_decisions};
pub use emit::TableFacts;
pub use engine::{MappingEngine, MappingOutput, TableStats};
pub use error::{MappingError, MappingResult, RowContext};
pub use kinds::{ConferenceKind, PaperKind, TopicTarget, UnknownKind, VenueKind};
pub use resource::{resource_iri, EntityKind};
pub use table::{ColumnSpec, Table, TableSpec};
