//! Schema definition for the academic publishing knowledge graph
//!
//! The schema is the fixed vocabulary every emitted fact must use: classes
//! and their subclass edges, and properties with domain, range and optional
//! parent property. It is built once, validated, and then immutable.
//!
//! # Usage
//!
//! ```
//! use sdm_schema::Schema;
//! use sdm_vocab::sdm::{class, DEFAULT_NS};
//!
//! let schema = Schema::academic(DEFAULT_NS).unwrap();
//! assert!(schema.is_subclass_of(class::CHAIR, class::PERSON));
//! assert!(!schema.is_subclass_of(class::JOURNAL, class::CONFERENCE));
//! ```
//!
//! Custom vocabularies go through [`SchemaBuilder`].

mod academic;
pub mod builder;
pub mod error;
mod hierarchy;
pub mod schema;
mod tbox;

pub use builder::SchemaBuilder;
pub use error::{SchemaError, SchemaResult};
pub use schema::{ClassDecl, PropertyDecl, PropertyKind, Range, Schema};
