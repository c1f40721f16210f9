//! In-memory RDF graph representation
//!
//! Canonical types for the facts produced by the mapping engine and consumed
//! by the serializers.
//!
//! # Key Design Principles
//!
//! 1. **Expanded IRIs only** - All IRIs are stored in expanded form. Compaction
//!    is handled by formatters at output time.
//!
//! 2. **Explicit datatypes** - Literals always carry a datatype. There is no
//!    untyped literal.
//!
//! 3. **Bag semantics, insertion order** - `Graph` is an append-only
//!    `Vec<Triple>`. Call `sort()` or `dedupe()` explicitly when an SPO
//!    ordering or set semantics is wanted.
//!
//! # Example
//!
//! ```
//! use sdm_graph_ir::{Graph, Term};
//!
//! let mut graph = Graph::new();
//! graph.add_triple(
//!     Term::iri("http://example.org/sdm#Author_3"),
//!     Term::iri("http://example.org/sdm#hasPersonName"),
//!     Term::string("Ada"),
//! );
//! assert_eq!(graph.len(), 1);
//! ```

pub mod datatype;
mod graph;
mod term;
mod triple;

pub use datatype::Datatype;
pub use graph::Graph;
pub use term::{escape_iri, escape_literal, LiteralValue, Term};
pub use triple::Triple;
