//! Formatting policies

use serde::{Deserialize, Serialize};

/// Order in which triples are written
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderPolicy {
    /// Keep the graph's insertion order, duplicates included
    #[default]
    Emission,

    /// Sort by (subject, predicate, object) and drop duplicates
    Canonical,
}

/// How to write the `rdf:type` predicate in Turtle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TypeHandling {
    /// Use the `a` keyword
    #[default]
    AsA,

    /// Write `rdf:type` like any other predicate
    AsRdfType,
}

impl TypeHandling {
    pub fn use_a(&self) -> bool {
        matches!(self, TypeHandling::AsA)
    }
}
