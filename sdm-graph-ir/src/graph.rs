//! RDF graph - an append-only collection of triples
//!
//! The `Graph` type uses `Vec<Triple>` to preserve insertion order and
//! duplicates (bag semantics). Call `dedupe()` explicitly if you want set
//! semantics.

use crate::{Term, Triple};
use std::collections::BTreeMap;

/// A collection of RDF triples
///
/// # Design Decisions
///
/// - **Vec storage**: insertion order is the mapping engine's deterministic
///   emission order, so it is preserved as-is.
/// - **Explicit deduplication**: Call `dedupe()` if you want set semantics.
/// - **Deterministic output**: Call `sort()` before formatting for an SPO order.
///
/// # Example
///
/// ```
/// use sdm_graph_ir::{Graph, Term};
///
/// let mut graph = Graph::new();
///
/// graph.add_triple(
///     Term::iri("http://example.org/sdm#Area_ml"),
///     Term::iri("http://example.org/sdm#hasTopicName"),
///     Term::string("Machine learning"),
/// );
///
/// graph.dedupe();
/// assert_eq!(graph.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Graph {
    /// The triples in this graph
    triples: Vec<Triple>,
    /// Prefix mappings for serialization (deterministic order via BTreeMap)
    pub prefixes: BTreeMap<String, String>,
}

impl Graph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a prefix mapping
    pub fn add_prefix(&mut self, prefix: impl Into<String>, namespace: impl Into<String>) {
        self.prefixes.insert(prefix.into(), namespace.into());
    }

    /// Add a triple to the graph
    pub fn add(&mut self, triple: Triple) {
        self.triples.push(triple);
    }

    /// Add a triple by components
    pub fn add_triple(&mut self, s: Term, p: Term, o: Term) {
        self.add(Triple::new(s, p, o));
    }

    /// Append every triple of `other`, keeping its order. Prefixes are merged,
    /// with `other` winning on conflicts.
    pub fn append(&mut self, other: Graph) {
        self.prefixes.extend(other.prefixes);
        self.triples.extend(other.triples);
    }

    /// Get the number of triples
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Iterate over triples
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Sort triples by SPO for deterministic output
    pub fn sort(&mut self) {
        self.triples.sort();
    }

    /// Remove duplicate triples (apply set semantics)
    ///
    /// Sorts as a side effect.
    pub fn dedupe(&mut self) {
        self.triples.sort();
        self.triples.dedup();
    }

    /// Get all triples (consuming the graph)
    pub fn into_triples(self) -> Vec<Triple> {
        self.triples
    }

    /// Get a reference to the triples
    pub fn triples(&self) -> &[Triple] {
        &self.triples
    }
}

impl IntoIterator for Graph {
    type Item = Triple;
    type IntoIter = std::vec::IntoIter<Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.into_iter()
    }
}

impl<'a> IntoIterator for &'a Graph {
    type Item = &'a Triple;
    type IntoIter = std::slice::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.iter()
    }
}

impl FromIterator<Triple> for Graph {
    fn from_iter<T: IntoIterator<Item = Triple>>(iter: T) -> Self {
        Graph {
            triples: iter.into_iter().collect(),
            prefixes: BTreeMap::new(),
        }
    }
}

impl Extend<Triple> for Graph {
    fn extend<T: IntoIterator<Item = Triple>>(&mut self, iter: T) {
        self.triples.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NS: &str = "http://example.org/sdm#";

    fn iri(local: &str) -> Term {
        Term::iri(format!("{NS}{local}"))
    }

    fn make_test_graph() -> Graph {
        let mut graph = Graph::new();

        // Non-sorted order
        graph.add_triple(iri("Author_2"), iri("hasPersonName"), Term::string("Bob"));
        graph.add_triple(iri("Author_1"), iri("hasPersonName"), Term::string("Ada"));
        graph.add_triple(iri("Author_1"), iri("hasHIndex"), Term::float(12.0));

        graph
    }

    #[test]
    fn test_graph_creation() {
        let graph = Graph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.len(), 0);
    }

    #[test]
    fn test_graph_sort() {
        let mut graph = make_test_graph();

        graph.sort();

        let subjects: Vec<_> = graph.iter().map(|t| t.s.clone()).collect();
        assert_eq!(subjects, vec![iri("Author_1"), iri("Author_1"), iri("Author_2")]);
    }

    #[test]
    fn test_graph_dedupe() {
        let mut graph = Graph::new();
        let triple = Triple::new(iri("Paper_1"), iri("paperTitle"), Term::string("x"));

        graph.add(triple.clone());
        graph.add(triple.clone());
        graph.add(triple);
        assert_eq!(graph.len(), 3);

        graph.dedupe();
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn test_append_keeps_order_and_merges_prefixes() {
        let mut a = Graph::new();
        a.add_prefix("sdm", NS);
        a.add_triple(iri("Paper_2"), iri("paperTitle"), Term::string("b"));

        let mut b = Graph::new();
        b.add_prefix("xsd", "http://www.w3.org/2001/XMLSchema#");
        b.add_triple(iri("Paper_1"), iri("paperTitle"), Term::string("a"));

        a.append(b);
        assert_eq!(a.len(), 2);
        assert_eq!(a.triples()[0].s, iri("Paper_2"));
        assert_eq!(a.triples()[1].s, iri("Paper_1"));
        assert_eq!(a.prefixes.len(), 2);
    }

    #[test]
    fn test_from_iterator() {
        let triples = vec![Triple::new(iri("Area_a"), iri("hasTopicName"), Term::string("A"))];
        let graph: Graph = triples.into_iter().collect();
        assert_eq!(graph.len(), 1);
    }
}
