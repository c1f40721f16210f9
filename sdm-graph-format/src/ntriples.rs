//! N-Triples formatter
//!
//! One `<s> <p> o .` line per triple, IRIs always expanded.

use std::borrow::Cow;
use std::fmt::Write as _;

use sdm_graph_ir::{Graph, Triple};

use crate::policy::OrderPolicy;

/// Triples in the order `policy` asks for
pub(crate) fn ordered(graph: &Graph, policy: OrderPolicy) -> Cow<'_, [Triple]> {
    match policy {
        OrderPolicy::Emission => Cow::Borrowed(graph.triples()),
        OrderPolicy::Canonical => {
            let mut triples = graph.triples().to_vec();
            triples.sort();
            triples.dedup();
            Cow::Owned(triples)
        }
    }
}

/// Format a graph as N-Triples in emission order
pub fn format_ntriples(graph: &Graph) -> String {
    format_ntriples_with(graph, OrderPolicy::Emission)
}

/// Format a graph as N-Triples with an explicit order policy
pub fn format_ntriples_with(graph: &Graph, order: OrderPolicy) -> String {
    let mut out = String::new();
    for triple in ordered(graph, order).iter() {
        // Writing to a String cannot fail
        let _ = writeln!(out, "{triple}");
    }
    out
}
