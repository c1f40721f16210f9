//! Turtle formatter
//!
//! Writes `@prefix` declarations for the graph's registered prefixes, then
//! one block per run of triples sharing a subject:
//!
//! ```text
//! sdm:Conference_7 a sdm:Workshop ;
//!     sdm:hasVenueTitle "2024 ABC" ;
//!     sdm:hasOrganizer sdm:Author_3 .
//! ```
//!
//! Repeated predicates within a block share one line, separated by `,`.
//! IRIs whose local part is not a plain name stay in `<...>` form.

use std::fmt::Write as _;

use sdm_graph_ir::{escape_iri, escape_literal, Graph, LiteralValue, Term, Triple};
use sdm_vocab::{rdf, xsd};

use crate::ntriples::ordered;
use crate::policy::{OrderPolicy, TypeHandling};

/// Configuration for Turtle formatting
#[derive(Clone, Debug)]
pub struct TurtleConfig {
    pub type_handling: TypeHandling,
    pub order: OrderPolicy,

    /// Compact IRIs against the graph's prefixes
    pub compact_iris: bool,

    /// Continuation indent for predicate lines
    pub indent: usize,
}

impl Default for TurtleConfig {
    fn default() -> Self {
        Self {
            type_handling: TypeHandling::default(),
            order: OrderPolicy::default(),
            compact_iris: true,
            indent: 4,
        }
    }
}

impl TurtleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type_handling(mut self, handling: TypeHandling) -> Self {
        self.type_handling = handling;
        self
    }

    pub fn with_order(mut self, order: OrderPolicy) -> Self {
        self.order = order;
        self
    }

    pub fn with_compact_iris(mut self, enabled: bool) -> Self {
        self.compact_iris = enabled;
        self
    }

    /// Fully expanded output, useful for diffing against N-Triples
    pub fn expanded() -> Self {
        Self::new()
            .with_compact_iris(false)
            .with_type_handling(TypeHandling::AsRdfType)
    }
}

/// IRI compaction against a prefix table, longest namespace first
struct Compactor<'a> {
    prefixes: Vec<(&'a str, &'a str)>,
}

impl<'a> Compactor<'a> {
    fn new(graph: &'a Graph, enabled: bool) -> Self {
        let mut prefixes: Vec<(&str, &str)> = if enabled {
            graph
                .prefixes
                .iter()
                .map(|(p, ns)| (p.as_str(), ns.as_str()))
                .collect()
        } else {
            Vec::new()
        };
        prefixes.sort_by(|a, b| b.1.len().cmp(&a.1.len()).then(a.0.cmp(b.0)));
        Self { prefixes }
    }

    fn iri(&self, iri: &str) -> String {
        for (prefix, ns) in &self.prefixes {
            if let Some(local) = iri.strip_prefix(ns) {
                if is_plain_local(local) {
                    return format!("{prefix}:{local}");
                }
            }
        }
        format!("<{}>", escape_iri(iri))
    }

    fn term(&self, term: &Term) -> String {
        match term {
            Term::Iri(iri) => self.iri(iri),
            Term::Literal { value, datatype } => match value {
                LiteralValue::Boolean(b) => b.to_string(),
                LiteralValue::Integer(i) if datatype.as_iri() == xsd::INTEGER => i.to_string(),
                _ => {
                    let quoted = format!("\"{}\"", escape_literal(&value.lexical()));
                    if datatype.is_xsd_string() {
                        quoted
                    } else {
                        format!("{quoted}^^{}", self.iri(datatype.as_iri()))
                    }
                }
            },
        }
    }
}

/// Local names written in prefixed form: ASCII letters, digits, `_` and `-`,
/// not starting with `-`
fn is_plain_local(local: &str) -> bool {
    !local.is_empty()
        && !local.starts_with('-')
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

fn write_block(out: &mut String, triples: &[Triple], compactor: &Compactor<'_>, config: &TurtleConfig) {
    let pad = " ".repeat(config.indent);
    let mut last_predicate: Option<&Term> = None;

    for (i, triple) in triples.iter().enumerate() {
        let object = compactor.term(&triple.o);
        if i == 0 {
            let _ = write!(out, "{} ", compactor.term(&triple.s));
        } else if last_predicate == Some(&triple.p) {
            let _ = write!(out, ", {object}");
            continue;
        } else {
            let _ = write!(out, " ;\n{pad}");
        }
        let predicate = match triple.p.as_iri() {
            Some(rdf::TYPE) if config.type_handling.use_a() => "a".to_string(),
            _ => compactor.term(&triple.p),
        };
        let _ = write!(out, "{predicate} {object}");
        last_predicate = Some(&triple.p);
    }
    out.push_str(" .\n");
}

/// Format a graph as Turtle
pub fn format_turtle(graph: &Graph, config: &TurtleConfig) -> String {
    let compactor = Compactor::new(graph, config.compact_iris);
    let mut out = String::new();

    if config.compact_iris && !graph.prefixes.is_empty() {
        for (prefix, ns) in &graph.prefixes {
            let _ = writeln!(out, "@prefix {prefix}: <{}> .", escape_iri(ns));
        }
        out.push('\n');
    }

    let triples = ordered(graph, config.order);
    let mut start = 0;
    while start < triples.len() {
        let subject = &triples[start].s;
        let end = triples[start..]
            .iter()
            .position(|t| &t.s != subject)
            .map_or(triples.len(), |n| start + n);
        write_block(&mut out, &triples[start..end], &compactor, config);
        start = end;
    }
    out
}
