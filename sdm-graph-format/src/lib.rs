//! RDF graph serializers
//!
//! Converts an `sdm_graph_ir::Graph` to text:
//!
//! - **N-Triples**: one fully expanded triple per line
//! - **Turtle**: prefixed names, subject blocks, `a` for `rdf:type`
//!
//! Both keep the graph's emission order unless an [`OrderPolicy`] asks for
//! canonical (sorted, deduplicated) output.
//!
//! # Example
//!
//! ```
//! use sdm_graph_ir::{Graph, Term};
//! use sdm_graph_format::{format_turtle, TurtleConfig};
//!
//! let mut graph = Graph::new();
//! graph.add_prefix("sdm", "http://example.org/sdm#");
//! graph.add_triple(
//!     Term::iri("http://example.org/sdm#Area_db"),
//!     Term::iri("http://example.org/sdm#hasTopicName"),
//!     Term::string("Databases"),
//! );
//!
//! let ttl = format_turtle(&graph, &TurtleConfig::default());
//! assert!(ttl.contains("sdm:Area_db sdm:hasTopicName \"Databases\" ."));
//! ```

mod error;
mod ntriples;
mod policy;
mod turtle;

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use sdm_graph_ir::Graph;
use serde::{Deserialize, Serialize};

pub use error::{FormatError, FormatResult};
pub use ntriples::{format_ntriples, format_ntriples_with};
pub use policy::{OrderPolicy, TypeHandling};
pub use turtle::{format_turtle, TurtleConfig};

/// Output syntax
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    NTriples,
    Turtle,
}

impl Format {
    /// Conventional file extension
    pub fn extension(self) -> &'static str {
        match self {
            Format::NTriples => "nt",
            Format::Turtle => "ttl",
        }
    }

    /// Guess the format from a file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "nt" => Some(Format::NTriples),
            "ttl" => Some(Format::Turtle),
            _ => None,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Format::NTriples => "ntriples",
            Format::Turtle => "turtle",
        })
    }
}

impl FromStr for Format {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ntriples" | "n-triples" | "nt" => Ok(Format::NTriples),
            "turtle" | "ttl" => Ok(Format::Turtle),
            _ => Err(FormatError::UnknownFormat(s.to_string())),
        }
    }
}

/// Render `graph` in `format` using `order`
pub fn format_graph(graph: &Graph, format: Format, order: OrderPolicy) -> String {
    match format {
        Format::NTriples => format_ntriples_with(graph, order),
        Format::Turtle => format_turtle(graph, &TurtleConfig::default().with_order(order)),
    }
}

/// Write `graph` to `out` in `format`, emission order
pub fn write_graph<W: Write>(graph: &Graph, format: Format, out: W) -> FormatResult<()> {
    write_graph_with(graph, format, OrderPolicy::Emission, out)
}

/// Write `graph` to `out` in `format` with an explicit order policy
pub fn write_graph_with<W: Write>(
    graph: &Graph,
    format: Format,
    order: OrderPolicy,
    mut out: W,
) -> FormatResult<()> {
    out.write_all(format_graph(graph, format, order).as_bytes())?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdm_graph_ir::Term;

    #[test]
    fn test_parse_format() {
        assert_eq!("turtle".parse::<Format>().unwrap(), Format::Turtle);
        assert_eq!("NT".parse::<Format>().unwrap(), Format::NTriples);
        assert!(matches!(
            "jsonld".parse::<Format>(),
            Err(FormatError::UnknownFormat(_))
        ));
        assert_eq!(Format::from_extension("TTL"), Some(Format::Turtle));
        assert_eq!(Format::Turtle.extension(), "ttl");
    }

    #[test]
    fn test_write_graph_to_buffer() {
        let mut graph = Graph::new();
        graph.add_triple(
            Term::iri("http://example.org/sdm#Area_db"),
            Term::iri("http://example.org/sdm#hasTopicName"),
            Term::string("Databases"),
        );
        let mut buf = Vec::new();
        write_graph(&graph, Format::NTriples, &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "<http://example.org/sdm#Area_db> <http://example.org/sdm#hasTopicName> \"Databases\" .\n"
        );
    }
}
