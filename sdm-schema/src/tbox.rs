//! Structural layer (TBox) as graph facts

use sdm_graph_ir::{Graph, Term};
use sdm_vocab::{prefixes, rdf, rdfs, xsd};

use crate::schema::{Range, Schema};

impl Schema {
    /// Render the schema as RDFS triples.
    ///
    /// Emits `rdfs:subClassOf` for every class edge, then for each property
    /// its `rdfs:subPropertyOf`, `rdfs:domain` and `rdfs:range`, all in
    /// declaration order. The `sdm`, `rdf`, `rdfs` and `xsd` prefixes are
    /// registered on the graph.
    pub fn to_graph(&self) -> Graph {
        let mut graph = Graph::new();
        graph.add_prefix(prefixes::SDM, self.namespace());
        graph.add_prefix(prefixes::RDF, rdf::NS);
        graph.add_prefix(prefixes::RDFS, rdfs::NS);
        graph.add_prefix(prefixes::XSD, xsd::NS);

        let sub_class_of = Term::iri(rdfs::SUB_CLASS_OF);
        for class in self.classes() {
            for parent in &class.parents {
                graph.add_triple(self.iri(&class.name), sub_class_of.clone(), self.iri(parent));
            }
        }

        for prop in self.properties() {
            let subject = self.iri(&prop.name);
            if let Some(parent) = &prop.parent {
                graph.add_triple(
                    subject.clone(),
                    Term::iri(rdfs::SUB_PROPERTY_OF),
                    self.iri(parent),
                );
            }
            if let Some(domain) = &prop.domain {
                graph.add_triple(subject.clone(), Term::iri(rdfs::DOMAIN), self.iri(domain));
            }
            let range = match &prop.range {
                Range::Class(class) => self.iri(class),
                Range::Datatype(dt) => Term::iri(dt.as_iri()),
            };
            graph.add_triple(subject, Term::iri(rdfs::RANGE), range);
        }

        graph
    }
}

#[cfg(test)]
mod tests {
    use crate::Schema;
    use sdm_graph_ir::{Term, Triple};
    use sdm_vocab::sdm::DEFAULT_NS;
    use sdm_vocab::{rdfs, xsd};

    fn sdm(local: &str) -> Term {
        Term::iri(format!("{DEFAULT_NS}{local}"))
    }

    fn tbox() -> Vec<Triple> {
        Schema::academic(DEFAULT_NS).unwrap().to_graph().into_triples()
    }

    #[test]
    fn test_subclass_edges() {
        let triples = tbox();
        let expected = Triple::new(sdm("Chair"), Term::iri(rdfs::SUB_CLASS_OF), sdm("Organizer"));
        assert!(triples.contains(&expected));

        let edges = triples
            .iter()
            .filter(|t| t.p == Term::iri(rdfs::SUB_CLASS_OF))
            .count();
        // 4 people + 4 papers + 2 publications + 6 venues
        assert_eq!(edges, 16);
    }

    #[test]
    fn test_property_declarations() {
        let triples = tbox();
        assert!(triples.contains(&Triple::new(
            sdm("posterPublishedIn"),
            Term::iri(rdfs::SUB_PROPERTY_OF),
            sdm("publishedIn"),
        )));
        assert!(triples.contains(&Triple::new(
            sdm("hasHIndex"),
            Term::iri(rdfs::RANGE),
            Term::iri(xsd::FLOAT),
        )));
        // relatedTo has a range but no domain
        assert!(!triples
            .iter()
            .any(|t| t.s == sdm("relatedTo") && t.p == Term::iri(rdfs::DOMAIN)));
    }

    #[test]
    fn test_prefixes_registered() {
        let graph = Schema::academic(DEFAULT_NS).unwrap().to_graph();
        assert_eq!(graph.prefixes.get("sdm").map(String::as_str), Some(DEFAULT_NS));
        assert!(graph.prefixes.contains_key("xsd"));
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(tbox(), tbox());
    }
}
