//! Per-table fact collection
//!
//! A [`TableFacts`] is owned by one table mapper for the duration of its run.
//! It checks every emitted class and predicate against the schema and records
//! declarations and references for the consistency pass.

use sdm_graph_ir::{Graph, Term};
use sdm_schema::{PropertyKind, Schema};
use sdm_vocab::rdf;

use crate::consistency::{Declaration, Ledger, Reference, Usage};
use crate::error::{MappingError, MappingResult};
use crate::resource::{resource_iri, EntityKind};
use crate::table::Table;

/// Facts produced by one table mapper
pub struct TableFacts<'s> {
    schema: &'s Schema,
    table: Table,
    row: usize,
    rdf_type: Term,
    graph: Graph,
    ledger: Ledger,
}

impl<'s> TableFacts<'s> {
    pub fn new(schema: &'s Schema, table: Table) -> Self {
        Self {
            schema,
            table,
            row: 0,
            rdf_type: Term::iri(rdf::TYPE),
            graph: Graph::new(),
            ledger: Ledger::default(),
        }
    }

    pub fn table(&self) -> Table {
        self.table
    }

    /// Facts emitted so far, in emission order
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn len(&self) -> usize {
        self.graph.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    pub(crate) fn set_row(&mut self, row: usize) {
        self.row = row;
    }

    pub(crate) fn into_parts(self) -> (Graph, Ledger) {
        (self.graph, self.ledger)
    }

    /// IRI of the `kind` resource keyed by `key`
    pub fn resource(&self, kind: EntityKind, key: &str) -> String {
        resource_iri(self.schema.namespace(), kind, key)
    }

    fn violation(&self, message: String) -> MappingError {
        MappingError::SchemaViolation {
            table: self.table,
            message,
        }
    }

    fn class_term(&self, class: &str) -> MappingResult<Term> {
        if !self.schema.has_class(class) {
            return Err(self.violation(format!("class '{class}' is not declared")));
        }
        Ok(self.schema.iri(class))
    }

    fn reference(&mut self, subject: &str, usage: Usage) {
        self.ledger.references.push(Reference {
            subject: subject.to_string(),
            usage,
            table: self.table,
            row: self.row,
        });
    }

    /// Type a resource this table owns with its classification
    pub fn declare(&mut self, subject: &str, class: &'static str) -> MappingResult<()> {
        let object = self.class_term(class)?;
        self.graph
            .add_triple(Term::iri(subject), self.rdf_type.clone(), object);
        self.ledger.declarations.push(Declaration {
            iri: subject.to_string(),
            class,
            table: self.table,
            row: self.row,
        });
        Ok(())
    }

    /// Type a resource owned by another table with an extra role class
    pub fn tag(&mut self, subject: &str, class: &'static str) -> MappingResult<()> {
        let object = self.class_term(class)?;
        self.graph
            .add_triple(Term::iri(subject), self.rdf_type.clone(), object);
        self.reference(subject, Usage::Tag { class });
        Ok(())
    }

    /// Emit a data property fact; `None` emits nothing
    pub fn data(
        &mut self,
        subject: &str,
        property: &'static str,
        value: Option<Term>,
    ) -> MappingResult<()> {
        let Some(value) = value else {
            return Ok(());
        };
        let decl = self
            .schema
            .property(property)
            .ok_or_else(|| self.violation(format!("property '{property}' is not declared")))?;
        if decl.kind() != PropertyKind::Data {
            return Err(self.violation(format!("'{property}' is not a data property")));
        }
        if let (Some(range), Some(actual)) = (decl.range_datatype(), value.datatype()) {
            if range != actual {
                return Err(self.violation(format!(
                    "'{property}' expects {range}, got {actual}"
                )));
            }
        }
        if !value.is_literal() {
            return Err(self.violation(format!("'{property}' expects a literal")));
        }
        let predicate = self.schema.iri(property);
        self.graph.add_triple(Term::iri(subject), predicate, value);
        self.reference(subject, Usage::Data { property });
        Ok(())
    }

    /// Emit an object property fact between two resources
    pub fn link(&mut self, subject: &str, property: &'static str, object: &str) -> MappingResult<()> {
        let decl = self
            .schema
            .property(property)
            .ok_or_else(|| self.violation(format!("property '{property}' is not declared")))?;
        if decl.kind() != PropertyKind::Object {
            return Err(self.violation(format!("'{property}' is not an object property")));
        }
        let predicate = self.schema.iri(property);
        self.graph
            .add_triple(Term::iri(subject), predicate, Term::iri(object));
        self.reference(
            subject,
            Usage::Link {
                property,
                object: object.to_string(),
            },
        );
        Ok(())
    }
}
