//! Cross-table reference consistency
//!
//! Mappers record what they declare (the base class of each resource they
//! own) and every use they make of a resource (role tags, object links, data
//! facts). After all tables are mapped, [`check`] verifies that:
//!
//! - no resource is declared more than once (one row per paper, one paper
//!   per submission)
//! - every used resource was declared by the mapper that owns its kind
//! - the classes of a link's subject fall under the property domain
//! - the classes of a link's object fall under the property range
//!
//! Class compatibility is a lookup in the subclass closure, not entailment:
//! a resource's classes are exactly those it was declared or tagged with.

use std::collections::HashMap;
use std::fmt;

use sdm_schema::Schema;
use smallvec::SmallVec;

use crate::table::Table;

/// A resource typed by the mapper that owns it
#[derive(Debug, Clone)]
pub(crate) struct Declaration {
    pub iri: String,
    pub class: &'static str,
    pub table: Table,
    pub row: usize,
}

#[derive(Debug, Clone)]
pub(crate) enum Usage {
    /// Extra role class asserted by a mapper that does not own the resource
    Tag { class: &'static str },
    Link {
        property: &'static str,
        object: String,
    },
    Data { property: &'static str },
}

#[derive(Debug, Clone)]
pub(crate) struct Reference {
    pub subject: String,
    pub usage: Usage,
    pub table: Table,
    pub row: usize,
}

/// Declarations and references collected while mapping
#[derive(Debug, Default)]
pub(crate) struct Ledger {
    pub declarations: Vec<Declaration>,
    pub references: Vec<Reference>,
}

impl Ledger {
    pub fn append(&mut self, other: Ledger) {
        self.declarations.extend(other.declarations);
        self.references.extend(other.references);
    }
}

/// Kind of referential violation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    /// Resource used but never declared by its owning table
    Undeclared,
    /// Resource declared again after its first declaration
    Duplicate { first_table: Table, first_row: usize },
    /// Subject classes are not under the property domain
    DomainMismatch { expected: String },
    /// Object classes are not under the property range
    RangeMismatch { expected: String },
}

/// One referential violation, located at the fact that caused it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub kind: ViolationKind,
    /// The resource at fault
    pub resource: String,
    /// Local name of the predicate (`type` for role tags)
    pub predicate: String,
    pub table: Table,
    pub row: usize,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ViolationKind::Undeclared => write!(f, "undeclared resource <{}>", self.resource)?,
            ViolationKind::Duplicate {
                first_table,
                first_row,
            } => write!(
                f,
                "duplicate resource <{}> (first declared in table '{first_table}' row {first_row})",
                self.resource
            )?,
            ViolationKind::DomainMismatch { expected } => write!(
                f,
                "<{}> is not a {expected} (domain of {})",
                self.resource, self.predicate
            )?,
            ViolationKind::RangeMismatch { expected } => write!(
                f,
                "<{}> is not a {expected} (range of {})",
                self.resource, self.predicate
            )?,
        }
        write!(
            f,
            " via {} in table '{}' row {}",
            self.predicate, self.table, self.row
        )
    }
}

/// Outcome of the consistency pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsistencyReport {
    violations: Vec<Violation>,
}

impl ConsistencyReport {
    /// Violations in the order their facts were emitted
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Number of violations of each kind
    pub fn counts(&self) -> ViolationCounts {
        let mut counts = ViolationCounts::default();
        for v in &self.violations {
            match v.kind {
                ViolationKind::Undeclared => counts.undeclared += 1,
                ViolationKind::Duplicate { .. } => counts.duplicate += 1,
                ViolationKind::DomainMismatch { .. } => counts.domain += 1,
                ViolationKind::RangeMismatch { .. } => counts.range += 1,
            }
        }
        counts
    }
}

/// Per-kind violation totals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViolationCounts {
    pub undeclared: usize,
    pub duplicate: usize,
    pub domain: usize,
    pub range: usize,
}

type ClassSet = SmallVec<[&'static str; 2]>;

struct Checker<'a> {
    schema: &'a Schema,
    declared: HashMap<&'a str, ClassSet>,
    tagged: HashMap<&'a str, ClassSet>,
    report: ConsistencyReport,
}

impl<'a> Checker<'a> {
    fn new(schema: &'a Schema, ledger: &'a Ledger) -> Self {
        let mut report = ConsistencyReport::default();
        let mut first: HashMap<&str, &Declaration> = HashMap::new();
        let mut declared: HashMap<&str, ClassSet> = HashMap::new();
        for d in &ledger.declarations {
            match first.get(d.iri.as_str()) {
                Some(earlier) => report.violations.push(Violation {
                    kind: ViolationKind::Duplicate {
                        first_table: earlier.table,
                        first_row: earlier.row,
                    },
                    resource: d.iri.clone(),
                    predicate: "type".to_string(),
                    table: d.table,
                    row: d.row,
                }),
                None => {
                    first.insert(d.iri.as_str(), d);
                }
            }
            declared.entry(d.iri.as_str()).or_default().push(d.class);
        }
        let mut tagged: HashMap<&str, ClassSet> = HashMap::new();
        for r in &ledger.references {
            if let Usage::Tag { class } = r.usage {
                tagged.entry(r.subject.as_str()).or_default().push(class);
            }
        }
        Self {
            schema,
            declared,
            tagged,
            report,
        }
    }

    fn push(&mut self, kind: ViolationKind, resource: &str, predicate: &str, at: &Reference) {
        self.report.violations.push(Violation {
            kind,
            resource: resource.to_string(),
            predicate: predicate.to_string(),
            table: at.table,
            row: at.row,
        });
    }

    /// Whether `iri` has a declared or tagged class under `expected`
    fn is_a(&self, iri: &str, expected: &str) -> bool {
        self.declared
            .get(iri)
            .into_iter()
            .chain(self.tagged.get(iri))
            .flatten()
            .any(|class| self.schema.is_subclass_of(class, expected))
    }

    /// Check that `iri` is declared, then that it falls under `expected`
    fn check_end(&mut self, iri: &str, expected: Option<&str>, end: End, predicate: &str, at: &Reference) {
        if !self.declared.contains_key(iri) {
            self.push(ViolationKind::Undeclared, iri, predicate, at);
            return;
        }
        let Some(expected) = expected else {
            return;
        };
        if !self.is_a(iri, expected) {
            let expected = expected.to_string();
            let kind = match end {
                End::Subject => ViolationKind::DomainMismatch { expected },
                End::Object => ViolationKind::RangeMismatch { expected },
            };
            self.push(kind, iri, predicate, at);
        }
    }

    fn check(&mut self, r: &Reference) {
        let schema = self.schema;
        match &r.usage {
            Usage::Tag { .. } => self.check_end(&r.subject, None, End::Subject, "type", r),
            Usage::Link { property, object } => {
                let decl = schema.property(property);
                let domain = decl.and_then(|p| p.domain.as_deref());
                let range = decl.and_then(|p| p.range_class());
                self.check_end(&r.subject, domain, End::Subject, property, r);
                self.check_end(object, range, End::Object, property, r);
            }
            Usage::Data { property } => {
                let domain = schema.property(property).and_then(|p| p.domain.as_deref());
                self.check_end(&r.subject, domain, End::Subject, property, r);
            }
        }
    }
}

#[derive(Clone, Copy)]
enum End {
    Subject,
    Object,
}

/// Run the consistency pass over everything a run recorded
///
/// Duplicate declarations are reported first, then reference violations in
/// emission order.
pub(crate) fn check(schema: &Schema, ledger: &Ledger) -> ConsistencyReport {
    let mut checker = Checker::new(schema, ledger);
    for reference in &ledger.references {
        checker.check(reference);
    }
    checker.report
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdm_vocab::sdm::{class, prop, DEFAULT_NS};

    fn schema() -> Schema {
        Schema::academic(DEFAULT_NS).unwrap()
    }

    fn declare(ledger: &mut Ledger, iri: &str, class: &'static str) {
        let row = ledger.declarations.len();
        ledger.declarations.push(Declaration {
            iri: iri.to_string(),
            class,
            table: Table::Paper,
            row,
        });
    }

    fn reference(ledger: &mut Ledger, subject: &str, usage: Usage) {
        ledger.references.push(Reference {
            subject: subject.to_string(),
            usage,
            table: Table::Conference,
            row: 0,
        });
    }

    fn organizes(ledger: &mut Ledger) {
        reference(
            ledger,
            "Conference_7",
            Usage::Link {
                property: prop::HAS_ORGANIZER,
                object: "Author_3".into(),
            },
        );
    }

    #[test]
    fn test_clean_when_declared_and_tagged() {
        let mut ledger = Ledger::default();
        declare(&mut ledger, "Conference_7", class::WORKSHOP);
        declare(&mut ledger, "Author_3", class::AUTHOR);
        reference(&mut ledger, "Author_3", Usage::Tag { class: class::CHAIR });
        organizes(&mut ledger);

        let report = check(&schema(), &ledger);
        assert!(report.is_empty(), "{:?}", report.violations());
    }

    #[test]
    fn test_undeclared_object() {
        let mut ledger = Ledger::default();
        declare(&mut ledger, "Conference_7", class::WORKSHOP);
        reference(&mut ledger, "Author_3", Usage::Tag { class: class::CHAIR });
        organizes(&mut ledger);

        let report = check(&schema(), &ledger);
        // The tag and the link both point at the missing author
        assert_eq!(report.len(), 2);
        assert!(report
            .violations()
            .iter()
            .all(|v| v.kind == ViolationKind::Undeclared && v.resource == "Author_3"));
        assert_eq!(
            report.counts(),
            ViolationCounts {
                undeclared: 2,
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_tag_does_not_declare() {
        let mut ledger = Ledger::default();
        reference(&mut ledger, "Author_9", Usage::Tag { class: class::EDITOR });
        let report = check(&schema(), &ledger);
        assert_eq!(report.len(), 1);
        assert_eq!(report.violations()[0].predicate, "type");
    }

    #[test]
    fn test_range_mismatch_without_role() {
        let mut ledger = Ledger::default();
        declare(&mut ledger, "Conference_7", class::WORKSHOP);
        declare(&mut ledger, "Author_3", class::AUTHOR);
        organizes(&mut ledger);

        let report = check(&schema(), &ledger);
        assert_eq!(report.len(), 1);
        let v = &report.violations()[0];
        assert_eq!(
            v.kind,
            ViolationKind::RangeMismatch {
                expected: class::ORGANIZER.into()
            }
        );
        assert!(v.to_string().contains("range of hasOrganizer"));
    }

    #[test]
    fn test_domain_mismatch_for_data_fact() {
        let mut ledger = Ledger::default();
        declare(&mut ledger, "Journal_J1", class::JOURNAL);
        reference(
            &mut ledger,
            "Journal_J1",
            Usage::Data {
                property: prop::HELD_IN,
            },
        );
        let report = check(&schema(), &ledger);
        assert_eq!(
            report.violations()[0].kind,
            ViolationKind::DomainMismatch {
                expected: class::CONFERENCE.into()
            }
        );
    }

    #[test]
    fn test_related_to_any_domain() {
        let mut ledger = Ledger::default();
        declare(&mut ledger, "Paper_10", class::POSTER);
        declare(&mut ledger, "Area_db", class::AREA);
        reference(
            &mut ledger,
            "Paper_10",
            Usage::Link {
                property: prop::PAPER_RELATED_TO,
                object: "Area_db".into(),
            },
        );
        assert!(check(&schema(), &ledger).is_empty());
    }

    #[test]
    fn test_second_declaration_is_duplicate() {
        let mut ledger = Ledger::default();
        declare(&mut ledger, "Paper_10", class::POSTER);
        declare(&mut ledger, "Submission_s1", class::SUBMISSION);
        declare(&mut ledger, "Paper_11", class::FULL_PAPER);
        declare(&mut ledger, "Submission_s1", class::SUBMISSION);

        let report = check(&schema(), &ledger);
        assert_eq!(report.len(), 1);
        let v = &report.violations()[0];
        assert_eq!(
            v.kind,
            ViolationKind::Duplicate {
                first_table: Table::Paper,
                first_row: 1
            }
        );
        assert_eq!(v.resource, "Submission_s1");
        assert_eq!(v.row, 3);
        assert_eq!(report.counts().duplicate, 1);
        assert!(v.to_string().contains("first declared in table 'paper' row 1"));
    }

    #[test]
    fn test_redeclared_with_other_subtype_is_duplicate() {
        let mut ledger = Ledger::default();
        declare(&mut ledger, "Paper_10", class::POSTER);
        declare(&mut ledger, "Paper_10", class::DEMO_PAPER);

        let report = check(&schema(), &ledger);
        assert_eq!(report.counts().duplicate, 1);
        assert_eq!(report.violations()[0].resource, "Paper_10");
    }
}
