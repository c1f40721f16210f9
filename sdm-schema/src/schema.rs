//! The immutable schema and its declarations

use sdm_graph_ir::{Datatype, Term};
use smallvec::SmallVec;
use std::collections::HashMap;
use std::sync::Arc;

use crate::hierarchy::Hierarchy;

/// A declared class and its direct parents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDecl {
    /// Local name (e.g. `"Chair"`)
    pub name: String,
    /// Direct superclasses, in declaration order
    pub parents: SmallVec<[String; 1]>,
}

/// Whether a property links two resources or a resource to a literal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    Object,
    Data,
}

/// Declared range of a property
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Range {
    /// Object property: values are resources of this class
    Class(String),
    /// Data property: values are literals of this datatype
    Datatype(Datatype),
}

/// A declared property
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDecl {
    /// Local name (e.g. `"posterPublishedIn"`)
    pub name: String,
    /// Domain class, if declared
    pub domain: Option<String>,
    /// Range class or datatype
    pub range: Range,
    /// Parent property (`rdfs:subPropertyOf`), if any
    pub parent: Option<String>,
}

impl PropertyDecl {
    pub fn kind(&self) -> PropertyKind {
        match self.range {
            Range::Class(_) => PropertyKind::Object,
            Range::Datatype(_) => PropertyKind::Data,
        }
    }

    /// Range class for object properties
    pub fn range_class(&self) -> Option<&str> {
        match &self.range {
            Range::Class(c) => Some(c),
            Range::Datatype(_) => None,
        }
    }

    /// Range datatype for data properties
    pub fn range_datatype(&self) -> Option<&Datatype> {
        match &self.range {
            Range::Datatype(dt) => Some(dt),
            Range::Class(_) => None,
        }
    }
}

/// Arc-backed, immutable schema. Cloning is cheap.
///
/// Terms are addressed by local name; [`Schema::term`] resolves a local name
/// against the schema's namespace.
#[derive(Clone, Debug)]
pub struct Schema {
    inner: Arc<SchemaInner>,
}

#[derive(Debug)]
pub(crate) struct SchemaInner {
    pub(crate) namespace: String,
    /// Declaration order is preserved for TBox output
    pub(crate) classes: Vec<ClassDecl>,
    pub(crate) properties: Vec<PropertyDecl>,
    pub(crate) class_index: HashMap<String, usize>,
    pub(crate) property_index: HashMap<String, usize>,
    pub(crate) class_hierarchy: Hierarchy,
    pub(crate) property_hierarchy: Hierarchy,
}

impl Schema {
    pub(crate) fn from_inner(inner: SchemaInner) -> Self {
        Self {
            inner: Arc::new(inner),
        }
    }

    /// Namespace every vocabulary term and resource IRI is minted under
    pub fn namespace(&self) -> &str {
        &self.inner.namespace
    }

    /// Expand a local name against the namespace
    pub fn term(&self, local: &str) -> String {
        format!("{}{}", self.inner.namespace, local)
    }

    /// Expand a local name into an IRI term
    pub fn iri(&self, local: &str) -> Term {
        Term::iri(self.term(local))
    }

    /// Strip the namespace from an IRI, if it is in this schema's namespace
    pub fn local_name<'a>(&self, iri: &'a str) -> Option<&'a str> {
        iri.strip_prefix(self.inner.namespace.as_str())
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.inner.class_index.contains_key(name)
    }

    pub fn class(&self, name: &str) -> Option<&ClassDecl> {
        self.inner
            .class_index
            .get(name)
            .map(|&i| &self.inner.classes[i])
    }

    /// All classes in declaration order
    pub fn classes(&self) -> &[ClassDecl] {
        &self.inner.classes
    }

    pub fn property(&self, name: &str) -> Option<&PropertyDecl> {
        self.inner
            .property_index
            .get(name)
            .map(|&i| &self.inner.properties[i])
    }

    /// All properties in declaration order
    pub fn properties(&self) -> &[PropertyDecl] {
        &self.inner.properties
    }

    /// Reflexive, transitive subclass test.
    ///
    /// Unknown classes are only subclasses of themselves.
    pub fn is_subclass_of(&self, sub: &str, sup: &str) -> bool {
        sub == sup || self.superclasses_of(sub).iter().any(|c| c == sup)
    }

    /// All ancestors of `class`, nearest first. Does not include `class`.
    pub fn superclasses_of(&self, class: &str) -> &[String] {
        self.inner.class_hierarchy.ancestors(class)
    }

    /// All descendants of `class`. Does not include `class`.
    pub fn subclasses_of(&self, class: &str) -> &[String] {
        self.inner.class_hierarchy.descendants(class)
    }

    /// All descendants of `property`. Does not include `property`.
    pub fn subproperties_of(&self, property: &str) -> &[String] {
        self.inner.property_hierarchy.descendants(property)
    }

    /// Reflexive, transitive subproperty test
    pub fn is_subproperty_of(&self, sub: &str, sup: &str) -> bool {
        sub == sup
            || self
                .inner
                .property_hierarchy
                .ancestors(sub)
                .iter()
                .any(|p| p == sup)
    }
}

#[cfg(test)]
mod tests {
    use crate::SchemaBuilder;
    use sdm_graph_ir::Datatype;

    const NS: &str = "http://example.org/test#";

    fn small() -> crate::Schema {
        SchemaBuilder::new(NS)
            .class("Person")
            .subclass("Author", "Person")
            .subclass("Chair", "Author")
            .class("Paper")
            .object_property("hasAuthor", "Paper", "Author")
            .object_property_any_domain("relatedTo", "Person")
            .object_property("paperRelatedTo", "Paper", "Person")
            .sub_property_of("paperRelatedTo", "relatedTo")
            .data_property("name", "Person", Datatype::xsd_string())
            .build()
            .unwrap()
    }

    #[test]
    fn test_term_and_local_name() {
        let schema = small();
        assert_eq!(schema.term("Paper"), "http://example.org/test#Paper");
        assert_eq!(
            schema.local_name("http://example.org/test#Author_3"),
            Some("Author_3")
        );
        assert_eq!(schema.local_name("http://other.org/x"), None);
    }

    #[test]
    fn test_class_queries() {
        let schema = small();
        assert!(schema.has_class("Chair"));
        assert!(!schema.has_class("Venue"));
        assert!(schema.is_subclass_of("Chair", "Person"));
        assert!(schema.is_subclass_of("Paper", "Paper"));
        assert!(!schema.is_subclass_of("Person", "Chair"));
        assert_eq!(schema.superclasses_of("Chair"), ["Author", "Person"]);
        assert_eq!(schema.class("Author").unwrap().parents.as_slice(), ["Person"]);
    }

    #[test]
    fn test_property_queries() {
        let schema = small();
        let p = schema.property("hasAuthor").unwrap();
        assert_eq!(p.domain.as_deref(), Some("Paper"));
        assert_eq!(p.range_class(), Some("Author"));
        assert_eq!(p.kind(), super::PropertyKind::Object);

        let name = schema.property("name").unwrap();
        assert_eq!(name.range_datatype(), Some(&Datatype::xsd_string()));

        assert!(schema.property("relatedTo").unwrap().domain.is_none());
        assert_eq!(schema.subproperties_of("relatedTo"), ["paperRelatedTo"]);
        assert!(schema.is_subproperty_of("paperRelatedTo", "relatedTo"));
        assert!(!schema.is_subproperty_of("relatedTo", "paperRelatedTo"));
    }
}
