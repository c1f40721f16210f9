//! Fluent construction of a [`Schema`]
//!
//! Declarations may appear in any order; every cross-reference is checked
//! once, in [`SchemaBuilder::build`].

use sdm_graph_ir::Datatype;
use smallvec::SmallVec;
use std::collections::HashMap;
use tracing::debug;

use crate::error::{SchemaError, SchemaResult};
use crate::hierarchy::Hierarchy;
use crate::schema::{ClassDecl, PropertyDecl, Range, Schema, SchemaInner};

/// Builder for [`Schema`]
///
/// # Example
///
/// ```
/// use sdm_schema::SchemaBuilder;
/// use sdm_graph_ir::Datatype;
///
/// let schema = SchemaBuilder::new("http://example.org/lib#")
///     .class("Person")
///     .subclass("Author", "Person")
///     .class("Book")
///     .object_property("writtenBy", "Book", "Author")
///     .data_property("title", "Book", Datatype::xsd_string())
///     .build()
///     .unwrap();
///
/// assert!(schema.is_subclass_of("Author", "Person"));
/// ```
#[derive(Debug)]
pub struct SchemaBuilder {
    namespace: String,
    classes: Vec<ClassDecl>,
    properties: Vec<PropertyDecl>,
    sub_properties: Vec<(String, String)>,
    // First error wins; later calls keep chaining
    error: Option<SchemaError>,
}

impl SchemaBuilder {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            classes: Vec::new(),
            properties: Vec::new(),
            sub_properties: Vec::new(),
            error: None,
        }
    }

    fn fail(&mut self, err: SchemaError) {
        if self.error.is_none() {
            self.error = Some(err);
        }
    }

    fn class_mut(&mut self, name: &str) -> Option<&mut ClassDecl> {
        self.classes.iter_mut().find(|c| c.name == name)
    }

    /// Declare a root class (or a class whose parents are added later)
    pub fn class(mut self, name: &str) -> Self {
        if self.class_mut(name).is_some() {
            self.fail(SchemaError::DuplicateClass(name.to_string()));
        } else {
            self.classes.push(ClassDecl {
                name: name.to_string(),
                parents: SmallVec::new(),
            });
        }
        self
    }

    /// Declare `child rdfs:subClassOf parent`, declaring `child` if needed
    pub fn subclass(mut self, child: &str, parent: &str) -> Self {
        match self.class_mut(child) {
            Some(decl) => {
                if !decl.parents.iter().any(|p| p == parent) {
                    decl.parents.push(parent.to_string());
                }
            }
            None => self.classes.push(ClassDecl {
                name: child.to_string(),
                parents: SmallVec::from_iter([parent.to_string()]),
            }),
        }
        self
    }

    fn property(mut self, name: &str, domain: Option<&str>, range: Range) -> Self {
        if self.properties.iter().any(|p| p.name == name) {
            self.fail(SchemaError::DuplicateProperty(name.to_string()));
            return self;
        }
        self.properties.push(PropertyDecl {
            name: name.to_string(),
            domain: domain.map(str::to_string),
            range,
            parent: None,
        });
        self
    }

    /// Declare an object property with a domain and range class
    pub fn object_property(self, name: &str, domain: &str, range: &str) -> Self {
        self.property(name, Some(domain), Range::Class(range.to_string()))
    }

    /// Declare an object property with only a range class
    pub fn object_property_any_domain(self, name: &str, range: &str) -> Self {
        self.property(name, None, Range::Class(range.to_string()))
    }

    /// Declare a data property with a domain class and literal datatype
    pub fn data_property(self, name: &str, domain: &str, datatype: Datatype) -> Self {
        self.property(name, Some(domain), Range::Datatype(datatype))
    }

    /// Declare `child rdfs:subPropertyOf parent`. Both must be declared by
    /// the time `build()` runs.
    pub fn sub_property_of(mut self, child: &str, parent: &str) -> Self {
        self.sub_properties
            .push((child.to_string(), parent.to_string()));
        self
    }

    /// Validate every reference and compute the hierarchy closures
    pub fn build(self) -> SchemaResult<Schema> {
        let SchemaBuilder {
            namespace,
            classes,
            mut properties,
            sub_properties,
            error,
        } = self;

        if let Some(err) = error {
            return Err(err);
        }
        if namespace.is_empty() || !(namespace.ends_with('#') || namespace.ends_with('/')) {
            return Err(SchemaError::InvalidNamespace(namespace));
        }

        let class_index: HashMap<String, usize> = classes
            .iter()
            .enumerate()
            .map(|(i, c)| (c.name.clone(), i))
            .collect();
        let require_class = |class: &str, referenced_by: String| -> SchemaResult<()> {
            if class_index.contains_key(class) {
                Ok(())
            } else {
                Err(SchemaError::UnknownClass {
                    class: class.to_string(),
                    referenced_by,
                })
            }
        };

        for class in &classes {
            for parent in &class.parents {
                require_class(parent, format!("class '{}'", class.name))?;
            }
        }
        for prop in &properties {
            if let Some(domain) = &prop.domain {
                require_class(domain, format!("domain of '{}'", prop.name))?;
            }
            if let Range::Class(range) = &prop.range {
                require_class(range, format!("range of '{}'", prop.name))?;
            }
        }

        let property_index: HashMap<String, usize> = properties
            .iter()
            .enumerate()
            .map(|(i, p)| (p.name.clone(), i))
            .collect();
        for (child, parent) in &sub_properties {
            let referenced_by = format!("subPropertyOf('{child}', '{parent}')");
            let Some(&child_idx) = property_index.get(child) else {
                return Err(SchemaError::UnknownProperty {
                    property: child.clone(),
                    referenced_by,
                });
            };
            if !property_index.contains_key(parent) {
                return Err(SchemaError::UnknownProperty {
                    property: parent.clone(),
                    referenced_by,
                });
            }
            properties[child_idx].parent = Some(parent.clone());
        }

        let class_hierarchy = Hierarchy::from_edges(
            classes
                .iter()
                .flat_map(|c| c.parents.iter().map(move |p| (c.name.as_str(), p.as_str()))),
        )?;
        let property_hierarchy = Hierarchy::from_edges(
            properties
                .iter()
                .filter_map(|p| p.parent.as_deref().map(|parent| (p.name.as_str(), parent))),
        )?;

        debug!(
            namespace = %namespace,
            classes = classes.len(),
            properties = properties.len(),
            "schema built"
        );

        Ok(Schema::from_inner(SchemaInner {
            namespace,
            classes,
            properties,
            class_index,
            property_index,
            class_hierarchy,
            property_hierarchy,
        }))
    }
}
