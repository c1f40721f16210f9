//! Schema construction errors

use thiserror::Error;

/// Errors raised while building a [`Schema`](crate::Schema)
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Namespace is empty or does not end in `#` or `/`
    #[error("Invalid namespace '{0}': must be non-empty and end with '#' or '/'")]
    InvalidNamespace(String),

    /// A class was declared twice with conflicting parents
    #[error("Class '{0}' declared more than once")]
    DuplicateClass(String),

    /// A property was declared twice
    #[error("Property '{0}' declared more than once")]
    DuplicateProperty(String),

    /// A declaration refers to a class that was never declared
    #[error("Unknown class '{class}' referenced by {referenced_by}")]
    UnknownClass {
        class: String,
        referenced_by: String,
    },

    /// A declaration refers to a property that was never declared
    #[error("Unknown property '{property}' referenced by {referenced_by}")]
    UnknownProperty {
        property: String,
        referenced_by: String,
    },

    /// The subclass or subproperty graph has a cycle through this term
    #[error("Hierarchy cycle through '{0}'")]
    Cycle(String),
}

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;
