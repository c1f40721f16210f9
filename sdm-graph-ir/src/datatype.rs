//! RDF datatype representation
//!
//! Datatypes are always explicit in this IR. Plain strings use `xsd:string`.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Common XSD datatype IRIs (re-exported from vocab crate)
pub mod iri {
    pub use sdm_vocab::xsd::{
        BOOLEAN as XSD_BOOLEAN, DATE as XSD_DATE, FLOAT as XSD_FLOAT, INTEGER as XSD_INTEGER,
        STRING as XSD_STRING,
    };
}

/// RDF literal datatype, stored as an expanded IRI
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Datatype(Arc<str>);

impl Datatype {
    /// Create a datatype from an expanded IRI
    pub fn from_iri(iri: impl AsRef<str>) -> Self {
        Datatype(Arc::from(iri.as_ref()))
    }

    /// xsd:string - default for plain string literals
    pub fn xsd_string() -> Self {
        Self::from_iri(iri::XSD_STRING)
    }

    /// xsd:boolean
    pub fn xsd_boolean() -> Self {
        Self::from_iri(iri::XSD_BOOLEAN)
    }

    /// xsd:integer
    pub fn xsd_integer() -> Self {
        Self::from_iri(iri::XSD_INTEGER)
    }

    /// xsd:float
    pub fn xsd_float() -> Self {
        Self::from_iri(iri::XSD_FLOAT)
    }

    /// xsd:date
    pub fn xsd_date() -> Self {
        Self::from_iri(iri::XSD_DATE)
    }

    /// Get the IRI representation of this datatype
    pub fn as_iri(&self) -> &str {
        &self.0
    }

    /// Check if this is the xsd:string datatype
    pub fn is_xsd_string(&self) -> bool {
        self.as_iri() == iri::XSD_STRING
    }
}

impl std::fmt::Display for Datatype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_iri())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_datatype_constructors() {
        assert_eq!(Datatype::xsd_string().as_iri(), iri::XSD_STRING);
        assert_eq!(Datatype::xsd_boolean().as_iri(), iri::XSD_BOOLEAN);
        assert_eq!(Datatype::xsd_integer().as_iri(), iri::XSD_INTEGER);
        assert_eq!(Datatype::xsd_float().as_iri(), iri::XSD_FLOAT);
        assert_eq!(Datatype::xsd_date().as_iri(), iri::XSD_DATE);
    }

    #[test]
    fn test_datatype_equality() {
        assert_eq!(Datatype::xsd_date(), Datatype::from_iri(iri::XSD_DATE));
        assert_ne!(Datatype::xsd_string(), Datatype::xsd_integer());
    }

    #[test]
    fn test_is_checks() {
        assert!(Datatype::xsd_string().is_xsd_string());
        assert!(!Datatype::xsd_integer().is_xsd_string());
    }
}
