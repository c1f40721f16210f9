//! Resource identifiers
//!
//! Every instance resource is named `namespace + Kind + "_" + key`, where the
//! key is the row's natural key with each whitespace character replaced by
//! `_`. The function is pure: the same kind and key always give the same IRI,
//! so mappers for different tables agree on the names of shared resources
//! without coordinating.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s").expect("valid regex"));

/// Kinds of resource with an identifier of their own
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
    Area,
    Author,
    Conference,
    Journal,
    Volume,
    Proceeding,
    Paper,
    Submission,
    Review,
}

impl EntityKind {
    /// Identifier prefix, also the local name of the kind's base class
    pub fn label(self) -> &'static str {
        match self {
            EntityKind::Area => "Area",
            EntityKind::Author => "Author",
            EntityKind::Conference => "Conference",
            EntityKind::Journal => "Journal",
            EntityKind::Volume => "Volume",
            EntityKind::Proceeding => "Proceeding",
            EntityKind::Paper => "Paper",
            EntityKind::Submission => "Submission",
            EntityKind::Review => "Review",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Build the IRI of the `kind` resource with natural key `key`
pub fn resource_iri(namespace: &str, kind: EntityKind, key: &str) -> String {
    let key = WHITESPACE.replace_all(key, "_");
    format!("{namespace}{}_{key}", kind.label())
}

#[cfg(test)]
mod tests {
    use super::*;

    const NS: &str = "http://example.org/sdm#";

    #[test]
    fn test_basic_identifier() {
        assert_eq!(
            resource_iri(NS, EntityKind::Conference, "7"),
            "http://example.org/sdm#Conference_7"
        );
        assert_eq!(
            resource_iri(NS, EntityKind::Proceeding, "P-9"),
            "http://example.org/sdm#Proceeding_P-9"
        );
    }

    #[test]
    fn test_each_whitespace_char_replaced() {
        assert_eq!(
            resource_iri(NS, EntityKind::Area, "machine  learning\tsystems"),
            "http://example.org/sdm#Area_machine__learning_systems"
        );
        assert_eq!(resource_iri(NS, EntityKind::Area, " x\n"), format!("{NS}Area__x_"));
    }

    #[test]
    fn test_pure_function_of_kind_and_key() {
        let a = resource_iri(NS, EntityKind::Paper, "10");
        let b = resource_iri(NS, EntityKind::Paper, "10");
        assert_eq!(a, b);
        assert_ne!(a, resource_iri(NS, EntityKind::Submission, "10"));
    }

    #[test]
    fn test_other_namespace() {
        assert_eq!(
            resource_iri("https://pubs.example.com/onto/", EntityKind::Author, "3"),
            "https://pubs.example.com/onto/Author_3"
        );
    }
}
