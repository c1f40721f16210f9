//! RDF triple

use crate::Term;
use serde::{Deserialize, Serialize};

/// A single subject-predicate-object fact
///
/// Ordering is lexicographic over (subject, predicate, object), which is what
/// `Graph::sort()` relies on.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Triple {
    /// Subject (always an IRI in this workspace)
    pub s: Term,
    /// Predicate (always an IRI)
    pub p: Term,
    /// Object (IRI or literal)
    pub o: Term,
}

impl Triple {
    /// Create a triple from its three terms
    pub fn new(s: Term, p: Term, o: Term) -> Self {
        Self { s, p, o }
    }
}

impl std::fmt::Display for Triple {
    /// N-Triples statement, without the trailing newline
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} .", self.s, self.p, self.o)
    }
}
