//! Transitive closure of the class and property hierarchies
//!
//! Closures are computed once at schema build time in both directions:
//! - descendants: `subclasses(Organizer)` is `[Chair, Editor]`
//! - ancestors: `superclasses(Chair)` is `[Organizer, Author, Person]`
//!
//! Neither direction includes the term itself.

use smallvec::SmallVec;
use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Arc;

use crate::error::{SchemaError, SchemaResult};

/// Adjacency map: term -> immediate neighbours in one direction
pub(crate) type Edges = HashMap<String, SmallVec<[String; 2]>>;

/// Closed hierarchy over one kind of term (classes or properties)
#[derive(Debug, Default)]
pub(crate) struct Hierarchy {
    descendants: HashMap<String, Arc<[String]>>,
    ancestors: HashMap<String, Arc<[String]>>,
}

static EMPTY: &[String] = &[];

impl Hierarchy {
    /// Build from `(child, parent)` edges.
    ///
    /// Fails on a cycle, since a cyclic subclass graph would make every class
    /// on the cycle equivalent, which the vocabulary never intends.
    pub(crate) fn from_edges<'a>(
        edges: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> SchemaResult<Self> {
        let mut down: Edges = HashMap::new();
        let mut up: Edges = HashMap::new();
        for (child, parent) in edges {
            down.entry(parent.to_string())
                .or_default()
                .push(child.to_string());
            up.entry(child.to_string())
                .or_default()
                .push(parent.to_string());
        }

        Ok(Self {
            descendants: compute_transitive_closure(&down)?,
            ancestors: compute_transitive_closure(&up)?,
        })
    }

    pub(crate) fn descendants(&self, term: &str) -> &[String] {
        self.descendants.get(term).map(|a| a.as_ref()).unwrap_or(EMPTY)
    }

    pub(crate) fn ancestors(&self, term: &str) -> &[String] {
        self.ancestors.get(term).map(|a| a.as_ref()).unwrap_or(EMPTY)
    }
}

/// Compute the closure using BFS from each node that has neighbours.
fn compute_transitive_closure(direct: &Edges) -> SchemaResult<HashMap<String, Arc<[String]>>> {
    let mut closure = HashMap::new();

    // Sorted starts keep error reporting deterministic
    let mut starts: Vec<&String> = direct.keys().collect();
    starts.sort();

    for start in starts {
        let reachable = compute_reachable(start, direct)?;
        if !reachable.is_empty() {
            closure.insert(start.clone(), reachable.into());
        }
    }

    Ok(closure)
}

/// All nodes reachable from `start`, excluding `start`, in BFS order.
fn compute_reachable(start: &str, direct: &Edges) -> SchemaResult<Vec<String>> {
    let mut visited: HashSet<&str> = HashSet::new();
    let mut queue: VecDeque<&str> = VecDeque::new();
    let mut result = Vec::new();

    visited.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        let Some(next) = direct.get(current) else {
            continue;
        };
        for node in next {
            if node == start {
                return Err(SchemaError::Cycle(start.to_string()));
            }
            if visited.insert(node.as_str()) {
                queue.push_back(node.as_str());
                result.push(node.clone());
            }
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_level() {
        let h = Hierarchy::from_edges([("Dog", "Animal"), ("Cat", "Animal")]).unwrap();

        let subs = h.descendants("Animal");
        assert_eq!(subs.len(), 2);
        assert!(subs.contains(&"Dog".to_string()));
        assert!(subs.contains(&"Cat".to_string()));
        assert!(h.descendants("Dog").is_empty());
        assert_eq!(h.ancestors("Cat"), ["Animal".to_string()]);
    }

    #[test]
    fn test_multi_level_ancestors_are_nearest_first() {
        let h = Hierarchy::from_edges([
            ("Chair", "Organizer"),
            ("Organizer", "Author"),
            ("Author", "Person"),
        ])
        .unwrap();

        assert_eq!(h.ancestors("Chair"), ["Organizer", "Author", "Person"]);
        assert_eq!(h.descendants("Person").len(), 3);
    }

    #[test]
    fn test_diamond_visits_once() {
        let h = Hierarchy::from_edges([("B", "A"), ("C", "A"), ("D", "B"), ("D", "C")]).unwrap();
        assert_eq!(h.descendants("A").len(), 3);
        assert_eq!(h.ancestors("D").len(), 3);
    }

    #[test]
    fn test_cycle_is_rejected() {
        let err = Hierarchy::from_edges([("A", "B"), ("B", "A")]).unwrap_err();
        assert!(matches!(err, SchemaError::Cycle(_)));
    }

    #[test]
    fn test_unknown_term_is_empty() {
        let h = Hierarchy::from_edges([("B", "A")]).unwrap();
        assert!(h.ancestors("Z").is_empty());
        assert!(h.descendants("Z").is_empty());
    }
}
