//! Shared types used across the graph contract and every crate built on it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

/// Edge weight. Stored weights are always strictly positive; a weight of
/// zero means the edge does not exist.
pub type Weight = i64;

/// Bound for vertex labels.
///
/// Labels are identity-only: equality and hashing locate a vertex, and the
/// total order makes every enumeration (vertex sets, edge lists, tie-breaks)
/// reproducible.
pub trait Label: Clone + Eq + Hash + Ord + fmt::Debug {}

impl<T> Label for T where T: Clone + Eq + Hash + Ord + fmt::Debug {}

/// A directed, weighted edge between two vertices.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Edge<L> {
    pub source: L,
    pub target: L,
    pub weight: Weight,
}

impl<L> Edge<L> {
    pub fn new(source: L, target: L, weight: Weight) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }
}

impl<L: fmt::Display> fmt::Display for Edge<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.source, self.target, self.weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_display_matches_arrow_format() {
        let edge = Edge::new("of", "the", 2);
        assert_eq!(edge.to_string(), "of -> the (2)");
    }

    #[test]
    fn edges_order_by_source_then_target() {
        let mut edges = vec![
            Edge::new("b", "a", 1),
            Edge::new("a", "c", 1),
            Edge::new("a", "b", 9),
        ];
        edges.sort();
        let pairs: Vec<_> = edges.iter().map(|e| (e.source, e.target)).collect();
        assert_eq!(pairs, vec![("a", "b"), ("a", "c"), ("b", "a")]);
    }
}
