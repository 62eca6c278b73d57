//! Vertex-centric implementation of the WeightedGraph trait.
//!
//! Every vertex owns an ordered map of its outgoing edges. Target lookups
//! and point weights are O(log n); `sources` scans every vertex's map.

use graphpoet_core::error::Result;
use graphpoet_core::graph::{check_edge, check_vertex, debug_check, validate_weight, WeightedGraph};
use graphpoet_core::types::{Edge, Label, Weight};
use std::collections::{BTreeMap, BTreeSet};

/// Adjacency-map implementation of the weighted graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyGraph<L: Label> {
    /// Vertex -> (target -> weight). Every vertex has an entry, possibly empty.
    outgoing: BTreeMap<L, BTreeMap<L, Weight>>,
}

impl<L: Label> AdjacencyGraph<L> {
    pub fn new() -> Self {
        Self {
            outgoing: BTreeMap::new(),
        }
    }
}

impl<L: Label> Default for AdjacencyGraph<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Label> WeightedGraph<L> for AdjacencyGraph<L> {
    fn add(&mut self, vertex: L) -> bool {
        if self.outgoing.contains_key(&vertex) {
            return false;
        }
        self.outgoing.insert(vertex.clone(), BTreeMap::new());
        debug_check(|| check_vertex(&*self, &vertex, true));
        true
    }

    fn set(&mut self, source: L, target: L, weight: Weight) -> Result<Weight> {
        validate_weight(weight)?;

        self.outgoing.entry(target.clone()).or_default();
        let edges = self.outgoing.entry(source.clone()).or_default();
        let previous = if weight == 0 {
            edges.remove(&target)
        } else {
            edges.insert(target.clone(), weight)
        };

        debug_check(|| check_edge(&*self, &source, &target, weight));
        Ok(previous.unwrap_or(0))
    }

    fn remove(&mut self, vertex: &L) -> bool {
        if self.outgoing.remove(vertex).is_none() {
            return false;
        }
        for edges in self.outgoing.values_mut() {
            edges.remove(vertex);
        }
        debug_check(|| check_vertex(&*self, vertex, false));
        true
    }

    fn vertices(&self) -> BTreeSet<L> {
        self.outgoing.keys().cloned().collect()
    }

    fn sources(&self, target: &L) -> BTreeMap<L, Weight> {
        self.outgoing
            .iter()
            .filter_map(|(source, edges)| edges.get(target).map(|w| (source.clone(), *w)))
            .collect()
    }

    fn targets(&self, source: &L) -> BTreeMap<L, Weight> {
        self.outgoing.get(source).cloned().unwrap_or_default()
    }

    fn weight(&self, source: &L, target: &L) -> Weight {
        self.outgoing
            .get(source)
            .and_then(|edges| edges.get(target))
            .copied()
            .unwrap_or(0)
    }

    fn contains(&self, vertex: &L) -> bool {
        self.outgoing.contains_key(vertex)
    }

    fn vertex_count(&self) -> usize {
        self.outgoing.len()
    }

    fn edge_count(&self) -> usize {
        self.outgoing.values().map(BTreeMap::len).sum()
    }

    fn edges(&self) -> Vec<Edge<L>> {
        // Nested ordered maps already yield (source, target) order.
        self.outgoing
            .iter()
            .flat_map(|(source, edges)| {
                edges
                    .iter()
                    .map(move |(target, w)| Edge::new(source.clone(), target.clone(), *w))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_vertex_has_an_edge_map() {
        let mut graph = AdjacencyGraph::new();
        graph.set("a", "b", 0).unwrap();

        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.targets(&"b").is_empty());
    }

    #[test]
    fn sources_scan_finds_all_incoming() {
        let mut graph = AdjacencyGraph::new();
        graph.set("x", "z", 1).unwrap();
        graph.set("y", "z", 2).unwrap();
        graph.set("z", "x", 3).unwrap();

        let sources = graph.sources(&"z");
        assert_eq!(sources.into_iter().collect::<Vec<_>>(), vec![("x", 1), ("y", 2)]);
    }

    #[test]
    fn edges_are_already_sorted() {
        let mut graph = AdjacencyGraph::new();
        graph.set("b", "a", 1).unwrap();
        graph.set("a", "c", 1).unwrap();
        graph.set("a", "b", 1).unwrap();

        let pairs: Vec<_> = graph.edges().into_iter().map(|e| (e.source, e.target)).collect();
        assert_eq!(pairs, vec![("a", "b"), ("a", "c"), ("b", "a")]);
    }
}
