//! Concrete implementation of the WeightedGraph trait using petgraph.
//!
//! This implementation uses petgraph's `StableDiGraph` as the backing store
//! with a HashMap index for O(1) vertex lookup by label. Stable indices
//! survive vertex removal, so the index never needs rebuilding.

use graphpoet_core::error::Result;
use graphpoet_core::graph::{check_edge, check_vertex, debug_check, validate_weight, WeightedGraph};
use graphpoet_core::types::{Edge, Label, Weight};
use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use petgraph::visit::{EdgeRef, IntoEdgeReferences};
use petgraph::Direction;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Petgraph-backed implementation of the weighted graph.
#[derive(Debug, Clone)]
pub struct PetWeightedGraph<L: Label> {
    graph: StableDiGraph<L, Weight>,
    /// Map from a label to petgraph's internal index.
    node_index: HashMap<L, NodeIndex>,
}

impl<L: Label> PetWeightedGraph<L> {
    pub fn new() -> Self {
        Self {
            graph: StableDiGraph::new(),
            node_index: HashMap::new(),
        }
    }

    /// Index of `vertex`, inserting it first if absent.
    fn ensure_vertex(&mut self, vertex: L) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(&vertex) {
            return idx;
        }
        let idx = self.graph.add_node(vertex.clone());
        self.node_index.insert(vertex, idx);
        idx
    }

    /// Collect the edges around `idx` in one direction, keyed by the
    /// label on the far end.
    fn neighbors_directed(&self, idx: NodeIndex, direction: Direction) -> BTreeMap<L, Weight> {
        self.graph
            .edges_directed(idx, direction)
            .map(|edge| {
                let other = match direction {
                    Direction::Outgoing => edge.target(),
                    Direction::Incoming => edge.source(),
                };
                (self.graph[other].clone(), *edge.weight())
            })
            .collect()
    }
}

impl<L: Label> Default for PetWeightedGraph<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Label> WeightedGraph<L> for PetWeightedGraph<L> {
    fn add(&mut self, vertex: L) -> bool {
        if self.node_index.contains_key(&vertex) {
            return false;
        }
        let idx = self.ensure_vertex(vertex);
        debug_check(|| check_vertex(&*self, &self.graph[idx], true));
        true
    }

    fn set(&mut self, source: L, target: L, weight: Weight) -> Result<Weight> {
        validate_weight(weight)?;

        let from_idx = self.ensure_vertex(source);
        let to_idx = self.ensure_vertex(target);

        let previous = match self.graph.find_edge(from_idx, to_idx) {
            Some(edge_idx) if weight == 0 => self.graph.remove_edge(edge_idx).unwrap_or(0),
            Some(edge_idx) => std::mem::replace(&mut self.graph[edge_idx], weight),
            None if weight == 0 => 0,
            None => {
                self.graph.add_edge(from_idx, to_idx, weight);
                0
            }
        };

        debug_check(|| check_edge(&*self, &self.graph[from_idx], &self.graph[to_idx], weight));
        Ok(previous)
    }

    fn remove(&mut self, vertex: &L) -> bool {
        let Some(idx) = self.node_index.remove(vertex) else {
            return false;
        };
        // StableGraph drops every incident edge along with the node.
        self.graph.remove_node(idx);
        debug_check(|| check_vertex(&*self, vertex, false));
        true
    }

    fn vertices(&self) -> BTreeSet<L> {
        self.node_index.keys().cloned().collect()
    }

    fn sources(&self, target: &L) -> BTreeMap<L, Weight> {
        match self.node_index.get(target) {
            Some(&idx) => self.neighbors_directed(idx, Direction::Incoming),
            None => BTreeMap::new(),
        }
    }

    fn targets(&self, source: &L) -> BTreeMap<L, Weight> {
        match self.node_index.get(source) {
            Some(&idx) => self.neighbors_directed(idx, Direction::Outgoing),
            None => BTreeMap::new(),
        }
    }

    fn weight(&self, source: &L, target: &L) -> Weight {
        let (Some(&from_idx), Some(&to_idx)) =
            (self.node_index.get(source), self.node_index.get(target))
        else {
            return 0;
        };
        self.graph
            .find_edge(from_idx, to_idx)
            .map(|edge_idx| self.graph[edge_idx])
            .unwrap_or(0)
    }

    fn contains(&self, vertex: &L) -> bool {
        self.node_index.contains_key(vertex)
    }

    fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    fn edges(&self) -> Vec<Edge<L>> {
        let mut edges: Vec<Edge<L>> = self
            .graph
            .edge_references()
            .map(|edge| {
                Edge::new(
                    self.graph[edge.source()].clone(),
                    self.graph[edge.target()].clone(),
                    *edge.weight(),
                )
            })
            .collect();
        edges.sort();
        edges
    }
}
