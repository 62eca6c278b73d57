//! Graph: the weighted directed graph contract.
//!
//! A graph owns a set of labelled vertices and at most one positively
//! weighted edge per ordered `(source, target)` pair. Mutators are the only
//! way to change it, and after every mutation:
//!
//! - every edge's source and target are members of the vertex set,
//! - every stored weight is strictly positive,
//! - no two edges share the same `(source, target)` pair.

use crate::error::{PoetError, Result};
use crate::types::{Edge, Label, Weight};
use std::collections::{BTreeMap, BTreeSet};

/// A mutable labelled weighted directed graph.
///
/// This is a trait rather than a concrete type so that different
/// representations can sit behind the same contract.
pub trait WeightedGraph<L: Label> {
    /// Add a vertex. Returns `true` if it was not already present.
    fn add(&mut self, vertex: L) -> bool;

    /// Create, update, or remove the edge `source -> target`.
    ///
    /// Both endpoints are added as vertices if absent. A weight of zero
    /// removes any existing edge; a positive weight creates the edge or
    /// replaces its weight. Returns the weight the edge had before the call
    /// (zero if there was none).
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidWeight`](crate::error::GraphError::InvalidWeight)
    /// for a negative weight, leaving the graph unchanged.
    fn set(&mut self, source: L, target: L, weight: Weight) -> Result<Weight>;

    /// Remove a vertex and every edge into or out of it.
    /// Returns `true` if the vertex existed.
    fn remove(&mut self, vertex: &L) -> bool;

    /// Snapshot of the vertex set.
    fn vertices(&self) -> BTreeSet<L>;

    /// Vertices with an edge into `target`, mapped to that edge's weight.
    /// Empty for an unknown vertex.
    fn sources(&self, target: &L) -> BTreeMap<L, Weight>;

    /// Vertices `source` has an edge to, mapped to that edge's weight.
    /// Empty for an unknown vertex.
    fn targets(&self, source: &L) -> BTreeMap<L, Weight>;

    /// Weight of `source -> target`, or zero if there is no such edge.
    fn weight(&self, source: &L, target: &L) -> Weight;

    /// Whether `vertex` is in the graph.
    fn contains(&self, vertex: &L) -> bool;

    /// Number of vertices.
    fn vertex_count(&self) -> usize;

    /// Number of edges.
    fn edge_count(&self) -> usize;

    /// All edges, ordered by `(source, target)`.
    fn edges(&self) -> Vec<Edge<L>>;

    /// Verify the whole representation invariant.
    ///
    /// This walks every vertex and edge. Mutators check only what they
    /// touched (see [`check_edge`] and [`check_vertex`]); the builder runs
    /// the full check once a graph is complete.
    fn check_rep(&self) -> Result<()> {
        let vertices = self.vertices();
        if vertices.len() != self.vertex_count() {
            return Err(PoetError::invariant(format!(
                "vertex count {} disagrees with vertex set of {}",
                self.vertex_count(),
                vertices.len()
            )));
        }

        let edges = self.edges();
        if edges.len() != self.edge_count() {
            return Err(PoetError::invariant(format!(
                "edge count {} disagrees with edge list of {}",
                self.edge_count(),
                edges.len()
            )));
        }

        let mut previous: Option<(&L, &L)> = None;
        for edge in &edges {
            if !vertices.contains(&edge.source) {
                return Err(PoetError::invariant(format!(
                    "edge source {:?} is not a vertex",
                    edge.source
                )));
            }
            if !vertices.contains(&edge.target) {
                return Err(PoetError::invariant(format!(
                    "edge target {:?} is not a vertex",
                    edge.target
                )));
            }
            if edge.weight <= 0 {
                return Err(PoetError::invariant(format!(
                    "edge {:?} -> {:?} has non-positive weight {}",
                    edge.source, edge.target, edge.weight
                )));
            }
            let pair = (&edge.source, &edge.target);
            if previous == Some(pair) {
                return Err(PoetError::invariant(format!(
                    "duplicate edge {:?} -> {:?}",
                    edge.source, edge.target
                )));
            }
            previous = Some(pair);
        }
        Ok(())
    }
}

impl<L: Label, G: WeightedGraph<L> + ?Sized> WeightedGraph<L> for Box<G> {
    fn add(&mut self, vertex: L) -> bool {
        (**self).add(vertex)
    }

    fn set(&mut self, source: L, target: L, weight: Weight) -> Result<Weight> {
        (**self).set(source, target, weight)
    }

    fn remove(&mut self, vertex: &L) -> bool {
        (**self).remove(vertex)
    }

    fn vertices(&self) -> BTreeSet<L> {
        (**self).vertices()
    }

    fn sources(&self, target: &L) -> BTreeMap<L, Weight> {
        (**self).sources(target)
    }

    fn targets(&self, source: &L) -> BTreeMap<L, Weight> {
        (**self).targets(source)
    }

    fn weight(&self, source: &L, target: &L) -> Weight {
        (**self).weight(source, target)
    }

    fn contains(&self, vertex: &L) -> bool {
        (**self).contains(vertex)
    }

    fn vertex_count(&self) -> usize {
        (**self).vertex_count()
    }

    fn edge_count(&self) -> usize {
        (**self).edge_count()
    }

    fn edges(&self) -> Vec<Edge<L>> {
        (**self).edges()
    }

    fn check_rep(&self) -> Result<()> {
        (**self).check_rep()
    }
}

/// Run a post-mutation check in debug builds and panic if it fails.
/// The closure is never called in release builds; a failure here is a
/// backend bug.
#[inline]
pub fn debug_check<F>(check: F)
where
    F: FnOnce() -> Result<()>,
{
    if cfg!(debug_assertions) {
        if let Err(e) = check() {
            panic!("graph representation invariant broken: {}", e);
        }
    }
}

/// Post-condition of `set(source, target, weight)`: both endpoints exist
/// and the edge holds exactly `weight` (zero meaning absent).
///
/// Looks only at the touched edge, so it stays cheap enough to run after
/// every mutation.
pub fn check_edge<L, G>(graph: &G, source: &L, target: &L, weight: Weight) -> Result<()>
where
    L: Label,
    G: WeightedGraph<L> + ?Sized,
{
    for endpoint in [source, target] {
        if !graph.contains(endpoint) {
            return Err(PoetError::invariant(format!(
                "endpoint {:?} is not a vertex after set",
                endpoint
            )));
        }
    }
    let stored = graph.weight(source, target);
    if stored != weight {
        return Err(PoetError::invariant(format!(
            "edge {:?} -> {:?} holds {} after set to {}",
            source, target, stored, weight
        )));
    }
    Ok(())
}

/// Post-condition of `add` (`present == true`) or `remove`
/// (`present == false`). A removed vertex must leave no edge behind.
pub fn check_vertex<L, G>(graph: &G, vertex: &L, present: bool) -> Result<()>
where
    L: Label,
    G: WeightedGraph<L> + ?Sized,
{
    if graph.contains(vertex) != present {
        return Err(PoetError::invariant(format!(
            "vertex {:?} should {}be present",
            vertex,
            if present { "" } else { "not " }
        )));
    }
    if !present && !(graph.targets(vertex).is_empty() && graph.sources(vertex).is_empty()) {
        return Err(PoetError::invariant(format!(
            "removed vertex {:?} still has edges",
            vertex
        )));
    }
    Ok(())
}

/// Reject negative weights before any mutation happens.
pub fn validate_weight(weight: Weight) -> Result<()> {
    if weight < 0 {
        Err(PoetError::invalid_weight(weight))
    } else {
        Ok(())
    }
}
