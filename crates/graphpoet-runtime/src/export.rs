//! Edge exporter: render or serialize a graph's weighted edges.
//!
//! Every view here is ordered by label, so two runs over the same corpus
//! print byte-identical output.

use graphpoet_core::error::Result;
use graphpoet_core::graph::WeightedGraph;
use graphpoet_core::types::{Edge, Label, Weight};
use serde::Serialize;
use std::fmt::{Display, Write};

/// Export all edges, heaviest first; ties keep `(source, target)` order.
pub fn export_edges<L, G>(graph: &G) -> Vec<Edge<L>>
where
    L: Label,
    G: WeightedGraph<L> + ?Sized,
{
    let mut edges = graph.edges();
    // Stable sort keeps the label order coming out of `edges()`.
    edges.sort_by(|a, b| b.weight.cmp(&a.weight));
    edges
}

/// Statistics about exported edges.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeStats {
    pub total: usize,
    pub total_weight: Weight,
    pub max_weight: Weight,
    pub min_weight: Weight,
    pub mean_weight: f64,
}

/// Summarize exported edges.
pub fn edge_stats<L>(edges: &[Edge<L>]) -> EdgeStats {
    if edges.is_empty() {
        return EdgeStats {
            total: 0,
            total_weight: 0,
            max_weight: 0,
            min_weight: 0,
            mean_weight: 0.0,
        };
    }

    let total = edges.len();
    let total_weight: Weight = edges.iter().map(|e| e.weight).sum();
    let max_weight = edges.iter().map(|e| e.weight).max().unwrap_or(0);
    let min_weight = edges.iter().map(|e| e.weight).min().unwrap_or(0);

    EdgeStats {
        total,
        total_weight,
        max_weight,
        min_weight,
        mean_weight: total_weight as f64 / total as f64,
    }
}

/// Plain-text view:
///
/// ```text
/// Vertices: [a, b]
/// Edges:
///   a -> b (2)
/// ```
pub fn render_text<L, G>(graph: &G) -> String
where
    L: Label + Display,
    G: WeightedGraph<L> + ?Sized,
{
    let vertices: Vec<String> = graph.vertices().iter().map(|v| v.to_string()).collect();
    let mut out = format!("Vertices: [{}]\nEdges:\n", vertices.join(", "));
    for edge in graph.edges() {
        // Writing into a String cannot fail.
        let _ = writeln!(out, "  {}", edge);
    }
    out
}

/// JSON document holding the vertex list and edges.
pub fn to_json<L, G>(graph: &G) -> Result<String>
where
    L: Label + Serialize,
    G: WeightedGraph<L> + ?Sized,
{
    #[derive(Serialize)]
    struct GraphDocument<L> {
        vertices: Vec<L>,
        edges: Vec<Edge<L>>,
    }

    let doc = GraphDocument {
        vertices: graph.vertices().into_iter().collect(),
        edges: export_edges(graph),
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}
