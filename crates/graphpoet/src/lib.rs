//! # GraphPoet
//!
//! Weighted directed graphs and bridge-word poetry.
//!
//! GraphPoet reads a reference corpus, counts how often each word directly
//! follows another, and stores the counts as edge weights in a directed
//! graph. A phrase is then enriched by inserting, between each pair of its
//! words, the corpus word that best connects them through two edges.
//!
//! ## Quick Start
//!
//! ```rust
//! use graphpoet::prelude::*;
//!
//! let corpus = Corpus::from_text(
//!     "mugar",
//!     "This is a test of the Mugar Omni Theater space for a live demonstration of the Oscilloscope.",
//! );
//! let poet = GraphPoet::from_corpus(&corpus, BackendKind::PetGraph)?;
//!
//! assert_eq!(poet.poem("Test the system."), "Test of the system.");
//! # Ok::<(), PoetError>(())
//! ```
//!
//! ## Architecture
//!
//! GraphPoet is organized into several crates:
//!
//! - [`graphpoet_core`] - The `WeightedGraph` contract, labels, weights, errors
//! - [`graphpoet_runtime`] - Graph backends, corpus loading, graph building, export
//! - [`graphpoet_poem`] - Bridge selection and poem assembly
//!
//! ## The graph contract
//!
//! | Operation | Behaviour |
//! |-----------|-----------|
//! | `add(v)` | Insert a vertex; `true` if new |
//! | `set(s, t, w)` | Create / update / remove `s -> t`; returns the old weight |
//! | `remove(v)` | Delete a vertex and all its edges |
//! | `sources(t)` / `targets(s)` | Incoming / outgoing neighbours with weights |
//!
//! Weights are positive integers. Setting a weight of zero removes the edge,
//! and a negative weight is rejected. `set` adds missing endpoints itself.
//!
//! ## Bridge selection
//!
//! For consecutive words `w1 w2`, the bridge is the vertex `b` maximizing
//! `weight(w1 -> b) + weight(b -> w2)`. Ties go to the smallest label, so
//! poems are reproducible.

// Re-export all subcrates
pub use graphpoet_core as core;
pub use graphpoet_poem as poem;
pub use graphpoet_runtime as runtime;

/// Prelude module for convenient imports.
///
/// ```rust
/// use graphpoet::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use graphpoet_core::text::{fold_case, split_words};
    pub use graphpoet_core::types::{Edge, Label, Weight};

    // Core traits
    pub use graphpoet_core::graph::WeightedGraph;

    // Error types
    pub use graphpoet_core::error::{CorpusError, GraphError, PoetError, Result};

    // Runtime
    pub use graphpoet_runtime::adjacency::AdjacencyGraph;
    pub use graphpoet_runtime::backend::{create_backend, BackendKind, DynWeightedGraph};
    pub use graphpoet_runtime::builder::{BuildReport, BuiltGraph, GraphBuilder};
    pub use graphpoet_runtime::corpus::{Corpus, CorpusDocument, EMBEDDED_TEXT};
    pub use graphpoet_runtime::export::{edge_stats, export_edges, render_text, to_json, EdgeStats};
    pub use graphpoet_runtime::pet_graph::PetWeightedGraph;

    // Poem
    pub use graphpoet_poem::{find_bridge, rank_bridges, Bridge};
    pub use graphpoet_poem::{GraphPoet, Poem, PoemToken};
}
