//! GraphPoet Runtime Prelude: convenient imports for common usage.
//!
//! ```rust
//! use graphpoet_runtime::prelude::*;
//! ```

// Re-export graph backends
pub use crate::adjacency::AdjacencyGraph;
pub use crate::pet_graph::PetWeightedGraph;

// Re-export backend configuration
pub use crate::backend::{create_backend, BackendKind, DynWeightedGraph};

// Re-export builder
pub use crate::builder::{accumulate, BuildReport, BuiltGraph, GraphBuilder};

// Re-export corpus
pub use crate::corpus::{Corpus, CorpusDocument, EMBEDDED_TEXT};

// Re-export export helpers
pub use crate::export::{edge_stats, export_edges, render_text, to_json, EdgeStats};

// Re-export from core
pub use graphpoet_core::prelude::*;
