//! Graph backend configuration and factory.
//!
//! Provides a unified interface for selecting graph representations.

use crate::adjacency::AdjacencyGraph;
use crate::pet_graph::PetWeightedGraph;
use graphpoet_core::error::PoetError;
use graphpoet_core::graph::WeightedGraph;
use graphpoet_core::types::Label;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which graph representation to build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// petgraph `StableDiGraph` with a label index (default).
    #[default]
    PetGraph,
    /// Ordered adjacency maps, one per vertex.
    Adjacency,
}

impl BackendKind {
    pub fn name(&self) -> &'static str {
        match self {
            BackendKind::PetGraph => "petgraph",
            BackendKind::Adjacency => "adjacency",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BackendKind {
    type Err = PoetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "petgraph" => Ok(BackendKind::PetGraph),
            "adjacency" => Ok(BackendKind::Adjacency),
            other => Err(PoetError::invalid_config(
                "graph.backend",
                format!("unknown backend '{}' (expected petgraph or adjacency)", other),
            )),
        }
    }
}

/// Trait object for graph backends.
///
/// This allows storing different backend implementations behind a single type.
pub type DynWeightedGraph<L> = Box<dyn WeightedGraph<L> + Send + Sync>;

/// Create an empty graph of the requested kind.
pub fn create_backend<L>(kind: BackendKind) -> DynWeightedGraph<L>
where
    L: Label + Send + Sync + 'static,
{
    match kind {
        BackendKind::PetGraph => Box::new(PetWeightedGraph::<L>::new()),
        BackendKind::Adjacency => Box::new(AdjacencyGraph::<L>::new()),
    }
}
