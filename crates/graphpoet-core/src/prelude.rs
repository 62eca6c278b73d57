//! GraphPoet Core Prelude: convenient imports for common usage.
//!
//! ```rust
//! use graphpoet_core::prelude::*;
//! ```

// Re-export commonly used types
pub use crate::types::{Edge, Label, Weight};

// Re-export the WeightedGraph trait
pub use crate::graph::WeightedGraph;

// Re-export text helpers
pub use crate::text::{fold_case, split_words};

// Re-export error types
pub use crate::error::{CorpusError, GraphError, PoetError, Result};
