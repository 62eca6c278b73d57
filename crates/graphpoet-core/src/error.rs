//! Error types for graph and poem operations.
//!
//! Provides structured error handling instead of panics.

use crate::types::Weight;
use thiserror::Error;

/// Result type for GraphPoet operations.
pub type Result<T> = std::result::Result<T, PoetError>;

/// Errors that can occur during GraphPoet operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PoetError {
    /// Graph-related errors.
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),
    /// Corpus-related errors.
    #[error("Corpus error: {0}")]
    Corpus(#[from] CorpusError),
    /// Configuration errors.
    #[error("Config error: {0}")]
    Config(String),
    /// I/O errors (wrapped).
    #[error("I/O error: {0}")]
    Io(String),
    /// Serialization errors.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for PoetError {
    fn from(e: std::io::Error) -> Self {
        PoetError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for PoetError {
    fn from(e: serde_json::Error) -> Self {
        PoetError::Serialization(e.to_string())
    }
}

/// Graph-related errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// Edge weight was negative. Zero removes an edge; anything below is rejected.
    #[error("Invalid weight: {0} (must be >= 0)")]
    InvalidWeight(Weight),
    /// The graph's representation invariant does not hold. This is a bug in a
    /// backend, never a caller mistake.
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

/// Corpus-related errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CorpusError {
    /// Corpus path not found.
    #[error("Corpus not found: {0}")]
    NotFound(String),
    /// No readable documents matched.
    #[error("No corpus documents found in {0}")]
    Empty(String),
    /// A document could not be read.
    #[error("Failed to read {path}: {reason}")]
    Read { path: String, reason: String },
}

// Convenience constructors
impl PoetError {
    pub fn invalid_weight(weight: Weight) -> Self {
        PoetError::Graph(GraphError::InvalidWeight(weight))
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        PoetError::Graph(GraphError::InvariantViolation(msg.into()))
    }

    pub fn corpus_not_found(path: impl Into<String>) -> Self {
        PoetError::Corpus(CorpusError::NotFound(path.into()))
    }

    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        PoetError::Config(format!("{}: {}", field.into(), reason.into()))
    }

    /// Whether this error reports a negative edge weight.
    pub fn is_invalid_weight(&self) -> bool {
        matches!(self, PoetError::Graph(GraphError::InvalidWeight(_)))
    }
}
