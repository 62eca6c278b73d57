//! # GraphPoet Runtime
//!
//! Graph backends, corpus loading, and graph construction.
//!
//! The runtime turns a reference corpus into a populated word-adjacency
//! graph. Once built, a graph is handed out as a read-only value; nothing
//! in this crate mutates it afterwards.

pub mod adjacency;
pub mod backend;
pub mod builder;
pub mod corpus;
pub mod export;
pub mod pet_graph;
pub mod prelude;
