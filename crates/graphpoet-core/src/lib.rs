//! # GraphPoet Core
//!
//! Core contract and shared types for weighted directed graphs.
//!
//! This crate defines the graph abstract data type as a Rust trait,
//! along with the types every other crate in the workspace shares:
//!
//! - **Label**: the bound on vertex labels (comparable, hashable, ordered)
//! - **Weight**: strictly positive integer edge weights; zero means "no edge"
//! - **WeightedGraph**: add / set / remove / vertices / sources / targets
//! - **Edge**: an owned `(source, target, weight)` triple
//! - **PoetError**: structured errors for graph, corpus and config failures
//!
//! ## Quick Start
//!
//! ```rust
//! use graphpoet_core::prelude::*;
//!
//! let word = fold_case("Theater");
//! assert_eq!(word, "theater");
//!
//! let edge = Edge::new("a".to_string(), "b".to_string(), 3);
//! assert_eq!(edge.to_string(), "a -> b (3)");
//! ```

pub mod error;
pub mod graph;
pub mod prelude;
pub mod text;
pub mod types;
