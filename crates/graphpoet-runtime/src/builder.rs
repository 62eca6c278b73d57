//! Graph builder: counts adjacent-word co-occurrences as edge weights.
//!
//! For every consecutive token pair `(w[i], w[i+1])` in source order the
//! builder case-folds both tokens and increments the weight of
//! `w[i] -> w[i+1]` by one. Pairs never span a document boundary. The
//! full representation invariant is checked once, when the graph is done.
//!
//! # Example
//!
//! ```rust
//! use graphpoet_core::prelude::*;
//! use graphpoet_runtime::builder::GraphBuilder;
//!
//! let built = GraphBuilder::new().build(["x", "y", "X", "y"]).unwrap();
//! let x = "x".to_string();
//! let y = "y".to_string();
//! assert_eq!(built.graph.weight(&x, &y), 2);
//! assert_eq!(built.graph.weight(&y, &x), 1);
//! ```

use crate::backend::{create_backend, BackendKind, DynWeightedGraph};
use crate::corpus::Corpus;
use graphpoet_core::error::Result;
use graphpoet_core::graph::WeightedGraph;
use graphpoet_core::text::fold_case;
use serde::Serialize;
use tracing::{debug, warn};

/// Summary of a build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildReport {
    pub documents: usize,
    pub tokens: usize,
    /// Adjacent pairs counted (each adds one to an edge weight).
    pub pairs: usize,
    pub vertices: usize,
    pub edges: usize,
}

/// A freshly built graph together with its build report.
pub struct BuiltGraph {
    pub graph: DynWeightedGraph<String>,
    pub report: BuildReport,
}

/// Builder for word-adjacency graphs.
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    backend: BackendKind,
}

impl GraphBuilder {
    /// Create a new builder using the default backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the graph representation to build into.
    pub fn with_backend(mut self, backend: BackendKind) -> Self {
        self.backend = backend;
        self
    }

    /// Build a graph from a single token sequence.
    pub fn build<I, S>(&self, tokens: I) -> Result<BuiltGraph>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut graph = create_backend::<String>(self.backend);
        let (token_count, pairs) = accumulate(&mut graph, tokens)?;
        graph.check_rep()?;
        let report = BuildReport {
            documents: 1,
            tokens: token_count,
            pairs,
            vertices: graph.vertex_count(),
            edges: graph.edge_count(),
        };
        debug!(backend = %self.backend, ?report, "built word graph");
        Ok(BuiltGraph { graph, report })
    }

    /// Build a graph from every document of a corpus.
    pub fn build_corpus(&self, corpus: &Corpus) -> Result<BuiltGraph> {
        let mut graph = create_backend::<String>(self.backend);
        let mut report = BuildReport {
            documents: corpus.len(),
            ..BuildReport::default()
        };

        for doc in &corpus.documents {
            let (tokens, pairs) = accumulate(&mut graph, doc.tokens())?;
            report.tokens += tokens;
            report.pairs += pairs;
        }

        graph.check_rep()?;
        report.vertices = graph.vertex_count();
        report.edges = graph.edge_count();

        if report.pairs == 0 {
            warn!(corpus = %corpus.name, "corpus has no adjacent word pairs; graph is empty");
        }
        debug!(corpus = %corpus.name, backend = %self.backend, ?report, "built word graph");
        Ok(BuiltGraph { graph, report })
    }
}

/// Add the adjacency counts of `tokens` to `graph`.
///
/// Returns `(tokens seen, pairs counted)`. A sequence of fewer than two
/// tokens leaves the graph untouched.
pub fn accumulate<G, I, S>(graph: &mut G, tokens: I) -> Result<(usize, usize)>
where
    G: WeightedGraph<String> + ?Sized,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut previous: Option<String> = None;
    let mut seen = 0;
    let mut pairs = 0;

    for token in tokens {
        let word = fold_case(token.as_ref());
        seen += 1;
        if let Some(prev) = previous.take() {
            let current = graph.weight(&prev, &word);
            graph.set(prev, word.clone(), current + 1)?;
            pairs += 1;
        }
        previous = Some(word);
    }

    Ok((seen, pairs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_pairs_accumulate_weight() {
        let built = GraphBuilder::new().build(["x", "y", "x", "y"]).unwrap();
        let (x, y) = ("x".to_string(), "y".to_string());

        assert_eq!(built.graph.weight(&x, &y), 2);
        assert_eq!(built.graph.weight(&y, &x), 1);
        assert_eq!(built.report.pairs, 3);
        assert_eq!(built.report.edges, 2);
    }

    #[test]
    fn single_token_builds_empty_graph() {
        let built = GraphBuilder::new().build(["alone"]).unwrap();
        assert_eq!(built.graph.vertex_count(), 0);
        assert_eq!(built.report.tokens, 1);
        assert_eq!(built.report.pairs, 0);
    }

    #[test]
    fn empty_sequence_builds_empty_graph() {
        let built = GraphBuilder::new().build(Vec::<&str>::new()).unwrap();
        assert_eq!(built.graph.vertex_count(), 0);
        assert_eq!(built.graph.edge_count(), 0);
    }

    #[test]
    fn tokens_are_case_folded() {
        let built = GraphBuilder::new().build(["The", "CAT", "the", "cat"]).unwrap();
        let vertices: Vec<_> = built.graph.vertices().into_iter().collect();
        assert_eq!(vertices, vec!["cat".to_string(), "the".to_string()]);
        assert_eq!(built.graph.weight(&"the".to_string(), &"cat".to_string()), 2);
    }

    #[test]
    fn pairs_do_not_span_documents() {
        let corpus = Corpus {
            name: "two".into(),
            documents: vec![
                crate::corpus::CorpusDocument {
                    title: "a".into(),
                    content: "red fox".into(),
                },
                crate::corpus::CorpusDocument {
                    title: "b".into(),
                    content: "blue jay".into(),
                },
            ],
        };
        let built = GraphBuilder::new().build_corpus(&corpus).unwrap();

        assert_eq!(built.graph.weight(&"fox".to_string(), &"blue".to_string()), 0);
        assert_eq!(built.report.documents, 2);
        assert_eq!(built.report.edges, 2);
    }

    /// Deterministic pseudo-random text over a fixed vocabulary.
    fn synthetic_tokens(count: usize, vocabulary: usize) -> Vec<String> {
        let mut seed: u64 = 42;
        (0..count)
            .map(|_| {
                seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
                format!("w{}", (seed >> 33) as usize % vocabulary)
            })
            .collect()
    }

    #[test]
    fn large_input_builds_in_linear_time() {
        let tokens = synthetic_tokens(10_000, 500);

        for kind in [BackendKind::PetGraph, BackendKind::Adjacency] {
            let start = std::time::Instant::now();
            let built = GraphBuilder::new().with_backend(kind).build(&tokens).unwrap();
            let elapsed = start.elapsed();

            assert_eq!(built.report.pairs, 9_999);
            assert!(built.report.edges > 1_000);
            assert!(
                elapsed < std::time::Duration::from_secs(5),
                "{} backend took {:?} for 10k tokens",
                kind,
                elapsed
            );
        }
    }

    #[test]
    fn backends_build_identical_graphs() {
        let corpus = Corpus::from_embedded();
        let pet = GraphBuilder::new()
            .with_backend(BackendKind::PetGraph)
            .build_corpus(&corpus)
            .unwrap();
        let adj = GraphBuilder::new()
            .with_backend(BackendKind::Adjacency)
            .build_corpus(&corpus)
            .unwrap();

        assert_eq!(pet.graph.edges(), adj.graph.edges());
        assert_eq!(pet.report, adj.report);
    }
}
