//! Poem assembly: enrich a phrase with bridge words from a corpus graph.
//!
//! The assembler scans the phrase left to right. For each consecutive
//! pair of words it emits the first word as written, then the best bridge
//! between their case-folded forms, if any. The last word is emitted as
//! written. Caller words are never dropped or reordered, and the choice
//! for one pair never depends on another.
//!
//! ```rust
//! use graphpoet_poem::prelude::*;
//!
//! let poet = GraphPoet::from_corpus(&Corpus::from_embedded(), BackendKind::default()).unwrap();
//! assert_eq!(poet.poem("Test the system."), "Test of the system.");
//! ```

use crate::bridge::find_bridge;
use graphpoet_core::error::Result;
use graphpoet_core::graph::WeightedGraph;
use graphpoet_core::text::{fold_case, split_words};
use graphpoet_core::types::Weight;
use graphpoet_runtime::backend::{BackendKind, DynWeightedGraph};
use graphpoet_runtime::builder::{BuildReport, GraphBuilder};
use graphpoet_runtime::corpus::Corpus;
use serde::Serialize;
use std::fmt;
use tracing::{debug, trace};

/// One token of an assembled poem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PoemToken {
    /// A caller word, casing untouched.
    Word { text: String },
    /// An inserted bridge word (a lowercase graph label).
    Bridge { text: String, weight: Weight },
}

impl PoemToken {
    pub fn text(&self) -> &str {
        match self {
            PoemToken::Word { text } | PoemToken::Bridge { text, .. } => text,
        }
    }

    pub fn is_bridge(&self) -> bool {
        matches!(self, PoemToken::Bridge { .. })
    }
}

/// An assembled poem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Poem {
    tokens: Vec<PoemToken>,
    /// Set when the phrase had fewer than two words; rendered verbatim.
    #[serde(skip)]
    verbatim: Option<String>,
}

impl Poem {
    pub fn tokens(&self) -> &[PoemToken] {
        &self.tokens
    }

    /// Number of bridge words inserted.
    pub fn bridges_inserted(&self) -> usize {
        self.tokens.iter().filter(|t| t.is_bridge()).count()
    }
}

impl fmt::Display for Poem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(text) = &self.verbatim {
            return f.write_str(text);
        }
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(token.text())?;
        }
        Ok(())
    }
}

/// A bridge-word poet over a read-only word graph.
pub struct GraphPoet<G = DynWeightedGraph<String>> {
    graph: G,
}

impl GraphPoet {
    /// Build the corpus graph with the given backend and wrap it.
    pub fn from_corpus(corpus: &Corpus, backend: BackendKind) -> Result<Self> {
        let (poet, _) = Self::from_corpus_with_report(corpus, backend)?;
        Ok(poet)
    }

    /// Like [`GraphPoet::from_corpus`], also returning the build report.
    pub fn from_corpus_with_report(
        corpus: &Corpus,
        backend: BackendKind,
    ) -> Result<(Self, BuildReport)> {
        let built = GraphBuilder::new().with_backend(backend).build_corpus(corpus)?;
        Ok((GraphPoet::new(built.graph), built.report))
    }
}

impl<G: WeightedGraph<String>> GraphPoet<G> {
    /// Wrap an already built graph. The poet never mutates it.
    pub fn new(graph: G) -> Self {
        Self { graph }
    }

    /// Read-only view of the underlying graph.
    pub fn graph(&self) -> &G {
        &self.graph
    }

    /// Assemble the poem for `input`, keeping which words were inserted.
    pub fn compose(&self, input: &str) -> Poem {
        let words = split_words(input);
        if words.len() < 2 {
            return Poem {
                tokens: words
                    .iter()
                    .map(|w| PoemToken::Word {
                        text: w.to_string(),
                    })
                    .collect(),
                verbatim: Some(input.to_string()),
            };
        }

        let mut tokens = Vec::with_capacity(words.len() * 2 - 1);
        for pair in words.windows(2) {
            let (orig1, orig2) = (pair[0], pair[1]);
            tokens.push(PoemToken::Word {
                text: orig1.to_string(),
            });

            let (w1, w2) = (fold_case(orig1), fold_case(orig2));
            match find_bridge(&self.graph, &w1, &w2) {
                Some(bridge) => {
                    trace!(
                        w1 = %w1,
                        w2 = %w2,
                        bridge = %bridge.label,
                        weight = bridge.weight,
                        "bridge found"
                    );
                    tokens.push(PoemToken::Bridge {
                        text: fold_case(&bridge.label),
                        weight: bridge.weight,
                    });
                }
                None => trace!(w1 = %w1, w2 = %w2, "no bridge"),
            }
        }
        if let Some(last) = words.last() {
            tokens.push(PoemToken::Word {
                text: last.to_string(),
            });
        }

        let poem = Poem {
            tokens,
            verbatim: None,
        };
        debug!(words = words.len(), bridges = poem.bridges_inserted(), "composed poem");
        poem
    }

    /// The poem for `input` as a single space-separated string.
    pub fn poem(&self, input: &str) -> String {
        self.compose(input).to_string()
    }
}

impl<G: WeightedGraph<String>> fmt::Debug for GraphPoet<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphPoet")
            .field("vertices", &self.graph.vertex_count())
            .field("edges", &self.graph.edge_count())
            .finish()
    }
}
