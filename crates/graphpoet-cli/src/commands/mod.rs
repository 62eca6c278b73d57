//! CLI command implementations.

pub mod bridge;
pub mod export;
pub mod init;
pub mod poem;
pub mod stats;

use anyhow::{Context, Result};
use graphpoet::prelude::*;
use tracing::debug;

use crate::config::Settings;

/// Load the configured corpus and build its word graph.
pub fn load_poet(settings: &Settings) -> Result<(GraphPoet, BuildReport)> {
    let corpus = match &settings.corpus {
        Some(path) => {
            let extensions: Vec<&str> = settings.extensions.iter().map(String::as_str).collect();
            Corpus::load(path, &extensions)
                .with_context(|| format!("Failed to load corpus: {}", path.display()))?
        }
        None => Corpus::from_embedded(),
    };

    debug!(
        corpus = %corpus.name,
        documents = corpus.len(),
        backend = %settings.backend,
        "Building word graph"
    );

    GraphPoet::from_corpus_with_report(&corpus, settings.backend)
        .with_context(|| format!("Failed to build graph for corpus '{}'", corpus.name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(corpus: Option<std::path::PathBuf>, backend: BackendKind) -> Settings {
        Settings {
            corpus,
            extensions: vec!["txt".to_string()],
            backend,
            highlight: false,
        }
    }

    #[test]
    fn falls_back_to_embedded_corpus() {
        let (poet, report) = load_poet(&settings(None, BackendKind::PetGraph)).unwrap();
        assert_eq!(report.tokens, 17);
        assert_eq!(poet.poem("Test the system."), "Test of the system.");
    }

    #[test]
    fn loads_corpus_directory_from_settings() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.txt"), "to be or maybe not").unwrap();
        std::fs::write(dir.path().join("skip.md"), "or never not").unwrap();

        let (poet, report) =
            load_poet(&settings(Some(dir.path().to_path_buf()), BackendKind::Adjacency)).unwrap();
        assert_eq!(report.documents, 1);
        assert_eq!(poet.poem("or not"), "or maybe not");
    }

    #[test]
    fn missing_corpus_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");
        assert!(load_poet(&settings(Some(missing), BackendKind::PetGraph)).is_err());
    }
}
