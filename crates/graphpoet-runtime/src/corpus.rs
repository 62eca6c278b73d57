//! Corpus loader: the reference text a word graph is built from.
//!
//! Provides a standard way to load text documents from a file, a
//! directory, or a built-in embedded sample. Tokenization is a naive
//! whitespace split: punctuation stays attached to its word.

use graphpoet_core::error::{CorpusError, PoetError, Result};
use graphpoet_core::text::split_words;
use std::path::Path;
use tracing::debug;

/// The sentence used by the embedded corpus.
pub const EMBEDDED_TEXT: &str = "This is a test of the Mugar Omni Theater space for a live demonstration of the Oscilloscope.";

/// A corpus of documents to build a graph from.
#[derive(Debug, Clone)]
pub struct Corpus {
    pub documents: Vec<CorpusDocument>,
    pub name: String,
}

/// A single document in a corpus.
#[derive(Debug, Clone)]
pub struct CorpusDocument {
    pub title: String,
    pub content: String,
}

impl CorpusDocument {
    /// Whitespace-delimited tokens in source order, original casing.
    ///
    /// Line breaks are ordinary whitespace, so the last word of one line
    /// is adjacent to the first word of the next.
    pub fn tokens(&self) -> Vec<&str> {
        split_words(&self.content)
    }
}

impl Corpus {
    /// A single-document corpus from in-memory text.
    pub fn from_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        let name = name.into();
        Corpus {
            documents: vec![CorpusDocument {
                title: name.clone(),
                content: text.into(),
            }],
            name,
        }
    }

    /// Load a single text file as a one-document corpus.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(PoetError::corpus_not_found(path.display().to_string()));
        }
        let content = read_document(path)?;
        let title = path
            .file_stem()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "corpus".to_string());
        debug!(path = %path.display(), bytes = content.len(), "loaded corpus file");
        Ok(Corpus::from_text(title, content))
    }

    /// Load every file in a directory whose extension is in `extensions`.
    ///
    /// Files are read in filename order so the resulting graph is the same
    /// on every platform.
    pub fn from_directory(path: &Path, extensions: &[&str]) -> Result<Self> {
        if !path.is_dir() {
            return Err(PoetError::corpus_not_found(path.display().to_string()));
        }

        let mut entries = Vec::new();
        for entry in std::fs::read_dir(path).map_err(|e| read_error(path, e))? {
            // Unreadable entries fail the load.
            let entry = entry.map_err(|e| read_error(path, e))?.path();
            let wanted = entry
                .extension()
                .map_or(false, |ext| extensions.iter().any(|want| ext == *want));
            if wanted && entry.is_file() {
                entries.push(entry);
            }
        }

        if entries.is_empty() {
            return Err(CorpusError::Empty(path.display().to_string()).into());
        }
        entries.sort();

        let mut documents = Vec::with_capacity(entries.len());
        for entry in &entries {
            let content = read_document(entry)?;
            let title = entry
                .file_stem()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| "document".to_string());
            documents.push(CorpusDocument { title, content });
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "corpus".to_string());
        debug!(name = %name, documents = documents.len(), "loaded corpus directory");

        Ok(Corpus { documents, name })
    }

    /// Load a file or a directory, whichever `path` is.
    pub fn load(path: &Path, extensions: &[&str]) -> Result<Self> {
        if path.is_dir() {
            Corpus::from_directory(path, extensions)
        } else {
            Corpus::from_file(path)
        }
    }

    /// Built-in one-sentence corpus.
    pub fn from_embedded() -> Self {
        Corpus::from_text("embedded", EMBEDDED_TEXT)
    }

    /// Number of documents in the corpus.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the corpus is empty.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Total token count across all documents.
    pub fn token_count(&self) -> usize {
        self.documents.iter().map(|d| d.tokens().len()).sum()
    }
}

fn read_document(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| read_error(path, e))
}

fn read_error(path: &Path, e: std::io::Error) -> PoetError {
    CorpusError::Read {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_corpus_has_one_document() {
        let corpus = Corpus::from_embedded();
        assert_eq!(corpus.len(), 1);
        assert_eq!(corpus.token_count(), 17);
    }

    #[test]
    fn tokens_keep_punctuation_and_case() {
        let corpus = Corpus::from_text("t", "Hello,  World!\nagain");
        assert_eq!(corpus.documents[0].tokens(), vec!["Hello,", "World!", "again"]);
    }

    #[test]
    fn from_file_reports_missing_path() {
        let err = Corpus::from_file(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert!(matches!(err, PoetError::Corpus(CorpusError::NotFound(_))));
    }

    #[test]
    fn from_directory_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.txt"), "second doc").unwrap();
        std::fs::write(dir.path().join("a.txt"), "first doc").unwrap();
        std::fs::write(dir.path().join("notes.json"), "{}").unwrap();

        let corpus = Corpus::from_directory(dir.path(), &["txt"]).unwrap();
        let titles: Vec<_> = corpus.documents.iter().map(|d| d.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "b"]);
    }

    #[test]
    fn from_directory_without_matches_is_empty_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("notes.json"), "{}").unwrap();

        let err = Corpus::from_directory(dir.path(), &["txt"]).unwrap_err();
        assert!(matches!(err, PoetError::Corpus(CorpusError::Empty(_))));
    }

    #[test]
    fn unreadable_document_fails_the_whole_load() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.txt"), "fine words").unwrap();
        std::fs::write(dir.path().join("b.txt"), [0xff, 0xfe, 0x00]).unwrap();

        let err = Corpus::from_directory(dir.path(), &["txt"]).unwrap_err();
        match err {
            PoetError::Corpus(CorpusError::Read { path, .. }) => assert!(path.ends_with("b.txt")),
            other => panic!("expected a read error, got {:?}", other),
        }
    }

    #[test]
    fn load_dispatches_on_path_kind() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("poem.txt");
        std::fs::write(&file, "to be or not").unwrap();

        assert_eq!(Corpus::load(&file, &["txt"]).unwrap().name, "poem");
        assert_eq!(Corpus::load(dir.path(), &["txt"]).unwrap().len(), 1);
    }
}
