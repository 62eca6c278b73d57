//! Configuration management for the GraphPoet CLI.

use anyhow::{Context, Result};
use graphpoet::prelude::BackendKind;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name looked up in the current and parent directories.
pub const CONFIG_FILE: &str = "graphpoet.toml";

/// GraphPoet project configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub corpus: CorpusConfig,
    #[serde(default)]
    pub graph: GraphConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusConfig {
    /// File or directory; the embedded corpus is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    #[serde(default)]
    pub backend: BackendKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_highlight")]
    pub highlight_bridges: bool,
}

// Default value functions
fn default_extensions() -> Vec<String> {
    vec!["txt".to_string()]
}

fn default_highlight() -> bool {
    true
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            path: None,
            extensions: default_extensions(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            highlight_bridges: default_highlight(),
        }
    }
}

/// Effective settings after command-line flags override the config file.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub corpus: Option<PathBuf>,
    pub extensions: Vec<String>,
    pub backend: BackendKind,
    pub highlight: bool,
}

impl Config {
    /// Load config from graphpoet.toml in the current or parent directories.
    pub fn load() -> Result<Self> {
        match find_config_file() {
            Some(path) => Self::load_from(&path),
            None => Ok(Config::default()),
        }
    }

    /// Load config from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Save config to the specified path.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }

    /// Apply command-line overrides.
    pub fn resolve(self, corpus: Option<PathBuf>, backend: Option<BackendKind>) -> Settings {
        Settings {
            corpus: corpus.or(self.corpus.path),
            extensions: self.corpus.extensions,
            backend: backend.unwrap_or(self.graph.backend),
            highlight: self.output.highlight_bridges,
        }
    }
}

/// Find graphpoet.toml in current or parent directories.
fn find_config_file() -> Option<PathBuf> {
    let mut dir = std::env::current_dir().ok()?;
    loop {
        let config_path = dir.join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_embedded_corpus_and_petgraph() {
        let settings = Config::default().resolve(None, None);
        assert_eq!(settings.corpus, None);
        assert_eq!(settings.extensions, vec!["txt".to_string()]);
        assert_eq!(settings.backend, BackendKind::PetGraph);
        assert!(settings.highlight);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let config: Config = toml::from_str("[graph]\nbackend = \"adjacency\"\n").unwrap();
        assert_eq!(config.graph.backend, BackendKind::Adjacency);
        assert_eq!(config.corpus, CorpusConfig::default());
        assert!(config.output.highlight_bridges);
    }

    #[test]
    fn flags_override_file() {
        let mut config = Config::default();
        config.corpus.path = Some(PathBuf::from("from-file.txt"));
        config.graph.backend = BackendKind::Adjacency;

        let settings = config.resolve(Some(PathBuf::from("flag.txt")), Some(BackendKind::PetGraph));
        assert_eq!(settings.corpus, Some(PathBuf::from("flag.txt")));
        assert_eq!(settings.backend, BackendKind::PetGraph);
    }

    #[test]
    fn save_then_load_preserves_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);

        let mut config = Config::default();
        config.corpus.path = Some(PathBuf::from("corpus"));
        config.corpus.extensions = vec!["txt".into(), "md".into()];
        config.output.highlight_bridges = false;
        config.save(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn unknown_backend_fails_to_parse() {
        let parsed: std::result::Result<Config, _> =
            toml::from_str("[graph]\nbackend = \"sqlite\"\n");
        assert!(parsed.is_err());
    }
}
