//! GraphPoet CLI - bridge-word poems from a reference corpus.

mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use graphpoet::prelude::BackendKind;
use std::path::PathBuf;
use tracing::Level;

use crate::config::{Config, Settings};

#[derive(Parser)]
#[command(name = "graphpoet")]
#[command(author, version, about = "GraphPoet - bridge-word poems from a word graph", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Corpus file or directory (default: config, then the embedded corpus)
    #[arg(short, long, global = true)]
    corpus: Option<PathBuf>,

    /// Graph backend: petgraph or adjacency
    #[arg(short, long, global = true)]
    backend: Option<BackendKind>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default graphpoet.toml
    Init {
        /// Project directory (default: current directory)
        #[arg(short, long)]
        path: Option<PathBuf>,
    },

    /// Insert bridge words into a phrase
    Poem {
        /// Input phrase
        phrase: String,
    },

    /// Show the ranked bridge candidates between two words
    Bridge {
        /// First word
        from: String,
        /// Second word
        to: String,

        /// Number of candidates to show
        #[arg(short, long, default_value = "10")]
        top: usize,
    },

    /// Show word graph statistics
    Stats,

    /// Export the word graph
    Export {
        /// Output file path
        output: PathBuf,

        /// Export format: json or text
        #[arg(short, long, default_value = "json")]
        format: String,
    },
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let Cli {
        command,
        corpus,
        backend,
        verbose,
    } = Cli::parse();
    init_tracing(verbose);

    // Init must work before any config file exists.
    let settings = || -> Result<Settings> { Ok(Config::load()?.resolve(corpus.clone(), backend)) };

    match command {
        Commands::Init { path } => commands::init::run(path),
        Commands::Poem { phrase } => commands::poem::run(&phrase, &settings()?),
        Commands::Bridge { from, to, top } => {
            commands::bridge::run(&from, &to, top, &settings()?)
        }
        Commands::Stats => commands::stats::run(&settings()?),
        Commands::Export { output, format } => {
            commands::export::run(&output, &format, &settings()?)
        }
    }
}
