//! Export the word graph.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use graphpoet::prelude::*;
use std::path::Path;

use super::load_poet;
use crate::config::Settings;

pub fn run(output: &Path, format: &str, settings: &Settings) -> Result<()> {
    let (poet, _) = load_poet(settings)?;
    let graph = poet.graph();

    let content = match format {
        "json" => to_json::<String, _>(graph).context("Failed to serialize graph")?,
        "text" => render_text::<String, _>(graph),
        other => bail!("Unknown format: {} (expected json or text)", other),
    };

    std::fs::write(output, content)
        .with_context(|| format!("Failed to write: {}", output.display()))?;

    println!(
        "{} Exported {} vertices and {} edges to {}",
        "✓".green(),
        graph.vertex_count().to_string().cyan(),
        graph.edge_count().to_string().cyan(),
        output.display()
    );

    Ok(())
}
