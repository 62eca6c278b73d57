//! Show word graph statistics.

use anyhow::Result;
use colored::Colorize;
use graphpoet::prelude::*;

use super::load_poet;
use crate::config::Settings;

pub fn run(settings: &Settings) -> Result<()> {
    let (poet, report) = load_poet(settings)?;
    let graph = poet.graph();
    let stats = edge_stats(&export_edges::<String, _>(graph));

    println!("{}", "GraphPoet Statistics".white().bold());
    println!("{}", "═".repeat(40).dimmed());
    println!();

    println!("{}", "Corpus".blue().bold());
    println!("  Documents:         {}", report.documents.to_string().cyan());
    println!("  Tokens:            {}", report.tokens.to_string().cyan());
    println!("  Adjacent pairs:    {}", report.pairs.to_string().cyan());
    println!();

    println!("{}", "Graph Structure".blue().bold());
    println!("  Backend:           {}", settings.backend.to_string().cyan());
    println!("  Vertices:          {}", graph.vertex_count().to_string().cyan());
    println!("  Edges:             {}", graph.edge_count().to_string().cyan());
    println!();

    println!("{}", "Edge Weights".blue().bold());
    println!("  Total weight:      {}", stats.total_weight);
    println!("  Max weight:        {}", stats.max_weight);
    println!("  Min weight:        {}", stats.min_weight);
    println!("  Avg edge weight:   {:.4}", stats.mean_weight);
    println!();

    // Density of a directed graph with self-loops allowed: E / V^2.
    let vertices = graph.vertex_count();
    if vertices > 0 {
        let density = graph.edge_count() as f64 / (vertices * vertices) as f64;
        println!("{}", "Density".blue().bold());
        println!("  Graph density:     {:.6}", density);
        println!();
    }

    println!("{}", "═".repeat(40).dimmed());

    Ok(())
}
