//! Explain bridge selection between two words.

use anyhow::Result;
use colored::Colorize;
use graphpoet::prelude::*;

use super::load_poet;
use crate::config::Settings;

pub fn run(from: &str, to: &str, top: usize, settings: &Settings) -> Result<()> {
    let (poet, _) = load_poet(settings)?;
    let (w1, w2) = (fold_case(from), fold_case(to));
    let bridges = rank_bridges(poet.graph(), &w1, &w2);

    if bridges.is_empty() {
        println!(
            "{} No bridge between {} and {}",
            "•".yellow(),
            w1.cyan(),
            w2.cyan()
        );
        return Ok(());
    }

    println!(
        "{} Bridges from {} to {}:",
        "→".blue(),
        w1.cyan().bold(),
        w2.cyan().bold()
    );
    println!();

    for (i, bridge) in bridges.iter().take(top).enumerate() {
        let rank = format!("{}.", i + 1);
        let first = poet.graph().weight(&w1, &bridge.label);
        let second = poet.graph().weight(&bridge.label, &w2);
        println!(
            "  {} {} {}",
            rank.blue(),
            bridge.label.white().bold(),
            format!("({} = {} + {})", bridge.weight, first, second).dimmed()
        );
    }

    println!();
    println!(
        "{} {} candidates",
        "✓".green(),
        bridges.len().to_string().cyan()
    );

    Ok(())
}
