//! Generate a bridge-word poem.

use anyhow::Result;
use colored::Colorize;
use graphpoet::prelude::*;

use super::load_poet;
use crate::config::Settings;

pub fn run(phrase: &str, settings: &Settings) -> Result<()> {
    let (poet, _) = load_poet(settings)?;
    let poem = poet.compose(phrase);

    if settings.highlight && poem.bridges_inserted() > 0 {
        let rendered: Vec<String> = poem
            .tokens()
            .iter()
            .map(|token| match token {
                PoemToken::Word { text } => text.clone(),
                PoemToken::Bridge { text, .. } => text.green().italic().to_string(),
            })
            .collect();
        println!("{}", rendered.join(" "));
    } else {
        println!("{}", poem);
    }

    Ok(())
}
