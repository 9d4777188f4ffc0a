use anyhow::{Context, Result};

use sintesis::dictionary;

/// `define <word>` — dictionary lookup.
pub fn run(word: &str, json: bool) -> Result<()> {
    let entry = dictionary::lookup(word).context("Lookup failed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&entry)?);
        return Ok(());
    }

    println!("{} [{}]", entry.word, entry.pronunciation);
    println!("  {}", entry.definition);
    if !entry.known {
        tracing::debug!(word = %entry.word, "Word not in dictionary");
        println!("  (not among the {} defined words)", dictionary::vocabulary_size());
    }
    Ok(())
}
