use anyhow::Result;
use std::path::Path;

use sintesis::handler::{handle_json, RequestKind};
use sintesis::Synthesizer;

/// `handle <kind>` — one JSON request on stdin, one JSON response on stdout.
pub fn run(kind: RequestKind, config_path: Option<&Path>) -> Result<()> {
    let body = super::read_input(None, None)?;
    let synth = Synthesizer::with_config(super::load_config(config_path)?);
    let response = handle_json(&synth, kind, &body);
    println!("{}", serde_json::to_string(&response)?);
    Ok(())
}
