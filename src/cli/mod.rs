pub mod config;
pub mod define;
pub mod handle;
pub mod summarize;

use anyhow::{Context, Result};
use std::io::Read;
use std::path::{Path, PathBuf};

use sintesis::config::{default_config_path, SynthesisConfig};

/// Config file in effect: explicit `--config` or the default location.
pub fn resolve_config_path(explicit: Option<&Path>) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(default_config_path)
}

/// Load the effective config.
///
/// An explicit `--config` must be readable; the default file is optional.
pub fn load_config(explicit: Option<&Path>) -> Result<SynthesisConfig> {
    match explicit {
        Some(path) => SynthesisConfig::load_from(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(SynthesisConfig::load()),
    }
}

/// Input text: argument, then file, then stdin.
pub fn read_input(text: Option<&str>, file: Option<&Path>) -> Result<String> {
    if let Some(t) = text {
        return Ok(t.to_string());
    }
    if let Some(path) = file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()));
    }
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read stdin")?;
    Ok(buf)
}
