//! Tracing initialization for the CLI.
//!
//! Filter comes from `RUST_LOG` (default `info`). Logs go to stderr so that
//! stdout stays reserved for results, or are appended to a file when asked.

use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize global tracing.
///
/// - `log_file`: append to this file instead of stderr (ANSI disabled).
///   Falls back to stderr if the file cannot be opened.
pub fn init_tracing(log_file: Option<&Path>) {
    if let Some(path) = log_file {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).ok();
        }
        match std::fs::OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => {
                tracing_subscriber::fmt()
                    .with_env_filter(env_filter())
                    .with_writer(Mutex::new(file))
                    .with_target(true)
                    .with_ansi(false)
                    .init();
                return;
            }
            Err(e) => {
                eprintln!("Cannot open log file {}: {} (logging to stderr)", path.display(), e);
            }
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}
