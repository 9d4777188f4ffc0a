mod cli;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sintesis", version, about = "Sintesis — extractive text synthesis for Spanish")]
struct App {
    /// Config file (defaults to the user config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Append logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize text from an argument, a file, or stdin
    Summarize {
        /// Text to summarize (reads stdin when omitted)
        text: Option<String>,
        /// Read the text from a file
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,
        /// Print the structured summary as JSON
        #[arg(long)]
        json: bool,
        /// Print the per-sentence score breakdown
        #[arg(long)]
        explain: bool,
    },
    /// Look up a word in the built-in dictionary
    Define {
        word: String,
        #[arg(long)]
        json: bool,
    },
    /// Answer one JSON request read from stdin
    Handle {
        #[arg(value_enum)]
        kind: HandleKind,
    },
    /// View or modify configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum HandleKind {
    Synthesize,
    Dictionary,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Display the effective configuration
    Show,
    /// Get a config value (dot notation: scoring.phrase_bonus)
    Get {
        key: String,
    },
    /// Set a config value (JSON: 0.5, true, "text")
    Set {
        key: String,
        value: String,
    },
    /// Print the config file location
    Path,
}

fn main() {
    let app = App::parse();
    sintesis::tracing_init::init_tracing(app.log_file.as_deref());

    let config_path = app.config.as_deref();
    let result = match app.command {
        Commands::Summarize { text, file, json, explain } => {
            cli::summarize::run(text.as_deref(), file.as_deref(), json, explain, config_path)
        }
        Commands::Define { word, json } => cli::define::run(&word, json),
        Commands::Handle { kind } => {
            let kind = match kind {
                HandleKind::Synthesize => sintesis::handler::RequestKind::Synthesize,
                HandleKind::Dictionary => sintesis::handler::RequestKind::Dictionary,
            };
            cli::handle::run(kind, config_path)
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => cli::config::run_show(config_path),
            ConfigAction::Get { key } => cli::config::run_get(&key, config_path),
            ConfigAction::Set { key, value } => cli::config::run_set(&key, &value, config_path),
            ConfigAction::Path => cli::config::run_path(config_path),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
