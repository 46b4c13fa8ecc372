//! spiralsolve CLI - Predict where a clockwise spiral walk ends up facing
//!
//! A command-line tool for solving single grids, running contest-style
//! batches, and managing saved preferences.

mod commands;
mod logging;

use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use spiralsolve_core::{Config, ConfigStore, Integer, OutputFormat};
use tracing::warn;

#[derive(Parser)]
#[command(name = "spiralsolve")]
#[command(author, version, about = "Predict the final heading of a clockwise spiral walk")]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Use this config file instead of ~/.spiralsolve/config.json
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a single grid
    Solve {
        /// Number of rows (n)
        #[arg(allow_negative_numbers = true)]
        rows: Integer,

        /// Number of columns (m)
        #[arg(allow_negative_numbers = true)]
        cols: Integer,
    },

    /// Solve a batch: a case count followed by that many "n m" pairs
    #[command(alias = "run")]
    Batch {
        /// Input file, or "-" for stdin (default)
        file: Option<PathBuf>,

        /// Reject tokens after the last case
        #[arg(long)]
        strict: bool,
    },

    /// Show or edit saved preferences
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set the default output format
    SetFormat { format: OutputFormat },
    /// Enable or disable strict batch parsing
    SetStrict {
        #[arg(action = ArgAction::Set)]
        enabled: bool,
    },
    /// Set the default log filter (e.g. "warn", "spiralsolve_core=debug")
    SetLogLevel { level: String },
    /// Restore default settings
    Reset,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let store = match cli.config {
        Some(ref path) => ConfigStore::with_path(path.clone()),
        None => ConfigStore::new().context("Failed to locate config file")?,
    };

    let (config, load_error) = match store.load().await {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    logging::init(&config.log_level, cli.verbose);
    if let Some(e) = load_error {
        warn!(error = %e, path = %store.path().display(), "Using default configuration");
    }

    let json = cli.json || config.output_format == OutputFormat::Json;

    match cli.command {
        Some(Commands::Solve { rows, cols }) => {
            commands::solve::run(rows, cols, json)?;
        }
        Some(Commands::Batch { file, strict }) => {
            commands::batch::run(file, strict || config.strict, json).await?;
        }
        Some(Commands::Config { action }) => match action.unwrap_or(ConfigAction::Show) {
            ConfigAction::Show => commands::config::show(&store, cli.json).await?,
            ConfigAction::SetFormat { format } => {
                commands::config::set_format(&store, format).await?
            }
            ConfigAction::SetStrict { enabled } => {
                commands::config::set_strict(&store, enabled).await?
            }
            ConfigAction::SetLogLevel { level } => {
                commands::config::set_log_level(&store, &level).await?
            }
            ConfigAction::Reset => commands::config::reset(&store).await?,
        },
        None => {
            // Default: solve a piped batch, or explain usage on a terminal
            if atty::is(atty::Stream::Stdin) {
                Cli::command().print_help()?;
            } else {
                commands::batch::run(None, config.strict, json).await?;
            }
        }
    }

    Ok(())
}
