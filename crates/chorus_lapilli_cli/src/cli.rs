//! Command-line interface for chorus_lapilli.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Chorus Lapilli - tic-tac-toe with placement and movement phases
#[derive(Parser, Debug)]
#[command(name = "chorus_lapilli")]
#[command(about = "Play chorus lapilli in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively on stdin/stdout
    Play,

    /// Apply a TOML script of actions and print the final match
    Replay {
        /// Path to the script file
        #[arg(short, long)]
        script: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// How a match view is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Board, status, hint and history as plain text
    Text,
    /// The view as pretty-printed JSON
    Json,
}
