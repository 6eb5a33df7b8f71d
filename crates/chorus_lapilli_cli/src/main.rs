//! Chorus Lapilli - terminal front-end.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use chorus_lapilli_cli::{Cli, Command, OutputFormat, Script, render, run_interactive};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play => run_play(),
        Command::Replay { script, format } => run_replay(script, format),
    }
}

/// Play interactively on stdin/stdout
fn run_play() -> Result<()> {
    info!("Starting interactive match");
    let stdin = std::io::stdin();
    let state = run_interactive(stdin.lock(), std::io::stdout())?;
    info!(
        winner = ?state.status().winner(),
        steps = state.step_number(),
        "Match ended"
    );
    Ok(())
}

/// Apply a script and print the final view
#[instrument(skip(script), fields(script = %script.display()))]
fn run_replay(script: PathBuf, format: OutputFormat) -> Result<()> {
    let loaded = Script::from_file(&script)
        .with_context(|| format!("Failed to load script {}", script.display()))?;
    let state = loaded.run();
    info!(winner = ?state.status().winner(), "Script applied");
    println!("{}", render(&state.view(), format)?);
    Ok(())
}
