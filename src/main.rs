//! Unbeaten - command-line entry point.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use unbeaten::{Cli, Command, UnbeatenConfig, analyse, run_play, selfplay};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = UnbeatenConfig::load_or_default(&cli.config)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(io::stderr)
        .init();

    debug!(?config, "Configuration resolved");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Play { mode, show_scores } => {
            let mode = mode.unwrap_or(*config.mode());
            let show_scores = show_scores || *config.show_scores();
            let config = config.with_show_scores(show_scores);
            info!(%mode, "Starting interactive play");
            let outcomes = run_play(&config, mode, io::stdin().lock(), &mut out)?;
            writeln!(out, "Played {} game(s). Bye!", outcomes.len())?;
        }
        Command::Analyse { board, json } => {
            analyse(&board, json, &mut out)?;
        }
        Command::Selfplay => {
            selfplay(&mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}
