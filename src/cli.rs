//! Command-line interface for unbeaten.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use unbeaten_tictactoe::GameMode;

/// Unbeaten - tic-tac-toe against an opponent that never loses
#[derive(Parser, Debug)]
#[command(name = "unbeaten")]
#[command(about = "Terminal tic-tac-toe with a perfect minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults apply if it does not exist)
    #[arg(short, long, global = true, default_value = "unbeaten.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively on stdin/stdout
    Play {
        /// Game mode (human-vs-human, human-vs-ai); overrides the config file
        #[arg(short, long)]
        mode: Option<GameMode>,

        /// Print the AI's score for each candidate reply
        #[arg(long)]
        show_scores: bool,
    },

    /// Evaluate a board and score every move for the side to move
    Analyse {
        /// Board as nine cells in row order, e.g. "XO./.X./..O"
        board: String,

        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
    },

    /// Let the AI play both sides
    Selfplay,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play_with_mode() {
        let cli = Cli::try_parse_from(["unbeaten", "play", "--mode", "human-vs-human"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("unbeaten.toml"));
        match cli.command {
            Command::Play { mode, show_scores } => {
                assert_eq!(mode, Some(GameMode::HumanVsHuman));
                assert!(!show_scores);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_analyse_json() {
        let cli =
            Cli::try_parse_from(["unbeaten", "--config", "x.toml", "analyse", "X........", "--json"])
                .unwrap();
        assert_eq!(cli.config, PathBuf::from("x.toml"));
        assert!(matches!(
            cli.command,
            Command::Analyse { ref board, json: true } if board == "X........"
        ));
    }

    #[test]
    fn test_rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["unbeaten", "play", "--mode", "chess"]).is_err());
    }
}
