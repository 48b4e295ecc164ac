//! Unbeaten - terminal tic-tac-toe against a minimax opponent.
//!
//! The game rules, search, and turn control live in the
//! `unbeaten_tictactoe` crate. This crate adds what a player touches:
//!
//! - **Config**: [`UnbeatenConfig`], loaded from TOML
//! - **CLI**: [`Cli`] and its subcommands
//! - **Play loop**: [`run_play`] drives a [`TurnController`] from any
//!   `BufRead`/`Write` pair
//! - **Commands**: [`analyse`] and [`selfplay`]
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use unbeaten::{GameMode, Outcome, UnbeatenConfig, run_play};
//!
//! let mut out = Vec::new();
//! let outcomes = run_play(
//!     &UnbeatenConfig::default(),
//!     GameMode::HumanVsHuman,
//!     Cursor::new("0 0\n1 0\n0 1\n1 1\n0 2\nquit\n"),
//!     &mut out,
//! )
//! .unwrap();
//! assert_eq!(outcomes, vec![Outcome::Win(unbeaten::Player::X)]);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod commands;
mod config;
mod play;
mod terminal;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{ConfigError, UnbeatenConfig};

// Crate-level exports - Commands
pub use commands::{Analysis, analyse, analyse_board, selfplay};
pub use play::run as run_play;

// Crate-level exports - Terminal I/O
pub use terminal::{
    Command as InputCommand, HELP, InputError, parse_command, render_board, render_menu,
    render_scores, render_status,
};

// Crate-level exports - Game types
pub use unbeaten_tictactoe::{
    Board, ControllerError, GameMode, GameSession, Move, MoveError, Outcome, Phase, Player,
    Position, TurnController,
};
