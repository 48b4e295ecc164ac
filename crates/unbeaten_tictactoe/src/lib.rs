//! Pure tic-tac-toe game logic with an opponent that never loses.
//!
//! This crate holds everything with real rules in it and nothing that
//! touches a terminal, a window, or the network.
//!
//! # Architecture
//!
//! - **Board**: [`Board`], [`Cell`] and [`Position`], a `Copy` grid that is
//!   always passed by value.
//! - **Outcome evaluation**: [`rules::evaluate`] scans the eight lines.
//! - **Search**: [`search::minimax`] walks the whole game tree and
//!   [`search::best_move`] picks the first optimal move in row-major order.
//! - **Turn control**: [`GameSession`] owns one game, and [`TurnController`]
//!   drives the menu → in-progress → game-over state machine.
//!
//! # Example
//!
//! ```
//! use unbeaten_tictactoe::{GameMode, Outcome, Position, TurnController};
//!
//! let mut controller = TurnController::new();
//! controller.select_mode(GameMode::HumanVsAI).unwrap();
//!
//! // The AI answers a corner opening by taking the center.
//! let outcome = controller.apply_move(Position::TopLeft).unwrap();
//! assert_eq!(outcome, Outcome::InProgress);
//! let board = controller.current_board().unwrap();
//! assert!(!board.is_empty(Position::Center));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod controller;
mod position;
mod session;
mod types;

pub mod invariants;
pub mod rules;
pub mod search;

pub use action::{Move, MoveError};
pub use controller::{ControllerError, Phase, TurnController};
pub use position::Position;
pub use search::{ScoredMove, SearchError};
pub use session::GameSession;
pub use types::{Board, BoardParseError, Cell, GameMode, Outcome, Player};

/// Alias for clarity when talking about what sits in a cell.
pub type Mark = Player;
