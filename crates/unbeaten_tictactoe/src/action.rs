//! First-class move records and move errors.

use super::controller::Phase;
use super::types::Outcome;
use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
///
/// Sessions keep every accepted move so a game can be replayed or checked
/// against its board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position)
    }
}

/// A rejected move.
///
/// Every variant is recoverable: the session that rejected the move is
/// left exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell at the position already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Position),

    /// The coordinates do not name a cell on a 3x3 board.
    #[display("Position ({}, {}) is off the 3x3 board", row, col)]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// No game is being played.
    #[display("No game in progress (phase: {})", _0)]
    NotInProgress(Phase),

    /// The game already has an outcome.
    #[display("Game is already over ({})", _0)]
    GameOver(Outcome),
}

impl std::error::Error for MoveError {}
