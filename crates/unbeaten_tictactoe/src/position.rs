//! Board positions as a closed set of nine named cells.

use super::action::MoveError;
use super::types::Board;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A position on the tic-tac-toe board.
///
/// Only the nine in-range cells are representable. Coordinates from the
/// outside world go through [`Position::new`], which is where an
/// out-of-range row or column is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    /// Top-left (row 0, column 0)
    TopLeft,
    /// Top-center (row 0, column 1)
    TopCenter,
    /// Top-right (row 0, column 2)
    TopRight,
    /// Middle-left (row 1, column 0)
    MiddleLeft,
    /// Center (row 1, column 1)
    Center,
    /// Middle-right (row 1, column 2)
    MiddleRight,
    /// Bottom-left (row 2, column 0)
    BottomLeft,
    /// Bottom-center (row 2, column 1)
    BottomCenter,
    /// Bottom-right (row 2, column 2)
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Creates a position from a (row, column) pair.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] unless both coordinates are in `0..3`.
    pub fn new(row: usize, col: usize) -> Result<Self, MoveError> {
        if row >= 3 || col >= 3 {
            return Err(MoveError::OutOfRange { row, col });
        }
        Ok(Self::ALL[row * 3 + col])
    }

    /// Row of this position (0-2).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column of this position (0-2).
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Parse from label or board index (0-8).
    ///
    /// Labels match case-insensitively and ignore spaces, so both
    /// `"top left"` and `"Top-left"` work.
    #[instrument]
    pub fn from_label_or_number(s: &str) -> Option<Position> {
        let s = s.trim();
        if let Ok(num) = s.parse::<usize>() {
            return Self::from_index(num);
        }

        let wanted = normalize(s);
        if wanted.is_empty() {
            return None;
        }
        Self::ALL
            .into_iter()
            .find(|pos| normalize(pos.label()) == wanted)
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        match self {
            Position::TopLeft => 0,
            Position::TopCenter => 1,
            Position::TopRight => 2,
            Position::MiddleLeft => 3,
            Position::Center => 4,
            Position::MiddleRight => 5,
            Position::BottomLeft => 6,
            Position::BottomCenter => 7,
            Position::BottomRight => 8,
        }
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Filters positions by board state - returns only empty cells.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        board.empty_positions().collect()
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl TryFrom<(usize, usize)> for Position {
    type Error = MoveError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {})", self.label(), self.row(), self.col())
    }
}
