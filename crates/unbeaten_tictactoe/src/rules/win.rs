//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Player, Position};

/// The eight lines in scan order: rows 0-2, columns 0-2, then the main
/// diagonal and the anti-diagonal.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` for the first line in [`LINES`] holding three of
/// that player's marks, `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).and_then(|[a, _, _]| match board.get(a) {
        Cell::Occupied(player) => Some(player),
        Cell::Empty => None,
    })
}

/// Returns the first completed line, if any.
pub fn winning_line(board: &Board) -> Option<[Position; 3]> {
    LINES.into_iter().find(|&[a, b, c]| {
        let cell = board.get(a);
        cell != Cell::Empty && cell == board.get(b) && cell == board.get(c)
    })
}
