//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board according to
//! tic-tac-toe rules. Rules are separated from board storage so the search
//! and the session share one definition of "game over".

pub mod draw;
pub mod win;

pub use draw::{is_full, is_tie};
pub use win::{LINES, check_winner, winning_line};

use super::{Board, Outcome};

/// Evaluates a board.
///
/// Returns `Win` for the first completed line in scan order (rows, then
/// columns, then diagonals), `Tie` for a full board with no line, and
/// `InProgress` otherwise.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        return Outcome::Win(winner);
    }
    if is_full(board) {
        return Outcome::Tie;
    }
    Outcome::InProgress
}
