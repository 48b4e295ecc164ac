//! Monotonic board invariant: cells never change once marked.

use super::super::{Board, GameSession};
use super::Invariant;

/// Invariant: replaying the history onto an empty board reproduces the
/// session's board, with every move landing on an empty cell.
pub struct MonotonicBoardInvariant;

impl Invariant<GameSession> for MonotonicBoardInvariant {
    fn holds(session: &GameSession) -> bool {
        let rebuilt = session
            .history()
            .iter()
            .try_fold(Board::new(), |board, mov| {
                board.set(mov.position, mov.player)
            });

        matches!(rebuilt, Ok(board) if board == session.board())
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
