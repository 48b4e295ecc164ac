//! Mark balance invariant: X has as many marks as O, or one more.

use super::super::{GameSession, Player};
use super::Invariant;

/// Invariant: `count(X) - count(O)` is 0 or 1.
///
/// X always moves first and players alternate, so no other difference can
/// appear on a board reached by play.
pub struct MarkBalanceInvariant;

impl Invariant<GameSession> for MarkBalanceInvariant {
    fn holds(session: &GameSession) -> bool {
        let board = session.board();
        let x_count = board.count(Player::X);
        let o_count = board.count(Player::O);
        x_count == o_count || x_count == o_count + 1
    }

    fn description() -> &'static str {
        "X marks equal O marks or exceed them by one"
    }
}
