//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameSession, Player};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// Move history must show X, O, X, O, ... and, while the game is in
/// progress, the player to move must be the one the history implies.
pub struct AlternatingTurnInvariant;

impl Invariant<GameSession> for AlternatingTurnInvariant {
    fn holds(session: &GameSession) -> bool {
        let history = session.history();

        if let Some(first) = history.first()
            && first.player != Player::X
        {
            return false;
        }

        if history.windows(2).any(|w| w[0].player == w[1].player) {
            return false;
        }

        if session.outcome().is_terminal() {
            return true;
        }

        let expected_next = if history.len() % 2 == 0 {
            Player::X
        } else {
            Player::O
        };
        session.to_move() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
