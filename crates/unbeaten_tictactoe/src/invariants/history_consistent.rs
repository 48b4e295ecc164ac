//! History consistency invariant: history length matches occupied cells.

use super::super::GameSession;
use super::Invariant;

/// Invariant: History length equals number of occupied cells.
///
/// Every move in history corresponds to exactly one occupied cell.
pub struct HistoryConsistentInvariant;

impl Invariant<GameSession> for HistoryConsistentInvariant {
    fn holds(session: &GameSession) -> bool {
        session.history().len() == session.board().occupied()
    }

    fn description() -> &'static str {
        "History length matches number of occupied cells"
    }
}
