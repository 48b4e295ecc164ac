//! Menu → game → game-over state machine.

use super::search::SearchError;
use super::{Board, GameMode, GameSession, MoveError, Outcome, Position};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument, warn};

/// Where the controller is in its lifecycle.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Phase {
    /// Waiting for a game mode.
    #[display("menu selection")]
    MenuSelection,
    /// A game is being played.
    #[display("in progress")]
    InProgress,
    /// The last game has an outcome; waiting for a reset.
    #[display("game over")]
    GameOver,
}

/// Controller state, with the session carried by the phases that have one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
enum ControllerState {
    #[default]
    MenuSelection,
    InProgress(GameSession),
    GameOver(GameSession),
}

impl ControllerState {
    fn phase(&self) -> Phase {
        match self {
            ControllerState::MenuSelection => Phase::MenuSelection,
            ControllerState::InProgress(_) => Phase::InProgress,
            ControllerState::GameOver(_) => Phase::GameOver,
        }
    }
}

/// Drives one player-facing game at a time.
///
/// Starts in [`Phase::MenuSelection`]. [`select_mode`](Self::select_mode)
/// starts a game, [`apply_move`](Self::apply_move) plays it out, and
/// [`reset`](Self::reset) returns to the menu.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnController {
    state: ControllerState,
}

impl TurnController {
    /// Creates a controller waiting at the menu.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Returns the current or just-finished game, if any.
    pub fn session(&self) -> Option<&GameSession> {
        match &self.state {
            ControllerState::MenuSelection => None,
            ControllerState::InProgress(session) | ControllerState::GameOver(session) => {
                Some(session)
            }
        }
    }

    /// Returns a copy of the board, or `None` at the menu.
    pub fn current_board(&self) -> Option<Board> {
        self.session().map(GameSession::board)
    }

    /// Returns the outcome of the current game, or `None` at the menu.
    pub fn outcome(&self) -> Option<Outcome> {
        self.session().map(GameSession::outcome)
    }

    /// Starts a fresh game in `mode`.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError::NotInMenu`] outside [`Phase::MenuSelection`].
    /// The controller is unchanged in that case.
    #[instrument(skip(self), fields(phase = %self.phase()))]
    pub fn select_mode(&mut self, mode: GameMode) -> Result<&GameSession, ControllerError> {
        let phase = self.phase();
        if phase != Phase::MenuSelection {
            warn!("Mode selection outside the menu");
            return Err(ControllerError::NotInMenu(phase));
        }

        info!(%mode, "Mode selected");
        self.state = ControllerState::InProgress(GameSession::new(mode));
        self.session().ok_or(ControllerError::NotInMenu(phase))
    }

    /// Plays the current player's mark at `position`.
    ///
    /// In `HumanVsAI` the AI's reply is applied before this returns. A
    /// terminal outcome moves the controller to [`Phase::GameOver`].
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::NotInProgress`] outside a game and
    /// [`MoveError::CellOccupied`] for a taken cell, both wrapped in
    /// [`ControllerError::Move`]. The controller is unchanged in either case.
    #[instrument(skip(self), fields(phase = %self.phase()))]
    pub fn apply_move(&mut self, position: Position) -> Result<Outcome, ControllerError> {
        let phase = self.phase();
        let ControllerState::InProgress(session) = &mut self.state else {
            warn!("Move outside a game");
            return Err(MoveError::NotInProgress(phase).into());
        };

        let outcome = session.apply_move(position).inspect_err(|e| {
            if let ControllerError::Search(fault) = e {
                error!(error = %fault, "AI search failed on a live game");
            }
        })?;

        if outcome.is_terminal()
            && let ControllerState::InProgress(session) = std::mem::take(&mut self.state)
        {
            info!(%outcome, "Entering game over");
            self.state = ControllerState::GameOver(session);
        }

        Ok(outcome)
    }

    /// Returns to the menu.
    ///
    /// Accepted from `GameOver`, and from `InProgress` to abandon the game.
    /// Does nothing at the menu.
    #[instrument(skip(self), fields(phase = %self.phase()))]
    pub fn reset(&mut self) {
        if self.phase() != Phase::MenuSelection {
            info!("Returning to menu");
        }
        self.state = ControllerState::MenuSelection;
    }
}

/// Anything the controller can reject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ControllerError {
    /// The move was illegal.
    #[display("Invalid move: {}", _0)]
    Move(MoveError),

    /// The AI search failed. Points at a bug rather than bad input.
    #[display("Search failed: {}", _0)]
    Search(SearchError),

    /// A mode was selected while a game was running or finished.
    #[display("Cannot select a mode during {}", _0)]
    NotInMenu(Phase),
}

impl std::error::Error for ControllerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ControllerError::Move(e) => Some(e),
            ControllerError::Search(e) => Some(e),
            ControllerError::NotInMenu(_) => None,
        }
    }
}

impl From<MoveError> for ControllerError {
    fn from(e: MoveError) -> Self {
        ControllerError::Move(e)
    }
}

impl From<SearchError> for ControllerError {
    fn from(e: SearchError) -> Self {
        ControllerError::Search(e)
    }
}
