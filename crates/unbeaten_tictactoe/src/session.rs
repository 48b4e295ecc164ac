//! A single game: one board, one mode, and whose turn it is.

use super::controller::{ControllerError, Phase};
use super::invariants::{InvariantSet, SessionInvariants};
use super::{Board, GameMode, Move, MoveError, Outcome, Player, Position, rules, search};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// One game of tic-tac-toe.
///
/// All turn state lives here rather than in globals: the board, the mode,
/// the player to move, the outcome so far, and every accepted move. A
/// session shares nothing with any other session, so many can run side by
/// side without locking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    pub(crate) board: Board,
    mode: GameMode,
    to_move: Player,
    outcome: Outcome,
    pub(crate) history: Vec<Move>,
}

impl GameSession {
    /// Starts a fresh game: empty board, X to move.
    #[instrument]
    pub fn new(mode: GameMode) -> Self {
        info!(%mode, "Creating new game session");
        Self {
            board: Board::new(),
            mode,
            to_move: Player::X,
            outcome: Outcome::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns a copy of the board for rendering.
    pub fn board(&self) -> Board {
        self.board
    }

    /// Returns the game mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the player whose turn it is.
    ///
    /// Once the game is over this is the player who made the last move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the outcome so far.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns every accepted move in order, AI replies included.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns `InProgress` or `GameOver`.
    pub fn phase(&self) -> Phase {
        if self.outcome.is_terminal() {
            Phase::GameOver
        } else {
            Phase::InProgress
        }
    }

    /// Plays the current player's mark at `position`.
    ///
    /// In [`GameMode::HumanVsAI`], a human move that does not end the game
    /// is answered at once by the minimax AI, and the returned outcome
    /// reflects the board after that reply.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError::Move`] if the game is over or the cell is
    /// taken. The session is unchanged in that case.
    #[instrument(skip(self), fields(mode = %self.mode, to_move = %self.to_move))]
    pub fn apply_move(&mut self, position: Position) -> Result<Outcome, ControllerError> {
        if self.outcome.is_terminal() {
            warn!(outcome = %self.outcome, "Rejecting move on finished game");
            return Err(MoveError::GameOver(self.outcome).into());
        }

        let mover = self.to_move;
        self.place(position)?;

        if let Some(ai) = self.mode.ai_player()
            && !self.outcome.is_terminal()
            && mover == ai.opponent()
        {
            let reply = search::best_move(self.board, ai)?;
            debug!(position = %reply, "AI replies");
            self.place(reply)?;
        }

        Ok(self.outcome)
    }

    /// Starts a fresh game in the same mode.
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub fn reset(&self) -> GameSession {
        GameSession::new(self.mode)
    }

    /// Rebuilds a session by feeding `inputs` to a fresh game, in order.
    ///
    /// `inputs` are the moves a caller would make through
    /// [`GameSession::apply_move`]; in `HumanVsAI` the AI's replies are
    /// regenerated, and since the search is deterministic they come out the
    /// same as the first time.
    ///
    /// # Errors
    ///
    /// Returns the first rejection, exactly as `apply_move` would.
    #[instrument(skip(inputs), fields(moves = inputs.len()))]
    pub fn replay(mode: GameMode, inputs: &[Position]) -> Result<GameSession, ControllerError> {
        let mut session = GameSession::new(mode);
        for &position in inputs {
            session.apply_move(position)?;
        }
        Ok(session)
    }

    /// Places the current player's mark, records it, and re-evaluates.
    ///
    /// Nothing is modified unless the placement is legal.
    fn place(&mut self, position: Position) -> Result<(), MoveError> {
        let board = self.board.set(position, self.to_move).inspect_err(|e| {
            warn!(error = %e, "Rejecting move");
        })?;

        let mov = Move::new(self.to_move, position);
        self.board = board;
        self.history.push(mov);
        self.outcome = rules::evaluate(&self.board);

        if self.outcome.is_terminal() {
            info!(outcome = %self.outcome, moves = self.history.len(), "Game over");
        } else {
            self.to_move = self.to_move.opponent();
        }
        debug!(%mov, "Move applied");

        debug_assert!(
            SessionInvariants::check_all(self).is_ok(),
            "Session invariants violated after {}",
            mov
        );

        Ok(())
    }
}
