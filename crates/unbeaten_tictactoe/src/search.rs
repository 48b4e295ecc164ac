//! Exhaustive minimax search.
//!
//! The whole game tree below a position is explored on every call: no
//! pruning, no transposition table, no depth limit. A 3x3 board has at most
//! nine plies left, so brute force is both fast enough and obviously
//! correct, and it is what makes the AI impossible to beat.
//!
//! Scores are always from O's point of view: O is the maximizing side and
//! X the minimizing one.
//!
//! Every hypothetical move is a fresh [`Board`] value. The board a session
//! plays on is never touched.

use super::rules;
use super::{Board, Outcome, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Minimax score: `-1`, `0` or `1`.
pub type Score = i8;

/// Score of a board X has won.
pub const X_WINS: Score = -1;

/// Score of a tied board.
pub const TIE: Score = 0;

/// Score of a board O has won.
pub const O_WINS: Score = 1;

/// The search was asked to move on a finished board.
///
/// Callers must check that the board is still in progress first. Seeing
/// this error means that check was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SearchError {
    /// The board is already won or full.
    #[display("No move available: game is {}", _0)]
    NoMoveAvailable(Outcome),
}

impl std::error::Error for SearchError {}

/// A candidate move and the minimax score of the board it leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredMove {
    /// Where the mark goes.
    pub position: Position,
    /// Score of the resulting board with the opponent to move.
    pub score: Score,
}

/// Score of a finished game, or `None` while it is still in progress.
pub fn terminal_score(outcome: Outcome) -> Option<Score> {
    match outcome {
        Outcome::Win(Player::X) => Some(X_WINS),
        Outcome::Win(Player::O) => Some(O_WINS),
        Outcome::Tie => Some(TIE),
        Outcome::InProgress => None,
    }
}

/// Scores a board by searching every line of play below it.
///
/// `maximizing` says who moves next: `true` for O, `false` for X.
/// Deterministic: the same board and flag always give the same score.
pub fn minimax(board: Board, maximizing: bool) -> Score {
    if let Some(score) = terminal_score(rules::evaluate(&board)) {
        return score;
    }

    let mover = if maximizing { Player::O } else { Player::X };
    let scores = board
        .empty_positions()
        .filter_map(|pos| board.set(pos, mover).ok())
        .map(|child| minimax(child, !maximizing));

    let best = if maximizing { scores.max() } else { scores.min() };
    // An in-progress board always has an empty cell.
    best.unwrap_or(TIE)
}

/// Scores every move available to `player`, in row-major order.
///
/// # Errors
///
/// Returns [`SearchError::NoMoveAvailable`] if the board is already won
/// or full.
#[instrument(skip(board), fields(player = %player))]
pub fn scored_moves(board: Board, player: Player) -> Result<Vec<ScoredMove>, SearchError> {
    let outcome = rules::evaluate(&board);
    if outcome.is_terminal() {
        warn!(%outcome, "Search invoked on a finished board");
        return Err(SearchError::NoMoveAvailable(outcome));
    }

    // After `player` moves, the opponent is to move. O maximizes.
    let opponent_maximizes = player.opponent() == Player::O;
    let moves = board
        .empty_positions()
        .filter_map(|position| {
            let child = board.set(position, player).ok()?;
            Some(ScoredMove {
                position,
                score: minimax(child, opponent_maximizes),
            })
        })
        .collect();

    Ok(moves)
}

/// Picks the best move for `player`.
///
/// O takes the highest score and X the lowest. Ties go to the first
/// position in row-major order.
///
/// # Errors
///
/// Returns [`SearchError::NoMoveAvailable`] if the board is already won
/// or full.
#[instrument(skip(board), fields(player = %player))]
pub fn best_move(board: Board, player: Player) -> Result<Position, SearchError> {
    let candidates = scored_moves(board, player)?;

    let mut best: Option<ScoredMove> = None;
    for candidate in candidates {
        let improves = match best {
            None => true,
            Some(current) => match player {
                Player::O => candidate.score > current.score,
                Player::X => candidate.score < current.score,
            },
        };
        if improves {
            best = Some(candidate);
        }
    }

    let chosen = best.ok_or(SearchError::NoMoveAvailable(rules::evaluate(&board)))?;
    debug!(
        position = %chosen.position,
        score = chosen.score,
        "Selected move"
    );
    Ok(chosen.position)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_scores() {
        let x_won: Board = "XXX OO. ...".parse().unwrap();
        let o_won: Board = "OOO XX. X..".parse().unwrap();
        let tie: Board = "XOX XOO OXX".parse().unwrap();

        assert_eq!(minimax(x_won, true), X_WINS);
        assert_eq!(minimax(o_won, false), O_WINS);
        assert_eq!(minimax(tie, true), TIE);
    }

    #[test]
    fn test_empty_board_is_a_tie() {
        assert_eq!(minimax(Board::new(), false), TIE);
    }

    #[test]
    fn test_answers_corner_with_center() {
        let board = Board::new().set(Position::TopLeft, Player::X).unwrap();
        assert_eq!(best_move(board, Player::O), Ok(Position::Center));
    }

    #[test]
    fn test_takes_immediate_win() {
        // O O .
        // X X .
        // X . .
        let board: Board = "OO. XX. X..".parse().unwrap();
        assert_eq!(best_move(board, Player::O), Ok(Position::TopRight));
    }

    #[test]
    fn test_x_takes_immediate_win() {
        let board: Board = "XX. OO. ...".parse().unwrap();
        assert_eq!(best_move(board, Player::X), Ok(Position::TopRight));
    }

    #[test]
    fn test_blocks_open_row() {
        // X X .
        // . O .
        // . . .
        let board: Board = "XX. .O. ...".parse().unwrap();
        assert_eq!(best_move(board, Player::O), Ok(Position::TopRight));
    }

    #[test]
    fn test_tie_break_is_first_in_scan_order() {
        // Every reply to the center opening that is not a corner loses, and
        // all four corners tie. The first corner in scan order wins the tie.
        let board = Board::new().set(Position::Center, Player::X).unwrap();
        let scored = scored_moves(board, Player::O).unwrap();

        let corners: Vec<_> = scored.iter().filter(|m| m.score == TIE).collect();
        assert_eq!(corners.len(), 4);
        assert_eq!(best_move(board, Player::O), Ok(Position::TopLeft));
    }

    #[test]
    fn test_finished_board_has_no_move() {
        let won: Board = "XXX OO. ...".parse().unwrap();
        assert_eq!(
            best_move(won, Player::O),
            Err(SearchError::NoMoveAvailable(Outcome::Win(Player::X)))
        );

        let full: Board = "XOX XOO OXX".parse().unwrap();
        assert_eq!(
            scored_moves(full, Player::O),
            Err(SearchError::NoMoveAvailable(Outcome::Tie))
        );
    }

    #[test]
    fn test_search_leaves_board_untouched() {
        let board = Board::new().set(Position::TopLeft, Player::X).unwrap();
        let before = board;
        let _ = best_move(board, Player::O);
        assert_eq!(board, before);
    }
}
