//! One-shot commands: board analysis and AI self-play.

use crate::terminal;
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;
use tracing::{info, instrument};
use unbeaten_tictactoe::search::{self, ScoredMove};
use unbeaten_tictactoe::{Board, Outcome, Player, Position, rules};

/// What the engine makes of a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    /// The board in compact row form, e.g. `XO./.X./..O`.
    pub board: String,
    /// Outcome as the board stands.
    pub outcome: Outcome,
    /// Side to move, if the game is still on.
    pub to_move: Option<Player>,
    /// Every legal move for the side to move with its minimax score.
    pub moves: Vec<ScoredMove>,
    /// The move the AI would play.
    pub best: Option<Position>,
}

/// Scores every move on `board` for whoever is to move.
///
/// # Errors
///
/// Propagates search failures. A finished board is not an error: it
/// yields an analysis with no moves.
#[instrument(skip(board))]
pub fn analyse_board(board: Board) -> Result<Analysis> {
    let outcome = rules::evaluate(&board);
    let compact = board.to_string().replace('\n', "/");

    if outcome.is_terminal() {
        return Ok(Analysis {
            board: compact,
            outcome,
            to_move: None,
            moves: Vec::new(),
            best: None,
        });
    }

    let player = board.next_player();
    let moves = search::scored_moves(board, player)?;
    let best = search::best_move(board, player)?;
    info!(%player, best = %best, "Analysis complete");

    Ok(Analysis {
        board: compact,
        outcome,
        to_move: Some(player),
        moves,
        best: Some(best),
    })
}

/// Parses `board`, analyses it, and writes the result as text or JSON.
///
/// # Errors
///
/// Fails if the board does not parse or output cannot be written.
#[instrument(skip(output))]
pub fn analyse<W: Write>(board: &str, json: bool, output: &mut W) -> Result<Analysis> {
    let parsed: Board = board
        .parse()
        .with_context(|| format!("Invalid board '{}'", board))?;
    let analysis = analyse_board(parsed)?;

    if json {
        serde_json::to_writer_pretty(&mut *output, &analysis)?;
        writeln!(output)?;
        return Ok(analysis);
    }

    writeln!(output, "{}", terminal::render_board(&parsed))?;
    writeln!(output, "Outcome: {}", analysis.outcome)?;
    if let (Some(player), Some(best)) = (analysis.to_move, analysis.best) {
        writeln!(output, "{} to move; scores (O high, X low):", player)?;
        writeln!(output, "{}", terminal::render_scores(&analysis.moves))?;
        writeln!(output, "Best move: {}", best)?;
    }
    Ok(analysis)
}

/// Plays the AI against itself from an empty board, printing every ply.
///
/// # Errors
///
/// Fails on a search fault or if output cannot be written.
#[instrument(skip(output))]
pub fn selfplay<W: Write>(output: &mut W) -> Result<Outcome> {
    let mut board = Board::new();
    let mut player = Player::X;
    let mut outcome = rules::evaluate(&board);

    while !outcome.is_terminal() {
        let position = search::best_move(board, player)?;
        board = board.set(position, player)?;
        writeln!(output, "{} -> {}", player, position)?;
        writeln!(output, "{}\n", board)?;
        outcome = rules::evaluate(&board);
        player = player.opponent();
    }

    info!(%outcome, "Self-play finished");
    writeln!(output, "Result: {}", outcome)?;
    Ok(outcome)
}
