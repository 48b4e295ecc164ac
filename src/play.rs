//! Interactive game loop over any line reader and writer.

use crate::config::UnbeatenConfig;
use crate::terminal::{self, Command, HELP, InputError};
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::{info, instrument, warn};
use unbeaten_tictactoe::{
    ControllerError, GameMode, Outcome, Phase, Position, TurnController, rules, search,
};

/// Runs games until `quit` or end of input.
///
/// A game in `mode` starts right away. Each finished game returns the
/// controller to the menu, where the player can pick a mode again.
///
/// Returns the outcome of every game that was played to the end.
///
/// # Errors
///
/// Fails on I/O errors and if the AI search breaks down mid-game. Bad moves
/// and unreadable input are reported to the player and do not end the loop.
#[instrument(skip(config, input, output))]
pub fn run<R: BufRead, W: Write>(
    config: &UnbeatenConfig,
    mode: GameMode,
    input: R,
    output: &mut W,
) -> Result<Vec<Outcome>> {
    let mut controller = TurnController::new();
    let mut finished = Vec::new();

    writeln!(output, "{}\n", HELP)?;
    start_game(&mut controller, mode, output)?;

    for line in input.lines() {
        let line = line?;
        let at_menu = controller.phase() == Phase::MenuSelection;

        let command = match terminal::parse_command(&line, at_menu) {
            Ok(command) => command,
            Err(InputError::Empty) => continue,
            Err(e) => {
                writeln!(output, "{}", e)?;
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => writeln!(output, "{}", HELP)?,
            Command::Reset => {
                controller.reset();
                writeln!(output, "{}", terminal::render_menu())?;
            }
            Command::Mode(mode) => start_game(&mut controller, mode, output)?,
            Command::Move(position) => {
                if let Some(outcome) = play_move(&mut controller, config, position, output)? {
                    finished.push(outcome);
                }
            }
        }
    }

    info!(games = finished.len(), "Leaving play loop");
    Ok(finished)
}

fn start_game<W: Write>(
    controller: &mut TurnController,
    mode: GameMode,
    output: &mut W,
) -> Result<()> {
    match controller.select_mode(mode) {
        Ok(session) => {
            writeln!(output, "New game: {}", mode.name())?;
            writeln!(output, "{}", terminal::render_board(&session.board()))?;
            writeln!(output, "{}", terminal::render_status(session))?;
        }
        Err(e) => writeln!(output, "{}", e)?,
    }
    Ok(())
}

/// Applies one move and prints the result. Returns the outcome if the game
/// ended.
fn play_move<W: Write>(
    controller: &mut TurnController,
    config: &UnbeatenConfig,
    position: Position,
    output: &mut W,
) -> Result<Option<Outcome>> {
    if *config.show_scores() {
        print_ai_scores(controller, position, output)?;
    }

    match controller.apply_move(position) {
        Ok(outcome) => {
            if let Some(session) = controller.session() {
                writeln!(output, "{}", terminal::render_board(&session.board()))?;
                writeln!(output, "{}", terminal::render_status(session))?;
            }
            if !outcome.is_terminal() {
                return Ok(None);
            }
            info!(%outcome, "Game finished");
            controller.reset();
            writeln!(output, "\n{}", terminal::render_menu())?;
            Ok(Some(outcome))
        }
        Err(ControllerError::Search(e)) => Err(e.into()),
        Err(e) => {
            warn!(error = %e, "Move rejected");
            writeln!(output, "{}", e)?;
            Ok(None)
        }
    }
}

/// Shows how the AI rates each reply to the human's pending move.
fn print_ai_scores<W: Write>(
    controller: &TurnController,
    position: Position,
    output: &mut W,
) -> Result<()> {
    let Some(session) = controller.session() else {
        return Ok(());
    };
    let Some(ai) = session.mode().ai_player() else {
        return Ok(());
    };
    if session.to_move() == ai {
        return Ok(());
    }
    let Ok(after) = session.board().set(position, session.to_move()) else {
        return Ok(());
    };
    if rules::evaluate(&after).is_terminal() {
        return Ok(());
    }

    let scores = search::scored_moves(after, ai)?;
    writeln!(output, "AI scores ({} wants the highest):", ai)?;
    writeln!(output, "{}", terminal::render_scores(&scores))?;
    Ok(())
}
