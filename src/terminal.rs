//! Text rendering and line-oriented input parsing.

use derive_more::Display;
use strum::IntoEnumIterator;
use tracing::{debug, instrument};
use unbeaten_tictactoe::search::ScoredMove;
use unbeaten_tictactoe::{Board, GameMode, GameSession, MoveError, Outcome, Position};

/// One line of player input, interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place a mark.
    Move(Position),
    /// Start a game in this mode (only meaningful at the menu).
    Mode(GameMode),
    /// Abandon or leave the current game and go back to the menu.
    Reset,
    /// Print the help text.
    Help,
    /// Leave the program.
    Quit,
}

/// Input that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum InputError {
    /// Nothing but whitespace.
    #[display("Empty input")]
    Empty,
    /// Coordinates off the board.
    #[display("{}", _0)]
    Move(MoveError),
    /// Neither a command, a position, nor a mode.
    #[display("Unrecognized input: '{}' (type 'help')", _0)]
    Unrecognized(String),
}

impl std::error::Error for InputError {}

/// Help shown on `help` and at startup.
pub const HELP: &str = "\
Moves:   'row col' (0-based, e.g. '1 1'), a cell number 0-8, or a name like 'top-left'
Menu:    '1' or 'human-vs-human', '2' or 'human-vs-ai'
Other:   'reset' or 'menu' to go back, 'help', 'quit'";

/// Parses one line of input.
///
/// At the menu a bare `1` or `2` picks a mode; during a game the same digit
/// names a cell.
#[instrument]
pub fn parse_command(line: &str, at_menu: bool) -> Result<Command, InputError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(InputError::Empty);
    }

    let lower = line.to_ascii_lowercase();
    match lower.as_str() {
        "q" | "quit" | "exit" => return Ok(Command::Quit),
        "r" | "reset" | "menu" => return Ok(Command::Reset),
        "h" | "?" | "help" => return Ok(Command::Help),
        _ => {}
    }

    if at_menu {
        let mode = match lower.parse::<usize>() {
            Ok(n) => n.checked_sub(1).and_then(|i| GameMode::iter().nth(i)),
            Err(_) => lower.parse::<GameMode>().ok(),
        };
        return mode
            .map(Command::Mode)
            .ok_or_else(|| InputError::Unrecognized(line.to_string()));
    }

    if let Some(coords) = parse_coordinates(&lower) {
        let (row, col) = coords;
        return Position::new(row, col)
            .map(Command::Move)
            .map_err(InputError::Move);
    }

    let command = Position::from_label_or_number(&lower)
        .map(Command::Move)
        .ok_or_else(|| InputError::Unrecognized(line.to_string()))?;
    debug!(?command, "Parsed input");
    Ok(command)
}

/// Reads `row col`, `row,col` or `(row, col)`.
fn parse_coordinates(s: &str) -> Option<(usize, usize)> {
    let mut parts = s
        .trim_matches(|c| c == '(' || c == ')')
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|p| !p.is_empty());

    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((row, col))
}

/// Menu text listing the modes.
pub fn render_menu() -> String {
    GameMode::iter()
        .enumerate()
        .map(|(i, mode)| format!("\n  {}) {} ({})", i + 1, mode.name(), mode))
        .fold(String::from("Select a mode:"), |menu, line| menu + &line)
}

/// Board with cell numbers in the empty cells.
pub fn render_board(board: &Board) -> String {
    board.display_numbered()
}

/// Status line under the board.
pub fn render_status(session: &GameSession) -> String {
    match session.outcome() {
        Outcome::InProgress => format!("{} to move", session.to_move()),
        Outcome::Win(player) if session.mode().ai_player() == Some(player) => {
            format!("Game over: {} (the AI) wins", player)
        }
        outcome => format!("Game over: {}", outcome),
    }
}

/// One line per candidate move with its minimax score.
pub fn render_scores(moves: &[ScoredMove]) -> String {
    moves
        .iter()
        .map(|m| format!("  {:>2}  {}", m.score, m.position))
        .collect::<Vec<_>>()
        .join("\n")
}
