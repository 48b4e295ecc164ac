//! Core domain types for tic-tac-toe.

use super::action::MoveError;
use super::position::Position;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{instrument, warn};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first, the human when playing the AI).
    X,
    /// Player O (goes second, the side the AI plays).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the symbol used when rendering this player's mark.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell holding a player's mark.
    Occupied(Player),
}

impl Cell {
    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(player) => player.symbol(),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are `Copy`: every change produces a new value, so a board handed
/// to the search can never alias the one a session is playing on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Returns a copy of this board with `mark` placed at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::CellOccupied`] if the cell is not empty. The
    /// original board is never modified.
    pub fn set(self, pos: Position, mark: Player) -> Result<Board, MoveError> {
        if !self.is_empty(pos) {
            return Err(MoveError::CellOccupied(pos));
        }
        let mut next = self;
        next.cells[pos.to_index()] = Cell::Occupied(mark);
        Ok(next)
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Checks if every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Counts the marks a player has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Occupied(player))
            .count()
    }

    /// Counts occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }

    /// Empty positions in row-major order.
    pub fn empty_positions(self) -> impl Iterator<Item = Position> {
        Position::ALL.into_iter().filter(move |pos| self.is_empty(*pos))
    }

    /// The player whose turn it is, judged from the mark counts alone.
    ///
    /// X moves first, so equal counts mean X is to move.
    pub fn next_player(&self) -> Player {
        if self.count(Player::X) > self.count(Player::O) {
            Player::O
        } else {
            Player::X
        }
    }

    /// Formats the board with empty cells shown as their index (0-8).
    ///
    /// This is the layout a player types indices against.
    pub fn display_numbered(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.cells[pos] {
                    Cell::Empty => char::from(b'0' + pos as u8),
                    Cell::Occupied(player) => player.symbol(),
                };
                result.push(symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "{}{}{}",
                cells[0].symbol(),
                cells[1].symbol(),
                cells[2].symbol()
            )?;
        }
        Ok(())
    }
}

/// Error produced when parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// The text did not describe exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongLength(usize),

    /// A character is neither a mark nor an empty-cell marker.
    #[display("Unexpected character {:?} in board", _0)]
    InvalidChar(char),

    /// The mark counts cannot occur in a game where X moves first.
    #[display("Unreachable board: {} X marks and {} O marks", x, o)]
    Unbalanced {
        /// Number of X marks.
        x: usize,
        /// Number of O marks.
        o: usize,
    },
}

impl std::error::Error for BoardParseError {}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cells in row-major order.
    ///
    /// `X`/`O` (any case) are marks; `.`, `_` and `-` are empty cells.
    /// Whitespace, `|` and `/` are ignored so `"XO./.X./..O"` works.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(9);
        for ch in s.chars() {
            let cell = match ch {
                'x' | 'X' => Cell::Occupied(Player::X),
                'o' | 'O' => Cell::Occupied(Player::O),
                '.' | '_' | '-' => Cell::Empty,
                c if c.is_whitespace() || c == '|' || c == '/' => continue,
                other => return Err(BoardParseError::InvalidChar(other)),
            };
            cells.push(cell);
        }

        let cells: [Cell; 9] = cells
            .try_into()
            .map_err(|v: Vec<Cell>| BoardParseError::WrongLength(v.len()))?;
        let board = Board { cells };

        let x = board.count(Player::X);
        let o = board.count(Player::O);
        if x != o && x != o + 1 {
            warn!(x, o, "Rejecting board with unreachable mark counts");
            return Err(BoardParseError::Unbalanced { x, o });
        }

        Ok(board)
    }
}

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Game is ongoing.
    InProgress,
    /// A player completed a line.
    Win(Player),
    /// The board is full and nobody completed a line.
    Tie,
}

impl Outcome {
    /// Returns true unless the game is still in progress.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(*player),
            Outcome::InProgress | Outcome::Tie => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "in progress"),
            Outcome::Win(player) => write!(f, "Player {} wins", player),
            Outcome::Tie => write!(f, "tie"),
        }
    }
}

/// Who is on the other side of the board.
///
/// Fixed for the lifetime of one game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum GameMode {
    /// Two humans share the board.
    #[serde(rename = "human-vs-human")]
    #[strum(to_string = "human-vs-human", serialize = "human", serialize = "pvp")]
    HumanVsHuman,
    /// A human plays X against the minimax AI playing O.
    #[default]
    #[serde(rename = "human-vs-ai")]
    #[strum(to_string = "human-vs-ai", serialize = "ai", serialize = "pve")]
    HumanVsAI,
}

impl GameMode {
    /// The player the AI controls in this mode, if any.
    pub fn ai_player(self) -> Option<Player> {
        match self {
            GameMode::HumanVsHuman => None,
            GameMode::HumanVsAI => Some(Player::O),
        }
    }

    /// Returns display name.
    pub fn name(self) -> &'static str {
        match self {
            GameMode::HumanVsHuman => "Human vs Human",
            GameMode::HumanVsAI => "Human vs AI",
        }
    }
}
