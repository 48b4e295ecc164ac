//! Outcome evaluation over every reachable board.

use std::collections::HashSet;
use unbeaten_tictactoe::rules::{self, LINES};
use unbeaten_tictactoe::{Board, Cell, Outcome, Player, Position};

/// Collects every board reachable from the empty board by legal play.
fn reachable_boards() -> HashSet<Board> {
    let mut seen = HashSet::new();
    let mut stack = vec![Board::new()];

    while let Some(board) = stack.pop() {
        if !seen.insert(board) {
            continue;
        }
        if rules::evaluate(&board).is_terminal() {
            continue;
        }
        let mover = board.next_player();
        for pos in board.empty_positions() {
            stack.push(board.set(pos, mover).unwrap());
        }
    }

    seen
}

fn completed_lines(board: &Board, player: Player) -> usize {
    LINES
        .iter()
        .filter(|line| line.iter().all(|&p| board.get(p) == Cell::Occupied(player)))
        .count()
}

#[test]
fn test_reachable_board_count() {
    let boards = reachable_boards();
    assert_eq!(boards.len(), 5478);

    let terminal: Vec<_> = boards
        .iter()
        .map(rules::evaluate)
        .filter(|o| o.is_terminal())
        .collect();
    assert_eq!(terminal.len(), 958);
    assert_eq!(
        terminal.iter().filter(|&&o| o == Outcome::Win(Player::X)).count(),
        626
    );
    assert_eq!(
        terminal.iter().filter(|&&o| o == Outcome::Win(Player::O)).count(),
        316
    );
    assert_eq!(terminal.iter().filter(|&&o| o == Outcome::Tie).count(), 16);
}

#[test]
fn test_never_two_winners() {
    for board in reachable_boards() {
        let x_lines = completed_lines(&board, Player::X);
        let o_lines = completed_lines(&board, Player::O);
        assert!(
            x_lines == 0 || o_lines == 0,
            "both players have a line on\n{}",
            board
        );

        match rules::evaluate(&board) {
            Outcome::Win(Player::X) => assert!(x_lines > 0 && !rules::is_tie(&board)),
            Outcome::Win(Player::O) => assert!(o_lines > 0 && !rules::is_tie(&board)),
            Outcome::Tie => assert!(board.is_full() && x_lines == 0 && o_lines == 0),
            Outcome::InProgress => assert!(!board.is_full() && x_lines == 0 && o_lines == 0),
        }
    }
}

#[test]
fn test_win_on_final_cell_is_not_a_tie() {
    // X O X
    // O X O
    // O X X  <- X completes the main diagonal with the ninth mark
    let board: Board = "XOX OXO OXX".parse().unwrap();
    assert!(board.is_full());
    assert_eq!(rules::evaluate(&board), Outcome::Win(Player::X));
}

#[test]
fn test_two_in_a_row_then_win() {
    // X X .
    // O O .
    // . . .
    let board: Board = "XX. OO. ...".parse().unwrap();
    assert_eq!(rules::evaluate(&board), Outcome::InProgress);
    assert_eq!(board.next_player(), Player::X);

    let board = board.set(Position::TopRight, Player::X).unwrap();
    assert_eq!(rules::evaluate(&board), Outcome::Win(Player::X));
}

#[test]
fn test_full_board_without_line_is_tie() {
    let board: Board = "XOX XOO OXX".parse().unwrap();
    assert_eq!(rules::evaluate(&board), Outcome::Tie);
}
