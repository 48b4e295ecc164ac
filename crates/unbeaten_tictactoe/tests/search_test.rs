//! The AI never loses.

use unbeaten_tictactoe::search::{self, TIE};
use unbeaten_tictactoe::{Board, GameMode, GameSession, Outcome, Player, Position, rules};

/// Plays every possible human line against the AI and returns how many
/// finished games were seen.
fn explore(session: &GameSession) -> usize {
    if session.outcome().is_terminal() {
        assert_ne!(
            session.outcome(),
            Outcome::Win(Player::X),
            "AI lost after {:?}",
            session.history()
        );
        return 1;
    }

    session
        .board()
        .empty_positions()
        .map(|pos| {
            let mut next = session.clone();
            next.apply_move(pos).unwrap();
            explore(&next)
        })
        .sum()
}

#[test]
fn test_ai_never_loses_to_any_human_line() {
    let games = explore(&GameSession::new(GameMode::HumanVsAI));
    assert!(games > 0);
}

#[test]
fn test_self_play_is_a_tie() {
    let mut board = Board::new();
    let mut player = Player::X;

    while !rules::evaluate(&board).is_terminal() {
        let pos = search::best_move(board, player).unwrap();
        board = board.set(pos, player).unwrap();
        player = player.opponent();
    }

    assert_eq!(rules::evaluate(&board), Outcome::Tie);
}

#[test]
fn test_minimax_is_deterministic() {
    let boards: Vec<Board> = [".........", "X........", "X...O....", "XX.OO...."]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();

    for board in boards {
        let maximizing = board.next_player() == Player::O;
        let first = search::minimax(board, maximizing);
        assert_eq!(search::minimax(board, maximizing), first);

        let player = board.next_player();
        assert_eq!(
            search::best_move(board, player),
            search::best_move(board, player)
        );
    }
}

#[test]
fn test_empty_board_is_drawn_with_perfect_play() {
    assert_eq!(search::minimax(Board::new(), false), TIE);
    let scored = search::scored_moves(Board::new(), Player::X).unwrap();
    assert_eq!(scored.len(), 9);
    assert!(scored.iter().all(|m| m.score == TIE));
    assert_eq!(search::best_move(Board::new(), Player::X), Ok(Position::TopLeft));
}
