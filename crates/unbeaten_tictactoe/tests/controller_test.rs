//! End-to-end games through the turn controller.

use unbeaten_tictactoe::{
    Cell, ControllerError, GameMode, GameSession, MoveError, Outcome, Phase, Player, Position,
    TurnController,
};

#[test]
fn test_corner_opening_answered_with_center() {
    let mut controller = TurnController::new();
    controller.select_mode(GameMode::HumanVsAI).unwrap();

    let pos = Position::new(0, 0).unwrap();
    assert_eq!(controller.apply_move(pos), Ok(Outcome::InProgress));

    let board = controller.current_board().unwrap();
    assert_eq!(board.get(Position::new(1, 1).unwrap()), Cell::Occupied(Player::O));
}

#[test]
fn test_occupied_cell_rejected_without_change() {
    let mut controller = TurnController::new();
    controller.select_mode(GameMode::HumanVsAI).unwrap();
    controller.apply_move(Position::TopLeft).unwrap();
    let before = controller.clone();

    for taken in [Position::TopLeft, Position::Center] {
        let result = controller.apply_move(taken);
        assert_eq!(
            result,
            Err(ControllerError::Move(MoveError::CellOccupied(taken)))
        );
        assert_eq!(controller, before);
    }
}

#[test]
fn test_out_of_range_coordinates() {
    assert_eq!(
        Position::new(3, 0),
        Err(MoveError::OutOfRange { row: 3, col: 0 })
    );
    assert_eq!(
        Position::new(0, 7),
        Err(MoveError::OutOfRange { row: 0, col: 7 })
    );
}

#[test]
fn test_reset_and_replay_reproduces_game() {
    let inputs = [Position::Center, Position::TopRight, Position::BottomCenter];

    let mut controller = TurnController::new();
    controller.select_mode(GameMode::HumanVsAI).unwrap();
    let mut outcome = Outcome::InProgress;
    for &pos in &inputs {
        if outcome.is_terminal() {
            break;
        }
        if let Ok(o) = controller.apply_move(pos) {
            outcome = o;
        }
    }
    let first = controller.session().cloned().unwrap();

    controller.reset();
    assert_eq!(controller.phase(), Phase::MenuSelection);
    controller.select_mode(GameMode::HumanVsAI).unwrap();
    for &pos in &inputs {
        if controller.phase() != Phase::InProgress {
            break;
        }
        let _ = controller.apply_move(pos);
    }
    let second = controller.session().cloned().unwrap();

    assert_eq!(first.board(), second.board());
    assert_eq!(first.outcome(), second.outcome());
    assert_eq!(first.history(), second.history());
}

#[test]
fn test_session_replay_matches_live_play() {
    let inputs = [Position::TopLeft, Position::BottomRight];

    let mut live = GameSession::new(GameMode::HumanVsAI);
    for &pos in &inputs {
        live.apply_move(pos).unwrap();
    }

    let replayed = GameSession::replay(GameMode::HumanVsAI, &inputs).unwrap();
    assert_eq!(replayed, live);
    assert_eq!(live.reset(), GameSession::new(GameMode::HumanVsAI));
}

#[test]
fn test_human_vs_human_full_game_to_tie() {
    // X O X
    // X O O
    // O X X
    let moves = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::Center,
        Position::MiddleLeft,
        Position::MiddleRight,
        Position::BottomCenter,
        Position::BottomLeft,
        Position::BottomRight,
    ];

    let mut controller = TurnController::new();
    controller.select_mode(GameMode::HumanVsHuman).unwrap();
    let mut last = Outcome::InProgress;
    for pos in moves {
        last = controller.apply_move(pos).unwrap();
    }

    assert_eq!(last, Outcome::Tie);
    assert_eq!(controller.phase(), Phase::GameOver);
    assert_eq!(controller.session().map(|s| s.history().len()), Some(9));

    controller.reset();
    assert_eq!(controller.phase(), Phase::MenuSelection);
}

#[test]
fn test_select_mode_rejected_after_game_over() {
    let mut controller = TurnController::new();
    controller.select_mode(GameMode::HumanVsHuman).unwrap();
    for pos in [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::TopCenter,
        Position::Center,
        Position::TopRight,
    ] {
        controller.apply_move(pos).unwrap();
    }
    assert_eq!(controller.phase(), Phase::GameOver);

    let result = controller.select_mode(GameMode::HumanVsAI).map(|_| ());
    assert_eq!(result, Err(ControllerError::NotInMenu(Phase::GameOver)));
}
