//! Tests for the typestate round state machine.

use tictactoe_field::{
    GameInProgress, GameResult, GameSetup, Mark, Move, MoveError, Outcome,
};

#[test]
fn test_typestate_lifecycle() {
    // Setup phase
    let round = GameSetup::new();
    assert_eq!(round.board().size(), 3);

    // Start the round; the classic game opens with Circle.
    let round = round.start(Mark::Circle);
    assert_eq!(round.to_move(), Mark::Circle);

    // Make a move
    let action = Move::new(Mark::Circle, 1, 1);
    let result = round.make_move(action).expect("valid move");

    let round = match result {
        GameResult::InProgress(r) => r,
        GameResult::Finished(_) => panic!("round shouldn't finish after one move"),
    };

    assert_eq!(round.to_move(), Mark::Cross);
    assert_eq!(round.history(), &[action]);
}

#[test]
fn test_occupied_cell_rejected() {
    let round = GameSetup::new().start(Mark::Circle);

    let round = match round.make_move(Move::new(Mark::Circle, 1, 1)).unwrap() {
        GameResult::InProgress(r) => r,
        GameResult::Finished(_) => panic!("unexpected finish"),
    };

    let result = round.make_move(Move::new(Mark::Cross, 1, 1));
    assert_eq!(result.unwrap_err(), MoveError::CellOccupied { x: 1, y: 1 });
}

#[test]
fn test_wrong_turn_rejected() {
    let round = GameSetup::new().start(Mark::Circle);

    let result = round.make_move(Move::new(Mark::Cross, 1, 1));
    assert_eq!(result.unwrap_err(), MoveError::WrongTurn(Mark::Cross));
}

#[test]
fn test_out_of_bounds_rejected() {
    let round = GameSetup::new().start(Mark::Circle);

    let result = round.make_move(Move::new(Mark::Circle, 5, 5));
    assert_eq!(result.unwrap_err(), MoveError::OutOfBounds { x: 5, y: 5 });
}

#[test]
fn test_replay_from_history() {
    let moves = vec![
        Move::new(Mark::Circle, 1, 1),
        Move::new(Mark::Cross, 0, 0),
        Move::new(Mark::Circle, 2, 2),
        Move::new(Mark::Cross, 2, 0),
        Move::new(Mark::Circle, 0, 2),
    ];

    let result = GameInProgress::replay(3, &moves).expect("valid replay");

    match result {
        GameResult::InProgress(round) => {
            assert_eq!(round.history().len(), 5);
            assert_eq!(round.to_move(), Mark::Cross);
        }
        GameResult::Finished(_) => panic!("round shouldn't finish"),
    }
}

#[test]
fn test_win_detection() {
    let moves = vec![
        Move::new(Mark::Cross, 0, 0),
        Move::new(Mark::Circle, 1, 1),
        Move::new(Mark::Cross, 1, 0),
        Move::new(Mark::Circle, 1, 2),
        Move::new(Mark::Cross, 2, 0), // Cross completes row 0
    ];

    let result = GameInProgress::replay(3, &moves).expect("valid replay");

    match result {
        GameResult::Finished(round) => {
            assert_eq!(round.outcome(), &Outcome::Winner(Mark::Cross));
            assert_eq!(round.outcome().winner(), Some(Mark::Cross));
        }
        GameResult::InProgress(_) => panic!("round should be finished"),
    }
}

#[test]
fn test_draw_detection() {
    // Final layout: X O X / O X X / O X O
    let moves = vec![
        Move::new(Mark::Cross, 0, 0),
        Move::new(Mark::Circle, 1, 0),
        Move::new(Mark::Cross, 2, 0),
        Move::new(Mark::Circle, 0, 1),
        Move::new(Mark::Cross, 1, 1),
        Move::new(Mark::Circle, 0, 2),
        Move::new(Mark::Cross, 2, 1),
        Move::new(Mark::Circle, 2, 2),
        Move::new(Mark::Cross, 1, 2), // Board full, no line
    ];

    let result = GameInProgress::replay(3, &moves).expect("valid replay");

    match result {
        GameResult::Finished(round) => {
            assert!(round.outcome().is_draw());
            assert!(round.board().is_full());
        }
        GameResult::InProgress(_) => panic!("round should be finished"),
    }
}

#[test]
fn test_replay_stops_at_finish() {
    // History continues past the winning move; replay must finish early
    // rather than apply moves to a finished round.
    let moves = vec![
        Move::new(Mark::Circle, 0, 0),
        Move::new(Mark::Cross, 0, 1),
        Move::new(Mark::Circle, 1, 1),
        Move::new(Mark::Cross, 0, 2),
        Move::new(Mark::Circle, 2, 2), // Circle completes the diagonal
        Move::new(Mark::Cross, 2, 0),
    ];

    match GameInProgress::replay(3, &moves).unwrap() {
        GameResult::Finished(round) => {
            assert_eq!(round.outcome(), &Outcome::Winner(Mark::Circle));
            assert_eq!(round.history().len(), 5);
        }
        GameResult::InProgress(_) => panic!("round should be finished"),
    }
}

#[test]
fn test_restart_preserves_board_size() {
    let moves = vec![
        Move::new(Mark::Circle, 0, 0),
        Move::new(Mark::Cross, 1, 1),
        Move::new(Mark::Circle, 1, 0),
        Move::new(Mark::Cross, 2, 2),
        Move::new(Mark::Circle, 2, 0), // Circle completes row 0
    ];

    let GameResult::Finished(finished) = GameInProgress::replay(3, &moves).unwrap() else {
        panic!("round should be finished");
    };

    let fresh = finished.restart();
    assert_eq!(fresh.board().size(), 3);
    assert!(fresh.board().cells().iter().all(|cell| cell.is_empty()));

    let fresh = fresh.start(Mark::Cross);
    assert!(fresh.history().is_empty());
    assert_eq!(fresh.to_move(), Mark::Cross);
}

#[test]
fn test_larger_board_round() {
    let round = GameSetup::with_size(4).start(Mark::Circle);
    assert_eq!(round.valid_moves().len(), 16);

    // Circle marches down column 3; Cross plays elsewhere.
    let moves = vec![
        Move::new(Mark::Circle, 3, 0),
        Move::new(Mark::Cross, 0, 0),
        Move::new(Mark::Circle, 3, 1),
        Move::new(Mark::Cross, 0, 1),
        Move::new(Mark::Circle, 3, 2),
        Move::new(Mark::Cross, 0, 2),
        Move::new(Mark::Circle, 3, 3),
    ];

    match GameInProgress::replay(4, &moves).unwrap() {
        GameResult::Finished(round) => {
            assert_eq!(round.outcome(), &Outcome::Winner(Mark::Circle));
        }
        GameResult::InProgress(_) => panic!("round should be finished"),
    }
}
