use super::*;
use draughts_core::{Cell, Move, Square};

#[test]
fn random_engine_returns_legal_turn() {
    let mut engine = RandomEngine::new();
    let board = Board::startpos();

    let result = engine.choose_turn(&board, Color::White);

    assert_eq!(result.moves.len(), 1);
    assert!(complete_turns(&board, Color::White).contains(&result.moves));
}

#[test]
fn random_engine_plays_full_chain() {
    let mut engine = RandomEngine::new();
    let mut board = Board::empty();
    board.set(Square::new(5, 2), Cell::Man(Color::White));
    board.set(Square::new(4, 3), Cell::Man(Color::Black));
    board.set(Square::new(2, 5), Cell::Man(Color::Black));

    let result = engine.choose_turn(&board, Color::White);

    assert_eq!(
        result.moves,
        vec![
            Move::capture(Square::new(5, 2), Square::new(3, 4), Square::new(4, 3)),
            Move::capture(Square::new(3, 4), Square::new(1, 6), Square::new(2, 5)),
        ]
    );
}

#[test]
fn random_engine_handles_blocked_side() {
    let mut engine = RandomEngine::new();
    let mut board = Board::empty();
    board.set(Square::new(7, 0), Cell::Man(Color::Black));
    board.set(Square::new(0, 1), Cell::King(Color::White));

    let result = engine.choose_turn(&board, Color::Black);

    assert!(result.moves.is_empty());
}
