use super::*;
use crate::{
    config::{PruningLevel, ScoringMode, SeedPolicy},
    types::Cell,
};

fn sq(row: i8, col: i8) -> Square {
    Square::new(row, col)
}

fn fixed(depth: u32) -> SearchConfig {
    SearchConfig::depth(depth).with_seed(SeedPolicy::Fixed)
}

#[test]
fn test_opening_depth_one_plays_single_step() {
    let board = Board::startpos();
    let config = fixed(1)
        .with_pruning(PruningLevel::None)
        .with_scoring(ScoringMode::PlainCount);
    let moves = best_turn_sequence(&board, Color::White, config);

    assert_eq!(moves.len(), 1);
    let mv = moves[0];
    assert!(!mv.is_capture());
    assert_eq!(mv.to.row, mv.from.row - 1);
    assert_eq!((mv.to.col - mv.from.col).abs(), 1);
    assert!(legal_moves(&board, Color::White).contains(&mv));
}

#[test]
fn test_two_hop_capture_chain() {
    let mut board = Board::empty();
    board.set(sq(5, 2), Cell::Man(Color::White));
    board.set(sq(4, 3), Cell::Man(Color::Black));
    board.set(sq(2, 5), Cell::Man(Color::Black));
    board.set(sq(0, 7), Cell::Man(Color::Black));

    let plan = Searcher::new(fixed(2)).best_turn(&board, Color::White);
    assert_eq!(
        plan.moves,
        vec![
            Move::capture(sq(5, 2), sq(3, 4), sq(4, 3)),
            Move::capture(sq(3, 4), sq(1, 6), sq(2, 5)),
        ]
    );
    assert_eq!(plan.moves[1].from, plan.moves[0].to);
}

#[test]
fn test_avoids_stepping_into_capture() {
    let mut board = Board::empty();
    board.set(sq(4, 1), Cell::Man(Color::White));
    board.set(sq(2, 3), Cell::Man(Color::Black));

    for pruning in [PruningLevel::None, PruningLevel::Basic] {
        let plan = Searcher::new(fixed(1).with_pruning(pruning)).best_turn(&board, Color::White);
        assert_eq!(plan.moves, vec![Move::new(sq(4, 1), sq(3, 0))]);
        assert_eq!(plan.score, 1.0);
    }
}

#[test]
fn test_taking_last_piece_scores_inf() {
    let mut board = Board::empty();
    board.set(sq(5, 2), Cell::Man(Color::Black));
    board.set(sq(6, 3), Cell::Man(Color::White));

    let plan = Searcher::new(fixed(2)).best_turn(&board, Color::Black);
    assert_eq!(plan.moves, vec![Move::capture(sq(5, 2), sq(7, 4), sq(6, 3))]);
    assert_eq!(plan.score, INF);
}

#[test]
fn test_no_moves_yields_empty_plan() {
    let mut board = Board::empty();
    board.set(sq(0, 1), Cell::Man(Color::White));
    board.set(sq(7, 0), Cell::Man(Color::Black));
    let plan = Searcher::new(fixed(3)).best_turn(&board, Color::Black);
    assert!(plan.moves.is_empty());
}

#[test]
fn test_pruning_visits_fewer_nodes() {
    let board = Board::startpos();
    let full = Searcher::new(fixed(3).with_pruning(PruningLevel::None)).best_turn(&board, Color::White);
    let pruned = Searcher::new(fixed(3).with_pruning(PruningLevel::Basic)).best_turn(&board, Color::White);
    assert!(pruned.nodes < full.nodes);
}

#[test]
fn test_fixed_seed_is_reproducible() {
    let board = Board::startpos();
    let config = fixed(3).with_scoring(ScoringMode::NumberAndPotential);
    let a = Searcher::new(config).best_turn(&board, Color::White);
    let b = Searcher::new(config).best_turn(&board, Color::White);
    assert_eq!(a, b);
}

#[test]
fn test_search_leaves_board_untouched() {
    let board = Board::startpos();
    let mut searcher = Searcher::new(fixed(4));
    searcher.best_turn(&board, Color::White);
    assert_eq!(board, Board::startpos());
}
