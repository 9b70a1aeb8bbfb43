use super::*;
use crate::frontend::Scripted;
use draughts_core::{Cell, SearchConfig, SeedPolicy};
use minimax_engine::MinimaxEngine;
use random_engine::RandomEngine;

fn sq(row: i8, col: i8) -> Square {
    Square::new(row, col)
}

fn click(row: i8, col: i8) -> Command {
    Command::Cell(sq(row, col))
}

fn fixed_bot(depth: u32) -> MinimaxEngine {
    MinimaxEngine::new(SearchConfig::depth(depth).with_seed(SeedPolicy::Fixed))
}

/// White man two captures away from finishing its turn.
fn chain_board() -> Board {
    let mut board = Board::empty();
    board.set(sq(5, 2), Cell::Man(Color::White));
    board.set(sq(4, 3), Cell::Man(Color::Black));
    board.set(sq(2, 5), Cell::Man(Color::Black));
    board.set(sq(0, 7), Cell::Man(Color::Black));
    board
}

#[test]
fn test_self_play() {
    let mut engine1 = fixed_bot(2);
    let mut engine2 = RandomEngine::new();

    let config = MatchConfig {
        num_games: 2,
        max_turns: 60,
        verbose: false,
        ..Default::default()
    };

    let runner = MatchRunner::new(config);
    let report = runner.run_match(&mut engine1, &mut engine2);

    assert_eq!(report.result.total_games(), 2);
    assert_eq!(report.games.len(), 2);
    assert_eq!(report.games[0].white, "Minimax d2");
    assert_eq!(report.games[1].black, "Minimax d2");
    for game in &report.games {
        assert!(game.outcome.is_finished());
        assert_eq!(game.moves.len() as u32, game.turns);
        assert!(game.turns <= 60);
    }
}

#[test]
fn test_stuck_side_loses_immediately() {
    let mut board = Board::empty();
    board.set(sq(7, 0), Cell::Man(Color::White));
    board.set(sq(6, 1), Cell::Man(Color::Black));
    board.set(sq(5, 2), Cell::Man(Color::Black));
    let config = GameConfig {
        start: board,
        ..Default::default()
    };

    let mut white = fixed_bot(1);
    let mut black = fixed_bot(1);
    let played = play_game(Seat::Bot(&mut white), Seat::Bot(&mut black), &mut Headless, &config);

    assert_eq!(played.outcome, GameOutcome::BlackWins);
    assert_eq!(played.turns, 0);
    assert_eq!(played.board, board);
}

#[test]
fn test_turn_limit_is_a_draw() {
    let mut white = RandomEngine::new();
    let mut black = RandomEngine::new();
    let config = GameConfig {
        max_turns: 4,
        ..Default::default()
    };
    let played = play_game(Seat::Bot(&mut white), Seat::Bot(&mut black), &mut Headless, &config);

    assert_eq!(played.outcome, GameOutcome::Draw);
    assert_eq!(played.turns, 4);
}

#[test]
fn test_human_selection_ignores_bad_clicks() {
    let mut frontend = Scripted::new([
        click(0, 0), // light square
        click(5, 2), // select c3
        click(5, 0), // change mind: a3
        click(3, 0), // not a destination of a3, drops the selection
        click(4, 1), // nothing selected, ignored
        click(5, 0),
        click(4, 1),
    ]);
    let mut bot = fixed_bot(1);
    let played = play_game(Seat::Human, Seat::Bot(&mut bot), &mut frontend, &GameConfig::default());

    // the script runs dry on white's second turn
    assert_eq!(played.outcome, GameOutcome::Quit);
    assert_eq!(played.turns, 2);
    assert_eq!(played.moves[0], vec![Move::new(sq(5, 0), sq(4, 1))]);
    assert_eq!(frontend.turns_shown, 2);
}

#[test]
fn test_undo_against_bot_takes_back_both_turns() {
    let mut frontend = Scripted::new([click(5, 2), click(4, 3), Command::Undo, Command::Quit]);
    let mut bot = fixed_bot(1);
    let played = play_game(Seat::Human, Seat::Bot(&mut bot), &mut frontend, &GameConfig::default());

    assert_eq!(played.outcome, GameOutcome::Quit);
    assert_eq!(played.turns, 0);
    assert!(played.moves.is_empty());
    assert_eq!(played.board, Board::startpos());
}

#[test]
fn test_undo_between_humans_takes_back_one_turn() {
    let mut frontend = Scripted::new([
        click(5, 2),
        click(4, 3),
        click(2, 1),
        click(3, 0),
        Command::Undo,
        Command::Replay,
    ]);
    let played = play_game(Seat::Human, Seat::Human, &mut frontend, &GameConfig::default());

    assert_eq!(played.outcome, GameOutcome::Replay);
    assert_eq!(played.turns, 1);
    assert_eq!(played.board.at(sq(4, 3)), Cell::Man(Color::White));
    assert_eq!(played.board.at(sq(2, 1)), Cell::Man(Color::Black));
}

#[test]
fn test_human_plays_full_capture_chain() {
    let mut frontend = Scripted::new([
        click(5, 2),
        click(3, 4),
        click(7, 7), // not a landing square, ignored
        click(1, 6),
    ]);
    let config = GameConfig {
        max_turns: 1,
        start: chain_board(),
        ..Default::default()
    };
    let played = play_game(Seat::Human, Seat::Human, &mut frontend, &config);

    assert_eq!(played.outcome, GameOutcome::Draw);
    assert_eq!(played.moves[0].len(), 2);
    assert_eq!(played.board.material(Color::Black).total(), 1);
    assert_eq!(played.board.at(sq(1, 6)), Cell::Man(Color::White));
}

#[test]
fn test_undo_mid_chain_restarts_the_turn() {
    let mut frontend = Scripted::new([click(5, 2), click(3, 4), Command::Undo, Command::Quit]);
    let config = GameConfig {
        start: chain_board(),
        ..Default::default()
    };
    let played = play_game(Seat::Human, Seat::Human, &mut frontend, &config);

    assert_eq!(played.outcome, GameOutcome::Quit);
    assert_eq!(played.turns, 0);
    assert_eq!(played.board, chain_board());
}

#[test]
fn test_bot_plays_whole_chain() {
    let mut white = fixed_bot(2);
    let mut black = fixed_bot(2);
    let config = GameConfig {
        max_turns: 1,
        start: chain_board(),
        ..Default::default()
    };
    let played = play_game(Seat::Bot(&mut white), Seat::Bot(&mut black), &mut Headless, &config);

    assert_eq!(played.outcome, GameOutcome::Draw);
    assert_eq!(played.moves[0].len(), 2);
    assert!(played.moves[0].iter().all(|mv| mv.is_capture()));
}
