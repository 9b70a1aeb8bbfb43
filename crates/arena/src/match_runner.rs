//! Game loop shared by interactive play and bot-vs-bot matches

use std::thread;
use std::time::{Duration, Instant};

use draughts_core::{turn_to_string, Board, Color, Engine, GameState, Move, MoveSet, Square};
use tracing::{debug, info, warn};

use crate::frontend::{Command, Frontend, Headless};
use crate::results::{GameOutcome, GameRecord, GameResult, MatchReport};

/// Who sits on one side of the board
pub enum Seat<'a> {
    Human,
    Bot(&'a mut dyn Engine),
}

impl Seat<'_> {
    pub fn is_bot(&self) -> bool {
        matches!(self, Seat::Bot(_))
    }
}

/// Rules of a single game
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Turns (both colors counted) before the game is a draw
    pub max_turns: u32,
    /// Minimum time a bot takes per step, so humans can follow along
    pub bot_delay: Duration,
    pub start: Board,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_turns: 120,
            bot_delay: Duration::ZERO,
            start: Board::startpos(),
        }
    }
}

/// Everything a finished (or abandoned) game leaves behind
#[derive(Debug, Clone)]
pub struct PlayedGame {
    pub outcome: GameOutcome,
    /// Turns actually played, after undos
    pub turns: u32,
    pub moves: Vec<Vec<Move>>,
    pub board: Board,
}

enum HumanTurn {
    Played(Vec<Move>),
    /// The partial chain was taken back; the same side moves again
    Restart,
    Undo,
    Quit,
    Replay,
}

/// Play one game. White moves on even turns, black on odd ones.
pub fn play_game<'a>(
    white: Seat<'a>,
    black: Seat<'a>,
    frontend: &mut dyn Frontend,
    config: &GameConfig,
) -> PlayedGame {
    let mut seats = [white, black];
    for seat in seats.iter_mut() {
        if let Seat::Bot(engine) = seat {
            engine.new_game();
        }
    }

    let start = Instant::now();
    let mut game = GameState::from_board(config.start);
    let mut log: Vec<Vec<Move>> = Vec::new();
    let mut turn: u32 = 0;

    let outcome = loop {
        if turn >= config.max_turns {
            break GameOutcome::Draw;
        }
        let color = if turn % 2 == 0 { Color::White } else { Color::Black };
        let legal = game.legal_moves(color);
        if legal.is_empty() {
            break GameOutcome::stuck(color);
        }
        let opponent_is_bot = seats[color.other().idx()].is_bot();

        let played = match &mut seats[color.idx()] {
            Seat::Bot(engine) => bot_turn(&mut **engine, &mut game, color, &legal, config.bot_delay),
            Seat::Human => match human_turn(frontend, &mut game, color, &legal) {
                HumanTurn::Played(moves) => moves,
                HumanTurn::Restart => continue,
                HumanTurn::Quit => break GameOutcome::Quit,
                HumanTurn::Replay => break GameOutcome::Replay,
                HumanTurn::Undo => {
                    // against a bot, take back its reply as well
                    let count = if opponent_is_bot {
                        if turn >= 2 { 2 } else { 0 }
                    } else {
                        turn.min(1)
                    };
                    for _ in 0..count {
                        game.undo_turn();
                        log.pop();
                    }
                    turn -= count;
                    debug!(turns_undone = count, turn, "undo");
                    continue;
                }
            },
        };

        frontend.show_turn(game.board(), color, &played);
        log.push(played);
        turn += 1;
    };

    info!(
        outcome = outcome.describe(),
        turns = turn,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "game over"
    );
    frontend.show_result(game.board(), outcome);

    PlayedGame {
        outcome,
        turns: turn,
        moves: log,
        board: *game.board(),
    }
}

/// Let a bot pick its turn, then play it out step by step.
///
/// The delay timer runs alongside the search; the first step is applied only
/// once both are done. Later chain steps wait the full delay each.
fn bot_turn(
    engine: &mut dyn Engine,
    game: &mut GameState,
    color: Color,
    legal: &MoveSet,
    delay: Duration,
) -> Vec<Move> {
    let pacer = (!delay.is_zero()).then(|| thread::spawn(move || thread::sleep(delay)));
    let result = engine.choose_turn(game.board(), color);
    if let Some(pacer) = pacer {
        if pacer.join().is_err() {
            warn!("bot delay thread panicked");
        }
    }

    assert!(
        result.moves.first().is_some_and(|mv| legal.contains(mv)),
        "{} returned an illegal turn: {}",
        engine.name(),
        turn_to_string(&result.moves)
    );

    for (i, &mv) in result.moves.iter().enumerate() {
        if i > 0 && !delay.is_zero() {
            thread::sleep(delay);
        }
        game.apply_move(mv);
    }
    game.end_turn();
    result.moves
}

/// Two-click selection: a movable piece, then one of its destinations.
/// Capture chains continue from the landing square until no capture is left.
fn human_turn(
    frontend: &mut dyn Frontend,
    game: &mut GameState,
    color: Color,
    legal: &MoveSet,
) -> HumanTurn {
    let mut sources: Vec<Square> = Vec::new();
    for mv in &legal.moves {
        if !sources.contains(&mv.from) {
            sources.push(mv.from);
        }
    }

    let mut selected: Option<Square> = None;
    let first = loop {
        let hints: Vec<Square> = match selected {
            None => sources.clone(),
            Some(from) => legal.starting_at(from).map(|mv| mv.to).collect(),
        };
        match frontend.command(game.board(), color, &hints) {
            Command::Quit => return HumanTurn::Quit,
            Command::Replay => return HumanTurn::Replay,
            Command::Undo => return HumanTurn::Undo,
            Command::Cell(cell) => {
                if let Some(from) = selected {
                    if let Some(&mv) = legal.starting_at(from).find(|mv| mv.to == cell) {
                        break mv;
                    }
                }
                selected = sources.contains(&cell).then_some(cell);
            }
        }
    };

    game.apply_move(first);
    let mut moves = vec![first];
    while let Some(next) = game.chain_continuations(moves[moves.len() - 1]) {
        let hints: Vec<Square> = next.moves.iter().map(|mv| mv.to).collect();
        match frontend.command(game.board(), color, &hints) {
            Command::Quit => return HumanTurn::Quit,
            Command::Replay => return HumanTurn::Replay,
            Command::Undo => {
                game.undo_turn();
                return HumanTurn::Restart;
            }
            Command::Cell(cell) => {
                if let Some(&mv) = next.moves.iter().find(|mv| mv.to == cell) {
                    game.apply_move(mv);
                    moves.push(mv);
                }
            }
        }
    }
    game.end_turn();
    HumanTurn::Played(moves)
}

// =============================================================================
// Bot-vs-bot matches
// =============================================================================

/// Configuration for a match
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Maximum turns per game before declaring a draw
    pub max_turns: u32,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
    /// Print progress during match
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            max_turns: 120,
            alternate_colors: true,
            verbose: true,
        }
    }
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Run a match between two engines
    ///
    /// The report's result is from engine1's perspective
    pub fn run_match(&self, engine1: &mut dyn Engine, engine2: &mut dyn Engine) -> MatchReport {
        let mut report = MatchReport::new(engine1.name(), engine2.name());
        let game_config = GameConfig {
            max_turns: self.config.max_turns,
            ..Default::default()
        };

        for game_num in 0..self.config.num_games {
            let engine1_white = !self.config.alternate_colors || game_num % 2 == 0;
            let (white_name, black_name) = if engine1_white {
                (engine1.name().to_string(), engine2.name().to_string())
            } else {
                (engine2.name().to_string(), engine1.name().to_string())
            };

            let played = if engine1_white {
                play_game(Seat::Bot(&mut *engine1), Seat::Bot(&mut *engine2), &mut Headless, &game_config)
            } else {
                play_game(Seat::Bot(&mut *engine2), Seat::Bot(&mut *engine1), &mut Headless, &game_config)
            };

            let engine1_color = if engine1_white { Color::White } else { Color::Black };
            let result = GameResult::for_color(played.outcome, engine1_color);
            report.result.record(result);
            report.games.push(GameRecord {
                white: white_name,
                black: black_name,
                outcome: played.outcome,
                turns: played.turns,
                moves: played.moves.iter().map(|t| turn_to_string(t)).collect(),
            });

            if self.config.verbose {
                let color = if engine1_white { "W" } else { "B" };
                let outcome = match result {
                    GameResult::Win => "1-0",
                    GameResult::Loss => "0-1",
                    GameResult::Draw => "1/2",
                };
                println!(
                    "Game {}/{}: {} ({}) - Score: {}-{}-{}",
                    game_num + 1,
                    self.config.num_games,
                    outcome,
                    color,
                    report.result.wins,
                    report.result.losses,
                    report.result.draws
                );
            }
        }

        report
    }
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
