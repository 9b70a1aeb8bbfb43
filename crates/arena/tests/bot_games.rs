//! Whole games driven from a settings file

use draughts_arena::{play_game, GameConfig, Headless, PlayedGame, Seat, Settings};
use draughts_core::{Board, Color};
use minimax_engine::MinimaxEngine;

fn bot_game(settings: &Settings) -> PlayedGame {
    let mut white = MinimaxEngine::new(settings.search_config(Color::White));
    let mut black = MinimaxEngine::new(settings.search_config(Color::Black));
    let config = GameConfig {
        max_turns: settings.game.max_num_turns,
        bot_delay: settings.bot_delay(),
        start: Board::startpos(),
    };
    play_game(Seat::Bot(&mut white), Seat::Bot(&mut black), &mut Headless, &config)
}

fn fixed_settings() -> Settings {
    Settings::from_json(
        r#"{
            "Bot": {
                "IsWhiteBot": true, "IsBlackBot": true,
                "WhiteBotLevel": 2, "BlackBotLevel": 3,
                "Optimization": "O1", "NoRandom": true
            },
            "Game": { "MaxNumTurns": 40 }
        }"#,
    )
    .unwrap()
}

#[test]
fn test_fixed_seed_games_repeat() {
    let settings = fixed_settings();
    let first = bot_game(&settings);
    let second = bot_game(&settings);

    assert_eq!(first.moves, second.moves);
    assert_eq!(first.outcome, second.outcome);
    assert_eq!(first.board, second.board);
}

#[test]
fn test_small_delay_still_finishes() {
    let mut settings = fixed_settings();
    settings.bot.bot_delay_ms = 1;
    settings.game.max_num_turns = 4;

    let played = bot_game(&settings);
    assert_eq!(played.turns, 4);
    assert_eq!(played.moves.len(), 4);
}
