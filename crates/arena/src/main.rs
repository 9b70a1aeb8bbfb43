//! Draughts CLI
//!
//! Play against the bot, run bot-vs-bot matches, count positions.

use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use draughts_arena::{
    play_game, ConsoleFrontend, GameConfig, GameOutcome, MatchConfig, MatchRunner, Seat, Settings,
};
use draughts_core::{perft, Board, Color, Engine, SearchConfig};
use minimax_engine::MinimaxEngine;
use random_engine::RandomEngine;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "draughts", version, about = "Draughts with a minimax bot")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play a game in the terminal, sides set up from the settings file
    Play {
        #[arg(long, default_value = "settings.json")]
        settings: PathBuf,
        /// Override both bot levels
        #[arg(long)]
        depth: Option<u32>,
        /// Fixed move-order seed, so bots repeat their games
        #[arg(long)]
        no_random: bool,
    },
    /// Bot-vs-bot match, e.g. `match minimax:5 random`
    Match {
        engine1: String,
        engine2: String,
        #[arg(short, long, default_value_t = 10)]
        games: u32,
        #[arg(long, default_value_t = 120)]
        max_turns: u32,
        /// Keep engine1 on white for every game
        #[arg(long)]
        no_alternate: bool,
        /// Save the match report as JSON
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Count complete turns from the start position
    Perft {
        #[arg(short, long, default_value_t = 5)]
        depth: u8,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    match Cli::parse().command {
        Command::Play {
            settings,
            depth,
            no_random,
        } => run_play(&settings, depth, no_random),
        Command::Match {
            engine1,
            engine2,
            games,
            max_turns,
            no_alternate,
            out,
        } => run_match(&engine1, &engine2, games, max_turns, !no_alternate, out.as_deref()),
        Command::Perft { depth } => {
            run_perft(depth);
            Ok(())
        }
    }
}

fn load_settings(path: &Path) -> Result<Settings> {
    if !path.exists() {
        warn!(path = %path.display(), "settings file not found, using defaults");
        return Ok(Settings::default());
    }
    Settings::load(path).with_context(|| format!("loading {}", path.display()))
}

fn run_play(path: &Path, depth: Option<u32>, no_random: bool) -> Result<()> {
    let mut settings = load_settings(path)?;
    if let Some(depth) = depth {
        settings.bot.white_bot_level = depth;
        settings.bot.black_bot_level = depth;
    }
    settings.bot.no_random |= no_random;

    let config = GameConfig {
        max_turns: settings.game.max_num_turns,
        bot_delay: settings.bot_delay(),
        start: Board::startpos(),
    };
    let stdin = io::stdin();
    let mut frontend = ConsoleFrontend::new(stdin.lock(), io::stdout());

    loop {
        let mut white = settings
            .is_bot(Color::White)
            .then(|| MinimaxEngine::new(settings.search_config(Color::White)));
        let mut black = settings
            .is_bot(Color::Black)
            .then(|| MinimaxEngine::new(settings.search_config(Color::Black)));

        let played = play_game(seat(white.as_mut()), seat(black.as_mut()), &mut frontend, &config);
        info!(outcome = played.outcome.describe(), turns = played.turns, "game finished");
        if played.outcome != GameOutcome::Replay {
            return Ok(());
        }
    }
}

fn seat(bot: Option<&mut MinimaxEngine>) -> Seat<'_> {
    match bot {
        Some(engine) => Seat::Bot(engine),
        None => Seat::Human,
    }
}

/// `minimax`, `minimax:<depth>` or `random`
fn create_engine(spec: &str) -> Result<Box<dyn Engine>> {
    let parts: Vec<&str> = spec.split(':').collect();
    match parts[0].to_lowercase().as_str() {
        "minimax" | "mm" => {
            let depth = match parts.get(1) {
                Some(d) => d.parse().with_context(|| format!("bad depth in `{spec}`"))?,
                None => SearchConfig::default().max_depth,
            };
            Ok(Box::new(MinimaxEngine::new(SearchConfig::depth(depth))))
        }
        "random" => Ok(Box::new(RandomEngine::new())),
        _ => bail!("unknown engine `{spec}` (expected minimax[:depth] or random)"),
    }
}

fn run_match(
    engine1: &str,
    engine2: &str,
    games: u32,
    max_turns: u32,
    alternate_colors: bool,
    out: Option<&Path>,
) -> Result<()> {
    let mut e1 = create_engine(engine1)?;
    let mut e2 = create_engine(engine2)?;

    println!("Match: {} vs {}", e1.name(), e2.name());
    println!("Games: {}, Max turns: {}", games, max_turns);
    println!();

    let runner = MatchRunner::new(MatchConfig {
        num_games: games,
        max_turns,
        alternate_colors,
        verbose: true,
    });
    let report = runner.run_match(e1.as_mut(), e2.as_mut());
    println!();
    report.print_report();

    if let Some(path) = out {
        report
            .save(path)
            .map_err(anyhow::Error::msg)
            .with_context(|| format!("saving report to {}", path.display()))?;
        println!("Report saved to {}", path.display());
    }
    Ok(())
}

fn run_perft(depth: u8) {
    let board = Board::startpos();
    for d in 1..=depth {
        let start = Instant::now();
        let nodes = perft(&board, Color::White, d);
        let elapsed = start.elapsed();
        println!(
            "perft({}) = {:>12}  {:>8.1} ms",
            d,
            nodes,
            elapsed.as_secs_f64() * 1000.0
        );
    }
}
