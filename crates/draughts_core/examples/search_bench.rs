//! Perft and search benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example search_bench -p draughts_core -- [depth]
//!
//! Runs turn-perft to `depth` and then a fixed-seed bot search at the same
//! depth on every test position.

use draughts_core::{perft, Board, Color, PruningLevel, SearchConfig, Searcher, SeedPolicy};
use std::env;
use std::time::Instant;

/// Test positions in the eight-row board text format
const TEST_POSITIONS: &[(&str, &str)] = &[
    (
        "Starting position",
        ".b.b.b.b/b.b.b.b./.b.b.b.b/......../......../w.w.w.w./.w.w.w.w/w.w.w.w.",
    ),
    (
        "Open middlegame",
        ".b.b...b/b.b.b.../...b.b.b/..b...../.w...w../w...w.w./.w.w...w/w...w.w.",
    ),
    (
        "Kings endgame",
        "......../..B...../......../....w.w./......../......W./...b..../........",
    ),
];

fn main() {
    let args: Vec<String> = env::args().collect();
    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(6);

    println!("=== Draughts Benchmark Suite ===");
    println!("Depth: {depth}");
    println!();

    let mut total_nodes = 0u64;
    let mut total_time = std::time::Duration::ZERO;

    for (name, text) in TEST_POSITIONS {
        let board = Board::from_text(text);

        print!("{name:.<30}");
        let start = Instant::now();
        let nodes = perft(&board, Color::White, depth);
        let elapsed = start.elapsed();
        total_nodes += nodes;
        total_time += elapsed;
        println!(" perft {nodes:>12} in {elapsed:>8.3?}");

        let config = SearchConfig::depth(depth as u32)
            .with_pruning(PruningLevel::Basic)
            .with_seed(SeedPolicy::Fixed);
        let start = Instant::now();
        let plan = Searcher::new(config).best_turn(&board, Color::White);
        let elapsed = start.elapsed();
        println!(
            "{:30} search {:>11} in {elapsed:>8.3?} ({} steps, score {:.3})",
            "",
            plan.nodes,
            plan.moves.len(),
            plan.score
        );
    }

    println!();
    println!("{:=<70}", "");
    let total_nps = if total_time.as_secs_f64() > 0.0 {
        total_nodes as f64 / total_time.as_secs_f64()
    } else {
        0.0
    };
    println!("PERFT TOTAL: {total_nodes} nodes in {total_time:.3?} ({total_nps:.0} nps)");
}
