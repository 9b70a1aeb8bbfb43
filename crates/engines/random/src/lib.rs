//! Random Turn Draughts Engine
//!
//! A simple engine that selects a complete turn uniformly at random.
//! Useful for:
//! - Testing the game runner without search cost
//! - Baseline comparisons (any real bot should easily beat this)
//! - Stress testing capture-chain generation

use draughts_core::{complete_turns, Board, Color, Engine, TurnResult};
use rand::seq::SliceRandom;
use rand::thread_rng;

#[cfg(test)]
mod lib_tests;

/// A draughts engine that plays random legal turns.
///
/// Forced captures still apply: only turns the rules allow are candidates,
/// and capture chains are always played to the end.
#[derive(Debug, Clone, Default)]
pub struct RandomEngine {
    nodes: u64,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }
}

impl Engine for RandomEngine {
    fn choose_turn(&mut self, board: &Board, color: Color) -> TurnResult {
        let turns = complete_turns(board, color);
        self.nodes = turns.len() as u64;

        match turns.choose(&mut thread_rng()) {
            Some(moves) => TurnResult {
                moves: moves.clone(),
                score: 0.0,
                nodes: self.nodes,
            },
            None => TurnResult::none(),
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
