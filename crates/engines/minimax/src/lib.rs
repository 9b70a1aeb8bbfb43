//! Minimax Draughts Engine
//!
//! Alpha-beta search over whole turns with material-ratio evaluation.
//! This is the bot the game runner uses for computer-controlled sides.

use std::time::Instant;

use draughts_core::{turn_to_string, Board, Color, Engine, SearchConfig, Searcher, TurnResult};
use tracing::info;

/// Draughts bot driving a [`Searcher`].
///
/// This engine uses:
/// - Minimax search with alpha-beta pruning (configurable level)
/// - Forced capture chains explored without consuming depth
/// - Plain or advancement-aware material evaluation
/// - Seeded move-order shuffling to break ties between equal turns
#[derive(Debug, Clone)]
pub struct MinimaxEngine {
    searcher: Searcher,
    name: String,
}

impl MinimaxEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            searcher: Searcher::new(config),
            name: format!("Minimax d{}", config.max_depth),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        self.searcher.config()
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl Engine for MinimaxEngine {
    fn choose_turn(&mut self, board: &Board, color: Color) -> TurnResult {
        let start = Instant::now();
        let plan = self.searcher.best_turn(board, color);

        info!(
            engine = %self.name,
            color = color.name(),
            depth = self.searcher.config().max_depth,
            turn = %turn_to_string(&plan.moves),
            nodes = plan.nodes,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "bot turn"
        );

        TurnResult {
            moves: plan.moves,
            score: plan.score,
            nodes: plan.nodes,
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_depth(&mut self, depth: u32) -> bool {
        self.searcher.set_max_depth(depth);
        self.name = format!("Minimax d{depth}");
        true
    }
}
