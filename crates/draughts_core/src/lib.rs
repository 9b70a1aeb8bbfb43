pub mod board;
pub mod config;
pub mod eval;
pub mod game;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod search;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use config::*;
pub use eval::{evaluate, INF};
pub use game::GameState;
pub use movegen::*;
pub use notation::*;
pub use perft::{complete_turns, perft};
pub use search::{best_turn_sequence, Searcher, TurnPlan};
pub use types::*;

// =============================================================================
// Engine trait: implemented by every bot (minimax, random, ...)
// =============================================================================

/// Result of choosing a turn
#[derive(Debug, Clone, PartialEq)]
pub struct TurnResult {
    /// Steps of the chosen turn in play order (empty if no legal moves)
    pub moves: Vec<Move>,
    /// Engine score for the turn, from the mover's perspective
    pub score: f64,
    /// Number of nodes searched (optional, for stats)
    pub nodes: u64,
}

impl TurnResult {
    pub fn none() -> Self {
        Self {
            moves: Vec::new(),
            score: 0.0,
            nodes: 0,
        }
    }
}

/// Trait that all draughts bots must implement.
///
/// The match runner only sees this trait, so search bots and baselines can be
/// swapped freely.
pub trait Engine: Send {
    /// Pick a complete turn for `color` on `board`.
    ///
    /// # Returns
    /// TurnResult whose first move is legal for `color` and whose later moves
    /// continue the capture chain from the previous landing square
    fn choose_turn(&mut self, board: &Board, color: Color) -> TurnResult;

    /// Returns the engine's name for logs and match reports
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}

    /// Optional: change the search depth. Returns true if supported.
    fn set_depth(&mut self, _depth: u32) -> bool {
        false
    }
}
