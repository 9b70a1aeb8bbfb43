//! Minimax search with alpha-beta pruning over whole draughts turns.
//!
//! A turn may be a chain of captures by one piece. Chains never consume a ply:
//! depth only advances when the side to move changes. Depth 0 is the first
//! reply of the opponent, so odd depths belong to the searching side
//! (maximizer) and even depths to its opponent (minimizer).

use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use tracing::{debug, trace};

use crate::{
    board::Board,
    config::SearchConfig,
    eval::{evaluate, INF},
    movegen::{legal_moves, legal_moves_from, MoveSet},
    types::{Color, Move, Square},
};

/// Lower bound shared by the running maximum and the initial alpha.
const FLOOR: f64 = -1.0;
/// Upper bound shared by the running minimum and the initial beta.
const CEILING: f64 = INF + 1.0;

/// The moves of one full turn together with their backed-up score.
#[derive(Clone, Debug, PartialEq)]
pub struct TurnPlan {
    /// First step plus every forced capture continuation, in play order.
    pub moves: Vec<Move>,
    pub score: f64,
    pub nodes: u64,
}

/// Stateful searcher: owns the move-order RNG so successive turns of one game
/// draw from a single seeded stream.
#[derive(Debug, Clone)]
pub struct Searcher {
    config: SearchConfig,
    rng: StdRng,
    perspective: Color,
    nodes: u64,
}

impl Searcher {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(config.seed.seed()),
            perspective: Color::White,
            nodes: 0,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Change the depth between turns without reseeding.
    pub fn set_max_depth(&mut self, depth: u32) {
        self.config.max_depth = depth;
    }

    /// Color-wide legal moves in shuffled order.
    pub fn shuffled_moves(&mut self, board: &Board, color: Color) -> MoveSet {
        let mut set = legal_moves(board, color);
        set.moves.shuffle(&mut self.rng);
        set
    }

    /// Best complete turn for `color`. Empty when `color` has no legal move.
    pub fn best_turn(&mut self, board: &Board, color: Color) -> TurnPlan {
        self.nodes = 0;
        self.perspective = color;

        let (score, moves) = self.search_chain(*board, color, None, FLOOR);
        debug!(
            color = color.name(),
            depth = self.config.max_depth,
            steps = moves.len(),
            score,
            nodes = self.nodes,
            "search finished"
        );
        TurnPlan {
            moves,
            score,
            nodes: self.nodes,
        }
    }

    /// Root level: walks the searching side's own capture chain, keeping the
    /// best move at every chain node.
    fn search_chain(
        &mut self,
        board: Board,
        color: Color,
        continuing_from: Option<Square>,
        alpha: f64,
    ) -> (f64, Vec<Move>) {
        self.nodes += 1;
        let set = match continuing_from {
            Some(sq) => legal_moves_from(&board, sq),
            None => self.shuffled_moves(&board, color),
        };

        if continuing_from.is_some() && !set.has_captures {
            let score = self.search(board, color.other(), 0, alpha, CEILING, None);
            return (score, Vec::new());
        }

        let mut best_score = FLOOR;
        let mut best_line: Vec<Move> = Vec::new();
        for mv in set.moves {
            let next = board.with_move(mv);
            let (score, tail) = if set.has_captures {
                self.search_chain(next, color, Some(mv.to), best_score)
            } else {
                let score = self.search(next, color.other(), 0, best_score, CEILING, None);
                (score, Vec::new())
            };
            // a turn is always produced, even if every line backs up the floor
            if score > best_score || best_line.is_empty() {
                trace!(?mv, score, "new best root step");
                best_score = best_score.max(score);
                best_line.clear();
                best_line.push(mv);
                best_line.extend(tail);
            }
        }
        (best_score, best_line)
    }

    fn search(
        &mut self,
        board: Board,
        color: Color,
        depth: u32,
        mut alpha: f64,
        mut beta: f64,
        continuing_from: Option<Square>,
    ) -> f64 {
        self.nodes += 1;
        if depth == self.config.max_depth {
            return evaluate(&board, self.perspective, self.config.scoring);
        }

        let set = match continuing_from {
            Some(sq) => legal_moves_from(&board, sq),
            None => self.shuffled_moves(&board, color),
        };

        // chain over: the opponent replies on the next ply
        if continuing_from.is_some() && !set.has_captures {
            return self.search(board, color.other(), depth + 1, alpha, beta, None);
        }

        let maximizing = depth % 2 == 1;
        if set.is_empty() {
            // side to move is stuck and loses
            return if maximizing { 0.0 } else { INF };
        }

        let mut min_score = CEILING;
        let mut max_score = FLOOR;
        for mv in set.moves {
            let next = board.with_move(mv);
            let score = if set.has_captures {
                self.search(next, color, depth, alpha, beta, Some(mv.to))
            } else {
                self.search(next, color.other(), depth + 1, alpha, beta, None)
            };
            min_score = min_score.min(score);
            max_score = max_score.max(score);

            if maximizing {
                alpha = alpha.max(max_score);
            } else {
                beta = beta.min(min_score);
            }
            if self.config.pruning.enabled() && alpha >= beta {
                return if maximizing {
                    max_score + 1.0
                } else {
                    min_score - 1.0
                };
            }
        }

        if maximizing {
            max_score
        } else {
            min_score
        }
    }
}

/// One-shot helper for callers that do not keep a searcher around.
pub fn best_turn_sequence(board: &Board, color: Color, config: SearchConfig) -> Vec<Move> {
    Searcher::new(config).best_turn(board, color).moves
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
