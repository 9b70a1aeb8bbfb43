//! Material-ratio evaluation.

use crate::{board::Board, config::ScoringMode, types::*};

/// Score returned when the opponent has no material left.
pub const INF: f64 = 1e9;

/// Bonus per row a man has advanced from its own back row.
const ADVANCE_BONUS: f64 = 0.05;

/// Evaluates `board` for `perspective`.
///
/// Returns own strength divided by opponent strength, so higher is better:
/// - `INF` when the opponent has nothing left
/// - `0.0` when `perspective` has nothing left
///
/// Kings weigh 4 men, or 5 under [`ScoringMode::NumberAndPotential`], which
/// also credits every man with its advancement.
pub fn evaluate(board: &Board, perspective: Color, mode: ScoringMode) -> f64 {
    let mut men = [0.0f64; 2];
    let mut kings = [0.0f64; 2];
    let potential = mode == ScoringMode::NumberAndPotential;

    for (row, cells) in board.cells.iter().enumerate() {
        for cell in cells {
            match *cell {
                Cell::Man(c) => {
                    men[c.idx()] += 1.0;
                    if potential {
                        let advanced = match c {
                            Color::White => 7 - row,
                            Color::Black => row,
                        };
                        men[c.idx()] += ADVANCE_BONUS * advanced as f64;
                    }
                }
                Cell::King(c) => kings[c.idx()] += 1.0,
                Cell::Empty => {}
            }
        }
    }

    let own = perspective.idx();
    let opp = perspective.other().idx();
    if men[opp] + kings[opp] == 0.0 {
        return INF;
    }
    if men[own] + kings[own] == 0.0 {
        return 0.0;
    }

    let king_weight = if potential { 5.0 } else { 4.0 };
    (men[own] + kings[own] * king_weight) / (men[opp] + kings[opp] * king_weight)
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
