use crate::{board::Board, types::*};

/// Legal steps for a query plus whether they are captures.
///
/// When `has_captures` is set every move carries a captured square and no
/// plain moves are present.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveSet {
    pub moves: Vec<Move>,
    pub has_captures: bool,
}

impl MoveSet {
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Moves starting on `from`, in generation order.
    pub fn starting_at(&self, from: Square) -> impl Iterator<Item = &Move> + '_ {
        self.moves.iter().filter(move |m| m.from == from)
    }

    pub fn contains(&self, mv: &Move) -> bool {
        self.moves.contains(mv)
    }
}

/// Legal moves for every piece of `color`, with the forced-capture rule
/// applied across the whole side. Order is row-major by source square.
pub fn legal_moves(board: &Board, color: Color) -> MoveSet {
    let mut out = MoveSet::default();
    let mut piece_moves = Vec::with_capacity(16);
    for sq in board.pieces(color) {
        let has_captures = piece_moves_into(board, sq, &mut piece_moves);
        if has_captures && !out.has_captures {
            out.has_captures = true;
            out.moves.clear();
        }
        if has_captures == out.has_captures {
            out.moves.extend_from_slice(&piece_moves);
        }
    }
    out
}

/// Legal moves for the single piece on `from`.
pub fn legal_moves_from(board: &Board, from: Square) -> MoveSet {
    let mut moves = Vec::with_capacity(16);
    let has_captures = piece_moves_into(board, from, &mut moves);
    MoveSet {
        moves,
        has_captures,
    }
}

/// Fill `out` with the moves of the piece on `from`; returns true when they
/// are captures.
fn piece_moves_into(board: &Board, from: Square, out: &mut Vec<Move>) -> bool {
    out.clear();
    let cell = board.at(from);
    let color = cell
        .color()
        .unwrap_or_else(|| panic!("move query on empty square {:?}", from));

    if cell.is_king() {
        gen_king_captures(board, from, color, out);
    } else {
        gen_man_captures(board, from, color, out);
    }
    if !out.is_empty() {
        return true;
    }

    if cell.is_king() {
        gen_king_steps(board, from, out);
    } else {
        gen_man_steps(board, from, color, out);
    }
    false
}

fn gen_man_captures(board: &Board, from: Square, c: Color, out: &mut Vec<Move>) {
    for (dr, dc) in DIAGONALS {
        let (Some(over), Some(to)) = (from.offset(dr, dc), from.offset(2 * dr, 2 * dc)) else {
            continue;
        };
        if board.at(to).is_empty() && board.at(over).is_opponent_of(c) {
            out.push(Move::capture(from, to, over));
        }
    }
}

fn gen_king_captures(board: &Board, from: Square, c: Color, out: &mut Vec<Move>) {
    for (dr, dc) in DIAGONALS {
        let mut victim: Option<Square> = None;
        let mut cur = from.offset(dr, dc);
        while let Some(sq) = cur {
            let cell = board.at(sq);
            if !cell.is_empty() {
                // own piece, or a second piece behind the victim, closes the ray
                if cell.belongs_to(c) || victim.is_some() {
                    break;
                }
                victim = Some(sq);
            } else if let Some(v) = victim {
                out.push(Move::capture(from, sq, v));
            }
            cur = sq.offset(dr, dc);
        }
    }
}

fn gen_man_steps(board: &Board, from: Square, c: Color, out: &mut Vec<Move>) {
    let dr = c.forward();
    for dc in [-1, 1] {
        if let Some(to) = from.offset(dr, dc) {
            if board.at(to).is_empty() {
                out.push(Move::new(from, to));
            }
        }
    }
}

fn gen_king_steps(board: &Board, from: Square, out: &mut Vec<Move>) {
    for (dr, dc) in DIAGONALS {
        let mut cur = from.offset(dr, dc);
        while let Some(to) = cur {
            if !board.at(to).is_empty() {
                break;
            }
            out.push(Move::new(from, to));
            cur = to.offset(dr, dc);
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
