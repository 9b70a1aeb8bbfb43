use crate::{
    board::Board,
    movegen::{legal_moves, legal_moves_from},
    types::{Color, Move},
};

/// Pure perft node count over whole turns.
/// A capture chain counts as one turn; each distinct chain is a separate leaf.
pub fn perft(board: &Board, color: Color, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    let set = legal_moves(board, color);
    set.moves
        .iter()
        .map(|&mv| finish_turn(&board.with_move(mv), color, mv, depth))
        .sum()
}

fn finish_turn(board: &Board, color: Color, last: Move, depth: u8) -> u64 {
    if last.is_capture() {
        let next = legal_moves_from(board, last.to);
        if next.has_captures {
            return next
                .moves
                .iter()
                .map(|&mv| finish_turn(&board.with_move(mv), color, mv, depth))
                .sum();
        }
    }
    perft(board, color.other(), depth - 1)
}

/// Every complete turn available to `color`, each a full capture chain.
pub fn complete_turns(board: &Board, color: Color) -> Vec<Vec<Move>> {
    fn extend(board: &Board, last: Move, line: &mut Vec<Move>, out: &mut Vec<Vec<Move>>) {
        if last.is_capture() {
            let next = legal_moves_from(board, last.to);
            if next.has_captures {
                for mv in next.moves {
                    line.push(mv);
                    extend(&board.with_move(mv), mv, line, out);
                    line.pop();
                }
                return;
            }
        }
        out.push(line.clone());
    }

    let mut out = Vec::new();
    let mut line = Vec::with_capacity(4);
    for mv in legal_moves(board, color).moves {
        line.push(mv);
        extend(&board.with_move(mv), mv, &mut line, &mut out);
        line.pop();
    }
    out
}
