//! Text notation: squares as `c3`, steps as `c3-d4` or `c3:e5` for captures.
//!
//! Files run `a`..`h` left to right, ranks `1`..`8` from white's side, so
//! row 7 is rank 1.

use crate::{movegen::MoveSet, types::*};

pub fn square_to_coord(sq: Square) -> String {
    let f = (b'a' + sq.col as u8) as char;
    let r = (b'8' - sq.row as u8) as char;
    format!("{f}{r}")
}

pub fn coord_to_square(c: &str) -> Option<Square> {
    let b = c.trim().as_bytes();
    if b.len() != 2 {
        return None;
    }
    let f = b[0].to_ascii_lowercase();
    let r = b[1];
    if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
        return None;
    }
    Some(Square::new((b'8' - r) as i8, (f - b'a') as i8))
}

pub fn move_to_string(mv: Move) -> String {
    let sep = if mv.is_capture() { ':' } else { '-' };
    format!(
        "{}{}{}",
        square_to_coord(mv.from),
        sep,
        square_to_coord(mv.to)
    )
}

/// Render a whole turn, e.g. `c3:e5:g7`.
pub fn turn_to_string(moves: &[Move]) -> String {
    let mut s = String::new();
    for (i, mv) in moves.iter().enumerate() {
        if i == 0 {
            s.push_str(&square_to_coord(mv.from));
        }
        s.push(if mv.is_capture() { ':' } else { '-' });
        s.push_str(&square_to_coord(mv.to));
    }
    s
}

/// Resolve `c3-d4` / `c3:e5` / `c3 d4` against a legal move set so the
/// captured square is filled in.
pub fn parse_move(legal: &MoveSet, txt: &str) -> Option<Move> {
    let mut parts = txt.split(|c: char| c == '-' || c == ':' || c.is_whitespace());
    let from = coord_to_square(parts.next()?)?;
    let to = coord_to_square(parts.find(|p| !p.is_empty())?)?;
    legal
        .moves
        .iter()
        .copied()
        .find(|m| m.from == from && m.to == to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{board::Board, movegen::legal_moves};

    #[test]
    fn test_coord_round_trip_corners() {
        assert_eq!(square_to_coord(Square::new(7, 0)), "a1");
        assert_eq!(square_to_coord(Square::new(0, 7)), "h8");
        assert_eq!(coord_to_square("c3"), Some(Square::new(5, 2)));
        assert_eq!(coord_to_square("i1"), None);
        assert_eq!(coord_to_square("a9"), None);
    }

    #[test]
    fn test_parse_move_against_legal_set() {
        let legal = legal_moves(&Board::startpos(), Color::White);
        let mv = parse_move(&legal, "c3-d4").expect("legal opening step");
        assert_eq!(mv, Move::new(Square::new(5, 2), Square::new(4, 3)));
        assert!(parse_move(&legal, "c3-c4").is_none());
        assert_eq!(move_to_string(mv), "c3-d4");
    }

    #[test]
    fn test_turn_to_string_chain() {
        let moves = [
            Move::capture(Square::new(5, 2), Square::new(3, 4), Square::new(4, 3)),
            Move::capture(Square::new(3, 4), Square::new(1, 6), Square::new(2, 5)),
        ];
        assert_eq!(turn_to_string(&moves), "c3:e5:g7");
    }
}
