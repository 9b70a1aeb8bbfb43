use super::*;

#[test]
fn test_startpos_is_balanced() {
    let b = Board::startpos();
    for color in Color::ALL {
        assert_eq!(evaluate(&b, color, ScoringMode::PlainCount), 1.0);
        assert!((evaluate(&b, color, ScoringMode::NumberAndPotential) - 1.0).abs() < 1e-12);
    }
}

#[test]
fn test_opponent_wiped_out_is_inf() {
    let mut b = Board::empty();
    b.set(Square::new(4, 3), Cell::Man(Color::Black));
    assert_eq!(evaluate(&b, Color::Black, ScoringMode::PlainCount), INF);
    assert_eq!(evaluate(&b, Color::White, ScoringMode::PlainCount), 0.0);
}

#[test]
fn test_king_weight_depends_on_mode() {
    let mut b = Board::empty();
    b.set(Square::new(0, 1), Cell::King(Color::White));
    b.set(Square::new(0, 3), Cell::Man(Color::Black));
    assert_eq!(evaluate(&b, Color::White, ScoringMode::PlainCount), 4.0);
    // black man on row 0 has not advanced
    assert_eq!(evaluate(&b, Color::White, ScoringMode::NumberAndPotential), 5.0);
}

#[test]
fn test_potential_rewards_advanced_men() {
    let mut b = Board::empty();
    b.set(Square::new(1, 2), Cell::Man(Color::White)); // six rows up
    b.set(Square::new(0, 1), Cell::Man(Color::Black)); // home row
    let score = evaluate(&b, Color::White, ScoringMode::NumberAndPotential);
    assert!((score - 1.3).abs() < 1e-9);
    assert_eq!(evaluate(&b, Color::White, ScoringMode::PlainCount), 1.0);
}

#[test]
fn test_evaluate_is_deterministic() {
    let b = Board::startpos().with_move(Move::new(Square::new(5, 2), Square::new(4, 3)));
    let a = evaluate(&b, Color::Black, ScoringMode::NumberAndPotential);
    let again = evaluate(&b, Color::Black, ScoringMode::NumberAndPotential);
    assert_eq!(a.to_bits(), again.to_bits());
}
