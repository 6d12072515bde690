//! Attack and check detection over a board snapshot.
//!
//! These queries only ever call the raw generators in `pseudo_legal`, never
//! the legality filter, so evaluating them cannot recurse.

use log::error;

use crate::game_state::chess_types::{Board, Color, Position};
use crate::move_generation::pseudo_legal::attack_squares;

#[inline]
pub fn king_square(board: &Board, color: Color) -> Option<Position> {
    board.king_position(color)
}

/// True iff some piece of `attacker_color` attacks `square`.
pub fn is_square_attacked(board: &Board, square: Position, attacker_color: Color) -> bool {
    let mut attacks = Vec::with_capacity(28);
    for (from, piece) in board.pieces_of(attacker_color) {
        attacks.clear();
        attack_squares(board, from, piece, &mut attacks);
        if attacks.contains(&square) {
            return true;
        }
    }
    false
}

/// Whether `color`'s king is attacked. A board without that king violates
/// the one-king-per-color invariant; that is logged and reported as false.
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = king_square(board, color) else {
        error!("no {} king on the board during check detection", color.name());
        return false;
    };
    is_square_attacked(board, king_sq, color.opposite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_is_in_check_at_the_start() {
        let board = Board::starting();
        assert!(!is_king_in_check(&board, Color::White));
        assert!(!is_king_in_check(&board, Color::Black));
        assert!(is_square_attacked(&board, Position::new(5, 0), Color::White));
        assert!(!is_square_attacked(&board, Position::new(4, 0), Color::White));
    }

    #[test]
    fn sliding_check_is_blocked_by_an_interposed_piece() {
        let open = Board::from_diagram([
            "....k...", "........", "........", "........", "........", "........", "........",
            "....R..K",
        ])
        .expect("diagram should parse");
        assert!(is_king_in_check(&open, Color::Black));
        assert!(is_square_attacked(&open, Position::new(0, 4), Color::White));
        assert!(!is_square_attacked(&open, Position::new(0, 4), Color::Black));

        let blocked = Board::from_diagram([
            "....k...", "........", "........", "....n...", "........", "........", "........",
            "....R..K",
        ])
        .expect("diagram should parse");
        assert!(!is_king_in_check(&blocked, Color::Black));
    }

    #[test]
    fn pawns_attack_diagonally_onto_empty_squares() {
        let board = Board::from_diagram([
            "........", "........", "........", "........", "........", "........", ".....p..",
            "....K..k",
        ])
        .expect("diagram should parse");
        assert!(is_king_in_check(&board, Color::White));
        assert!(is_square_attacked(&board, Position::new(7, 6), Color::Black));
        assert!(!is_square_attacked(&board, Position::new(7, 5), Color::Black));
    }

    #[test]
    fn missing_king_reports_no_check() {
        let board = Board::from_diagram([
            "....k...", "........", "........", "........", "........", "........", "........",
            "....R...",
        ])
        .expect("diagram should parse");
        assert!(!is_king_in_check(&board, Color::White));
    }
}
