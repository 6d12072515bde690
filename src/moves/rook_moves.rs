use crate::game_state::chess_types::{Board, Color, Position};
use crate::moves::directions::{slide_destinations, ROOK_DIRECTIONS};

#[inline]
pub fn rook_destinations(board: &Board, from: Position, color: Color, out: &mut Vec<Position>) {
    slide_destinations(board, from, color, &ROOK_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rook_on_empty_board_reaches_fourteen_squares() {
        let mut out = Vec::new();
        rook_destinations(&Board::empty(), Position::new(3, 3), Color::Black, &mut out);
        assert_eq!(out.len(), 14);
    }

    #[test]
    fn rook_stops_at_the_enemy_it_captures() {
        let board = Board::from_diagram([
            "r..Q....", "........", "........", "........", "........", "........", "........",
            "........",
        ])
        .expect("diagram should parse");
        let mut out = Vec::new();
        rook_destinations(&board, Position::new(0, 0), Color::Black, &mut out);
        assert!(out.contains(&Position::new(0, 3)));
        assert!(!out.contains(&Position::new(0, 4)));
        assert_eq!(out.len(), 7 + 3);
    }
}
