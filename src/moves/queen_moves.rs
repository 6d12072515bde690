use crate::game_state::chess_types::{Board, Color, Position};
use crate::moves::directions::{slide_destinations, QUEEN_DIRECTIONS};

#[inline]
pub fn queen_destinations(board: &Board, from: Position, color: Color, out: &mut Vec<Position>) {
    slide_destinations(board, from, color, &QUEEN_DIRECTIONS, out);
}
