use crate::game_state::chess_types::{Board, Color, Position};
use crate::moves::directions::{step_destinations, KNIGHT_OFFSETS};

#[inline]
pub fn knight_destinations(board: &Board, from: Position, color: Color, out: &mut Vec<Position>) {
    step_destinations(board, from, color, &KNIGHT_OFFSETS, out);
}
