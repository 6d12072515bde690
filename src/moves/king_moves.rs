//! Plain king steps. Castling destinations are produced separately by
//! `move_generation::legal_moves_castling`, so attack detection can reuse
//! this generator without recursing into "is the transit square attacked".

use crate::game_state::chess_types::{Board, Color, Position};
use crate::moves::directions::{step_destinations, KING_OFFSETS};

#[inline]
pub fn king_destinations(board: &Board, from: Position, color: Color, out: &mut Vec<Position>) {
    step_destinations(board, from, color, &KING_OFFSETS, out);
}
