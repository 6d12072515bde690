//! Direction sets and the two walkers every non-pawn piece is built from:
//! rays (sliders) and single steps (knight, king).

use crate::game_state::chess_types::{Board, Color, Position};

/// `(d_row, d_col)` pairs.
pub type Offset = (i8, i8);

pub const ROOK_DIRECTIONS: [Offset; 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
pub const BISHOP_DIRECTIONS: [Offset; 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
pub const QUEEN_DIRECTIONS: [Offset; 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];
pub const KNIGHT_OFFSETS: [Offset; 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];
pub const KING_OFFSETS: [Offset; 8] = QUEEN_DIRECTIONS;

/// Walk each direction until the edge or the first occupied square. The
/// blocker is included only when it belongs to the other color.
pub fn slide_destinations(
    board: &Board,
    from: Position,
    color: Color,
    directions: &[Offset],
    out: &mut Vec<Position>,
) {
    for &(d_row, d_col) in directions {
        let mut current = from;
        while let Some(next) = current.offset(d_row, d_col) {
            match board.get(next) {
                None => out.push(next),
                Some(blocker) => {
                    if blocker.color != color {
                        out.push(next);
                    }
                    break;
                }
            }
            current = next;
        }
    }
}

/// Single jumps onto on-board squares not held by a friendly piece.
pub fn step_destinations(
    board: &Board,
    from: Position,
    color: Color,
    offsets: &[Offset],
    out: &mut Vec<Position>,
) {
    for &(d_row, d_col) in offsets {
        let Some(to) = from.offset(d_row, d_col) else {
            continue;
        };
        match board.get(to) {
            Some(occupant) if occupant.color == color => {}
            _ => out.push(to),
        }
    }
}
