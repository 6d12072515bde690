//! Pawn destinations and pawn attack squares.
//!
//! Pawns are the only piece whose attack pattern differs from its movement:
//! a forward push never attacks, and a diagonal attacks even when empty.

use crate::game_state::chess_rules::pawn_start_row;
use crate::game_state::chess_types::{Board, Color, Position};

/// Pseudo-legal pawn destinations: single push, double push from the start
/// row, diagonal captures, and the en-passant target.
pub fn pawn_destinations(
    board: &Board,
    from: Position,
    color: Color,
    en_passant_target: Option<Position>,
    out: &mut Vec<Position>,
) {
    let forward = color.forward();

    if let Some(one_step) = from.offset(forward, 0) {
        if board.is_empty_at(one_step) {
            out.push(one_step);

            if from.row == pawn_start_row(color) {
                if let Some(two_step) = from.offset(2 * forward, 0) {
                    if board.is_empty_at(two_step) {
                        out.push(two_step);
                    }
                }
            }
        }
    }

    for d_col in [-1i8, 1] {
        let Some(to) = from.offset(forward, d_col) else {
            continue;
        };
        match board.get(to) {
            Some(target) if target.color != color => out.push(to),
            None if en_passant_target == Some(to) => out.push(to),
            _ => {}
        }
    }
}

/// Squares a pawn on `from` attacks, regardless of occupancy.
pub fn pawn_attacks(from: Position, color: Color, out: &mut Vec<Position>) {
    let forward = color.forward();
    for d_col in [-1i8, 1] {
        if let Some(to) = from.offset(forward, d_col) {
            out.push(to);
        }
    }
}
