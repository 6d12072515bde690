//! Castling destinations for the king's own generation call.

use crate::game_state::chess_rules::{
    castle_king_target_col, castle_rook_target_col, home_row, rook_home_col, KING_HOME_COL,
};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_square_attacked;

/// Zero to two extra king destinations. Callers only ask for these when the
/// king of `color` is on `king_from`; the king must not currently be in
/// check, the rights flag must still be set, the rook must be home, the
/// squares between must be empty, and the transit and destination squares
/// must not be attacked.
pub fn castling_destinations(
    board: &Board,
    king_from: Position,
    color: Color,
    castling_rights: CastlingRights,
) -> Vec<Position> {
    let mut out = Vec::new();
    let row = home_row(color);
    if king_from != Position::new(row, KING_HOME_COL) {
        return out;
    }

    let enemy = color.opposite();
    if is_square_attacked(board, king_from, enemy) {
        return out;
    }

    for side in [CastleSide::Kingside, CastleSide::Queenside] {
        if !can_castle(castling_rights, color, side) {
            continue;
        }

        let rook_col = rook_home_col(side);
        if board.get(Position::new(row, rook_col)) != Some(Piece::new(PieceKind::Rook, color)) {
            continue;
        }

        let (low, high) = if rook_col < KING_HOME_COL {
            (rook_col + 1, KING_HOME_COL)
        } else {
            (KING_HOME_COL + 1, rook_col)
        };
        if !(low..high).all(|col| board.is_empty_at(Position::new(row, col))) {
            continue;
        }

        let transit = Position::new(row, castle_rook_target_col(side));
        let target = Position::new(row, castle_king_target_col(side));
        if is_square_attacked(board, transit, enemy) || is_square_attacked(board, target, enemy) {
            continue;
        }

        out.push(target);
    }

    out
}
