//! Move application: board-level and game-state-level.
//!
//! Neither function validates legality; both expect a `ChessMove` built by
//! `build_move` for a destination the legality filter accepted.

use log::debug;

use crate::game_state::chess_rules::{castle_rook_target_col, home_row, rook_home_col};
use crate::game_state::chess_types::*;
use crate::move_generation::game_status::evaluate_status;
use crate::moves::move_descriptions::ChessMove;

/// Copy `board` and apply `mv` to the copy. The input board is untouched.
pub fn apply_move_to_board(board: &Board, mv: &ChessMove) -> Board {
    let mut next = *board;
    let color = mv.piece.color;

    next.set(mv.from, None);
    next.set(mv.to, Some(Piece::new(mv.resulting_kind(), color)));

    if mv.is_en_passant {
        next.set(mv.en_passant_victim_square(), None);
    }

    if let Some(side) = mv.castle_side() {
        let row = home_row(color);
        let rook = next.get(Position::new(row, rook_home_col(side)));
        next.set(Position::new(row, rook_home_col(side)), None);
        next.set(Position::new(row, castle_rook_target_col(side)), rook);
    }

    next
}

/// Successor state after `mv`, including the recomputed status.
pub fn apply_move(game_state: &GameState, mv: &ChessMove) -> GameState {
    let mut next = advance_position(game_state, mv);
    next.game_status = evaluate_status(&next);
    debug!(
        "applied {mv} for {}; status now {:?}",
        mv.piece.color.name(),
        next.game_status
    );
    next
}

/// Successor state with every field updated except `game_status`, which is
/// carried over unchanged. Perft walks the tree with this.
pub(crate) fn advance_position(game_state: &GameState, mv: &ChessMove) -> GameState {
    let mover = mv.piece.color;
    let mut next = game_state.clone();

    next.board = apply_move_to_board(&game_state.board, mv);
    next.castling_rights = updated_castling_rights(game_state.castling_rights, mv);

    next.en_passant_target = if mv.is_double_pawn_push() {
        Some(Position::new((mv.from.row + mv.to.row) / 2, mv.from.col))
    } else {
        None
    };

    if mv.piece.kind == PieceKind::Pawn || mv.is_capture() {
        next.half_move_clock = 0;
    } else {
        next.half_move_clock = next.half_move_clock.saturating_add(1);
    }
    if mover == Color::Black {
        next.full_move_number = next.full_move_number.saturating_add(1);
    }

    next.current_player = mover.opposite();
    next.selected_square = None;
    next.possible_moves.clear();
    next.move_history.push(*mv);

    next
}

fn updated_castling_rights(rights: CastlingRights, mv: &ChessMove) -> CastlingRights {
    let mover = mv.piece.color;
    let mut rights = rights;

    if mv.piece.kind == PieceKind::King {
        rights &= !(CastleSide::Kingside.flag(mover) | CastleSide::Queenside.flag(mover));
    }

    for side in [CastleSide::Kingside, CastleSide::Queenside] {
        let own_corner = Position::new(home_row(mover), rook_home_col(side));
        if mv.piece.kind == PieceKind::Rook && mv.from == own_corner {
            rights &= !side.flag(mover);
        }

        let enemy = mover.opposite();
        let enemy_corner = Position::new(home_row(enemy), rook_home_col(side));
        let took_rook = mv
            .captured_piece
            .map_or(false, |piece| piece.kind == PieceKind::Rook);
        if mv.to == enemy_corner && took_rook {
            rights &= !side.flag(enemy);
        }
    }

    rights
}
