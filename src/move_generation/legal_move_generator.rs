//! Legality filter.
//!
//! Takes pseudo-legal destinations (plus castling for the king), builds the
//! full move record for each, applies it to a copy of the board, and drops
//! every move that leaves the mover's own king attacked.

use log::trace;

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_move_to_board;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_moves_castling::castling_destinations;
use crate::move_generation::move_generator::{GeneratedMove, MoveGenerator};
use crate::move_generation::pseudo_legal::pseudo_legal_destinations;
use crate::moves::move_descriptions::build_move;

/// One legal move per destination; promotions use the game's default piece.
pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &GameState) -> Vec<GeneratedMove> {
        all_legal_moves(game_state)
    }
}

/// Keep the candidates from `from` that do not leave the mover's king in check.
pub fn filter_legal_moves(
    board: &Board,
    from: Position,
    candidates: &[Position],
    en_passant_target: Option<Position>,
    promotion: PieceKind,
) -> Vec<GeneratedMove> {
    let mut legal = Vec::with_capacity(candidates.len());
    for &to in candidates {
        let Some(chess_move) = build_move(board, from, to, en_passant_target, Some(promotion))
        else {
            continue;
        };

        let board_after_move = apply_move_to_board(board, &chess_move);
        if is_king_in_check(&board_after_move, chess_move.piece.color) {
            trace!("rejected {chess_move}: leaves own king in check");
            continue;
        }

        legal.push(GeneratedMove {
            chess_move,
            board_after_move,
        });
    }
    legal
}

/// Legal moves of the piece on `from`. Empty when the square is empty or the
/// piece belongs to the side not to move.
pub fn legal_moves_from(game_state: &GameState, from: Position) -> Vec<GeneratedMove> {
    let board = &game_state.board;
    let Some(piece) = board.get(from) else {
        return Vec::new();
    };
    if piece.color != game_state.current_player {
        return Vec::new();
    }

    let mut candidates =
        pseudo_legal_destinations(board, from, piece, game_state.en_passant_target);
    if piece.kind == PieceKind::King {
        candidates.extend(castling_destinations(
            board,
            from,
            piece.color,
            game_state.castling_rights,
        ));
    }

    filter_legal_moves(
        board,
        from,
        &candidates,
        game_state.en_passant_target,
        game_state.config.default_promotion,
    )
}

pub fn legal_destinations_for_square(game_state: &GameState, from: Position) -> Vec<Position> {
    legal_moves_from(game_state, from)
        .into_iter()
        .map(|generated| generated.chess_move.to)
        .collect()
}

/// Every legal move of the side to move.
pub fn all_legal_moves(game_state: &GameState) -> Vec<GeneratedMove> {
    let mut moves = Vec::with_capacity(64);
    for (from, _) in game_state.board.pieces_of(game_state.current_player) {
        moves.extend(legal_moves_from(game_state, from));
    }
    moves
}

/// Short-circuiting variant of `!all_legal_moves(..).is_empty()`.
pub fn has_any_legal_move(game_state: &GameState) -> bool {
    game_state
        .board
        .pieces_of(game_state.current_player)
        .any(|(from, _)| !legal_moves_from(game_state, from).is_empty())
}
