//! Raw, unfiltered per-piece generation.
//!
//! Nothing here looks at king safety and nothing here produces castling.
//! The attack detector builds on these entry points only; the filtered ones
//! live in `legal_move_generator`.

use crate::game_state::chess_types::{Board, Piece, PieceKind, Position};
use crate::moves::bishop_moves::bishop_destinations;
use crate::moves::king_moves::king_destinations;
use crate::moves::knight_moves::knight_destinations;
use crate::moves::pawn_moves::{pawn_attacks, pawn_destinations};
use crate::moves::queen_moves::queen_destinations;
use crate::moves::rook_moves::rook_destinations;

/// Squares `piece` standing on `from` could move to, ignoring whether its own
/// king ends up attacked.
pub fn pseudo_legal_destinations(
    board: &Board,
    from: Position,
    piece: Piece,
    en_passant_target: Option<Position>,
) -> Vec<Position> {
    let mut out = Vec::with_capacity(28);
    match piece.kind {
        PieceKind::Pawn => pawn_destinations(board, from, piece.color, en_passant_target, &mut out),
        _ => attack_squares(board, from, piece, &mut out),
    }
    out
}

/// Squares `piece` on `from` attacks. Identical to the pseudo-legal set for
/// every piece but the pawn, whose attacks are its two forward diagonals.
pub fn attack_squares(board: &Board, from: Position, piece: Piece, out: &mut Vec<Position>) {
    let color = piece.color;
    match piece.kind {
        PieceKind::Pawn => pawn_attacks(from, color, out),
        PieceKind::Knight => knight_destinations(board, from, color, out),
        PieceKind::Bishop => bishop_destinations(board, from, color, out),
        PieceKind::Rook => rook_destinations(board, from, color, out),
        PieceKind::Queen => queen_destinations(board, from, color, out),
        PieceKind::King => king_destinations(board, from, color, out),
    }
}
