//! Fully resolved description of one ply.
//!
//! Flags are derived once, from the board plus origin and destination, by
//! `build_move`. Application and history both read the same record, so they
//! can never disagree about what a move was.

use std::fmt;

use crate::game_state::chess_rules::{castle_king_target_col, promotion_row, KING_HOME_COL};
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChessMove {
    pub from: Position,
    pub to: Position,
    pub piece: Piece,
    pub captured_piece: Option<Piece>,
    pub is_en_passant: bool,
    pub is_castle: bool,
    pub is_promotion: bool,
    pub promotion_piece: Option<PieceKind>,
}

impl ChessMove {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured_piece.is_some()
    }

    /// A pawn advance of two rows.
    #[inline]
    pub fn is_double_pawn_push(&self) -> bool {
        self.piece.kind == PieceKind::Pawn && self.from.row.abs_diff(self.to.row) == 2
    }

    /// Kind standing on `to` once the move is applied.
    #[inline]
    pub fn resulting_kind(&self) -> PieceKind {
        if self.is_promotion {
            self.promotion_piece.unwrap_or(PieceKind::Queen)
        } else {
            self.piece.kind
        }
    }

    pub fn castle_side(&self) -> Option<CastleSide> {
        if !self.is_castle {
            return None;
        }
        if self.to.col == castle_king_target_col(CastleSide::Kingside) {
            Some(CastleSide::Kingside)
        } else {
            Some(CastleSide::Queenside)
        }
    }

    /// Square of the pawn removed by an en-passant capture: one row behind
    /// `to`, toward the mover's own side.
    #[inline]
    pub fn en_passant_victim_square(&self) -> Position {
        Position::new(
            (self.to.row as i8 - self.piece.color.forward()) as u8,
            self.to.col,
        )
    }
}

/// Synthesize the move record for moving the piece on `from` to `to`.
///
/// Returns `None` when `from` is empty. The caller guarantees `to` is a
/// pseudo-legal destination; no legality is checked here.
pub fn build_move(
    board: &Board,
    from: Position,
    to: Position,
    en_passant_target: Option<Position>,
    promotion_choice: Option<PieceKind>,
) -> Option<ChessMove> {
    let piece = board.get(from)?;
    let occupant = board.get(to).filter(|target| target.color != piece.color);

    let is_pawn = piece.kind == PieceKind::Pawn;
    let is_en_passant =
        is_pawn && occupant.is_none() && from.col != to.col && en_passant_target == Some(to);
    let captured_piece = if is_en_passant {
        Some(Piece::new(PieceKind::Pawn, piece.color.opposite()))
    } else {
        occupant
    };

    let is_castle = piece.kind == PieceKind::King
        && from.col == KING_HOME_COL
        && from.row == to.row
        && from.col.abs_diff(to.col) == 2;

    let is_promotion = is_pawn && to.row == promotion_row(piece.color);
    let promotion_piece = if is_promotion {
        Some(promotion_choice.unwrap_or(PieceKind::Queen))
    } else {
        None
    };

    Some(ChessMove {
        from,
        to,
        piece,
        captured_piece,
        is_en_passant,
        is_castle,
        is_promotion,
        promotion_piece,
    })
}

/// Coordinate notation: `e2e4`, `e7e8q`.
impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion_piece {
            write!(f, "{}", kind.letter())?;
        }
        Ok(())
    }
}
