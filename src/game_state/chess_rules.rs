//! Canonical chess-rule constants and the per-game rules configuration.
//!
//! Row/column constants follow the board convention used throughout the
//! crate: row 0 is black's back rank, row 7 is white's, column 0 is the a-file.

use crate::game_state::chess_types::{CastleSide, Color, PieceKind};

/// Back-rank piece order from the a-file to the h-file.
pub const BACK_RANK_LAYOUT: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

pub const KING_HOME_COL: u8 = 4;
pub const KINGSIDE_ROOK_COL: u8 = 7;
pub const QUEENSIDE_ROOK_COL: u8 = 0;

/// Half-moves without capture or pawn move after which the game is drawn.
pub const FIFTY_MOVE_RULE_HALF_MOVES: u16 = 100;

#[inline]
pub const fn home_row(color: Color) -> u8 {
    match color {
        Color::White => 7,
        Color::Black => 0,
    }
}

#[inline]
pub const fn pawn_start_row(color: Color) -> u8 {
    match color {
        Color::White => 6,
        Color::Black => 1,
    }
}

/// Row on which a pawn of `color` promotes.
#[inline]
pub const fn promotion_row(color: Color) -> u8 {
    home_row(color.opposite())
}

#[inline]
pub const fn rook_home_col(side: CastleSide) -> u8 {
    match side {
        CastleSide::Kingside => KINGSIDE_ROOK_COL,
        CastleSide::Queenside => QUEENSIDE_ROOK_COL,
    }
}

/// Column the king lands on when castling.
#[inline]
pub const fn castle_king_target_col(side: CastleSide) -> u8 {
    match side {
        CastleSide::Kingside => KING_HOME_COL + 2,
        CastleSide::Queenside => KING_HOME_COL - 2,
    }
}

/// Column the king passes over, which is also where the rook lands.
#[inline]
pub const fn castle_rook_target_col(side: CastleSide) -> u8 {
    match side {
        CastleSide::Kingside => 5,
        CastleSide::Queenside => 3,
    }
}

/// Rules knobs carried by every `GameState` and inherited by its successors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RulesConfig {
    /// Half-move clock value at which the game is declared drawn.
    pub fifty_move_limit: u16,
    /// Piece a pawn becomes when the caller does not choose one.
    pub default_promotion: PieceKind,
    pub detect_insufficient_material: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            fifty_move_limit: FIFTY_MOVE_RULE_HALF_MOVES,
            default_promotion: PieceKind::Queen,
            detect_insufficient_material: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn castling_columns_match_standard_chess() {
        assert_eq!(castle_king_target_col(CastleSide::Kingside), 6);
        assert_eq!(castle_king_target_col(CastleSide::Queenside), 2);
        assert_eq!(castle_rook_target_col(CastleSide::Kingside), 5);
        assert_eq!(castle_rook_target_col(CastleSide::Queenside), 3);
        assert_eq!(BACK_RANK_LAYOUT[KING_HOME_COL as usize], PieceKind::King);
    }

    #[test]
    fn promotion_row_is_the_opponents_home_row() {
        assert_eq!(promotion_row(Color::White), 0);
        assert_eq!(promotion_row(Color::Black), 7);
    }
}
