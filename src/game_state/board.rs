//! 8x8 mailbox board.
//!
//! `Board` is a plain `Copy` value: applying a move copies the grid and edits
//! the copy, so every earlier `GameState` keeps its own board untouched.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::{home_row, pawn_start_row, BACK_RANK_LAYOUT};
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    #[inline]
    pub const fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    /// Standard starting position: black on rows 0-1, white on rows 6-7.
    pub fn starting() -> Self {
        let mut board = Self::empty();
        for color in [Color::White, Color::Black] {
            let back = home_row(color);
            let pawns = pawn_start_row(color);
            for (col, kind) in BACK_RANK_LAYOUT.iter().enumerate() {
                board.set(Position::new(back, col as u8), Some(Piece::new(*kind, color)));
                board.set(
                    Position::new(pawns, col as u8),
                    Some(Piece::new(PieceKind::Pawn, color)),
                );
            }
        }
        board
    }

    /// Build a board from eight row strings, row 0 first. Each row holds eight
    /// characters: `PNBRQK` for white, `pnbrqk` for black, `.` for empty.
    pub fn from_diagram(rows: [&str; 8]) -> Result<Self, ChessErrors> {
        let mut board = Self::empty();
        for (row, text) in rows.iter().enumerate() {
            let cells: Vec<char> = text.chars().collect();
            if cells.len() != 8 {
                return Err(ChessErrors::InvalidBoardDiagram(format!(
                    "row {row} has {} cells: {text}",
                    cells.len()
                )));
            }
            for (col, cell) in cells.into_iter().enumerate() {
                if cell == '.' {
                    continue;
                }
                let piece = Piece::from_letter(cell).ok_or_else(|| {
                    ChessErrors::InvalidBoardDiagram(format!("unknown piece letter {cell:?}"))
                })?;
                board.set(Position::new(row as u8, col as u8), Some(piece));
            }
        }
        Ok(board)
    }

    #[inline]
    pub fn get(&self, position: Position) -> Option<Piece> {
        self.squares[position.row as usize][position.col as usize]
    }

    #[inline]
    pub fn set(&mut self, position: Position, piece: Option<Piece>) {
        self.squares[position.row as usize][position.col as usize] = piece;
    }

    #[inline]
    pub fn is_empty_at(&self, position: Position) -> bool {
        self.get(position).is_none()
    }

    /// Occupied squares with their pieces, row-major.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(move |position| self.get(position).map(|piece| (position, piece)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }

    /// First king of `color` found in row-major order.
    pub fn king_position(&self, color: Color) -> Option<Position> {
        let king = Piece::new(PieceKind::King, color);
        self.pieces()
            .find(|(_, piece)| *piece == king)
            .map(|(position, _)| position)
    }

    pub fn count_of(&self, piece: Piece) -> usize {
        self.pieces().filter(|(_, p)| *p == piece).count()
    }
}
