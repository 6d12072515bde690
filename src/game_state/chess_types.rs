/// Core value types shared by the board model, move generation, and the
/// game-state contract.

pub use crate::game_state::board::Board;
pub use crate::game_state::game_state::GameState;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a single pawn step. White advances toward row 0.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Black => "Black",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Kinds a pawn may become on the last rank.
    #[inline]
    pub const fn is_promotion_target(self) -> bool {
        matches!(
            self,
            PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen
        )
    }

    /// Lower-case letter used in coordinate notation and diagrams.
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// A piece is identified purely by kind and color; movement history lives in
/// `GameState` (castling rights, en-passant target).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    /// Diagram letter: upper case for white, lower case for black.
    pub fn letter(self) -> char {
        match self.color {
            Color::White => self.kind.letter().to_ascii_uppercase(),
            Color::Black => self.kind.letter(),
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        let kind = PieceKind::from_letter(letter)?;
        let color = if letter.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Self::new(kind, color))
    }
}

/// Board coordinate. Row 0 is black's back rank, row 7 is white's back rank,
/// column 0 is the a-file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    /// Callers must pass coordinates in `0..8`; use `try_new` for untrusted input.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    #[inline]
    pub fn try_new(row: i8, col: i8) -> Option<Self> {
        if Self::is_valid(row, col) {
            Some(Self::new(row as u8, col as u8))
        } else {
            None
        }
    }

    #[inline]
    pub const fn is_valid(row: i8, col: i8) -> bool {
        row >= 0 && row < 8 && col >= 0 && col < 8
    }

    /// Square reached by shifting this one by `(d_row, d_col)`, if on the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        Self::try_new(self.row as i8 + d_row, self.col as i8 + d_col)
    }

    /// All 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Position::new(row, col)))
    }
}

/// Castling availability bitmask. Bits are only ever cleared.
pub type CastlingRights = u8;

pub const CASTLE_WHITE_KINGSIDE: CastlingRights = 1 << 0;
pub const CASTLE_WHITE_QUEENSIDE: CastlingRights = 1 << 1;
pub const CASTLE_BLACK_KINGSIDE: CastlingRights = 1 << 2;
pub const CASTLE_BLACK_QUEENSIDE: CastlingRights = 1 << 3;
pub const CASTLE_ALL: CastlingRights =
    CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE | CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    #[inline]
    pub const fn flag(self, color: Color) -> CastlingRights {
        match (color, self) {
            (Color::White, CastleSide::Kingside) => CASTLE_WHITE_KINGSIDE,
            (Color::White, CastleSide::Queenside) => CASTLE_WHITE_QUEENSIDE,
            (Color::Black, CastleSide::Kingside) => CASTLE_BLACK_KINGSIDE,
            (Color::Black, CastleSide::Queenside) => CASTLE_BLACK_QUEENSIDE,
        }
    }
}

#[inline]
pub const fn can_castle(rights: CastlingRights, color: Color, side: CastleSide) -> bool {
    rights & side.flag(color) != 0
}

/// Outcome classification recomputed after every applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Playing,
    Check,
    Checkmate,
    Stalemate,
    Draw,
}

impl GameStatus {
    /// No further moves are accepted once a terminal status is reached.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            GameStatus::Checkmate | GameStatus::Stalemate | GameStatus::Draw
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawReason {
    FiftyMoveRule,
    InsufficientMaterial,
}
