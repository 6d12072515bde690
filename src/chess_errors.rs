//! Errors used throughout the rules engine.
//!
//! `ChessErrors` is the single error type returned by the fallible parts of
//! the crate: the `GameState` move contract, algebraic parsing, and board
//! construction. The pure board-level functions (move generation, attack
//! detection, board application) are total and never return it.
//!
//! Usage guidelines:
//! - Input-style variants (`InvalidAlgebraic`, `InvalidBoardDiagram`,
//!   `InvalidPromotionPiece`) are recoverable and suitable for presenting to
//!   end users.
//! - Move-contract variants (`NoPieceOnSquare`, `NotSideToMove`,
//!   `IllegalMove`, `GameIsOver`) mean the caller offered a move that was not
//!   in `GameState::legal_destinations`; a well-behaved UI never triggers them.
//! - `MissingKing` and `KingCapturable` reject boards that would let a king
//!   disappear; they are only produced when constructing a `GameState`.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::{Color, GameStatus, PieceKind, Position};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// The requested origin square is empty.
    NoPieceOnSquare(Position),

    /// The origin square holds a piece of the side not to move.
    NotSideToMove(Position),

    /// The destination is not a legal destination for the piece on `from`.
    IllegalMove { from: Position, to: Position },

    /// A move was requested after the game reached a terminal status.
    GameIsOver(GameStatus),

    /// Promotion to a king or a pawn was requested.
    InvalidPromotionPiece(PieceKind),

    /// A board handed to `GameState::from_board` lacks exactly one king of
    /// this color.
    MissingKing(Color),

    /// A board handed to `GameState::from_board` leaves this color, the side
    /// not to move, in check.
    KingCapturable(Color),

    /// A square or move in coordinate notation failed to parse.
    ///
    /// Payload: the original string.
    InvalidAlgebraic(String),

    /// A row diagram passed to `Board::from_diagram` was malformed.
    InvalidBoardDiagram(String),
}

impl fmt::Display for ChessErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessErrors::NoPieceOnSquare(position) => write!(f, "no piece on {position}"),
            ChessErrors::NotSideToMove(position) => {
                write!(f, "the piece on {position} belongs to the side not to move")
            }
            ChessErrors::IllegalMove { from, to } => write!(f, "illegal move {from}{to}"),
            ChessErrors::GameIsOver(status) => write!(f, "the game is over ({status:?})"),
            ChessErrors::InvalidPromotionPiece(kind) => {
                write!(f, "cannot promote to {kind:?}")
            }
            ChessErrors::MissingKing(color) => {
                write!(f, "board must hold exactly one {} king", color.name())
            }
            ChessErrors::KingCapturable(color) => write!(
                f,
                "the {} king is in check with {} to move",
                color.name(),
                color.opposite().name()
            ),
            ChessErrors::InvalidAlgebraic(text) => write!(f, "invalid algebraic input: {text}"),
            ChessErrors::InvalidBoardDiagram(msg) => write!(f, "invalid board diagram: {msg}"),
        }
    }
}

impl Error for ChessErrors {}
