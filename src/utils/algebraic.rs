//! Conversions between board positions and algebraic coordinates.
//!
//! Row 0 is rank 8 and row 7 is rank 1, so `e2` is `Position { row: 6, col: 4 }`.

use std::fmt;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{PieceKind, Position};

/// Convert an algebraic square (for example: "e4") to a position.
pub fn algebraic_to_position(square: &str) -> Result<Position, ChessErrors> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraic(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraic(square.to_owned()));
    }

    Ok(Position::new(7 - (rank - b'1'), file - b'a'))
}

/// Convert a position to its algebraic square (for example: "e4").
pub fn position_to_algebraic(position: Position) -> String {
    let file_char = char::from(b'a' + position.col);
    let rank_char = char::from(b'1' + (7 - position.row));
    format!("{file_char}{rank_char}")
}

/// Parse a move in coordinate notation: `e2e4`, `e2 e4`, or `e7e8q` with an
/// optional trailing promotion letter.
pub fn parse_coordinate_move(
    text: &str,
) -> Result<(Position, Position, Option<PieceKind>), ChessErrors> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    if !compact.is_ascii() || (compact.len() != 4 && compact.len() != 5) {
        return Err(ChessErrors::InvalidAlgebraic(text.to_owned()));
    }

    let from = algebraic_to_position(&compact[0..2])?;
    let to = algebraic_to_position(&compact[2..4])?;
    let promotion = match compact[4..].chars().next() {
        Some(letter) => Some(
            PieceKind::from_letter(letter)
                .ok_or_else(|| ChessErrors::InvalidAlgebraic(text.to_owned()))?,
        ),
        None => None,
    };

    Ok((from, to, promotion))
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&position_to_algebraic(*self))
    }
}
