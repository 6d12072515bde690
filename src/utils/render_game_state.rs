//! Terminal-oriented board renderer.
//!
//! Draws the board from white's side (row 0, rank 8, at the top) using
//! Unicode chess glyphs or plain diagram letters.

use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PieceStyle {
    #[default]
    Unicode,
    Ascii,
}

/// Render the board with rank and file labels. Squares in `highlights` are
/// drawn as `*` when empty.
pub fn render_board(board: &Board, style: PieceStyle, highlights: &[Position]) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in 0..8u8 {
        let rank = char::from(b'8' - row);
        out.push(rank);
        out.push(' ');

        for col in 0..8u8 {
            let position = Position::new(row, col);
            let cell = match board.get(position) {
                Some(piece) => piece_symbol(piece, style),
                None if highlights.contains(&position) => '*',
                None => match style {
                    PieceStyle::Unicode => '·',
                    PieceStyle::Ascii => '.',
                },
            };
            out.push(cell);

            if col < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

/// Board plus selection highlights and the status line.
pub fn render_game_state(game_state: &GameState, style: PieceStyle) -> String {
    format!(
        "{}\n{}",
        render_board(&game_state.board, style, &game_state.possible_moves),
        game_state.status_message()
    )
}

pub fn piece_symbol(piece: Piece, style: PieceStyle) -> char {
    if style == PieceStyle::Ascii {
        return piece.letter();
    }

    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}
