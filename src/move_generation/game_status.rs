//! Game-status evaluation, recomputed from scratch after every move.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::has_any_legal_move;

/// Classify the position for the side to move. Mate and stalemate are
/// decided before any draw rule.
pub fn evaluate_status(game_state: &GameState) -> GameStatus {
    let in_check = is_king_in_check(&game_state.board, game_state.current_player);
    let can_move = has_any_legal_move(game_state);

    if !can_move {
        return if in_check {
            GameStatus::Checkmate
        } else {
            GameStatus::Stalemate
        };
    }

    if draw_reason(game_state).is_some() {
        return GameStatus::Draw;
    }

    if in_check {
        GameStatus::Check
    } else {
        GameStatus::Playing
    }
}

/// Which draw rule applies, if any. The fifty-move rule wins when both do.
pub fn draw_reason(game_state: &GameState) -> Option<DrawReason> {
    let config = &game_state.config;
    if game_state.half_move_clock >= config.fifty_move_limit {
        return Some(DrawReason::FiftyMoveRule);
    }
    if config.detect_insufficient_material && is_insufficient_material(&game_state.board) {
        return Some(DrawReason::InsufficientMaterial);
    }
    None
}

/// At most three pieces, both kings present, and the one extra piece (if
/// any) is a bishop or a knight.
pub fn is_insufficient_material(board: &Board) -> bool {
    if board.piece_count() > 3 {
        return false;
    }
    if board.king_position(Color::White).is_none() || board.king_position(Color::Black).is_none() {
        return false;
    }
    board.pieces().all(|(_, piece)| {
        matches!(
            piece.kind,
            PieceKind::King | PieceKind::Bishop | PieceKind::Knight
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::RulesConfig;

    fn game(rows: [&str; 8], to_move: Color) -> GameState {
        let board = Board::from_diagram(rows).expect("diagram should parse");
        GameState::from_board(board, to_move).expect("board should hold both kings")
    }

    #[test]
    fn starting_position_is_playing() {
        assert_eq!(evaluate_status(&GameState::new_game()), GameStatus::Playing);
    }

    #[test]
    fn fools_mate_is_checkmate() {
        let mated = game(
            [
                "rnb.kbnr", "pppp.ppp", "........", "....p...", "......Pq", ".....P..", "PPPPP..P",
                "RNBQKBNR",
            ],
            Color::White,
        );
        assert_eq!(evaluate_status(&mated), GameStatus::Checkmate);

        let without_queen = game(
            [
                "rnb.kbnr", "pppp.ppp", "........", "....p...", "......P.", ".....P..", "PPPPP..P",
                "RNBQKBNR",
            ],
            Color::White,
        );
        assert_ne!(evaluate_status(&without_queen), GameStatus::Checkmate);
        assert_eq!(evaluate_status(&without_queen), GameStatus::Playing);
    }

    #[test]
    fn check_with_an_escape_is_check() {
        let g = game(
            [
                "....k...", "........", "........", "........", "........", "........", "........",
                "r...K...",
            ],
            Color::White,
        );
        assert_eq!(evaluate_status(&g), GameStatus::Check);
    }

    #[test]
    fn cornered_king_without_moves_is_stalemate() {
        let g = game(
            [
                "k.......", "..Q.....", ".K......", "........", "........", "........", "........",
                "........",
            ],
            Color::Black,
        );
        assert_eq!(evaluate_status(&g), GameStatus::Stalemate);
    }

    #[test]
    fn bare_kings_and_single_minor_pieces_are_insufficient() {
        let bare = game(
            [
                "....k...", "........", "........", "........", "........", "........", "........",
                "....K...",
            ],
            Color::White,
        );
        assert_eq!(evaluate_status(&bare), GameStatus::Draw);
        assert_eq!(draw_reason(&bare), Some(DrawReason::InsufficientMaterial));

        let knight = game(
            [
                "....k...", "........", "........", "........", "...N....", "........", "........",
                "....K...",
            ],
            Color::Black,
        );
        assert_eq!(evaluate_status(&knight), GameStatus::Draw);

        let rook = game(
            [
                "....k...", "........", "........", "........", "...R....", "........", "........",
                "....K...",
            ],
            Color::Black,
        );
        assert_eq!(evaluate_status(&rook), GameStatus::Playing);

        let two_bishops = game(
            [
                "....k...", "........", "........", "........", "...BB...", "........", "........",
                "....K...",
            ],
            Color::Black,
        );
        assert!(!is_insufficient_material(&two_bishops.board));
    }

    #[test]
    fn fifty_move_clock_draws_and_respects_config() {
        let mut g = GameState::new_game();
        g.half_move_clock = 100;
        assert_eq!(evaluate_status(&g), GameStatus::Draw);
        assert_eq!(draw_reason(&g), Some(DrawReason::FiftyMoveRule));

        g.half_move_clock = 99;
        assert_eq!(evaluate_status(&g), GameStatus::Playing);

        g.config = RulesConfig {
            fifty_move_limit: 20,
            ..RulesConfig::default()
        };
        g.half_move_clock = 20;
        assert_eq!(evaluate_status(&g), GameStatus::Draw);
    }

    #[test]
    fn insufficient_material_check_can_be_disabled() {
        let mut g = game(
            [
                "....k...", "........", "........", "........", "........", "........", "........",
                "....K...",
            ],
            Color::White,
        );
        g.config.detect_insufficient_material = false;
        assert_eq!(evaluate_status(&g), GameStatus::Playing);
    }
}
