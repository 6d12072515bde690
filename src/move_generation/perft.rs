//! Perft: count leaf nodes of the legal move tree to a fixed depth.
//!
//! Node counts from well-known positions pin down the whole generation
//! pipeline (pseudo-legal moves, castling, en passant, the legality filter)
//! end to end.

use crate::game_state::chess_types::GameState;
use crate::move_generation::legal_move_apply::advance_position;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::{GeneratedMove, MoveGenerator};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

pub fn perft<G: MoveGenerator>(generator: &G, game_state: &GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in generator.generate_legal_moves(game_state) {
        let next = advance_position(game_state, &mv.chess_move);
        if depth == 1 {
            total.merge(leaf_counts(generator, &mv, &next));
        } else {
            total.merge(perft(generator, &next, depth - 1));
        }
    }
    total
}

/// Perft with the crate's legality-filtered generator.
pub fn perft_legal(game_state: &GameState, depth: u8) -> PerftCounts {
    perft(&LegalMoveGenerator, game_state, depth)
}

fn leaf_counts<G: MoveGenerator>(generator: &G, mv: &GeneratedMove, next: &GameState) -> PerftCounts {
    let chess_move = &mv.chess_move;
    let gives_check = is_king_in_check(&mv.board_after_move, next.current_player);
    let is_checkmate = gives_check && generator.generate_legal_moves(next).is_empty();

    PerftCounts {
        nodes: 1,
        captures: usize::from(chess_move.is_capture()),
        en_passant: usize::from(chess_move.is_en_passant),
        castles: usize::from(chess_move.is_castle),
        promotions: usize::from(chess_move.is_promotion),
        checks: usize::from(gives_check),
        checkmates: usize::from(is_checkmate),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Board, Color, CASTLE_ALL};

    /// Generates nothing, so every node looks terminal.
    struct NullMoveGenerator;

    impl MoveGenerator for NullMoveGenerator {
        fn generate_legal_moves(&self, _game_state: &GameState) -> Vec<GeneratedMove> {
            Vec::new()
        }
    }

    fn from_diagram(rows: [&str; 8], to_move: Color) -> GameState {
        let board = Board::from_diagram(rows).expect("diagram should parse");
        GameState::from_board(board, to_move).expect("both kings present")
    }

    #[test]
    fn depth_zero_counts_a_single_node() {
        let counts = perft_legal(&GameState::new_game(), 0);
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn null_generator_yields_no_leaves() {
        let counts = perft(&NullMoveGenerator, &GameState::new_game(), 2);
        assert_eq!(counts, PerftCounts::default());
    }

    #[test]
    fn starting_position_node_counts() {
        let game = GameState::new_game();
        assert_eq!(perft_legal(&game, 1).nodes, 20);
        assert_eq!(perft_legal(&game, 2).nodes, 400);

        let depth3 = perft_legal(&game, 3);
        assert_eq!(depth3.nodes, 8902);
        assert_eq!(depth3.captures, 34);
        assert_eq!(depth3.checks, 12);
        assert_eq!(depth3.checkmates, 0);
    }

    #[test]
    fn kiwipete_exercises_castling_and_en_passant() {
        let mut game = from_diagram(
            [
                "r...k..r", "p.ppqpb.", "bn..pnp.", "...PN...", ".p..P...", "..N..Q.p", "PPPBBPPP",
                "R...K..R",
            ],
            Color::White,
        );
        game.castling_rights = CASTLE_ALL;

        let depth1 = perft_legal(&game, 1);
        assert_eq!(depth1.nodes, 48);
        assert_eq!(depth1.captures, 8);
        assert_eq!(depth1.castles, 2);

        let depth2 = perft_legal(&game, 2);
        assert_eq!(depth2.nodes, 2039);
        assert_eq!(depth2.captures, 351);
        assert_eq!(depth2.en_passant, 1);
        assert_eq!(depth2.castles, 91);
        assert_eq!(depth2.checks, 3);
    }

    #[test]
    fn rook_and_pawn_endgame_node_counts() {
        let game = from_diagram(
            [
                "........", "..p.....", "...p....", "KP.....r", ".R...p.k", "........", "....P.P.",
                "........",
            ],
            Color::White,
        );
        assert_eq!(perft_legal(&game, 1).nodes, 14);
        assert_eq!(perft_legal(&game, 2).nodes, 191);

        let depth3 = perft_legal(&game, 3);
        assert_eq!(depth3.nodes, 2812);
        assert_eq!(depth3.en_passant, 2);
        assert_eq!(depth3.captures, 209);
    }
}
