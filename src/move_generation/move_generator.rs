use crate::game_state::chess_types::{Board, GameState};
use crate::moves::move_descriptions::ChessMove;

/// A legal move together with the board it produces, which the legality
/// filter has already computed.
#[derive(Debug, Clone)]
pub struct GeneratedMove {
    pub chess_move: ChessMove,
    pub board_after_move: Board,
}

pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, game_state: &GameState) -> Vec<GeneratedMove>;
}
