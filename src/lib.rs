//! Crate root module declarations for the Plum Rules chess rules engine.
//!
//! Exposes the board model and game-state contract, per-piece movement,
//! the legality/status pipeline, and text utilities so the binary, tests,
//! benches, and any presentation layer can import stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod directions;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_descriptions;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod game_status;
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_moves_castling;
    pub mod move_generator;
    pub mod perft;
    pub mod pseudo_legal;
}

pub mod utils {
    pub mod algebraic;
    pub mod render_game_state;
}
