//! Game snapshot and the move contract the presentation layer consumes.
//!
//! A `GameState` is never edited by a move: `apply_move` returns a brand-new
//! snapshot, so a caller keeping earlier snapshots has its undo history for
//! free.

use log::warn;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::RulesConfig;
use crate::game_state::chess_types::*;
use crate::move_generation::game_status::{draw_reason, evaluate_status};
use crate::move_generation::legal_move_apply;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{legal_destinations_for_square, legal_moves_from};
use crate::moves::move_descriptions::{build_move, ChessMove};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub current_player: Color,

    // --- UI selection cache ---
    pub selected_square: Option<Position>,
    pub possible_moves: Vec<Position>,

    pub game_status: GameStatus,
    pub move_history: Vec<ChessMove>,

    // --- Cumulative rule state ---
    pub en_passant_target: Option<Position>,
    pub castling_rights: CastlingRights,
    pub half_move_clock: u16,
    pub full_move_number: u16,

    pub config: RulesConfig,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard starting position, white to move, full castling rights.
    pub fn new_game() -> Self {
        Self::new_game_with_config(RulesConfig::default())
    }

    pub fn new_game_with_config(config: RulesConfig) -> Self {
        Self {
            board: Board::starting(),
            current_player: Color::White,
            selected_square: None,
            possible_moves: Vec::new(),
            game_status: GameStatus::Playing,
            move_history: Vec::new(),
            en_passant_target: None,
            castling_rights: CASTLE_ALL,
            half_move_clock: 0,
            full_move_number: 1,
            config,
        }
    }

    /// Start from an arbitrary board with no castling rights and no
    /// en-passant target. The board must hold exactly one king per color, and
    /// the side not to move must not be in check, since its king could then
    /// be captured.
    pub fn from_board(board: Board, current_player: Color) -> Result<Self, ChessErrors> {
        for color in [Color::White, Color::Black] {
            if board.count_of(Piece::new(PieceKind::King, color)) != 1 {
                return Err(ChessErrors::MissingKing(color));
            }
        }
        if is_king_in_check(&board, current_player.opposite()) {
            return Err(ChessErrors::KingCapturable(current_player.opposite()));
        }

        let mut state = Self {
            board,
            current_player,
            castling_rights: 0,
            ..Self::new_game()
        };
        state.game_status = evaluate_status(&state);
        Ok(state)
    }

    /// Fresh initial state keeping this game's rules configuration.
    pub fn reset(&self) -> Self {
        Self::new_game_with_config(self.config)
    }

    /// Legal destinations of the piece on `square`; empty if the square is
    /// empty or holds a piece of the side not to move.
    pub fn legal_destinations(&self, square: Position) -> Vec<Position> {
        legal_destinations_for_square(self, square)
    }

    /// Apply the move `from` -> `to`, promoting to `promotion_choice` (or the
    /// configured default) when a pawn reaches the last row.
    pub fn apply_move(
        &self,
        from: Position,
        to: Position,
        promotion_choice: Option<PieceKind>,
    ) -> Result<GameState, ChessErrors> {
        if self.game_status.is_terminal() {
            warn!("rejected {from}{to}: game already over");
            return Err(ChessErrors::GameIsOver(self.game_status));
        }
        if let Some(kind) = promotion_choice {
            if !kind.is_promotion_target() {
                warn!("rejected {from}{to}: cannot promote to {kind:?}");
                return Err(ChessErrors::InvalidPromotionPiece(kind));
            }
        }

        let Some(piece) = self.board.get(from) else {
            warn!("rejected {from}{to}: no piece on {from}");
            return Err(ChessErrors::NoPieceOnSquare(from));
        };
        if piece.color != self.current_player {
            warn!("rejected {from}{to}: not {}'s piece", self.current_player.name());
            return Err(ChessErrors::NotSideToMove(from));
        }

        if !legal_moves_from(self, from)
            .iter()
            .any(|generated| generated.chess_move.to == to)
        {
            warn!("rejected illegal move {from}{to}");
            return Err(ChessErrors::IllegalMove { from, to });
        }

        let promotion = promotion_choice.unwrap_or(self.config.default_promotion);
        let chess_move = build_move(&self.board, from, to, self.en_passant_target, Some(promotion))
            .ok_or(ChessErrors::NoPieceOnSquare(from))?;

        Ok(legal_move_apply::apply_move(self, &chess_move))
    }

    /// Select `square` for the UI. A piece of the side to move fills the
    /// selection cache with its legal destinations; anything else clears it.
    pub fn select_square(&self, square: Position) -> GameState {
        let mut next = self.clone();
        let owns_piece = self
            .board
            .get(square)
            .map_or(false, |piece| piece.color == self.current_player);

        if owns_piece && !self.game_status.is_terminal() {
            next.selected_square = Some(square);
            next.possible_moves = self.legal_destinations(square);
        } else {
            next.selected_square = None;
            next.possible_moves.clear();
        }
        next
    }

    pub fn clear_selection(&self) -> GameState {
        let mut next = self.clone();
        next.selected_square = None;
        next.possible_moves.clear();
        next
    }

    #[inline]
    pub fn is_in_check(&self) -> bool {
        is_king_in_check(&self.board, self.current_player)
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.game_status.is_terminal()
    }

    pub fn draw_reason(&self) -> Option<DrawReason> {
        if self.game_status == GameStatus::Draw {
            draw_reason(self)
        } else {
            None
        }
    }

    pub fn last_move(&self) -> Option<&ChessMove> {
        self.move_history.last()
    }

    /// Human-readable status line for display.
    pub fn status_message(&self) -> String {
        let side = self.current_player.name();
        match self.game_status {
            GameStatus::Playing => format!("{side} to move"),
            GameStatus::Check => format!("{side} is in check"),
            GameStatus::Checkmate => {
                format!("Checkmate - {} wins", self.current_player.opposite().name())
            }
            GameStatus::Stalemate => "Stalemate".to_owned(),
            GameStatus::Draw => match self.draw_reason() {
                Some(DrawReason::FiftyMoveRule) => "Draw by fifty-move rule".to_owned(),
                Some(DrawReason::InsufficientMaterial) => {
                    "Draw by insufficient material".to_owned()
                }
                None => "Draw".to_owned(),
            },
        }
    }
}
