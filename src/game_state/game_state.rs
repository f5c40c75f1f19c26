//! Core position state representation.
//!
//! `GameState` is the central model for the engine. It stores the 8x8 grid,
//! turn/terminal flags, the king-location cache, castling rights, the
//! en-passant target, and the history stacks used by make/undo workflows.

use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::moves::chess_move::ChessMove;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

/// Authoritative game state with full undo support.
///
/// The grid is the sole ground truth for piece placement; `king_location` is
/// a derived index (by `Color::index()`) kept consistent by every mutation
/// path. `castling_rights_history` always holds one more entry than
/// `move_history` (the pre-game snapshot).
#[derive(Debug, Clone)]
pub struct GameState {
    pub grid: BoardGrid,
    pub side_to_move: Color,
    pub king_location: [BoardLocation; 2],
    pub castling_rights: CastlingRights,
    pub en_passant_target: Option<BoardLocation>,
    pub move_history: Vec<ChessMove>,
    pub castling_rights_history: Vec<CastlingRights>,

    // Terminal flags, valid only immediately after the legality filter ran.
    pub checkmate: bool,
    pub stalemate: bool,
}

impl GameState {
    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting position string should always parse")
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, crate::errors::RulesError> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn piece_on(&self, location: BoardLocation) -> Option<Piece> {
        piece_on_grid(&self.grid, location)
    }

    #[inline]
    fn set_square(&mut self, location: BoardLocation, contents: Option<Piece>) {
        self.grid[location.0 as usize][location.1 as usize] = contents;
    }

    /// Executes a previously-generated move. Always succeeds for a
    /// well-formed move; legality is the caller's responsibility.
    pub fn apply_move(&mut self, chess_move: &ChessMove) {
        self.set_square(chess_move.start, None);
        self.set_square(chess_move.stop, Some(chess_move.piece_moved));

        if chess_move.piece_moved.kind == PieceKind::King {
            self.king_location[chess_move.piece_moved.color.index()] = chess_move.stop;
        }

        if chess_move.is_promotion {
            self.set_square(
                chess_move.stop,
                Some(Piece {
                    color: chess_move.piece_moved.color,
                    kind: PieceKind::Queen,
                }),
            );
        }

        if chess_move.is_en_passant {
            // The captured pawn sits beside the start square, not on the
            // destination square.
            self.set_square((chess_move.start.0, chess_move.stop.1), None);
        }

        self.en_passant_target = chess_move.en_passant_target_created();

        if chess_move.is_castle {
            if chess_move.stop.1 - chess_move.start.1 == 2 {
                // Kingside: the rook starts one file beyond the king's landing
                // square and lands on the file the king crossed.
                let rook = self.piece_on((chess_move.stop.0, chess_move.stop.1 + 1));
                self.set_square((chess_move.stop.0, chess_move.stop.1 - 1), rook);
                self.set_square((chess_move.stop.0, chess_move.stop.1 + 1), None);
            } else {
                // Queenside: the rook starts two files beyond the landing
                // square.
                let rook = self.piece_on((chess_move.stop.0, chess_move.stop.1 - 2));
                self.set_square((chess_move.stop.0, chess_move.stop.1 + 1), rook);
                self.set_square((chess_move.stop.0, chess_move.stop.1 - 2), None);
            }
        }

        self.update_castling_rights(chess_move);
        self.castling_rights_history.push(self.castling_rights);

        self.side_to_move = self.side_to_move.opposite();
        self.move_history.push(chess_move.clone());
    }

    /// Reverses the most recent move, restoring the state bit-identical to
    /// the moment before the matching `apply_move`. No-op on empty history.
    pub fn undo_move(&mut self) {
        let Some(chess_move) = self.move_history.pop() else {
            return;
        };

        self.set_square(chess_move.start, Some(chess_move.piece_moved));
        self.set_square(chess_move.stop, chess_move.piece_captured);

        if chess_move.piece_moved.kind == PieceKind::King {
            self.king_location[chess_move.piece_moved.color.index()] = chess_move.start;
        }

        if chess_move.is_en_passant {
            // The pawn was captured beside the start square; the destination
            // square was empty before the move.
            self.set_square(chess_move.stop, None);
            self.set_square((chess_move.start.0, chess_move.stop.1), chess_move.piece_captured);
        }

        if chess_move.is_castle {
            if chess_move.stop.1 - chess_move.start.1 == 2 {
                let rook = self.piece_on((chess_move.stop.0, chess_move.stop.1 - 1));
                self.set_square((chess_move.stop.0, chess_move.stop.1 + 1), rook);
                self.set_square((chess_move.stop.0, chess_move.stop.1 - 1), None);
            } else {
                let rook = self.piece_on((chess_move.stop.0, chess_move.stop.1 + 1));
                self.set_square((chess_move.stop.0, chess_move.stop.1 - 2), rook);
                self.set_square((chess_move.stop.0, chess_move.stop.1 + 1), None);
            }
        }

        self.castling_rights_history.pop();
        if let Some(rights) = self.castling_rights_history.last() {
            self.castling_rights = *rights;
        }

        // The en-passant target lives for exactly one move, so its value is
        // fully determined by whichever move is now most recent.
        self.en_passant_target = self
            .move_history
            .last()
            .and_then(|last| last.en_passant_target_created());

        self.side_to_move = self.side_to_move.opposite();
    }

    fn update_castling_rights(&mut self, chess_move: &ChessMove) {
        let color = chess_move.piece_moved.color;
        match chess_move.piece_moved.kind {
            PieceKind::King => self.castling_rights.revoke_both(color),
            PieceKind::Rook => {
                if chess_move.start == (color.back_rank(), 0) {
                    self.castling_rights.revoke_queenside(color);
                } else if chess_move.start == (color.back_rank(), 7) {
                    self.castling_rights.revoke_kingside(color);
                }
            }
            _ => {}
        }
    }
}
