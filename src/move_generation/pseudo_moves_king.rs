use crate::game_state::chess_rules::KING_OFFSETS;
use crate::game_state::chess_types::{BoardLocation, Piece};
use crate::game_state::game_state::GameState;
use crate::move_generation::pseudo_move_shared::offset_moves;
use crate::moves::chess_move::ChessMove;

/// The eight adjacent squares. Castling candidates are produced by the
/// legality filter, which owns the castle safety rules.
pub fn generate_king_moves(
    game_state: &GameState,
    start: BoardLocation,
    piece: Piece,
    out: &mut Vec<ChessMove>,
) {
    offset_moves(game_state, start, piece, &KING_OFFSETS, out);
}
