use crate::game_state::chess_rules::KNIGHT_OFFSETS;
use crate::game_state::chess_types::{BoardLocation, Piece};
use crate::game_state::game_state::GameState;
use crate::move_generation::pseudo_move_shared::offset_moves;
use crate::moves::chess_move::ChessMove;

pub fn generate_knight_moves(
    game_state: &GameState,
    start: BoardLocation,
    piece: Piece,
    out: &mut Vec<ChessMove>,
) {
    offset_moves(game_state, start, piece, &KNIGHT_OFFSETS, out);
}
