use crate::game_state::chess_types::{BoardLocation, Piece};
use crate::game_state::game_state::GameState;
use crate::move_generation::pseudo_moves_bishop::generate_bishop_moves;
use crate::move_generation::pseudo_moves_rook::generate_rook_moves;
use crate::moves::chess_move::ChessMove;

/// Queen movement is the union of the rook and bishop rays.
pub fn generate_queen_moves(
    game_state: &GameState,
    start: BoardLocation,
    piece: Piece,
    out: &mut Vec<ChessMove>,
) {
    generate_rook_moves(game_state, start, piece, out);
    generate_bishop_moves(game_state, start, piece, out);
}
