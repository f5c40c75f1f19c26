use crate::game_state::chess_rules::BISHOP_DIRECTIONS;
use crate::game_state::chess_types::{BoardLocation, Piece};
use crate::game_state::game_state::GameState;
use crate::move_generation::pseudo_move_shared::slide_moves;
use crate::moves::chess_move::ChessMove;

pub fn generate_bishop_moves(
    game_state: &GameState,
    start: BoardLocation,
    piece: Piece,
    out: &mut Vec<ChessMove>,
) {
    slide_moves(game_state, start, piece, &BISHOP_DIRECTIONS, out);
}
