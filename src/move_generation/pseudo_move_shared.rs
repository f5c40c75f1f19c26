//! Shared walking routines for the piece-wise pseudo-legal generators.
//!
//! Rays and fixed offsets are the only two movement shapes in the game, so
//! every piece rule reduces to one of these two helpers plus a direction
//! table.

use crate::game_state::chess_types::{move_board_location, BoardLocation, Piece};
use crate::game_state::game_state::GameState;
use crate::moves::chess_move::ChessMove;

/// Walks each direction until blocked, accumulating empty-square moves and a
/// final capture when the blocker belongs to the opponent.
pub fn slide_moves(
    game_state: &GameState,
    start: BoardLocation,
    piece: Piece,
    directions: &[(i8, i8)],
    out: &mut Vec<ChessMove>,
) {
    for &(d_row, d_col) in directions {
        let mut cursor = start;
        while let Ok(next) = move_board_location(cursor, d_row, d_col) {
            match game_state.piece_on(next) {
                None => {
                    out.push(ChessMove::new(start, next, piece, &game_state.grid));
                    cursor = next;
                }
                Some(blocker) => {
                    if blocker.color != piece.color {
                        out.push(ChessMove::new(start, next, piece, &game_state.grid));
                    }
                    break;
                }
            }
        }
    }
}

/// Tries each fixed offset once; the target must be on-board and not held by
/// a friendly piece.
pub fn offset_moves(
    game_state: &GameState,
    start: BoardLocation,
    piece: Piece,
    offsets: &[(i8, i8)],
    out: &mut Vec<ChessMove>,
) {
    for &(d_row, d_col) in offsets {
        let Ok(next) = move_board_location(start, d_row, d_col) else {
            continue;
        };
        match game_state.piece_on(next) {
            None => out.push(ChessMove::new(start, next, piece, &game_state.grid)),
            Some(occupant) if occupant.color != piece.color => {
                out.push(ChessMove::new(start, next, piece, &game_state.grid))
            }
            Some(_) => {}
        }
    }
}
