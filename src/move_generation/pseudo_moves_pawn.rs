use crate::game_state::chess_types::{move_board_location, BoardLocation, Piece};
use crate::game_state::game_state::GameState;
use crate::moves::chess_move::ChessMove;

pub fn generate_pawn_moves(
    game_state: &GameState,
    start: BoardLocation,
    piece: Piece,
    out: &mut Vec<ChessMove>,
) {
    let forward = piece.color.pawn_direction();

    if let Ok(one_step) = move_board_location(start, forward, 0) {
        if game_state.piece_on(one_step).is_none() {
            out.push(ChessMove::new(start, one_step, piece, &game_state.grid));

            if start.0 == piece.color.pawn_start_row() {
                if let Ok(two_step) = move_board_location(start, 2 * forward, 0) {
                    if game_state.piece_on(two_step).is_none() {
                        out.push(ChessMove::new(start, two_step, piece, &game_state.grid));
                    }
                }
            }
        }
    }

    // Diagonal captures, plus the en-passant capture onto the (empty) target
    // square left behind by an enemy two-square advance.
    for d_col in [-1i8, 1i8] {
        let Ok(target) = move_board_location(start, forward, d_col) else {
            continue;
        };
        match game_state.piece_on(target) {
            Some(occupant) if occupant.color != piece.color => {
                out.push(ChessMove::new(start, target, piece, &game_state.grid))
            }
            None if game_state.en_passant_target == Some(target) => {
                out.push(ChessMove::new_en_passant(start, target, piece))
            }
            _ => {}
        }
    }
}
