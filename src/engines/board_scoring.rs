//! Static material scoring used by the move-selection engines.

use crate::game_state::chess_types::PieceKind;
use crate::game_state::game_state::GameState;

/// Score magnitude assigned to a checkmate outcome.
pub const CHECKMATE_SCORE: i32 = 1000;

/// Score assigned to a stalemate outcome (a draw is worth nothing).
pub const STALEMATE_SCORE: i32 = 0;

/// Conventional material value of a piece. The king carries no material
/// value; losing it is handled by the terminal scores instead.
pub const fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 1,
        PieceKind::Knight => 3,
        PieceKind::Bishop => 3,
        PieceKind::Rook => 5,
        PieceKind::Queen => 10,
        PieceKind::King => 0,
    }
}

/// Material balance over the whole grid, Light-positive.
pub fn material_score(game_state: &GameState) -> i32 {
    let mut score = 0;
    for row in &game_state.grid {
        for square in row {
            if let Some(piece) = square {
                score += piece.color.sign() * piece_value(piece.kind);
            }
        }
    }
    score
}
