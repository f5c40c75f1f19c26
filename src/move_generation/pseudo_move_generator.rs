//! Board-scan dispatch for pseudo-legal move generation.
//!
//! Pseudo-legal means: obeys piece-movement geometry and ownership, ignores
//! whether the mover's own king ends up attacked. The legality filter layers
//! king safety (and castling) on top of this.

use crate::game_state::chess_types::{Color, PieceKind};
use crate::game_state::game_state::GameState;
use crate::move_generation::pseudo_moves_bishop::generate_bishop_moves;
use crate::move_generation::pseudo_moves_king::generate_king_moves;
use crate::move_generation::pseudo_moves_knight::generate_knight_moves;
use crate::move_generation::pseudo_moves_pawn::generate_pawn_moves;
use crate::move_generation::pseudo_moves_queen::generate_queen_moves;
use crate::move_generation::pseudo_moves_rook::generate_rook_moves;
use crate::moves::chess_move::ChessMove;

/// Enumerates every pseudo-legal move for `side`.
///
/// Taking the side explicitly (instead of flipping `side_to_move` on shared
/// state) keeps this a stateless query, which the attacked-square primitive
/// relies on.
pub fn generate_pseudo_legal_moves(game_state: &GameState, side: Color) -> Vec<ChessMove> {
    let mut moves = Vec::with_capacity(64);

    for row in 0..8i8 {
        for col in 0..8i8 {
            let Some(piece) = game_state.piece_on((row, col)) else {
                continue;
            };
            if piece.color != side {
                continue;
            }
            match piece.kind {
                PieceKind::Pawn => generate_pawn_moves(game_state, (row, col), piece, &mut moves),
                PieceKind::Knight => {
                    generate_knight_moves(game_state, (row, col), piece, &mut moves)
                }
                PieceKind::Bishop => {
                    generate_bishop_moves(game_state, (row, col), piece, &mut moves)
                }
                PieceKind::Rook => generate_rook_moves(game_state, (row, col), piece, &mut moves),
                PieceKind::Queen => generate_queen_moves(game_state, (row, col), piece, &mut moves),
                PieceKind::King => generate_king_moves(game_state, (row, col), piece, &mut moves),
            }
        }
    }

    moves
}

#[cfg(test)]
mod tests {
    use super::generate_pseudo_legal_moves;
    use crate::game_state::chess_types::Color;
    use crate::game_state::game_state::GameState;

    #[test]
    fn starting_position_has_twenty_pseudo_legal_moves_per_side() {
        let game = GameState::new_game();
        assert_eq!(generate_pseudo_legal_moves(&game, Color::Light).len(), 20);
        assert_eq!(generate_pseudo_legal_moves(&game, Color::Dark).len(), 20);
    }

    #[test]
    fn cornered_knight_has_two_moves() {
        let game = GameState::from_fen("N6k/8/8/8/8/8/8/7K w - - 0 1").expect("fen parses");
        let moves: Vec<_> = generate_pseudo_legal_moves(&game, Color::Light)
            .into_iter()
            .filter(|m| m.start == (0, 0))
            .collect();
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().any(|m| m.stop == (1, 2)));
        assert!(moves.iter().any(|m| m.stop == (2, 1)));
    }

    #[test]
    fn rays_stop_at_blockers_and_include_one_capture() {
        // Rook on d4 with a friendly pawn on d6 and an enemy pawn on f4.
        let game =
            GameState::from_fen("7k/8/3P4/8/3R1p2/8/8/7K w - - 0 1").expect("fen parses");
        let rook_moves: Vec<_> = generate_pseudo_legal_moves(&game, Color::Light)
            .into_iter()
            .filter(|m| m.start == (4, 3))
            .collect();
        // Up: d5 only (d6 friendly). Down: d3, d2, d1. Left: a4..c4.
        // Right: e4 plus the f4 capture.
        assert_eq!(rook_moves.len(), 9);
        assert!(rook_moves
            .iter()
            .any(|m| m.stop == (4, 5) && m.piece_captured.is_some()));
        assert!(!rook_moves.iter().any(|m| m.stop == (2, 3)));
        assert!(!rook_moves.iter().any(|m| m.stop == (4, 6)));
    }

    #[test]
    fn pawns_capture_diagonally_only() {
        // Light pawn on e4 faced by a dark pawn on e5 and a dark pawn on d5.
        let game =
            GameState::from_fen("7k/8/8/3pp3/4P3/8/8/7K w - - 0 1").expect("fen parses");
        let pawn_moves: Vec<_> = generate_pseudo_legal_moves(&game, Color::Light)
            .into_iter()
            .filter(|m| m.start == (4, 4))
            .collect();
        assert_eq!(pawn_moves.len(), 1);
        assert_eq!(pawn_moves[0].stop, (3, 3));
        assert!(pawn_moves[0].piece_captured.is_some());
    }
}
