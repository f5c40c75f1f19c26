//! Engine abstraction layer.
//!
//! Defines the common selection interface so different engine strategies can
//! be swapped behind one trait by the match harness and by callers driving a
//! game loop.

use crate::game_state::game_state::GameState;
use crate::moves::chess_move::ChessMove;

/// A move selector. `choose_move` receives the already-computed legal moves
/// for the current position; selectors that look ahead simulate on the shared
/// state and must leave it exactly as they found it (paired apply/undo).
///
/// `None` means the selector found no candidate; the caller falls back to
/// random selection.
pub trait Engine {
    fn name(&self) -> &str;

    fn choose_move(
        &mut self,
        game_state: &mut GameState,
        legal_moves: &[ChessMove],
    ) -> Option<ChessMove>;
}
