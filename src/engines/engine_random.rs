//! Uniform random move selection.
//!
//! The weakest selector, and the fallback every other selector leans on.
//! Also handy for diagnostics and integration tests.

use rand::prelude::IndexedRandom;

use crate::engines::engine_trait::Engine;
use crate::game_state::game_state::GameState;
use crate::moves::chess_move::ChessMove;

pub struct RandomEngine;

impl RandomEngine {
    pub fn new() -> Self {
        RandomEngine
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "QuinceChess Random"
    }

    fn choose_move(
        &mut self,
        _game_state: &mut GameState,
        legal_moves: &[ChessMove],
    ) -> Option<ChessMove> {
        let mut rng = rand::rng();
        legal_moves.choose(&mut rng).cloned()
    }
}
