//! One-ply greedy selection against a rational opponent.
//!
//! For every candidate the engine plays it out, lets the opponent pick its
//! best (score-maximizing) reply, and keeps the candidate whose best reply is
//! least damaging. Candidates are shuffled first so equal-scoring moves do
//! not always resolve to the same board order.

use rand::seq::SliceRandom;

use crate::engines::board_scoring::{material_score, CHECKMATE_SCORE, STALEMATE_SCORE};
use crate::engines::engine_trait::Engine;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_filter::generate_legal_moves;
use crate::moves::chess_move::ChessMove;

pub struct GreedyEngine;

impl GreedyEngine {
    pub fn new() -> Self {
        GreedyEngine
    }
}

impl Default for GreedyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for GreedyEngine {
    fn name(&self) -> &str {
        "QuinceChess Greedy"
    }

    fn choose_move(
        &mut self,
        game_state: &mut GameState,
        legal_moves: &[ChessMove],
    ) -> Option<ChessMove> {
        // Both sides maximize the same score axis; the sign flips it for the
        // second side.
        let turn_multiplier = game_state.side_to_move.sign();

        let mut candidates = legal_moves.to_vec();
        let mut rng = rand::rng();
        candidates.shuffle(&mut rng);

        let mut best_reply_floor = CHECKMATE_SCORE;
        let mut best_candidate: Option<ChessMove> = None;

        for candidate in candidates {
            game_state.apply_move(&candidate);
            let replies = generate_legal_moves(game_state);

            // A candidate that leaves the opponent without replies keeps the
            // floor value, which makes delivered mates the strongest choice.
            let mut opponents_best = -CHECKMATE_SCORE;
            for reply in &replies {
                game_state.apply_move(reply);
                // Refresh the terminal flags for the position after the
                // reply before scoring it.
                let _continuations = generate_legal_moves(game_state);
                let score = if game_state.checkmate {
                    CHECKMATE_SCORE
                } else if game_state.stalemate {
                    STALEMATE_SCORE
                } else {
                    // Negated: this is one ply past the candidate.
                    -turn_multiplier * material_score(game_state)
                };
                if score > opponents_best {
                    opponents_best = score;
                }
                game_state.undo_move();
            }
            game_state.undo_move();

            if opponents_best < best_reply_floor {
                best_reply_floor = opponents_best;
                best_candidate = Some(candidate);
            }
        }

        best_candidate
    }
}
