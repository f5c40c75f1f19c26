//! Crate root module declarations for the Quince Chess rules engine.
//!
//! This file exposes all top-level subsystems (position state, move
//! generation, engines, and utility helpers) so binaries, tests, and external
//! tooling can import stable module paths.

pub mod errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod moves {
    pub mod chess_move;
}

pub mod move_generation {
    pub mod legal_move_filter;
    pub mod perft;
    pub mod pseudo_move_generator;
    pub mod pseudo_move_shared;
    pub mod pseudo_moves_bishop;
    pub mod pseudo_moves_king;
    pub mod pseudo_moves_knight;
    pub mod pseudo_moves_pawn;
    pub mod pseudo_moves_queen;
    pub mod pseudo_moves_rook;
}

pub mod engines {
    pub mod board_scoring;
    pub mod engine_greedy;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod engine_match_harness;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod render_game_state;
}
