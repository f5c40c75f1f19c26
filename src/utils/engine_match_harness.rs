//! Minimal head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other with an optional
//! seeded random opening prefix. Used by tests and the series binary.

use rand::{rngs::StdRng, RngExt, SeedableRng};
use std::time::Instant;

use crate::engines::engine_trait::Engine;
use crate::errors::RulesError;
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_filter::{generate_legal_moves, match_candidate_move};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    LightWinCheckmate,
    DarkWinCheckmate,
    DrawStalemate,
    DrawMaxPlies,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub opening_plies: u8,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 120,
            opening_plies: 4,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_state: GameState,
    pub opening_moves: Vec<String>,
    pub played_moves: Vec<String>,
    pub light_move_count: u32,
    pub dark_move_count: u32,
    pub light_total_time_ns: u128,
    pub dark_total_time_ns: u128,
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
    pub verbose: bool,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 9,
            base_seed: 0,
            per_game: MatchConfig::default(),
            verbose: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub draws: u16,
    pub outcomes: Vec<MatchOutcome>,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        format!(
            "games={} player1_wins={} player2_wins={} draws={}",
            self.games, self.player1_wins, self.player2_wins, self.draws
        )
    }
}

/// Play a single seeded engine-vs-engine match.
///
/// `engine_light` moves first. The opening prefix plays `opening_plies`
/// uniformly random legal moves so repeated runs explore different games.
pub fn play_engine_match(
    engine_light: &mut dyn Engine,
    engine_dark: &mut dyn Engine,
    seed: u64,
    config: &MatchConfig,
) -> Result<MatchResult, RulesError> {
    let mut state = GameState::new_game();
    let mut rng = StdRng::seed_from_u64(seed);

    let mut opening_moves = Vec::<String>::new();
    for _ in 0..config.opening_plies {
        let legal_moves = generate_legal_moves(&mut state);
        if legal_moves.is_empty() {
            break;
        }
        let chosen = legal_moves[rng.random_range(0..legal_moves.len())].clone();
        opening_moves.push(chosen.to_notation());
        state.apply_move(&chosen);
    }

    let mut played_moves = Vec::<String>::new();
    let mut light_move_count = 0u32;
    let mut dark_move_count = 0u32;
    let mut light_total_time_ns = 0u128;
    let mut dark_total_time_ns = 0u128;

    for _ in 0..config.max_plies {
        let legal_moves = generate_legal_moves(&mut state);
        if legal_moves.is_empty() {
            let outcome = if state.checkmate {
                match state.side_to_move {
                    Color::Light => MatchOutcome::DarkWinCheckmate,
                    Color::Dark => MatchOutcome::LightWinCheckmate,
                }
            } else {
                MatchOutcome::DrawStalemate
            };
            return Ok(MatchResult {
                outcome,
                final_state: state,
                opening_moves,
                played_moves,
                light_move_count,
                dark_move_count,
                light_total_time_ns,
                dark_total_time_ns,
            });
        }

        let mover = state.side_to_move;
        let started = Instant::now();
        let chosen = match mover {
            Color::Light => engine_light.choose_move(&mut state, &legal_moves),
            Color::Dark => engine_dark.choose_move(&mut state, &legal_moves),
        };
        let elapsed_ns = started.elapsed().as_nanos();

        // A selector may come back empty-handed; fall back to a random
        // legal move.
        let chosen = chosen
            .unwrap_or_else(|| legal_moves[rng.random_range(0..legal_moves.len())].clone());

        // Accept nothing an engine invents on its own: the chosen endpoints
        // must match the legal-move list.
        let chosen = match_candidate_move(&legal_moves, chosen.start, chosen.stop)?;

        match mover {
            Color::Light => {
                light_move_count += 1;
                light_total_time_ns = light_total_time_ns.saturating_add(elapsed_ns);
            }
            Color::Dark => {
                dark_move_count += 1;
                dark_total_time_ns = dark_total_time_ns.saturating_add(elapsed_ns);
            }
        }

        played_moves.push(chosen.to_notation());
        state.apply_move(&chosen);
    }

    Ok(MatchResult {
        outcome: MatchOutcome::DrawMaxPlies,
        final_state: state,
        opening_moves,
        played_moves,
        light_move_count,
        dark_move_count,
        light_total_time_ns,
        dark_total_time_ns,
    })
}

/// Play a series of matches and aggregate win/loss/draw statistics.
///
/// Player colors are randomized each game (deterministic from `base_seed`).
pub fn play_engine_match_series<F1, F2>(
    player1_factory: F1,
    player2_factory: F2,
    config: &MatchSeriesConfig,
) -> Result<MatchSeriesStats, RulesError>
where
    F1: Fn() -> Box<dyn Engine>,
    F2: Fn() -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };
    let mut color_rng = StdRng::seed_from_u64(config.base_seed ^ 0xA5A5_5A5A_0123_4567);

    for i in 0..config.games {
        let player1_is_light = color_rng.random_bool(0.5);
        let seed = config.base_seed.wrapping_add(u64::from(i));

        let mut player1 = player1_factory();
        let mut player2 = player2_factory();
        let result = if player1_is_light {
            play_engine_match(player1.as_mut(), player2.as_mut(), seed, &config.per_game)?
        } else {
            play_engine_match(player2.as_mut(), player1.as_mut(), seed, &config.per_game)?
        };

        match result.outcome {
            MatchOutcome::LightWinCheckmate => {
                if player1_is_light {
                    stats.player1_wins += 1;
                } else {
                    stats.player2_wins += 1;
                }
            }
            MatchOutcome::DarkWinCheckmate => {
                if player1_is_light {
                    stats.player2_wins += 1;
                } else {
                    stats.player1_wins += 1;
                }
            }
            MatchOutcome::DrawStalemate | MatchOutcome::DrawMaxPlies => stats.draws += 1,
        }
        stats.outcomes.push(result.outcome);

        if config.verbose {
            println!(
                "[series] game {}/{} seed={} result={:?} p1_wins={} p2_wins={} draws={}",
                i + 1,
                config.games,
                seed,
                result.outcome,
                stats.player1_wins,
                stats.player2_wins,
                stats.draws
            );
        }
    }

    Ok(stats)
}
