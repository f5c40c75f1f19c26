//! Runs a short random-vs-greedy match series and prints the tally.
//!
//! Usage: engine_match_series [games] [base_seed]

use quince_chess::engines::engine_greedy::GreedyEngine;
use quince_chess::engines::engine_random::RandomEngine;
use quince_chess::utils::engine_match_harness::{
    play_engine_match, play_engine_match_series, MatchConfig, MatchSeriesConfig,
};
use quince_chess::utils::render_game_state::render_game_state;

fn timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

fn main() {
    let mut args = std::env::args().skip(1);
    let games: u16 = args
        .next()
        .and_then(|value| value.parse().ok())
        .unwrap_or(5);
    let base_seed: u64 = args
        .next()
        .and_then(|value| value.parse().ok())
        .unwrap_or(7);

    let config = MatchSeriesConfig {
        games,
        base_seed,
        per_game: MatchConfig {
            max_plies: 120,
            opening_plies: 4,
        },
        verbose: true,
    };

    println!(
        "[{}] starting series: random vs greedy, {} games, base_seed={}",
        timestamp(),
        games,
        base_seed
    );

    let stats = match play_engine_match_series(
        || Box::new(RandomEngine::new()),
        || Box::new(GreedyEngine::new()),
        &config,
    ) {
        Ok(stats) => stats,
        Err(e) => {
            eprintln!("[{}] series failed: {e}", timestamp());
            std::process::exit(1);
        }
    };

    println!("[{}] {}", timestamp(), stats.report());

    // One showcase game with its final board.
    let mut light = RandomEngine::new();
    let mut dark = GreedyEngine::new();
    match play_engine_match(&mut light, &mut dark, base_seed, &config.per_game) {
        Ok(result) => {
            println!(
                "[{}] showcase game: {:?} after {} plies",
                timestamp(),
                result.outcome,
                result.light_move_count + result.dark_move_count
            );
            println!("{}", render_game_state(&result.final_state));
        }
        Err(e) => {
            eprintln!("[{}] showcase game failed: {e}", timestamp());
            std::process::exit(1);
        }
    }
}
