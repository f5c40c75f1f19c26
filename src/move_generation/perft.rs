//! Perft node counting over the legal-move pipeline.
//!
//! Walks every legal line to a fixed depth with paired apply/undo calls.
//! Known node counts double as a regression net for the generator, the
//! filter, and the make/undo protocol at once.

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_filter::generate_legal_moves;

pub fn perft(game_state: &mut GameState, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generate_legal_moves(game_state);
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for chess_move in &moves {
        game_state.apply_move(chess_move);
        nodes += perft(game_state, depth - 1);
        game_state.undo_move();
    }
    nodes
}

#[cfg(test)]
mod tests {
    use super::perft;
    use crate::game_state::game_state::GameState;

    #[test]
    fn starting_position_node_counts() {
        let mut game = GameState::new_game();
        assert_eq!(perft(&mut game, 1), 20);
        assert_eq!(perft(&mut game, 2), 400);
        assert_eq!(perft(&mut game, 3), 8902);
    }

    #[test]
    fn rook_endgame_node_counts() {
        let mut game = GameState::from_fen("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1")
            .expect("fen parses");
        assert_eq!(perft(&mut game, 1), 14);
        assert_eq!(perft(&mut game, 2), 191);
        assert_eq!(perft(&mut game, 3), 2812);
    }

    #[test]
    fn perft_does_not_disturb_the_state() {
        let mut game = GameState::new_game();
        let fen_before = game.get_fen();
        let _ = perft(&mut game, 2);
        assert_eq!(game.get_fen(), fen_before);
    }
}
