//! Legality filtering, check detection, and castle generation.
//!
//! Candidates are vetted by simulation: apply the move on the shared state,
//! ask whether the mover's king square is attacked, undo. The attacked-square
//! query is the single check-detection primitive and is reused for castle
//! safety.

use crate::errors::RulesError;
use crate::game_state::chess_types::{move_board_location, BoardLocation, Color, Piece, PieceKind};
use crate::game_state::game_state::GameState;
use crate::move_generation::pseudo_move_generator::generate_pseudo_legal_moves;
use crate::moves::chess_move::ChessMove;

/// True when any pseudo-legal move of `by_side` ends on `square`.
///
/// O(opponent moves) by design; the externally observed answer is all that
/// matters here.
pub fn is_square_attacked(game_state: &GameState, square: BoardLocation, by_side: Color) -> bool {
    generate_pseudo_legal_moves(game_state, by_side)
        .iter()
        .any(|chess_move| chess_move.stop == square)
}

/// True when the side to move has its king under attack.
pub fn is_in_check(game_state: &GameState) -> bool {
    let side = game_state.side_to_move;
    is_square_attacked(
        game_state,
        game_state.king_location[side.index()],
        side.opposite(),
    )
}

/// Appends castle candidates for the side to move.
///
/// No candidate is produced while the king is attacked (cannot castle out of
/// check). Kingside needs the two crossed squares empty and unattacked;
/// queenside needs the three intervening squares empty but only the two the
/// king actually crosses unattacked.
fn generate_castle_moves(
    game_state: &GameState,
    king_square: BoardLocation,
    out: &mut Vec<ChessMove>,
) {
    let side = game_state.side_to_move;
    let king = Piece {
        color: side,
        kind: PieceKind::King,
    };

    if is_square_attacked(game_state, king_square, side.opposite()) {
        return;
    }

    if game_state.castling_rights.kingside(side) {
        generate_kingside_castle(game_state, king_square, king, out);
    }
    if game_state.castling_rights.queenside(side) {
        generate_queenside_castle(game_state, king_square, king, out);
    }
}

fn generate_kingside_castle(
    game_state: &GameState,
    king_square: BoardLocation,
    king: Piece,
    out: &mut Vec<ChessMove>,
) {
    let opponent = king.color.opposite();
    let (Ok(step_one), Ok(step_two)) = (
        move_board_location(king_square, 0, 1),
        move_board_location(king_square, 0, 2),
    ) else {
        return;
    };

    if game_state.piece_on(step_one).is_none()
        && game_state.piece_on(step_two).is_none()
        && !is_square_attacked(game_state, step_one, opponent)
        && !is_square_attacked(game_state, step_two, opponent)
    {
        out.push(ChessMove::new_castle(king_square, step_two, king));
    }
}

fn generate_queenside_castle(
    game_state: &GameState,
    king_square: BoardLocation,
    king: Piece,
    out: &mut Vec<ChessMove>,
) {
    let opponent = king.color.opposite();
    let (Ok(step_one), Ok(step_two), Ok(rook_neighbor)) = (
        move_board_location(king_square, 0, -1),
        move_board_location(king_square, 0, -2),
        move_board_location(king_square, 0, -3),
    ) else {
        return;
    };

    // The rook-adjacent square only has to be empty; the king never crosses
    // it, so it is exempt from the attack check.
    if game_state.piece_on(step_one).is_none()
        && game_state.piece_on(step_two).is_none()
        && game_state.piece_on(rook_neighbor).is_none()
        && !is_square_attacked(game_state, step_one, opponent)
        && !is_square_attacked(game_state, step_two, opponent)
    {
        out.push(ChessMove::new_castle(king_square, step_two, king));
    }
}

/// Full legal move generation: pseudo-legal plus castles, filtered through
/// make/undo simulation. Also the only place the terminal flags are written.
pub fn generate_legal_moves(game_state: &mut GameState) -> Vec<ChessMove> {
    // The simulation loop below churns the en-passant target and castling
    // rights; whatever it leaves behind must not leak into the caller-visible
    // state.
    let saved_en_passant = game_state.en_passant_target;
    let saved_rights = game_state.castling_rights;
    let side = game_state.side_to_move;

    let mut moves = generate_pseudo_legal_moves(game_state, side);
    generate_castle_moves(game_state, game_state.king_location[side.index()], &mut moves);

    // Reverse index order keeps removal index-stable.
    for index in (0..moves.len()).rev() {
        let candidate = moves[index].clone();
        game_state.apply_move(&candidate);
        let mover_king = game_state.king_location[side.index()];
        if is_square_attacked(game_state, mover_king, side.opposite()) {
            moves.remove(index);
        }
        game_state.undo_move();
    }

    if moves.is_empty() {
        game_state.checkmate = is_in_check(game_state);
        game_state.stalemate = !game_state.checkmate;
    } else {
        game_state.checkmate = false;
        game_state.stalemate = false;
        game_state.en_passant_target = saved_en_passant;
        game_state.castling_rights = saved_rights;
    }

    moves
}

/// Matches an input-derived (start, stop) pair against the legal-move list,
/// yielding the generator's fully-flagged move or a rejection. Never mutates
/// anything; the caller applies the returned move if it wants to.
pub fn match_candidate_move(
    legal_moves: &[ChessMove],
    start: BoardLocation,
    stop: BoardLocation,
) -> Result<ChessMove, RulesError> {
    legal_moves
        .iter()
        .find(|chess_move| chess_move.start == start && chess_move.stop == stop)
        .cloned()
        .ok_or(RulesError::MoveNotLegal((start, stop)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(state: &mut GameState, start: BoardLocation, stop: BoardLocation) {
        let legal_moves = generate_legal_moves(state);
        let chosen = match_candidate_move(&legal_moves, start, stop)
            .expect("scripted move should be legal");
        state.apply_move(&chosen);
    }

    #[test]
    fn starting_position_has_twenty_legal_moves() {
        let mut game = GameState::new_game();
        assert_eq!(generate_legal_moves(&mut game).len(), 20);
        assert!(!game.checkmate);
        assert!(!game.stalemate);
    }

    #[test]
    fn filter_never_leaves_own_king_attacked() {
        // Pinned rook: the light rook on e2 may only slide along the e-file.
        let mut game =
            GameState::from_fen("4r2k/8/8/8/8/8/4R3/4K3 w - - 0 1").expect("fen parses");
        let legal_moves = generate_legal_moves(&mut game);
        for chess_move in &legal_moves {
            if chess_move.start == (6, 4) {
                assert_eq!(chess_move.stop.1, 4, "pinned rook left the file");
            }
        }
        for chess_move in &legal_moves {
            let side = game.side_to_move;
            game.apply_move(chess_move);
            assert!(!is_square_attacked(
                &game,
                game.king_location[side.index()],
                side.opposite()
            ));
            game.undo_move();
        }
    }

    #[test]
    fn fools_mate_sets_checkmate() {
        let mut game = GameState::new_game();
        play(&mut game, (6, 5), (5, 5)); // f2f3
        play(&mut game, (1, 4), (3, 4)); // e7e5
        play(&mut game, (6, 6), (4, 6)); // g2g4
        play(&mut game, (0, 3), (4, 7)); // d8h4, mate
        let legal_moves = generate_legal_moves(&mut game);
        assert!(legal_moves.is_empty());
        assert!(game.checkmate);
        assert!(!game.stalemate);
    }

    #[test]
    fn cornered_king_with_no_moves_is_stalemate() {
        let mut game = GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").expect("fen parses");
        let legal_moves = generate_legal_moves(&mut game);
        assert!(legal_moves.is_empty());
        assert!(game.stalemate);
        assert!(!game.checkmate);
    }

    #[test]
    fn en_passant_capture_is_offered_and_removes_the_passed_pawn() {
        // Dark pawn already advanced to d4; light answers with e2e4.
        let mut game =
            GameState::from_fen("rnbqkbnr/ppp1pppp/8/8/3p4/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1")
                .expect("fen parses");
        play(&mut game, (6, 4), (4, 4)); // e2e4
        assert_eq!(game.en_passant_target, Some((5, 4)));

        let replies = generate_legal_moves(&mut game);
        let en_passant: Vec<_> = replies.iter().filter(|m| m.is_en_passant).collect();
        assert_eq!(en_passant.len(), 1);
        let capture = en_passant[0].clone();
        assert_eq!(capture.start, (4, 3));
        assert_eq!(capture.stop, (5, 4));

        game.apply_move(&capture);
        assert_eq!(game.piece_on((4, 4)), None, "passed pawn still on its square");
        assert_eq!(
            game.piece_on((5, 4)).map(|p| p.kind),
            Some(PieceKind::Pawn)
        );
        game.undo_move();
        assert_eq!(
            game.piece_on((4, 4)).map(|p| p.kind),
            Some(PieceKind::Pawn)
        );
        assert_eq!(game.piece_on((5, 4)), None);
    }

    #[test]
    fn en_passant_window_lasts_exactly_one_move() {
        let mut game =
            GameState::from_fen("rnbqkbnr/ppp1pppp/8/8/3p4/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1")
                .expect("fen parses");
        play(&mut game, (6, 4), (4, 4)); // e2e4
        play(&mut game, (1, 0), (2, 0)); // a7a6, declining the capture
        play(&mut game, (6, 0), (5, 0)); // a2a3
        let replies = generate_legal_moves(&mut game);
        assert!(replies.iter().all(|m| !m.is_en_passant));
    }

    #[test]
    fn both_castles_generated_on_a_clear_back_rank() {
        let mut game =
            GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("fen parses");
        let legal_moves = generate_legal_moves(&mut game);
        let castles: Vec<_> = legal_moves.iter().filter(|m| m.is_castle).collect();
        assert_eq!(castles.len(), 2);
        assert!(castles.iter().any(|m| m.stop == (7, 6)));
        assert!(castles.iter().any(|m| m.stop == (7, 2)));
    }

    #[test]
    fn no_castle_while_in_check_or_through_attacked_squares() {
        // Dark rook on e5 gives check: no castle at all.
        let mut checked =
            GameState::from_fen("4k3/8/8/4r3/8/8/8/R3K2R w KQ - 0 1").expect("fen parses");
        assert!(generate_legal_moves(&mut checked)
            .iter()
            .all(|m| !m.is_castle));

        // Dark rook on f5 covers f1: kingside is out, queenside survives.
        let mut crossed =
            GameState::from_fen("4k3/8/8/5r2/8/8/8/R3K2R w KQ - 0 1").expect("fen parses");
        let castles: Vec<_> = generate_legal_moves(&mut crossed)
            .into_iter()
            .filter(|m| m.is_castle)
            .collect();
        assert_eq!(castles.len(), 1);
        assert_eq!(castles[0].stop, (7, 2));

        // Dark rook on b5 covers only b1, which the king never crosses:
        // queenside castling stays available.
        let mut rook_file =
            GameState::from_fen("4k3/8/8/1r6/8/8/8/R3K2R w KQ - 0 1").expect("fen parses");
        assert!(generate_legal_moves(&mut rook_file)
            .iter()
            .any(|m| m.is_castle && m.stop == (7, 2)));
    }

    #[test]
    fn simulation_leaves_no_residue_on_the_state() {
        let mut game =
            GameState::from_fen("rnbqkbnr/ppp1pppp/8/8/3p4/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1")
                .expect("fen parses");
        play(&mut game, (6, 4), (4, 4)); // e2e4 sets an en-passant target
        let fen_before = game.get_fen();
        let _ = generate_legal_moves(&mut game);
        assert_eq!(game.get_fen(), fen_before);
        assert_eq!(game.en_passant_target, Some((5, 4)));
    }

    #[test]
    fn match_candidate_move_rejects_without_mutating() {
        let mut game = GameState::new_game();
        let legal_moves = generate_legal_moves(&mut game);
        let fen_before = game.get_fen();
        let rejected = match_candidate_move(&legal_moves, (7, 0), (0, 0));
        assert_eq!(
            rejected,
            Err(RulesError::MoveNotLegal(((7, 0), (0, 0))))
        );
        assert_eq!(game.get_fen(), fen_before);

        let matched =
            match_candidate_move(&legal_moves, (6, 4), (4, 4)).expect("e2e4 should be legal");
        assert!(!matched.is_castle && !matched.is_en_passant);
    }
}
