//! Position-string generation.
//!
//! Dumps a `GameState` back to Forsyth-Edwards Notation. The clock fields are
//! emitted as "0 1" since the rules core does not track clocks.

use crate::game_state::chess_types::{CastlingRights, Color, Piece, PieceKind};
use crate::game_state::game_state::GameState;
use crate::utils::algebraic::location_to_algebraic;

fn piece_to_fen_char(piece: Piece) -> char {
    let lower = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    match piece.color {
        Color::Light => lower.to_ascii_uppercase(),
        Color::Dark => lower,
    }
}

pub fn generate_fen(game_state: &GameState) -> String {
    let mut result = String::new();

    for (row_index, row) in game_state.grid.iter().enumerate() {
        let mut empty_run = 0u8;
        for square in row {
            match square {
                Some(piece) => {
                    if empty_run > 0 {
                        result.push(char::from(b'0' + empty_run));
                        empty_run = 0;
                    }
                    result.push(piece_to_fen_char(*piece));
                }
                None => empty_run += 1,
            }
        }
        if empty_run > 0 {
            result.push(char::from(b'0' + empty_run));
        }
        if row_index < 7 {
            result.push('/');
        }
    }

    result.push(' ');
    result.push(match game_state.side_to_move {
        Color::Light => 'w',
        Color::Dark => 'b',
    });

    result.push(' ');
    let rights = game_state.castling_rights;
    if rights == CastlingRights::none() {
        result.push('-');
    } else {
        if rights.light_kingside {
            result.push('K');
        }
        if rights.light_queenside {
            result.push('Q');
        }
        if rights.dark_kingside {
            result.push('k');
        }
        if rights.dark_queenside {
            result.push('q');
        }
    }

    result.push(' ');
    match game_state
        .en_passant_target
        .and_then(|target| location_to_algebraic(target).ok())
    {
        Some(coordinate) => result.push_str(&coordinate),
        None => result.push('-'),
    }

    result.push_str(" 0 1");
    result
}
