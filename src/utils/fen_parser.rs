//! Position-string parsing.
//!
//! Builds a `GameState` from Forsyth-Edwards Notation. The first four fields
//! (placement, side to move, castling rights, en-passant target) are
//! required; the clock fields are accepted and ignored since the rules core
//! does not track clocks. Both kings must be present so the one-king
//! invariant holds from construction onward.

use crate::errors::RulesError;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::utils::algebraic::algebraic_to_location;

fn piece_from_fen_char(c: char) -> Result<Piece, RulesError> {
    let color = if c.is_ascii_uppercase() {
        Color::Light
    } else {
        Color::Dark
    };
    let kind = match c.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => {
            return Err(RulesError::InvalidFenString(format!(
                "unknown piece character '{c}'"
            )))
        }
    };
    Ok(Piece { color, kind })
}

pub fn parse_fen(fen: &str) -> Result<GameState, RulesError> {
    let mut fields = fen.split_ascii_whitespace();

    let placement = fields
        .next()
        .ok_or_else(|| RulesError::InvalidFenString("missing placement field".to_owned()))?;

    let mut grid: BoardGrid = [[None; 8]; 8];
    let mut king_light: Option<BoardLocation> = None;
    let mut king_dark: Option<BoardLocation> = None;

    let mut row_count = 0usize;
    for (row, row_text) in placement.split('/').enumerate() {
        if row >= 8 {
            return Err(RulesError::InvalidFenString(
                "placement has more than 8 rows".to_owned(),
            ));
        }
        row_count += 1;

        let mut col = 0usize;
        for c in row_text.chars() {
            if let Some(skip) = c.to_digit(10) {
                col += skip as usize;
                continue;
            }
            if col >= 8 {
                return Err(RulesError::InvalidFenString(format!(
                    "row {row} overflows 8 columns"
                )));
            }
            let piece = piece_from_fen_char(c)?;
            if piece.kind == PieceKind::King {
                let slot = match piece.color {
                    Color::Light => &mut king_light,
                    Color::Dark => &mut king_dark,
                };
                if slot.is_some() {
                    return Err(RulesError::InvalidFenString(format!(
                        "duplicate {:?} king",
                        piece.color
                    )));
                }
                *slot = Some((row as i8, col as i8));
            }
            grid[row][col] = Some(piece);
            col += 1;
        }
        if col != 8 {
            return Err(RulesError::InvalidFenString(format!(
                "row {row} covers {col} columns instead of 8"
            )));
        }
    }
    if row_count != 8 {
        return Err(RulesError::InvalidFenString(format!(
            "placement has {row_count} rows instead of 8"
        )));
    }

    let side_to_move = match fields.next() {
        Some("w") => Color::Light,
        Some("b") => Color::Dark,
        other => {
            return Err(RulesError::InvalidFenString(format!(
                "bad side-to-move field {other:?}"
            )))
        }
    };

    let castle_field = fields
        .next()
        .ok_or_else(|| RulesError::InvalidFenString("missing castling field".to_owned()))?;
    let mut castling_rights = CastlingRights::none();
    for c in castle_field.chars() {
        match c {
            'K' => castling_rights.light_kingside = true,
            'Q' => castling_rights.light_queenside = true,
            'k' => castling_rights.dark_kingside = true,
            'q' => castling_rights.dark_queenside = true,
            '-' => (),
            _ => {
                return Err(RulesError::InvalidFenString(format!(
                    "bad castling character '{c}'"
                )))
            }
        }
    }

    let en_passant_field = fields
        .next()
        .ok_or_else(|| RulesError::InvalidFenString("missing en-passant field".to_owned()))?;
    let en_passant_target = if en_passant_field == "-" {
        None
    } else {
        Some(
            algebraic_to_location(en_passant_field)
                .map_err(|_| RulesError::InvalidFenString(format!(
                    "bad en-passant field '{en_passant_field}'"
                )))?,
        )
    };

    // Clock fields, when present, are ignored.

    let king_light = king_light.ok_or(RulesError::MissingKing(Color::Light))?;
    let king_dark = king_dark.ok_or(RulesError::MissingKing(Color::Dark))?;

    Ok(GameState {
        grid,
        side_to_move,
        king_location: [king_light, king_dark],
        castling_rights,
        en_passant_target,
        move_history: Vec::new(),
        castling_rights_history: vec![castling_rights],
        checkmate: false,
        stalemate: false,
    })
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::errors::RulesError;
    use crate::game_state::chess_types::{Color, PieceKind};

    #[test]
    fn parses_the_starting_position() {
        let game = parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1")
            .expect("starting position should parse");
        assert_eq!(game.side_to_move, Color::Light);
        assert_eq!(
            game.piece_on((0, 0)).map(|p| p.kind),
            Some(PieceKind::Rook)
        );
        assert_eq!(
            game.piece_on((7, 4)).map(|p| p.kind),
            Some(PieceKind::King)
        );
        assert_eq!(game.piece_on((4, 4)), None);
        assert_eq!(game.king_location[Color::Dark.index()], (0, 4));
        assert_eq!(game.en_passant_target, None);
    }

    #[test]
    fn parses_en_passant_and_partial_rights() {
        let game = parse_fen("rnbqkbnr/ppp1pppp/8/8/3pP3/8/PPPP1PPP/RNBQKBNR b Kq e3 0 2")
            .expect("position should parse");
        assert_eq!(game.side_to_move, Color::Dark);
        assert_eq!(game.en_passant_target, Some((5, 4)));
        assert!(game.castling_rights.kingside(Color::Light));
        assert!(!game.castling_rights.queenside(Color::Light));
        assert!(!game.castling_rights.kingside(Color::Dark));
        assert!(game.castling_rights.queenside(Color::Dark));
    }

    #[test]
    fn rejects_malformed_strings() {
        assert!(parse_fen("").is_err());
        assert!(parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1").is_err());
        assert!(parse_fen("rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").is_err());
        assert!(parse_fen("rnbqkbnr/pppppppp/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").is_err());
        assert!(parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq e9 0 1").is_err());
    }

    #[test]
    fn requires_both_kings() {
        assert_eq!(
            parse_fen("8/8/8/8/8/8/8/K7 w - - 0 1").unwrap_err(),
            RulesError::MissingKing(Color::Dark)
        );
        assert_eq!(
            parse_fen("k7/8/8/8/8/8/8/8 w - - 0 1").unwrap_err(),
            RulesError::MissingKing(Color::Light)
        );
        assert!(parse_fen("kk6/8/8/8/8/8/8/K7 w - - 0 1").is_err());
    }
}
