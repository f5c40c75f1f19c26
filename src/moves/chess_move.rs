//! The move record applied to and reversed from the position state.
//!
//! A `ChessMove` carries enough information (mover, capture, special-move
//! flags) to be applied or undone without re-deriving anything from the grid.
//! Equality is deliberately coordinate-only so that an input-derived
//! (start, stop) pair compares equal to the generator's fully-flagged move.

use std::fmt;

use crate::game_state::chess_types::{piece_on_grid, BoardGrid, BoardLocation, Piece, PieceKind};

#[derive(Debug, Clone)]
pub struct ChessMove {
    pub start: BoardLocation,
    pub stop: BoardLocation,
    pub piece_moved: Piece,
    pub piece_captured: Option<Piece>,
    pub is_promotion: bool,
    pub is_en_passant: bool,
    pub is_castle: bool,
}

impl ChessMove {
    /// Builds a regular move or capture; the capture is read off the grid.
    pub fn new(start: BoardLocation, stop: BoardLocation, piece_moved: Piece, grid: &BoardGrid) -> Self {
        let is_promotion = piece_moved.kind == PieceKind::Pawn
            && stop.0 == piece_moved.color.promotion_row();
        ChessMove {
            start,
            stop,
            piece_moved,
            piece_captured: piece_on_grid(grid, stop),
            is_promotion,
            is_en_passant: false,
            is_castle: false,
        }
    }

    /// Builds an en-passant capture. The destination square is empty; the
    /// captured pawn sits beside the start square and is recorded here.
    pub fn new_en_passant(start: BoardLocation, stop: BoardLocation, piece_moved: Piece) -> Self {
        ChessMove {
            start,
            stop,
            piece_moved,
            piece_captured: Some(Piece {
                color: piece_moved.color.opposite(),
                kind: PieceKind::Pawn,
            }),
            is_promotion: false,
            is_en_passant: true,
            is_castle: false,
        }
    }

    /// Builds a castle move: the king's two-file slide toward the rook.
    pub fn new_castle(start: BoardLocation, stop: BoardLocation, piece_moved: Piece) -> Self {
        ChessMove {
            start,
            stop,
            piece_moved,
            piece_captured: None,
            is_promotion: false,
            is_en_passant: false,
            is_castle: true,
        }
    }

    /// Identity of a move: the coordinate 4-tuple packed into one number.
    #[inline]
    pub fn move_id(&self) -> i16 {
        self.start.0 as i16 * 1000 + self.start.1 as i16 * 100 + self.stop.0 as i16 * 10
            + self.stop.1 as i16
    }

    /// True for a two-square pawn advance.
    #[inline]
    pub fn is_two_square_pawn_advance(&self) -> bool {
        self.piece_moved.kind == PieceKind::Pawn && (self.start.0 - self.stop.0).abs() == 2
    }

    /// The en-passant target this move leaves behind: the midpoint square of
    /// a two-square pawn advance, nothing for every other move.
    #[inline]
    pub fn en_passant_target_created(&self) -> Option<BoardLocation> {
        if self.is_two_square_pawn_advance() {
            Some(((self.start.0 + self.stop.0) / 2, self.start.1))
        } else {
            None
        }
    }

    /// Display/log notation: file-rank of the start then of the stop square,
    /// with column 0 as file 'a' and row 0 as rank '8'.
    pub fn to_notation(&self) -> String {
        fn rank_file(location: BoardLocation) -> String {
            let file = (b'a' + location.1 as u8) as char;
            let rank = (b'8' - location.0 as u8) as char;
            format!("{file}{rank}")
        }
        format!("{}{}", rank_file(self.start), rank_file(self.stop))
    }
}

impl PartialEq for ChessMove {
    fn eq(&self, other: &Self) -> bool {
        self.move_id() == other.move_id()
    }
}

impl Eq for ChessMove {}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_notation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Color;

    fn empty_grid() -> BoardGrid {
        [[None; 8]; 8]
    }

    #[test]
    fn equality_ignores_flags() {
        let pawn = Piece {
            color: Color::Light,
            kind: PieceKind::Pawn,
        };
        let plain = ChessMove::new((3, 4), (2, 5), pawn, &empty_grid());
        let en_passant = ChessMove::new_en_passant((3, 4), (2, 5), pawn);
        assert_eq!(plain, en_passant);
        assert_ne!(plain, ChessMove::new((3, 4), (2, 4), pawn, &empty_grid()));
    }

    #[test]
    fn promotion_flag_derives_from_farthest_rank() {
        let pawn = Piece {
            color: Color::Light,
            kind: PieceKind::Pawn,
        };
        assert!(ChessMove::new((1, 0), (0, 0), pawn, &empty_grid()).is_promotion);
        assert!(!ChessMove::new((2, 0), (1, 0), pawn, &empty_grid()).is_promotion);

        let dark_pawn = Piece {
            color: Color::Dark,
            kind: PieceKind::Pawn,
        };
        assert!(ChessMove::new((6, 3), (7, 3), dark_pawn, &empty_grid()).is_promotion);
    }

    #[test]
    fn notation_uses_file_rank_orientation() {
        let pawn = Piece {
            color: Color::Light,
            kind: PieceKind::Pawn,
        };
        // (6,4) is e2, (4,4) is e4.
        let mv = ChessMove::new((6, 4), (4, 4), pawn, &empty_grid());
        assert_eq!(mv.to_notation(), "e2e4");
    }

    #[test]
    fn two_square_advance_creates_midpoint_target() {
        let pawn = Piece {
            color: Color::Light,
            kind: PieceKind::Pawn,
        };
        let double = ChessMove::new((6, 4), (4, 4), pawn, &empty_grid());
        assert_eq!(double.en_passant_target_created(), Some((5, 4)));
        let single = ChessMove::new((6, 4), (5, 4), pawn, &empty_grid());
        assert_eq!(single.en_passant_target_created(), None);
    }
}
