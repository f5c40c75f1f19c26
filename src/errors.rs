//! Errors used throughout the rules engine.
//!
//! This module defines the canonical error type returned by parsing
//! utilities, board-walking helpers, and input-move matching. Core state
//! mutation (`apply_move` / `undo_move`) is total and never returns an error;
//! only the surfaces that accept external input do.

use std::fmt;

use crate::game_state::chess_types::{BoardLocation, Color};

/// Unified error type for the rules engine.
///
/// Variants carry contextual payloads where useful so callers can log or
/// display precise diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    /// Attempted to move from `BoardLocation` by the delta `(d_row, d_col)`,
    /// which would land off the board.
    ///
    /// Payload: (origin_location, d_row, d_col)
    TriedToMoveOutOfBounds((BoardLocation, i8, i8)),
    /// The provided position string is invalid or could not be parsed.
    InvalidFenString(String),
    /// The provided algebraic coordinate is invalid or could not be parsed.
    InvalidAlgebraic(String),
    /// A position was constructed without a king for the given side.
    MissingKing(Color),
    /// An input-derived (start, stop) pair did not match any legal move.
    ///
    /// Payload: (start_location, stop_location)
    MoveNotLegal((BoardLocation, BoardLocation)),
}

impl fmt::Display for RulesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RulesError::TriedToMoveOutOfBounds((origin, d_row, d_col)) => write!(
                f,
                "moving ({},{}) by ({},{}) lands off the board",
                origin.0, origin.1, d_row, d_col
            ),
            RulesError::InvalidFenString(reason) => {
                write!(f, "invalid position string: {reason}")
            }
            RulesError::InvalidAlgebraic(text) => {
                write!(f, "invalid algebraic coordinate: {text}")
            }
            RulesError::MissingKing(color) => {
                write!(f, "position has no {color:?} king")
            }
            RulesError::MoveNotLegal((start, stop)) => write!(
                f,
                "({},{}) -> ({},{}) is not in the legal move list",
                start.0, start.1, stop.0, stop.1
            ),
        }
    }
}

impl std::error::Error for RulesError {}
