//! Conversions between algebraic coordinates and grid locations.
//!
//! Converts human-readable coordinates (e.g., `e4`) to the `(row, col)`
//! matrix orientation used internally: column 0 is file 'a', row 0 is rank
//! '8'. Used to translate external input into candidate move endpoints.

use crate::errors::RulesError;
use crate::game_state::chess_types::BoardLocation;

/// Convert an algebraic coordinate (for example: "e4") to a grid location.
#[inline]
pub fn algebraic_to_location(text: &str) -> Result<BoardLocation, RulesError> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return Err(RulesError::InvalidAlgebraic(text.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(RulesError::InvalidAlgebraic(text.to_owned()));
    }

    let col = (file - b'a') as i8;
    let row = (b'8' - rank) as i8;
    Ok((row, col))
}

/// Convert a grid location to an algebraic coordinate (for example: "e4").
#[inline]
pub fn location_to_algebraic(location: BoardLocation) -> Result<String, RulesError> {
    if !(0..8).contains(&location.0) || !(0..8).contains(&location.1) {
        return Err(RulesError::InvalidAlgebraic(format!(
            "({},{})",
            location.0, location.1
        )));
    }

    let file = char::from(b'a' + location.1 as u8);
    let rank = char::from(b'8' - location.0 as u8);
    Ok(format!("{file}{rank}"))
}
