//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and internal
//! square indices; reused by the FEN codec and long algebraic moves.

use crate::chess_errors::MalformedInputError;
use crate::game_state::chess_types::{square_at, square_file, square_rank, Square};

/// Convert algebraic notation (for example: "e4") to a square index.
#[inline]
pub fn algebraic_to_square(square: &str) -> Result<Square, MalformedInputError> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(MalformedInputError::Square(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(MalformedInputError::Square(square.to_owned()));
    }

    Ok(square_at(file - b'a', rank - b'1'))
}

/// Convert a square index (`0..=63`) to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> Result<String, MalformedInputError> {
    if square > 63 {
        return Err(MalformedInputError::SquareIndex(square));
    }

    let file_char = char::from(b'a' + square_file(square));
    let rank_char = char::from(b'1' + square_rank(square));

    Ok(format!("{file_char}{rank_char}"))
}
