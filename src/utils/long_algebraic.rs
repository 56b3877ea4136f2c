//! Boundary move notation: `e2e4`, `e7e8q`.
//!
//! Parsing is purely syntactic. Whether the move is castling, en passant or
//! legal at all is decided later against a position by the game controller.

use crate::chess_errors::MalformedInputError;
use crate::game_state::chess_types::PieceKind;
use crate::moves::chess_move::Move;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_long_algebraic(long_algebraic: &str) -> Result<Move, MalformedInputError> {
    let malformed = || MalformedInputError::MoveText(long_algebraic.to_owned());

    if !long_algebraic.is_ascii() || !(4..=5).contains(&long_algebraic.len()) {
        return Err(malformed());
    }

    let from = algebraic_to_square(&long_algebraic[0..2]).map_err(|_| malformed())?;
    let to = algebraic_to_square(&long_algebraic[2..4]).map_err(|_| malformed())?;

    let promotion = match long_algebraic[4..].chars().next() {
        None => None,
        Some(ch) => Some(char_to_promotion(ch).ok_or_else(malformed)?),
    };

    Ok(Move {
        from,
        to,
        promotion,
    })
}

#[inline]
pub fn move_to_long_algebraic(mv: Move) -> String {
    mv.to_string()
}

fn char_to_promotion(ch: char) -> Option<PieceKind> {
    match PieceKind::from_char(ch)? {
        kind @ (PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen) => {
            Some(kind)
        }
        PieceKind::Pawn | PieceKind::King => None,
    }
}
