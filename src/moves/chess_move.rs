//! Move value type.
//!
//! A move is just `(from, to, promotion)`. Whether it castles, captures en
//! passant or promotes is derived from the position it is played in, so the
//! value never carries flags that could disagree with the board.

use std::fmt;

use crate::game_state::chess_types::*;
use crate::utils::algebraic::square_to_algebraic;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    #[inline]
    pub const fn with_promotion(from: Square, to: Square, promotion: PieceKind) -> Self {
        Self {
            from,
            to,
            promotion: Some(promotion),
        }
    }

    #[inline]
    pub const fn is_promotion(&self) -> bool {
        self.promotion.is_some()
    }

    /// King move spanning two files.
    pub fn is_castling(&self, position: &Position) -> bool {
        position.piece_at(self.from).kind() == Some(PieceKind::King)
            && square_file(self.from).abs_diff(square_file(self.to)) == 2
    }

    /// Pawn move onto the position's en-passant target.
    pub fn is_en_passant(&self, position: &Position) -> bool {
        position.piece_at(self.from).kind() == Some(PieceKind::Pawn)
            && position.en_passant_square == Some(self.to)
            && square_file(self.from) != square_file(self.to)
    }

    /// Captures a piece, either on the destination or en passant.
    pub fn is_capture(&self, position: &Position) -> bool {
        !position.piece_at(self.to).is_empty() || self.is_en_passant(position)
    }
}

impl fmt::Display for Move {
    /// Long algebraic coordinates, e.g. `e2e4` or `e7e8q`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let from = square_to_algebraic(self.from).map_err(|_| fmt::Error)?;
        let to = square_to_algebraic(self.to).map_err(|_| fmt::Error)?;
        write!(f, "{from}{to}")?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.to_char())?;
        }
        Ok(())
    }
}
