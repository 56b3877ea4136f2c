//! Attack and check queries.
//!
//! `is_square_attacked` is a pure occupancy question with no notion of
//! legality. Check detection and the castling safety test are both built on
//! it.

use crate::game_state::{chess_types::*, position::Position};
use crate::moves::attack_tables::{
    king_attacks, knight_attacks, pawn_attacks, DIAGONAL_DIRECTIONS, ORTHOGONAL_DIRECTIONS,
};

#[inline]
pub fn king_square(position: &Position, color: Color) -> Option<Square> {
    position.squares_with(color, PieceKind::King).next()
}

/// A side without a king on the board is never in check.
#[inline]
pub fn is_king_in_check(position: &Position, color: Color) -> bool {
    let Some(king_sq) = king_square(position, color) else {
        return false;
    };
    is_square_attacked(position, king_sq, color.opposite())
}

pub fn is_square_attacked(position: &Position, square: Square, attacker_color: Color) -> bool {
    // A pawn attacks `square` from wherever an enemy pawn on `square` would capture.
    let pawn = Piece::new(attacker_color, PieceKind::Pawn);
    if any_on(position, pawn_attacks(attacker_color.opposite(), square), pawn) {
        return true;
    }

    let knight = Piece::new(attacker_color, PieceKind::Knight);
    if any_on(position, knight_attacks(square), knight) {
        return true;
    }

    let queen = Piece::new(attacker_color, PieceKind::Queen);

    let rook = Piece::new(attacker_color, PieceKind::Rook);
    for direction in ORTHOGONAL_DIRECTIONS {
        let blocker = first_piece_along(position, square, direction);
        if blocker == Some(rook) || blocker == Some(queen) {
            return true;
        }
    }

    let bishop = Piece::new(attacker_color, PieceKind::Bishop);
    for direction in DIAGONAL_DIRECTIONS {
        let blocker = first_piece_along(position, square, direction);
        if blocker == Some(bishop) || blocker == Some(queen) {
            return true;
        }
    }

    let king = Piece::new(attacker_color, PieceKind::King);
    any_on(position, king_attacks(square), king)
}

fn any_on(position: &Position, mut squares: u64, piece: Piece) -> bool {
    while squares != 0 {
        let sq = squares.trailing_zeros() as Square;
        if position.piece_at(sq) == piece {
            return true;
        }
        squares &= squares - 1;
    }
    false
}

fn first_piece_along(
    position: &Position,
    square: Square,
    (file_step, rank_step): (i32, i32),
) -> Option<Piece> {
    let mut file = square_file(square) as i32 + file_step;
    let mut rank = square_rank(square) as i32 + rank_step;

    while (0..8).contains(&file) && (0..8).contains(&rank) {
        let piece = position.piece_at(square_at(file as u8, rank as u8));
        if !piece.is_empty() {
            return Some(piece);
        }
        file += file_step;
        rank += rank_step;
    }

    None
}
