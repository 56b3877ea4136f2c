//! Single-move state transition.
//!
//! `apply_move` trusts its caller: the move is assumed legal and is not
//! re-validated. Every decision is read from the pre-move snapshot and the
//! result is a new `Position`.

use crate::game_state::{chess_types::*, position::Position};
use crate::moves::chess_move::Move;

/// Rook home squares and the castling right each one guards.
const ROOK_HOMES: [(Square, CastlingRights); 4] = [
    (0, CASTLE_LIGHT_QUEENSIDE),
    (7, CASTLE_LIGHT_KINGSIDE),
    (56, CASTLE_DARK_QUEENSIDE),
    (63, CASTLE_DARK_KINGSIDE),
];

pub fn apply_move(position: &Position, mv: Move) -> Position {
    let moving_color = position.side_to_move;
    let moved_piece = position.piece_at(mv.from);
    let moved_kind = moved_piece.kind();
    let is_en_passant = mv.is_en_passant(position);
    let is_castling = mv.is_castling(position);
    let is_capture = !position.piece_at(mv.to).is_empty() || is_en_passant;

    let mut next = *position;

    if is_en_passant {
        let captured_sq = match moving_color {
            Color::Light => mv.to - 8,
            Color::Dark => mv.to + 8,
        };
        next.board[captured_sq as usize] = Piece::Empty;
    }

    next.board[mv.from as usize] = Piece::Empty;
    next.board[mv.to as usize] = match mv.promotion {
        Some(promo) => Piece::new(moving_color, promo),
        None => moved_piece,
    };

    if is_castling {
        let (rook_from, rook_to) = castling_rook_squares(mv);
        next.board[rook_from as usize] = Piece::Empty;
        next.board[rook_to as usize] = Piece::new(moving_color, PieceKind::Rook);
    }

    next.castling_rights = updated_castling_rights(position.castling_rights, moving_color, mv, moved_kind);

    next.en_passant_square = if moved_kind == Some(PieceKind::Pawn)
        && square_rank(mv.from).abs_diff(square_rank(mv.to)) == 2
    {
        Some((mv.from + mv.to) / 2)
    } else {
        None
    };

    if moved_kind == Some(PieceKind::Pawn) || is_capture {
        next.halfmove_clock = 0;
    } else {
        next.halfmove_clock = next.halfmove_clock.saturating_add(1);
    }
    if moving_color == Color::Dark {
        next.fullmove_number = next.fullmove_number.saturating_add(1);
    }

    next.side_to_move = moving_color.opposite();

    next
}

/// Rook origin and destination for a castling king move.
///
/// The rook always lands on the square the king crossed.
#[inline]
pub fn castling_rook_squares(mv: Move) -> (Square, Square) {
    let rank = square_rank(mv.from);
    if square_file(mv.to) > square_file(mv.from) {
        (square_at(7, rank), square_at(5, rank))
    } else {
        (square_at(0, rank), square_at(3, rank))
    }
}

fn updated_castling_rights(
    rights: CastlingRights,
    moving_color: Color,
    mv: Move,
    moved_kind: Option<PieceKind>,
) -> CastlingRights {
    let mut rights = rights;

    if moved_kind == Some(PieceKind::King) {
        rights &= match moving_color {
            Color::Light => !(CASTLE_LIGHT_KINGSIDE | CASTLE_LIGHT_QUEENSIDE),
            Color::Dark => !(CASTLE_DARK_KINGSIDE | CASTLE_DARK_QUEENSIDE),
        };
    }

    // Vacating a rook home, or capturing onto one, ends that right.
    for (home, right) in ROOK_HOMES {
        if mv.from == home || mv.to == home {
            rights &= !right;
        }
    }

    rights
}
