use crate::game_state::{chess_types::*, position::Position};
use crate::move_generation::legal_move_checks::{is_square_attacked, king_square};
use crate::move_generation::legal_move_shared::push_moves_to_targets;
use crate::moves::attack_tables::king_attacks;
use crate::moves::chess_move::Move;

/// One castling option: the right it needs, where king and rook start, the
/// squares that must be empty and the squares the king crosses.
struct CastlingPath {
    right: CastlingRights,
    king_from: Square,
    king_to: Square,
    rook_from: Square,
    must_be_empty: &'static [Square],
    must_be_safe: &'static [Square],
}

const LIGHT_CASTLING: [CastlingPath; 2] = [
    CastlingPath {
        right: CASTLE_LIGHT_KINGSIDE,
        king_from: 4,
        king_to: 6,
        rook_from: 7,
        must_be_empty: &[5, 6],
        must_be_safe: &[5, 6],
    },
    CastlingPath {
        right: CASTLE_LIGHT_QUEENSIDE,
        king_from: 4,
        king_to: 2,
        rook_from: 0,
        must_be_empty: &[1, 2, 3],
        must_be_safe: &[3, 2],
    },
];

const DARK_CASTLING: [CastlingPath; 2] = [
    CastlingPath {
        right: CASTLE_DARK_KINGSIDE,
        king_from: 60,
        king_to: 62,
        rook_from: 63,
        must_be_empty: &[61, 62],
        must_be_safe: &[61, 62],
    },
    CastlingPath {
        right: CASTLE_DARK_QUEENSIDE,
        king_from: 60,
        king_to: 58,
        rook_from: 56,
        must_be_empty: &[57, 58, 59],
        must_be_safe: &[59, 58],
    },
];

pub fn generate_king_moves(position: &Position, out: &mut Vec<Move>) {
    let side = position.side_to_move;
    let Some(from) = king_square(position, side) else {
        return;
    };

    let own_occ = position.occupancy_of(side);
    push_moves_to_targets(from, king_attacks(from) & !own_occ, out);

    generate_castling_moves(position, out, from);
}

fn generate_castling_moves(position: &Position, out: &mut Vec<Move>, king_from: Square) {
    let side = position.side_to_move;
    let enemy = side.opposite();
    let paths = match side {
        Color::Light => &LIGHT_CASTLING,
        Color::Dark => &DARK_CASTLING,
    };

    if position.castling_rights & (paths[0].right | paths[1].right) == 0 {
        return;
    }

    // Cannot castle out of check.
    if is_square_attacked(position, king_from, enemy) {
        return;
    }

    let rook = Piece::new(side, PieceKind::Rook);
    for path in paths {
        if king_from != path.king_from
            || position.castling_rights & path.right == 0
            || position.piece_at(path.rook_from) != rook
        {
            continue;
        }
        if path
            .must_be_empty
            .iter()
            .any(|&sq| !position.piece_at(sq).is_empty())
        {
            continue;
        }
        if path
            .must_be_safe
            .iter()
            .any(|&sq| is_square_attacked(position, sq, enemy))
        {
            continue;
        }
        out.push(Move::new(path.king_from, path.king_to));
    }
}
