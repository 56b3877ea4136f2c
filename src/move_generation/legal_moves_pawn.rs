use crate::game_state::{chess_types::*, position::Position};
use crate::moves::attack_tables::pawn_attacks;
use crate::moves::chess_move::Move;

pub fn generate_pawn_moves(position: &Position, out: &mut Vec<Move>) {
    let side = position.side_to_move;
    let enemy_occ = position.occupancy_of(side.opposite());
    let forward: i8 = match side {
        Color::Light => 8,
        Color::Dark => -8,
    };

    for from in position.squares_with(side, PieceKind::Pawn) {
        // A pawn never stands on its promotion rank, so one step ahead is on the board.
        if square_rank(from) == side.promotion_rank() {
            continue;
        }

        let one_step = from.wrapping_add_signed(forward);
        if position.piece_at(one_step).is_empty() {
            push_pawn_move(side, from, one_step, out);

            if square_rank(from) == side.pawn_home_rank() {
                let two_step = one_step.wrapping_add_signed(forward);
                if position.piece_at(two_step).is_empty() {
                    out.push(Move::new(from, two_step));
                }
            }
        }

        let mut captures = pawn_attacks(side, from);
        while captures != 0 {
            let to = captures.trailing_zeros() as Square;
            let to_mask = 1u64 << to;
            if (to_mask & enemy_occ) != 0 {
                push_pawn_move(side, from, to, out);
            } else if position.en_passant_square == Some(to) {
                out.push(Move::new(from, to));
            }
            captures &= captures - 1;
        }
    }
}

/// Emits the four promotions when `to` is the last rank, else a plain move.
fn push_pawn_move(side: Color, from: Square, to: Square, out: &mut Vec<Move>) {
    if square_rank(to) == side.promotion_rank() {
        for promo in PROMOTION_KINDS {
            out.push(Move::with_promotion(from, to, promo));
        }
    } else {
        out.push(Move::new(from, to));
    }
}
