use crate::game_state::chess_types::Square;
use crate::moves::chess_move::Move;

/// Pushes one plain move from `from` to every set bit of `targets`.
#[inline]
pub fn push_moves_to_targets(from: Square, mut targets: u64, out: &mut Vec<Move>) {
    while targets != 0 {
        let to = targets.trailing_zeros() as Square;
        out.push(Move::new(from, to));
        targets &= targets - 1;
    }
}
