use crate::game_state::{chess_types::*, position::Position};
use crate::move_generation::legal_move_shared::push_moves_to_targets;
use crate::moves::attack_tables::knight_attacks;
use crate::moves::chess_move::Move;

pub fn generate_knight_moves(position: &Position, out: &mut Vec<Move>) {
    let side = position.side_to_move;
    let own_occ = position.occupancy_of(side);

    for from in position.squares_with(side, PieceKind::Knight) {
        push_moves_to_targets(from, knight_attacks(from) & !own_occ, out);
    }
}
