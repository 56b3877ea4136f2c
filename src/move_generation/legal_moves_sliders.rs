use crate::game_state::{chess_types::*, position::Position};
use crate::move_generation::legal_move_shared::push_moves_to_targets;
use crate::moves::attack_tables::{bishop_attacks, queen_attacks, rook_attacks};
use crate::moves::chess_move::Move;

pub fn generate_bishop_moves(position: &Position, out: &mut Vec<Move>) {
    generate_slider_moves(position, PieceKind::Bishop, bishop_attacks, out);
}

pub fn generate_rook_moves(position: &Position, out: &mut Vec<Move>) {
    generate_slider_moves(position, PieceKind::Rook, rook_attacks, out);
}

pub fn generate_queen_moves(position: &Position, out: &mut Vec<Move>) {
    generate_slider_moves(position, PieceKind::Queen, queen_attacks, out);
}

fn generate_slider_moves(
    position: &Position,
    kind: PieceKind,
    attacks: fn(Square, u64) -> u64,
    out: &mut Vec<Move>,
) {
    let side = position.side_to_move;
    let own_occ = position.occupancy_of(side);
    let all_occ = position.occupancy();

    for from in position.squares_with(side, kind) {
        push_moves_to_targets(from, attacks(from, all_occ) & !own_occ, out);
    }
}
