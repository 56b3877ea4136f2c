//! Full legal move generation pipeline.
//!
//! Runs piece-wise pseudo-legal generation, applies each candidate and drops
//! the ones that leave the mover's own king attacked.

use crate::game_state::position::Position;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_sliders::{
    generate_bishop_moves, generate_queen_moves, generate_rook_moves,
};
use crate::move_generation::move_generator::{GeneratedMove, MoveGenerator};
use crate::moves::chess_move::Move;

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, position: &Position) -> Vec<GeneratedMove> {
        let pseudo = generate_pseudo_legal_moves(position);

        let mut legal = Vec::<GeneratedMove>::with_capacity(pseudo.len());
        for mv in pseudo {
            let next = apply_move(position, mv);

            // Illegal if own king is in check after move.
            if is_king_in_check(&next, position.side_to_move) {
                continue;
            }

            legal.push(GeneratedMove {
                mv,
                position_after: next,
            });
        }

        legal
    }
}

/// Every move the side to move could make ignoring self-check.
pub fn generate_pseudo_legal_moves(position: &Position) -> Vec<Move> {
    let mut pseudo = Vec::<Move>::with_capacity(128);

    generate_pawn_moves(position, &mut pseudo);
    generate_knight_moves(position, &mut pseudo);
    generate_bishop_moves(position, &mut pseudo);
    generate_rook_moves(position, &mut pseudo);
    generate_queen_moves(position, &mut pseudo);
    generate_king_moves(position, &mut pseudo);

    pseudo
}

/// Legal moves for the side to move, without the resulting positions.
pub fn legal_moves(position: &Position) -> Vec<Move> {
    LegalMoveGenerator
        .generate_legal_moves(position)
        .into_iter()
        .map(|generated| generated.mv)
        .collect()
}
