use log::trace;

use crate::game_state::position::Position;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::{GeneratedMove, MoveGenerator};
use crate::moves::chess_move::Move;

/// Leaf-node tallies of a perft walk. Every field except `nodes` counts the
/// leaves whose last move had that property.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

pub fn perft<G: MoveGenerator>(generator: &G, position: &Position, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in generator.generate_legal_moves(position) {
        perft_recurse(generator, position, &mv, depth, &mut total);
    }

    total
}

/// Perft with the standard legal move generator.
#[inline]
pub fn perft_legal(position: &Position, depth: u8) -> PerftCounts {
    perft(&LegalMoveGenerator, position, depth)
}

/// Node count below each root move, in generation order.
pub fn perft_divide<G: MoveGenerator>(
    generator: &G,
    position: &Position,
    depth: u8,
) -> Vec<(Move, usize)> {
    if depth == 0 {
        return Vec::new();
    }

    generator
        .generate_legal_moves(position)
        .into_iter()
        .map(|root| {
            let mut counts = PerftCounts::default();
            perft_recurse(generator, position, &root, depth, &mut counts);
            trace!("perft divide {}: {}", root.mv, counts.nodes);
            (root.mv, counts.nodes)
        })
        .collect()
}

fn perft_recurse<G: MoveGenerator>(
    generator: &G,
    parent: &Position,
    generated: &GeneratedMove,
    depth_remaining: u8,
    counts: &mut PerftCounts,
) {
    let after = &generated.position_after;

    if depth_remaining == 1 {
        let mut leaf = PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
        let mv = generated.mv;

        if mv.is_capture(parent) {
            leaf.captures = 1;
        }
        if mv.is_en_passant(parent) {
            leaf.en_passant = 1;
        }
        if mv.is_castling(parent) {
            leaf.castles = 1;
        }
        if mv.is_promotion() {
            leaf.promotions = 1;
        }
        if is_king_in_check(after, after.side_to_move) {
            leaf.checks = 1;
            if generator.generate_legal_moves(after).is_empty() {
                leaf.checkmates = 1;
            }
        }

        counts.merge(leaf);
        return;
    }

    for child in generator.generate_legal_moves(after) {
        perft_recurse(generator, after, &child, depth_remaining - 1, counts);
    }
}
