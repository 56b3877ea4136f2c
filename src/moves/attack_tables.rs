//! Attack bitboards.
//!
//! Leapers (knight, king, pawn captures) use tables built at compile time
//! from `(file, rank)` offsets. Sliders trace rays against an occupancy
//! bitboard and include the first blocker they hit.

use crate::game_state::chess_types::{Color, Square};

const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

const KING_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

const LIGHT_PAWN_CAPTURE_OFFSETS: [(i32, i32); 2] = [(-1, 1), (1, 1)];
const DARK_PAWN_CAPTURE_OFFSETS: [(i32, i32); 2] = [(-1, -1), (1, -1)];

pub const ORTHOGONAL_DIRECTIONS: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
pub const DIAGONAL_DIRECTIONS: [(i32, i32); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

pub const KNIGHT_ATTACKS: [u64; 64] = build_leaper_table(&KNIGHT_OFFSETS);
pub const KING_ATTACKS: [u64; 64] = build_leaper_table(&KING_OFFSETS);
pub const LIGHT_PAWN_ATTACKS: [u64; 64] = build_leaper_table(&LIGHT_PAWN_CAPTURE_OFFSETS);
pub const DARK_PAWN_ATTACKS: [u64; 64] = build_leaper_table(&DARK_PAWN_CAPTURE_OFFSETS);

#[inline]
pub const fn knight_attacks(square: Square) -> u64 {
    KNIGHT_ATTACKS[square as usize]
}

#[inline]
pub const fn king_attacks(square: Square) -> u64 {
    KING_ATTACKS[square as usize]
}

/// Squares a pawn of `color` standing on `square` captures onto.
#[inline]
pub const fn pawn_attacks(color: Color, square: Square) -> u64 {
    match color {
        Color::Light => LIGHT_PAWN_ATTACKS[square as usize],
        Color::Dark => DARK_PAWN_ATTACKS[square as usize],
    }
}

#[inline]
pub fn rook_attacks(square: Square, occupancy: u64) -> u64 {
    slider_attacks(square, occupancy, &ORTHOGONAL_DIRECTIONS)
}

#[inline]
pub fn bishop_attacks(square: Square, occupancy: u64) -> u64 {
    slider_attacks(square, occupancy, &DIAGONAL_DIRECTIONS)
}

#[inline]
pub fn queen_attacks(square: Square, occupancy: u64) -> u64 {
    rook_attacks(square, occupancy) | bishop_attacks(square, occupancy)
}

pub fn slider_attacks(square: Square, occupancy: u64, directions: &[(i32, i32)]) -> u64 {
    directions
        .iter()
        .fold(0u64, |acc, &(file_step, rank_step)| {
            acc | trace_ray(square, file_step, rank_step, occupancy)
        })
}

fn trace_ray(square: Square, file_step: i32, rank_step: i32, occupancy: u64) -> u64 {
    let mut file = (square % 8) as i32 + file_step;
    let mut rank = (square / 8) as i32 + rank_step;
    let mut attacks = 0u64;

    while (0..8).contains(&file) && (0..8).contains(&rank) {
        let bit = 1u64 << (rank * 8 + file);
        attacks |= bit;

        if (occupancy & bit) != 0 {
            break;
        }

        file += file_step;
        rank += rank_step;
    }

    attacks
}

const fn build_leaper_table(offsets: &[(i32, i32)]) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as i32;
        let rank = (sq / 8) as i32;
        let mut attacks = 0u64;
        let mut i = 0usize;

        while i < offsets.len() {
            let target_file = file + offsets[i].0;
            let target_rank = rank + offsets[i].1;
            if target_file >= 0 && target_file < 8 && target_rank >= 0 && target_rank < 8 {
                attacks |= 1u64 << (target_rank * 8 + target_file);
            }
            i += 1;
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    const D4: Square = 27;

    #[test]
    fn knight_attacks_from_d4_and_corner() {
        assert_eq!(knight_attacks(D4).count_ones(), 8);
        assert_eq!(knight_attacks(0), (1u64 << 10) | (1u64 << 17));
    }

    #[test]
    fn king_attacks_from_a1_has_three_targets() {
        assert_eq!(king_attacks(0).count_ones(), 3);
        assert_eq!(king_attacks(D4).count_ones(), 8);
    }

    #[test]
    fn pawn_attacks_point_toward_the_enemy() {
        let e2 = 12u8;
        assert_eq!(pawn_attacks(Color::Light, e2), (1u64 << 19) | (1u64 << 21));
        let e7 = 52u8;
        assert_eq!(pawn_attacks(Color::Dark, e7), (1u64 << 43) | (1u64 << 45));
        let a2 = 8u8;
        assert_eq!(pawn_attacks(Color::Light, a2), 1u64 << 17);
        assert_eq!(pawn_attacks(Color::Light, 60), 0);
    }

    #[test]
    fn empty_board_slider_reach() {
        assert_eq!(rook_attacks(D4, 0).count_ones(), 14);
        assert_eq!(bishop_attacks(D4, 0).count_ones(), 13);
        assert_eq!(queen_attacks(D4, 0).count_ones(), 27);
    }

    #[test]
    fn blockers_stop_rays_and_are_included() {
        let blocker_on_a4 = 1u64 << 24;
        let attacks = rook_attacks(0, blocker_on_a4);
        assert_ne!(attacks & (1u64 << 24), 0);
        assert_eq!(attacks & (1u64 << 32), 0);

        let blocker_on_e3 = 1u64 << 20;
        let attacks = bishop_attacks(2, blocker_on_e3);
        assert_ne!(attacks & (1u64 << 20), 0);
        assert_eq!(attacks & (1u64 << 29), 0);
    }
}
