//! Terminal-outcome classification.
//!
//! `detect_result` looks at a position and the positions that led to it and
//! reports whether the game is still going. The draw rules are checked
//! first, in a fixed order, then the side to move's legal moves decide
//! between play continuing, checkmate and stalemate.

use std::fmt;

use crate::game_state::chess_rules::{MaterialDrawPolicy, RulesConfig};
use crate::game_state::{chess_types::*, position::Position};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawReason {
    Stalemate,
    FiftyMoveRule,
    ThreefoldRepetition,
    InsufficientMaterial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameResult {
    InProgress,
    Decisive { winner: Color },
    Draw(DrawReason),
}

impl GameResult {
    #[inline]
    pub fn is_over(self) -> bool {
        self != GameResult::InProgress
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            GameResult::InProgress => "*",
            GameResult::Decisive {
                winner: Color::Light,
            } => "1-0",
            GameResult::Decisive {
                winner: Color::Dark,
            } => "0-1",
            GameResult::Draw(_) => "1/2-1/2",
        };
        f.write_str(token)
    }
}

/// Classifies `position`, given every earlier position of the game.
pub fn detect_result<'a, I>(position: &Position, history: I, rules: &RulesConfig) -> GameResult
where
    I: IntoIterator<Item = &'a Position>,
{
    if position.halfmove_clock >= rules.fifty_move_limit {
        return GameResult::Draw(DrawReason::FiftyMoveRule);
    }

    if is_insufficient_material(position, rules.material_draw_policy) {
        return GameResult::Draw(DrawReason::InsufficientMaterial);
    }

    let earlier = history
        .into_iter()
        .filter(|prior| prior.same_placement(position))
        .count();
    if earlier + 1 >= rules.repetition_limit {
        return GameResult::Draw(DrawReason::ThreefoldRepetition);
    }

    if !LegalMoveGenerator.generate_legal_moves(position).is_empty() {
        return GameResult::InProgress;
    }

    let side = position.side_to_move;
    if is_king_in_check(position, side) {
        GameResult::Decisive {
            winner: side.opposite(),
        }
    } else {
        GameResult::Draw(DrawReason::Stalemate)
    }
}

pub fn is_insufficient_material(position: &Position, policy: MaterialDrawPolicy) -> bool {
    let mut minors = 0usize;
    let mut knights = 0usize;
    let mut bishop_square_colors = [false; 2];

    for (sq, piece) in position.board.iter().enumerate() {
        match piece.kind() {
            None | Some(PieceKind::King) => {}
            Some(PieceKind::Pawn | PieceKind::Rook | PieceKind::Queen) => return false,
            Some(PieceKind::Knight) => {
                minors += 1;
                knights += 1;
            }
            Some(PieceKind::Bishop) => {
                minors += 1;
                let sq = sq as Square;
                bishop_square_colors[((square_file(sq) + square_rank(sq)) % 2) as usize] = true;
            }
        }
    }

    match policy {
        MaterialDrawPolicy::KingsOnly => minors == 0,
        MaterialDrawPolicy::Standard => {
            minors <= 1 || (knights == 0 && !(bishop_square_colors[0] && bishop_square_colors[1]))
        }
    }
}
