use crate::game_state::position::Position;
use crate::moves::chess_move::Move;

/// A legal move together with the position it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratedMove {
    pub mv: Move,
    pub position_after: Position,
}

pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, position: &Position) -> Vec<GeneratedMove>;
}
