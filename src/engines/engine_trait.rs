//! Move-selection seam.
//!
//! Anything that picks moves for a side (a search, a human adapter, a test
//! driver) sits behind `Engine` and only ever sees the public `Game` surface.

use crate::game_state::game::Game;
use crate::moves::chess_move::Move;

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// One of `game.legal_moves()`, or `None` when there is nothing to play.
    fn choose_move(&mut self, game: &Game) -> Option<Move>;
}
