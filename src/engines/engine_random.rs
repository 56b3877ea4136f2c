//! Uniform random mover.
//!
//! Selects uniformly from legal moves. The random source is injected so a
//! seeded engine replays the same game every time.

use log::debug;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::engines::engine_trait::Engine;
use crate::game_state::game::Game;
use crate::moves::chess_move::Move;

pub struct RandomEngine<R: Rng = StdRng> {
    rng: R,
}

impl<R: Rng> RandomEngine<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomEngine<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng + Send> Engine for RandomEngine<R> {
    fn name(&self) -> &str {
        "Plum Rules Random"
    }

    fn choose_move(&mut self, game: &Game) -> Option<Move> {
        let legal_moves = game.legal_moves();
        let picked = legal_moves.as_slice().choose(&mut self.rng).copied();

        match picked {
            Some(mv) => debug!("random engine picked {mv} of {}", legal_moves.len()),
            None => debug!("random engine has no legal move"),
        }

        picked
    }
}
