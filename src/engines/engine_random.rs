//! Random-move opponent.
//!
//! Selects uniformly from the pooled legal moves of every piece of the side
//! to move. It makes no attempt at evaluation.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::engines::engine_trait::MovePolicy;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::all_legal_moves;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    /// Seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible sequence of choices for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MovePolicy for RandomEngine {
    fn name(&self) -> &str {
        "random"
    }

    fn choose_move(&mut self, board: &Board, side_to_move: Color) -> Option<Move> {
        let legal_moves = all_legal_moves(board, side_to_move);
        debug!(
            side = %side_to_move,
            legal_moves = legal_moves.len(),
            "random engine choosing"
        );
        legal_moves.as_slice().choose(&mut self.rng).copied()
    }
}
