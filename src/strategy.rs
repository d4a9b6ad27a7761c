//! Move pickers for non-human players.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::moves::Move;

/// Chooses one move from the legal set, or `None` if the set is empty.
pub trait Strategy {
    fn choose(&mut self, legal_moves: &[Move]) -> Option<Move>;
}

/// Any closure over the legal set is a strategy; handy for scripted tests.
impl<F> Strategy for F
where
    F: FnMut(&[Move]) -> Option<Move>,
{
    fn choose(&mut self, legal_moves: &[Move]) -> Option<Move> {
        self(legal_moves)
    }
}

/// The CPU opponent: a uniformly random legal move.
pub struct RandomStrategy<R = StdRng> {
    rng: R,
}

impl RandomStrategy<StdRng> {
    pub fn new() -> Self {
        RandomStrategy { rng: StdRng::from_entropy() }
    }

    /// Reproducible choices for a given seed.
    pub fn seeded(seed: u64) -> Self {
        RandomStrategy { rng: StdRng::seed_from_u64(seed) }
    }
}

impl Default for RandomStrategy<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomStrategy<R> {
    pub fn with_rng(rng: R) -> Self {
        RandomStrategy { rng }
    }
}

impl<R: Rng> Strategy for RandomStrategy<R> {
    fn choose(&mut self, legal_moves: &[Move]) -> Option<Move> {
        legal_moves.choose(&mut self.rng).copied()
    }
}
