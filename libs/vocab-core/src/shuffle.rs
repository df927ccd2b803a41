//! Randomness source for session ordering.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Reorders a slice in place.
pub trait Shuffler {
    fn shuffle<T>(&mut self, items: &mut [T]);
}

/// Uniform Fisher-Yates shuffle driven by a `rand` generator.
#[derive(Debug, Clone)]
pub struct RandShuffler<R: Rng> {
    rng: R,
}

impl<R: Rng> RandShuffler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandShuffler<SmallRng> {
    /// Reproducible shuffler for tests and replays.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(SmallRng::from_entropy())
    }
}

impl<R: Rng> Shuffler for RandShuffler<R> {
    fn shuffle<T>(&mut self, items: &mut [T]) {
        SliceRandom::shuffle(items, &mut self.rng);
    }
}
