//! RNG module - seeded deck shuffling
//!
//! Wraps a ChaCha8 generator so that the same seed always deals the same deck.
//! Shuffling is a uniform Fisher-Yates permutation (`SliceRandom::shuffle`).

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic shuffler for one session's deck
#[derive(Debug, Clone)]
pub struct DeckRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl DeckRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Shuffle a slice in place (uniform over all orderings)
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    /// Seed this RNG was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }
}
