//! Deterministic random number generation.
//!
//! The engine never reaches for ambient randomness: the one operation that
//! needs it (shuffling the shoe during setup) takes a `GameRng` as an
//! explicit parameter, so games are reproducible from a seed.
//!
//! ```
//! use uno_engine::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.next_u64(), b.next_u64());
//! ```

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seedable deterministic RNG.
///
/// Uses ChaCha8 for speed while keeping high-quality randomness, so the
/// uniform-shuffle guarantee holds with no positional bias.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random u64 (used to seed fresh version tokens).
    pub fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Shuffle a slice in place.
    ///
    /// `SliceRandom::shuffle` is a Durstenfeld/Fisher-Yates shuffle: every
    /// permutation is equally likely.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}
