//! Injectable randomness for random-move players.
//!
//! ## Key Features
//!
//! - **Injectable**: strategies draw through the `RandomSource` trait, never a global RNG
//! - **Deterministic**: same seed produces identical moves
//! - **Forkable**: one session seed can feed several independent players
//!
//! ```
//! use number_game::core::{GameRng, RandomSource};
//!
//! let mut rng = GameRng::new(42);
//! let mut other = GameRng::new(42);
//!
//! assert_eq!(rng.uniform_inclusive(1, 6), other.uniform_inclusive(1, 6));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniformly distributed integers.
pub trait RandomSource {
    /// Draw an integer uniformly from `low..=high`.
    ///
    /// Callers guarantee `low <= high`.
    fn uniform_inclusive(&mut self, low: i64, high: i64) -> i64;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn uniform_inclusive(&mut self, low: i64, high: i64) -> i64 {
        (**self).uniform_inclusive(low, high)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn uniform_inclusive(&mut self, low: i64, high: i64) -> i64 {
        (**self).uniform_inclusive(low, high)
    }
}

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }
}

impl RandomSource for GameRng {
    fn uniform_inclusive(&mut self, low: i64, high: i64) -> i64 {
        self.inner.gen_range(low..=high)
    }
}
