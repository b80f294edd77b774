//! Seeded randomness for rollouts.
//!
//! A training run owns one `RolloutRng`. It never hands out its own stream:
//! each rollout gets a child stream seeded from `next_seed`, drawn before
//! the rollout starts. Rollouts therefore replay identically whether they
//! run in place or on a worker pool.
//!
//! ```
//! use board_rl::core::RolloutRng;
//!
//! let mut run = RolloutRng::new(42);
//! let mut rollout = RolloutRng::new(run.next_seed());
//!
//! let moves = ["a", "b", "c"];
//! assert!(rollout.choose(&moves).is_some());
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// ChaCha8 stream used for exploration, opponent replies and seeding.
#[derive(Clone, Debug)]
pub struct RolloutRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl RolloutRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this stream started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Seed for a child stream.
    pub fn next_seed(&mut self) -> u64 {
        self.inner.next_u64()
    }

    /// `true` with probability `p`, which must lie in `[0, 1]`.
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.inner.gen_bool(p)
    }

    /// Uniform pick from `slice`, `None` when it is empty.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }
}
