//! Deterministic random number generation for session setup.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sessions
//! - **Context streams**: Independent sequences for word drawing, colour
//!   assignment and agent assignment
//! - **Serializable**: O(1) state capture and restore
//!
//! ```
//! use rust_codenames::core::GameRng;
//!
//! let rng = GameRng::new(42);
//! let mut words = rng.for_context("words");
//! let mut colors = rng.for_context("colors");
//!
//! // Same seed and context always yield the same draw
//! let mut again = GameRng::new(42).for_context("words");
//! assert_eq!(words.sample_indices(100, 25), again.sample_indices(100, 25));
//! # let _ = colors.gen_range_usize(0..10);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use rustc_hash::FxHasher;
use std::hash::Hasher;

/// Deterministic RNG for drawing boards and assigning seats.
///
/// Uses ChaCha8 for speed while keeping every permutation equally likely.
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

    /// Create an RNG seeded from operating system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    /// The context seed comes from `FxHasher`, whose output is fixed for a
    /// given `rustc-hash` release, so sessions replay across toolchains.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let mut hasher = FxHasher::default();
        hasher.write_u64(self.seed);
        hasher.write(context.as_bytes());
        let context_seed = hasher.finish();

        Self {
            inner: ChaCha8Rng::seed_from_u64(context_seed),
            seed: context_seed,
        }
    }

    /// Draw a seed for a child RNG, advancing this one.
    ///
    /// Successive sessions created from one RNG get distinct seeds while
    /// the whole sequence stays reproducible.
    pub fn next_seed(&mut self) -> u64 {
        self.inner.gen()
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Draw `amount` distinct indices from `0..len`, uniformly without
    /// replacement. The order of the result is itself random.
    ///
    /// Panics if `amount > len`; callers check sizes first.
    pub fn sample_indices(&mut self, len: usize, amount: usize) -> Vec<usize> {
        rand::seq::index::sample(&mut self.inner, len, amount).into_vec()
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many random numbers have been generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
