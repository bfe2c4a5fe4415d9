//! Deterministic random number generation for dealing.
//!
//! The same seed always produces the same deal, which makes games
//! reproducible for tests, benchmarks and "deal again".
//!
//! ```
//! use klondike_engine::core::GameRng;
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//! let mut left: Vec<u32> = (0..10).collect();
//! let mut right = left.clone();
//! a.shuffle(&mut left);
//! b.shuffle(&mut right);
//! assert_eq!(left, right);
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Seeded shuffle source.
///
/// Uses ChaCha8 so a seed means the same thing on every platform.
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

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this stream started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw a fresh seed from this stream.
    ///
    /// Each deal gets its own seed so a single deal can be replayed
    /// without replaying every deal before it.
    pub fn next_seed(&mut self) -> u64 {
        self.inner.gen()
    }

    /// Shuffle a slice in place (Fisher-Yates).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    /// Get the current state for checkpointing.
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

/// Serializable RNG position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Seed the stream started from
    pub seed: u64,
    /// ChaCha8 word position
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..20 {
            assert_eq!(rng1.next_seed(), rng2.next_seed());
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.next_seed()).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.next_seed()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = GameRng::new(42);
        let mut data: Vec<u8> = (0..52).collect();
        let original = data.clone();

        rng.shuffle(&mut data);

        assert_ne!(data, original);
        data.sort_unstable();
        assert_eq!(data, original);
    }

    #[test]
    fn test_state_restore() {
        let mut rng = GameRng::new(9);
        for _ in 0..5 {
            rng.next_seed();
        }
        let state = rng.state();
        let expected: Vec<_> = (0..5).map(|_| rng.next_seed()).collect();

        let mut restored = GameRng::from_state(&state);
        let actual: Vec<_> = (0..5).map(|_| restored.next_seed()).collect();
        assert_eq!(expected, actual);
    }
}
