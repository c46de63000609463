//! Random index sources for deck shuffling.
//!
//! Shuffling never reaches for a process-wide generator. Callers hand a
//! deck something implementing [`IndexSource`]:
//!
//! - [`ShuffleRng`]: seeded ChaCha8, checkpointable and forkable
//! - [`ScriptedIndices`]: replays a fixed list, for exact swap traces
//! - [`FnIndices`]: wraps any `FnMut(usize) -> usize`
//!
//! ```
//! use rust_cards::core::{IndexSource, ShuffleRng};
//!
//! let mut a = ShuffleRng::new(42);
//! let mut b = ShuffleRng::new(42);
//!
//! // Same seed, same indices.
//! for _ in 0..10 {
//!     assert_eq!(a.next_index(52), b.next_index(52));
//! }
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Supplies uniformly distributed indices for shuffling.
///
/// Implementations must return a value in `[0, bound)` whenever
/// `bound > 0`. Decks never call this with `bound == 0`.
pub trait IndexSource {
    /// Pick an index in `[0, bound)`.
    fn next_index(&mut self, bound: usize) -> usize;
}

impl<S: IndexSource + ?Sized> IndexSource for &mut S {
    fn next_index(&mut self, bound: usize) -> usize {
        (**self).next_index(bound)
    }
}

/// Deterministic RNG for shuffling.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
#[derive(Clone, Debug)]
pub struct ShuffleRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl ShuffleRng {
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
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent, deterministic branch.
    ///
    /// Useful for giving each deck on a table its own stream.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Self::new(fork_seed)
    }

    /// Get the current state for checkpointing.
    #[must_use]
    pub fn state(&self) -> ShuffleRngState {
        ShuffleRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &ShuffleRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

impl IndexSource for ShuffleRng {
    fn next_index(&mut self, bound: usize) -> usize {
        self.inner.gen_range(0..bound)
    }
}

/// Serializable RNG state.
///
/// Uses the ChaCha8 word position, so capture and restore are O(1)
/// regardless of how many indices have been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShuffleRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}

/// Replays a fixed list of indices, cycling when exhausted.
///
/// Each value is reduced modulo the requested bound, so a script written
/// for a 52-card deck stays valid as the deck shrinks. An empty script
/// always yields 0.
///
/// ```
/// use rust_cards::core::{IndexSource, ScriptedIndices};
///
/// let mut script = ScriptedIndices::new(vec![3, 0, 9]);
/// assert_eq!(script.next_index(5), 3);
/// assert_eq!(script.next_index(5), 0);
/// assert_eq!(script.next_index(5), 4); // 9 % 5
/// assert_eq!(script.next_index(5), 3); // cycles
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScriptedIndices {
    values: Vec<usize>,
    cursor: usize,
}

impl ScriptedIndices {
    /// Create a script from the given values.
    #[must_use]
    pub fn new(values: Vec<usize>) -> Self {
        Self { values, cursor: 0 }
    }

    /// Number of indices handed out so far.
    #[must_use]
    pub fn drawn(&self) -> usize {
        self.cursor
    }
}

impl IndexSource for ScriptedIndices {
    fn next_index(&mut self, bound: usize) -> usize {
        if self.values.is_empty() || bound == 0 {
            return 0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value % bound
    }
}

/// Adapts a closure into an [`IndexSource`].
pub struct FnIndices<F>(pub F);

impl<F: FnMut(usize) -> usize> IndexSource for FnIndices<F> {
    fn next_index(&mut self, bound: usize) -> usize {
        (self.0)(bound)
    }
}
