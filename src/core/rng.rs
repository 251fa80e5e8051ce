//! Seeded randomness for dealing and strategies.
//!
//! A game seed feeds two named streams: `"deal"` shuffles the deck and
//! `"play"` drives strategy choices in the simulation driver. Drawing from
//! one never shifts the other.
//!
//! ```
//! use rust_tichu::core::GameRng;
//!
//! let mut a = GameRng::new(7).for_context("deal");
//! let mut b = GameRng::new(7).for_context("deal");
//! let mut deck_a: Vec<u8> = (0..56).collect();
//! let mut deck_b = deck_a.clone();
//! a.shuffle(&mut deck_a);
//! b.shuffle(&mut deck_b);
//! assert_eq!(deck_a, deck_b);
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Multiplier of the Fx hash, applied to 64-bit words on every target.
const CONTEXT_MIX: u64 = 0x51_7c_c1_b7_27_22_0a_95;

fn mix(hash: u64, word: u64) -> u64 {
    (hash.rotate_left(5) ^ word).wrapping_mul(CONTEXT_MIX)
}

/// ChaCha8 stream with its originating seed.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Stream for a named purpose, derived from this stream's seed only.
    ///
    /// The seed and the context bytes are folded as fixed-width `u64`
    /// words, so 32-bit and 64-bit targets derive the same stream.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let seed = context
            .bytes()
            .fold(mix(0, self.seed), |hash, byte| mix(hash, u64::from(byte)));
        Self::new(seed)
    }

    /// Uniform index below `len`. `len` must be non-zero.
    pub fn gen_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }

    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    /// Uniform pick, `None` for an empty slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }

    /// Position in the stream, for saving alongside a game snapshot.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut rng = Self::new(state.seed);
        rng.inner.set_word_pos(state.word_pos);
        rng
    }
}

/// Serializable stream position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    pub word_pos: u128,
}
