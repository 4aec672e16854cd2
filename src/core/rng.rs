//! Cryptographically secure random number generation.
//!
//! Both the secret key and the computer's move come from here. The
//! generator is ChaCha20, which is a CSPRNG: observing earlier output does
//! not let anyone predict later output, so neither side can precompute the
//! computer's move.
//!
//! ## Usage
//!
//! ```
//! use fair_rps::core::GameRng;
//!
//! // Live play: seeded from the operating system.
//! let mut rng = GameRng::from_entropy();
//! assert!(rng.gen_index(5) < 5);
//!
//! // Tests and replays: fixed seed, fixed sequence.
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.gen_index(1000), b.gen_index(1000));
//! ```

use rand::{CryptoRng, Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// CSPRNG used for keys and move selection.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha20Rng,
}

impl GameRng {
    /// Create a reproducible RNG from a fixed seed.
    ///
    /// Only for tests and replays: a known seed makes the computer's move
    /// predictable.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Create an RNG seeded from operating system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha20Rng::from_entropy(),
        }
    }

    /// Uniform index in `[0, bound)`.
    ///
    /// # Panics
    ///
    /// Panics if `bound` is zero.
    pub fn gen_index(&mut self, bound: usize) -> usize {
        self.inner.gen_range(0..bound)
    }

    /// Fixed-size random byte array.
    #[must_use]
    pub fn gen_bytes<const N: usize>(&mut self) -> [u8; N] {
        let mut out = [0u8; N];
        self.inner.fill_bytes(&mut out);
        out
    }
}

impl RngCore for GameRng {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.inner.try_fill_bytes(dest)
    }
}

impl CryptoRng for GameRng {}
